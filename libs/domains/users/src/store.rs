use async_trait::async_trait;
use core_config::{env_or_default, ConfigError, FromEnv};
use reqwest::Client;
use uuid::Uuid;

use crate::error::StoreError;
use crate::models::User;
use crate::repository::{StoreResult, UserStore};

/// Location of the external document store.
#[derive(Clone, Debug)]
pub struct StoreConfig {
    pub base_url: String,
}

impl FromEnv for StoreConfig {
    /// Reads `STORE_URL`, defaulting to `http://localhost:3000`.
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: env_or_default("STORE_URL", "http://localhost:3000"),
        })
    }
}

/// [`UserStore`] backed by an HTTP document collection at `<base_url>/users`.
///
/// Reads are `GET` with optional `email`/`userId` query filters; writes are
/// `POST` of the full record. No retry and no caching; transport errors
/// propagate untouched.
#[derive(Clone)]
pub struct HttpUserStore {
    client: Client,
    collection_url: String,
}

impl HttpUserStore {
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            client: Client::new(),
            collection_url: format!("{}/users", config.base_url.trim_end_matches('/')),
        }
    }

    async fn query(&self, params: &[(&str, &str)]) -> StoreResult<Vec<User>> {
        let response = self
            .client
            .get(&self.collection_url)
            .query(params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::UnexpectedStatus(status.as_u16()));
        }

        response
            .json::<Vec<User>>()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))
    }
}

#[async_trait]
impl UserStore for HttpUserStore {
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        Ok(self.query(&[("email", email)]).await?.into_iter().next())
    }

    async fn find_by_id(&self, user_id: Uuid) -> StoreResult<Option<User>> {
        let id = user_id.to_string();
        Ok(self
            .query(&[("userId", id.as_str())])
            .await?
            .into_iter()
            .next())
    }

    async fn list_all(&self) -> StoreResult<Vec<User>> {
        self.query(&[]).await
    }

    async fn insert(&self, user: User) -> StoreResult<()> {
        let response = self
            .client
            .post(&self.collection_url)
            .json(&user)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::UnexpectedStatus(status.as_u16()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_url_tolerates_trailing_slash() {
        let store = HttpUserStore::new(&StoreConfig {
            base_url: "http://localhost:3000/".to_string(),
        });
        assert_eq!(store.collection_url, "http://localhost:3000/users");
    }
}
