use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::StoreError;
use crate::models::User;

pub type StoreResult<T> = Result<T, StoreError>;

/// Capability surface of the backing document store.
///
/// Mirrors the store's query semantics: email lookups are exact and
/// case-sensitive, and `insert` enforces nothing — uniqueness is directory
/// policy, applied before the write.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Find the record with exactly this email, if any.
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<User>>;

    /// Find the record with this id, if any.
    async fn find_by_id(&self, user_id: Uuid) -> StoreResult<Option<User>>;

    /// Fetch every record in the collection.
    async fn list_all(&self) -> StoreResult<Vec<User>>;

    /// Append a record to the collection.
    async fn insert(&self, user: User) -> StoreResult<()>;
}

/// In-memory stand-in for the document store (tests, local development).
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserStore {
    users: Arc<RwLock<Vec<User>>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, user_id: Uuid) -> StoreResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.user_id == user_id).cloned())
    }

    async fn list_all(&self) -> StoreResult<Vec<User>> {
        let users = self.users.read().await;
        Ok(users.clone())
    }

    async fn insert(&self, user: User) -> StoreResult<()> {
        let mut users = self.users.write().await;
        users.push(user);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(email: &str) -> User {
        User {
            user_id: Uuid::new_v4(),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            company: "ACME Inc.".to_string(),
            email: email.to_string(),
            password: "$argon2id$stub".to_string(),
        }
    }

    #[tokio::test]
    async fn insert_then_find_by_id() {
        let store = InMemoryUserStore::new();
        let user = record("test@example.com");
        let id = user.user_id;

        store.insert(user).await.unwrap();

        let fetched = store.find_by_id(id).await.unwrap();
        assert_eq!(fetched.unwrap().email, "test@example.com");
        assert!(store.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn email_lookup_is_case_sensitive() {
        let store = InMemoryUserStore::new();
        store.insert(record("test@example.com")).await.unwrap();

        assert!(store
            .find_by_email("test@example.com")
            .await
            .unwrap()
            .is_some());
        assert!(store
            .find_by_email("TEST@EXAMPLE.COM")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn insert_does_not_enforce_uniqueness() {
        // The real store is a dumb collection; duplicate suppression lives in
        // the service.
        let store = InMemoryUserStore::new();
        store.insert(record("dup@example.com")).await.unwrap();
        store.insert(record("dup@example.com")).await.unwrap();

        assert_eq!(store.list_all().await.unwrap().len(), 2);
    }
}
