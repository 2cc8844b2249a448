use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Page sizes accepted by the listing operation.
pub const ALLOWED_LIMITS: [u32; 3] = [5, 10, 25];

/// User record as persisted in the document store.
///
/// Serializes with camelCase keys, matching the collection's JSON documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier, assigned at creation and immutable.
    pub user_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    /// Unique key across all records; compared case-sensitively.
    pub email: String,
    /// Argon2 hash in PHC string form, never the plaintext.
    pub password: String,
}

/// Input for creating a user; `password` is plaintext until hashed by the
/// service.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    pub email: String,
    pub password: String,
}

/// Single-user read model; the password hash is never echoed back.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub user_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    pub email: String,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            user_id: user.user_id,
            first_name: user.first_name,
            last_name: user.last_name,
            company: user.company,
            email: user.email,
        }
    }
}

/// Listing projection: id and email only.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub user_id: Uuid,
    pub email: String,
}

/// One page of the email-ordered listing.
///
/// `total` counts all records in the store at read time, not the page;
/// `offset` and `limit` echo the request.
#[derive(Debug, Clone)]
pub struct UserPage {
    pub users: Vec<UserSummary>,
    pub total: usize,
    pub offset: u32,
    pub limit: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_serializes_with_camel_case_keys() {
        let user = User {
            user_id: Uuid::new_v4(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            company: "Analytical Engines".to_string(),
            email: "ada@example.com".to_string(),
            password: "$argon2id$stub".to_string(),
        };

        let value = serde_json::to_value(&user).unwrap();
        assert!(value.get("userId").is_some());
        assert!(value.get("firstName").is_some());
        assert!(value.get("user_id").is_none());
    }

    #[test]
    fn profile_drops_the_password_field() {
        let user = User {
            user_id: Uuid::new_v4(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            company: "Analytical Engines".to_string(),
            email: "ada@example.com".to_string(),
            password: "$argon2id$stub".to_string(),
        };

        let profile: UserProfile = user.into();
        let value = serde_json::to_value(&profile).unwrap();
        assert!(value.get("password").is_none());
        assert_eq!(value["email"], "ada@example.com");
    }
}
