use std::sync::Arc;
use uuid::Uuid;

use crate::credentials::CredentialService;
use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, User, UserPage, UserProfile, UserSummary, ALLOWED_LIMITS};
use crate::repository::UserStore;

/// Policy layer of the user directory.
///
/// Composes the store capability and the credential service into the four
/// directory operations. Holds no state of its own; every call is a fresh
/// round trip against the store.
#[derive(Clone)]
pub struct UserDirectoryService<S: UserStore> {
    store: Arc<S>,
    credentials: CredentialService,
}

impl<S: UserStore> UserDirectoryService<S> {
    pub fn new(store: S, credentials: CredentialService) -> Self {
        Self {
            store: Arc::new(store),
            credentials,
        }
    }

    /// Create a user, rejecting emails that already have a record.
    ///
    /// The existence check and the insert are separate store calls; two
    /// concurrent creates with the same email can both pass the check.
    pub async fn create_user(&self, input: CreateUser) -> UserResult<Uuid> {
        let existing = self
            .store
            .find_by_email(&input.email)
            .await
            .map_err(|e| UserError::store("Failed to create user", e))?;

        if existing.is_some() {
            return Err(UserError::DuplicateEmail);
        }

        let password = self.credentials.hash_password(&input.password)?;

        let user = User {
            user_id: Uuid::new_v4(),
            first_name: input.first_name,
            last_name: input.last_name,
            company: input.company,
            email: input.email,
            password,
        };

        self.store
            .insert(user.clone())
            .await
            .map_err(|e| UserError::store("Failed to create user", e))?;

        tracing::info!(user_id = %user.user_id, email = %user.email, "Created user");
        Ok(user.user_id)
    }

    /// Look up a user by id; the returned profile never carries the hash.
    pub async fn get_user(&self, user_id: Uuid) -> UserResult<UserProfile> {
        let user = self
            .store
            .find_by_id(user_id)
            .await
            .map_err(|e| UserError::store("User not found", e))?
            .ok_or(UserError::NotFound)?;

        Ok(user.into())
    }

    /// Page through all users, ordered by email.
    ///
    /// `limit` must come from [`ALLOWED_LIMITS`]. Offsets beyond the end
    /// yield an empty page with the true total, not an error.
    pub async fn list_users(&self, offset: u32, limit: u32) -> UserResult<UserPage> {
        if !ALLOWED_LIMITS.contains(&limit) {
            return Err(UserError::InvalidLimit(limit));
        }

        let mut users = self
            .store
            .list_all()
            .await
            .map_err(|e| UserError::store("Failed to get users", e))?;

        let total = users.len();
        users.sort_by_cached_key(|u| email_sort_key(&u.email));

        let users = users
            .into_iter()
            .skip(offset as usize)
            .take(limit.min(25) as usize)
            .map(|u| UserSummary {
                user_id: u.user_id,
                email: u.email,
            })
            .collect();

        Ok(UserPage {
            users,
            total,
            offset,
            limit,
        })
    }

    /// Verify credentials and issue a signed token.
    ///
    /// An unknown email and a wrong password produce the same error.
    pub async fn login_user(&self, email: &str, password: &str) -> UserResult<String> {
        let user = self
            .store
            .find_by_email(email)
            .await
            .map_err(|e| UserError::store("Login failed", e))?
            .ok_or(UserError::InvalidCredentials)?;

        if !self.credentials.verify_password(password, &user.password)? {
            return Err(UserError::InvalidCredentials);
        }

        self.credentials.issue_token(user.user_id, &user.email)
    }
}

/// Ordering key approximating locale collation: case-insensitive primary
/// strength, with the original spelling as a stable tiebreak.
fn email_sort_key(email: &str) -> (String, String) {
    (email.to_lowercase(), email.to_string())
}
