use thiserror::Error;

/// Failures reaching or decoding the external document store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    Transport(String),

    #[error("store responded with status {0}")]
    UnexpectedStatus(u16),

    #[error("could not decode store response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        StoreError::Transport(err.to_string())
    }
}

/// Domain failures of the directory service.
///
/// Display strings are the exact texts surfaced to callers in response
/// payloads; the gateway passes them through unmodified.
#[derive(Debug, Error)]
pub enum UserError {
    #[error("User with this email already exists")]
    DuplicateEmail,

    #[error("User not found")]
    NotFound,

    #[error("Limit must be 5, 10, or 25")]
    InvalidLimit(u32),

    // Covers both unknown email and wrong password; callers cannot tell
    // which, so the response does not enumerate users.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("{context}: {source}")]
    Store {
        context: &'static str,
        source: StoreError,
    },

    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    #[error("Token issuance error: {0}")]
    Token(String),
}

pub type UserResult<T> = Result<T, UserError>;

impl UserError {
    /// Wrap a store failure in the failing operation's error prefix.
    pub(crate) fn store(context: &'static str, source: StoreError) -> Self {
        UserError::Store { context, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_errors_carry_operation_context() {
        let err = UserError::store(
            "Failed to create user",
            StoreError::Transport("connection refused".to_string()),
        );
        assert_eq!(err.to_string(), "Failed to create user: connection refused");
    }

    #[test]
    fn credential_failures_share_one_message() {
        assert_eq!(UserError::InvalidCredentials.to_string(), "Invalid credentials");
    }
}
