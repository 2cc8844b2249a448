use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use chrono::{Duration, Utc};
use core_config::{env_or_default, ConfigError, FromEnv};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{UserError, UserResult};

/// Fallback signing secret for local development.
const DEV_JWT_SECRET: &str = "insecure-development-secret-change-me!!";

/// Default token lifetime: 24 hours.
const DEFAULT_TOKEN_TTL_SECONDS: i64 = 86_400;

/// Argon2 work factors.
///
/// The defaults are the argon2 crate's current baseline parameters.
#[derive(Clone, Debug)]
pub struct HashConfig {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for HashConfig {
    fn default() -> Self {
        Self {
            memory_kib: 19_456,
            iterations: 2,
            parallelism: 1,
        }
    }
}

impl FromEnv for HashConfig {
    /// Reads from environment variables with defaults:
    /// - PASSWORD_HASH_MEMORY_KIB: defaults to 19456
    /// - PASSWORD_HASH_ITERATIONS: defaults to 2
    /// - PASSWORD_HASH_PARALLELISM: defaults to 1
    fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            memory_kib: env_u32("PASSWORD_HASH_MEMORY_KIB", defaults.memory_kib)?,
            iterations: env_u32("PASSWORD_HASH_ITERATIONS", defaults.iterations)?,
            parallelism: env_u32("PASSWORD_HASH_PARALLELISM", defaults.parallelism)?,
        })
    }
}

/// Token signing configuration.
#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    pub ttl_seconds: i64,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>, ttl_seconds: i64) -> Self {
        Self {
            secret: secret.into(),
            ttl_seconds,
        }
    }
}

impl FromEnv for JwtConfig {
    /// Reads from environment variables with defaults:
    /// - JWT_SECRET: defaults to a development secret
    /// - JWT_TTL_SECONDS: defaults to 86400 (24 hours)
    fn from_env() -> Result<Self, ConfigError> {
        let secret = env_or_default("JWT_SECRET", DEV_JWT_SECRET);
        if secret.len() < 32 {
            tracing::warn!(
                "JWT_SECRET is shorter than 32 characters; generate one with: openssl rand -base64 32"
            );
        }

        let ttl_seconds = env_or_default("JWT_TTL_SECONDS", &DEFAULT_TOKEN_TTL_SECONDS.to_string())
            .parse()
            .map_err(|e| ConfigError::ParseError {
                key: "JWT_TTL_SECONDS".to_string(),
                details: format!("{}", e),
            })?;

        Ok(Self { secret, ttl_seconds })
    }
}

/// Claims carried by an issued token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject: the user id.
    pub sub: String,
    pub email: String,
    /// Issued at (unix seconds).
    pub iat: i64,
    /// Expiration (unix seconds).
    pub exp: i64,
}

/// Password hashing/verification and token issuance.
///
/// Token verification is a caller concern; this service only signs.
#[derive(Clone)]
pub struct CredentialService {
    argon2: Argon2<'static>,
    jwt: JwtConfig,
}

impl CredentialService {
    pub fn new(hash: &HashConfig, jwt: JwtConfig) -> UserResult<Self> {
        let params = Params::new(hash.memory_kib, hash.iterations, hash.parallelism, None)
            .map_err(|e| UserError::PasswordHash(e.to_string()))?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
            jwt,
        })
    }

    /// Hash a plaintext password with a fresh OS-random salt.
    pub fn hash_password(&self, password: &str) -> UserResult<String> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| UserError::PasswordHash(e.to_string()))
    }

    /// Verify a plaintext password against a stored PHC hash string.
    pub fn verify_password(&self, password: &str, hash: &str) -> UserResult<bool> {
        let parsed_hash =
            PasswordHash::new(hash).map_err(|e| UserError::PasswordHash(e.to_string()))?;

        Ok(self
            .argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Issue an HS256 token asserting `{sub: user_id, email}` with the
    /// configured expiry window.
    pub fn issue_token(&self, user_id: Uuid, email: &str) -> UserResult<String> {
        let now = Utc::now();
        let claims = TokenClaims {
            sub: user_id.to_string(),
            email: email.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(self.jwt.ttl_seconds)).timestamp(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt.secret.as_bytes()),
        )
        .map_err(|e| UserError::Token(e.to_string()))
    }
}

fn env_u32(key: &str, default: u32) -> Result<u32, ConfigError> {
    env_or_default(key, &default.to_string())
        .parse()
        .map_err(|e: std::num::ParseIntError| ConfigError::ParseError {
            key: key.to_string(),
            details: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{decode, DecodingKey, Validation};

    const SECRET: &str = "unit-test-secret-unit-test-secret-!!";

    fn credentials() -> CredentialService {
        CredentialService::new(&HashConfig::default(), JwtConfig::new(SECRET, 3600)).unwrap()
    }

    #[test]
    fn hash_verify_round_trip() {
        let credentials = credentials();
        let hash = credentials.hash_password("correct horse battery staple").unwrap();

        assert!(credentials
            .verify_password("correct horse battery staple", &hash)
            .unwrap());
        assert!(!credentials
            .verify_password("incorrect horse", &hash)
            .unwrap());
    }

    #[test]
    fn hashes_are_salted() {
        let credentials = credentials();
        let first = credentials.hash_password("hunter2!").unwrap();
        let second = credentials.hash_password("hunter2!").unwrap();

        assert_ne!(first, second);
        assert!(first.starts_with("$argon2id$"));
    }

    #[test]
    fn issued_token_decodes_to_subject_email_and_expiry() {
        let credentials = credentials();
        let user_id = Uuid::new_v4();

        let token = credentials.issue_token(user_id, "ada@example.com").unwrap();

        let decoded = decode::<TokenClaims>(
            &token,
            &DecodingKey::from_secret(SECRET.as_bytes()),
            &Validation::default(),
        )
        .unwrap();

        assert_eq!(decoded.claims.sub, user_id.to_string());
        assert_eq!(decoded.claims.email, "ada@example.com");
        assert_eq!(decoded.claims.exp - decoded.claims.iat, 3600);
    }

    #[test]
    fn rejects_unusable_work_factors() {
        let result = CredentialService::new(
            &HashConfig {
                memory_kib: 0,
                iterations: 0,
                parallelism: 0,
            },
            JwtConfig::new(SECRET, 3600),
        );
        assert!(result.is_err());
    }
}
