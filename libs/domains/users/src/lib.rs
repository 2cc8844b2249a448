//! Users Domain
//!
//! Policy layer of the user directory: email uniqueness, identifier
//! assignment, pagination/sorting, and credential handling. Persistence is
//! delegated to an external document store reachable over HTTP; this crate
//! owns no durable state.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────┐
//! │ UserDirectoryService │  ← uniqueness, pagination, login policy
//! └──────────┬───────────┘
//!            │
//!     ┌──────┴────────┐
//!     │               │
//! ┌───▼────────┐ ┌────▼──────────────┐
//! │ UserStore  │ │ CredentialService │  ← argon2 hashing, token issuance
//! └───┬────────┘ └───────────────────┘
//!     │
//! ┌───▼───────────────────────────┐
//! │ HttpUserStore / InMemoryStore │  ← document-store adapter / test fake
//! └───────────────────────────────┘
//! ```
//!
//! Every operation is a single round trip against the store; nothing is
//! retried and no operation is fatal to the process.

pub mod credentials;
pub mod error;
pub mod models;
pub mod repository;
pub mod service;
pub mod store;

// Re-export commonly used types
pub use credentials::{CredentialService, HashConfig, JwtConfig, TokenClaims};
pub use error::{StoreError, UserError, UserResult};
pub use models::{CreateUser, User, UserPage, UserProfile, UserSummary, ALLOWED_LIMITS};
pub use repository::{InMemoryUserStore, StoreResult, UserStore};
pub use service::UserDirectoryService;
pub use store::{HttpUserStore, StoreConfig};
