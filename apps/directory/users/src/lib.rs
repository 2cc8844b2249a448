//! Users gRPC Service
//!
//! Backend of the user directory. Serves the four directory operations over
//! gRPC and proxies the external document store for persistence.
//!
//! ## Architecture
//!
//! ```text
//! Gateway
//!   ↓ (gRPC with Zstd compression)
//! UserServiceImpl (service.rs)
//!   ↓ (proto ↔ domain mapping, errors into response payloads)
//! UserDirectoryService (domain layer)
//!   ↓
//! HttpUserStore
//!   ↓ (HTTP, query-filtered GET / POST)
//! Document store
//! ```
//!
//! ## Modules
//!
//! - `server`: server initialization and lifecycle
//! - `service`: gRPC service implementation (UserServiceImpl)

pub mod server;
pub mod service;

// Re-export for convenience
pub use server::run;
pub use service::UserServiceImpl;
