//! gRPC plumbing shared by the directory services.
//!
//! The `channel` module builds tuned client channels; the `server` module
//! (behind the `server` feature) carries listen-address configuration for
//! gRPC server binaries.

pub mod channel;
pub mod error;
#[cfg(feature = "server")]
pub mod server;

pub use channel::{connect, ChannelConfig};
pub use error::{GrpcError, GrpcResult};
#[cfg(feature = "server")]
pub use server::GrpcServerConfig;
