//! Generated gRPC bindings for the user directory wire contract.
//!
//! The source of truth is `proto/user.proto`; the code under `src/gen/` is
//! committed output of the buf generation workflow and is not rebuilt by
//! cargo.

pub mod gen;

pub use gen::*;
