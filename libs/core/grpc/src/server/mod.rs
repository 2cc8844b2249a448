mod config;

pub use config::GrpcServerConfig;
