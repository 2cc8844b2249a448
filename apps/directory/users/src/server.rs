//! gRPC server initialization and lifecycle management
//!
//! Wires configuration → store adapter → credential service → directory
//! service, registers the health service, and runs the tonic server.

use core_config::tracing::init_tracing;
use core_config::{Environment, FromEnv};
use domain_users::{
    CredentialService, HashConfig, HttpUserStore, JwtConfig, StoreConfig, UserDirectoryService,
};
use eyre::{Result, WrapErr};
use grpc_client::GrpcServerConfig;
use rpc::user::user_service_server::UserServiceServer;
use tonic::transport::Server;
use tonic_health::server::health_reporter;
use tracing::info;

use crate::service::UserServiceImpl;

/// Run the gRPC server
///
/// # Errors
///
/// Returns an error if configuration is invalid, the listen address cannot
/// be parsed or bound, or the server fails while running. Store outages are
/// NOT startup failures: every operation reaches the store per request and
/// reports its own error.
pub async fn run() -> Result<()> {
    // Initialize tracing (env-aware: JSON for prod, pretty for dev)
    let environment = Environment::from_env();
    init_tracing(&environment);

    let store_config = StoreConfig::from_env().wrap_err("Failed to load store configuration")?;
    let hash_config =
        HashConfig::from_env().wrap_err("Failed to load password hash configuration")?;
    let jwt_config = JwtConfig::from_env().wrap_err("Failed to load token configuration")?;
    let server_config =
        GrpcServerConfig::from_env().wrap_err("Failed to load gRPC server configuration")?;

    info!("Proxying user records at {}", store_config.base_url);

    // Create store adapter, credential service, and the directory service
    let store = HttpUserStore::new(&store_config);
    let credentials = CredentialService::new(&hash_config, jwt_config)?;
    let service = UserDirectoryService::new(store, credentials);

    // Create gRPC service implementation
    let user_service = UserServiceImpl::new(service);

    let addr_str = server_config.address();
    let addr = addr_str
        .parse()
        .wrap_err_with(|| format!("Failed to parse server address: {}", addr_str))?;

    // Health service for readiness/liveness probes
    let (mut health_reporter, health_service) = health_reporter();
    health_reporter
        .set_service_status("user.UserService", tonic_health::ServingStatus::Serving)
        .await;
    health_reporter
        .set_service_status("", tonic_health::ServingStatus::Serving)
        .await;

    info!("UserService listening on {}", addr);

    Server::builder()
        .add_service(health_service)
        .add_service(
            UserServiceServer::new(user_service)
                .accept_compressed(tonic::codec::CompressionEncoding::Zstd)
                .send_compressed(tonic::codec::CompressionEncoding::Zstd),
        )
        .serve(addr)
        .await
        .wrap_err("gRPC server failed")?;

    Ok(())
}
