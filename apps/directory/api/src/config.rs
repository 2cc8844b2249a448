use core_config::{app_info, env_or_default, server::ServerConfig, AppInfo, FromEnv};

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Gateway configuration
/// Composes shared config components from the `core_config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
    /// Address of the backing user directory gRPC service
    pub users_service_addr: String,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?; // Uses defaults: HOST=0.0.0.0, PORT=8080
        let users_service_addr =
            env_or_default("USERS_SERVICE_ADDR", "http://[::1]:50051");

        Ok(Self {
            app: app_info!(),
            server,
            environment,
            users_service_addr,
        })
    }
}
