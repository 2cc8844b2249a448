use axum_helpers::server::{create_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!("Connecting to UserService at {}", config.users_service_addr);
    let users_client = api::users::connect(&config.users_service_addr).await?;

    let state = AppState {
        config,
        users_client,
    };

    let api_routes = api::routes(&state);
    let router = create_router::<openapi::ApiDoc>(api_routes).await?;
    let app = router.merge(health_router(state.config.app.clone()));

    create_app(app, &state.config.server).await?;

    info!("Gateway shutdown complete");
    Ok(())
}
