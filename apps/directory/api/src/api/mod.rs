pub mod users;

use axum::Router;

use crate::state::AppState;

/// Compose all API routes with their state applied.
pub fn routes(state: &AppState) -> Router {
    users::router(state.users_client.clone())
}
