//! Application state management.

use rpc::user::user_service_client::UserServiceClient;
use tonic::transport::Channel;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Gateway configuration loaded from environment variables
    pub config: crate::config::Config,
    /// gRPC client for the user directory (cheap to clone, shares the
    /// underlying HTTP/2 channel)
    pub users_client: UserServiceClient<Channel>,
}
