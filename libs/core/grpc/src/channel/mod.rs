mod config;

pub use config::ChannelConfig;

use crate::error::{GrpcError, GrpcResult};
use tonic::transport::{Channel, Endpoint};
use tracing::debug;

/// Connect a channel to `addr` with the settings from `config`.
///
/// The returned channel is cheap to clone; clones multiplex over the same
/// HTTP/2 connection.
pub async fn connect(addr: impl Into<String>, config: &ChannelConfig) -> GrpcResult<Channel> {
  let addr = addr.into();
  debug!(%addr, "Connecting gRPC channel");

  let mut endpoint = Endpoint::from_shared(addr)?
    .keep_alive_timeout(config.keep_alive_timeout)
    .keep_alive_while_idle(config.keep_alive_while_idle)
    .connect_timeout(config.connect_timeout)
    .timeout(config.timeout)
    .http2_adaptive_window(config.http2_adaptive_window)
    .tcp_nodelay(config.tcp_nodelay)
    .tcp_keepalive(config.tcp_keepalive);

  if let Some(interval) = config.http2_keep_alive_interval {
    endpoint = endpoint.http2_keep_alive_interval(interval);
  }
  if let Some(window) = config.initial_connection_window_size {
    endpoint = endpoint.initial_connection_window_size(window);
  }
  if let Some(window) = config.initial_stream_window_size {
    endpoint = endpoint.initial_stream_window_size(window);
  }

  endpoint.connect().await.map_err(GrpcError::ConnectionFailed)
}
