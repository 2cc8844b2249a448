use std::time::Duration;

/// Configuration for gRPC channel creation
///
/// HTTP/2 and TCP tuning applied to every outbound channel. The defaults
/// favor long-lived connections shared by many concurrent unary calls.
#[derive(Debug, Clone)]
pub struct ChannelConfig {
  // HTTP/2 keep-alive
  pub http2_keep_alive_interval: Option<Duration>,
  pub keep_alive_timeout: Duration,
  pub keep_alive_while_idle: bool,

  // Connection settings
  pub connect_timeout: Duration,
  pub timeout: Duration,

  // HTTP/2 flow control
  pub initial_connection_window_size: Option<u32>,
  pub initial_stream_window_size: Option<u32>,
  pub http2_adaptive_window: bool,

  // TCP settings
  pub tcp_nodelay: bool,
  pub tcp_keepalive: Option<Duration>,
}

impl Default for ChannelConfig {
  fn default() -> Self {
    Self {
      http2_keep_alive_interval: Some(Duration::from_secs(30)),
      keep_alive_timeout: Duration::from_secs(10),
      keep_alive_while_idle: true,
      connect_timeout: Duration::from_secs(5),
      timeout: Duration::from_secs(30),
      initial_connection_window_size: Some(1024 * 1024), // 1MB
      initial_stream_window_size: Some(1024 * 1024),     // 1MB
      http2_adaptive_window: true,
      tcp_nodelay: true,
      tcp_keepalive: Some(Duration::from_secs(30)),
    }
  }
}

impl ChannelConfig {
  pub fn new() -> Self {
    Self::default()
  }

  /// Set the connection timeout
  pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
    self.connect_timeout = timeout;
    self
  }

  /// Set the request timeout for individual RPCs
  pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
    self.timeout = timeout;
    self
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_config_keeps_connections_warm() {
    let config = ChannelConfig::default();
    assert!(config.keep_alive_while_idle);
    assert!(config.tcp_nodelay);
    assert_eq!(config.connect_timeout, Duration::from_secs(5));
  }

  #[test]
  fn builder_overrides_timeouts() {
    let config = ChannelConfig::new()
      .with_connect_timeout(Duration::from_secs(1))
      .with_request_timeout(Duration::from_secs(120));
    assert_eq!(config.connect_timeout, Duration::from_secs(1));
    assert_eq!(config.timeout, Duration::from_secs(120));
  }
}
