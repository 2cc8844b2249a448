use core_config::{env_or_default, ConfigError, FromEnv};

/// Listen address for a gRPC server binary
#[derive(Clone, Debug)]
pub struct GrpcServerConfig {
  pub host: String,
  pub port: u16,
}

impl GrpcServerConfig {
  /// Get the listen address as "host:port"
  pub fn address(&self) -> String {
    format!("{}:{}", self.host, self.port)
  }
}

impl FromEnv for GrpcServerConfig {
  /// Reads from environment variables with defaults:
  /// - GRPC_HOST: defaults to `[::1]`
  /// - GRPC_PORT: defaults to 50051
  fn from_env() -> Result<Self, ConfigError> {
    let host = env_or_default("GRPC_HOST", "[::1]");
    let port = env_or_default("GRPC_PORT", "50051").parse().map_err(|e| {
      ConfigError::ParseError {
        key: "GRPC_PORT".to_string(),
        details: format!("{}", e),
      }
    })?;

    Ok(Self { host, port })
  }
}

impl Default for GrpcServerConfig {
  fn default() -> Self {
    Self {
      host: "[::1]".to_string(),
      port: 50051,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn from_env_uses_defaults() {
    temp_env::with_vars([("GRPC_HOST", None::<&str>), ("GRPC_PORT", None::<&str>)], || {
      let config = GrpcServerConfig::from_env().unwrap();
      assert_eq!(config.address(), "[::1]:50051");
    });
  }

  #[test]
  fn from_env_rejects_bad_port() {
    temp_env::with_var("GRPC_PORT", Some("grpc"), || {
      let err = GrpcServerConfig::from_env().unwrap_err();
      assert!(err.to_string().contains("GRPC_PORT"));
    });
  }
}
