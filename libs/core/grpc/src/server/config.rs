//! Server configuration loaded from environment variables.

use core_config::{ConfigError, FromEnv, env_or_default, env_parse};
use std::net::SocketAddr;

use crate::error::GrpcError;

const DEFAULT_MESSAGE_SIZE: usize = 8 * 1024 * 1024;

/// Configuration for gRPC server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Host to bind to (default: 0.0.0.0)
    pub host: String,
    /// Port to listen on (default: 50051)
    pub port: u16,
    /// Accept and send Zstd-compressed messages (default: true)
    pub enable_compression: bool,
    pub max_decoding_message_size: usize,
    pub max_encoding_message_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 50051,
            enable_compression: true,
            max_decoding_message_size: DEFAULT_MESSAGE_SIZE,
            max_encoding_message_size: DEFAULT_MESSAGE_SIZE,
        }
    }
}

impl FromEnv for ServerConfig {
    /// Reads `GRPC_HOST`, `GRPC_PORT`, `GRPC_COMPRESSION` and
    /// `GRPC_MAX_MESSAGE_SIZE`.
    fn from_env() -> Result<Self, ConfigError> {
        let compression = env_or_default("GRPC_COMPRESSION", "true");
        let max_message_size = env_parse("GRPC_MAX_MESSAGE_SIZE", DEFAULT_MESSAGE_SIZE)?;

        Ok(Self {
            host: env_or_default("GRPC_HOST", "0.0.0.0"),
            port: env_parse("GRPC_PORT", 50051u16)?,
            enable_compression: !matches!(compression.trim(), "false" | "0"),
            max_decoding_message_size: max_message_size,
            max_encoding_message_size: max_message_size,
        })
    }
}

impl ServerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_compression(mut self, enable: bool) -> Self {
        self.enable_compression = enable;
        self
    }

    pub fn with_max_message_size(mut self, size: usize) -> Self {
        self.max_decoding_message_size = size;
        self.max_encoding_message_size = size;
        self
    }

    /// Get the socket address to bind to.
    pub fn socket_addr(&self) -> Result<SocketAddr, GrpcError> {
        let address = self.addr_string();
        address.parse().map_err(|e: std::net::AddrParseError| GrpcError::InvalidAddress {
            details: e.to_string(),
            address,
        })
    }

    /// Get the address string (for logging).
    pub fn addr_string(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 50051);
        assert!(config.enable_compression);
        assert_eq!(config.socket_addr().unwrap().port(), 50051);
    }

    #[test]
    fn test_builder_pattern() {
        let config = ServerConfig::new()
            .with_host("127.0.0.1")
            .with_port(9090)
            .with_compression(false)
            .with_max_message_size(1024);

        assert_eq!(config.addr_string(), "127.0.0.1:9090");
        assert!(!config.enable_compression);
        assert_eq!(config.max_encoding_message_size, 1024);
    }

    #[test]
    fn test_ipv6_hosts() {
        assert!(ServerConfig::new().with_host("::1").socket_addr().is_ok());
        assert!(ServerConfig::new().with_host("[::1]").socket_addr().is_ok());
    }

    #[test]
    fn test_invalid_host() {
        let err = ServerConfig::new().with_host("not a host").socket_addr().unwrap_err();
        assert!(matches!(err, GrpcError::InvalidAddress { .. }));
    }

    #[test]
    fn test_from_env() {
        temp_env::with_vars(
            [
                ("GRPC_HOST", Some("127.0.0.1")),
                ("GRPC_PORT", Some("6000")),
                ("GRPC_COMPRESSION", Some("false")),
                ("GRPC_MAX_MESSAGE_SIZE", None),
            ],
            || {
                let config = ServerConfig::from_env().unwrap();
                assert_eq!(config.addr_string(), "127.0.0.1:6000");
                assert!(!config.enable_compression);
                assert_eq!(config.max_decoding_message_size, DEFAULT_MESSAGE_SIZE);
            },
        );
    }

    #[test]
    fn test_from_env_rejects_bad_port() {
        temp_env::with_var("GRPC_PORT", Some("seventy"), || {
            assert!(ServerConfig::from_env().is_err());
        });
    }
}
