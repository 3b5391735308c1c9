use crate::{ConfigError, FromEnv, env_or_default, env_parse};
use std::net::{Ipv4Addr, SocketAddr};

/// Bind address of the plain HTTP listener (health probes).
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.address()
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::ParseError {
                key: "HOST".to_string(),
                details: e.to_string(),
            })
    }
}

impl FromEnv for ServerConfig {
    /// `HOST` (default `0.0.0.0`) and `PORT` (default 8080).
    fn from_env() -> Result<Self, ConfigError> {
        let host = env_or_default("HOST", &Ipv4Addr::UNSPECIFIED.to_string());
        let port = env_parse("PORT", 8080u16)?;
        Ok(Self { host, port })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(Ipv4Addr::UNSPECIFIED.to_string(), 8080)
    }
}
