//! Application configuration

use std::env;
use std::net::SocketAddr;

use common::error::{Error, Result};

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Bind host
    pub host: String,
    /// API port
    pub port: u16,
}

impl AppConfig {
    /// Create a new configuration from environment variables
    pub fn new() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
        }
    }

    /// Address the server listens on
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| Error::ConfigurationError(format!("Invalid listen address {}:{}: {}", self.host, self.port, e)))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_socket_addr() {
        let config = AppConfig { host: "0.0.0.0".to_string(), port: 9000 };
        assert_eq!(config.socket_addr().unwrap().port(), 9000);
    }

    #[test]
    fn test_invalid_host() {
        let config = AppConfig { host: "not a host".to_string(), port: 9000 };
        assert!(matches!(config.socket_addr(), Err(Error::ConfigurationError(_))));
    }
}
