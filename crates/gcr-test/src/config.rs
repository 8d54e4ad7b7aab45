//! Server configuration

use std::env;

/// Port served when `GCR_TEST_PORT` is unset or unparsable
pub const DEFAULT_PORT: u16 = 80;

/// Configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to listen on, on all interfaces
    pub port: u16,
}

impl ServerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            port: parse_port(env::var("GCR_TEST_PORT").ok()),
        }
    }
}

fn parse_port(value: Option<String>) -> u16 {
    value
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_PORT)
}
