//! Host configuration

use std::env;

/// Host configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct HostConfig {
    /// Name of the registered function to serve
    pub function_target: String,

    /// Port to listen on
    pub port: u16,
}

impl HostConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            function_target: lookup("FUNCTION_TARGET")
                .filter(|target| !target.is_empty())
                .unwrap_or_else(|| hello_functions::HELLO_HTTP.to_string()),

            port: lookup("PORT")
                .and_then(|s| s.parse().ok())
                .unwrap_or(8080),
        }
    }
}
