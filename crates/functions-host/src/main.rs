//! Functions Host - Main entry point
//!
//! Serves one registered cloud function over HTTP, the way the hosting
//! platform would invoke it:
//! - picks the function named by `FUNCTION_TARGET`
//! - routes every path and method to it
//! - logs each invocation

mod config;
mod router;

use anyhow::{anyhow, Result};
use cloud_functions_sdk::{Function, FunctionRegistry};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::HostConfig;

/// Shared application state
#[derive(Debug)]
pub struct AppState {
    pub config: HostConfig,
    pub function: Function,
}

impl AppState {
    /// Resolve the configured target against the registry
    pub fn new(config: HostConfig, registry: &FunctionRegistry) -> Result<Self> {
        let function = registry
            .get(&config.function_target)
            .cloned()
            .ok_or_else(|| {
                anyhow!(
                    "Unknown function target {:?}; registered: {}",
                    config.function_target,
                    registry.names().join(", ")
                )
            })?;

        Ok(Self { config, function })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "info,functions_host=debug".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = HostConfig::from_env();
    tracing::info!("Configuration loaded: {:?}", config);

    let state = AppState::new(config.clone(), &hello_functions::registry())?;
    tracing::info!(
        "Serving function {} ({})",
        config.function_target,
        state.function.kind()
    );

    let app = router::create_host_router()
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state));

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Functions host listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
