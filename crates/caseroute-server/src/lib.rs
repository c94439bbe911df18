//! Caseroute Server
//!
//! HTTP front end for the case classification and routing engine.
//! Validates requests, runs them through the analyzer and exposes the
//! category and model metadata for discovery.

#![warn(missing_docs)]

pub mod config;
pub mod handlers;
pub mod responses;

use caseroute_gatekeeper::Gatekeeper;
use config::ServerConfig;
use handlers::{create_router, AppState};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Server error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

/// Install the fmt subscriber, honoring `RUST_LOG` (default: info)
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // A subscriber may already be installed (tests, embedding); keep it.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Build application state from configuration
///
/// Fails if the configured lexicon leaves any category uncovered.
pub fn build_state(config: &ServerConfig) -> Result<AppState, ServerError> {
    let analyzer = config.build_analyzer()?;
    Ok(AppState {
        analyzer: Arc::new(analyzer),
        gatekeeper: Arc::new(Gatekeeper::new(config.validation_config())),
    })
}

/// Start the HTTP server
///
/// Builds the analyzer and gatekeeper from configuration and serves the
/// axum router until the process is stopped.
pub async fn start_server(config: ServerConfig) -> Result<(), ServerError> {
    init_tracing();

    info!("Starting case routing service");
    info!("Bind address: {}", config.bind_addr());

    let state = build_state(&config)?;
    info!(
        "Lexicon: {} signals ({} from config)",
        state.analyzer.lexicon().len(),
        config.signals.len()
    );
    info!("Routes: {} queues", state.analyzer.queue_mapping().len());

    let app = create_router(state);

    let listener = TcpListener::bind(&config.bind_addr()).await?;
    info!("Listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .await
        .map_err(|e| ServerError::Server(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SignalConfig;

    #[test]
    fn test_build_state_from_default_config() {
        let state = build_state(&ServerConfig::default()).unwrap();
        assert_eq!(state.analyzer.queue_mapping().len(), 6);
    }

    #[test]
    fn test_build_state_rejects_bad_signal() {
        let config = ServerConfig {
            signals: vec![SignalConfig {
                category: "billing".to_string(),
                phrase: String::new(),
                weight: 1.0,
                whole_word: false,
            }],
            ..ServerConfig::default()
        };
        assert!(matches!(build_state(&config), Err(ServerError::Config(_))));
    }
}
