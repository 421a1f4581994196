//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the parsed server config and one pooled HTTP client used to forward
//! `/api` calls to the storefront backend. Leptos options are kept out of it;
//! the SSR router carries those as its own state.

use std::sync::Arc;

use crate::config::ServerConfig;

#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("failed to build upstream HTTP client: {0}")]
    HttpClientBuild(String),
}

/// Shared application state. Clone is cheap: config is Arc-wrapped and
/// `reqwest::Client` is a handle to a shared pool.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub http: reqwest::Client,
}

impl AppState {
    /// # Errors
    ///
    /// Returns an error if the upstream HTTP client cannot be constructed.
    pub fn new(config: ServerConfig) -> Result<Self, StateError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeouts.request())
            .connect_timeout(config.timeouts.connect())
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| StateError::HttpClientBuild(e.to_string()))?;
        Ok(Self { config: Arc::new(config), http })
    }
}
