//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! carries the parsed configuration and one pooled HTTP client reused for
//! every forwarded staging request.

use std::sync::Arc;
use std::time::Duration;

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub http: reqwest::Client,
}

impl AppState {
    /// Build state with an HTTP client honoring the configured timeouts.
    ///
    /// # Errors
    ///
    /// Returns the client builder error (e.g. TLS backend init failure).
    pub fn new(config: ServerConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.staging_connect_timeout_secs))
            .timeout(Duration::from_secs(config.staging_timeout_secs))
            .build()?;
        Ok(Self { config: Arc::new(config), http })
    }
}
