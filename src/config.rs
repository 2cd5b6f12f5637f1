//! Import endpoint configuration.
//!
//! The endpoint and optional bearer token are injected into the app at
//! startup; nothing below the app constructor reads the environment.

use std::env;

/// Placeholder ingest endpoint used until a journal backend is deployed.
pub const DEFAULT_ENDPOINT: &str = "https://httpbin.org/post";

#[derive(Debug, Clone)]
pub struct ImportConfig {
    /// URL the trades CSV is posted to.
    pub endpoint: String,
    /// Bearer token attached to the upload request, if any.
    pub auth_token: Option<String>,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            auth_token: None,
        }
    }
}

impl ImportConfig {
    /// Load configuration from environment variables, falling back to the
    /// built-in defaults per variable.
    pub fn from_env() -> Self {
        Self {
            endpoint: env::var("TRADES_IMPORT_URL")
                .unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string()),
            auth_token: env::var("TRADES_IMPORT_TOKEN")
                .ok()
                .filter(|token| !token.is_empty()),
        }
    }
}
