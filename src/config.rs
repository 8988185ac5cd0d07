//! Backend endpoint configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The original deployment read `API_ENDPOINT` and `NYC_TOKEN` lazily
//! and let missing values surface as backend errors. Here the config
//! is built once at startup, validated, and passed into the widget via
//! context; the app refuses to mount the form without it.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use thiserror::Error;

/// Failure to assemble a usable [`ApiConfig`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("API_ENDPOINT is not set or blank")]
    MissingEndpoint,
    #[error("NYC_TOKEN is not set or blank")]
    MissingToken,
}

/// Validated backend connection settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
    bearer_token: String,
}

impl ApiConfig {
    /// Build a config from raw values, normalizing the base URL.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when either value is absent or blank.
    pub fn new(
        base_url: Option<&str>,
        bearer_token: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let base_url = base_url
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingEndpoint)?;
        let bearer_token = bearer_token
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingToken)?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            bearer_token: bearer_token.to_owned(),
        })
    }

    /// Build the config from the build environment.
    ///
    /// `API_ENDPOINT` and `NYC_TOKEN` are baked into the WASM bundle at
    /// compile time.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when either variable was absent at
    /// build time.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::new(option_env!("API_ENDPOINT"), option_env!("NYC_TOKEN"))
    }

    /// URL for submitting a new query.
    pub fn submit_url(&self) -> String {
        format!("{}/submit_query", self.base_url)
    }

    /// URL for checking the status of a submitted query.
    pub fn status_url(&self, query_id: &str) -> String {
        format!("{}/get_query/{query_id}", self.base_url)
    }

    /// `Authorization` header value for the submit request.
    pub fn bearer_header(&self) -> String {
        format!("Bearer {}", self.bearer_token)
    }
}
