//! Client Settings Domain Model
//!
//! Defines where the client finds the generator API and how long it waits.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{DomainError, DomainResult};

/// Settings for the document client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientSettings {
    /// Base URL of the generator API, without the `/api` prefix.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_api_base_url() -> String {
    "http://localhost:8000".to_string()
}

const fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl ClientSettings {
    /// Parses and validates the API base URL.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidUrl` if the URL does not parse or is not
    /// an http(s) URL.
    pub fn api_base_url(&self) -> DomainResult<Url> {
        let url = Url::parse(self.api_base_url.trim())
            .map_err(|e| DomainError::InvalidUrl(format!("{e}: {}", self.api_base_url)))?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(DomainError::InvalidUrl(format!(
                "unsupported scheme `{other}`: {}",
                self.api_base_url
            ))),
        }
    }

    /// Request timeout as a `Duration`.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
