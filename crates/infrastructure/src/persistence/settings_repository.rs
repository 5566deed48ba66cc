//! Client settings persistence.
//!
//! Stores client settings in the platform-specific config directory:
//! - Linux: ~/.config/svetlana/settings.json
//! - macOS: ~/Library/Application Support/svetlana/settings.json
//! - Windows: %APPDATA%/svetlana/settings.json

use std::path::{Path, PathBuf};

use svetlana_domain::ClientSettings;
use tokio::fs;

/// Environment variable overriding the API base URL.
pub const ENV_API_URL: &str = "SVETLANA_API_URL";

/// Environment variable overriding the request timeout, in seconds.
pub const ENV_TIMEOUT_SECS: &str = "SVETLANA_TIMEOUT_SECS";

/// Error type for settings operations.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An override value could not be parsed.
    #[error("invalid value for {key}: {value}")]
    InvalidOverride {
        /// Variable name.
        key: &'static str,
        /// Rejected value.
        value: String,
    },
}

/// Repository for client settings persistence.
#[derive(Debug, Clone, Default)]
pub struct SettingsRepository {
    path: Option<PathBuf>,
}

impl SettingsRepository {
    /// Creates a repository using the platform config directory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            path: dirs::config_dir().map(|p| p.join("svetlana").join("settings.json")),
        }
    }

    /// Creates a repository reading `path`.
    #[must_use]
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Returns the path where settings are stored, if available.
    #[must_use]
    pub fn settings_path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Loads client settings from disk.
    ///
    /// Returns default settings if the file doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub async fn load(&self) -> Result<ClientSettings, SettingsError> {
        let Some(path) = &self.path else {
            return Ok(ClientSettings::default());
        };

        if !fs::try_exists(path).await? {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(ClientSettings::default());
        }

        let content = fs::read(path).await?;
        let settings = serde_json::from_slice(&content)?;
        Ok(settings)
    }
}

/// Applies environment overrides on top of loaded settings.
///
/// `lookup` resolves a variable name; the binary passes the process
/// environment.
///
/// # Errors
///
/// Returns `SettingsError::InvalidOverride` for a non-numeric timeout.
pub fn apply_overrides(
    mut settings: ClientSettings,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<ClientSettings, SettingsError> {
    if let Some(url) = lookup(ENV_API_URL) {
        settings.api_base_url = url;
    }

    if let Some(value) = lookup(ENV_TIMEOUT_SECS) {
        settings.request_timeout_secs =
            value
                .trim()
                .parse()
                .map_err(|_| SettingsError::InvalidOverride {
                    key: ENV_TIMEOUT_SECS,
                    value,
                })?;
    }

    Ok(settings)
}
