//! Local persistence.

mod settings_repository;

pub use settings_repository::{
    ENV_API_URL, ENV_TIMEOUT_SECS, SettingsError, SettingsRepository, apply_overrides,
};
