//! Settings loading.
//!
//! A run is configured by an optional TOML file plus the values the CLI
//! collects (delivery token, dry-run). Everything is resolved once at start-up
//! into a [`Settings`] value and passed down explicitly.

mod error;
mod settings;

pub use error::ConfigError;
pub use settings::{
    DigestSettings, NotifySettings, SearchSettings, Settings, DEFAULT_API_BASE,
    DEFAULT_PUSH_ENDPOINT, DEFAULT_USER_AGENT,
};

use std::path::Path;
use tracing::{debug, info};

/// Loads settings from `path`, falling back to defaults when the file is absent.
///
/// ```toml
/// [search]
/// min-stars = 10
/// created-within-days = 1
/// per-page = 10
///
/// [digest]
/// variant = "verbose"
///
/// [notify]
/// endpoint = "http://www.pushplus.plus/send"
/// ```
///
/// # Errors
///
/// Returns [`ConfigError`] if the file exists but can't be read, parsed, or
/// validated.
pub fn load_settings(path: &Path) -> Result<Settings, ConfigError> {
    if !path.exists() {
        debug!(path = %path.display(), "Settings file not found, using defaults");
        return Ok(Settings::default());
    }

    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::IoError {
        path: path.display().to_string(),
        source,
    })?;

    let settings = Settings::from_toml(&contents, &path.display().to_string())?;
    info!(path = %path.display(), "Loaded settings");
    Ok(settings)
}
