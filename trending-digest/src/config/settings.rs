//! Settings deserialization and validation.

use crate::config::ConfigError;
use crate::digest::DigestVariant;
use serde::Deserialize;
use std::time::Duration;
use url::Url;

/// Default GitHub REST API base.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Default PushPlus send endpoint.
pub const DEFAULT_PUSH_ENDPOINT: &str = "http://www.pushplus.plus/send";

/// Browser-like identification; the search API rejects some bare clients.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Upper bound the search API accepts for `per_page`.
const MAX_PER_PAGE: u8 = 100;

/// Parsed contents of a settings file. Every section and key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Settings {
    /// Repository search parameters.
    pub search: SearchSettings,

    /// Digest rendering parameters.
    pub digest: DigestSettings,

    /// Push webhook parameters.
    pub notify: NotifySettings,
}

/// Parameters for the repository search query.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SearchSettings {
    /// Base URL of the GitHub REST API.
    pub api_base: String,

    /// Repositories must have strictly more stars than this.
    pub min_stars: u32,

    /// Repositories must have been created within this many days.
    pub created_within_days: u32,

    /// Number of results requested (single page).
    pub per_page: u8,

    /// Connect and read timeout in seconds.
    pub timeout_secs: u64,

    /// Value sent as the `User-Agent` header.
    pub user_agent: String,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            min_stars: 10,
            created_within_days: 1,
            per_page: 10,
            timeout_secs: 15,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl SearchSettings {
    /// Returns the request timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Parameters for digest rendering.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct DigestSettings {
    /// Layout variant; verbose unless overridden.
    pub variant: DigestVariant,
}

/// Parameters for the push webhook.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct NotifySettings {
    /// Webhook endpoint receiving the POST.
    pub endpoint: String,

    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for NotifySettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_PUSH_ENDPOINT.to_string(),
            timeout_secs: 10,
        }
    }
}

impl NotifySettings {
    /// Returns the request timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Settings {
    /// Parses settings from TOML text. `origin` names the source in errors.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the text is not valid TOML or fails validation.
    pub fn from_toml(contents: &str, origin: &str) -> Result<Self, ConfigError> {
        let settings: Settings =
            toml::from_str(contents).map_err(|source| ConfigError::TomlError {
                path: origin.to_string(),
                source,
            })?;
        settings.validate(origin)?;
        Ok(settings)
    }

    /// Validates value ranges and URLs.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] on the first invalid value.
    pub fn validate(&self, origin: &str) -> Result<(), ConfigError> {
        let invalid = |message: String| ConfigError::ValidationError {
            path: origin.to_string(),
            message,
        };

        if Url::parse(&self.search.api_base).is_err() {
            return Err(invalid(format!(
                "search.api-base is not a valid URL: {}",
                self.search.api_base
            )));
        }

        if self.search.per_page == 0 || self.search.per_page > MAX_PER_PAGE {
            return Err(invalid(format!(
                "search.per-page must be between 1 and {MAX_PER_PAGE}"
            )));
        }

        if self.search.created_within_days == 0 {
            return Err(invalid(
                "search.created-within-days must be at least 1".to_string(),
            ));
        }

        if self.search.timeout_secs == 0 {
            return Err(invalid("search.timeout-secs must be at least 1".to_string()));
        }

        if self.search.user_agent.trim().is_empty() {
            return Err(invalid("search.user-agent must not be empty".to_string()));
        }

        if Url::parse(&self.notify.endpoint).is_err() {
            return Err(invalid(format!(
                "notify.endpoint is not a valid URL: {}",
                self.notify.endpoint
            )));
        }

        if self.notify.timeout_secs == 0 {
            return Err(invalid("notify.timeout-secs must be at least 1".to_string()));
        }

        Ok(())
    }
}
