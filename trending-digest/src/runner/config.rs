//! Runner configuration.

use crate::config::Settings;
use crate::digest::DigestVariant;

/// Configuration for a single run, resolved once at start-up.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Search, digest and webhook settings.
    settings: Settings,
    /// PushPlus delivery token; `None` when unset or empty.
    token: Option<String>,
    /// Whether to print the digest instead of delivering it.
    dry_run: bool,
}

impl RunnerConfig {
    /// Creates a new configuration for a run.
    ///
    /// A blank token is treated the same as a missing one.
    pub fn new(settings: Settings, token: Option<String>, dry_run: bool) -> Self {
        let token = token.filter(|t| !t.trim().is_empty());
        Self {
            settings,
            token,
            dry_run,
        }
    }

    /// Overrides the digest layout from the settings file.
    pub fn with_variant(mut self, variant: DigestVariant) -> Self {
        self.settings.digest.variant = variant;
        self
    }

    /// Returns the resolved settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Returns the delivery token, if one is set.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Returns whether dry-run mode is enabled.
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    /// Returns the digest layout.
    pub fn variant(&self) -> DigestVariant {
        self.settings.digest.variant
    }
}
