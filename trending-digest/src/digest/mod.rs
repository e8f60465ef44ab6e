//! Digest formatting using Handlebars.
//!
//! Turns annotated repositories into a single HTML-flavoured message body and
//! a title for the push notification.

mod error;
mod renderer;

pub use error::{DigestError, ParseVariantError};
pub use renderer::{create_handlebars_registry, DigestRenderer};

use crate::annotate::AnnotatedRepository;
use chrono::{Local, NaiveDateTime};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Body sent when there is nothing to report.
pub const NO_DATA_MESSAGE: &str = "🔍 No newly created trending repositories today";

/// Appended to a description that was cut short.
pub const ELLIPSIS: &str = "...";

/// Digest layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DigestVariant {
    /// Captioned multi-line blocks, descriptions up to 150 characters.
    #[default]
    Verbose,
    /// Dense blocks without captions, descriptions up to 80 characters.
    Compact,
}

impl DigestVariant {
    /// Maximum description length in characters before truncation.
    #[must_use]
    pub fn description_limit(&self) -> usize {
        match self {
            Self::Verbose => 150,
            Self::Compact => 80,
        }
    }

    /// Returns the variant name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Verbose => "verbose",
            Self::Compact => "compact",
        }
    }
}

impl fmt::Display for DigestVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DigestVariant {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "verbose" => Ok(Self::Verbose),
            "compact" => Ok(Self::Compact),
            other => Err(ParseVariantError(other.to_string())),
        }
    }
}

/// Renders a digest stamped with the current local time.
///
/// # Errors
///
/// Returns an error if template rendering fails.
pub fn format_digest(
    repos: &[AnnotatedRepository],
    variant: DigestVariant,
) -> Result<String, DigestError> {
    DigestRenderer::new(variant).render(repos, Local::now().naive_local())
}

/// Generates the notification title.
///
/// Format: "🚀 GitHub Trending Today (MM/DD)"
#[must_use]
pub fn digest_title(now: NaiveDateTime) -> String {
    format!("🚀 GitHub Trending Today ({})", now.format("%m/%d"))
}

/// Returns the rank marker for a 1-based position.
#[must_use]
pub fn rank_marker(rank: usize) -> String {
    match rank {
        1 => "🥇".to_string(),
        2 => "🥈".to_string(),
        3 => "🥉".to_string(),
        // Digit followed by the emoji presentation selector and keycap combiner
        4..=9 => format!("{rank}\u{fe0f}\u{20e3}"),
        10 => "🔟".to_string(),
        _ => format!("{rank}."),
    }
}

/// Cuts `text` to at most `max_chars` characters, appending [`ELLIPSIS`] only
/// when something was removed.
#[must_use]
pub fn truncate_description(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => format!("{}{ELLIPSIS}", &text[..end]),
        None => text.to_string(),
    }
}

/// Formats a count with comma thousands separators.
#[must_use]
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
