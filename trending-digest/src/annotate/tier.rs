//! Popularity tiers derived from star counts.

use serde::Serialize;
use std::fmt;

/// Coarse popularity class, ordered from least to most popular.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Fewer than 500 stars.
    Emerging,
    /// At least 500 stars.
    Notable,
    /// At least 1,000 stars.
    HighQuality,
    /// At least 5,000 stars.
    Hot,
    /// At least 10,000 stars.
    Blazing,
}

/// Inclusive lower bounds, highest first. The first match wins; anything
/// below the last bound is [`Tier::Emerging`].
pub const TIER_THRESHOLDS: [(u64, Tier); 4] = [
    (10_000, Tier::Blazing),
    (5_000, Tier::Hot),
    (1_000, Tier::HighQuality),
    (500, Tier::Notable),
];

/// Classifies a repository by its star count.
#[must_use]
pub fn tier_label(stars: u64) -> Tier {
    TIER_THRESHOLDS
        .iter()
        .find(|(min, _)| stars >= *min)
        .map_or(Tier::Emerging, |(_, tier)| *tier)
}

impl Tier {
    /// Returns the tier name for logs and serialization.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Blazing => "blazing",
            Self::Hot => "hot",
            Self::HighQuality => "high_quality",
            Self::Notable => "notable",
            Self::Emerging => "emerging",
        }
    }

    /// Returns the label shown in the digest.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Blazing => "🔥 Blazing",
            Self::Hot => "⭐ Hot",
            Self::HighQuality => "📈 High quality",
            Self::Notable => "💎 Notable",
            Self::Emerging => "🌟 Emerging",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
