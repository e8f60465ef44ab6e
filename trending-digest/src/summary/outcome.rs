//! Run outcome types.

use serde::Serialize;

/// How a single run ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RunOutcome {
    /// No delivery token was configured, so nothing was fetched or sent.
    MissingToken,

    /// The search request failed.
    FetchFailed {
        /// Error message.
        reason: String,
    },

    /// The search succeeded but returned no repositories.
    NoCandidates,

    /// The digest could not be rendered.
    RenderFailed {
        /// Error message.
        reason: String,
    },

    /// Dry run: the digest was printed instead of delivered.
    Previewed {
        /// Number of repositories in the digest.
        candidates: usize,
    },

    /// The digest was delivered.
    Delivered {
        /// Number of repositories in the digest.
        candidates: usize,
    },

    /// The webhook rejected the digest or could not be reached.
    DeliveryFailed {
        /// Number of repositories in the digest.
        candidates: usize,
        /// Error message.
        reason: String,
    },
}

impl RunOutcome {
    /// Returns true if the run ended without an error.
    ///
    /// An empty search result is a normal outcome.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(
            self,
            Self::NoCandidates | Self::Previewed { .. } | Self::Delivered { .. }
        )
    }

    /// Returns the number of repositories that made it into a digest.
    #[must_use]
    pub fn candidates(&self) -> usize {
        match self {
            Self::Previewed { candidates }
            | Self::Delivered { candidates }
            | Self::DeliveryFailed { candidates, .. } => *candidates,
            _ => 0,
        }
    }

    /// Returns the failure message, if any.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::FetchFailed { reason }
            | Self::RenderFailed { reason }
            | Self::DeliveryFailed { reason, .. } => Some(reason),
            Self::MissingToken => Some("delivery token is not set"),
            _ => None,
        }
    }
}
