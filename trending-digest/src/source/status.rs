//! Fetch outcome type.

use super::CandidateRepository;

/// Result of a single search request.
///
/// A failed fetch carries its reason but otherwise behaves like an empty result
/// via [`FetchOutcome::candidates`].
#[derive(Debug, Clone)]
pub enum FetchOutcome {
    /// The search succeeded. The list may be empty.
    Fetched(Vec<CandidateRepository>),

    /// The search failed.
    Failed {
        /// Error message.
        reason: String,
    },
}

impl FetchOutcome {
    /// Returns the fetched candidates, or an empty slice on failure.
    #[must_use]
    pub fn candidates(&self) -> &[CandidateRepository] {
        match self {
            Self::Fetched(repos) => repos,
            Self::Failed { .. } => &[],
        }
    }

    /// Consumes the outcome, returning an empty list on failure.
    #[must_use]
    pub fn into_candidates(self) -> Vec<CandidateRepository> {
        match self {
            Self::Fetched(repos) => repos,
            Self::Failed { .. } => Vec::new(),
        }
    }

    /// Returns true if the request failed.
    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}
