//! Popularity and language annotations.
//!
//! Pure lookups over fixed tables. Annotating produces new records and leaves
//! the fetched candidates untouched.

mod language;
mod tier;

pub use language::{language_icon, DEFAULT_LANGUAGE_ICON, LANGUAGE_ICONS};
pub use tier::{tier_label, Tier, TIER_THRESHOLDS};

use crate::source::CandidateRepository;
use serde::Serialize;

/// A candidate with its derived tier and language glyph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotatedRepository {
    /// The fetched repository.
    pub repository: CandidateRepository,

    /// Tier derived from the star count.
    pub tier: Tier,

    /// Glyph derived from the primary language.
    pub language_icon: &'static str,
}

impl AnnotatedRepository {
    /// Annotates a single candidate.
    #[must_use]
    pub fn new(repository: CandidateRepository) -> Self {
        Self {
            tier: tier_label(repository.stars),
            language_icon: language_icon(&repository.language),
            repository,
        }
    }
}

/// Annotates candidates, preserving their order.
#[must_use]
pub fn annotate(candidates: Vec<CandidateRepository>) -> Vec<AnnotatedRepository> {
    candidates.into_iter().map(AnnotatedRepository::new).collect()
}
