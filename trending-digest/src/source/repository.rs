//! Candidate repository records and the search response they are built from.

use serde::{Deserialize, Serialize};

/// Shown when a repository has no description.
pub const DESCRIPTION_PLACEHOLDER: &str = "No description provided";

/// Used when a repository reports no primary language.
pub const UNKNOWN_LANGUAGE: &str = "unknown";

/// A recently created repository returned by the search API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateRepository {
    /// Full repository name in "owner/name" format.
    pub name: String,

    /// Web URL of the repository.
    pub url: String,

    /// Description, or [`DESCRIPTION_PLACEHOLDER`].
    pub description: String,

    /// Primary language, or [`UNKNOWN_LANGUAGE`].
    pub language: String,

    /// Stargazer count.
    pub stars: u64,

    /// Fork count.
    pub forks: u64,

    /// Open issue count.
    pub open_issues: u64,

    /// Last update timestamp as reported by the API. Display only.
    pub updated_at: String,
}

/// Body of a `GET /search/repositories` response.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub(crate) items: Vec<SearchItem>,
}

/// One item of a repository search response.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchItem {
    full_name: String,
    html_url: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    language: Option<String>,
    stargazers_count: u64,
    forks_count: u64,
    #[serde(default)]
    open_issues_count: Option<u64>,
    #[serde(default)]
    updated_at: Option<String>,
}

impl From<SearchItem> for CandidateRepository {
    fn from(item: SearchItem) -> Self {
        Self {
            name: item.full_name,
            url: item.html_url,
            description: non_empty_or(item.description, DESCRIPTION_PLACEHOLDER),
            language: non_empty_or(item.language, UNKNOWN_LANGUAGE),
            stars: item.stargazers_count,
            forks: item.forks_count,
            open_issues: item.open_issues_count.unwrap_or(0),
            updated_at: item.updated_at.unwrap_or_default(),
        }
    }
}

fn non_empty_or(value: Option<String>, fallback: &str) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

/// Converts a search response into candidates, keeping at most `limit` items
/// in the order the API returned them.
pub(crate) fn into_candidates(response: SearchResponse, limit: usize) -> Vec<CandidateRepository> {
    response
        .items
        .into_iter()
        .take(limit)
        .map(CandidateRepository::from)
        .collect()
}
