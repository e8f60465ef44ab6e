//! Source client error types.

use thiserror::Error;

/// Errors that can occur while querying the repository search API.
#[derive(Debug, Error)]
pub enum SourceError {
    /// GitHub API error, including transport failures, non-success statuses
    /// and bodies that don't match the expected shape.
    #[error("GitHub API error: {0}")]
    GitHubError(#[from] octocrab::Error),
}
