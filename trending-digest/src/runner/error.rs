//! Runner error types.

/// Errors that can occur while setting up a run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Settings loading errors.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// GitHub API client initialization errors.
    #[error(transparent)]
    Source(#[from] crate::source::SourceError),

    /// Push client initialization errors.
    #[error(transparent)]
    Notify(#[from] crate::notify::NotifyError),
}
