//! Digest rendering error types.

/// Digest rendering error.
#[derive(Debug, thiserror::Error)]
pub enum DigestError {
    /// Handlebars rendering error.
    #[error("Template rendering error: {0}")]
    RenderError(#[from] handlebars::RenderError),
}

/// Returned when a variant name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown digest variant '{0}', expected 'verbose' or 'compact'")]
pub struct ParseVariantError(pub String);
