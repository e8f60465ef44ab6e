//! Notifier error types.

use thiserror::Error;

/// Errors that can occur while talking to the push webhook.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// No delivery token was supplied.
    #[error("Delivery token is empty")]
    MissingToken,

    /// The HTTP client could not be built.
    #[error("Failed to build HTTP client: {source}")]
    ClientBuild {
        #[source]
        source: reqwest::Error,
    },

    /// The request could not be sent or timed out.
    #[error("Failed to send push request: {source}")]
    RequestSend {
        #[source]
        source: reqwest::Error,
    },

    /// The response body was not the expected JSON.
    #[error("Failed to read push response: {source}")]
    ResponseRead {
        #[source]
        source: reqwest::Error,
    },
}
