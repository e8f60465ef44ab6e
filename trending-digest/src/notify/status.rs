//! Delivery status types.

use serde::Serialize;

/// Outcome of a push delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DeliveryStatus {
    /// The webhook accepted the message.
    Delivered,

    /// The webhook rejected the message or could not be reached.
    Failed {
        /// Result code from the webhook body, if one was received.
        code: Option<i64>,
        /// Error message.
        error: String,
    },
}

impl DeliveryStatus {
    /// Returns true if the message was accepted.
    #[must_use]
    pub fn is_delivered(&self) -> bool {
        matches!(self, Self::Delivered)
    }

    /// Returns a one-line description of a failure, or `None` on success.
    #[must_use]
    pub fn failure_reason(&self) -> Option<String> {
        match self {
            Self::Delivered => None,
            Self::Failed {
                code: Some(code),
                error,
            } => Some(format!("code {code}: {error}")),
            Self::Failed { code: None, error } => Some(error.clone()),
        }
    }
}
