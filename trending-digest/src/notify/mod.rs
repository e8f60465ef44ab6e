//! Push delivery through the PushPlus webhook.
//!
//! One POST per run. The webhook reports its verdict in the JSON body rather
//! than the HTTP status, so only a body `code` of 200 counts as delivered.

mod error;
mod status;

pub use error::NotifyError;
pub use status::DeliveryStatus;

use crate::config::NotifySettings;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{info, info_span, warn, Instrument};

/// Result code the webhook uses for an accepted message.
pub const SUCCESS_CODE: i64 = 200;

/// Template name telling the webhook the content is HTML.
const HTML_TEMPLATE: &str = "html";

/// A channel that can deliver a titled digest.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Delivers one message. Failures are reported, never retried.
    async fn send(&self, title: &str, body: &str) -> DeliveryStatus;
}

/// Request body for the send endpoint.
#[derive(Debug, Serialize)]
struct PushRequest<'a> {
    token: &'a str,
    title: &'a str,
    content: &'a str,
    template: &'static str,
}

/// Response body from the send endpoint.
#[derive(Debug, Deserialize)]
struct PushResponse {
    code: i64,
    #[serde(default)]
    msg: Option<String>,
}

/// Client for the PushPlus send endpoint.
pub struct PushPlusNotifier {
    client: reqwest::Client,
    endpoint: String,
    token: String,
}

impl PushPlusNotifier {
    /// Creates a notifier for the configured endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError::MissingToken`] for an empty token, or
    /// [`NotifyError::ClientBuild`] if the HTTP client can't be built.
    pub fn new(token: String, settings: &NotifySettings) -> Result<Self, NotifyError> {
        if token.trim().is_empty() {
            return Err(NotifyError::MissingToken);
        }

        let client = reqwest::Client::builder()
            .timeout(settings.timeout())
            .build()
            .map_err(|source| NotifyError::ClientBuild { source })?;

        Ok(Self {
            client,
            endpoint: settings.endpoint.clone(),
            token,
        })
    }

    /// Returns the endpoint messages are posted to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Posts the message and interprets the webhook's verdict.
    pub async fn send(&self, title: &str, body: &str) -> DeliveryStatus {
        let span = info_span!("deliver", endpoint = %self.endpoint);

        async {
            match self.post(title, body).await {
                Ok(response) if response.code == SUCCESS_CODE => {
                    info!("Push accepted");
                    DeliveryStatus::Delivered
                }
                Ok(response) => {
                    let error = response
                        .msg
                        .unwrap_or_else(|| "no message in response".to_string());
                    warn!(code = response.code, error = %error, "Push rejected");
                    DeliveryStatus::Failed {
                        code: Some(response.code),
                        error,
                    }
                }
                Err(e) => {
                    warn!(error = %e, "Push request failed");
                    DeliveryStatus::Failed {
                        code: None,
                        error: e.to_string(),
                    }
                }
            }
        }
        .instrument(span)
        .await
    }

    async fn post(&self, title: &str, body: &str) -> Result<PushResponse, NotifyError> {
        let request = PushRequest {
            token: &self.token,
            title,
            content: body,
            template: HTML_TEMPLATE,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|source| NotifyError::RequestSend { source })?;

        response
            .json::<PushResponse>()
            .await
            .map_err(|source| NotifyError::ResponseRead { source })
    }
}

#[async_trait]
impl Notifier for PushPlusNotifier {
    async fn send(&self, title: &str, body: &str) -> DeliveryStatus {
        PushPlusNotifier::send(self, title, body).await
    }
}
