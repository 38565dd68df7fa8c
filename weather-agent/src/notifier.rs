//! Webhook delivery of terminal task envelopes.

use crate::error::AgentError;
use a2a_task::SendResponse;
use reqwest::StatusCode;

/// Header carrying the caller-supplied credential back to its webhook.
pub const PUSH_CREDENTIAL_HEADER: &str = "X-TELEX-API-KEY";

/// Delivers serialized envelopes to caller-specified webhook URLs.
///
/// Delivery is fire-and-forget: no retry, no timeout beyond the transport
/// default, and a non-success response is logged but never fed back into
/// task state.
#[derive(Clone)]
pub struct WebhookNotifier {
    http: reqwest::Client,
}

impl WebhookNotifier {
    pub fn new(http: reqwest::Client) -> Self {
        WebhookNotifier { http }
    }

    /// POST the envelope to `url` with the credential attached.
    pub async fn deliver(
        &self,
        url: &str,
        credential: &str,
        envelope: &SendResponse,
    ) -> Result<StatusCode, AgentError> {
        let response = self
            .http
            .post(url)
            .header(PUSH_CREDENTIAL_HEADER, credential)
            .json(envelope)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(%url, %status, "webhook delivered");
        } else {
            tracing::warn!(%url, %status, "webhook endpoint returned non-success status");
        }
        Ok(status)
    }
}
