//! Task dispatcher: the synchronous half of the push-notification protocol.
//!
//! `submit` validates an inbound request in a single typed pass, allocates a
//! fresh `SUBMITTED` task, schedules the fulfillment chain as a detached unit
//! of work and returns the acknowledgment envelope without waiting on it.
//! All protocol failures detected here are encoded as error envelopes; the
//! transport status stays 200.

use crate::notifier::WebhookNotifier;
use crate::weather::WeatherClient;
use a2a_task::{
    ErrorDetail, PushNotificationConfig, RequestId, SendMessageRequest, SendResponse, Task,
};

const SUBMITTED_STATUS_TEXT: &str = "In progress";

/// Orchestrates the task lifecycle for message submissions.
pub struct TaskDispatcher {
    weather: WeatherClient,
    notifier: WebhookNotifier,
}

impl TaskDispatcher {
    pub fn new(weather: WeatherClient, notifier: WebhookNotifier) -> Self {
        TaskDispatcher { weather, notifier }
    }

    /// Handle one raw request body, returning the synchronous envelope.
    ///
    /// Never blocks on fulfillment: on valid input the background chain is
    /// spawned and the `SUBMITTED` envelope is returned immediately, so the
    /// caller always observes the acknowledgment before its webhook can be
    /// called.
    pub fn submit(&self, raw_body: &str) -> SendResponse {
        let request = match parse_request(raw_body) {
            Ok(request) => request,
            Err(envelope) => return *envelope,
        };
        let correlation_id = request.id.clone();

        let Some(push_config) = request.push_config().cloned() else {
            return SendResponse::error(
                correlation_id,
                ErrorDetail::invalid_request("Missing push notification configuration"),
            );
        };

        let Some(query) = request.params.message.first_text().map(str::to_owned) else {
            return SendResponse::error(
                correlation_id,
                ErrorDetail::invalid_params("Message cannot be empty."),
            );
        };

        let task = Task::submitted(SUBMITTED_STATUS_TEXT);
        self.spawn_fulfillment(query, correlation_id.clone(), task.clone(), push_config);

        SendResponse::success(correlation_id, task)
    }

    /// Schedule the lookup-and-callback chain as a detached task.
    ///
    /// The unit of work is unsupervised: no join handle is kept, there is no
    /// cancellation path and no retry. Failures become a `FAILED` task
    /// delivered to the same webhook; webhook delivery failures are logged
    /// and dropped.
    fn spawn_fulfillment(
        &self,
        query: String,
        correlation_id: Option<RequestId>,
        task: Task,
        push_config: PushNotificationConfig,
    ) {
        let weather = self.weather.clone();
        let notifier = self.notifier.clone();

        tokio::spawn(async move {
            let task_id = task.id.clone();
            let envelope = match weather.lookup(&query).await {
                Ok(report) => {
                    tracing::info!(%task_id, %query, "task completed");
                    SendResponse::success(correlation_id, task.completed(report))
                }
                Err(e) => {
                    tracing::error!(%task_id, %query, error = %e, "task failed");
                    SendResponse::success(correlation_id, task.failed(e.to_string()))
                }
            };

            if let Err(e) = notifier
                .deliver(
                    &push_config.url,
                    &push_config.authentication.credentials,
                    &envelope,
                )
                .await
            {
                tracing::error!(%task_id, url = %push_config.url, error = %e, "webhook delivery failed");
            }
        });
    }
}

/// Parse the raw body into a typed request, or the error envelope to return.
///
/// An unparseable body yields a parse-error envelope with a null id; a body
/// that parses as JSON but not as a request yields an invalid-request
/// envelope with the caller's id recovered best-effort.
fn parse_request(raw_body: &str) -> Result<SendMessageRequest, Box<SendResponse>> {
    let value: serde_json::Value = serde_json::from_str(raw_body)
        .map_err(|e| Box::new(SendResponse::error(None, ErrorDetail::json_parse(e.to_string()))))?;

    serde_json::from_value(value.clone()).map_err(|e| {
        let id = recover_id(&value);
        Box::new(SendResponse::error(
            id,
            ErrorDetail::invalid_request(e.to_string()),
        ))
    })
}

fn recover_id(value: &serde_json::Value) -> Option<RequestId> {
    value
        .get("id")
        .cloned()
        .and_then(|id| serde_json::from_value(id).ok())
}
