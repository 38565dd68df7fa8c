//! # A2A Push-Notification Task Protocol Types
//!
//! Data structures for the asynchronous task lifecycle used by push-notification
//! agents: a client submits a message, receives an immediate acknowledgment
//! wrapping a `Task` in the `SUBMITTED` state, and later receives the terminal
//! envelope (`COMPLETED` or `FAILED`) at its webhook URL.
//!
//! The types are designed for serialization and deserialization with `serde`.
//! Optional fields that hold no value are omitted entirely from serialized
//! output, never emitted as `null` (the `id` correlation field is the one
//! deliberate exception, per JSON-RPC).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod agent_card;
pub use agent_card::{AgentCapabilities, AgentCard, AgentProvider, AgentSkill, SkillExample};

// ============================================================================
// Content Parts, Messages and Artifacts
// ============================================================================

/// A typed content fragment of a message or artifact.
///
/// Only text is exercised today; the untagged enum keeps the seam open for
/// file or structured-data variants without changing the wire shape of
/// existing text parts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Part {
    /// A text segment, e.g. `{"text": "Abuja", "contentType": "text/plain"}`.
    Text {
        /// The string content of the part.
        text: String,
        /// The MIME type of the content.
        #[serde(skip_serializing_if = "Option::is_none", rename = "contentType")]
        content_type: Option<String>,
    },
}

impl Part {
    /// Create a plain text part without an explicit content type.
    pub fn text(text: impl Into<String>) -> Self {
        Part::Text {
            text: text.into(),
            content_type: None,
        }
    }

    /// The text content of this part, if it is a text part.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Part::Text { text, .. } => Some(text),
        }
    }
}

/// Identifies the sender of a message.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// A message sent by the client.
    User,
    /// A message sent by the agent.
    Agent,
}

/// A single communicative turn between the client and the agent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    /// Identifies the sender of the message. Inbound messages may omit it,
    /// in which case the sender is taken to be the client.
    #[serde(default = "default_message_role")]
    pub role: MessageRole,
    /// The ordered content parts that form the message body.
    pub parts: Vec<Part>,
}

fn default_message_role() -> MessageRole {
    MessageRole::User
}

impl Message {
    /// Create an agent message carrying a single text part.
    pub fn agent_text(text: impl Into<String>) -> Self {
        Message {
            role: MessageRole::Agent,
            parts: vec![Part::text(text)],
        }
    }

    /// The first non-empty text content in this message, if any.
    pub fn first_text(&self) -> Option<&str> {
        self.parts
            .iter()
            .filter_map(Part::as_text)
            .find(|t| !t.trim().is_empty())
    }
}

/// A deliverable produced by task completion, distinct from a status message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Artifact {
    /// The ordered content parts that make up the artifact.
    pub parts: Vec<Part>,
}

impl Artifact {
    /// Create an artifact carrying a single text part.
    pub fn text(text: impl Into<String>) -> Self {
        Artifact {
            parts: vec![Part::text(text)],
        }
    }
}

// ============================================================================
// Task Lifecycle
// ============================================================================

/// Lifecycle states of a task.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskState {
    /// The task has been accepted and is awaiting execution.
    Submitted,
    /// The agent is actively working on the task.
    Working,
    /// The task is paused waiting for input from the user.
    InputRequired,
    /// The task completed successfully.
    Completed,
    /// The task was canceled.
    Canceled,
    /// The task failed during execution.
    Failed,
    /// The task is in an unknown state.
    Unknown,
}

/// The status of a task at a specific point in time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskStatus {
    /// The current lifecycle state.
    pub state: TaskState,
    /// An optional human-readable message describing the status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,
}

/// The unit of work tracked by the protocol.
///
/// A task is created exactly once, in the `SUBMITTED` state, with a fresh
/// opaque id. Reaching a terminal state produces a *new* `Task` value with the
/// same id via [`Task::completed`] or [`Task::failed`]; existing instances are
/// never mutated in place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    /// Opaque unique identifier, generated at creation and never reused.
    pub id: String,
    /// The current status of the task.
    pub status: TaskStatus,
    /// Artifacts produced on completion. Omitted until a terminal state
    /// carries one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifacts: Option<Vec<Artifact>>,
}

impl Task {
    /// Create a freshly submitted task with a random 128-bit hex id and an
    /// agent status message describing the in-progress work.
    pub fn submitted(status_text: impl Into<String>) -> Self {
        Task {
            id: Uuid::new_v4().simple().to_string(),
            status: TaskStatus {
                state: TaskState::Submitted,
                message: Some(Message::agent_text(status_text)),
            },
            artifacts: None,
        }
    }

    /// Transition this task to `COMPLETED`, carrying the result text both as
    /// the status message and as a single-part artifact. The id is preserved.
    pub fn completed(self, result_text: impl Into<String>) -> Self {
        let text = result_text.into();
        Task {
            id: self.id,
            status: TaskStatus {
                state: TaskState::Completed,
                message: Some(Message::agent_text(text.clone())),
            },
            artifacts: Some(vec![Artifact::text(text)]),
        }
    }

    /// Transition this task to `FAILED` with a human-readable error message.
    /// The id is preserved and no artifact is attached.
    pub fn failed(self, error_text: impl Into<String>) -> Self {
        Task {
            id: self.id,
            status: TaskStatus {
                state: TaskState::Failed,
                message: Some(Message::agent_text(error_text)),
            },
            artifacts: None,
        }
    }
}

// ============================================================================
// JSON-RPC Envelopes
// ============================================================================

/// A caller-supplied correlation id: string, number or null. Echoed back
/// verbatim in every response and webhook payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RequestId {
    String(String),
    Number(i64),
    Null,
}

/// A JSON-RPC 2.0 error object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorDetail {
    /// A number indicating the error type that occurred.
    pub code: i32,
    /// A short description of the error.
    pub message: String,
    /// Additional information about the error. May be omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

pub const JSON_PARSE_ERROR_CODE: i32 = -32700;
pub const INVALID_REQUEST_ERROR_CODE: i32 = -32600;
pub const INVALID_PARAMS_ERROR_CODE: i32 = -32602;
pub const INTERNAL_ERROR_CODE: i32 = -32603;

impl ErrorDetail {
    /// The server received invalid JSON.
    pub fn json_parse(data: impl Into<String>) -> Self {
        ErrorDetail {
            code: JSON_PARSE_ERROR_CODE,
            message: "Invalid JSON payload".to_string(),
            data: Some(data.into()),
        }
    }

    /// The JSON sent is not a valid request object.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        ErrorDetail {
            code: INVALID_REQUEST_ERROR_CODE,
            message: message.into(),
            data: None,
        }
    }

    /// The request parsed but its parameters are invalid.
    pub fn invalid_params(message: impl Into<String>) -> Self {
        ErrorDetail {
            code: INVALID_PARAMS_ERROR_CODE,
            message: message.into(),
            data: None,
        }
    }

    /// An internal error on the server.
    pub fn internal(message: impl Into<String>) -> Self {
        ErrorDetail {
            code: INTERNAL_ERROR_CODE,
            message: message.into(),
            data: None,
        }
    }
}

/// The response envelope, used both for the synchronous acknowledgment and
/// for the asynchronous webhook payload. Exactly one of `result` / `error`
/// is ever populated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SendResponse {
    /// The JSON-RPC protocol version. Always "2.0".
    pub jsonrpc: String,
    /// The caller's correlation id, echoed back verbatim. `null` when the
    /// request body was unrecoverable.
    pub id: Option<RequestId>,
    /// The task resulting from a successful submission or fulfillment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Task>,
    /// The error that prevented the request from being processed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorDetail>,
}

const JSONRPC_VERSION: &str = "2.0";

impl SendResponse {
    /// Build a success envelope wrapping a task.
    pub fn success(id: Option<RequestId>, task: Task) -> Self {
        SendResponse {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            result: Some(task),
            error: None,
        }
    }

    /// Build an error envelope.
    pub fn error(id: Option<RequestId>, error: ErrorDetail) -> Self {
        SendResponse {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            result: None,
            error: Some(error),
        }
    }
}

// ============================================================================
// Inbound Request Types
// ============================================================================

/// Authentication details the agent must use when calling the webhook URL.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PushAuthentication {
    /// The caller-supplied credential, forwarded verbatim.
    pub credentials: String,
}

/// Where and how the agent should deliver the terminal task envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PushNotificationConfig {
    /// The callback URL for the terminal envelope.
    pub url: String,
    /// Credential to attach when calling the URL.
    pub authentication: PushAuthentication,
}

/// Configuration options accompanying a message submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SendConfiguration {
    /// Push-notification (webhook) delivery settings.
    #[serde(rename = "pushNotificationConfig")]
    pub push_notification_config: PushNotificationConfig,
}

/// The `params` of a message submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageSendParams {
    /// The message being sent to the agent.
    pub message: Message,
    /// Delivery configuration, when nested under `params`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration: Option<SendConfiguration>,
}

/// A complete inbound submission request.
///
/// Some callers nest the delivery `configuration` under `params`, others
/// place it at the top level of the request; both shapes are accepted and
/// [`SendMessageRequest::push_config`] resolves between them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendMessageRequest {
    /// The caller's correlation id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RequestId>,
    /// The JSON-RPC protocol version, when supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jsonrpc: Option<String>,
    /// The message and (optionally) its delivery configuration.
    pub params: MessageSendParams,
    /// Delivery configuration, when supplied at the top level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration: Option<SendConfiguration>,
}

impl SendMessageRequest {
    /// The webhook delivery settings, preferring the nested location.
    pub fn push_config(&self) -> Option<&PushNotificationConfig> {
        self.params
            .configuration
            .as_ref()
            .or(self.configuration.as_ref())
            .map(|c| &c.push_notification_config)
    }
}
