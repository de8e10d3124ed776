//! LLM Request/Response Types
//!
//! The request shape callers hand to the integration service and the
//! accumulated response it returns, plus the error taxonomy for the model
//! path.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Role of a conversation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    System,
    User,
    Assistant,
    Tool,
}

/// A single conversation message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

/// A tool the model may call, in JSON-schema form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    /// JSON schema for the tool's arguments.
    pub parameters: Value,
}

/// A request to execute against a model backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmRequest {
    /// Requested model name, e.g. "gpt-4o".
    pub model: String,
    /// Conversation history.
    pub messages: Vec<Message>,
    /// Tools available to the model.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<ToolDefinition>,
}

/// Execution resource limits for one request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ExecutionResources {
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Default for ExecutionResources {
    fn default() -> Self {
        Self {
            max_tokens: 4096,
            temperature: 0.7,
        }
    }
}

/// A tool call the model requested, surfaced to the orchestration tier.
///
/// The `output` is a pending marker, never a real result — this layer does
/// not execute tools.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingToolCall {
    pub call_id: String,
    pub name: String,
    /// Complete JSON string of tool arguments.
    pub arguments: String,
    pub output: String,
}

/// Resource accounting for one executed request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResourceUsage {
    pub tokens_used: u32,
    pub api_calls: u32,
    pub compute_time_ms: u64,
    pub cost: f64,
}

/// The accumulated result of one streamed model request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutedResponse {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<String>,
    /// Placeholder confidence until response grading lands.
    pub confidence: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tool_calls: Vec<PendingToolCall>,
    pub resource_usage: ResourceUsage,
}

/// Errors from the model path.
#[derive(Error, Debug)]
pub enum LlmError {
    /// No registered service can serve the requested model.
    #[error("No service available for model: {model}")]
    NoServiceAvailable { model: String },

    /// A registered service id no longer resolves.
    #[error("Service not found: {service_id}")]
    ServiceNotFound { service_id: String },

    /// The backend reported an error mid-stream; the stream is aborted.
    #[error("Stream error: {message}")]
    Stream {
        message: String,
        code: Option<String>,
    },

    /// The request was malformed.
    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    /// Backend failure while opening the stream.
    #[error("Service error: {message}")]
    Service { message: String },
}

/// Result type alias for the model path
pub type LlmResult<T> = Result<T, LlmError>;
