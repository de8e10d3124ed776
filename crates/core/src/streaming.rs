//! Unified LLM Stream Event Types
//!
//! Provider-agnostic event types for processing real-time model responses.
//! Every model service converges on this shape, so the integration layer can
//! drive one accumulator regardless of backend.

use serde::{Deserialize, Serialize};

/// Unified streaming event emitted by model services.
///
/// A stream is a sequence of deltas terminated by exactly one `Done` or
/// `Error` event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LlmStreamEvent {
    /// Text content delta from the model
    TextDelta { content: String },

    /// Reasoning/thinking content delta, kept separate from response text
    ReasoningDelta { content: String },

    /// The model requests a tool invocation.
    ///
    /// The stream layer never executes the call; it is surfaced to the
    /// orchestration tier for dispatch.
    FunctionCall {
        call_id: String,
        name: String,
        /// Complete JSON string of tool arguments
        arguments: String,
    },

    /// Stream complete with final usage accounting
    Done {
        input_tokens: u32,
        output_tokens: u32,
        /// Total cost in credits/USD for this request
        #[serde(skip_serializing_if = "Option::is_none")]
        cost: Option<f64>,
    },

    /// Error during streaming — aborts the stream
    Error {
        message: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        code: Option<String>,
    },
}

impl LlmStreamEvent {
    /// Whether this event terminates the stream.
    pub fn is_terminal(&self) -> bool {
        matches!(self, LlmStreamEvent::Done { .. } | LlmStreamEvent::Error { .. })
    }
}
