//! Response Accumulator
//!
//! An explicit state machine over stream-event variants. Driving the
//! accumulator is separate from the network transport so partial-failure
//! handling (an error mid-stream) is testable in isolation.

use swarm_relay_core::LlmStreamEvent;

use crate::types::{LlmError, LlmResult, PendingToolCall};

/// Marker recorded for model-requested tool calls.
///
/// Execution belongs to the orchestration tier; this layer only brokers
/// model output.
pub const PENDING_TOOL_CALL_OUTPUT: &str =
    "pending — tool execution is deferred to the orchestration tier";

/// Accumulates a streamed model response into its final parts.
#[derive(Debug, Default)]
pub struct ResponseAccumulator {
    content: String,
    reasoning: String,
    tool_calls: Vec<PendingToolCall>,
    input_tokens: u32,
    output_tokens: u32,
    cost: Option<f64>,
    finished: bool,
}

impl ResponseAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one stream event.
    ///
    /// Returns `Ok(true)` once the stream has completed (`Done`), `Ok(false)`
    /// while more events are expected, and `Err` for an `Error` event, which
    /// aborts the stream.
    pub fn apply(&mut self, event: LlmStreamEvent) -> LlmResult<bool> {
        match event {
            LlmStreamEvent::TextDelta { content } => {
                self.content.push_str(&content);
                Ok(false)
            }
            LlmStreamEvent::ReasoningDelta { content } => {
                self.reasoning.push_str(&content);
                Ok(false)
            }
            LlmStreamEvent::FunctionCall {
                call_id,
                name,
                arguments,
            } => {
                self.tool_calls.push(PendingToolCall {
                    call_id,
                    name,
                    arguments,
                    output: PENDING_TOOL_CALL_OUTPUT.to_string(),
                });
                Ok(false)
            }
            LlmStreamEvent::Done {
                input_tokens,
                output_tokens,
                cost,
            } => {
                self.input_tokens = input_tokens;
                self.output_tokens = output_tokens;
                self.cost = cost;
                self.finished = true;
                Ok(true)
            }
            LlmStreamEvent::Error { message, code } => Err(LlmError::Stream { message, code }),
        }
    }

    /// Accumulated response text.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Accumulated reasoning, `None` when the model emitted none.
    pub fn reasoning(&self) -> Option<&str> {
        if self.reasoning.is_empty() {
            None
        } else {
            Some(self.reasoning.as_str())
        }
    }

    /// Tool calls recorded so far.
    pub fn tool_calls(&self) -> &[PendingToolCall] {
        &self.tool_calls
    }

    /// Whether a `Done` event has been applied.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Total tokens from the final usage event.
    pub fn total_tokens(&self) -> u32 {
        self.input_tokens + self.output_tokens
    }

    /// Final parts: (content, reasoning, tool_calls, total_tokens, cost).
    pub fn into_parts(self) -> (String, Option<String>, Vec<PendingToolCall>, u32, Option<f64>) {
        let total = self.input_tokens + self.output_tokens;
        let reasoning = if self.reasoning.is_empty() {
            None
        } else {
            Some(self.reasoning)
        };
        (self.content, reasoning, self.tool_calls, total, self.cost)
    }
}
