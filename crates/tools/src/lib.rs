//! Swarm Relay Tools
//!
//! Tool dispatch for the orchestration core: a closed tool-name taxonomy,
//! the credit-accounted result envelope, and the runner family that routes
//! named tool calls to the correct backend.
//!
//! Runners never panic and never surface transport-level errors — every
//! failure path is a typed `ToolCallError` carrying the credits charged, so
//! callers can always bill and log uniformly.

pub mod composite;
pub mod handlers;
pub mod mcp;
pub mod openai;
pub mod runner;
pub mod types;

// Re-export main types
pub use composite::CompositeToolRunner;
pub use handlers::{BuiltInTools, SwarmOutcome, SwarmTools, ToolResponse};
pub use mcp::McpToolRunner;
pub use openai::OpenAiToolRunner;
pub use runner::ToolRunner;
pub use types::{
    CallMeta, McpTool, OpenAiTool, SwarmTool, ToolCallError, ToolCallResult, ToolErrorCode,
    ToolName, ToolOutput, ToolRunOutcome,
};
