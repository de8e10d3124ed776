//! Tool Call Types
//!
//! The closed tool-name taxonomy and the uniform result envelope. Dispatch
//! is keyed on sum types rather than raw strings so an unhandled tool is a
//! compile error, not a runtime default branch. Credits are tracked as
//! stringified non-negative integers and are charged on failure too.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

// ============================================================================
// Tool Name Taxonomy
// ============================================================================

/// Provider-native built-in tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpenAiTool {
    WebSearch,
    FileSearch,
}

impl OpenAiTool {
    pub fn as_str(&self) -> &'static str {
        match self {
            OpenAiTool::WebSearch => "web_search",
            OpenAiTool::FileSearch => "file_search",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "web_search" => Some(OpenAiTool::WebSearch),
            "file_search" => Some(OpenAiTool::FileSearch),
            _ => None,
        }
    }
}

/// Tools exposed through the MCP tool registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum McpTool {
    DefineTool,
    SendMessage,
    ResourceManage,
    RunRoutine,
}

impl McpTool {
    pub fn as_str(&self) -> &'static str {
        match self {
            McpTool::DefineTool => "define_tool",
            McpTool::SendMessage => "send_message",
            McpTool::ResourceManage => "resource_manage",
            McpTool::RunRoutine => "run_routine",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "define_tool" => Some(McpTool::DefineTool),
            "send_message" => Some(McpTool::SendMessage),
            "resource_manage" => Some(McpTool::ResourceManage),
            "run_routine" => Some(McpTool::RunRoutine),
            _ => None,
        }
    }
}

/// MCP swarm tools — these additionally operate on a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwarmTool {
    SpawnSwarm,
    UpdateSwarmSharedState,
    EndSwarm,
}

impl SwarmTool {
    pub fn as_str(&self) -> &'static str {
        match self {
            SwarmTool::SpawnSwarm => "spawn_swarm",
            SwarmTool::UpdateSwarmSharedState => "update_swarm_shared_state",
            SwarmTool::EndSwarm => "end_swarm",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "spawn_swarm" => Some(SwarmTool::SpawnSwarm),
            "update_swarm_shared_state" => Some(SwarmTool::UpdateSwarmSharedState),
            "end_swarm" => Some(SwarmTool::EndSwarm),
            _ => None,
        }
    }
}

/// A recognized tool name, grouped by dispatch category.
///
/// Unknown strings intentionally do not parse: from the model's point of
/// view provider-native tool names are an open set, so unrecognized names
/// fall to the OpenAI runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolName {
    OpenAi(OpenAiTool),
    Mcp(McpTool),
    Swarm(SwarmTool),
}

impl ToolName {
    /// Parse a raw tool name into the closed taxonomy.
    pub fn parse(name: &str) -> Option<Self> {
        if let Some(tool) = McpTool::parse(name) {
            return Some(ToolName::Mcp(tool));
        }
        if let Some(tool) = SwarmTool::parse(name) {
            return Some(ToolName::Swarm(tool));
        }
        OpenAiTool::parse(name).map(ToolName::OpenAi)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ToolName::OpenAi(t) => t.as_str(),
            ToolName::Mcp(t) => t.as_str(),
            ToolName::Swarm(t) => t.as_str(),
        }
    }
}

// ============================================================================
// Call Metadata
// ============================================================================

/// Per-call metadata supplied by the orchestration tier.
///
/// MCP tools require `session_user`; swarm tools additionally require
/// `conversation_id`. Runners enforce these preconditions as typed errors,
/// never panics.
#[derive(Debug, Clone, Default)]
pub struct CallMeta {
    pub session_user: Option<String>,
    pub conversation_id: Option<String>,
}

impl CallMeta {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session_user(mut self, user: impl Into<String>) -> Self {
        self.session_user = Some(user.into());
        self
    }

    pub fn with_conversation_id(mut self, id: impl Into<String>) -> Self {
        self.conversation_id = Some(id.into());
        self
    }
}

// ============================================================================
// Result Envelope
// ============================================================================

/// Output of a successful tool call.
///
/// Most tools return text; `update_swarm_shared_state` returns its data
/// object directly since downstream consumers need the structured shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ToolOutput {
    Text(String),
    Structured(Value),
}

impl ToolOutput {
    /// Render the output as text for LLM consumption.
    pub fn to_content(&self) -> String {
        match self {
            ToolOutput::Text(s) => s.clone(),
            ToolOutput::Structured(v) => serde_json::to_string(v).unwrap_or_default(),
        }
    }
}

/// A successful tool call with its accounted cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCallResult {
    pub output: ToolOutput,
    /// Stringified non-negative integer credit charge.
    pub credits_used: String,
}

impl ToolCallResult {
    /// Text output with the given credit charge.
    pub fn text(output: impl Into<String>, credits: u32) -> Self {
        Self {
            output: ToolOutput::Text(output.into()),
            credits_used: credits.to_string(),
        }
    }

    /// Structured output with the given credit charge.
    pub fn structured(value: Value, credits: u32) -> Self {
        Self {
            output: ToolOutput::Structured(value),
            credits_used: credits.to_string(),
        }
    }
}

/// Stable error codes for tool dispatch and execution failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ToolErrorCode {
    UnknownOpenAiTool,
    OpenAiApiError,
    MissingSessionUserMcp,
    MissingSessionUserSwarm,
    MissingConversationIdSwarm,
    NotAnMcpTool,
    McpExecutionError,
    SwarmExecutionError,
}

impl ToolErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolErrorCode::UnknownOpenAiTool => "UNKNOWN_OPENAI_TOOL",
            ToolErrorCode::OpenAiApiError => "OPENAI_API_ERROR",
            ToolErrorCode::MissingSessionUserMcp => "MISSING_SESSION_USER_MCP",
            ToolErrorCode::MissingSessionUserSwarm => "MISSING_SESSION_USER_SWARM",
            ToolErrorCode::MissingConversationIdSwarm => "MISSING_CONVERSATION_ID_SWARM",
            ToolErrorCode::NotAnMcpTool => "NOT_AN_MCP_TOOL",
            ToolErrorCode::McpExecutionError => "MCP_EXECUTION_ERROR",
            ToolErrorCode::SwarmExecutionError => "SWARM_EXECUTION_ERROR",
        }
    }
}

/// A failed tool call. Failures still carry an accounted cost so callers
/// can always bill correctly.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[error("{}: {message} ({credits_used} credits)", .code.as_str())]
pub struct ToolCallError {
    pub code: ToolErrorCode,
    pub message: String,
    /// Stringified non-negative integer credit charge.
    pub credits_used: String,
}

impl ToolCallError {
    pub fn new(code: ToolErrorCode, message: impl Into<String>, credits: u32) -> Self {
        Self {
            code,
            message: message.into(),
            credits_used: credits.to_string(),
        }
    }
}

/// Uniform success/failure value returned by every runner.
///
/// The `Err` arm is a billed result, not a transport failure — `run` itself
/// never panics and never loses the credit accounting.
pub type ToolRunOutcome = Result<ToolCallResult, ToolCallError>;
