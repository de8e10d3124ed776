//! Tool Handler Collaborators
//!
//! External handler interfaces for MCP tools. The runner holds these as
//! injected `Arc<dyn _>` capabilities and normalizes their heterogeneous
//! result shapes into the uniform envelope.

use async_trait::async_trait;
use serde_json::Value;

use swarm_relay_core::CoreResult;

/// Envelope returned by MCP built-in tool handlers.
///
/// `is_error` marks a tool-level failure whose detail is in `content`;
/// transport/execution failures surface as `Err` from the handler method.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolResponse {
    pub content: String,
    pub is_error: bool,
}

impl ToolResponse {
    pub fn ok(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_error: false,
        }
    }

    pub fn err(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_error: true,
        }
    }
}

/// Bespoke success/error shape returned by swarm tool handlers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SwarmOutcome {
    pub success: bool,
    pub data: Option<Value>,
    pub error: Option<String>,
    pub message: Option<String>,
}

impl SwarmOutcome {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            ..Default::default()
        }
    }

    pub fn ok_with_data(message: impl Into<String>, data: Value) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
            ..Default::default()
        }
    }

    pub fn err(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            ..Default::default()
        }
    }
}

/// MCP built-in tool handlers.
///
/// Every method receives the authenticated session user; the runner has
/// already enforced its presence.
#[async_trait]
pub trait BuiltInTools: Send + Sync {
    async fn define_tool(&self, args: &Value, session_user: &str) -> CoreResult<ToolResponse>;
    async fn send_message(&self, args: &Value, session_user: &str) -> CoreResult<ToolResponse>;
    async fn resource_manage(&self, args: &Value, session_user: &str) -> CoreResult<ToolResponse>;
    async fn run_routine(&self, args: &Value, session_user: &str) -> CoreResult<ToolResponse>;
}

/// MCP swarm tool handlers. These operate on a conversation, so the runner
/// additionally enforces `conversation_id` before calling.
#[async_trait]
pub trait SwarmTools: Send + Sync {
    async fn spawn_swarm(
        &self,
        args: &Value,
        session_user: &str,
        conversation_id: &str,
    ) -> CoreResult<SwarmOutcome>;

    async fn update_swarm_shared_state(
        &self,
        args: &Value,
        session_user: &str,
        conversation_id: &str,
    ) -> CoreResult<SwarmOutcome>;

    async fn end_swarm(
        &self,
        args: &Value,
        session_user: &str,
        conversation_id: &str,
    ) -> CoreResult<SwarmOutcome>;
}
