//! MCP Tool Runner
//!
//! Routes MCP and swarm tool calls to their injected handler collaborators.
//! Preconditions (session user, conversation id) are enforced as typed
//! zero-credit errors. The two handler result shapes — the `ToolResponse`
//! envelope for MCP tools and the bespoke `SwarmOutcome` for swarm tools —
//! are normalized into the uniform envelope here.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::handlers::{BuiltInTools, SwarmOutcome, SwarmTools, ToolResponse};
use crate::runner::ToolRunner;
use crate::types::{
    CallMeta, McpTool, SwarmTool, ToolCallError, ToolCallResult, ToolErrorCode, ToolName,
    ToolRunOutcome,
};

/// Credit charge for a completed MCP built-in tool call.
const MCP_TOOL_CREDITS: u32 = 1;
/// Credit charge for a completed swarm tool call.
const SWARM_TOOL_CREDITS: u32 = 2;
/// Charge applied when a handler fails during execution.
const FAILURE_CREDITS: u32 = 1;

/// Runner for MCP tools, backed by injected handler collaborators.
pub struct McpToolRunner {
    built_in: Arc<dyn BuiltInTools>,
    swarm: Arc<dyn SwarmTools>,
}

impl McpToolRunner {
    pub fn new(built_in: Arc<dyn BuiltInTools>, swarm: Arc<dyn SwarmTools>) -> Self {
        Self { built_in, swarm }
    }

    /// Dispatch an MCP built-in tool. Requires `meta.session_user`.
    pub async fn run_mcp(&self, tool: McpTool, args: &Value, meta: &CallMeta) -> ToolRunOutcome {
        let session_user = match meta.session_user.as_deref() {
            Some(user) => user,
            None => {
                return Err(ToolCallError::new(
                    ToolErrorCode::MissingSessionUserMcp,
                    format!("{} requires an authenticated session user", tool.as_str()),
                    0,
                ));
            }
        };

        debug!(tool = tool.as_str(), "dispatching MCP tool");
        let response = match tool {
            McpTool::DefineTool => self.built_in.define_tool(args, session_user).await,
            McpTool::SendMessage => self.built_in.send_message(args, session_user).await,
            McpTool::ResourceManage => self.built_in.resource_manage(args, session_user).await,
            McpTool::RunRoutine => self.built_in.run_routine(args, session_user).await,
        };

        match response {
            Ok(envelope) => normalize_tool_response(envelope),
            Err(e) => Err(ToolCallError::new(
                ToolErrorCode::McpExecutionError,
                e.to_string(),
                FAILURE_CREDITS,
            )),
        }
    }

    /// Dispatch a swarm tool. Requires `meta.session_user` and
    /// `meta.conversation_id`.
    pub async fn run_swarm(&self, tool: SwarmTool, args: &Value, meta: &CallMeta) -> ToolRunOutcome {
        let session_user = match meta.session_user.as_deref() {
            Some(user) => user,
            None => {
                return Err(ToolCallError::new(
                    ToolErrorCode::MissingSessionUserSwarm,
                    format!("{} requires an authenticated session user", tool.as_str()),
                    0,
                ));
            }
        };
        let conversation_id = match meta.conversation_id.as_deref() {
            Some(id) => id,
            None => {
                return Err(ToolCallError::new(
                    ToolErrorCode::MissingConversationIdSwarm,
                    format!("{} requires a conversation id", tool.as_str()),
                    0,
                ));
            }
        };

        debug!(tool = tool.as_str(), conversation_id, "dispatching swarm tool");
        let outcome = match tool {
            SwarmTool::SpawnSwarm => {
                self.swarm
                    .spawn_swarm(args, session_user, conversation_id)
                    .await
            }
            SwarmTool::UpdateSwarmSharedState => {
                self.swarm
                    .update_swarm_shared_state(args, session_user, conversation_id)
                    .await
            }
            SwarmTool::EndSwarm => {
                self.swarm
                    .end_swarm(args, session_user, conversation_id)
                    .await
            }
        };

        match outcome {
            Ok(result) => normalize_swarm_outcome(tool, result),
            Err(e) => Err(ToolCallError::new(
                ToolErrorCode::SwarmExecutionError,
                e.to_string(),
                FAILURE_CREDITS,
            )),
        }
    }
}

/// Normalize the MCP `ToolResponse` envelope into the uniform shape.
fn normalize_tool_response(response: ToolResponse) -> ToolRunOutcome {
    if response.is_error {
        Err(ToolCallError::new(
            ToolErrorCode::McpExecutionError,
            response.content,
            FAILURE_CREDITS,
        ))
    } else {
        Ok(ToolCallResult::text(response.content, MCP_TOOL_CREDITS))
    }
}

/// Normalize the bespoke swarm outcome shape into the uniform shape.
///
/// `update_swarm_shared_state` returns its data object directly as
/// structured output; downstream consumers need the shape, not a text blob.
fn normalize_swarm_outcome(tool: SwarmTool, outcome: SwarmOutcome) -> ToolRunOutcome {
    if !outcome.success {
        let message = outcome
            .error
            .or(outcome.message)
            .unwrap_or_else(|| format!("{} failed", tool.as_str()));
        return Err(ToolCallError::new(
            ToolErrorCode::SwarmExecutionError,
            message,
            FAILURE_CREDITS,
        ));
    }

    if tool == SwarmTool::UpdateSwarmSharedState {
        let data = outcome.data.unwrap_or(Value::Null);
        return Ok(ToolCallResult::structured(data, SWARM_TOOL_CREDITS));
    }

    let text = match (outcome.message, outcome.data) {
        (Some(message), _) => message,
        (None, Some(data)) => serde_json::to_string(&data).unwrap_or_default(),
        (None, None) => format!("{} completed", tool.as_str()),
    };
    Ok(ToolCallResult::text(text, SWARM_TOOL_CREDITS))
}

#[async_trait]
impl ToolRunner for McpToolRunner {
    async fn run(&self, name: &str, args: &Value, meta: &CallMeta) -> ToolRunOutcome {
        match ToolName::parse(name) {
            Some(ToolName::Mcp(tool)) => self.run_mcp(tool, args, meta).await,
            Some(ToolName::Swarm(tool)) => self.run_swarm(tool, args, meta).await,
            _ => Err(ToolCallError::new(
                ToolErrorCode::NotAnMcpTool,
                format!("{} is not an MCP or swarm tool", name),
                0,
            )),
        }
    }
}
