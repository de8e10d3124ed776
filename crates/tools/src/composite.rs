//! Composite Tool Runner
//!
//! Pure routing: MCP and swarm names go to the MCP runner, everything else
//! to the OpenAI runner. No business logic of its own.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::handlers::{BuiltInTools, SwarmTools};
use crate::mcp::McpToolRunner;
use crate::openai::OpenAiToolRunner;
use crate::runner::ToolRunner;
use crate::types::{CallMeta, ToolName, ToolRunOutcome};

/// Routes tool calls to the correct backend by parsed name category.
pub struct CompositeToolRunner {
    openai: OpenAiToolRunner,
    mcp: McpToolRunner,
}

impl CompositeToolRunner {
    pub fn new(built_in: Arc<dyn BuiltInTools>, swarm: Arc<dyn SwarmTools>) -> Self {
        Self {
            openai: OpenAiToolRunner::new(),
            mcp: McpToolRunner::new(built_in, swarm),
        }
    }
}

#[async_trait]
impl ToolRunner for CompositeToolRunner {
    async fn run(&self, name: &str, args: &Value, meta: &CallMeta) -> ToolRunOutcome {
        match ToolName::parse(name) {
            Some(ToolName::Mcp(tool)) => self.mcp.run_mcp(tool, args, meta).await,
            Some(ToolName::Swarm(tool)) => self.mcp.run_swarm(tool, args, meta).await,
            // Provider-native names are an open set; unknown strings fall
            // through to the OpenAI runner's own dispatch.
            Some(ToolName::OpenAi(_)) | None => self.openai.run(name, args, meta).await,
        }
    }
}
