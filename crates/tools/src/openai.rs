//! OpenAI Built-in Tool Runner
//!
//! Dispatches provider-native built-in tools (`web_search`, `file_search`)
//! to local simulators. Unknown names return a typed `UNKNOWN_OPENAI_TOOL`
//! error with a minimal charge; simulator failures are caught and returned
//! as `OPENAI_API_ERROR`, also charged.

use async_trait::async_trait;
use serde_json::Value;

use crate::runner::ToolRunner;
use crate::types::{
    CallMeta, OpenAiTool, ToolCallError, ToolCallResult, ToolErrorCode, ToolRunOutcome,
};

/// Credit charge for a completed web search.
const WEB_SEARCH_CREDITS: u32 = 3;
/// Credit charge for a completed file search.
const FILE_SEARCH_CREDITS: u32 = 2;
/// Minimal charge applied to dispatch and execution failures.
const FAILURE_CREDITS: u32 = 1;

/// Runner for provider-native built-in tools.
#[derive(Debug, Clone, Default)]
pub struct OpenAiToolRunner;

impl OpenAiToolRunner {
    pub fn new() -> Self {
        Self
    }

    fn web_search(&self, args: &Value) -> Result<String, String> {
        let query = args
            .get("query")
            .and_then(Value::as_str)
            .ok_or_else(|| "web_search requires a 'query' string argument".to_string())?;
        let max_results = args
            .get("max_results")
            .and_then(Value::as_u64)
            .unwrap_or(5);
        Ok(format!(
            "Web search returned {} results for \"{}\"",
            max_results, query
        ))
    }

    fn file_search(&self, args: &Value) -> Result<String, String> {
        let query = args
            .get("query")
            .and_then(Value::as_str)
            .ok_or_else(|| "file_search requires a 'query' string argument".to_string())?;
        let store = args
            .get("vector_store_id")
            .and_then(Value::as_str)
            .unwrap_or("default");
        Ok(format!(
            "File search in store \"{}\" matched documents for \"{}\"",
            store, query
        ))
    }
}

#[async_trait]
impl ToolRunner for OpenAiToolRunner {
    async fn run(&self, name: &str, args: &Value, _meta: &CallMeta) -> ToolRunOutcome {
        let tool = match OpenAiTool::parse(name) {
            Some(tool) => tool,
            None => {
                return Err(ToolCallError::new(
                    ToolErrorCode::UnknownOpenAiTool,
                    format!("Unknown OpenAI built-in tool: {}", name),
                    FAILURE_CREDITS,
                ));
            }
        };

        let (outcome, credits) = match tool {
            OpenAiTool::WebSearch => (self.web_search(args), WEB_SEARCH_CREDITS),
            OpenAiTool::FileSearch => (self.file_search(args), FILE_SEARCH_CREDITS),
        };

        match outcome {
            Ok(output) => Ok(ToolCallResult::text(output, credits)),
            Err(message) => Err(ToolCallError::new(
                ToolErrorCode::OpenAiApiError,
                message,
                FAILURE_CREDITS,
            )),
        }
    }
}
