//! Tool Runner Trait
//!
//! Defines the common interface for all tool runners. A runner takes a raw
//! tool name, JSON arguments, and call metadata, and always produces a
//! billed outcome — success or typed failure, never a panic.

use async_trait::async_trait;
use serde_json::Value;

use crate::types::{CallMeta, ToolRunOutcome};

/// Trait that all tool runners implement.
///
/// Implementations dispatch the named call to a backend and normalize the
/// result into the uniform credit-accounted envelope.
#[async_trait]
pub trait ToolRunner: Send + Sync {
    /// Dispatch one tool call.
    ///
    /// # Arguments
    /// * `name` - Raw tool name as requested by the model
    /// * `args` - JSON arguments for the tool
    /// * `meta` - Session/conversation metadata for precondition checks
    async fn run(&self, name: &str, args: &Value, meta: &CallMeta) -> ToolRunOutcome;
}
