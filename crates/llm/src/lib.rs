//! Swarm Relay LLM
//!
//! Brokers model requests for the orchestration core: a model-service
//! abstraction, a registry that picks the best backend per model, and the
//! integration service that drives a streamed response into an accumulated
//! result with token/credit accounting.
//!
//! Layering rule: this crate surfaces tool-call events back to the caller
//! and never executes tools itself — dispatch belongs to the orchestration
//! tier.

pub mod accumulator;
pub mod integration;
pub mod pricing;
pub mod registry;
pub mod types;

// Re-export main types
pub use accumulator::ResponseAccumulator;
pub use integration::LlmIntegrationService;
pub use pricing::{available_models, estimate_cost, ModelPricing};
pub use registry::{LlmEventStream, ModelService, ServiceRegistry, StreamingOptions};
pub use types::{
    ExecutedResponse, ExecutionResources, LlmError, LlmRequest, LlmResult, Message, MessageRole,
    PendingToolCall, ResourceUsage, ToolDefinition,
};
