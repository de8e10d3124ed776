//! Event Agents
//!
//! Per-agent intelligence over the shared event bus. Each agent consumes
//! one event at a time, scores risk and confidence from rolling learned
//! statistics, and emits an advisory response (ok / escalate / alarm /
//! defer) with suggested actions. Learning state is private per agent and
//! bounded; processing never propagates an error to the caller.

pub mod agent;
pub mod learning;
pub mod types;

pub use agent::EventAgent;
pub use learning::{LearningStore, PatternStats, RecordedResponse};
pub use types::{
    AgentInsights, AgentResponse, EventAgentConfig, PatternInsight, ResponseStatus, RiskLevel,
};
