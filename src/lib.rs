//! Swarm Relay - Orchestration Core Library
//!
//! The multi-bot orchestration layer of the Swarm Relay conversation engine:
//! - Responder routing: agent selection graphs (direct mention, topic
//!   subscription, swarm baton, composite fallback)
//! - Event agents: per-agent intelligence over the shared event bus
//! - Branch coordination: workflow branch fan-out with bus lifecycle events
//!
//! Foundational types (events, bus, errors), tool dispatch, and the LLM
//! integration service live in the workspace crates `swarm-relay-core`,
//! `swarm-relay-tools`, and `swarm-relay-llm`.

pub mod services;
pub mod utils;

// Re-export commonly used items
pub use services::branching::{
    Branch, BranchConfig, BranchCoordinator, BranchState, LocationDescriptor, Navigator, PathStep,
};
pub use services::event_agent::{
    AgentInsights, AgentResponse, EventAgent, EventAgentConfig, PatternInsight, ResponseStatus,
};
pub use services::routing::{
    ActiveBotGraph, AgentGraph, AgentSelectionResult, CompositeGraph, ConversationConfig,
    ConversationState, DirectResponderGraph, MessageConfig, MessageState, Participant,
    ParticipantKind, ParticipantMeta, SelectionStrategy, SubscriptionGraph, Trigger,
};
pub use utils::error::{AppError, AppResult};
