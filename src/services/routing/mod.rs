//! Responder Routing
//!
//! Agent selection graphs: given conversation state and a trigger, decide
//! which bot participants respond. Variants cover direct mention, topic
//! subscription, the swarm baton, and a composite that chains them with a
//! final fallback.
//!
//! Selection is a pure read of conversation state: graphs mutate nothing
//! and never fail — "no match" is an empty responder list with an accurate
//! strategy tag, so callers can always audit the routing decision.

pub mod active_bot;
pub mod composite;
pub mod direct;
pub mod subscription;
pub mod topic;
pub mod types;

pub use active_bot::ActiveBotGraph;
pub use composite::CompositeGraph;
pub use direct::DirectResponderGraph;
pub use subscription::SubscriptionGraph;
pub use topic::topic_matches;
pub use types::{
    AgentGraph, AgentSelectionResult, ConversationConfig, ConversationState, MessageConfig,
    MessageState, Participant, ParticipantKind, ParticipantMeta, SelectionStrategy, Trigger,
};
