//! Routing Types
//!
//! Conversation state, triggers, and the selection result shared by all
//! agent graphs. Conversation state is owned by the host conversation
//! service; graphs only read it.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

// ============================================================================
// Participants & Conversation State
// ============================================================================

/// Kind of conversation participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticipantKind {
    Bot,
    Human,
}

/// Participant metadata. `role` drives default baton assignment
/// (arbitrator, leader, delegator, coordinator).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParticipantMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default = "default_kind")]
    pub kind: ParticipantKind,
}

fn default_kind() -> ParticipantKind {
    ParticipantKind::Bot
}

impl Default for ParticipantKind {
    fn default() -> Self {
        ParticipantKind::Bot
    }
}

/// A bot or human identity in a conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: String,
    #[serde(default)]
    pub meta: ParticipantMeta,
}

impl Participant {
    /// A bot participant with no role.
    pub fn bot(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            meta: ParticipantMeta {
                role: None,
                kind: ParticipantKind::Bot,
            },
        }
    }

    /// A bot participant with the given role.
    pub fn bot_with_role(id: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            meta: ParticipantMeta {
                role: Some(role.into()),
                kind: ParticipantKind::Bot,
            },
        }
    }

    /// A human participant.
    pub fn human(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            meta: ParticipantMeta {
                role: None,
                kind: ParticipantKind::Human,
            },
        }
    }
}

/// Per-conversation settings bag read by the graphs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversationConfig {
    /// Current swarm baton holder, when explicitly assigned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_bot_id: Option<String>,
    /// Topic-pattern to bot-id subscriptions (MQTT-style patterns).
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub event_subscriptions: HashMap<String, Vec<String>>,
}

/// Conversation state as the graphs see it: an ordered participant list
/// plus the config bag. Owned externally; never mutated here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversationState {
    pub participants: Vec<Participant>,
    #[serde(default)]
    pub config: ConversationConfig,
}

impl ConversationState {
    pub fn new(participants: Vec<Participant>) -> Self {
        Self {
            participants,
            config: ConversationConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ConversationConfig) -> Self {
        self.config = config;
        self
    }

    /// Look up a participant by id.
    pub fn participant(&self, id: &str) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == id)
    }
}

// ============================================================================
// Triggers
// ============================================================================

/// Routing hints attached to a message.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageConfig {
    /// Explicitly mentioned responder bot ids; `"@all"` selects everyone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responding_bots: Option<Vec<String>>,
    /// Topic this message publishes on, matched against subscriptions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_topic: Option<String>,
}

/// A chat message driving a selection turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageState {
    pub role: String,
    #[serde(default)]
    pub config: MessageConfig,
}

/// What started this turn: a chat message or a bare system event.
/// Immutable, constructed by the caller per turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Trigger {
    Message(MessageState),
    System { content: String },
}

impl Trigger {
    /// A user message with the given routing config.
    pub fn message(config: MessageConfig) -> Self {
        Trigger::Message(MessageState {
            role: "user".to_string(),
            config,
        })
    }

    /// A bare system event.
    pub fn system(content: impl Into<String>) -> Self {
        Trigger::System {
            content: content.into(),
        }
    }

    /// Message routing config, `None` for system triggers.
    pub fn message_config(&self) -> Option<&MessageConfig> {
        match self {
            Trigger::Message(state) => Some(&state.config),
            Trigger::System { .. } => None,
        }
    }
}

// ============================================================================
// Selection Result
// ============================================================================

/// Which strategy produced a selection result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionStrategy {
    DirectMention,
    Subscription,
    SwarmBaton,
    Fallback,
}

/// The outcome of responder selection.
///
/// `responders` contains only entries present in the conversation's
/// participant list, de-duplicated by id. The strategy tag is accurate even
/// when the list is empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentSelectionResult {
    pub responders: Vec<Participant>,
    pub strategy: SelectionStrategy,
}

impl AgentSelectionResult {
    /// An empty result tagged with the deciding strategy.
    pub fn empty(strategy: SelectionStrategy) -> Self {
        Self {
            responders: Vec::new(),
            strategy,
        }
    }
}

// ============================================================================
// Agent Graph Trait
// ============================================================================

/// Core trait for responder selection graphs.
///
/// Selection never fails: absence of a match is an empty responder list,
/// not an error, so a routing decision can never crash the caller's turn
/// loop. Implementations are pure reads of the inputs.
#[async_trait]
pub trait AgentGraph: Send + Sync {
    /// Select the responders for this trigger.
    async fn select_responders(
        &self,
        conversation: &ConversationState,
        trigger: &Trigger,
    ) -> AgentSelectionResult;
}

/// De-duplicate participants by id, preserving first occurrence.
pub(crate) fn dedupe_by_id(participants: Vec<Participant>) -> Vec<Participant> {
    let mut seen = std::collections::HashSet::new();
    participants
        .into_iter()
        .filter(|p| seen.insert(p.id.clone()))
        .collect()
}
