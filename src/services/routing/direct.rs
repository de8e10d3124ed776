//! DirectResponderGraph — explicit mentions
//!
//! Selects the bots named in the trigger's `responding_bots` list. The
//! `"@all"` sentinel selects every participant. Only message triggers carry
//! mentions; system events never match.

use async_trait::async_trait;

use super::types::{
    dedupe_by_id, AgentGraph, AgentSelectionResult, ConversationState, SelectionStrategy, Trigger,
};

/// The sentinel mention that addresses every participant.
pub const ALL_SENTINEL: &str = "@all";

/// Graph that resolves explicit mentions to responders.
#[derive(Debug, Clone, Default)]
pub struct DirectResponderGraph;

impl DirectResponderGraph {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AgentGraph for DirectResponderGraph {
    async fn select_responders(
        &self,
        conversation: &ConversationState,
        trigger: &Trigger,
    ) -> AgentSelectionResult {
        let Some(config) = trigger.message_config() else {
            return AgentSelectionResult::empty(SelectionStrategy::DirectMention);
        };
        let Some(responding_bots) = config.responding_bots.as_ref() else {
            return AgentSelectionResult::empty(SelectionStrategy::DirectMention);
        };

        if responding_bots.iter().any(|id| id == ALL_SENTINEL) {
            return AgentSelectionResult {
                responders: conversation.participants.clone(),
                strategy: SelectionStrategy::DirectMention,
            };
        }

        // Resolve mentions in mention order; unknown ids drop out.
        let responders = dedupe_by_id(
            responding_bots
                .iter()
                .filter_map(|id| conversation.participant(id).cloned())
                .collect(),
        );

        AgentSelectionResult {
            responders,
            strategy: SelectionStrategy::DirectMention,
        }
    }
}
