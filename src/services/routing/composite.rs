//! CompositeGraph — ordered fallback chain
//!
//! Chains the selection strategies: direct mention, then subscription, then
//! the swarm baton, then a final first-participant fallback. An explicitly
//! configured baton is always final, even when its holder is missing — a
//! dangling baton must not be silently reassigned by falling through.

use async_trait::async_trait;

use super::active_bot::ActiveBotGraph;
use super::direct::DirectResponderGraph;
use super::subscription::SubscriptionGraph;
use super::types::{
    AgentGraph, AgentSelectionResult, ConversationState, SelectionStrategy, Trigger,
};

/// The full selection chain used for normal conversation turns.
pub struct CompositeGraph {
    direct: DirectResponderGraph,
    subscription: SubscriptionGraph,
    active_bot: ActiveBotGraph,
}

impl CompositeGraph {
    pub fn new() -> Self {
        Self {
            direct: DirectResponderGraph::new(),
            subscription: SubscriptionGraph::new(),
            // The composite has its own fallback, so the baton step stays quiet.
            active_bot: ActiveBotGraph::with_suppressed_warnings(),
        }
    }
}

impl Default for CompositeGraph {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AgentGraph for CompositeGraph {
    async fn select_responders(
        &self,
        conversation: &ConversationState,
        trigger: &Trigger,
    ) -> AgentSelectionResult {
        let direct = self.direct.select_responders(conversation, trigger).await;
        if !direct.responders.is_empty() {
            return direct;
        }

        let subscribed = self
            .subscription
            .select_responders(conversation, trigger)
            .await;
        if !subscribed.responders.is_empty() {
            return subscribed;
        }

        let baton = self
            .active_bot
            .select_responders(conversation, trigger)
            .await;
        // An explicitly-set baton is final even when the holder is missing.
        if !baton.responders.is_empty() || conversation.config.active_bot_id.is_some() {
            return baton;
        }

        AgentSelectionResult {
            responders: conversation.participants.first().cloned().into_iter().collect(),
            strategy: SelectionStrategy::Fallback,
        }
    }
}
