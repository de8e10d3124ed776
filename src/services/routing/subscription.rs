//! SubscriptionGraph — topic subscriptions
//!
//! Matches the trigger's `event_topic` against the conversation's
//! subscription patterns (MQTT-style wildcards) and selects the union of
//! subscribed bots that are actually participants.

use async_trait::async_trait;

use super::topic::topic_matches;
use super::types::{
    dedupe_by_id, AgentGraph, AgentSelectionResult, ConversationState, SelectionStrategy, Trigger,
};

/// Graph that resolves topic subscriptions to responders.
#[derive(Debug, Clone, Default)]
pub struct SubscriptionGraph;

impl SubscriptionGraph {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AgentGraph for SubscriptionGraph {
    async fn select_responders(
        &self,
        conversation: &ConversationState,
        trigger: &Trigger,
    ) -> AgentSelectionResult {
        let topic = trigger
            .message_config()
            .and_then(|config| config.event_topic.as_deref());
        let Some(topic) = topic else {
            return AgentSelectionResult::empty(SelectionStrategy::Subscription);
        };

        let mut subscribed: Vec<&String> = Vec::new();
        for (pattern, bot_ids) in &conversation.config.event_subscriptions {
            if topic_matches(pattern, topic) {
                subscribed.extend(bot_ids);
            }
        }

        let responders = dedupe_by_id(
            subscribed
                .into_iter()
                .filter_map(|id| conversation.participant(id).cloned())
                .collect(),
        );

        AgentSelectionResult {
            responders,
            strategy: SelectionStrategy::Subscription,
        }
    }
}
