//! ActiveBotGraph — the swarm baton
//!
//! A single-holder turn-taking token. When `active_bot_id` is set, only
//! that participant responds; an id that doesn't resolve yields an empty
//! result that still means "baton holder missing", not "no baton". When
//! unset, the baton defaults to the arbitrator, then to a leader-like
//! role.

use async_trait::async_trait;
use tracing::warn;

use super::types::{
    AgentGraph, AgentSelectionResult, ConversationState, Participant, SelectionStrategy, Trigger,
};

/// Roles that pick up the baton when no arbitrator exists.
const LEADER_ROLES: [&str; 3] = ["leader", "delegator", "coordinator"];

/// Graph that resolves the swarm baton holder. Returns at most one
/// responder.
#[derive(Debug, Clone, Default)]
pub struct ActiveBotGraph {
    suppress_warnings: bool,
}

impl ActiveBotGraph {
    pub fn new() -> Self {
        Self {
            suppress_warnings: false,
        }
    }

    /// Construct with the missing-baton warning suppressed. Used by the
    /// composite graph, which has its own fallback.
    pub fn with_suppressed_warnings() -> Self {
        Self {
            suppress_warnings: true,
        }
    }

    fn find_default_holder<'a>(
        &self,
        conversation: &'a ConversationState,
    ) -> Option<&'a Participant> {
        let role_of = |p: &Participant| {
            p.meta
                .role
                .as_deref()
                .map(|r| r.trim().to_ascii_lowercase())
        };

        if let Some(arbitrator) = conversation
            .participants
            .iter()
            .find(|p| role_of(p).as_deref() == Some("arbitrator"))
        {
            return Some(arbitrator);
        }

        conversation.participants.iter().find(|p| {
            role_of(p)
                .map(|r| LEADER_ROLES.contains(&r.as_str()))
                .unwrap_or(false)
        })
    }
}

#[async_trait]
impl AgentGraph for ActiveBotGraph {
    async fn select_responders(
        &self,
        conversation: &ConversationState,
        _trigger: &Trigger,
    ) -> AgentSelectionResult {
        if let Some(active_id) = conversation.config.active_bot_id.as_deref() {
            // Explicit baton: a dangling holder is "holder missing", never
            // a reason to reassign.
            let responders = conversation
                .participant(active_id)
                .cloned()
                .into_iter()
                .collect();
            return AgentSelectionResult {
                responders,
                strategy: SelectionStrategy::SwarmBaton,
            };
        }

        match self.find_default_holder(conversation) {
            Some(holder) => AgentSelectionResult {
                responders: vec![holder.clone()],
                strategy: SelectionStrategy::SwarmBaton,
            },
            None => {
                if !self.suppress_warnings {
                    warn!("no active bot configured and no arbitrator or leader-role participant found");
                }
                AgentSelectionResult::empty(SelectionStrategy::SwarmBaton)
            }
        }
    }
}
