//! EventAgent — per-agent event intelligence
//!
//! Consumes one event at a time, scores risk from event metadata and
//! confidence from learned pattern statistics, and emits an advisory
//! response. Processing never propagates an internal error: the failure
//! path is an escalation response with zero confidence.

use std::collections::HashSet;
use std::time::Instant;

use tracing::debug;

use swarm_relay_core::{AgentCapability, EventCategory, EventPriority, IntelligentEvent, SecurityLevel};

use crate::utils::error::{AppError, AppResult};

use super::learning::LearningStore;
use super::types::{
    AgentInsights, AgentResponse, EventAgentConfig, PatternInsight, ResponseStatus, RiskLevel,
};

/// A per-agent intelligence unit over the event bus.
///
/// Learning state is private to the agent and mutated only by its own
/// processing, so no locking is needed within one agent.
pub struct EventAgent {
    id: String,
    name: String,
    capabilities: HashSet<AgentCapability>,
    config: EventAgentConfig,
    learning: LearningStore,
    events_processed: u64,
    average_response_time_ms: f64,
}

impl EventAgent {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        capabilities: Vec<AgentCapability>,
    ) -> Self {
        Self::with_config(id, name, capabilities, EventAgentConfig::default())
    }

    pub fn with_config(
        id: impl Into<String>,
        name: impl Into<String>,
        capabilities: Vec<AgentCapability>,
        config: EventAgentConfig,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            capabilities: capabilities.into_iter().collect(),
            learning: LearningStore::new(config.learning_capacity, config.response_log_cap),
            config,
            events_processed: 0,
            average_response_time_ms: 0.0,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this agent may handle the event.
    ///
    /// `target_agents`, when present, restricts handling to exactly that
    /// list and overrides the capability checks. Otherwise the agent must
    /// not be excluded and must have every required capability.
    pub fn can_handle(&self, event: &IntelligentEvent) -> bool {
        let Some(ctx) = event.agent_context.as_ref() else {
            return true;
        };
        if let Some(targets) = ctx.target_agents.as_ref() {
            return targets.iter().any(|t| t == &self.id);
        }
        if ctx.excluded_agents.iter().any(|e| e == &self.id) {
            return false;
        }
        ctx.required_capabilities
            .iter()
            .all(|cap| self.capabilities.contains(cap))
    }

    /// Process one event into an advisory response.
    ///
    /// Never returns an error: internal failures become an escalation
    /// response with zero confidence. Performance metrics update after
    /// every call, success or failure.
    pub async fn process_event(&mut self, event: &IntelligentEvent) -> AgentResponse {
        let started = Instant::now();

        let response = match self.evaluate(event) {
            Ok(response) => {
                let key = pattern_key(event);
                self.learning
                    .record(&key, response.status, response.confidence);
                response
            }
            Err(e) => AgentResponse {
                agent_id: self.id.clone(),
                event_id: event.id.clone(),
                status: ResponseStatus::Escalate,
                confidence: 0.0,
                reasoning: e.to_string(),
                suggested_actions: vec![
                    "manual_review".to_string(),
                    "error_investigation".to_string(),
                ],
            },
        };

        self.update_metrics(started.elapsed().as_secs_f64() * 1000.0);
        debug!(
            agent = %self.id,
            event = %event.id,
            status = ?response.status,
            confidence = response.confidence,
            "event processed"
        );
        response
    }

    fn evaluate(&self, event: &IntelligentEvent) -> AppResult<AgentResponse> {
        if event.id.is_empty() {
            return Err(AppError::validation("event id is empty"));
        }
        if event.event_type.is_empty() {
            return Err(AppError::validation("event type is empty"));
        }

        let key = pattern_key(event);
        let confidence = self.compute_confidence(&key, event);
        let risk = assess_risk(event);

        let has_security = self.capabilities.contains(&AgentCapability::SecurityAnalysis);
        let (status, mut actions, reasoning) = match risk {
            RiskLevel::High if has_security => (
                ResponseStatus::Alarm,
                vec![
                    "trigger_security_alarm".to_string(),
                    "notify_security_team".to_string(),
                ],
                format!("high-risk {} event within security competence", event.category.as_str()),
            ),
            RiskLevel::High => (
                ResponseStatus::Escalate,
                vec!["escalate_to_security_agent".to_string()],
                format!(
                    "high-risk {} event requires security analysis capability",
                    event.category.as_str()
                ),
            ),
            RiskLevel::Medium if confidence < 0.7 => (
                ResponseStatus::Defer,
                vec!["gather_more_context".to_string()],
                format!(
                    "medium risk with confidence {:.2} below threshold",
                    confidence
                ),
            ),
            _ => (
                ResponseStatus::Ok,
                vec!["acknowledge_event".to_string()],
                format!(
                    "{:?} risk handled with confidence {:.2}",
                    risk, confidence
                ),
            ),
        };

        self.append_capability_actions(event, &mut actions);

        Ok(AgentResponse {
            agent_id: self.id.clone(),
            event_id: event.id.clone(),
            status,
            confidence,
            reasoning,
            suggested_actions: actions,
        })
    }

    /// Confidence seeded at 0.5, blended toward historical success, then
    /// discounted for event complexity and clamped to `[0.1, 0.95]`.
    fn compute_confidence(&self, key: &str, event: &IntelligentEvent) -> f64 {
        let mut confidence = 0.5;
        if let Some(stats) = self.learning.get(key) {
            confidence = f64::min(0.9, 0.3 + stats.success_rate * 0.6);
        }
        confidence *= 1.0 - complexity_penalty(event);
        confidence.clamp(0.1, 0.95)
    }

    fn append_capability_actions(&self, event: &IntelligentEvent, actions: &mut Vec<String>) {
        if self
            .capabilities
            .contains(&AgentCapability::PerformanceOptimization)
            && event.category == EventCategory::Routine
            && event.event_type.contains("completed")
        {
            actions.push("analyze_routine_performance".to_string());
        }
        if self.capabilities.contains(&AgentCapability::QualityAssurance)
            && event.category == EventCategory::Quality
        {
            actions.push("schedule_quality_review".to_string());
        }
        if self
            .capabilities
            .contains(&AgentCapability::ComplianceMonitoring)
            && (event.compliance_required || event.category == EventCategory::Compliance)
        {
            actions.push("record_compliance_audit".to_string());
        }
    }

    fn update_metrics(&mut self, elapsed_ms: f64) {
        self.average_response_time_ms = if self.events_processed == 0 {
            elapsed_ms
        } else {
            self.config.ema_alpha * elapsed_ms
                + (1.0 - self.config.ema_alpha) * self.average_response_time_ms
        };
        self.events_processed += 1;
    }

    /// Aggregated view of learned behavior: top 10 patterns plus heuristic
    /// recommendations.
    pub fn insights(&self) -> AgentInsights {
        let top_patterns = self
            .learning
            .top_patterns(10)
            .into_iter()
            .map(|(pattern, stats)| PatternInsight {
                pattern: pattern.clone(),
                occurrences: stats.occurrences,
                success_rate: stats.success_rate,
                average_confidence: stats.average_confidence,
            })
            .collect();

        let mut recommendations = Vec::new();
        for (pattern, stats) in self.learning.iter() {
            if stats.success_rate < 0.7 && stats.occurrences > 5 {
                recommendations.push(format!(
                    "improve handling for pattern {} (success rate {:.2})",
                    pattern, stats.success_rate
                ));
            }
            if stats.average_confidence < 0.6 && stats.occurrences > 10 {
                recommendations.push(format!(
                    "gather more training data for pattern {} (average confidence {:.2})",
                    pattern, stats.average_confidence
                ));
            }
        }

        AgentInsights {
            agent_id: self.id.clone(),
            events_processed: self.events_processed,
            average_response_time_ms: self.average_response_time_ms,
            top_patterns,
            recommendations,
        }
    }
}

/// Pattern key `category/subcategory-or-*/tier`.
fn pattern_key(event: &IntelligentEvent) -> String {
    format!(
        "{}/{}/{}",
        event.category.as_str(),
        event.subcategory.as_deref().unwrap_or("*"),
        event.tier.level()
    )
}

/// Risk from priority, security level, flags, and category.
fn assess_risk(event: &IntelligentEvent) -> RiskLevel {
    if event.priority >= EventPriority::Critical
        || event.security_level >= SecurityLevel::Confidential
    {
        return RiskLevel::High;
    }
    if event.human_approval_required
        || event.compliance_required
        || matches!(
            event.category,
            EventCategory::Safety | EventCategory::Security
        )
    {
        return RiskLevel::Medium;
    }
    RiskLevel::Low
}

/// Complexity penalty in `[0.0, 0.3]`: 10% each for many related events,
/// many required capabilities, and a non-trivial correlation chain.
fn complexity_penalty(event: &IntelligentEvent) -> f64 {
    let mut penalty = 0.0;
    if event.related_events.len() > 3 {
        penalty += 0.1;
    }
    let required = event
        .agent_context
        .as_ref()
        .map(|ctx| ctx.required_capabilities.len())
        .unwrap_or(0);
    if required > 2 {
        penalty += 0.1;
    }
    if event.correlation_chain.len() > 1 {
        penalty += 0.1;
    }
    penalty
}
