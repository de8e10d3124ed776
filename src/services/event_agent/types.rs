//! Event Agent Types
//!
//! The advisory response shape, agent configuration, and insight reports.

use serde::{Deserialize, Serialize};

/// Advisory status of a processed event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseStatus {
    /// Handled routinely.
    Ok,
    /// Route to a better-equipped agent.
    Escalate,
    /// High risk within this agent's own competence.
    Alarm,
    /// Gather more context before acting.
    Defer,
}

/// Risk classification derived from event metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// The structured advisory an agent emits per processed event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentResponse {
    pub agent_id: String,
    pub event_id: String,
    pub status: ResponseStatus,
    /// Confidence in `[0.1, 0.95]`, or 0.0 on the internal-failure path.
    pub confidence: f64,
    pub reasoning: String,
    pub suggested_actions: Vec<String>,
}

/// Tunables for one event agent.
#[derive(Debug, Clone, Copy)]
pub struct EventAgentConfig {
    /// Maximum learned patterns retained; least-recently-seen patterns are
    /// evicted beyond this.
    pub learning_capacity: usize,
    /// Rolling response-log length per pattern.
    pub response_log_cap: usize,
    /// Smoothing factor for the response-time moving average.
    pub ema_alpha: f64,
}

impl Default for EventAgentConfig {
    fn default() -> Self {
        Self {
            learning_capacity: 256,
            response_log_cap: 50,
            ema_alpha: 0.1,
        }
    }
}

/// One learned pattern in an insight report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternInsight {
    pub pattern: String,
    pub occurrences: u64,
    pub success_rate: f64,
    pub average_confidence: f64,
}

/// Aggregated view of an agent's learned behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentInsights {
    pub agent_id: String,
    pub events_processed: u64,
    pub average_response_time_ms: f64,
    /// Top patterns by occurrence count (at most 10).
    pub top_patterns: Vec<PatternInsight>,
    pub recommendations: Vec<String>,
}
