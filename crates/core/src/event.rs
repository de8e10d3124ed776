//! Intelligent Event Model
//!
//! Typed event records that flow across the three execution tiers. Events are
//! immutable once published; identity is the `id` field. Producers construct
//! events through `IntelligentEventBuilder`, which fills in the id and
//! timestamp defaults.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// The three layers of the execution architecture.
///
/// Tiers scope which events a component may legitimately produce or consume:
/// coordination (tier 1), orchestration (tier 2), and execution (tier 3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventTier {
    Coordination,
    Orchestration,
    Execution,
}

impl EventTier {
    /// Numeric tier level (1-3), used in pattern keys and logs.
    pub fn level(&self) -> u8 {
        match self {
            EventTier::Coordination => 1,
            EventTier::Orchestration => 2,
            EventTier::Execution => 3,
        }
    }
}

/// Event priority, ordered from least to most urgent.
///
/// The derived `Ord` follows declaration order, so
/// `EventPriority::Critical >= EventPriority::High` holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventPriority {
    Low,
    Normal,
    High,
    Critical,
    Emergency,
}

/// Security classification of an event, ordered from least to most sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SecurityLevel {
    Public,
    Internal,
    Confidential,
    Secret,
}

/// Coarse event category used for routing and learning-pattern keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventCategory {
    Workflow,
    Routine,
    Security,
    Safety,
    Compliance,
    Performance,
    Quality,
    System,
}

impl EventCategory {
    /// Stable string form used in pattern keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventCategory::Workflow => "workflow",
            EventCategory::Routine => "routine",
            EventCategory::Security => "security",
            EventCategory::Safety => "safety",
            EventCategory::Compliance => "compliance",
            EventCategory::Performance => "performance",
            EventCategory::Quality => "quality",
            EventCategory::System => "system",
        }
    }
}

/// Capabilities an event can require from handling agents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentCapability {
    SecurityAnalysis,
    PerformanceOptimization,
    QualityAssurance,
    ComplianceMonitoring,
    WorkflowCoordination,
    RiskAssessment,
}

/// Agent-targeting metadata carried by an event.
///
/// `target_agents`, when present, restricts handling to exactly that list
/// and overrides the capability checks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventAgentContext {
    /// Capabilities an agent must have to handle this event.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required_capabilities: Vec<AgentCapability>,
    /// Agent ids that must not handle this event.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub excluded_agents: Vec<String>,
    /// When set, only these agent ids may handle the event.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_agents: Option<Vec<String>>,
}

/// A typed event record flowing across the tiers.
///
/// Immutable once published; correlation metadata (`related_events`,
/// `correlation_chain`) links events without mutating them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntelligentEvent {
    /// Unique event id (identity).
    pub id: String,
    /// Free-form event type, e.g. "branch_created", "routine_completed".
    pub event_type: String,
    /// Coarse category.
    pub category: EventCategory,
    /// Optional finer-grained subcategory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    /// Tier the event belongs to.
    pub tier: EventTier,
    /// Priority ordinal.
    pub priority: EventPriority,
    /// Security classification.
    pub security_level: SecurityLevel,
    /// Whether a human must approve before the event is acted on.
    #[serde(default)]
    pub human_approval_required: bool,
    /// Whether compliance handling is required.
    #[serde(default)]
    pub compliance_required: bool,
    /// Ids of related events.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related_events: Vec<String>,
    /// Causal chain of event ids leading to this one.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub correlation_chain: Vec<String>,
    /// Optional agent-targeting metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_context: Option<EventAgentContext>,
    /// Structured event payload.
    #[serde(default)]
    pub payload: Value,
    /// Publication timestamp.
    pub occurred_at: DateTime<Utc>,
}

impl IntelligentEvent {
    /// Start building an event of the given type, category, and tier.
    ///
    /// Defaults: normal priority, internal security level, generated uuid id,
    /// current timestamp, null payload.
    pub fn builder(
        event_type: impl Into<String>,
        category: EventCategory,
        tier: EventTier,
    ) -> IntelligentEventBuilder {
        IntelligentEventBuilder::new(event_type, category, tier)
    }
}

/// Fluent builder for `IntelligentEvent`.
pub struct IntelligentEventBuilder {
    event_type: String,
    category: EventCategory,
    subcategory: Option<String>,
    tier: EventTier,
    priority: EventPriority,
    security_level: SecurityLevel,
    human_approval_required: bool,
    compliance_required: bool,
    related_events: Vec<String>,
    correlation_chain: Vec<String>,
    agent_context: Option<EventAgentContext>,
    payload: Value,
}

impl IntelligentEventBuilder {
    /// Create a builder with the required fields and sensible defaults.
    pub fn new(event_type: impl Into<String>, category: EventCategory, tier: EventTier) -> Self {
        Self {
            event_type: event_type.into(),
            category,
            subcategory: None,
            tier,
            priority: EventPriority::Normal,
            security_level: SecurityLevel::Internal,
            human_approval_required: false,
            compliance_required: false,
            related_events: Vec::new(),
            correlation_chain: Vec::new(),
            agent_context: None,
            payload: Value::Null,
        }
    }

    /// Set the subcategory.
    pub fn subcategory(mut self, subcategory: impl Into<String>) -> Self {
        self.subcategory = Some(subcategory.into());
        self
    }

    /// Set the priority.
    pub fn priority(mut self, priority: EventPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Set the security level.
    pub fn security_level(mut self, level: SecurityLevel) -> Self {
        self.security_level = level;
        self
    }

    /// Require human approval before the event is acted on.
    pub fn human_approval_required(mut self, required: bool) -> Self {
        self.human_approval_required = required;
        self
    }

    /// Mark the event as requiring compliance handling.
    pub fn compliance_required(mut self, required: bool) -> Self {
        self.compliance_required = required;
        self
    }

    /// Set the related event ids.
    pub fn related_events(mut self, ids: Vec<String>) -> Self {
        self.related_events = ids;
        self
    }

    /// Set the correlation chain.
    pub fn correlation_chain(mut self, ids: Vec<String>) -> Self {
        self.correlation_chain = ids;
        self
    }

    /// Attach agent-targeting metadata.
    pub fn agent_context(mut self, ctx: EventAgentContext) -> Self {
        self.agent_context = Some(ctx);
        self
    }

    /// Set the structured payload.
    pub fn payload(mut self, payload: Value) -> Self {
        self.payload = payload;
        self
    }

    /// Finalize the event, generating its id and timestamp.
    pub fn build(self) -> IntelligentEvent {
        IntelligentEvent {
            id: Uuid::new_v4().to_string(),
            event_type: self.event_type,
            category: self.category,
            subcategory: self.subcategory,
            tier: self.tier,
            priority: self.priority,
            security_level: self.security_level,
            human_approval_required: self.human_approval_required,
            compliance_required: self.compliance_required,
            related_events: self.related_events,
            correlation_chain: self.correlation_chain,
            agent_context: self.agent_context,
            payload: self.payload,
            occurred_at: Utc::now(),
        }
    }
}
