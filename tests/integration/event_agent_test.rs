//! Event Agent Integration Tests
//!
//! Risk-driven status selection, learned-confidence evolution, bounded
//! learning capacity, and the insight report.

use swarm_relay::services::event_agent::{EventAgent, EventAgentConfig, ResponseStatus};
use swarm_relay_core::{
    AgentCapability, EventCategory, EventPriority, EventTier, IntelligentEvent,
};

fn emergency_event() -> IntelligentEvent {
    IntelligentEvent::builder("intrusion_detected", EventCategory::Security, EventTier::Coordination)
        .priority(EventPriority::Emergency)
        .build()
}

#[tokio::test]
async fn test_emergency_escalates_or_alarms_by_capability() {
    let mut plain = EventAgent::new("plain", "Plain Agent", vec![]);
    let response = plain.process_event(&emergency_event()).await;
    assert_eq!(response.status, ResponseStatus::Escalate);

    let mut security = EventAgent::new(
        "security",
        "Security Agent",
        vec![AgentCapability::SecurityAnalysis],
    );
    let response = security.process_event(&emergency_event()).await;
    assert_eq!(response.status, ResponseStatus::Alarm);
}

#[tokio::test]
async fn test_confidence_grows_with_successful_history() {
    let mut agent = EventAgent::new("learner", "Learner", vec![]);

    let routine = || {
        IntelligentEvent::builder("job_finished", EventCategory::Routine, EventTier::Execution)
            .build()
    };

    let first = agent.process_event(&routine()).await;
    assert!((first.confidence - 0.5).abs() < 1e-9, "seed confidence");

    for _ in 0..4 {
        agent.process_event(&routine()).await;
    }
    let later = agent.process_event(&routine()).await;
    assert!(
        later.confidence > first.confidence,
        "history should boost confidence: {} -> {}",
        first.confidence,
        later.confidence
    );
    assert!(later.confidence <= 0.95);
}

#[tokio::test]
async fn test_learning_capacity_is_bounded() {
    let config = EventAgentConfig {
        learning_capacity: 4,
        ..EventAgentConfig::default()
    };
    let mut agent = EventAgent::with_config("bounded", "Bounded", vec![], config);

    for i in 0..10 {
        let event = IntelligentEvent::builder(
            "tick",
            EventCategory::System,
            EventTier::Execution,
        )
        .subcategory(format!("source-{}", i))
        .build();
        agent.process_event(&event).await;
    }

    let insights = agent.insights();
    assert_eq!(insights.events_processed, 10);
    assert!(
        insights.top_patterns.len() <= 4,
        "patterns beyond capacity must be evicted, got {}",
        insights.top_patterns.len()
    );
}

#[tokio::test]
async fn test_agents_learn_independently() {
    let routine = IntelligentEvent::builder(
        "job_finished",
        EventCategory::Routine,
        EventTier::Execution,
    )
    .build();

    let mut a = EventAgent::new("a", "A", vec![]);
    let mut b = EventAgent::new("b", "B", vec![]);

    for _ in 0..5 {
        a.process_event(&routine).await;
    }

    // B has no access to A's history: its first pass is still at the seed
    let b_response = b.process_event(&routine).await;
    assert!((b_response.confidence - 0.5).abs() < 1e-9);
    assert_eq!(a.insights().events_processed, 5);
    assert_eq!(b.insights().events_processed, 1);
}

#[tokio::test]
async fn test_response_identifies_agent_and_event() {
    let mut agent = EventAgent::new("agent-7", "Seven", vec![]);
    let event = IntelligentEvent::builder("ping", EventCategory::System, EventTier::Execution)
        .build();
    let response = agent.process_event(&event).await;

    assert_eq!(response.agent_id, "agent-7");
    assert_eq!(response.event_id, event.id);
    assert!(!response.reasoning.is_empty());
}
