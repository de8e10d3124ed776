//! Responder Routing Integration Tests
//!
//! Exercises every agent-graph variant against shared conversation
//! fixtures: empty conversations, the `@all` sentinel, subscription
//! wildcards, baton semantics, and the composite fallback chain.

use std::collections::HashMap;

use swarm_relay::services::routing::{
    ActiveBotGraph, AgentGraph, CompositeGraph, ConversationConfig, ConversationState,
    DirectResponderGraph, MessageConfig, Participant, SelectionStrategy, SubscriptionGraph,
    Trigger,
};

fn subscriptions() -> HashMap<String, Vec<String>> {
    let mut map = HashMap::new();
    map.insert(
        "sensor/+/temp".to_string(),
        vec!["bot-sensors".to_string()],
    );
    map.insert("alerts/#".to_string(), vec!["bot-alerts".to_string()]);
    map
}

fn conversation() -> ConversationState {
    ConversationState::new(vec![
        Participant::bot("bot-sensors"),
        Participant::bot("bot-alerts"),
        Participant::bot_with_role("bot-arb", "arbitrator"),
        Participant::human("user-1"),
    ])
    .with_config(ConversationConfig {
        active_bot_id: None,
        event_subscriptions: subscriptions(),
    })
}

fn topic_trigger(topic: &str) -> Trigger {
    Trigger::message(MessageConfig {
        responding_bots: None,
        event_topic: Some(topic.to_string()),
    })
}

// ============================================================================
// Empty conversations
// ============================================================================

#[tokio::test]
async fn test_every_variant_handles_empty_conversation() {
    let empty = ConversationState::default();
    let trigger = Trigger::message(MessageConfig {
        responding_bots: Some(vec!["@all".to_string()]),
        event_topic: Some("alerts/x".to_string()),
    });

    let graphs: Vec<Box<dyn AgentGraph>> = vec![
        Box::new(DirectResponderGraph::new()),
        Box::new(SubscriptionGraph::new()),
        Box::new(ActiveBotGraph::with_suppressed_warnings()),
        Box::new(CompositeGraph::new()),
    ];
    for graph in graphs {
        let result = graph.select_responders(&empty, &trigger).await;
        assert!(result.responders.is_empty());
    }
}

// ============================================================================
// Composite precedence
// ============================================================================

#[tokio::test]
async fn test_all_sentinel_overrides_subscriptions_and_baton() {
    let mut conversation = conversation();
    conversation.config.active_bot_id = Some("bot-arb".to_string());

    let trigger = Trigger::message(MessageConfig {
        responding_bots: Some(vec!["@all".to_string()]),
        event_topic: Some("alerts/disk".to_string()),
    });
    let result = CompositeGraph::new()
        .select_responders(&conversation, &trigger)
        .await;

    assert_eq!(result.strategy, SelectionStrategy::DirectMention);
    assert_eq!(result.responders.len(), conversation.participants.len());
}

#[tokio::test]
async fn test_dangling_baton_returns_empty_swarm_baton_result() {
    let mut conversation = conversation();
    conversation.config.active_bot_id = Some("missing-bot".to_string());

    // No direct mention, no matching topic: the dangling baton is final.
    let result = CompositeGraph::new()
        .select_responders(&conversation, &Trigger::system("turn"))
        .await;

    assert!(result.responders.is_empty());
    assert_eq!(result.strategy, SelectionStrategy::SwarmBaton);
}

#[tokio::test]
async fn test_subscription_wildcards_route_topics() {
    let graph = CompositeGraph::new();

    let matched = graph
        .select_responders(&conversation(), &topic_trigger("sensor/room1/temp"))
        .await;
    assert_eq!(matched.strategy, SelectionStrategy::Subscription);
    assert_eq!(matched.responders[0].id, "bot-sensors");

    // One level too deep for `+`; falls through to the arbitrator baton.
    let unmatched = graph
        .select_responders(&conversation(), &topic_trigger("sensor/room1/room2/temp"))
        .await;
    assert_eq!(unmatched.strategy, SelectionStrategy::SwarmBaton);
    assert_eq!(unmatched.responders[0].id, "bot-arb");

    for topic in ["alerts/x", "alerts/x/y"] {
        let result = graph
            .select_responders(&conversation(), &topic_trigger(topic))
            .await;
        assert_eq!(result.responders[0].id, "bot-alerts", "topic {}", topic);
    }
}

#[tokio::test]
async fn test_fallback_to_first_participant() {
    let conversation = ConversationState::new(vec![
        Participant::bot("bot-a"),
        Participant::bot("bot-b"),
    ]);
    let result = CompositeGraph::new()
        .select_responders(&conversation, &Trigger::system("turn"))
        .await;
    assert_eq!(result.strategy, SelectionStrategy::Fallback);
    assert_eq!(result.responders[0].id, "bot-a");
}

// ============================================================================
// Purity / idempotence
// ============================================================================

#[tokio::test]
async fn test_repeated_selection_is_identical() {
    let conversation = conversation();
    let trigger = topic_trigger("alerts/cpu");
    let graph = CompositeGraph::new();

    let first = graph.select_responders(&conversation, &trigger).await;
    let second = graph.select_responders(&conversation, &trigger).await;
    assert_eq!(first, second);

    // The conversation itself is untouched
    assert_eq!(conversation.participants.len(), 4);
}
