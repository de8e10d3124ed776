//! LLM Streaming Integration Tests
//!
//! Drives the integration service end to end against scripted model
//! services: accumulation, tool-call surfacing, mid-stream failure, and
//! registry resolution.

use std::sync::Arc;

use async_trait::async_trait;

use swarm_relay_core::LlmStreamEvent;
use swarm_relay_llm::{
    estimate_cost, ExecutionResources, LlmError, LlmEventStream, LlmIntegrationService,
    LlmRequest, LlmResult, Message, ModelService, ServiceRegistry, StreamingOptions,
};

struct ScriptedService {
    id: String,
    models: Vec<String>,
    events: Vec<LlmStreamEvent>,
}

#[async_trait]
impl ModelService for ScriptedService {
    fn service_id(&self) -> &str {
        &self.id
    }

    fn supports_model(&self, model: &str) -> bool {
        self.models.iter().any(|m| m == model)
    }

    async fn generate_response_streaming(
        &self,
        _options: StreamingOptions,
    ) -> LlmResult<LlmEventStream> {
        Ok(Box::pin(futures_util::stream::iter(self.events.clone())))
    }
}

fn service(events: Vec<LlmStreamEvent>) -> LlmIntegrationService {
    let mut registry = ServiceRegistry::new();
    registry.register(Arc::new(ScriptedService {
        id: "scripted".to_string(),
        models: vec!["gpt-4o".to_string()],
        events,
    }));
    LlmIntegrationService::new(Arc::new(registry))
}

fn request() -> LlmRequest {
    LlmRequest {
        model: "gpt-4o".to_string(),
        messages: vec![Message::user("summarize the incident")],
        tools: vec![],
    }
}

#[tokio::test]
async fn test_full_stream_accumulates_into_response() {
    let service = service(vec![
        LlmStreamEvent::ReasoningDelta {
            content: "check the timeline first".to_string(),
        },
        LlmStreamEvent::TextDelta {
            content: "Two services restarted ".to_string(),
        },
        LlmStreamEvent::TextDelta {
            content: "within five minutes.".to_string(),
        },
        LlmStreamEvent::FunctionCall {
            call_id: "c1".to_string(),
            name: "run_routine".to_string(),
            arguments: r#"{"routine":"postmortem"}"#.to_string(),
        },
        LlmStreamEvent::Done {
            input_tokens: 200,
            output_tokens: 80,
            cost: Some(0.004),
        },
    ]);

    let response = service
        .execute_request(&request(), ExecutionResources::default(), Some("ops"))
        .await
        .unwrap();

    assert_eq!(response.content, "Two services restarted within five minutes.");
    assert_eq!(
        response.reasoning.as_deref(),
        Some("check the timeline first")
    );
    assert_eq!(response.tool_calls.len(), 1);
    assert_eq!(response.tool_calls[0].name, "run_routine");
    assert!(response.tool_calls[0].output.contains("pending"));
    assert_eq!(response.resource_usage.tokens_used, 280);
    assert_eq!(response.resource_usage.api_calls, 1);
}

#[tokio::test]
async fn test_mid_stream_error_aborts_request() {
    let service = service(vec![
        LlmStreamEvent::TextDelta {
            content: "partial output".to_string(),
        },
        LlmStreamEvent::Error {
            message: "model overloaded".to_string(),
            code: Some("overloaded".to_string()),
        },
        // Anything after the error must never be reached
        LlmStreamEvent::Done {
            input_tokens: 999,
            output_tokens: 999,
            cost: None,
        },
    ]);

    let err = service
        .execute_request(&request(), ExecutionResources::default(), None)
        .await
        .unwrap_err();
    match err {
        LlmError::Stream { message, .. } => assert!(message.contains("overloaded")),
        other => panic!("Expected Stream error, got {}", other),
    }
}

#[tokio::test]
async fn test_unknown_model_has_no_service() {
    let service = service(vec![]);
    let mut req = request();
    req.model = "unregistered-model".to_string();

    let err = service
        .execute_request(&req, ExecutionResources::default(), None)
        .await
        .unwrap_err();
    assert!(matches!(err, LlmError::NoServiceAvailable { .. }));
}

#[tokio::test]
async fn test_pricing_fallback_is_conservative() {
    // Unknown models are priced at the conservative fallback rate
    let known = estimate_cost("gpt-4o-mini", 1000, 1000);
    let unknown = estimate_cost("brand-new-model", 1000, 1000);
    assert!(unknown > known);
}
