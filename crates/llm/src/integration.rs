//! LLM Integration Service
//!
//! Bridges a request (messages + tools + model) to a model-serving backend:
//! resolves the best service from the registry, drives the streamed response
//! through the accumulator, and returns the bundled result with resource
//! accounting. Tool calls requested by the model are surfaced as pending
//! markers for the orchestration tier to execute.

use std::sync::Arc;
use std::time::Instant;

use futures_util::StreamExt;
use tracing::debug;

use crate::accumulator::ResponseAccumulator;
use crate::pricing::estimate_cost;
use crate::registry::{ServiceRegistry, StreamingOptions};
use crate::types::{
    ExecutedResponse, ExecutionResources, LlmError, LlmRequest, LlmResult, ResourceUsage,
};

/// Placeholder confidence until response grading lands.
const RESPONSE_CONFIDENCE: f64 = 0.8;

/// Brokers streamed model requests against the service registry.
pub struct LlmIntegrationService {
    registry: Arc<ServiceRegistry>,
}

impl LlmIntegrationService {
    pub fn new(registry: Arc<ServiceRegistry>) -> Self {
        Self { registry }
    }

    /// Execute one streamed request.
    ///
    /// Fails with `NoServiceAvailable` when no backend serves the model and
    /// with `Stream` when the backend errors mid-stream. A stream that ends
    /// without a `Done` event still produces a response from whatever was
    /// accumulated.
    pub async fn execute_request(
        &self,
        request: &LlmRequest,
        resources: ExecutionResources,
        user: Option<&str>,
    ) -> LlmResult<ExecutedResponse> {
        let service_id = self
            .registry
            .get_best_service(&request.model)
            .ok_or_else(|| LlmError::NoServiceAvailable {
                model: request.model.clone(),
            })?;
        let service =
            self.registry
                .get_service(&service_id)
                .ok_or_else(|| LlmError::ServiceNotFound {
                    service_id: service_id.clone(),
                })?;

        debug!(
            model = %request.model,
            service = %service_id,
            user = user.unwrap_or("anonymous"),
            "executing streamed model request"
        );

        let options = StreamingOptions {
            model: request.model.clone(),
            messages: request.messages.clone(),
            tools: request.tools.clone(),
            max_tokens: resources.max_tokens,
            temperature: resources.temperature,
            abort: None,
        };

        let started = Instant::now();
        let mut stream = service.generate_response_streaming(options).await?;

        let mut accumulator = ResponseAccumulator::new();
        while let Some(event) = stream.next().await {
            if accumulator.apply(event)? {
                break;
            }
        }
        let compute_time_ms = started.elapsed().as_millis() as u64;

        let (content, reasoning, tool_calls, tokens_used, cost) = accumulator.into_parts();
        let cost = cost.unwrap_or_else(|| {
            // Backends that don't price their own usage get the table rate;
            // without a usage split, attribute all tokens as output.
            estimate_cost(&request.model, 0, tokens_used)
        });

        Ok(ExecutedResponse {
            content,
            reasoning,
            confidence: RESPONSE_CONFIDENCE,
            tool_calls,
            resource_usage: ResourceUsage {
                tokens_used,
                api_calls: 1,
                compute_time_ms,
                cost,
            },
        })
    }
}
