//! Model Service Registry
//!
//! The registry is the integration service's only upstream: it maps a
//! requested model name to the best registered backend. Services are
//! registered by id; "best" is the first registered service that supports
//! the model, so registration order encodes preference.

use std::collections::HashMap;
use std::pin::Pin;
use std::sync::Arc;

use async_trait::async_trait;
use futures_util::Stream;
use tokio_util::sync::CancellationToken;

use swarm_relay_core::LlmStreamEvent;

use crate::types::{LlmResult, Message, ToolDefinition};

/// Type alias for the asynchronous stream of model events.
pub type LlmEventStream = Pin<Box<dyn Stream<Item = LlmStreamEvent> + Send>>;

/// Input shape for a streaming model request.
#[derive(Clone)]
pub struct StreamingOptions {
    pub model: String,
    pub messages: Vec<Message>,
    pub tools: Vec<ToolDefinition>,
    pub max_tokens: u32,
    pub temperature: f32,
    /// Cancellation slot. Present for future plumbing; the integration
    /// service currently never sets it, so callers wanting timeouts must
    /// wrap `execute_request` externally.
    pub abort: Option<CancellationToken>,
}

/// Trait that all model-serving backends implement.
#[async_trait]
pub trait ModelService: Send + Sync {
    /// Stable identifier for this service instance.
    fn service_id(&self) -> &str;

    /// Whether this service can serve the given model name.
    fn supports_model(&self, model: &str) -> bool;

    /// Open a streaming generation. The returned stream ends with exactly
    /// one `Done` or `Error` event.
    async fn generate_response_streaming(
        &self,
        options: StreamingOptions,
    ) -> LlmResult<LlmEventStream>;
}

/// Registry of model-serving backends, keyed by service id.
pub struct ServiceRegistry {
    services: HashMap<String, Arc<dyn ModelService>>,
    /// Registration order; earlier services win ties.
    order: Vec<String>,
}

impl ServiceRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            services: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Register a service. Re-registering an id replaces the instance but
    /// keeps its original preference position.
    pub fn register(&mut self, service: Arc<dyn ModelService>) {
        let id = service.service_id().to_string();
        if !self.services.contains_key(&id) {
            self.order.push(id.clone());
        }
        self.services.insert(id, service);
    }

    /// Id of the best service for the model: the first registered service
    /// that supports it.
    pub fn get_best_service(&self, model: &str) -> Option<String> {
        self.order
            .iter()
            .find(|id| {
                self.services
                    .get(*id)
                    .is_some_and(|s| s.supports_model(model))
            })
            .cloned()
    }

    /// Look up a service by id.
    pub fn get_service(&self, service_id: &str) -> Option<Arc<dyn ModelService>> {
        self.services.get(service_id).cloned()
    }

    /// Number of registered services.
    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

impl Default for ServiceRegistry {
    fn default() -> Self {
        Self::new()
    }
}
