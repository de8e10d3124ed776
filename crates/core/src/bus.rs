//! Event Bus Capability
//!
//! The bus is an injected capability: components that emit events hold an
//! `Arc<dyn EventBus>` and never reach for a global channel. Delivery
//! semantics (at-least-once vs exactly-once) are the bus implementation's
//! concern, not the publisher's.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{broadcast, Mutex};

use crate::error::CoreResult;
use crate::event::IntelligentEvent;

/// Publish capability for typed events.
#[async_trait]
pub trait EventBus: Send + Sync {
    /// Publish one event. Implementations decide delivery semantics.
    async fn publish(&self, event: IntelligentEvent) -> CoreResult<()>;
}

/// In-memory, single-process bus used for tests and local wiring.
///
/// Records every published event and forwards a copy to broadcast
/// subscribers. Recording order is publish order.
pub struct InMemoryEventBus {
    published: Mutex<Vec<IntelligentEvent>>,
    sender: broadcast::Sender<IntelligentEvent>,
}

impl InMemoryEventBus {
    /// Create a bus with the default subscriber channel capacity (64).
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    /// Create a bus with the given subscriber channel capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self {
            published: Mutex::new(Vec::new()),
            sender,
        }
    }

    /// Subscribe to a live feed of published events.
    ///
    /// Slow subscribers may observe `Lagged` errors; the recorded log is
    /// the authoritative history.
    pub fn subscribe(&self) -> broadcast::Receiver<IntelligentEvent> {
        self.sender.subscribe()
    }

    /// Snapshot of all events published so far, in publish order.
    pub async fn published(&self) -> Vec<IntelligentEvent> {
        self.published.lock().await.clone()
    }

    /// Number of events published so far.
    pub async fn len(&self) -> usize {
        self.published.lock().await.len()
    }

    /// Whether no events have been published.
    pub async fn is_empty(&self) -> bool {
        self.published.lock().await.is_empty()
    }
}

impl Default for InMemoryEventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventBus for InMemoryEventBus {
    async fn publish(&self, event: IntelligentEvent) -> CoreResult<()> {
        self.published.lock().await.push(event.clone());
        // No live subscribers is fine; the recorded log is the history.
        let _ = self.sender.send(event);
        Ok(())
    }
}

/// Convenience: an `Arc<InMemoryEventBus>` usable wherever an
/// `Arc<dyn EventBus>` is expected.
pub fn in_memory_bus() -> Arc<InMemoryEventBus> {
    Arc::new(InMemoryEventBus::new())
}
