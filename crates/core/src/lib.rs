//! Swarm Relay Core
//!
//! Foundational types for the Swarm Relay workspace: error types, the
//! intelligent-event model, the event-bus capability, and the unified LLM
//! stream events. This crate has zero dependencies on application-level code
//! (routing, branching, tool runners, model services).
//!
//! ## Module Organization
//!
//! - `error` - Core error types (`CoreError`, `CoreResult`)
//! - `event` - Intelligent event model (`IntelligentEvent`, tiers, priorities)
//! - `bus` - Event bus capability (`EventBus`, `InMemoryEventBus`)
//! - `streaming` - Unified LLM stream event types (`LlmStreamEvent`)
//!
//! ## Design Principles
//!
//! 1. **Minimal dependency set** - serde, async-trait, thiserror, uuid, chrono
//! 2. **Trait-based capabilities** - the bus is injected, never ambient
//! 3. **Unidirectional dependency** - this crate depends on nothing else in the workspace

pub mod bus;
pub mod error;
pub mod event;
pub mod streaming;

// ── Error Types ────────────────────────────────────────────────────────
pub use error::{CoreError, CoreResult};

// ── Event Model ────────────────────────────────────────────────────────
pub use event::{
    AgentCapability, EventAgentContext, EventCategory, EventPriority, EventTier,
    IntelligentEvent, IntelligentEventBuilder, SecurityLevel,
};

// ── Event Bus ──────────────────────────────────────────────────────────
pub use bus::{EventBus, InMemoryEventBus};

// ── Streaming Types ────────────────────────────────────────────────────
pub use streaming::LlmStreamEvent;
