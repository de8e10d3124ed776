//! Integration Tests Module
//!
//! Cross-crate integration tests for the Swarm Relay orchestration core.
//! Tests cover responder routing, branch coordination, event agents, tool
//! dispatch, and the LLM streaming path.

// Responder selection across all graph variants
mod routing_test;

// Branch coordination and bus lifecycle events
mod branching_test;

// Event agent risk/learning behavior
mod event_agent_test;

// Tool dispatch routing and credit accounting
mod tool_dispatch_test;

// LLM integration streaming path
mod llm_streaming_test;
