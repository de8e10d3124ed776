//! Branch Coordination
//!
//! Materializes the branch set for a workflow step — parallel fan-out or a
//! single sequential branch — and emits a lifecycle event per created
//! branch. Actual concurrent execution of parallel branches is the host
//! workflow engine's responsibility; this module only defines the branch
//! records and their deterministic creation order.

pub mod coordinator;
pub mod types;

pub use coordinator::BranchCoordinator;
pub use types::{Branch, BranchConfig, BranchState, LocationDescriptor, Navigator, PathStep};
