//! Branching Types
//!
//! Branch records, the branching configuration shapes, and the navigator
//! collaborator interface.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::utils::error::AppResult;

/// Lifecycle state of a branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BranchState {
    Pending,
    Running,
    Completed,
    Failed,
}

/// One step along a navigator-derived execution path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathStep {
    pub id: String,
    pub routine_id: String,
    pub node_id: String,
}

/// An execution branch created for a workflow step.
///
/// Sequential branches never carry a `branch_index`; parallel branches
/// always do, contiguous from 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    pub id: String,
    pub run_id: String,
    pub parent_step_id: String,
    pub parallel: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch_index: Option<usize>,
    pub state: BranchState,
    /// Execution path for this branch, when one was derived.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<PathStep>>,
}

/// Declarative branching configuration for one workflow step.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BranchConfig {
    pub parent_step_id: String,
    pub parallel: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch_count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predefined_paths: Option<Vec<Vec<PathStep>>>,
}

impl BranchConfig {
    /// A single sequential branch.
    pub fn sequential(parent_step_id: impl Into<String>) -> Self {
        Self {
            parent_step_id: parent_step_id.into(),
            parallel: false,
            branch_count: None,
            predefined_paths: None,
        }
    }

    /// `count` parallel branches.
    pub fn parallel_with_count(parent_step_id: impl Into<String>, count: usize) -> Self {
        Self {
            parent_step_id: parent_step_id.into(),
            parallel: true,
            branch_count: Some(count),
            predefined_paths: None,
        }
    }

    /// One parallel branch per predefined path.
    pub fn with_predefined_paths(
        parent_step_id: impl Into<String>,
        paths: Vec<Vec<PathStep>>,
    ) -> Self {
        Self {
            parent_step_id: parent_step_id.into(),
            parallel: true,
            branch_count: None,
            predefined_paths: Some(paths),
        }
    }

    /// Parallel branching with the path set left to a navigator.
    pub fn parallel_from_navigator(parent_step_id: impl Into<String>) -> Self {
        Self {
            parent_step_id: parent_step_id.into(),
            parallel: true,
            branch_count: None,
            predefined_paths: None,
        }
    }
}

/// Where a branch starts, as the navigator understands it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationDescriptor {
    pub routine_id: String,
    pub node_id: String,
}

/// External collaborator that derives parallel path sets from a location.
#[async_trait]
pub trait Navigator: Send + Sync {
    /// The parallel paths reachable from this location. An empty result is
    /// valid and means "no fan-out here".
    async fn get_parallel_branches(
        &self,
        location: &LocationDescriptor,
    ) -> AppResult<Vec<Vec<PathStep>>>;
}
