//! BranchCoordinator — branch materialization and lifecycle events
//!
//! Resolves a branching configuration into concrete branch records and
//! publishes a branch-created event for each, sequentially in index order
//! so external observers can track creation deterministically.

use std::sync::Arc;

use tracing::warn;
use uuid::Uuid;

use swarm_relay_core::{EventBus, EventCategory, EventTier, IntelligentEvent};

use crate::utils::error::{AppError, AppResult};

use super::types::{Branch, BranchConfig, BranchState, LocationDescriptor, Navigator, PathStep};

/// Event type emitted for each created branch.
pub const BRANCH_CREATED_EVENT: &str = "branch_created";

/// Creates branch sets for workflow steps and announces them on the bus.
pub struct BranchCoordinator {
    bus: Arc<dyn EventBus>,
}

impl BranchCoordinator {
    pub fn new(bus: Arc<dyn EventBus>) -> Self {
        Self { bus }
    }

    /// Resolve a branching configuration into branches.
    ///
    /// Precedence, in order:
    /// 1. `parallel == false` — exactly one sequential branch, no index.
    /// 2. `predefined_paths` — one parallel branch per path.
    /// 3. `branch_count` — that many parallel branches.
    /// 4. a supplied navigator — its derived path set; zero paths falls
    ///    back (with a warning) to a single sequential branch.
    /// 5. otherwise — a configuration error: parallel branching with no way
    ///    to determine the branch set.
    pub async fn create_branches_from_config(
        &self,
        run_id: &str,
        config: &BranchConfig,
        navigator: Option<&dyn Navigator>,
    ) -> AppResult<Vec<Branch>> {
        if !config.parallel {
            // A sequential branch still carries its path when one was given.
            let path = config
                .predefined_paths
                .as_ref()
                .and_then(|paths| paths.first().cloned());
            let branch = self.build_branch(run_id, &config.parent_step_id, false, None, path);
            return self.publish_and_collect(run_id, &config.parent_step_id, vec![branch]).await;
        }

        if let Some(paths) = config.predefined_paths.as_ref() {
            let branches = paths
                .iter()
                .enumerate()
                .map(|(index, path)| {
                    self.build_branch(
                        run_id,
                        &config.parent_step_id,
                        true,
                        Some(index),
                        Some(path.clone()),
                    )
                })
                .collect();
            return self
                .publish_and_collect(run_id, &config.parent_step_id, branches)
                .await;
        }

        if let Some(count) = config.branch_count {
            let branches = (0..count)
                .map(|index| {
                    self.build_branch(run_id, &config.parent_step_id, true, Some(index), None)
                })
                .collect();
            return self
                .publish_and_collect(run_id, &config.parent_step_id, branches)
                .await;
        }

        if let Some(navigator) = navigator {
            let location = LocationDescriptor {
                routine_id: run_id.to_string(),
                node_id: config.parent_step_id.clone(),
            };
            let paths = navigator.get_parallel_branches(&location).await?;
            if paths.is_empty() {
                warn!(
                    run_id,
                    parent_step_id = %config.parent_step_id,
                    "navigator returned no parallel paths; falling back to a single branch"
                );
                let branch =
                    self.build_branch(run_id, &config.parent_step_id, false, None, None);
                return self
                    .publish_and_collect(run_id, &config.parent_step_id, vec![branch])
                    .await;
            }
            let branches = paths
                .into_iter()
                .enumerate()
                .map(|(index, path)| {
                    self.build_branch(
                        run_id,
                        &config.parent_step_id,
                        true,
                        Some(index),
                        Some(path),
                    )
                })
                .collect();
            return self
                .publish_and_collect(run_id, &config.parent_step_id, branches)
                .await;
        }

        Err(AppError::config(
            "Parallel branches require branchCount, predefinedPaths, or navigator",
        ))
    }

    /// One sequential branch for the step.
    pub async fn create_sequential_branch(
        &self,
        run_id: &str,
        parent_step_id: &str,
    ) -> AppResult<Branch> {
        let mut branches = self
            .create_branches_from_config(run_id, &BranchConfig::sequential(parent_step_id), None)
            .await?;
        branches
            .pop()
            .ok_or_else(|| AppError::internal("sequential branch creation produced no branch"))
    }

    /// Navigator-derived parallel branches for the step.
    pub async fn create_parallel_branches(
        &self,
        run_id: &str,
        parent_step_id: &str,
        navigator: &dyn Navigator,
    ) -> AppResult<Vec<Branch>> {
        self.create_branches_from_config(
            run_id,
            &BranchConfig::parallel_from_navigator(parent_step_id),
            Some(navigator),
        )
        .await
    }

    /// One parallel branch per predefined path.
    pub async fn create_branches_with_predefined_paths(
        &self,
        run_id: &str,
        parent_step_id: &str,
        paths: Vec<Vec<PathStep>>,
    ) -> AppResult<Vec<Branch>> {
        self.create_branches_from_config(
            run_id,
            &BranchConfig::with_predefined_paths(parent_step_id, paths),
            None,
        )
        .await
    }

    /// Exactly `count` parallel branches.
    pub async fn create_parallel_branches_with_count(
        &self,
        run_id: &str,
        parent_step_id: &str,
        count: usize,
    ) -> AppResult<Vec<Branch>> {
        self.create_branches_from_config(
            run_id,
            &BranchConfig::parallel_with_count(parent_step_id, count),
            None,
        )
        .await
    }

    /// Legacy location-list API, kept for callers that predate the
    /// config-driven form. Parallel runs map each location to one branch in
    /// array order; sequential runs collapse the locations into a single
    /// branch whose path visits them in order. The parent step is the first
    /// location's node id.
    #[deprecated(note = "use create_branches_from_config")]
    pub async fn create_branches(
        &self,
        run_id: &str,
        locations: &[LocationDescriptor],
        parallel: bool,
    ) -> AppResult<Vec<Branch>> {
        warn!("create_branches is deprecated; use create_branches_from_config");

        let first = locations.first().ok_or_else(|| {
            AppError::validation("create_branches requires at least one location")
        })?;
        let parent_step_id = first.node_id.clone();

        let to_step = |location: &LocationDescriptor| PathStep {
            id: location.node_id.clone(),
            routine_id: location.routine_id.clone(),
            node_id: location.node_id.clone(),
        };

        let config = if parallel {
            BranchConfig::with_predefined_paths(
                parent_step_id,
                locations.iter().map(|loc| vec![to_step(loc)]).collect(),
            )
        } else {
            BranchConfig {
                parent_step_id,
                parallel: false,
                branch_count: None,
                predefined_paths: Some(vec![locations.iter().map(to_step).collect()]),
            }
        };
        self.create_branches_from_config(run_id, &config, None).await
    }

    fn build_branch(
        &self,
        run_id: &str,
        parent_step_id: &str,
        parallel: bool,
        branch_index: Option<usize>,
        path: Option<Vec<PathStep>>,
    ) -> Branch {
        Branch {
            id: Uuid::new_v4().to_string(),
            run_id: run_id.to_string(),
            parent_step_id: parent_step_id.to_string(),
            parallel,
            branch_index,
            state: BranchState::Pending,
            path,
        }
    }

    /// Publish one branch-created event per branch, in index order.
    async fn publish_and_collect(
        &self,
        run_id: &str,
        parent_step_id: &str,
        branches: Vec<Branch>,
    ) -> AppResult<Vec<Branch>> {
        let total_branches = branches.len();
        for branch in &branches {
            let event = IntelligentEvent::builder(
                BRANCH_CREATED_EVENT,
                EventCategory::Workflow,
                EventTier::Orchestration,
            )
            .payload(serde_json::json!({
                "run_id": run_id,
                "parent_step_id": parent_step_id,
                "branch_id": branch.id,
                "branch_index": branch.branch_index,
                "parallel": branch.parallel,
                "total_branches": total_branches,
            }))
            .build();
            self.bus.publish(event).await?;
        }
        Ok(branches)
    }
}
