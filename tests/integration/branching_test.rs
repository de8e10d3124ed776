//! Branch Coordination Integration Tests
//!
//! Branch-config precedence, lifecycle event emission, and the deprecated
//! location-list adapter, observed through the in-memory bus.

use std::sync::Arc;

use async_trait::async_trait;
use swarm_relay::services::branching::{
    BranchConfig, BranchCoordinator, BranchState, LocationDescriptor, Navigator, PathStep,
};
use swarm_relay::AppResult;
use swarm_relay_core::InMemoryEventBus;

struct ScriptedNavigator {
    paths: Vec<Vec<PathStep>>,
}

#[async_trait]
impl Navigator for ScriptedNavigator {
    async fn get_parallel_branches(
        &self,
        _location: &LocationDescriptor,
    ) -> AppResult<Vec<Vec<PathStep>>> {
        Ok(self.paths.clone())
    }
}

fn coordinator() -> (BranchCoordinator, Arc<InMemoryEventBus>) {
    let bus = Arc::new(InMemoryEventBus::new());
    (BranchCoordinator::new(bus.clone()), bus)
}

fn path(n: usize) -> Vec<PathStep> {
    vec![PathStep {
        id: format!("path-{}", n),
        routine_id: "routine-1".to_string(),
        node_id: format!("node-{}", n),
    }]
}

#[tokio::test]
async fn test_parallel_with_no_source_rejects() {
    let (coordinator, bus) = coordinator();
    let config = BranchConfig {
        parent_step_id: "step-1".to_string(),
        parallel: true,
        branch_count: None,
        predefined_paths: None,
    };

    let err = coordinator
        .create_branches_from_config("run-1", &config, None)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Parallel branches require"));
    assert!(bus.is_empty().await, "no events on a rejected config");
}

#[tokio::test]
async fn test_count_of_four_yields_indices_zero_through_three() {
    let (coordinator, bus) = coordinator();
    let branches = coordinator
        .create_parallel_branches_with_count("run-1", "step-1", 4)
        .await
        .unwrap();

    assert_eq!(branches.len(), 4);
    for (i, branch) in branches.iter().enumerate() {
        assert!(branch.parallel);
        assert_eq!(branch.branch_index, Some(i));
        assert_eq!(branch.state, BranchState::Pending);
    }

    let events = bus.published().await;
    assert_eq!(events.len(), 4);
    for (i, event) in events.iter().enumerate() {
        assert_eq!(event.payload["branch_index"], i);
        assert_eq!(event.payload["total_branches"], 4);
        assert_eq!(event.payload["parallel"], true);
    }
}

#[tokio::test]
async fn test_sequential_branch_event_payload() {
    let (coordinator, bus) = coordinator();
    let branch = coordinator
        .create_sequential_branch("run-9", "step-3")
        .await
        .unwrap();

    let events = bus.published().await;
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].payload["run_id"], "run-9");
    assert_eq!(events[0].payload["parent_step_id"], "step-3");
    assert_eq!(events[0].payload["branch_id"], branch.id.as_str());
    assert!(events[0].payload["branch_index"].is_null());
}

#[tokio::test]
async fn test_navigator_driven_fanout() {
    let (coordinator, bus) = coordinator();
    let navigator = ScriptedNavigator {
        paths: vec![path(0), path(1)],
    };
    let branches = coordinator
        .create_parallel_branches("run-1", "step-1", &navigator)
        .await
        .unwrap();

    assert_eq!(branches.len(), 2);
    assert_eq!(
        branches[1].path.as_ref().unwrap()[0].node_id,
        "node-1"
    );
    assert_eq!(bus.len().await, 2);
}

#[tokio::test]
async fn test_navigator_with_no_paths_is_not_an_error() {
    let (coordinator, _bus) = coordinator();
    let navigator = ScriptedNavigator { paths: vec![] };
    let branches = coordinator
        .create_parallel_branches("run-1", "step-1", &navigator)
        .await
        .unwrap();
    assert_eq!(branches.len(), 1);
    assert!(branches[0].branch_index.is_none());
}

#[tokio::test]
#[allow(deprecated)]
async fn test_legacy_adapter_matches_config_form() {
    let (coordinator, _bus) = coordinator();
    let locations = vec![
        LocationDescriptor {
            routine_id: "r1".to_string(),
            node_id: "n1".to_string(),
        },
        LocationDescriptor {
            routine_id: "r1".to_string(),
            node_id: "n2".to_string(),
        },
        LocationDescriptor {
            routine_id: "r1".to_string(),
            node_id: "n3".to_string(),
        },
    ];

    let branches = coordinator
        .create_branches("run-1", &locations, true)
        .await
        .unwrap();

    assert_eq!(branches.len(), 3);
    for (i, branch) in branches.iter().enumerate() {
        assert_eq!(branch.parent_step_id, "n1");
        assert_eq!(branch.branch_index, Some(i));
        assert_eq!(
            branch.path.as_ref().unwrap()[0].node_id,
            format!("n{}", i + 1)
        );
    }
}
