use pretty_assertions::assert_eq;
use vizcore_model_common::VizError;
use vizcore_state::{ContainerProps, EntityId, NodeProps};

use crate::fixtures::{container, node, scenario_simple};

#[test]
fn upsert_and_get_node_round_trips() {
    let mut state = scenario_simple();
    let n1 = state.get_node(&node("n1")).unwrap();
    assert_eq!(n1.label, "n1");
    assert!(!n1.hidden);

    state
        .update_node(&node("n1"), vizcore_state::NodePatch {
            label: Some("renamed".to_string()),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(state.get_node(&node("n1")).unwrap().label, "renamed");
}

#[test]
fn remove_node_unlinks_from_parent_without_removing_incident_edges() {
    let mut state = scenario_simple();
    state.remove_node(&node("n1")).unwrap();

    assert!(state.get_node(&node("n1")).is_none());
    assert!(!state
        .children_of(&container("c1"))
        .any(|id| id == &EntityId::Node(node("n1"))));
    // e12/e13 still exist in the store -- only one endpoint stopped resolving.
    assert!(state.get_edge(&vizcore_model_common::EdgeId::new("e12").unwrap()).is_some());
}

#[test]
fn visibility_reflects_hidden_and_collapsed_flags() {
    let state = scenario_simple();
    // P3: nothing is hidden or collapsed yet, everything starts visible.
    assert_eq!(state.visible_nodes().count(), 3);
    assert_eq!(state.visible_edges().count(), 2);
    assert_eq!(state.visible_containers().count(), 1);
    assert_eq!(state.expanded_containers().count(), 1);
}

#[test]
fn add_child_rejects_self_parenting() {
    let mut state = scenario_simple();
    let err = state
        .add_child(container("c1"), EntityId::Container(container("c1")))
        .unwrap_err();
    assert!(matches!(err, VizError::HierarchyCycle { .. }));
}

/// Scenario 4: `c_X` has child `c_Y`; `add_child(c_Y, c_X)` must fail with
/// `HierarchyCycle` and leave the state unchanged.
#[test]
fn add_child_rejects_cycle_through_grandparent() {
    let mut state = vizcore_state::VisualizationState::new();
    state
        .upsert_container(container("c_X"), ContainerProps::new("c_X"))
        .unwrap();
    state
        .upsert_container(container("c_Y"), ContainerProps::new("c_Y"))
        .unwrap();
    state
        .add_child(container("c_X"), EntityId::Container(container("c_Y")))
        .unwrap();

    let err = state
        .add_child(container("c_Y"), EntityId::Container(container("c_X")))
        .unwrap_err();
    assert!(matches!(err, VizError::HierarchyCycle { .. }));
    assert_eq!(state.parent_of(&EntityId::Container(container("c_X"))), None);
    assert_eq!(
        state.parent_of(&EntityId::Container(container("c_Y"))),
        Some(&container("c_X"))
    );
}

#[test]
fn upsert_node_rejects_empty_label() {
    let mut state = vizcore_state::VisualizationState::new();
    let err = state
        .upsert_node(node("lonely"), NodeProps::new(""))
        .unwrap_err();
    assert!(matches!(err, VizError::InvalidInput(_)));
}

#[test]
fn upsert_edge_rejects_self_loop() {
    let mut state = vizcore_state::VisualizationState::new();
    state.upsert_node(node("n1"), NodeProps::new("n1")).unwrap();
    let err = state
        .upsert_edge(
            vizcore_model_common::EdgeId::new("loop").unwrap(),
            vizcore_state::EdgeProps::new(node("n1"), node("n1")),
        )
        .unwrap_err();
    assert!(matches!(err, VizError::InvalidInput(_)));
}

#[test]
fn revision_bumps_on_mutation_but_not_on_layout_writeback() {
    let mut state = scenario_simple();
    let after_setup = state.revision();

    state
        .set_node_layout(&node("n1"), vizcore_state::Layout::at((1.0, 2.0)))
        .unwrap();
    assert_eq!(state.revision(), after_setup, "layout writes must not bump revision");

    state
        .update_node(&node("n1"), vizcore_state::NodePatch {
            label: Some("n1b".to_string()),
            ..Default::default()
        })
        .unwrap();
    assert!(state.revision() > after_setup);
}
