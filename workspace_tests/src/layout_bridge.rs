use pretty_assertions::assert_eq;
use vizcore_layout_bridge::{LayoutConfig, LayoutEngine, TaffyLayoutEngine};
use vizcore_model_common::HyperEdgeId;
use vizcore_state::EntityId;

use crate::fixtures::{container, node, scenario_simple};

/// Scenario 6: after `collapse(c1)` in scenario 1, the layout engine's
/// unified edge view must contain exactly one edge between `c1` and `n3` --
/// the hyper-edge, not just the nodes.
#[test]
fn layout_input_includes_hyper_edges() {
    let mut state = scenario_simple();
    state.collapse_container(&container("c1")).unwrap();

    let edges: Vec<_> = state.visible_edges_unified().collect();
    assert_eq!(edges.len(), 1);

    let hyper_id = HyperEdgeId::canonical("c1", "n3");
    let hyper_edge = state.get_hyper_edge(&hyper_id).unwrap();
    assert_eq!(hyper_edge.source, EntityId::Container(container("c1")));
    assert_eq!(hyper_edge.target, EntityId::Node(node("n3")));
}

#[test]
fn taffy_engine_writes_positions_for_every_visible_entity() {
    let mut state = scenario_simple();
    state.collapse_container(&container("c1")).unwrap();

    let engine = TaffyLayoutEngine;
    engine.compute_layout(&mut state, &LayoutConfig::default()).unwrap();

    let c1 = state.get_container(&container("c1")).unwrap();
    assert!(c1.layout.is_some());
    let n3 = state.get_node(&node("n3")).unwrap();
    assert!(n3.layout.is_some());

    // Hidden entities never get a taffy node, so their layout stays unset.
    let n1 = state.get_node(&node("n1")).unwrap();
    assert!(n1.layout.is_none());
}

#[test]
fn taffy_engine_does_not_bump_revision() {
    let mut state = scenario_simple();
    let before = state.revision();

    let engine = TaffyLayoutEngine;
    engine.compute_layout(&mut state, &LayoutConfig::default()).unwrap();

    assert_eq!(state.revision(), before);
}
