use pretty_assertions::assert_eq;
use vizcore_model_common::{HyperEdgeId, Style, VizError};
use vizcore_state::{ContainerProps, EdgeProps, EntityId, NodeProps, VisualizationState};

use crate::fixtures::{container, edge, node, scenario_cross_container, scenario_nested, scenario_simple};

/// Scenario 1: simple collapse-expand.
#[test]
fn scenario_simple_collapse_then_expand() {
    let mut state = scenario_simple();

    state.collapse_container(&container("c1")).unwrap();

    assert_eq!(
        state.visible_nodes().cloned().collect::<Vec<_>>(),
        vec![node("n3")]
    );
    assert_eq!(state.visible_containers().next(), Some(&container("c1")));
    assert!(state.get_container(&container("c1")).unwrap().collapsed);
    assert_eq!(state.visible_edges().count(), 0);

    let hyper_id = HyperEdgeId::canonical("c1", "n3");
    let hyper_edges: Vec<_> = state.visible_hyper_edges().collect();
    assert_eq!(hyper_edges, vec![&hyper_id]);
    let hyper_edge = state.get_hyper_edge(&hyper_id).unwrap();
    assert!(hyper_edge.aggregated_edges.contains_key(&edge("e13")));
    assert!(state.get_edge(&edge("e12")).unwrap().hidden);

    state.expand_container(&container("c1")).unwrap();

    let mut visible_nodes: Vec<_> = state.visible_nodes().cloned().collect();
    visible_nodes.sort();
    assert_eq!(visible_nodes, vec![node("n1"), node("n2"), node("n3")]);
    let mut visible_edges: Vec<_> = state.visible_edges().cloned().collect();
    visible_edges.sort();
    assert_eq!(visible_edges, vec![edge("e12"), edge("e13")]);
    assert_eq!(state.visible_hyper_edges().count(), 0);
}

/// L1: `expand(collapse(c))` is the identity on observable state.
#[test]
fn collapse_then_expand_round_trips_observable_state() {
    let mut state = scenario_simple();
    let before_nodes: Vec<_> = {
        let mut v: Vec<_> = state.visible_nodes().cloned().collect();
        v.sort();
        v
    };
    let before_edges: Vec<_> = {
        let mut v: Vec<_> = state.visible_edges().cloned().collect();
        v.sort();
        v
    };

    state.collapse_container(&container("c1")).unwrap();
    state.expand_container(&container("c1")).unwrap();

    let after_nodes: Vec<_> = {
        let mut v: Vec<_> = state.visible_nodes().cloned().collect();
        v.sort();
        v
    };
    let after_edges: Vec<_> = {
        let mut v: Vec<_> = state.visible_edges().cloned().collect();
        v.sort();
        v
    };
    assert_eq!(before_nodes, after_nodes);
    assert_eq!(before_edges, after_edges);
    assert_eq!(state.visible_hyper_edges().count(), 0);
    assert!(!state.get_container(&container("c1")).unwrap().collapsed);
}

/// L2: collapsing an already-collapsed container is rejected, state unchanged.
#[test]
fn repeated_collapse_is_rejected() {
    let mut state = scenario_simple();
    state.collapse_container(&container("c1")).unwrap();
    let snapshot_revision = state.revision();

    let err = state.collapse_container(&container("c1")).unwrap_err();
    assert!(matches!(err, VizError::InvalidState(_)));
    assert_eq!(state.revision(), snapshot_revision);
}

#[test]
fn expand_on_non_collapsed_container_is_rejected() {
    let mut state = scenario_simple();
    let err = state.expand_container(&container("c1")).unwrap_err();
    assert!(matches!(err, VizError::InvalidState(_)));
}

/// Scenario 2: nested collapse -- collapsing the outer container first
/// collapses the still-expanded inner container bottom-up.
#[test]
fn nested_collapse_is_bottom_up() {
    let mut state = scenario_nested();

    state.collapse_container(&container("c_outer")).unwrap();

    assert_eq!(state.visible_containers().next(), Some(&container("c_outer")));
    assert_eq!(state.visible_nodes().count(), 0);
    assert_eq!(state.visible_edges().count(), 0);
    assert_eq!(state.visible_hyper_edges().count(), 0);
    // c_inner was collapsed as part of collapsing c_outer.
    assert!(state.get_container(&container("c_inner")).unwrap().collapsed);

    state.expand_container(&container("c_outer")).unwrap();

    let mut visible_containers: Vec<_> = state.visible_containers().cloned().collect();
    visible_containers.sort();
    assert_eq!(visible_containers, vec![container("c_inner"), container("c_outer")]);
    assert_eq!(state.visible_nodes().cloned().collect::<Vec<_>>(), vec![node("n_a")]);
    assert!(state.get_container(&container("c_inner")).unwrap().collapsed);

    let hyper_id = HyperEdgeId::canonical("c_inner", "n_a");
    let hyper_edges: Vec<_> = state.visible_hyper_edges().collect();
    assert_eq!(hyper_edges, vec![&hyper_id]);
    assert!(state
        .get_hyper_edge(&hyper_id)
        .unwrap()
        .aggregated_edges
        .contains_key(&edge("e")));
}

/// Scenario 3: cross-container edge splits as containers expand one at a
/// time, restoring the original edge only once both sides are visible.
#[test]
fn cross_container_edge_splits_progressively() {
    let mut state = scenario_cross_container();

    state.collapse_container(&container("c_A")).unwrap();
    state.collapse_container(&container("c_B")).unwrap();

    let ab_id = HyperEdgeId::canonical("c_A", "c_B");
    assert_eq!(state.visible_hyper_edges().collect::<Vec<_>>(), vec![&ab_id]);
    assert!(state
        .get_hyper_edge(&ab_id)
        .unwrap()
        .aggregated_edges
        .contains_key(&edge("e14")));

    state.expand_container(&container("c_B")).unwrap();
    let a_n4_id = HyperEdgeId::canonical("c_A", "n4");
    assert_eq!(state.visible_hyper_edges().collect::<Vec<_>>(), vec![&a_n4_id]);
    assert!(state.get_hyper_edge(&a_n4_id).is_some());

    state.expand_container(&container("c_A")).unwrap();
    assert_eq!(state.visible_hyper_edges().count(), 0);
    assert!(state.get_edge(&edge("e14")).map(|e| !e.hidden).unwrap_or(false));
}

/// Scenario 5: style priority among crossing edges that fold into one
/// hyper-edge follows `error > warning > thick > highlighted > default`.
#[test]
fn style_priority_picks_highest_among_contributors() {
    let mut state = VisualizationState::new();
    state.upsert_node(node("n1"), NodeProps::new("n1")).unwrap();
    state.upsert_node(node("n2"), NodeProps::new("n2")).unwrap();
    state.upsert_node(node("n3"), NodeProps::new("n3")).unwrap();
    state.upsert_node(node("ext"), NodeProps::new("ext")).unwrap();
    state
        .upsert_edge(edge("e1"), {
            let mut props = EdgeProps::new(node("n1"), node("ext"));
            props.style = Some(Style::Default);
            props
        })
        .unwrap();
    state
        .upsert_edge(edge("e2"), {
            let mut props = EdgeProps::new(node("n2"), node("ext"));
            props.style = Some(Style::Warning);
            props
        })
        .unwrap();
    state
        .upsert_edge(edge("e3"), {
            let mut props = EdgeProps::new(node("n3"), node("ext"));
            props.style = Some(Style::Thick);
            props
        })
        .unwrap();
    state
        .upsert_container(
            container("grp"),
            ContainerProps {
                children: vec![node("n1").into(), node("n2").into(), node("n3").into()],
                ..ContainerProps::new("grp")
            },
        )
        .unwrap();

    state.collapse_container(&container("grp")).unwrap();

    let hyper_id = HyperEdgeId::canonical("grp", "ext");
    let hyper_edge = state.get_hyper_edge(&hyper_id).unwrap();
    assert_eq!(hyper_edge.style, Style::Warning);
}

/// B1: collapsing an empty container produces no hyper-edges.
#[test]
fn collapsing_empty_container_only_flips_collapsed_flag() {
    let mut state = VisualizationState::new();
    state
        .upsert_container(container("empty"), ContainerProps::new("empty"))
        .unwrap();

    state.collapse_container(&container("empty")).unwrap();

    assert!(state.get_container(&container("empty")).unwrap().collapsed);
    assert_eq!(state.visible_hyper_edges().count(), 0);
}

/// B3: a crossing edge whose external LVA is the collapsing container
/// itself (an edge authored directly between a descendant and its own
/// ancestor container) must not become a hyper-edge self-loop.
#[test]
fn collapsing_with_edge_to_own_ancestor_is_hidden_not_hyper_edged() {
    let mut state = VisualizationState::new();
    state.upsert_node(node("inner"), NodeProps::new("inner")).unwrap();
    state
        .upsert_container(container("outer"), ContainerProps::new("outer"))
        .unwrap();
    state
        .add_child(container("outer"), EntityId::Node(node("inner")))
        .unwrap();
    state
        .upsert_edge(
            edge("self_ref"),
            EdgeProps::new(node("inner"), EntityId::Container(container("outer"))),
        )
        .unwrap();

    state.collapse_container(&container("outer")).unwrap();

    assert_eq!(state.visible_hyper_edges().count(), 0);
    assert!(state.get_edge(&edge("self_ref")).unwrap().hidden);

    state.expand_container(&container("outer")).unwrap();
    assert!(!state.get_edge(&edge("self_ref")).unwrap().hidden);
}
