use vizcore_model_common::{ContainerId, EdgeId, NodeId};
use vizcore_state::{ContainerProps, EdgeProps, NodeProps, VisualizationState};

pub fn node(s: &'static str) -> NodeId {
    NodeId::new(s).unwrap()
}

pub fn edge(s: &'static str) -> EdgeId {
    EdgeId::new(s).unwrap()
}

pub fn container(s: &'static str) -> ContainerId {
    ContainerId::new(s).unwrap()
}

/// Scenario 1: `n1, n2, n3`; `e12: n1->n2`, `e13: n1->n3`; `c1 = {n1, n2}`.
pub fn scenario_simple() -> VisualizationState {
    let mut state = VisualizationState::new();
    state.upsert_node(node("n1"), NodeProps::new("n1")).unwrap();
    state.upsert_node(node("n2"), NodeProps::new("n2")).unwrap();
    state.upsert_node(node("n3"), NodeProps::new("n3")).unwrap();
    state
        .upsert_edge(edge("e12"), EdgeProps::new(node("n1"), node("n2")))
        .unwrap();
    state
        .upsert_edge(edge("e13"), EdgeProps::new(node("n1"), node("n3")))
        .unwrap();
    state
        .upsert_container(
            container("c1"),
            ContainerProps {
                children: vec![node("n1").into(), node("n2").into()],
                ..ContainerProps::new("c1")
            },
        )
        .unwrap();
    state
}

/// Scenario 2: `c_outer = {c_inner, n_a}`, `c_inner = {n_b, n_c}`; `e: n_b -> n_a`.
pub fn scenario_nested() -> VisualizationState {
    let mut state = VisualizationState::new();
    state.upsert_node(node("n_a"), NodeProps::new("n_a")).unwrap();
    state.upsert_node(node("n_b"), NodeProps::new("n_b")).unwrap();
    state.upsert_node(node("n_c"), NodeProps::new("n_c")).unwrap();
    state
        .upsert_edge(edge("e"), EdgeProps::new(node("n_b"), node("n_a")))
        .unwrap();
    state
        .upsert_container(
            container("c_inner"),
            ContainerProps {
                children: vec![node("n_b").into(), node("n_c").into()],
                ..ContainerProps::new("c_inner")
            },
        )
        .unwrap();
    state
        .upsert_container(
            container("c_outer"),
            ContainerProps {
                children: vec![container("c_inner").into(), node("n_a").into()],
                ..ContainerProps::new("c_outer")
            },
        )
        .unwrap();
    state
}

/// Scenario 3: `c_A = {n1, n2}`, `c_B = {n3, n4}`; `e14: n1 -> n4`.
pub fn scenario_cross_container() -> VisualizationState {
    let mut state = VisualizationState::new();
    for id in ["n1", "n2", "n3", "n4"] {
        state.upsert_node(node(id), NodeProps::new(id)).unwrap();
    }
    state
        .upsert_edge(edge("e14"), EdgeProps::new(node("n1"), node("n4")))
        .unwrap();
    state
        .upsert_container(
            container("c_A"),
            ContainerProps {
                children: vec![node("n1").into(), node("n2").into()],
                ..ContainerProps::new("c_A")
            },
        )
        .unwrap();
    state
        .upsert_container(
            container("c_B"),
            ContainerProps {
                children: vec![node("n3").into(), node("n4").into()],
                ..ContainerProps::new("c_B")
            },
        )
        .unwrap();
    state
}
