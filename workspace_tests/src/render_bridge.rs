use pretty_assertions::assert_eq;
use vizcore_layout_bridge::{LayoutConfig, LayoutEngine, TaffyLayoutEngine};
use vizcore_render_bridge::{RenderOutput, Theme};
use vizcore_state::{ContainerProps, NodeProps, VisualizationState};

use crate::fixtures::{container, node, scenario_simple};

fn laid_out(mut state: VisualizationState) -> VisualizationState {
    TaffyLayoutEngine
        .compute_layout(&mut state, &LayoutConfig::default())
        .unwrap();
    state
}

#[test]
fn build_flattens_visible_entities_with_parent_links() {
    let mut state = scenario_simple();
    state.collapse_container(&container("c1")).unwrap();
    let state = laid_out(state);
    let output = RenderOutput::build(&state, &Theme::default());

    assert_eq!(output.nodes.len(), 1);
    assert_eq!(output.containers.len(), 1);
    assert_eq!(output.edges.len(), 1);

    let n3 = output.nodes.iter().find(|n| n.id == node("n3")).unwrap();
    assert_eq!(n3.parent, None);

    let c1 = &output.containers[0];
    assert_eq!(c1.id, container("c1"));
    assert!(c1.collapsed);

    let hyper_edge = &output.edges[0];
    assert!(hyper_edge.is_aggregate);
}

/// L3: absolute-to-relative coordinate translation is exactly invertible.
#[test]
fn absolute_position_inverts_parent_relative_translation() {
    let mut state = VisualizationState::new();
    state
        .upsert_container(container("root"), ContainerProps::new("root"))
        .unwrap();
    state.upsert_node(node("child"), NodeProps::new("child")).unwrap();
    state
        .add_child(container("root"), vizcore_state::EntityId::Node(node("child")))
        .unwrap();

    let state = laid_out(state);
    let output = RenderOutput::build(&state, &Theme::default());

    let expected_absolute = {
        let child_layout = state.get_node(&node("child")).unwrap().layout.unwrap();
        child_layout.position
    };

    let recovered = output.absolute_position(node("child").as_str()).unwrap();
    assert!((recovered.0 - expected_absolute.0).abs() < 1e-6);
    assert!((recovered.1 - expected_absolute.1).abs() < 1e-6);
}

#[test]
fn theme_maps_style_to_configured_class() {
    let theme = Theme::default().with_class(vizcore_model_common::Style::Error, "custom-error");
    assert_eq!(theme.class_for(vizcore_model_common::Style::Error), "custom-error");
    assert_eq!(
        theme.class_for(vizcore_model_common::Style::Default),
        "viz-style-default"
    );
}
