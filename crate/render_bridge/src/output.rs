use serde::{Deserialize, Serialize};
use vizcore_model_common::ContainerId;
use vizcore_state::{EdgeRef, EntityId, VisualizationState};

use crate::{RenderContainer, RenderEdge, RenderNode, Theme};

/// Self-contained, theme-tagged snapshot of the visible graph (C7). Carries
/// no reference back into [`VisualizationState`] -- everything a renderer
/// needs is already flattened into plain data.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct RenderOutput {
    pub nodes: Vec<RenderNode>,
    pub containers: Vec<RenderContainer>,
    pub edges: Vec<RenderEdge>,
}

impl RenderOutput {
    /// Flattens every currently-visible node, container, and unified edge
    /// (I5) off `state` into render-ready, theme-tagged output.
    pub fn build(state: &VisualizationState, theme: &Theme) -> Self {
        let nodes = state
            .visible_nodes()
            .filter_map(|node_id| {
                let node = state.get_node(node_id)?;
                let entity = EntityId::Node(node_id.clone());
                let (x, y) = relative_position(state, &entity);
                let (width, height) = node
                    .layout
                    .as_ref()
                    .and_then(|layout| layout.dimensions)
                    .unwrap_or((0.0, 0.0));
                Some(RenderNode {
                    id: node_id.clone(),
                    label: node.label.clone(),
                    class: theme.class_for(node.style).to_string(),
                    parent: state.parent_of(&entity).cloned(),
                    x,
                    y,
                    width,
                    height,
                })
            })
            .collect();

        let containers = state
            .visible_containers()
            .filter_map(|container_id| {
                let container = state.get_container(container_id)?;
                let entity = EntityId::Container(container_id.clone());
                let (x, y) = relative_position(state, &entity);
                let (width, height) = container
                    .layout
                    .as_ref()
                    .and_then(|layout| layout.dimensions)
                    .unwrap_or(container.expanded_dimensions);
                let class = if container.collapsed {
                    "viz-container-collapsed".to_string()
                } else {
                    "viz-container-expanded".to_string()
                };
                Some(RenderContainer {
                    id: container_id.clone(),
                    label: container.label.clone(),
                    class,
                    collapsed: container.collapsed,
                    parent: state.parent_of(&entity).cloned(),
                    x,
                    y,
                    width,
                    height,
                })
            })
            .collect();

        let edges = state
            .visible_edges_unified()
            .filter_map(|edge_ref| match &edge_ref {
                EdgeRef::Edge(id) => {
                    let edge = state.get_edge(id)?;
                    Some(RenderEdge {
                        id: edge.id.as_str().to_string(),
                        source: edge.source.as_str().to_string(),
                        target: edge.target.as_str().to_string(),
                        class: theme.class_for(edge.style).to_string(),
                        is_aggregate: false,
                        bends: edge.bends.clone().unwrap_or_default(),
                    })
                }
                EdgeRef::Hyper(id) => {
                    let hyper_edge = state.get_hyper_edge(id)?;
                    Some(RenderEdge {
                        id: hyper_edge.id.as_str().to_string(),
                        source: hyper_edge.source.as_str().to_string(),
                        target: hyper_edge.target.as_str().to_string(),
                        class: theme.class_for(hyper_edge.style).to_string(),
                        is_aggregate: true,
                        bends: Vec::new(),
                    })
                }
            })
            .collect();

        RenderOutput {
            nodes,
            containers,
            edges,
        }
    }

    /// Reconstructs the absolute position of `entity_id` by walking its
    /// parent chain within this output and summing each ancestor's own
    /// parent-relative position back in (L3: this must invert the
    /// translation performed by [`relative_position`] in `build`).
    pub fn absolute_position(&self, entity_id: &str) -> Option<(f64, f64)> {
        if let Some(node) = self.nodes.iter().find(|n| n.id.as_str() == entity_id) {
            return Some(self.accumulate(node.parent.clone(), (node.x, node.y)));
        }
        if let Some(container) = self.containers.iter().find(|c| c.id.as_str() == entity_id) {
            return Some(self.accumulate(container.parent.clone(), (container.x, container.y)));
        }
        None
    }

    fn accumulate(&self, mut parent: Option<ContainerId>, mut position: (f64, f64)) -> (f64, f64) {
        while let Some(parent_id) = parent {
            let Some(container) = self.containers.iter().find(|c| c.id == parent_id) else {
                break;
            };
            position.0 += container.x;
            position.1 += container.y;
            parent = container.parent.clone();
        }
        position
    }
}

fn relative_position(state: &VisualizationState, entity: &EntityId) -> (f64, f64) {
    let own = own_position(state, entity);
    match state.parent_of(entity) {
        Some(parent_id) => {
            let (px, py) = own_position(state, &EntityId::Container(parent_id.clone()));
            (own.0 - px, own.1 - py)
        }
        None => own,
    }
}

fn own_position(state: &VisualizationState, entity: &EntityId) -> (f64, f64) {
    match entity {
        EntityId::Node(id) => state
            .get_node(id)
            .and_then(|node| node.layout.as_ref())
            .map(|layout| layout.position)
            .unwrap_or((0.0, 0.0)),
        EntityId::Container(id) => state
            .get_container(id)
            .and_then(|container| container.layout.as_ref())
            .map(|layout| layout.position)
            .unwrap_or((0.0, 0.0)),
    }
}
