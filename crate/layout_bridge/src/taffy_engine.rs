use taffy::{AvailableSpace, FlexDirection, Size, Style, TaffyTree};
use vizcore_model_common::{Map, VizError, VizResult};
use vizcore_state::{EdgeRef, EntityId, Layout, VisualizationState};

use crate::{LayoutConfig, LayoutDirection, NodeContext};

/// Default size given to a leaf node (or a collapsed container, which is
/// drawn as a single vertex) that has no layout-relevant dimensions of its
/// own yet.
const DEFAULT_NODE_WIDTH: f32 = 160.0;
const DEFAULT_NODE_HEIGHT: f32 = 48.0;

/// `taffy`-backed [`LayoutEngine`](crate::LayoutEngine).
///
/// Builds one `taffy` node per currently-visible node or container, nesting
/// the children of every *expanded* container (a collapsed container is laid
/// out as a single leaf, since its children are hidden), runs `taffy`'s own
/// layout algorithm, then walks every mapped node accumulating each
/// ancestor's relative position into an absolute one before writing it back.
///
/// `taffy` has no native notion of a graph edge, so `visible_edges_unified`
/// (§4.6, crucially including hyper-edges) cannot be handed to it as edges
/// directly. It is still read on every pass, for two reasons: every endpoint
/// named by a visible edge or hyper-edge is required to resolve to a taffy
/// node, so an endpoint the engine forgot to keep visible surfaces here as a
/// `LayoutFailure` rather than silently producing an overlapping layout (the
/// historical bug this contract exists to catch); and root-level entities
/// are reordered so that entities connected by a visible edge -- regular or
/// hyper -- sit adjacent to one another in the flex layout, the one form of
/// adjacency taffy's box model can actually encode.
#[derive(Clone, Copy, Debug, Default)]
pub struct TaffyLayoutEngine;

impl crate::LayoutEngine for TaffyLayoutEngine {
    fn compute_layout(&self, state: &mut VisualizationState, config: &LayoutConfig) -> VizResult<()> {
        let mut tree: TaffyTree<NodeContext> = TaffyTree::new();
        let mut entity_to_taffy: Map<EntityId, taffy::NodeId> = Map::new();

        let edges = unified_edge_endpoints(state)?;

        let roots: Vec<EntityId> = state
            .visible_nodes()
            .map(|id| EntityId::Node(id.clone()))
            .chain(state.visible_containers().map(|id| EntityId::Container(id.clone())))
            .filter(|entity| {
                state
                    .parent_of(entity)
                    .map(|parent| !state.is_entity_visible(&EntityId::Container(parent.clone())))
                    .unwrap_or(true)
            })
            .collect();
        let roots = order_roots_by_adjacency(roots, &edges);

        let mut root_children = Vec::with_capacity(roots.len());
        for entity in &roots {
            let node_id = build_node(&mut tree, state, config, entity, &mut entity_to_taffy)?;
            root_children.push(node_id);
        }

        let root_style = container_style(config);
        let root = tree
            .new_with_children(root_style, &root_children)
            .map_err(|err| VizError::LayoutFailure(err.to_string()))?;

        tree.compute_layout(
            root,
            Size {
                width: AvailableSpace::MaxContent,
                height: AvailableSpace::MaxContent,
            },
        )
        .map_err(|err| VizError::LayoutFailure(err.to_string()))?;

        for (entity, taffy_node_id) in entity_to_taffy {
            let layout = tree
                .layout(taffy_node_id)
                .map_err(|err| VizError::LayoutFailure(err.to_string()))?;
            let (x, y) = absolute_xy(&tree, taffy_node_id, layout)?;
            let position = (x as f64, y as f64);
            let dimensions = (layout.size.width as f64, layout.size.height as f64);
            let layout_value = Layout::with_dimensions(position, dimensions);
            match entity {
                EntityId::Node(node_id) => state.set_node_layout(&node_id, layout_value)?,
                EntityId::Container(container_id) => {
                    state.set_container_layout(&container_id, layout_value)?
                }
            }
        }

        Ok(())
    }
}

fn build_node(
    tree: &mut TaffyTree<NodeContext>,
    state: &VisualizationState,
    config: &LayoutConfig,
    entity: &EntityId,
    entity_to_taffy: &mut Map<EntityId, taffy::NodeId>,
) -> VizResult<taffy::NodeId> {
    let node_id = match entity {
        EntityId::Node(_) => tree
            .new_leaf_with_context(leaf_style(), NodeContext { entity_id: entity.clone() })
            .map_err(|err| VizError::LayoutFailure(err.to_string()))?,
        EntityId::Container(container_id) => {
            let expanded = state.expanded_containers().any(|id| id == container_id);
            if expanded {
                let children: Vec<EntityId> = state
                    .children_of(container_id)
                    .filter(|child| state.is_entity_visible(child))
                    .cloned()
                    .collect();
                let mut child_ids = Vec::with_capacity(children.len());
                for child in &children {
                    child_ids.push(build_node(tree, state, config, child, entity_to_taffy)?);
                }
                let node_id = tree
                    .new_with_children(container_style(config), &child_ids)
                    .map_err(|err| VizError::LayoutFailure(err.to_string()))?;
                tree.set_node_context(node_id, Some(NodeContext { entity_id: entity.clone() }))
                    .map_err(|err| VizError::LayoutFailure(err.to_string()))?;
                node_id
            } else {
                tree.new_leaf_with_context(leaf_style(), NodeContext { entity_id: entity.clone() })
                    .map_err(|err| VizError::LayoutFailure(err.to_string()))?
            }
        }
    };
    entity_to_taffy.insert(entity.clone(), node_id);
    Ok(node_id)
}

/// Resolves every element of `visible_edges_unified` (§4.6) to its concrete
/// `(source, target)` entity pair, failing with `LayoutFailure` if an
/// endpoint cannot be found -- a visible edge or hyper-edge is only ever
/// supposed to name entities that are themselves visible.
fn unified_edge_endpoints(state: &VisualizationState) -> VizResult<Vec<(EntityId, EntityId)>> {
    let mut endpoints = Vec::new();
    for edge_ref in state.visible_edges_unified() {
        let (source, target) = match &edge_ref {
            EdgeRef::Edge(id) => {
                let edge = state
                    .get_edge(id)
                    .ok_or_else(|| VizError::LayoutFailure(format!("visible edge `{id}` has no entry in the store")))?;
                (edge.source.clone(), edge.target.clone())
            }
            EdgeRef::Hyper(id) => {
                let hyper_edge = state.get_hyper_edge(id).ok_or_else(|| {
                    VizError::LayoutFailure(format!("visible hyper-edge `{id}` has no entry in the store"))
                })?;
                (hyper_edge.source.clone(), hyper_edge.target.clone())
            }
        };
        endpoints.push((source, target));
    }
    Ok(endpoints)
}

/// Groups `roots` so that entities joined by a visible edge or hyper-edge
/// end up adjacent in the flex child list, via union-find over `edges`.
/// Taffy lays out children strictly in list order, so this is the only
/// lever its box model gives us for reflecting graph adjacency.
fn order_roots_by_adjacency(roots: Vec<EntityId>, edges: &[(EntityId, EntityId)]) -> Vec<EntityId> {
    let index_of: Map<EntityId, usize> =
        roots.iter().enumerate().map(|(i, entity)| (entity.clone(), i)).collect();
    let mut parent: Vec<usize> = (0..roots.len()).collect();

    fn find(parent: &mut [usize], mut x: usize) -> usize {
        while parent[x] != x {
            parent[x] = parent[parent[x]];
            x = parent[x];
        }
        x
    }

    for (source, target) in edges {
        if let (Some(&i), Some(&j)) = (index_of.get(source), index_of.get(target)) {
            let ri = find(&mut parent, i);
            let rj = find(&mut parent, j);
            if ri != rj {
                parent[ri] = rj;
            }
        }
    }

    let mut clustered: Vec<(usize, EntityId)> = roots
        .into_iter()
        .enumerate()
        .map(|(i, entity)| (find(&mut parent, i), entity))
        .collect();
    clustered.sort_by_key(|(cluster, _)| *cluster);
    clustered.into_iter().map(|(_, entity)| entity).collect()
}

fn leaf_style() -> Style {
    Style {
        size: Size {
            width: taffy::Dimension::Length(DEFAULT_NODE_WIDTH),
            height: taffy::Dimension::Length(DEFAULT_NODE_HEIGHT),
        },
        ..Default::default()
    }
}

fn container_style(config: &LayoutConfig) -> Style {
    Style {
        display: taffy::Display::Flex,
        flex_direction: flex_direction(config.direction),
        gap: Size {
            width: taffy::LengthPercentage::Length(config.node_spacing as f32),
            height: taffy::LengthPercentage::Length(config.layer_spacing as f32),
        },
        padding: taffy::Rect {
            left: taffy::LengthPercentage::Length(config.node_spacing as f32),
            right: taffy::LengthPercentage::Length(config.node_spacing as f32),
            top: taffy::LengthPercentage::Length(config.layer_spacing as f32),
            bottom: taffy::LengthPercentage::Length(config.layer_spacing as f32),
        },
        ..Default::default()
    }
}

fn flex_direction(direction: LayoutDirection) -> FlexDirection {
    match direction {
        LayoutDirection::TopDown => FlexDirection::Column,
        LayoutDirection::BottomUp => FlexDirection::ColumnReverse,
        LayoutDirection::LeftRight => FlexDirection::Row,
        LayoutDirection::RightLeft => FlexDirection::RowReverse,
    }
}

/// `taffy` positions are relative to each node's parent; accumulate up the
/// tree to get the absolute position needed for rendering.
fn absolute_xy(
    tree: &TaffyTree<NodeContext>,
    node_id: taffy::NodeId,
    layout: &taffy::Layout,
) -> VizResult<(f32, f32)> {
    let mut x = layout.location.x;
    let mut y = layout.location.y;
    let mut current = node_id;
    while let Some(parent) = tree.parent(current) {
        let parent_layout = tree
            .layout(parent)
            .map_err(|err| VizError::LayoutFailure(err.to_string()))?;
        x += parent_layout.location.x;
        y += parent_layout.location.y;
        current = parent;
    }
    Ok((x, y))
}
