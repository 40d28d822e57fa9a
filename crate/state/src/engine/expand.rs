use std::collections::VecDeque;

use vizcore_model_common::{ContainerId, EdgeId, HyperEdgeId, VizError, VizResult};

use crate::{
    engine::{
        collapse::absorb_hyper_edge,
        lva::{lowest_visible_ancestor, nearest_collapsed_ancestor},
    },
    EntityId, VisualizationState,
};

/// Restores container `id`'s direct children to visible, cascading through
/// any chain of non-collapsed descendants, and splits every hyper-edge
/// touching `id` back to the nearest remaining collapsed boundary -- or to a
/// plain edge if none remains (§4.5.3). Rejects an unknown, hidden, or
/// not-collapsed `id` with `InvalidState`, leaving the state unchanged.
/// Does not itself un-collapse nested collapsed containers; see
/// [`crate::VisualizationState::expand_container_recursive`] for that.
pub(crate) fn expand(state: &mut VisualizationState, id: &ContainerId) -> VizResult<()> {
    let Some(container) = state.store.get_container(id) else {
        return Err(VizError::InvalidState(format!(
            "container `{id}` does not exist"
        )));
    };
    if container.hidden {
        return Err(VizError::InvalidState(format!("container `{id}` is hidden")));
    }
    if !container.collapsed {
        return Err(VizError::InvalidState(format!(
            "container `{id}` is not collapsed"
        )));
    }

    let container_entity = EntityId::Container(id.clone());

    reveal_non_collapsed_subtree(state, id);
    restore_self_loop_edges(state, id);
    split_hyper_edges(state, id, &container_entity);

    if let Some(container) = state.store.get_container_mut(id) {
        container.collapsed = false;
    }

    Ok(())
}

/// Un-hides `id`'s children, and recurses through any child container that
/// is not itself collapsed -- an expanded container always shows its own
/// children, so the cascade only stops at a still-collapsed boundary.
fn reveal_non_collapsed_subtree(state: &mut VisualizationState, id: &ContainerId) {
    let mut frontier: VecDeque<EntityId> = state.hierarchy.children_of(id).cloned().collect();
    while let Some(entity) = frontier.pop_front() {
        match &entity {
            EntityId::Node(node_id) => {
                if let Some(node) = state.store.get_node_mut(node_id) {
                    node.hidden = false;
                }
            }
            EntityId::Container(container_id) => {
                if let Some(container) = state.store.get_container_mut(container_id) {
                    container.hidden = false;
                }
                let collapsed = state
                    .store
                    .get_container(container_id)
                    .map(|c| c.collapsed)
                    .unwrap_or(false);
                if !collapsed {
                    frontier.extend(state.hierarchy.children_of(container_id).cloned());
                }
            }
        }
    }
}

/// B3: replay the edges that were skipped during collapse because they
/// would have become self-loops. Unhiding the original edge is sufficient --
/// if its other endpoint is still folded behind a nested collapsed
/// container, endpoint-driven visibility (I3) keeps it invisible until that
/// container later expands too.
fn restore_self_loop_edges(state: &mut VisualizationState, id: &ContainerId) {
    let edge_ids: Vec<EdgeId> = state
        .store
        .get_container(id)
        .map(|c| c.self_loop_edges.keys().cloned().collect())
        .unwrap_or_default();
    if let Some(container) = state.store.get_container_mut(id) {
        container.self_loop_edges.clear();
    }
    for edge_id in edge_ids {
        if let Some(edge) = state.store.get_edge_mut(&edge_id) {
            edge.hidden = false;
        }
    }
}

/// §4.5.3 step 1: for every hyper-edge touching `id`, decide per aggregated
/// edge whether its true internal endpoint is still behind a nested
/// collapsed container (re-home to that container) or now fully reachable
/// (restore the original edge).
fn split_hyper_edges(state: &mut VisualizationState, id: &ContainerId, container_entity: &EntityId) {
    let touching: Vec<HyperEdgeId> = state
        .store
        .hyper_edges()
        .filter(|h| &h.source == container_entity || &h.target == container_entity)
        .map(|h| h.id.clone())
        .collect();

    for hyper_id in touching {
        let Some(hyper_edge) = state.store.remove_hyper_edge(&hyper_id) else {
            continue;
        };
        let source_is_container = &hyper_edge.source == container_entity;

        for (edge_id, aggregated) in hyper_edge.aggregated_edges {
            let internal = if source_is_container {
                aggregated.source.clone()
            } else {
                aggregated.target.clone()
            };
            let external = if source_is_container {
                aggregated.target.clone()
            } else {
                aggregated.source.clone()
            };

            match nearest_collapsed_ancestor(&state.store, &state.hierarchy, id, internal) {
                Some(boundary) => {
                    let external_lva =
                        lowest_visible_ancestor(&state.store, &state.hierarchy, external);
                    let (new_source, new_target) = if source_is_container {
                        (boundary, external_lva)
                    } else {
                        (external_lva, boundary)
                    };
                    absorb_hyper_edge(
                        state,
                        new_source,
                        new_target,
                        aggregated.style,
                        vec![(edge_id, aggregated)],
                    );
                }
                None => {
                    if let Some(edge) = state.store.get_edge_mut(&edge_id) {
                        edge.hidden = false;
                    }
                }
            }
        }
    }
}
