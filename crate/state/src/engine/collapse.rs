use std::collections::HashSet;

use vizcore_model_common::{ContainerId, EdgeId, HyperEdgeId, Style, VizError, VizResult};

use crate::{
    engine::lva::lowest_visible_ancestor, hyper_edge::AggregatedEdge, EntityId, HyperEdge,
    VisualizationState,
};

/// Folds container `id`'s crossing edges into hyper-edges and hides its
/// entire subtree (§4.5.2). Rejects an unknown, hidden, or already-collapsed
/// `id` with `InvalidState`, leaving the state unchanged (L2).
pub(crate) fn collapse(state: &mut VisualizationState, id: &ContainerId) -> VizResult<()> {
    let Some(container) = state.store.get_container(id) else {
        return Err(VizError::InvalidState(format!(
            "container `{id}` does not exist"
        )));
    };
    if container.hidden {
        return Err(VizError::InvalidState(format!("container `{id}` is hidden")));
    }
    if container.collapsed {
        return Err(VizError::InvalidState(format!(
            "container `{id}` is already collapsed"
        )));
    }

    let expanded_children: Vec<ContainerId> = state
        .hierarchy
        .children_of(id)
        .filter_map(|entity| entity.as_container())
        .filter(|child_id| {
            state
                .store
                .get_container(child_id)
                .map(|c| !c.collapsed)
                .unwrap_or(false)
        })
        .cloned()
        .collect();
    for child_id in expanded_children {
        collapse(state, &child_id)?;
    }

    let desc: HashSet<EntityId> = state.hierarchy.descendants_of(id).collect();
    let container_entity = EntityId::Container(id.clone());

    fold_crossing_edges(state, id, &container_entity, &desc);
    fold_crossing_hyper_edges(state, id, &container_entity, &desc);

    for entity in &desc {
        match entity {
            EntityId::Node(node_id) => {
                if let Some(node) = state.store.get_node_mut(node_id) {
                    node.hidden = true;
                    node.layout = None;
                }
            }
            EntityId::Container(container_id) => {
                if let Some(container) = state.store.get_container_mut(container_id) {
                    container.hidden = true;
                    container.layout = None;
                }
            }
        }
    }
    if let Some(container) = state.store.get_container_mut(id) {
        container.collapsed = true;
    }

    Ok(())
}

/// §4.5.2 step 3: every still-visible regular edge with exactly one
/// endpoint in `desc` becomes either a hyper-edge bucket, or, if its
/// external endpoint's lowest visible ancestor is `id` itself, a self-loop
/// recorded on the container for B3. Already-hidden edges are skipped here:
/// one of their endpoints was already folded away by an earlier collapse,
/// and they are re-homed through `fold_crossing_hyper_edges` instead, via
/// the hyper-edge that currently carries them.
fn fold_crossing_edges(
    state: &mut VisualizationState,
    id: &ContainerId,
    container_entity: &EntityId,
    desc: &HashSet<EntityId>,
) {
    let crossing: Vec<EdgeId> = state
        .store
        .edges()
        .filter(|edge| !edge.hidden)
        .filter(|edge| desc.contains(&edge.source) != desc.contains(&edge.target))
        .map(|edge| edge.id.clone())
        .collect();

    for edge_id in crossing {
        let edge = state
            .store
            .get_edge(&edge_id)
            .expect("just listed from store.edges()")
            .clone();
        let source_in = desc.contains(&edge.source);
        let external = if source_in { edge.target.clone() } else { edge.source.clone() };
        let external_lva = lowest_visible_ancestor(&state.store, &state.hierarchy, external);

        let aggregated = AggregatedEdge {
            source: edge.source.clone(),
            target: edge.target.clone(),
            style: edge.style,
        };

        if &external_lva == container_entity {
            if let Some(container) = state.store.get_container_mut(id) {
                container.self_loop_edges.insert(edge_id.clone(), aggregated);
            }
        } else {
            let (hyper_source, hyper_target) = if source_in {
                (container_entity.clone(), external_lva)
            } else {
                (external_lva, container_entity.clone())
            };
            absorb_hyper_edge(
                state,
                hyper_source,
                hyper_target,
                edge.style,
                vec![(edge_id.clone(), aggregated)],
            );
        }

        if let Some(edge) = state.store.get_edge_mut(&edge_id) {
            edge.hidden = true;
        }
    }
}

/// §4.5.2 step 3 also applies to hyper-edges created by a previously
/// collapsed descendant container: if the collapse of `id` now leaves
/// exactly one of that hyper-edge's two sides inside `desc`, it must be
/// re-homed the same way a plain crossing edge would be, carrying its
/// existing aggregated edges along rather than starting a fresh bucket.
fn fold_crossing_hyper_edges(
    state: &mut VisualizationState,
    id: &ContainerId,
    container_entity: &EntityId,
    desc: &HashSet<EntityId>,
) {
    let candidates: Vec<HyperEdgeId> = state
        .store
        .hyper_edges()
        .filter(|hyper_edge| desc.contains(&hyper_edge.source) != desc.contains(&hyper_edge.target))
        .map(|hyper_edge| hyper_edge.id.clone())
        .collect();

    for hyper_id in candidates {
        let Some(hyper_edge) = state.store.remove_hyper_edge(&hyper_id) else {
            continue;
        };
        let source_in = desc.contains(&hyper_edge.source);
        let external = if source_in {
            hyper_edge.target.clone()
        } else {
            hyper_edge.source.clone()
        };
        let external_lva = lowest_visible_ancestor(&state.store, &state.hierarchy, external);
        let contributed: Vec<(EdgeId, AggregatedEdge)> =
            hyper_edge.aggregated_edges.into_iter().collect();

        if &external_lva == container_entity {
            if let Some(container) = state.store.get_container_mut(id) {
                for (edge_id, aggregated) in contributed {
                    container
                        .self_loop_edges
                        .entry(edge_id)
                        .and_modify(|existing| {
                            existing.style = existing.style.higher_priority(aggregated.style);
                        })
                        .or_insert(aggregated);
                }
            }
        } else {
            let (hyper_source, hyper_target) = if source_in {
                (container_entity.clone(), external_lva)
            } else {
                (external_lva, container_entity.clone())
            };
            absorb_hyper_edge(state, hyper_source, hyper_target, hyper_edge.style, contributed);
        }
    }
}

/// Creates or merges into the canonical hyper-edge for `(source, target)`
/// (§4.5.4). Shared by `collapse` and `expand`.
pub(crate) fn absorb_hyper_edge(
    state: &mut VisualizationState,
    source: EntityId,
    target: EntityId,
    style: Style,
    contributed: Vec<(EdgeId, AggregatedEdge)>,
) {
    let canonical = HyperEdgeId::canonical(source.as_str(), target.as_str());
    if let Some(existing) = state.store.get_hyper_edge_mut(&canonical) {
        let incoming = HyperEdge {
            id: canonical,
            source,
            target,
            style,
            hidden: false,
            aggregated_edges: contributed.into_iter().collect(),
        };
        existing.merge_from(incoming);
    } else {
        state.store.insert_hyper_edge(HyperEdge {
            id: canonical,
            source,
            target,
            style,
            hidden: false,
            aggregated_edges: contributed.into_iter().collect(),
        });
    }
}
