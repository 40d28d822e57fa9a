//! The collapse/expand engine (§4.5): the only code in this crate permitted
//! to create or destroy hyper-edges.

mod collapse;
mod expand;
mod lva;

use vizcore_model_common::{ContainerId, VizError, VizResult};

use crate::{EntityId, VisualizationState};

impl VisualizationState {
    /// Collapses `id` into a single visible vertex: folds every edge
    /// crossing its boundary into a hyper-edge (merging with any that
    /// already exist there) and hides its entire subtree. Any still-expanded
    /// container child is collapsed first, bottom-up. Rejects an unknown,
    /// hidden, or already-collapsed `id` (L2).
    pub fn collapse_container(&mut self, id: &ContainerId) -> VizResult<()> {
        tracing::debug!(container = %id, "collapsing container");
        with_rollback(self, |state| {
            collapse::collapse(state, id)?;
            check_hyper_edge_invariants(state)
        })
    }

    /// Expands `id`: restores its direct children (and any non-collapsed
    /// descendants beneath them) and splits every hyper-edge touching `id`
    /// back down to the nearest collapsed boundary, or to a plain edge if
    /// none remains. Nested collapsed containers stay collapsed. Rejects an
    /// unknown, hidden, or not-collapsed `id` with `InvalidState`.
    pub fn expand_container(&mut self, id: &ContainerId) -> VizResult<()> {
        tracing::debug!(container = %id, "expanding container");
        with_rollback(self, |state| {
            expand::expand(state, id)?;
            check_hyper_edge_invariants(state)
        })
    }

    /// Expands `id` and, transitively, every container that becomes visible
    /// underneath it while still collapsed -- repeatedly revealing and
    /// expanding the next boundary converges to the same result as a
    /// bottom-up walk, without needing to know the subtree's shape in
    /// advance.
    pub fn expand_container_recursive(&mut self, id: &ContainerId) -> VizResult<()> {
        with_rollback(self, |state| {
            expand::expand(state, id)?;
            loop {
                let next_collapsed = state
                    .hierarchy
                    .descendants_of(id)
                    .filter_map(|entity| entity.as_container().cloned())
                    .find(|container_id| {
                        state
                            .store
                            .get_container(container_id)
                            .map(|c| c.collapsed)
                            .unwrap_or(false)
                    });
                match next_collapsed {
                    Some(container_id) => expand::expand(state, &container_id)?,
                    None => break,
                }
            }
            check_hyper_edge_invariants(state)
        })
    }
}

/// Snapshots the entity store and hierarchy index, runs `f`, and either
/// commits (refreshing the derived incidence and visibility indices) or
/// rolls the snapshot back on error. Implementers may alternatively compute
/// a scratch changeset; this crate chooses snapshot-and-restore since the
/// engine's mutations already touch most of the store on any non-trivial
/// collapse or expand.
fn with_rollback<F>(state: &mut VisualizationState, f: F) -> VizResult<()>
where
    F: FnOnce(&mut VisualizationState) -> VizResult<()>,
{
    let store_snapshot = state.store.clone();
    let hierarchy_snapshot = state.hierarchy.clone();
    match f(state) {
        Ok(()) => {
            state.refresh();
            Ok(())
        }
        Err(err) => {
            if matches!(err, VizError::InvariantViolation(_)) {
                tracing::error!(%err, "engine invariant violated; rolling back");
            } else {
                tracing::warn!(%err, "rolling back failed collapse/expand");
            }
            state.store = store_snapshot;
            state.hierarchy = hierarchy_snapshot;
            Err(err)
        }
    }
}

/// Postcondition check run at the end of every engine step, against the raw
/// entity fields rather than the (not-yet-refreshed) visibility cache: I4
/// (every non-hidden hyper-edge has two distinct, visible endpoints, at
/// least one a currently-collapsed container) and I6 (its aggregated-edges
/// mapping is non-empty and references edges that still exist). A failure
/// here is `InvariantViolation` (§4.5.5): a programmer bug in the engine,
/// never an expected outcome of a well-formed collapse or expand.
fn check_hyper_edge_invariants(state: &VisualizationState) -> VizResult<()> {
    for hyper_edge in state.store.hyper_edges() {
        if hyper_edge.hidden {
            continue;
        }
        if hyper_edge.source == hyper_edge.target {
            return Err(VizError::InvariantViolation(format!(
                "hyper-edge `{}` has equal source and target `{}` (I4)",
                hyper_edge.id, hyper_edge.source
            )));
        }
        if hyper_edge.is_empty() {
            return Err(VizError::InvariantViolation(format!(
                "hyper-edge `{}` has an empty aggregated-edges mapping (I6)",
                hyper_edge.id
            )));
        }
        if !is_raw_visible(state, &hyper_edge.source) || !is_raw_visible(state, &hyper_edge.target) {
            return Err(VizError::InvariantViolation(format!(
                "hyper-edge `{}` has a hidden endpoint (I4)",
                hyper_edge.id
            )));
        }
        if !is_collapsed_container(state, &hyper_edge.source)
            && !is_collapsed_container(state, &hyper_edge.target)
        {
            return Err(VizError::InvariantViolation(format!(
                "hyper-edge `{}` has neither endpoint a collapsed container (I4)",
                hyper_edge.id
            )));
        }
        for edge_id in hyper_edge.aggregated_edges.keys() {
            if state.store.get_edge(edge_id).is_none() {
                return Err(VizError::InvariantViolation(format!(
                    "hyper-edge `{}` aggregates `{}`, which no longer exists (I6)",
                    hyper_edge.id, edge_id
                )));
            }
        }
    }
    Ok(())
}

fn is_raw_visible(state: &VisualizationState, id: &EntityId) -> bool {
    match id {
        EntityId::Node(id) => state.store.get_node(id).map(|n| !n.hidden).unwrap_or(false),
        EntityId::Container(id) => state.store.get_container(id).map(|c| !c.hidden).unwrap_or(false),
    }
}

fn is_collapsed_container(state: &VisualizationState, id: &EntityId) -> bool {
    match id {
        EntityId::Node(_) => false,
        EntityId::Container(id) => state.store.get_container(id).map(|c| c.collapsed).unwrap_or(false),
    }
}
