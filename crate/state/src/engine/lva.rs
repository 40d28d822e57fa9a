use vizcore_model_common::ContainerId;

use crate::{store::EntityStore, EntityId, HierarchyIndex};

/// Walks `id` up the hierarchy until it reaches an entity that is not
/// hidden, per §4.5.2 step 3: "redirect the external endpoint to its lowest
/// visible ancestor". An entity that is already visible is its own lowest
/// visible ancestor.
///
/// Terminates at a root entity even if that root is itself hidden -- the
/// caller (the collapse/expand engine) is the only place a hidden root can
/// arise, and it always does so deliberately (e.g. a user-hidden node with
/// no enclosing container).
pub(crate) fn lowest_visible_ancestor(
    store: &EntityStore,
    hierarchy: &HierarchyIndex,
    mut id: EntityId,
) -> EntityId {
    loop {
        let hidden = match &id {
            EntityId::Node(node_id) => store.get_node(node_id).map(|n| n.hidden).unwrap_or(false),
            EntityId::Container(container_id) => store
                .get_container(container_id)
                .map(|c| c.hidden)
                .unwrap_or(false),
        };
        if !hidden {
            return id;
        }
        match hierarchy.parent_of(&id) {
            Some(parent) => id = EntityId::Container(parent.clone()),
            None => return id,
        }
    }
}

/// Walks `entity` up the hierarchy towards `bound`, returning the nearest
/// ancestor (inclusive of `entity` itself) that is a collapsed container, or
/// `None` if the path from `entity` up to (but not including) `bound` is
/// entirely expanded containers and plain nodes.
///
/// Used by `expand` (§4.5.3 step 1) to decide, per aggregated edge of a
/// hyper-edge touching `bound`, whether the edge's true endpoint is still
/// folded behind some nested collapsed container -- in which case the
/// hyper-edge must be re-homed to that container rather than exposed as a
/// plain edge.
pub(crate) fn nearest_collapsed_ancestor(
    store: &EntityStore,
    hierarchy: &HierarchyIndex,
    bound: &ContainerId,
    mut entity: EntityId,
) -> Option<EntityId> {
    loop {
        if let EntityId::Container(container_id) = &entity {
            if store
                .get_container(container_id)
                .map(|c| c.collapsed)
                .unwrap_or(false)
            {
                return Some(entity);
            }
        }
        match hierarchy.parent_of(&entity) {
            Some(parent) if parent == bound => return None,
            Some(parent) => entity = EntityId::Container(parent.clone()),
            None => return None,
        }
    }
}
