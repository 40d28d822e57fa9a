use std::collections::VecDeque;

use vizcore_model_common::{ContainerId, Map, Set, VizError, VizResult};

use crate::EntityId;

/// C2: Hierarchy Index.
///
/// Maintains `children_of` and `parent_of` as two derived maps and enforces
/// tree shape (I1): each non-root entity has at most one parent, and no
/// container may become its own (transitive) descendant.
#[derive(Clone, Debug, Default)]
pub struct HierarchyIndex {
    children_of: Map<ContainerId, Set<EntityId>>,
    parent_of: Map<EntityId, ContainerId>,
}

impl HierarchyIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.children_of.clear();
        self.parent_of.clear();
    }

    /// Registers `container` as having no children yet, so that
    /// `children_of` returns an (empty) entry for it even before any child
    /// is added.
    pub fn register_container(&mut self, container: ContainerId) {
        self.children_of.entry(container).or_default();
    }

    pub fn unregister_container(&mut self, container: &ContainerId) {
        self.children_of.shift_remove(container);
    }

    /// Adds `child` as a direct child of `parent`.
    ///
    /// Fails with `HierarchyCycle` if `parent == child` or if `parent` is
    /// already a transitive descendant of `child`. Fails with
    /// `AlreadyParented` if `child` already has a different parent.
    pub fn add_child(&mut self, parent: ContainerId, child: EntityId) -> VizResult<()> {
        if child.as_container() == Some(&parent) {
            return Err(VizError::HierarchyCycle {
                parent: parent.to_string(),
                child: child.to_string(),
            });
        }
        if let EntityId::Container(child_container) = &child {
            if self.is_descendant(child_container, &parent) {
                return Err(VizError::HierarchyCycle {
                    parent: parent.to_string(),
                    child: child.to_string(),
                });
            }
        }
        if let Some(existing_parent) = self.parent_of.get(&child) {
            if existing_parent != &parent {
                return Err(VizError::AlreadyParented {
                    child: child.to_string(),
                    existing_parent: existing_parent.to_string(),
                });
            }
            // Idempotent: same parent re-added is a no-op.
            return Ok(());
        }

        self.children_of
            .entry(parent.clone())
            .or_default()
            .insert(child.clone());
        self.parent_of.insert(child, parent);
        Ok(())
    }

    /// Removes `child` from `parent`'s child set, if present.
    pub fn remove_child(&mut self, parent: &ContainerId, child: &EntityId) {
        if let Some(children) = self.children_of.get_mut(parent) {
            children.shift_remove(child);
        }
        if self.parent_of.get(child) == Some(parent) {
            self.parent_of.shift_remove(child);
        }
    }

    /// Removes `id` from the hierarchy entirely: unlinks it from its
    /// parent's children set, and (if it is a container) drops its own
    /// children set and unparents anything below it.
    pub fn remove_entity(&mut self, id: &EntityId) {
        if let Some(parent) = self.parent_of.shift_remove(id) {
            if let Some(children) = self.children_of.get_mut(&parent) {
                children.shift_remove(id);
            }
        }
        if let EntityId::Container(container_id) = id {
            if let Some(children) = self.children_of.shift_remove(container_id) {
                for child in children {
                    self.parent_of.shift_remove(&child);
                }
            }
        }
    }

    pub fn parent_of(&self, id: &EntityId) -> Option<&ContainerId> {
        self.parent_of.get(id)
    }

    pub fn children_of(&self, id: &ContainerId) -> impl Iterator<Item = &EntityId> {
        self.children_of
            .get(id)
            .into_iter()
            .flat_map(|children| children.iter())
    }

    pub fn child_count(&self, id: &ContainerId) -> usize {
        self.children_of.get(id).map(Set::len).unwrap_or(0)
    }

    /// Lazily traverses every id in the subtree rooted at `id`, per §4.5.1:
    /// "`desc(X)` is the set of all ids in the subtree rooted at `X`
    /// (including `X`'s children, transitively)".
    ///
    /// `id` itself is not included.
    pub fn descendants_of(&self, id: &ContainerId) -> Descendants<'_> {
        let mut frontier = VecDeque::new();
        if let Some(children) = self.children_of.get(id) {
            frontier.extend(children.iter().cloned());
        }
        Descendants {
            hierarchy: self,
            frontier,
        }
    }

    fn is_descendant(&self, ancestor_candidate: &ContainerId, maybe_descendant: &ContainerId) -> bool {
        self.descendants_of(ancestor_candidate)
            .any(|id| id.as_container() == Some(maybe_descendant))
    }
}

/// Lazy, breadth-first traversal of a container's descendant ids.
pub struct Descendants<'hierarchy> {
    hierarchy: &'hierarchy HierarchyIndex,
    frontier: VecDeque<EntityId>,
}

impl Iterator for Descendants<'_> {
    type Item = EntityId;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.frontier.pop_front()?;
        if let EntityId::Container(container_id) = &next {
            if let Some(children) = self.hierarchy.children_of.get(container_id) {
                self.frontier.extend(children.iter().cloned());
            }
        }
        Some(next)
    }
}
