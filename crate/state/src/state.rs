use vizcore_model_common::{ContainerId, EdgeId, HyperEdgeId, NodeId, VizError, VizResult};

use crate::{
    hierarchy::Descendants, incidence::EdgeIncidenceIndex, store::EntityStore,
    visibility::VisibilityCache, Container, ContainerPatch, ContainerProps, Edge, EdgePatch,
    EdgeProps, EdgeRef, EntityId, HierarchyIndex, HyperEdge, Layout, Node, NodePatch, NodeProps,
};

/// The visualization state core: a mutable graph model over four
/// collections (nodes, edges, containers, hyper-edges) that tracks
/// visibility and hierarchy, and drives the collapse/expand engine.
///
/// Composes the four index components (C1-C4) by ownership rather than
/// inheritance, per the re-architecture note in §9: the state *has-a*
/// hierarchy index, *has-a* incidence index, *has-a* visibility cache.
#[derive(Clone, Debug, Default)]
pub struct VisualizationState {
    pub(crate) store: EntityStore,
    pub(crate) hierarchy: HierarchyIndex,
    pub(crate) incidence: EdgeIncidenceIndex,
    pub(crate) visibility: VisibilityCache,
    /// Bumped on every mutation that can change the unified edge view, the
    /// visibility caches, or the hierarchy (§4.8): the orchestrator polls
    /// this to detect when it should transition to `Dirty`.
    revision: u64,
}

impl VisualizationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wipes all collections and indices.
    pub fn clear(&mut self) {
        self.store.clear();
        self.hierarchy.clear();
        self.incidence.clear();
        self.visibility.clear();
        self.revision += 1;
    }

    /// Monotonically increasing counter, bumped whenever a mutation could
    /// have changed the unified edge view, the visibility caches, or the
    /// hierarchy. Orchestrators (C8) poll this rather than wiring up a
    /// callback per mutation method.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub(crate) fn refresh(&mut self) {
        self.incidence.rebuild(&self.store);
        self.visibility.recompute(&self.store);
        self.revision += 1;
    }

    // --- nodes ---------------------------------------------------------

    pub fn upsert_node(&mut self, id: NodeId, props: NodeProps) -> VizResult<()> {
        self.store.upsert_node(id, props)?;
        self.refresh();
        Ok(())
    }

    pub fn get_node(&self, id: &NodeId) -> Option<&Node> {
        self.store.get_node(id)
    }

    pub fn update_node(&mut self, id: &NodeId, patch: NodePatch) -> VizResult<()> {
        self.store.update_node(id, patch)?;
        self.refresh();
        Ok(())
    }

    /// Removes a node. Unlinks it from its parent container's child set and
    /// drops its edge-incidence entries, but does **not** delete incident
    /// edges -- per §4.1, callers decide whether to remove those too. Any
    /// surviving edge that still names this id becomes invisible (I3: its
    /// endpoint no longer resolves to a visible entity) without needing its
    /// own `hidden` flag touched.
    pub fn remove_node(&mut self, id: &NodeId) -> VizResult<Node> {
        let node = self.store.remove_node(id)?;
        let entity_id = EntityId::Node(id.clone());
        self.unlink_from_parent(&entity_id);
        self.hierarchy.remove_entity(&entity_id);
        self.incidence.remove_endpoint(&entity_id);
        self.refresh();
        Ok(node)
    }

    // --- edges -----------------------------------------------------------

    pub fn upsert_edge(&mut self, id: EdgeId, props: EdgeProps) -> VizResult<()> {
        self.store.upsert_edge(id, props)?;
        self.refresh();
        Ok(())
    }

    pub fn get_edge(&self, id: &EdgeId) -> Option<&Edge> {
        self.store.get_edge(id)
    }

    pub fn update_edge(&mut self, id: &EdgeId, patch: EdgePatch) -> VizResult<()> {
        self.store.update_edge(id, patch)?;
        self.refresh();
        Ok(())
    }

    pub fn remove_edge(&mut self, id: &EdgeId) -> VizResult<Edge> {
        let edge = self.store.remove_edge(id)?;
        self.refresh();
        Ok(edge)
    }

    // --- containers --------------------------------------------------------

    pub fn upsert_container(&mut self, id: ContainerId, props: ContainerProps) -> VizResult<()> {
        let children = props.children.clone();
        self.store.upsert_container(id.clone(), props)?;
        self.hierarchy.register_container(id.clone());
        for child in children {
            self.add_child(id.clone(), child)?;
        }
        self.refresh();
        Ok(())
    }

    pub fn get_container(&self, id: &ContainerId) -> Option<&Container> {
        self.store.get_container(id)
    }

    pub fn update_container(&mut self, id: &ContainerId, patch: ContainerPatch) -> VizResult<()> {
        self.store.update_container(id, patch)?;
        self.refresh();
        Ok(())
    }

    /// Removes a container. Its direct children are unparented (not
    /// removed from the store); they become root-level entities.
    pub fn remove_container(&mut self, id: &ContainerId) -> VizResult<Container> {
        let container = self.store.remove_container(id)?;
        let entity_id = EntityId::Container(id.clone());
        self.unlink_from_parent(&entity_id);
        self.hierarchy.remove_entity(&entity_id);
        self.hierarchy.unregister_container(id);
        self.incidence.remove_endpoint(&entity_id);
        self.refresh();
        Ok(container)
    }

    /// Drops `id` from its former parent's public `children` set, if it had
    /// one. `Container.children` mirrors the hierarchy index and must stay
    /// in sync whenever an entity leaves the hierarchy, not just when
    /// `remove_child` is called explicitly.
    fn unlink_from_parent(&mut self, id: &EntityId) {
        if let Some(parent) = self.hierarchy.parent_of(id).cloned() {
            if let Some(container) = self.store.get_container_mut(&parent) {
                container.children.shift_remove(id);
            }
        }
    }

    pub fn get_hyper_edge(&self, id: &HyperEdgeId) -> Option<&HyperEdge> {
        self.store.get_hyper_edge(id)
    }

    // --- hierarchy (C2) ------------------------------------------------

    pub fn add_child(&mut self, parent: ContainerId, child: EntityId) -> VizResult<()> {
        if self.store.get_container(&parent).is_none() {
            return Err(VizError::InvalidState(format!(
                "container `{parent}` does not exist"
            )));
        }
        self.entity_exists(&child)?;
        self.hierarchy.add_child(parent.clone(), child.clone())?;
        if let Some(container) = self.store.get_container_mut(&parent) {
            container.children.insert(child);
        }
        self.refresh();
        Ok(())
    }

    pub fn remove_child(&mut self, parent: &ContainerId, child: &EntityId) -> VizResult<()> {
        self.hierarchy.remove_child(parent, child);
        if let Some(container) = self.store.get_container_mut(parent) {
            container.children.shift_remove(child);
        }
        self.refresh();
        Ok(())
    }

    pub fn parent_of(&self, id: &EntityId) -> Option<&ContainerId> {
        self.hierarchy.parent_of(id)
    }

    pub fn children_of(&self, id: &ContainerId) -> impl Iterator<Item = &EntityId> {
        self.hierarchy.children_of(id)
    }

    pub fn descendants_of(&self, id: &ContainerId) -> Descendants<'_> {
        self.hierarchy.descendants_of(id)
    }

    fn entity_exists(&self, id: &EntityId) -> VizResult<()> {
        let exists = match id {
            EntityId::Node(id) => self.store.get_node(id).is_some(),
            EntityId::Container(id) => self.store.get_container(id).is_some(),
        };
        if exists {
            Ok(())
        } else {
            Err(VizError::InvalidState(format!("`{id}` does not exist")))
        }
    }

    // --- visibility (C4) -------------------------------------------------

    pub fn visible_nodes(&self) -> impl Iterator<Item = &NodeId> {
        self.visibility.visible_nodes().iter()
    }

    pub fn visible_edges(&self) -> impl Iterator<Item = &EdgeId> {
        self.visibility.visible_edges().iter()
    }

    pub fn visible_containers(&self) -> impl Iterator<Item = &ContainerId> {
        self.visibility.visible_containers().iter()
    }

    pub fn expanded_containers(&self) -> impl Iterator<Item = &ContainerId> {
        self.visibility.expanded_containers().iter()
    }

    pub fn visible_hyper_edges(&self) -> impl Iterator<Item = &HyperEdgeId> {
        self.visibility.visible_hyper_edges().iter()
    }

    /// The union of visible regular edges and visible hyper-edges (I5).
    pub fn visible_edges_unified(&self) -> impl Iterator<Item = EdgeRef> + '_ {
        self.visibility.visible_edges_unified()
    }

    pub fn is_entity_visible(&self, id: &EntityId) -> bool {
        self.visibility.is_entity_visible(id)
    }

    // --- layout write-back (C6 contract) --------------------------------

    /// Writes a layout position back onto a node. Does not bump `revision`:
    /// writing layout never changes the unified edge view, visibility, or
    /// hierarchy, so it must not itself trigger another `Dirty` (§4.8).
    pub fn set_node_layout(&mut self, id: &NodeId, layout: Layout) -> VizResult<()> {
        let node = self
            .store
            .get_node_mut(id)
            .ok_or_else(|| VizError::InvalidState(format!("node `{id}` does not exist")))?;
        node.layout = Some(layout);
        Ok(())
    }

    pub fn set_container_layout(&mut self, id: &ContainerId, layout: Layout) -> VizResult<()> {
        let container = self
            .store
            .get_container_mut(id)
            .ok_or_else(|| VizError::InvalidState(format!("container `{id}` does not exist")))?;
        container.layout = Some(layout);
        Ok(())
    }
}
