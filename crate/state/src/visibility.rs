use vizcore_model_common::{ContainerId, EdgeId, HyperEdgeId, NodeId, Set};

use crate::{store::EntityStore, EdgeRef, EntityId};

/// C4: Visibility Cache.
///
/// Four sets derived purely from the entities' `hidden`/`collapsed` fields
/// (I3): `visible_nodes`, `visible_edges`, `visible_containers`, and
/// `expanded_containers` (visible and not collapsed). Hyper-edges are kept
/// in their own `visible_hyper_edges` set, never mixed into
/// `visible_edges`, to satisfy I5 -- callers that want everything to draw
/// ask for [`VisibilityCache::visible_edges_unified`].
///
/// Because the collapse/expand engine cascades `hidden` down an entire
/// subtree the moment a container collapses (§4.5.2 step 5), visibility
/// here never needs to walk the hierarchy: an entity's own `hidden` field
/// already reflects whether any ancestor has swallowed it.
#[derive(Clone, Debug, Default)]
pub struct VisibilityCache {
    visible_nodes: Set<NodeId>,
    visible_edges: Set<EdgeId>,
    visible_containers: Set<ContainerId>,
    expanded_containers: Set<ContainerId>,
    visible_hyper_edges: Set<HyperEdgeId>,
}

impl VisibilityCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.visible_nodes.clear();
        self.visible_edges.clear();
        self.visible_containers.clear();
        self.expanded_containers.clear();
        self.visible_hyper_edges.clear();
    }

    /// Recomputes every derived set from scratch. Called after every
    /// mutation that can affect visibility (§4.4); cheap enough relative to
    /// the collapse/expand engine's own work to not warrant incremental
    /// maintenance.
    pub fn recompute(&mut self, store: &EntityStore) {
        self.clear();

        for node in store.nodes() {
            if !node.hidden {
                self.visible_nodes.insert(node.id.clone());
            }
        }
        for container in store.containers() {
            if !container.hidden {
                self.visible_containers.insert(container.id.clone());
                if !container.collapsed {
                    self.expanded_containers.insert(container.id.clone());
                }
            }
        }

        let endpoint_visible = |id: &EntityId| match id {
            EntityId::Node(id) => self.visible_nodes.contains(id),
            EntityId::Container(id) => self.visible_containers.contains(id),
        };

        for edge in store.edges() {
            if !edge.hidden && endpoint_visible(&edge.source) && endpoint_visible(&edge.target) {
                self.visible_edges.insert(edge.id.clone());
            }
        }
        for hyper_edge in store.hyper_edges() {
            if !hyper_edge.hidden
                && endpoint_visible(&hyper_edge.source)
                && endpoint_visible(&hyper_edge.target)
            {
                self.visible_hyper_edges.insert(hyper_edge.id.clone());
            }
        }
    }

    pub fn visible_nodes(&self) -> &Set<NodeId> {
        &self.visible_nodes
    }

    pub fn visible_edges(&self) -> &Set<EdgeId> {
        &self.visible_edges
    }

    pub fn visible_containers(&self) -> &Set<ContainerId> {
        &self.visible_containers
    }

    pub fn expanded_containers(&self) -> &Set<ContainerId> {
        &self.expanded_containers
    }

    pub fn visible_hyper_edges(&self) -> &Set<HyperEdgeId> {
        &self.visible_hyper_edges
    }

    /// The union of visible regular edges and visible hyper-edges (I5): the
    /// only place hyper-edges are observable outside the engine.
    pub fn visible_edges_unified(&self) -> impl Iterator<Item = EdgeRef> + '_ {
        self.visible_edges
            .iter()
            .cloned()
            .map(EdgeRef::Edge)
            .chain(self.visible_hyper_edges.iter().cloned().map(EdgeRef::Hyper))
    }

    pub fn is_node_visible(&self, id: &NodeId) -> bool {
        self.visible_nodes.contains(id)
    }

    pub fn is_container_visible(&self, id: &ContainerId) -> bool {
        self.visible_containers.contains(id)
    }

    pub fn is_container_expanded(&self, id: &ContainerId) -> bool {
        self.expanded_containers.contains(id)
    }

    pub fn is_entity_visible(&self, id: &EntityId) -> bool {
        match id {
            EntityId::Node(id) => self.is_node_visible(id),
            EntityId::Container(id) => self.is_container_visible(id),
        }
    }
}
