use vizcore_model_common::{EdgeId, HyperEdgeId, Map, Set};

use crate::{store::EntityStore, EdgeRef, EntityId};

/// C3: Edge Incidence Index.
///
/// Maps each endpoint id to the set of edge ids (regular or hyper) that
/// touch it. I2 requires this to equal, exactly, the multiset of
/// `(endpoint, edge_id)` pairs derived from every existing edge and
/// every non-hidden hyper-edge -- incremental maintenance here must match a
/// full `rebuild` after any batch of structural changes.
#[derive(Clone, Debug, Default)]
pub struct EdgeIncidenceIndex {
    by_endpoint: Map<EntityId, Set<EdgeRef>>,
}

impl EdgeIncidenceIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.by_endpoint.clear();
    }

    pub fn incident_to(&self, id: &EntityId) -> impl Iterator<Item = &EdgeRef> {
        self.by_endpoint
            .get(id)
            .into_iter()
            .flat_map(|edges| edges.iter())
    }

    pub fn add_edge(&mut self, id: &EdgeId, source: &EntityId, target: &EntityId) {
        self.insert(source.clone(), EdgeRef::Edge(id.clone()));
        self.insert(target.clone(), EdgeRef::Edge(id.clone()));
    }

    pub fn remove_edge(&mut self, id: &EdgeId, source: &EntityId, target: &EntityId) {
        self.remove(source, &EdgeRef::Edge(id.clone()));
        self.remove(target, &EdgeRef::Edge(id.clone()));
    }

    pub fn add_hyper_edge(&mut self, id: &HyperEdgeId, source: &EntityId, target: &EntityId) {
        self.insert(source.clone(), EdgeRef::Hyper(id.clone()));
        self.insert(target.clone(), EdgeRef::Hyper(id.clone()));
    }

    pub fn remove_hyper_edge(&mut self, id: &HyperEdgeId, source: &EntityId, target: &EntityId) {
        self.remove(source, &EdgeRef::Hyper(id.clone()));
        self.remove(target, &EdgeRef::Hyper(id.clone()));
    }

    /// Drops every incidence entry mentioning `id`, regardless of which
    /// endpoint it was recorded against. Used when an entity is removed
    /// from the store entirely and its incident edges are left dangling by
    /// design (§4.1 contract: removing a node does not delete incident
    /// edges).
    pub fn remove_endpoint(&mut self, id: &EntityId) {
        self.by_endpoint.shift_remove(id);
    }

    fn insert(&mut self, endpoint: EntityId, edge_ref: EdgeRef) {
        self.by_endpoint.entry(endpoint).or_default().insert(edge_ref);
    }

    fn remove(&mut self, endpoint: &EntityId, edge_ref: &EdgeRef) {
        if let Some(edges) = self.by_endpoint.get_mut(endpoint) {
            edges.shift_remove(edge_ref);
            if edges.is_empty() {
                self.by_endpoint.shift_remove(endpoint);
            }
        }
    }

    /// Full rebuild from the entity store, permitted after batch structural
    /// changes. Must produce the same result as incremental maintenance.
    pub fn rebuild(&mut self, store: &EntityStore) {
        self.clear();
        for edge in store.edges() {
            self.add_edge(&edge.id, &edge.source, &edge.target);
        }
        for hyper_edge in store.hyper_edges() {
            if !hyper_edge.hidden {
                self.add_hyper_edge(&hyper_edge.id, &hyper_edge.source, &hyper_edge.target);
            }
        }
    }
}
