use vizcore_model_common::{ContainerId, EdgeId, HyperEdgeId, Map, NodeId, VizError, VizResult};

use crate::{
    Container, ContainerPatch, ContainerProps, Edge, EdgePatch, EdgeProps, HyperEdge, Node,
    NodePatch, NodeProps,
};

/// C1: Identity & Entity Store.
///
/// Typed storage of nodes, edges, containers, and hyper-edges by id.
/// Validates required fields on write; everything else (hierarchy,
/// incidence, visibility) is maintained by the sibling indices, not here.
///
/// All mutation methods are idempotent on equal inputs: upserting the same
/// props twice produces the same stored entity both times.
#[derive(Clone, Debug, Default)]
pub struct EntityStore {
    nodes: Map<NodeId, Node>,
    edges: Map<EdgeId, Edge>,
    containers: Map<ContainerId, Container>,
    hyper_edges: Map<HyperEdgeId, HyperEdge>,
}

fn require_non_empty(label: &str, field: &str) -> VizResult<()> {
    if label.trim().is_empty() {
        Err(VizError::InvalidInput(format!(
            "`{field}` must not be empty"
        )))
    } else {
        Ok(())
    }
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wipes all four collections.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
        self.containers.clear();
        self.hyper_edges.clear();
    }

    // --- nodes ---------------------------------------------------------

    pub fn upsert_node(&mut self, id: NodeId, props: NodeProps) -> VizResult<()> {
        require_non_empty(&props.label, "label")?;
        self.nodes.insert(id.clone(), Node::new(id, props));
        Ok(())
    }

    pub fn get_node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn get_node_mut(&mut self, id: &NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    pub fn update_node(&mut self, id: &NodeId, patch: NodePatch) -> VizResult<()> {
        if let Some(label) = &patch.label {
            require_non_empty(label, "label")?;
        }
        let node = self
            .nodes
            .get_mut(id)
            .ok_or_else(|| VizError::InvalidState(format!("node `{id}` does not exist")))?;
        node.apply_patch(patch);
        Ok(())
    }

    pub fn remove_node(&mut self, id: &NodeId) -> VizResult<Node> {
        self.nodes
            .shift_remove(id)
            .ok_or_else(|| VizError::InvalidState(format!("node `{id}` does not exist")))
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    // --- edges -----------------------------------------------------------

    pub fn upsert_edge(&mut self, id: EdgeId, props: EdgeProps) -> VizResult<()> {
        if props.source == props.target {
            return Err(VizError::InvalidInput(format!(
                "edge `{id}` may not be a self-loop"
            )));
        }
        self.edges.insert(id.clone(), Edge::new(id, props));
        Ok(())
    }

    pub fn get_edge(&self, id: &EdgeId) -> Option<&Edge> {
        self.edges.get(id)
    }

    pub fn get_edge_mut(&mut self, id: &EdgeId) -> Option<&mut Edge> {
        self.edges.get_mut(id)
    }

    pub fn update_edge(&mut self, id: &EdgeId, patch: EdgePatch) -> VizResult<()> {
        let edge = self
            .edges
            .get_mut(id)
            .ok_or_else(|| VizError::InvalidState(format!("edge `{id}` does not exist")))?;
        edge.apply_patch(patch);
        if edge.is_self_loop() {
            return Err(VizError::InvalidInput(format!(
                "edge `{id}` may not be a self-loop"
            )));
        }
        Ok(())
    }

    pub fn remove_edge(&mut self, id: &EdgeId) -> VizResult<Edge> {
        self.edges
            .shift_remove(id)
            .ok_or_else(|| VizError::InvalidState(format!("edge `{id}` does not exist")))
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.values()
    }

    // --- containers --------------------------------------------------------

    pub fn upsert_container(&mut self, id: ContainerId, props: ContainerProps) -> VizResult<()> {
        require_non_empty(&props.label, "label")?;
        let children = props.children.clone();
        let mut container = Container::new(id.clone(), props);
        container.children.extend(children);
        self.containers.insert(id, container);
        Ok(())
    }

    pub fn get_container(&self, id: &ContainerId) -> Option<&Container> {
        self.containers.get(id)
    }

    pub fn get_container_mut(&mut self, id: &ContainerId) -> Option<&mut Container> {
        self.containers.get_mut(id)
    }

    pub fn update_container(&mut self, id: &ContainerId, patch: ContainerPatch) -> VizResult<()> {
        if let Some(label) = &patch.label {
            require_non_empty(label, "label")?;
        }
        let container = self
            .containers
            .get_mut(id)
            .ok_or_else(|| VizError::InvalidState(format!("container `{id}` does not exist")))?;
        container.apply_patch(patch);
        Ok(())
    }

    pub fn remove_container(&mut self, id: &ContainerId) -> VizResult<Container> {
        self.containers
            .shift_remove(id)
            .ok_or_else(|| VizError::InvalidState(format!("container `{id}` does not exist")))
    }

    pub fn containers(&self) -> impl Iterator<Item = &Container> {
        self.containers.values()
    }

    // --- hyper-edges ---------------------------------------------------
    //
    // Construction and destruction are `pub(crate)`: only `crate::engine` is
    // allowed to create or destroy hyper-edges (§4.5 preamble). Reads are
    // public, since the unified edge view (I5) surfaces them to external
    // collaborators.

    pub fn get_hyper_edge(&self, id: &HyperEdgeId) -> Option<&HyperEdge> {
        self.hyper_edges.get(id)
    }

    pub fn hyper_edges(&self) -> impl Iterator<Item = &HyperEdge> {
        self.hyper_edges.values()
    }

    pub(crate) fn get_hyper_edge_mut(&mut self, id: &HyperEdgeId) -> Option<&mut HyperEdge> {
        self.hyper_edges.get_mut(id)
    }

    pub(crate) fn insert_hyper_edge(&mut self, hyper_edge: HyperEdge) {
        self.hyper_edges.insert(hyper_edge.id.clone(), hyper_edge);
    }

    pub(crate) fn remove_hyper_edge(&mut self, id: &HyperEdgeId) -> Option<HyperEdge> {
        self.hyper_edges.shift_remove(id)
    }
}
