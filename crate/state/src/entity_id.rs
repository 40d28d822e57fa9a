use std::fmt;

use serde::{Deserialize, Serialize};
use vizcore_model_common::{ContainerId, NodeId};

/// Either side of an edge, or a member of a container's children set.
///
/// Most edges connect two nodes, but once a container collapses, hyper-edges
/// (and, transiently during `expand`, the buckets in §4.5.3 step 1) connect a
/// node to a container or a container to another container. Rather than
/// giving `Edge` and `HyperEdge` separate node/container fields, both sides
/// are this one sum type.
#[derive(Clone, Debug, Hash, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum EntityId {
    Node(NodeId),
    Container(ContainerId),
}

impl EntityId {
    /// Returns the identifier as a string slice, regardless of kind.
    pub fn as_str(&self) -> &str {
        match self {
            EntityId::Node(id) => id.as_str(),
            EntityId::Container(id) => id.as_str(),
        }
    }

    /// Returns the [`NodeId`] if this is a node entity.
    pub fn as_node(&self) -> Option<&NodeId> {
        match self {
            EntityId::Node(id) => Some(id),
            EntityId::Container(_) => None,
        }
    }

    /// Returns the [`ContainerId`] if this is a container entity.
    pub fn as_container(&self) -> Option<&ContainerId> {
        match self {
            EntityId::Node(_) => None,
            EntityId::Container(id) => Some(id),
        }
    }

    pub fn is_container(&self) -> bool {
        matches!(self, EntityId::Container(_))
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<NodeId> for EntityId {
    fn from(id: NodeId) -> Self {
        EntityId::Node(id)
    }
}

impl From<ContainerId> for EntityId {
    fn from(id: ContainerId) -> Self {
        EntityId::Container(id)
    }
}
