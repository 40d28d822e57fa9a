use std::fmt;

use serde::{Deserialize, Serialize};
use vizcore_model_common::{EdgeId, HyperEdgeId};

/// A reference to either a regular edge or a hyper-edge.
///
/// The edge incidence index (C3) stores these rather than bare [`EdgeId`]s,
/// because per I2 the index must track both regular edges and visible
/// hyper-edges against each endpoint.
#[derive(Clone, Debug, Hash, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum EdgeRef {
    Edge(EdgeId),
    Hyper(HyperEdgeId),
}

impl EdgeRef {
    pub fn as_str(&self) -> &str {
        match self {
            EdgeRef::Edge(id) => id.as_str(),
            EdgeRef::Hyper(id) => id.as_str(),
        }
    }

    pub fn as_edge(&self) -> Option<&EdgeId> {
        match self {
            EdgeRef::Edge(id) => Some(id),
            EdgeRef::Hyper(_) => None,
        }
    }

    pub fn as_hyper(&self) -> Option<&HyperEdgeId> {
        match self {
            EdgeRef::Edge(_) => None,
            EdgeRef::Hyper(id) => Some(id),
        }
    }
}

impl fmt::Display for EdgeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<EdgeId> for EdgeRef {
    fn from(id: EdgeId) -> Self {
        EdgeRef::Edge(id)
    }
}

impl From<HyperEdgeId> for EdgeRef {
    fn from(id: HyperEdgeId) -> Self {
        EdgeRef::Hyper(id)
    }
}
