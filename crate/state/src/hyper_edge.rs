use serde::{Deserialize, Serialize};
use vizcore_model_common::{EdgeId, HyperEdgeId, Map, Style};

use crate::EntityId;

/// The original `(source, target, style)` of a regular edge that was rolled
/// into a hyper-edge's aggregation.
///
/// Captured at the moment the aggregation occurred so that `expand` can
/// later decide, per entry, which side lies inside the expanding container
/// and restore or re-bucket it (§4.5.3 step 1).
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct AggregatedEdge {
    pub source: EntityId,
    pub target: EntityId,
    pub style: Style,
}

/// An engine-created aggregate edge replacing one or more crossing edges of
/// a collapsed container (I4, I6).
///
/// Exclusively created and destroyed by the collapse/expand engine (§4.5);
/// nothing outside `crate::engine` constructs or tears one down directly.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct HyperEdge {
    pub id: HyperEdgeId,
    pub source: EntityId,
    pub target: EntityId,
    pub style: Style,
    pub hidden: bool,
    pub aggregated_edges: Map<EdgeId, AggregatedEdge>,
}

impl HyperEdge {
    /// Merges `other`'s aggregated edges into `self`, following the style
    /// precedence and union-by-original-edge-id rule of §4.5.4.
    pub fn merge_from(&mut self, other: HyperEdge) {
        self.style = self.style.higher_priority(other.style);
        for (edge_id, aggregated) in other.aggregated_edges {
            self.aggregated_edges
                .entry(edge_id)
                .and_modify(|existing| {
                    existing.style = existing.style.higher_priority(aggregated.style);
                })
                .or_insert(aggregated);
        }
    }

    /// I6: a hyper-edge with no aggregated edges must not exist.
    pub fn is_empty(&self) -> bool {
        self.aggregated_edges.is_empty()
    }
}
