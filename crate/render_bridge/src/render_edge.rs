use serde::{Deserialize, Serialize};

/// Flattened, render-ready view of a visible edge or hyper-edge (I5: the
/// two are presented uniformly here, same as
/// [`VisualizationState::visible_edges_unified`](vizcore_state::VisualizationState::visible_edges_unified)).
///
/// `source`/`target` are the endpoint entity ids as plain strings, since
/// either side may be a node or a container. Coordinates for routing are
/// looked up by the caller via the corresponding [`RenderNode`](crate::RenderNode)
/// or [`RenderContainer`](crate::RenderContainer) in the same
/// [`RenderOutput`](crate::RenderOutput).
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct RenderEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub class: String,
    pub is_aggregate: bool,
    pub bends: Vec<(f64, f64)>,
}
