use vizcore_model_common::VizResult;
use vizcore_state::VisualizationState;

use crate::LayoutConfig;

/// A concrete external layout algorithm, behind a contract the rest of
/// `vizcore` can depend on without knowing its internals (§4.6).
///
/// Implementations read the currently-visible nodes, edges, and containers
/// off `state` and write `Layout` values back onto visible nodes and
/// expanded containers via [`VisualizationState::set_node_layout`] and
/// [`VisualizationState::set_container_layout`]. Those writes do not bump
/// `state`'s revision counter, so running a layout pass never itself
/// triggers another one.
pub trait LayoutEngine {
    fn compute_layout(&self, state: &mut VisualizationState, config: &LayoutConfig) -> VizResult<()>;
}
