use serde::{Deserialize, Serialize};
use vizcore_model_common::{ContainerId, NodeId};

/// Flattened, render-ready view of a visible [`Node`](vizcore_state::Node).
///
/// `x`/`y` are relative to `parent`'s own position (or absolute, if
/// `parent` is `None`) -- see [`RenderOutput::absolute_position`] to invert
/// the translation (L3).
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct RenderNode {
    pub id: NodeId,
    pub label: String,
    pub class: String,
    pub parent: Option<ContainerId>,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}
