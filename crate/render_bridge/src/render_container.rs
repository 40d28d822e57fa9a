use serde::{Deserialize, Serialize};
use vizcore_model_common::ContainerId;

/// Flattened, render-ready view of a visible
/// [`Container`](vizcore_state::Container). `x`/`y` are relative to
/// `parent`'s own position, like [`RenderNode`](crate::RenderNode).
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct RenderContainer {
    pub id: ContainerId,
    pub label: String,
    pub class: String,
    pub collapsed: bool,
    pub parent: Option<ContainerId>,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}
