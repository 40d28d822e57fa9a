use serde::{Deserialize, Serialize};
use vizcore_model_common::{Attrs, NodeId, Style};

use crate::Layout;

/// A leaf vertex in the graph.
///
/// A node owns its own attributes only; it does not own its incident edges
/// (those are tracked separately by the edge incidence index, C3).
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Node {
    pub id: NodeId,
    pub label: String,
    pub style: Style,
    pub hidden: bool,
    pub attrs: Attrs,
    /// Position written back by the layout bridge (C6); `None` until the
    /// first successful layout pass.
    pub layout: Option<Layout>,
}

impl Node {
    pub fn new(id: NodeId, props: NodeProps) -> Self {
        Node {
            id,
            label: props.label,
            style: props.style.unwrap_or_default(),
            hidden: props.hidden.unwrap_or(false),
            attrs: props.attrs.unwrap_or_default(),
            layout: None,
        }
    }

    pub fn apply_patch(&mut self, patch: NodePatch) {
        if let Some(label) = patch.label {
            self.label = label;
        }
        if let Some(style) = patch.style {
            self.style = style;
        }
        if let Some(hidden) = patch.hidden {
            self.hidden = hidden;
        }
        if let Some(attrs) = patch.attrs {
            self.attrs = attrs;
        }
    }
}

/// Required and optional fields accepted by `upsert_node`.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct NodeProps {
    pub label: String,
    pub style: Option<Style>,
    pub hidden: Option<bool>,
    pub attrs: Option<Attrs>,
}

impl NodeProps {
    pub fn new(label: impl Into<String>) -> Self {
        NodeProps {
            label: label.into(),
            ..Default::default()
        }
    }
}

/// Partial update accepted by `update_node`; `None` fields are left alone.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct NodePatch {
    pub label: Option<String>,
    pub style: Option<Style>,
    pub hidden: Option<bool>,
    pub attrs: Option<Attrs>,
}
