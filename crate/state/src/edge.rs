use serde::{Deserialize, Serialize};
use vizcore_model_common::{Attrs, EdgeId, Style};

use crate::EntityId;

/// A regular, user-authored edge.
///
/// An edge becomes hidden when one of its endpoints is swallowed by a
/// collapsing ancestor container (§4.5.2 step 5); it is restored to
/// `hidden = false` by `expand` when both endpoints are individually visible
/// again (§4.5.3 step 3).
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Edge {
    pub id: EdgeId,
    pub source: EntityId,
    pub target: EntityId,
    pub style: Style,
    pub hidden: bool,
    pub attrs: Attrs,
    /// Bend points supplied by the layout bridge (C6), if any.
    pub bends: Option<Vec<(f64, f64)>>,
}

impl Edge {
    pub fn new(id: EdgeId, props: EdgeProps) -> Self {
        Edge {
            id,
            source: props.source,
            target: props.target,
            style: props.style.unwrap_or_default(),
            hidden: props.hidden.unwrap_or(false),
            attrs: props.attrs.unwrap_or_default(),
            bends: None,
        }
    }

    pub fn apply_patch(&mut self, patch: EdgePatch) {
        if let Some(source) = patch.source {
            self.source = source;
        }
        if let Some(target) = patch.target {
            self.target = target;
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

    /// Returns whether this edge's endpoints are the same entity.
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

/// Required and optional fields accepted by `upsert_edge`.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct EdgeProps {
    pub source: EntityId,
    pub target: EntityId,
    pub style: Option<Style>,
    pub hidden: Option<bool>,
    pub attrs: Option<Attrs>,
}

impl EdgeProps {
    pub fn new(source: impl Into<EntityId>, target: impl Into<EntityId>) -> Self {
        EdgeProps {
            source: source.into(),
            target: target.into(),
            style: None,
            hidden: None,
            attrs: None,
        }
    }
}

/// Partial update accepted by `update_edge`; `None` fields are left alone.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct EdgePatch {
    pub source: Option<EntityId>,
    pub target: Option<EntityId>,
    pub style: Option<Style>,
    pub hidden: Option<bool>,
    pub attrs: Option<Attrs>,
}
