use serde::{Deserialize, Serialize};
use vizcore_model_common::{Attrs, ContainerId, EdgeId, Map, Set};

use crate::{hyper_edge::AggregatedEdge, EntityId, Layout};

/// A named set of child ids that can be collapsed into a single visible
/// vertex.
///
/// A container owns the *identity* of its direct children only; the
/// children themselves are still owned by the entity store (C1). The
/// `children` set is a membership relation maintained by the hierarchy index
/// (C2), mirrored here for convenient read access.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Container {
    pub id: ContainerId,
    pub label: String,
    pub collapsed: bool,
    pub hidden: bool,
    pub children: Set<EntityId>,
    pub expanded_dimensions: (f64, f64),
    pub attrs: Attrs,
    pub layout: Option<Layout>,
    /// Bookkeeping for B3: crossing edges skipped during collapse because
    /// their external endpoint's lowest visible ancestor was this very
    /// container (a would-be self-loop, forbidden by I4). Drained and
    /// re-processed by `expand` so these edges are restored rather than
    /// lost. Not part of the public data model -- only the collapse/expand
    /// engine reads or writes it.
    pub(crate) self_loop_edges: Map<EdgeId, AggregatedEdge>,
}

impl Container {
    pub fn new(id: ContainerId, props: ContainerProps) -> Self {
        Container {
            id,
            label: props.label,
            collapsed: false,
            hidden: props.hidden.unwrap_or(false),
            children: Set::new(),
            expanded_dimensions: props.expanded_dimensions.unwrap_or((0.0, 0.0)),
            attrs: props.attrs.unwrap_or_default(),
            layout: None,
            self_loop_edges: Map::new(),
        }
    }

    pub fn apply_patch(&mut self, patch: ContainerPatch) {
        if let Some(label) = patch.label {
            self.label = label;
        }
        if let Some(hidden) = patch.hidden {
            self.hidden = hidden;
        }
        if let Some(expanded_dimensions) = patch.expanded_dimensions {
            self.expanded_dimensions = expanded_dimensions;
        }
        if let Some(attrs) = patch.attrs {
            self.attrs = attrs;
        }
    }
}

/// Required and optional fields accepted by `upsert_container`.
///
/// `children` is accepted here for convenience (e.g. when loading a whole
/// diagram at once); each id is individually passed through
/// [`HierarchyIndex::add_child`](crate::HierarchyIndex::add_child) so the
/// usual cycle/already-parented validation still applies.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ContainerProps {
    pub label: String,
    pub hidden: Option<bool>,
    pub expanded_dimensions: Option<(f64, f64)>,
    pub children: Vec<EntityId>,
    pub attrs: Option<Attrs>,
}

impl ContainerProps {
    pub fn new(label: impl Into<String>) -> Self {
        ContainerProps {
            label: label.into(),
            ..Default::default()
        }
    }
}

/// Partial update accepted by `update_container`; `None` fields are left
/// alone. Does not affect membership -- use `add_child`/`remove_child` for
/// that.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ContainerPatch {
    pub label: Option<String>,
    pub hidden: Option<bool>,
    pub expanded_dimensions: Option<(f64, f64)>,
    pub attrs: Option<Attrs>,
}
