//! Interactive visualization engine core for hierarchical, collapsible
//! dataflow graphs.
//!
//! This crate re-exports the pieces built up across `vizcore`'s workspace
//! members so a consumer can depend on a single crate:
//!
//! - [`vizcore_model_common`]: shared ids, attributes, styles, and errors.
//! - [`vizcore_state`]: the mutable graph model (identity, hierarchy,
//!   incidence, visibility) and the collapse/expand engine.
//! - [`vizcore_layout_bridge`]: the [`LayoutEngine`] contract and its
//!   `taffy`-backed implementation.
//! - [`vizcore_render_bridge`]: flattening visible state into themed,
//!   self-contained render output.
//! - [`vizcore_orchestrator`]: driving layout and render passes through a
//!   debounced, single-flight state machine.

pub use vizcore_model_common::{
    AttrValue, Attrs, ContainerId, EdgeId, HyperEdgeId, Id, IdInvalidFmt, Map, NodeId, Set, Style,
    VizError, VizResult,
};
pub use vizcore_state::{
    AggregatedEdge, Container, ContainerPatch, ContainerProps, Descendants, Edge, EdgeIncidenceIndex,
    EdgePatch, EdgeProps, EdgeRef, EntityId, EntityStore, HierarchyIndex, HyperEdge, Layout, Node,
    NodePatch, NodeProps, VisibilityCache, VisualizationState,
};
pub use vizcore_layout_bridge::{
    EdgeRouting, LayoutAlgorithm, LayoutConfig, LayoutDirection, LayoutEngine, NodeContext,
    TaffyLayoutEngine,
};
pub use vizcore_render_bridge::{RenderContainer, RenderEdge, RenderNode, RenderOutput, Theme};
pub use vizcore_orchestrator::{EngineOrchestrator, EngineState};
