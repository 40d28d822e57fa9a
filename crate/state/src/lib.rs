//! Visualization State Core (C1-C5): the mutable graph model underlying a
//! `vizcore` diagram, plus the collapse/expand engine that is the only code
//! permitted to create or destroy hyper-edges.
//!
//! Merged into a single crate rather than one per component so that Rust's
//! module privacy can enforce that restriction -- `EntityStore`'s
//! hyper-edge-mutating methods are `pub(crate)`, reachable only from
//! `engine`.

mod container;
mod edge;
mod edge_ref;
mod engine;
mod entity_id;
mod hierarchy;
mod hyper_edge;
mod incidence;
mod layout;
mod node;
mod state;
mod store;
mod visibility;

pub use container::{Container, ContainerPatch, ContainerProps};
pub use edge::{Edge, EdgePatch, EdgeProps};
pub use edge_ref::EdgeRef;
pub use entity_id::EntityId;
pub use hierarchy::{Descendants, HierarchyIndex};
pub use hyper_edge::{AggregatedEdge, HyperEdge};
pub use incidence::EdgeIncidenceIndex;
pub use layout::Layout;
pub use node::{Node, NodePatch, NodeProps};
pub use state::VisualizationState;
pub use store::EntityStore;
pub use visibility::VisibilityCache;
