//! Layout Bridge (C6): translates the visible graph into a concrete layout
//! engine's input, runs it, and writes the resulting positions back onto a
//! [`VisualizationState`](vizcore_state::VisualizationState).
//!
//! The actual layout algorithm is treated as a black box (§4.6): this crate
//! only owns the shape of the request and the translation at each end, behind
//! the [`LayoutEngine`] trait. [`TaffyLayoutEngine`] is the default,
//! `taffy`-backed implementation.

pub use config::{EdgeRouting, LayoutAlgorithm, LayoutConfig, LayoutDirection};
pub use engine::LayoutEngine;
pub use node_context::NodeContext;
pub use taffy_engine::TaffyLayoutEngine;

mod config;
mod engine;
mod node_context;
mod taffy_engine;
