//! Insertion-ordered map used throughout the state and engine crates.
//!
//! Deterministic ordering matters for the engine: the order in which crossing
//! edges are grouped, and the order in which hyper-edges are reported, must
//! be stable across runs so that snapshot-style tests (and the layout bridge,
//! which is specified to be stateless across calls) see the same input every
//! time for the same sequence of mutations.

pub use indexmap::IndexMap as Map;
