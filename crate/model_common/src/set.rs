//! Insertion-ordered set used throughout the state and engine crates.
//!
//! See [`Map`](crate::Map) for why insertion order is relied upon.

pub use indexmap::IndexSet as Set;
