//! Common types shared between the `vizcore` state, engine, and bridge crates.

pub use self::{
    attrs::{AttrValue, Attrs},
    error::{VizError, VizResult},
    id::{ContainerId, EdgeId, HyperEdgeId, Id, IdInvalidFmt, NodeId},
    map::Map,
    set::Set,
    style::Style,
};

mod attrs;
mod error;
mod id;
mod map;
mod set;
mod style;
