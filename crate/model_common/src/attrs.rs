use serde::{Deserialize, Serialize};

use crate::Map;

/// A scalar-or-string value carried in an entity's opaque attribute bag.
///
/// Per the "dynamic properties" re-architecture note (§9), entities in the
/// source system carry arbitrary extra fields. Known fields become typed
/// columns on [`Node`](crate), [`Edge`](crate), and [`Container`](crate);
/// everything else lands here, untouched by the engine and copied through
/// verbatim to the render bridge.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum AttrValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        AttrValue::Number(value)
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_string())
    }
}

/// Opaque, bounded bag of attributes attached to a node, edge, or container.
///
/// `Attrs` is never interpreted by the collapse/expand engine; it exists
/// purely so that host-supplied extra fields survive a round trip through
/// the state store to the render bridge.
pub type Attrs = Map<String, AttrValue>;
