use serde::{Deserialize, Serialize};

/// Position (and, for containers, dimensions) written back by the layout
/// bridge (C6) after a layout pass.
///
/// Cleared whenever the entity it is attached to becomes hidden by a
/// collapse, per §4.5.4: "if the layout bridge has previously written
/// positions onto a container that is about to be hidden, those positions
/// are cleared to avoid reappearing as stale layout."
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct Layout {
    pub position: (f64, f64),
    pub dimensions: Option<(f64, f64)>,
}

impl Layout {
    pub fn at(position: (f64, f64)) -> Self {
        Layout {
            position,
            dimensions: None,
        }
    }

    pub fn with_dimensions(position: (f64, f64), dimensions: (f64, f64)) -> Self {
        Layout {
            position,
            dimensions: Some(dimensions),
        }
    }
}
