/// Flow direction for a layered layout pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LayoutDirection {
    #[default]
    TopDown,
    LeftRight,
    BottomUp,
    RightLeft,
}

/// Closed set of layout algorithms a [`LayoutEngine`](crate::LayoutEngine)
/// may be asked to run (§4.6: `{layered, tree, radial, force}`).
/// [`TaffyLayoutEngine`](crate::TaffyLayoutEngine) only implements
/// `Layered`; the other variants are accepted so that alternative engines
/// can be swapped in behind the same configuration type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LayoutAlgorithm {
    #[default]
    Layered,
    Tree,
    Radial,
    ForceDirected,
}

/// How edges should be routed between their endpoints' final positions.
/// Routing itself happens downstream, in the render bridge (C7); this is
/// carried through layout configuration because spacing choices here affect
/// how much room a router has to work with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EdgeRouting {
    Straight,
    #[default]
    Orthogonal,
    Curved,
}

/// Parameters a [`LayoutEngine`](crate::LayoutEngine) implementation must
/// honor (§4.6).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutConfig {
    pub direction: LayoutDirection,
    pub algorithm: LayoutAlgorithm,
    pub node_spacing: f64,
    pub layer_spacing: f64,
    pub edge_routing: EdgeRouting,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            direction: LayoutDirection::default(),
            algorithm: LayoutAlgorithm::default(),
            node_spacing: 24.0,
            layer_spacing: 48.0,
            edge_routing: EdgeRouting::default(),
        }
    }
}
