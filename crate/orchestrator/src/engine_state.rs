/// States an [`EngineOrchestrator`](crate::EngineOrchestrator) moves
/// through, per §4.7:
///
/// ```text
/// Idle -> LayingOut -> Rendering -> Ready -> (Dirty -> LayingOut ...)
///                                         \-> Error
/// ```
///
/// A mutation observed while `Ready` (or `Idle`, once a first pass has run)
/// moves to `Dirty`; a mutation observed while `LayingOut` or `Rendering`
/// is absorbed without changing state, since that in-flight pass will pick
/// up the new revision once the caller next calls `run` (single-flight).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineState {
    Idle,
    Dirty,
    LayingOut,
    Rendering,
    Ready,
    Error,
}

impl EngineState {
    /// Whether a pass is currently running, and therefore `run` must be
    /// refused (single-flight).
    pub fn is_in_flight(self) -> bool {
        matches!(self, EngineState::LayingOut | EngineState::Rendering)
    }
}
