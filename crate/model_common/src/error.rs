use miette::Diagnostic;
use thiserror::Error;

use crate::IdInvalidFmt;

/// Error taxonomy for the visualization state core (§7).
///
/// `InvariantViolation` is the one kind that is not a normal, expected
/// outcome of a caller's mistake: it indicates a bug in the engine itself,
/// and is surfaced through the orchestrator's error channel rather than a
/// plain `Result` in host code that otherwise expects to recover.
#[derive(Clone, Debug, Diagnostic, Error, PartialEq)]
pub enum VizError {
    /// A required field was missing, an id was malformed, or a style value
    /// did not match the closed enumeration.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The requested operation does not make sense in the entity's current
    /// state (e.g. expanding a container that is not collapsed).
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// `add_child` would have introduced a cycle in the hierarchy.
    #[error("hierarchy cycle: `{child}` is an ancestor of `{parent}`")]
    HierarchyCycle { parent: String, child: String },

    /// `add_child` was called for a child that already has a different
    /// parent.
    #[error("`{child}` is already parented to `{existing_parent}`")]
    AlreadyParented {
        child: String,
        existing_parent: String,
    },

    /// An engine step finished in a state that violates one of the core
    /// invariants (§3). This is a programmer bug, never an expected
    /// outcome of caller input; the engine rolls back before returning it.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),

    /// The external layout engine returned an error or output that failed
    /// shape validation.
    #[error("layout failed: {0}")]
    LayoutFailure(String),
}

impl From<IdInvalidFmt> for VizError {
    fn from(err: IdInvalidFmt) -> Self {
        VizError::InvalidInput(err.to_string())
    }
}

/// Convenience alias for results in the vizcore crates.
pub type VizResult<T> = Result<T, VizError>;
