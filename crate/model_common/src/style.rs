use serde::{Deserialize, Serialize};

/// Closed enumeration of the styles a node, edge, container, or hyper-edge
/// may carry.
///
/// Variants are declared in ascending priority order so that the derived
/// [`Ord`] implementation matches the aggregation precedence used when
/// collapsing a container: `error > warning > thick > highlighted > default`
/// (§4.5.2 step 4).
///
/// # Examples
///
/// ```rust
/// use vizcore_model_common::Style;
///
/// let highest = [Style::Default, Style::Warning, Style::Thick]
///     .into_iter()
///     .max()
///     .unwrap();
/// assert_eq!(highest, Style::Warning);
/// ```
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Style {
    #[default]
    Default,
    Highlighted,
    Thick,
    Warning,
    Error,
}

impl Style {
    /// Returns the higher-priority of two styles, per the aggregation
    /// precedence `error > warning > thick > highlighted > default`.
    pub fn higher_priority(self, other: Self) -> Self {
        self.max(other)
    }
}
