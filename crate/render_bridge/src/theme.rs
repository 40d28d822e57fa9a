use vizcore_model_common::{Map, Style};

/// Maps each [`Style`] to the class name a consumer should attach to the
/// rendered element. Kept as a table rather than a `match` so a caller can
/// swap in an alternate theme without recompiling.
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    classes: Map<Style, String>,
}

impl Theme {
    pub fn class_for(&self, style: Style) -> &str {
        self.classes
            .get(&style)
            .map(String::as_str)
            .unwrap_or("viz-style-default")
    }

    pub fn with_class(mut self, style: Style, class: impl Into<String>) -> Self {
        self.classes.insert(style, class.into());
        self
    }
}

impl Default for Theme {
    fn default() -> Self {
        let mut classes = Map::new();
        classes.insert(Style::Default, "viz-style-default".to_string());
        classes.insert(Style::Highlighted, "viz-style-highlighted".to_string());
        classes.insert(Style::Thick, "viz-style-thick".to_string());
        classes.insert(Style::Warning, "viz-style-warning".to_string());
        classes.insert(Style::Error, "viz-style-error".to_string());
        Theme { classes }
    }
}
