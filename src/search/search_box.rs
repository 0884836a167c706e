//! Search box input handling.

use super::navigator::variant_path;
use crate::variant::EXAMPLE_VARIANT;

/// Default placeholder text.
pub const DEFAULT_PLACEHOLDER: &str = "Search variant";

/// Something the search box reports to its owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchBoxEvent {
    /// The text changed
    Changed(String),
    /// The user asked to search
    Submit,
}

/// A single-line text input that submits on Enter.
#[derive(Debug, Clone)]
pub struct SearchBox {
    text: String,
}

impl SearchBox {
    pub fn new() -> Self {
        Self {
            text: String::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn placeholder(&self) -> &'static str {
        DEFAULT_PLACEHOLDER
    }

    /// Replace the text.
    pub fn set_text(&mut self, text: impl Into<String>) -> SearchBoxEvent {
        self.text = text.into();
        SearchBoxEvent::Changed(self.text.clone())
    }

    /// Handle a key press; only Enter submits.
    pub fn key_press(&self, key: &str) -> Option<SearchBoxEvent> {
        (key == "Enter").then_some(SearchBoxEvent::Submit)
    }

    /// Example identifier shown under the box.
    pub fn example(&self) -> &'static str {
        EXAMPLE_VARIANT
    }

    /// Route the example links to.
    pub fn example_path(&self) -> String {
        variant_path(self.example())
    }
}

impl Default for SearchBox {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let search_box = SearchBox::new();
        assert_eq!(search_box.placeholder(), "Search variant");
        assert_eq!(search_box.text(), "");
        assert_eq!(search_box.example(), "17:g.41242962_41242963insGA");
        assert_eq!(
            search_box.example_path(),
            "/variant/17:g.41242962_41242963insGA"
        );
    }

    #[test]
    fn test_events() {
        let mut search_box = SearchBox::new();
        assert_eq!(
            search_box.set_text("7:g.1A>G"),
            SearchBoxEvent::Changed("7:g.1A>G".to_string())
        );
        assert_eq!(search_box.key_press("Enter"), Some(SearchBoxEvent::Submit));
        assert_eq!(search_box.key_press("a"), None);
        assert_eq!(search_box.key_press("enter"), None);
    }
}
