//! Navigation to the variant page.

use std::sync::{Arc, Mutex};

/// Route of the page showing one variant.
pub fn variant_path(variant: &str) -> String {
    format!("/variant/{}", variant)
}

/// Something that can switch the current view.
pub trait Navigator: Send + Sync {
    /// Push a route.
    fn navigate(&self, path: &str);
}

impl<T: Navigator + ?Sized> Navigator for Arc<T> {
    fn navigate(&self, path: &str) {
        (**self).navigate(path)
    }
}

/// In-memory navigation history.
#[derive(Debug, Default)]
pub struct History {
    entries: Mutex<Vec<String>>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Routes pushed so far, oldest first.
    pub fn entries(&self) -> Vec<String> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }

    /// Most recent route.
    pub fn current(&self) -> Option<String> {
        self.entries
            .lock()
            .ok()
            .and_then(|entries| entries.last().cloned())
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Navigator for History {
    fn navigate(&self, path: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(path.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history() {
        let history = History::new();
        assert!(history.is_empty());
        assert_eq!(history.current(), None);

        history.navigate(&variant_path("7:g.140453136A>T"));
        history.navigate(&variant_path("1:g.100A>G"));
        assert_eq!(history.len(), 2);
        assert_eq!(history.current().as_deref(), Some("/variant/1:g.100A>G"));
        assert_eq!(history.entries()[0], "/variant/7:g.140453136A>T");
    }
}
