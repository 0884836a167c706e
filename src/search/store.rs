//! Observable search state.

use crate::annotation::AnnotationRecord;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use tokio::sync::watch;

/// Notice shown under the search box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    /// The input is not a well-formed variant identifier
    Invalid,
    /// The annotation service had nothing for a well-formed identifier
    NoResult,
}

impl AlertKind {
    /// User-facing message.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Invalid => "Invalid variant format",
            Self::NoResult => "No annotation found",
        }
    }
}

impl fmt::Display for AlertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Everything the sidebar renders.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchState {
    /// Current search box text
    pub input_text: String,
    pub alert: Option<AlertKind>,
    /// Identifier of the record on display
    pub current_variant: Option<String>,
    /// Record on display, replaced wholesale by each successful search
    pub annotation: Option<Arc<AnnotationRecord>>,
    /// Searches submitted and not yet answered
    pub in_flight: usize,
}

impl SearchState {
    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    pub fn alert_message(&self) -> Option<&'static str> {
        self.alert.map(|alert| alert.message())
    }
}

/// State container that notifies subscribers on every change.
#[derive(Debug)]
pub struct SearchStore {
    sender: watch::Sender<SearchState>,
}

impl SearchStore {
    pub fn new() -> Self {
        Self::with_state(SearchState::default())
    }

    pub fn with_state(state: SearchState) -> Self {
        let (sender, _) = watch::channel(state);
        Self { sender }
    }

    /// Mutate the state and notify subscribers.
    pub fn update<F>(&self, mutate: F)
    where
        F: FnOnce(&mut SearchState),
    {
        self.sender.send_modify(mutate);
    }

    /// Receiver that sees every subsequent change.
    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.sender.subscribe()
    }

    /// Clone of the current state.
    pub fn snapshot(&self) -> SearchState {
        self.sender.borrow().clone()
    }
}

impl Default for SearchStore {
    fn default() -> Self {
        Self::new()
    }
}
