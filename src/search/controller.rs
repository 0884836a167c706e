//! Sidebar search logic.

use std::sync::Arc;

use super::navigator::{variant_path, Navigator};
use super::search_box::SearchBoxEvent;
use super::store::{AlertKind, SearchStore};
use crate::annotation::AnnotationRecord;
use crate::client::AnnotationSource;
use crate::variant::validate;

/// Result of one submission.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// The record was fetched and the view switched to it
    Found(Arc<AnnotationRecord>),
    /// The input failed validation; nothing was fetched
    Invalid,
    /// The annotation source rejected the request
    NoResult { reason: String },
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Alert raised by this outcome.
    pub fn alert(&self) -> Option<AlertKind> {
        match self {
            Self::Found(_) => None,
            Self::Invalid => Some(AlertKind::Invalid),
            Self::NoResult { .. } => Some(AlertKind::NoResult),
        }
    }
}

/// Validates submissions, fetches annotations and switches the view.
///
/// Failures never escape: they become the store's `alert`. A failed search
/// leaves the record on display untouched.
pub struct SearchController<S, N> {
    source: S,
    navigator: N,
    store: SearchStore,
}

impl<S, N> SearchController<S, N>
where
    S: AnnotationSource,
    N: Navigator,
{
    pub fn new(source: S, navigator: N) -> Self {
        Self::with_store(source, navigator, SearchStore::new())
    }

    pub fn with_store(source: S, navigator: N, store: SearchStore) -> Self {
        Self {
            source,
            navigator,
            store,
        }
    }

    pub fn store(&self) -> &SearchStore {
        &self.store
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Record the search box text.
    pub fn on_text_change(&self, text: &str) {
        self.store.update(|state| state.input_text = text.to_string());
    }

    /// Dismiss the alert.
    pub fn close_alert(&self) {
        self.store.update(|state| state.alert = None);
    }

    /// React to a search box event. Returns the outcome for submissions.
    pub async fn handle(&self, event: SearchBoxEvent) -> Option<SearchOutcome> {
        match event {
            SearchBoxEvent::Changed(text) => {
                self.on_text_change(&text);
                None
            }
            SearchBoxEvent::Submit => Some(self.on_search().await),
        }
    }

    /// Set the text and submit it.
    pub async fn search(&self, text: &str) -> SearchOutcome {
        self.on_text_change(text);
        self.on_search().await
    }

    /// Submit the current text.
    ///
    /// Invalid input raises the `Invalid` alert without fetching. Valid input
    /// is fetched exactly once, by its normalized identifier: a `chr` prefix or
    /// lowercase bases are rewritten (`chr7:g.1a>t` becomes `7:g.1A>T`) before
    /// the request and the navigation.
    pub async fn on_search(&self) -> SearchOutcome {
        let input = self.store.snapshot().input_text;
        let Some(variant) = validate(&input).normalized else {
            tracing::debug!(%input, "rejecting malformed variant");
            self.store
                .update(|state| state.alert = Some(AlertKind::Invalid));
            return SearchOutcome::Invalid;
        };

        self.store.update(|state| state.in_flight += 1);
        tracing::debug!(%variant, source = self.source.source_name(), "fetching annotation");

        match self.source.fetch_annotation(&variant).await {
            Ok(record) => {
                let record = Arc::new(record);
                self.store.update(|state| {
                    state.in_flight = state.in_flight.saturating_sub(1);
                    state.alert = None;
                    state.current_variant = Some(variant.clone());
                    state.annotation = Some(Arc::clone(&record));
                });

                let path = variant_path(&variant);
                tracing::info!(%path, "navigating");
                self.navigator.navigate(&path);
                SearchOutcome::Found(record)
            }
            Err(e) => {
                tracing::warn!(%variant, error = %e, "annotation fetch rejected");
                self.store.update(|state| {
                    state.in_flight = state.in_flight.saturating_sub(1);
                    state.alert = Some(AlertKind::NoResult);
                });
                SearchOutcome::NoResult {
                    reason: e.to_string(),
                }
            }
        }
    }
}
