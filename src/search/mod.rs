//! Search workflow
//!
//! A [`SearchBox`] reports text changes and Enter presses. The
//! [`SearchController`] validates a submission, fetches its annotation once
//! from an [`AnnotationSource`](crate::client::AnnotationSource), publishes
//! the result in the [`SearchStore`] and asks the [`Navigator`] to show the
//! variant page.
//!
//! # Example
//!
//! ```
//! use ferro_nexus::client::MockAnnotationSource;
//! use ferro_nexus::search::{AlertKind, History, SearchController};
//!
//! # tokio_test_block(async {
//! let controller = SearchController::new(MockAnnotationSource::with_test_data(), History::new());
//!
//! controller.search("not a variant").await;
//! assert_eq!(controller.store().snapshot().alert, Some(AlertKind::Invalid));
//!
//! controller.search("17:g.41242962_41242963insGA").await;
//! assert_eq!(
//!     controller.navigator().current().as_deref(),
//!     Some("/variant/17:g.41242962_41242963insGA")
//! );
//! # });
//! # fn tokio_test_block<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap().block_on(f)
//! # }
//! ```

mod controller;
mod navigator;
mod search_box;
mod store;

pub use controller::{SearchController, SearchOutcome};
pub use navigator::{variant_path, History, Navigator};
pub use search_box::{SearchBox, SearchBoxEvent, DEFAULT_PLACEHOLDER};
pub use store::{AlertKind, SearchState, SearchStore};
