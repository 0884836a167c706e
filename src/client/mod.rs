//! Annotation sources
//!
//! The search workflow fetches annotations through the [`AnnotationSource`]
//! trait. [`GenomeNexusClient`] queries a Genome Nexus instance over HTTP;
//! [`MockAnnotationSource`] serves in-memory records for tests and offline
//! use.

#[cfg(feature = "genome-nexus")]
pub mod genome_nexus;
pub mod mock;

#[cfg(feature = "genome-nexus")]
pub use genome_nexus::GenomeNexusClient;
pub use mock::MockAnnotationSource;

use crate::annotation::AnnotationRecord;
use crate::error::NexusError;
use std::sync::Arc;

/// A service that annotates variant identifiers.
#[async_trait::async_trait]
pub trait AnnotationSource: Send + Sync {
    /// Fetch the annotation record for a validated identifier.
    ///
    /// Any failure to produce a usable record is reported as
    /// [`NexusError::NoResult`].
    async fn fetch_annotation(&self, variant: &str) -> Result<AnnotationRecord, NexusError>;

    /// Name used in logs.
    fn source_name(&self) -> &'static str;
}

#[async_trait::async_trait]
impl<T: AnnotationSource + ?Sized> AnnotationSource for Arc<T> {
    async fn fetch_annotation(&self, variant: &str) -> Result<AnnotationRecord, NexusError> {
        (**self).fetch_annotation(variant).await
    }

    fn source_name(&self) -> &'static str {
        (**self).source_name()
    }
}
