//! In-memory annotation source for testing

use super::AnnotationSource;
use crate::annotation::{
    AnnotationRecord, CrossReference, OncokbAnnotation, PopulationFrequency,
};
use crate::error::NexusError;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

/// Annotation source serving records from a map.
///
/// Records are keyed by the exact identifier the caller passes. Every call is
/// recorded so tests can assert how often the source was hit.
#[derive(Debug, Default)]
pub struct MockAnnotationSource {
    records: HashMap<String, AnnotationRecord>,
    /// Reject every request with this reason
    failure: Option<String>,
    delay: Option<Duration>,
    /// Per-identifier delays, taking precedence over `delay`
    delays: HashMap<String, Duration>,
    calls: Mutex<Vec<String>>,
}

impl MockAnnotationSource {
    /// Create an empty source; every lookup yields no result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a source that rejects every request.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            failure: Some(reason.into()),
            ..Self::default()
        }
    }

    /// Sleep before answering each request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Sleep before answering requests for one identifier.
    pub fn with_delay_for(mut self, variant: impl Into<String>, delay: Duration) -> Self {
        self.delays.insert(variant.into(), delay);
        self
    }

    /// Add a record, keyed by its variant identifier.
    pub fn add_record(&mut self, record: AnnotationRecord) {
        self.records.insert(record.variant.clone(), record);
    }

    /// Create a source with a few well-known variants.
    pub fn with_test_data() -> Self {
        let mut source = Self::new();

        // BRCA1 frameshift, fully annotated
        source.add_record(
            AnnotationRecord::new("17:g.41242962_41242963insGA")
                .with_population_frequency(
                    PopulationFrequency::with_frequency(4.0 / 300000.0).with_vcf(
                        "17", 41242962, "A", "AGA",
                    ),
                )
                .with_cross_reference(CrossReference::new("rs80357906"))
                .with_oncokb(
                    OncokbAnnotation::new()
                        .with_oncogenicity("Likely Oncogenic")
                        .with_mutation_effect("Likely Loss-of-function")
                        .with_query("BRCA1", "Q1756Pfs*74"),
                ),
        );

        // BRAF V600E, OncoKB only
        source.add_record(
            AnnotationRecord::new("7:g.140453136A>T").with_oncokb(
                OncokbAnnotation::new()
                    .with_oncogenicity("Oncogenic")
                    .with_mutation_effect("Gain-of-function")
                    .with_query("BRAF", "V600E"),
            ),
        );

        // Known to the service, nothing annotated
        source.add_record(AnnotationRecord::new("1:g.100A>G"));

        source
    }

    /// Identifiers requested so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    /// Number of requests so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|calls| calls.len()).unwrap_or(0)
    }
}

#[async_trait::async_trait]
impl AnnotationSource for MockAnnotationSource {
    async fn fetch_annotation(&self, variant: &str) -> Result<AnnotationRecord, NexusError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(variant.to_string());
        }

        if let Some(delay) = self.delays.get(variant).copied().or(self.delay) {
            tokio::time::sleep(delay).await;
        }

        if let Some(reason) = &self.failure {
            return Err(NexusError::no_result(variant, reason.clone()));
        }

        self.records
            .get(variant)
            .cloned()
            .ok_or_else(|| NexusError::no_result(variant, "variant not found"))
    }

    fn source_name(&self) -> &'static str {
        "mock"
    }
}
