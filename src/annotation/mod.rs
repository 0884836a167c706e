//! Variant annotation records.
//!
//! An [`AnnotationRecord`] aggregates what the annotation service knows about
//! one variant: gnomAD population frequency, the dbSNP cross-reference, and
//! the OncoKB oncogenicity and mutation-effect calls. Every sub-record is
//! optional and independently so; the resolvers in [`crate::resolve`] turn
//! missing data into `"N/A"`.
//!
//! # Example
//!
//! ```
//! use ferro_nexus::annotation::{AnnotationRecord, CrossReference, OncokbAnnotation};
//!
//! let record = AnnotationRecord::new("17:g.41242962_41242963insGA")
//!     .with_cross_reference(CrossReference::new("rs80357906"))
//!     .with_oncokb(OncokbAnnotation::new().with_oncogenicity("Likely Oncogenic"));
//!
//! assert_eq!(record.rsid(), Some("rs80357906"));
//! assert!(record.population_frequency.is_none());
//! ```

pub mod genome_nexus;

use serde::{Deserialize, Serialize};

/// Return the string if it is present and non-empty.
pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// gnomAD population frequency for a variant.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PopulationFrequency {
    /// Whether gnomAD has any exome or genome data for the variant.
    pub allele_frequency_available: bool,
    /// Overall allele frequency across exomes and genomes.
    pub allele_frequency: Option<f64>,
    /// Chromosome name without prefix (e.g. "17").
    pub chromosome: Option<String>,
    /// 1-based VCF position.
    pub position: Option<u64>,
    /// VCF reference allele.
    pub reference_allele: Option<String>,
    /// VCF alternate allele.
    pub alternate_allele: Option<String>,
}

impl PopulationFrequency {
    /// Create a record with an available allele frequency.
    pub fn with_frequency(allele_frequency: f64) -> Self {
        Self {
            allele_frequency_available: true,
            allele_frequency: Some(allele_frequency),
            ..Default::default()
        }
    }

    /// Set the VCF-style coordinates used for the gnomAD link.
    pub fn with_vcf(
        mut self,
        chromosome: impl Into<String>,
        position: u64,
        reference_allele: impl Into<String>,
        alternate_allele: impl Into<String>,
    ) -> Self {
        self.chromosome = Some(chromosome.into());
        self.position = Some(position);
        self.reference_allele = Some(reference_allele.into());
        self.alternate_allele = Some(alternate_allele.into());
        self
    }
}

/// dbSNP cross-reference.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CrossReference {
    /// dbSNP reference SNP identifier (e.g. "rs80357906").
    pub id: Option<String>,
}

impl CrossReference {
    /// Create a cross-reference with an identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
        }
    }
}

/// OncoKB oncogenicity call.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OncogenicityCall {
    /// Label as reported by OncoKB (e.g. "Likely Oncogenic").
    pub label: Option<String>,
}

/// OncoKB mutation-effect call.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MutationEffectCall {
    /// Known effect as reported by OncoKB (e.g. "Loss-of-function").
    pub label: Option<String>,
}

/// The gene and alteration OncoKB resolved the variant to.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OncokbQuery {
    pub hugo_symbol: Option<String>,
    pub alteration: Option<String>,
}

/// OncoKB annotation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OncokbAnnotation {
    pub oncogenicity: Option<OncogenicityCall>,
    pub mutation_effect: Option<MutationEffectCall>,
    pub query: Option<OncokbQuery>,
}

impl OncokbAnnotation {
    /// Create an empty OncoKB annotation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the oncogenicity label.
    pub fn with_oncogenicity(mut self, label: impl Into<String>) -> Self {
        self.oncogenicity = Some(OncogenicityCall {
            label: Some(label.into()),
        });
        self
    }

    /// Set the mutation-effect label.
    pub fn with_mutation_effect(mut self, label: impl Into<String>) -> Self {
        self.mutation_effect = Some(MutationEffectCall {
            label: Some(label.into()),
        });
        self
    }

    /// Set the gene symbol and alteration.
    pub fn with_query(
        mut self,
        hugo_symbol: impl Into<String>,
        alteration: impl Into<String>,
    ) -> Self {
        self.query = Some(OncokbQuery {
            hugo_symbol: Some(hugo_symbol.into()),
            alteration: Some(alteration.into()),
        });
        self
    }
}

/// Everything known about one variant.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotationRecord {
    /// The identifier this record was fetched for.
    pub variant: String,
    pub population_frequency: Option<PopulationFrequency>,
    pub database_cross_reference: Option<CrossReference>,
    pub oncokb: Option<OncokbAnnotation>,
}

impl AnnotationRecord {
    /// Create a record with no annotation data.
    pub fn new(variant: impl Into<String>) -> Self {
        Self {
            variant: variant.into(),
            ..Default::default()
        }
    }

    /// Set the population frequency.
    pub fn with_population_frequency(mut self, frequency: PopulationFrequency) -> Self {
        self.population_frequency = Some(frequency);
        self
    }

    /// Set the dbSNP cross-reference.
    pub fn with_cross_reference(mut self, xref: CrossReference) -> Self {
        self.database_cross_reference = Some(xref);
        self
    }

    /// Set the OncoKB annotation.
    pub fn with_oncokb(mut self, oncokb: OncokbAnnotation) -> Self {
        self.oncokb = Some(oncokb);
        self
    }

    /// dbSNP rsID, if present and non-empty.
    pub fn rsid(&self) -> Option<&str> {
        self.database_cross_reference
            .as_ref()
            .and_then(|x| non_empty(&x.id))
    }

    /// OncoKB oncogenicity label, if present and non-empty.
    pub fn oncogenicity_label(&self) -> Option<&str> {
        self.oncokb
            .as_ref()
            .and_then(|o| o.oncogenicity.as_ref())
            .and_then(|c| non_empty(&c.label))
    }

    /// OncoKB mutation-effect label, if present and non-empty.
    pub fn mutation_effect_label(&self) -> Option<&str> {
        self.oncokb
            .as_ref()
            .and_then(|o| o.mutation_effect.as_ref())
            .and_then(|c| non_empty(&c.label))
    }

    /// Whether no sub-record carries any data.
    pub fn is_empty(&self) -> bool {
        self.population_frequency.is_none()
            && self.database_cross_reference.is_none()
            && self.oncokb.is_none()
    }
}
