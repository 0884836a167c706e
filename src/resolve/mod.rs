//! Annotation field resolution
//!
//! Turns an optional, partially populated [`AnnotationRecord`] into
//! render-ready values: a display string, a link into the source knowledge
//! base, and (for OncoKB calls) a category tag for styling.
//!
//! Resolution never fails. Missing records, missing sub-records and empty
//! labels all display as [`NOT_AVAILABLE`], and a link that cannot be built
//! from the record falls back to the knowledge base's landing page. The
//! display value and the link are resolved independently, so a record can
//! show a value next to a generic link and vice versa.
//!
//! # Example
//!
//! ```
//! use ferro_nexus::annotation::{AnnotationRecord, OncokbAnnotation};
//! use ferro_nexus::resolve::{AnnotationFamily, AnnotationView};
//!
//! let record = AnnotationRecord::new("7:g.140453136A>T").with_oncokb(
//!     OncokbAnnotation::new()
//!         .with_oncogenicity("Oncogenic")
//!         .with_query("BRAF", "V600E"),
//! );
//!
//! let view = AnnotationView::resolve(Some(&record));
//! assert_eq!(view.oncogenicity.display_value, "Oncogenic");
//! assert_eq!(view.oncogenicity.category_class, Some("oncogenic"));
//! assert_eq!(view.oncogenicity.reference_url, "https://oncokb.org/gene/BRAF/V600E");
//! assert_eq!(view.mutation_effect.display_value, "N/A");
//!
//! let missing = AnnotationFamily::DatabaseCrossReference.resolve(None);
//! assert_eq!(missing.reference_url, "https://www.ncbi.nlm.nih.gov/snp/");
//! ```

pub mod classification;
pub mod links;

pub use classification::{
    mutation_effect_class, oncogenicity_class, MutationEffect, MutationEffectClass, Oncogenicity,
    OncogenicityClass,
};
pub use links::{DBSNP_URL, GNOMAD_URL, ONCOKB_URL};

use crate::annotation::{non_empty, AnnotationRecord, OncokbQuery, PopulationFrequency};
use serde::Serialize;
use std::fmt;

/// Display value for missing data.
pub const NOT_AVAILABLE: &str = "N/A";

/// One render-ready annotation value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedField {
    pub display_value: String,
    pub reference_url: String,
    /// Category tag, present only for OncoKB calls with a label
    pub category_class: Option<&'static str>,
}

impl ResolvedField {
    fn new(display_value: impl Into<String>, reference_url: impl Into<String>) -> Self {
        Self {
            display_value: display_value.into(),
            reference_url: reference_url.into(),
            category_class: None,
        }
    }

    fn with_class(mut self, class: &'static str) -> Self {
        self.category_class = Some(class);
        self
    }

    /// Whether the display value is the `"N/A"` fallback.
    pub fn is_not_available(&self) -> bool {
        self.display_value == NOT_AVAILABLE
    }
}

/// The four annotation families shown on the variant page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AnnotationFamily {
    PopulationFrequency,
    DatabaseCrossReference,
    Oncogenicity,
    MutationEffect,
}

impl AnnotationFamily {
    /// All families in page order.
    pub const ALL: [AnnotationFamily; 4] = [
        Self::PopulationFrequency,
        Self::DatabaseCrossReference,
        Self::Oncogenicity,
        Self::MutationEffect,
    ];

    /// Resolve this family's field from an optional record.
    pub fn resolve(self, record: Option<&AnnotationRecord>) -> ResolvedField {
        match self {
            Self::PopulationFrequency => resolve_population_frequency(record),
            Self::DatabaseCrossReference => resolve_cross_reference(record),
            Self::Oncogenicity => resolve_oncogenicity(record),
            Self::MutationEffect => resolve_mutation_effect(record),
        }
    }

    /// Landing page used when no specific link can be built.
    pub fn generic_url(self) -> &'static str {
        match self {
            Self::PopulationFrequency => GNOMAD_URL,
            Self::DatabaseCrossReference => DBSNP_URL,
            Self::Oncogenicity | Self::MutationEffect => ONCOKB_URL,
        }
    }

    /// Knowledge base the value comes from.
    pub fn source_name(self) -> &'static str {
        match self {
            Self::PopulationFrequency => "gnomAD",
            Self::DatabaseCrossReference => "dbSNP",
            Self::Oncogenicity | Self::MutationEffect => "OncoKB",
        }
    }

    /// Field label on the variant page.
    pub fn label(self) -> &'static str {
        match self {
            Self::PopulationFrequency => "Population frequency",
            Self::DatabaseCrossReference => "dbSNP",
            Self::Oncogenicity => "Oncogenicity",
            Self::MutationEffect => "Mutation effect",
        }
    }

    /// Description of the knowledge base.
    pub fn tooltip(self) -> &'static str {
        match self {
            Self::PopulationFrequency => {
                "gnomAD population allele frequencies. Overall population allele frequency is \
                 shown. Hover over a frequency to see the frequency for each specific population."
            }
            Self::DatabaseCrossReference => {
                "The Single Nucleotide Polymorphism Database (dbSNP) is a free public archive \
                 for genetic variation within and across different species."
            }
            Self::Oncogenicity | Self::MutationEffect => {
                "OncoKB is a precision oncology knowledge base and contains information about \
                 the effects and treatment implications of specific cancer gene alterations."
            }
        }
    }
}

impl fmt::Display for AnnotationFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// All four fields of the variant page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotationView {
    pub population_frequency: ResolvedField,
    pub database_cross_reference: ResolvedField,
    pub oncogenicity: ResolvedField,
    pub mutation_effect: ResolvedField,
}

impl AnnotationView {
    /// Resolve every family from an optional record.
    pub fn resolve(record: Option<&AnnotationRecord>) -> Self {
        Self {
            population_frequency: resolve_population_frequency(record),
            database_cross_reference: resolve_cross_reference(record),
            oncogenicity: resolve_oncogenicity(record),
            mutation_effect: resolve_mutation_effect(record),
        }
    }

    /// Field of one family.
    pub fn get(&self, family: AnnotationFamily) -> &ResolvedField {
        match family {
            AnnotationFamily::PopulationFrequency => &self.population_frequency,
            AnnotationFamily::DatabaseCrossReference => &self.database_cross_reference,
            AnnotationFamily::Oncogenicity => &self.oncogenicity,
            AnnotationFamily::MutationEffect => &self.mutation_effect,
        }
    }

    /// Families paired with their fields, in page order.
    pub fn fields(&self) -> impl Iterator<Item = (AnnotationFamily, &ResolvedField)> {
        AnnotationFamily::ALL
            .into_iter()
            .map(move |family| (family, self.get(family)))
    }
}

/// gnomAD overall allele frequency.
pub fn resolve_population_frequency(record: Option<&AnnotationRecord>) -> ResolvedField {
    let frequency = record.and_then(|r| r.population_frequency.as_ref());

    let display = frequency
        .filter(|f| f.allele_frequency_available)
        .and_then(|f| f.allele_frequency)
        .filter(|af| af.is_finite() && *af >= 0.0)
        .map(format_frequency);
    let url = frequency.and_then(gnomad_url);

    ResolvedField::new(
        display.unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        url.unwrap_or_else(|| GNOMAD_URL.to_string()),
    )
}

fn gnomad_url(frequency: &PopulationFrequency) -> Option<String> {
    Some(links::gnomad_variant_url(
        non_empty(&frequency.chromosome)?,
        frequency.position?,
        non_empty(&frequency.reference_allele)?,
        non_empty(&frequency.alternate_allele)?,
    ))
}

/// dbSNP rsID.
pub fn resolve_cross_reference(record: Option<&AnnotationRecord>) -> ResolvedField {
    match record.and_then(AnnotationRecord::rsid) {
        Some(rsid) => ResolvedField::new(rsid, links::dbsnp_variant_url(rsid)),
        None => ResolvedField::new(NOT_AVAILABLE, DBSNP_URL),
    }
}

/// OncoKB oncogenicity call.
pub fn resolve_oncogenicity(record: Option<&AnnotationRecord>) -> ResolvedField {
    let url = oncokb_url(record);
    match record.and_then(AnnotationRecord::oncogenicity_label) {
        Some(label) => ResolvedField::new(label, url).with_class(oncogenicity_class(label)),
        None => ResolvedField::new(NOT_AVAILABLE, url),
    }
}

/// OncoKB mutation-effect call.
pub fn resolve_mutation_effect(record: Option<&AnnotationRecord>) -> ResolvedField {
    let url = oncokb_url(record);
    match record.and_then(AnnotationRecord::mutation_effect_label) {
        Some(label) => ResolvedField::new(label, url).with_class(mutation_effect_class(label)),
        None => ResolvedField::new(NOT_AVAILABLE, url),
    }
}

fn oncokb_url(record: Option<&AnnotationRecord>) -> String {
    record
        .and_then(|r| r.oncokb.as_ref())
        .and_then(|o| o.query.as_ref())
        .and_then(|q: &OncokbQuery| {
            Some(links::oncokb_alteration_url(
                non_empty(&q.hugo_symbol)?,
                non_empty(&q.alteration)?,
            ))
        })
        .unwrap_or_else(|| ONCOKB_URL.to_string())
}

/// Format an allele frequency for display.
///
/// Zero renders as `0`. Frequencies from `1e-4` upward keep four significant
/// digits with trailing zeros dropped; smaller ones use scientific notation
/// with one decimal (`1.2e-5`). The notation is chosen after rounding to two
/// significant digits, so a value that rounds up to `1e-4` reads `0.0001`.
pub fn format_frequency(frequency: f64) -> String {
    if frequency == 0.0 {
        return "0".to_string();
    }
    let scientific = format!("{:.1e}", frequency);
    let rounded: f64 = scientific.parse().unwrap_or(frequency);
    if rounded.abs() < 1e-4 {
        return scientific;
    }

    let magnitude = frequency.abs().log10().floor() as i32;
    let decimals = (3 - magnitude).max(0) as usize;
    let fixed = format!("{:.*}", decimals, frequency);
    if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        fixed
    }
}
