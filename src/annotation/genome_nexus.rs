//! Genome Nexus annotation response types.
//!
//! Only the fields the viewer renders are modelled; everything else in the
//! response is ignored. Convert to an [`AnnotationRecord`] with `From`.
//!
//! # References
//!
//! - [Genome Nexus API](https://www.genomenexus.org/swagger-ui.html)

use serde::Deserialize;

use super::{
    AnnotationRecord, CrossReference, MutationEffectCall, OncogenicityCall, OncokbAnnotation,
    OncokbQuery, PopulationFrequency,
};
use crate::variant::parse_genomic_variant;

/// Response of `GET /annotation/{variant}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VariantAnnotation {
    /// The queried variant as echoed by the service
    #[serde(default)]
    pub variant: String,
    /// False when the service could not annotate the variant
    pub successfully_annotated: Option<bool>,
    /// Chromosome as reported by VEP
    pub seq_region_name: Option<String>,
    pub my_variant_info: Option<MyVariantInfoAnnotation>,
    pub oncokb: Option<OncokbWrapper>,
}

/// `my_variant_info` wrapper object
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MyVariantInfoAnnotation {
    pub annotation: Option<MyVariantInfo>,
}

/// MyVariant.info annotation
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MyVariantInfo {
    pub vcf: Option<Vcf>,
    pub dbsnp: Option<Dbsnp>,
    pub gnomad_exome: Option<Gnomad>,
    pub gnomad_genome: Option<Gnomad>,
}

/// VCF representation of the variant
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Vcf {
    pub position: Option<VcfPosition>,
    #[serde(rename = "ref")]
    pub reference: Option<String>,
    pub alt: Option<String>,
}

/// MyVariant.info reports positions as strings; accept numbers too.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum VcfPosition {
    Number(u64),
    Text(String),
}

impl VcfPosition {
    /// Numeric value, if the position parses as a positive integer.
    pub fn value(&self) -> Option<u64> {
        let value = match self {
            VcfPosition::Number(n) => Some(*n),
            VcfPosition::Text(s) => s.trim().parse().ok(),
        };
        value.filter(|&n| n > 0)
    }
}

/// dbSNP block
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Dbsnp {
    pub rsid: Option<String>,
}

/// gnomAD exome or genome block
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gnomad {
    pub allele_count: Option<AlleleCount>,
    pub allele_number: Option<AlleleNumber>,
    pub allele_frequency: Option<AlleleFrequency>,
}

/// Overall allele count
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AlleleCount {
    pub ac: Option<f64>,
}

/// Overall allele number
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AlleleNumber {
    pub an: Option<f64>,
}

/// Overall allele frequency
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AlleleFrequency {
    pub af: Option<f64>,
}

/// `oncokb` wrapper object
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OncokbWrapper {
    pub annotation: Option<IndicatorQueryResp>,
}

/// OncoKB indicator query response
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorQueryResp {
    pub oncogenic: Option<String>,
    pub mutation_effect: Option<MutationEffectResp>,
    pub query: Option<QueryResp>,
}

/// OncoKB mutation effect
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationEffectResp {
    pub known_effect: Option<String>,
}

/// OncoKB query echo
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResp {
    pub hugo_symbol: Option<String>,
    pub alteration: Option<String>,
}

impl VariantAnnotation {
    /// Whether the service flagged the variant as not annotatable.
    pub fn is_unannotated(&self) -> bool {
        self.successfully_annotated == Some(false)
    }
}

/// Combine gnomAD exome and genome counts into one overall frequency.
///
/// Uses pooled allele counts when both blocks carry them, otherwise the first
/// reported frequency.
pub fn combined_allele_frequency(exome: Option<&Gnomad>, genome: Option<&Gnomad>) -> Option<f64> {
    let blocks: Vec<&Gnomad> = exome.into_iter().chain(genome).collect();
    if blocks.is_empty() {
        return None;
    }

    let counts: Option<Vec<(f64, f64)>> = blocks
        .iter()
        .map(|g| {
            let ac = g.allele_count.as_ref()?.ac?;
            let an = g.allele_number.as_ref()?.an?;
            Some((ac, an))
        })
        .collect();

    if let Some(counts) = counts {
        let (ac, an) = counts
            .iter()
            .fold((0.0, 0.0), |(ac, an), (a, n)| (ac + a, an + n));
        if an > 0.0 {
            return Some(ac / an);
        }
    }

    blocks
        .iter()
        .find_map(|g| g.allele_frequency.as_ref().and_then(|f| f.af))
}

impl From<VariantAnnotation> for AnnotationRecord {
    fn from(response: VariantAnnotation) -> Self {
        let queried_chromosome = parse_genomic_variant(&response.variant)
            .ok()
            .map(|v| v.chromosome.to_string());
        let chromosome = response
            .seq_region_name
            .clone()
            .filter(|s| !s.is_empty())
            .or(queried_chromosome);

        let info = response.my_variant_info.and_then(|m| m.annotation);

        let population_frequency = info.as_ref().map(|info| {
            let vcf = info.vcf.clone().unwrap_or_default();
            PopulationFrequency {
                allele_frequency_available: info.gnomad_exome.is_some()
                    || info.gnomad_genome.is_some(),
                allele_frequency: combined_allele_frequency(
                    info.gnomad_exome.as_ref(),
                    info.gnomad_genome.as_ref(),
                ),
                chromosome: chromosome.clone(),
                position: vcf.position.as_ref().and_then(VcfPosition::value),
                reference_allele: vcf.reference,
                alternate_allele: vcf.alt,
            }
        });

        let database_cross_reference = info
            .as_ref()
            .and_then(|info| info.dbsnp.as_ref())
            .map(|dbsnp| CrossReference {
                id: dbsnp.rsid.clone(),
            });

        let oncokb = response
            .oncokb
            .and_then(|o| o.annotation)
            .map(|resp| OncokbAnnotation {
                oncogenicity: resp
                    .oncogenic
                    .map(|label| OncogenicityCall { label: Some(label) }),
                mutation_effect: resp.mutation_effect.map(|m| MutationEffectCall {
                    label: m.known_effect,
                }),
                query: resp.query.map(|q| OncokbQuery {
                    hugo_symbol: q.hugo_symbol,
                    alteration: q.alteration,
                }),
            });

        AnnotationRecord {
            variant: response.variant,
            population_frequency,
            database_cross_reference,
            oncokb,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BRCA1_RESPONSE: &str = r#"{
        "variant": "17:g.41242962_41242963insGA",
        "successfully_annotated": true,
        "seq_region_name": "17",
        "my_variant_info": {
            "annotation": {
                "vcf": {"position": "41242962", "ref": "A", "alt": "AGA"},
                "dbsnp": {"rsid": "rs80357906"},
                "gnomadExome": {
                    "alleleCount": {"ac": 3},
                    "alleleNumber": {"an": 250000},
                    "alleleFrequency": {"af": 0.000012}
                },
                "gnomadGenome": {
                    "alleleCount": {"ac": 1},
                    "alleleNumber": {"an": 50000},
                    "alleleFrequency": {"af": 0.00002}
                }
            }
        },
        "oncokb": {
            "annotation": {
                "oncogenic": "Likely Oncogenic",
                "mutationEffect": {"knownEffect": "Likely Loss-of-function"},
                "query": {"hugoSymbol": "BRCA1", "alteration": "Q1756Pfs*74"}
            }
        }
    }"#;

    #[test]
    fn test_convert_full_response() {
        let response: VariantAnnotation = serde_json::from_str(BRCA1_RESPONSE).unwrap();
        let record = AnnotationRecord::from(response);

        assert_eq!(record.variant, "17:g.41242962_41242963insGA");
        let pf = record.population_frequency.as_ref().unwrap();
        assert!(pf.allele_frequency_available);
        let af = pf.allele_frequency.unwrap();
        assert!((af - 4.0 / 300000.0).abs() < 1e-12);
        assert_eq!(pf.chromosome.as_deref(), Some("17"));
        assert_eq!(pf.position, Some(41242962));
        assert_eq!(pf.reference_allele.as_deref(), Some("A"));
        assert_eq!(pf.alternate_allele.as_deref(), Some("AGA"));

        assert_eq!(record.rsid(), Some("rs80357906"));
        assert_eq!(record.oncogenicity_label(), Some("Likely Oncogenic"));
        assert_eq!(
            record.mutation_effect_label(),
            Some("Likely Loss-of-function")
        );
        let query = record.oncokb.as_ref().unwrap().query.as_ref().unwrap();
        assert_eq!(query.hugo_symbol.as_deref(), Some("BRCA1"));
    }

    #[test]
    fn test_convert_bare_response() {
        let response: VariantAnnotation =
            serde_json::from_str(r#"{"variant": "X:g.100del"}"#).unwrap();
        assert!(!response.is_unannotated());
        let record = AnnotationRecord::from(response);
        assert!(record.is_empty());
    }

    #[test]
    fn test_chromosome_falls_back_to_query() {
        let response: VariantAnnotation = serde_json::from_str(
            r#"{"variant": "chrX:g.100A>G", "my_variant_info": {"annotation": {"vcf": {"position": 100}}}}"#,
        )
        .unwrap();
        let record = AnnotationRecord::from(response);
        let pf = record.population_frequency.unwrap();
        assert_eq!(pf.chromosome.as_deref(), Some("X"));
        assert_eq!(pf.position, Some(100));
        assert!(!pf.allele_frequency_available);
        assert_eq!(pf.allele_frequency, None);
    }

    #[test]
    fn test_combined_frequency_without_counts() {
        let exome = Gnomad {
            allele_frequency: Some(AlleleFrequency { af: Some(0.5) }),
            ..Default::default()
        };
        assert_eq!(combined_allele_frequency(Some(&exome), None), Some(0.5));
        assert_eq!(combined_allele_frequency(None, None), None);
    }

    #[test]
    fn test_unannotated_flag() {
        let response: VariantAnnotation = serde_json::from_str(
            r#"{"variant": "17:g.1A>G", "successfully_annotated": false}"#,
        )
        .unwrap();
        assert!(response.is_unannotated());
    }

    #[test]
    fn test_vcf_position_value() {
        assert_eq!(VcfPosition::Text(" 42 ".to_string()).value(), Some(42));
        assert_eq!(VcfPosition::Text("abc".to_string()).value(), None);
        assert_eq!(VcfPosition::Number(0).value(), None);
    }
}
