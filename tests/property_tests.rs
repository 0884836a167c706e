//! Property-based tests for variant validation and annotation resolution
//!
//! Generated identifiers cover every chromosome spelling and edit kind; the
//! resolver is driven with arbitrary, partially populated records.

use ferro_nexus::annotation::{
    AnnotationRecord, CrossReference, OncokbAnnotation, PopulationFrequency,
};
use ferro_nexus::resolve::{AnnotationFamily, AnnotationView, NOT_AVAILABLE};
use ferro_nexus::{parse_genomic_variant, validate};
use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;

// =============================================================================
// Base strategies
// =============================================================================

/// Chromosome names as a user might type them
fn chromosome() -> impl Strategy<Value = String> {
    let name = prop_oneof![
        (1u8..=22).prop_map(|n| n.to_string()),
        Just("X".to_string()),
        Just("Y".to_string()),
        Just("x".to_string()),
        Just("M".to_string()),
        Just("MT".to_string()),
        Just("23".to_string()),
        Just("24".to_string()),
    ];
    let prefix = prop_oneof![Just(""), Just("chr"), Just("Chr"), Just("CHR")];
    (prefix, name).prop_map(|(p, n)| format!("{}{}", p, n))
}

/// Generate valid nucleotide bases, either case
fn nucleotide() -> impl Strategy<Value = char> {
    prop_oneof![
        Just('A'),
        Just('C'),
        Just('G'),
        Just('T'),
        Just('N'),
        Just('a'),
        Just('c'),
        Just('g'),
        Just('t'),
    ]
}

fn sequence() -> impl Strategy<Value = String> {
    prop::collection::vec(nucleotide(), 1..12).prop_map(|v| v.into_iter().collect())
}

fn position() -> impl Strategy<Value = u64> {
    1..250_000_000u64
}

/// `START[_END]EDIT` with the range shape each edit allows
fn located_edit() -> impl Strategy<Value = String> {
    prop_oneof![
        (position(), nucleotide(), nucleotide())
            .prop_filter("alternate differs from reference", |(_, r, a)| {
                !r.eq_ignore_ascii_case(a)
            })
            .prop_map(|(pos, r, a)| format!("{}{}>{}", pos, r, a)),
        (position(), 0..100u64, prop::option::of(sequence())).prop_map(|(pos, len, seq)| {
            let range = if len == 0 {
                pos.to_string()
            } else {
                format!("{}_{}", pos, pos + len)
            };
            format!("{}del{}", range, seq.unwrap_or_default())
        }),
        (position(), sequence()).prop_map(|(pos, seq)| format!("{}_{}ins{}", pos, pos + 1, seq)),
        (position(), 0..100u64, prop::option::of(sequence()), sequence()).prop_map(
            |(pos, len, deleted, inserted)| {
                let range = if len == 0 {
                    pos.to_string()
                } else {
                    format!("{}_{}", pos, pos + len)
                };
                format!("{}del{}ins{}", range, deleted.unwrap_or_default(), inserted)
            }
        ),
        (position(), prop::option::of(sequence()))
            .prop_map(|(pos, seq)| format!("{}dup{}", pos, seq.unwrap_or_default())),
    ]
}

fn genomic_variant() -> impl Strategy<Value = String> {
    (chromosome(), located_edit()).prop_map(|(c, e)| format!("{}:g.{}", c, e))
}

fn label() -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop_oneof![
        Just(String::new()),
        Just("Oncogenic".to_string()),
        Just("Likely Neutral".to_string()),
        Just("Loss-of-function".to_string()),
        "[A-Za-z -]{1,20}",
    ])
}

fn record() -> impl Strategy<Value = Option<AnnotationRecord>> {
    let frequency = prop::option::of((
        any::<bool>(),
        prop::option::of(0.0..1.0f64),
        prop::option::of("[0-9XY]{1,2}"),
        prop::option::of(1..1_000_000u64),
    ));
    prop::option::of((frequency, label(), label(), label(), label())).prop_map(|fields| {
        fields.map(|(frequency, rsid, oncogenic, effect, hugo)| {
            let mut record = AnnotationRecord::new("1:g.1A>G");
            if let Some((available, af, chromosome, position)) = frequency {
                record.population_frequency = Some(PopulationFrequency {
                    allele_frequency_available: available,
                    allele_frequency: af,
                    chromosome,
                    position,
                    reference_allele: Some("A".to_string()),
                    alternate_allele: Some("G".to_string()),
                });
            }
            if rsid.is_some() {
                record.database_cross_reference = Some(CrossReference { id: rsid });
            }
            let mut oncokb = OncokbAnnotation::new();
            if let Some(label) = oncogenic {
                oncokb = oncokb.with_oncogenicity(label);
            }
            if let Some(label) = effect {
                oncokb = oncokb.with_mutation_effect(label);
            }
            if let Some(hugo) = hugo {
                oncokb = oncokb.with_query(hugo, "V600E");
            }
            record.oncokb = Some(oncokb);
            record
        })
    })
}

// =============================================================================
// Validator properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn prop_generated_variants_are_valid(input in genomic_variant()) {
        let result = validate(&input);
        prop_assert!(result.is_valid, "rejected {}", input);
        prop_assert!(result.normalized.is_some());
    }

    #[test]
    fn prop_normalization_is_idempotent(input in genomic_variant()) {
        let normalized = validate(&input).normalized.unwrap();
        prop_assert_eq!(validate(&normalized).normalized, Some(normalized.clone()));
        prop_assert_eq!(parse_genomic_variant(&normalized).unwrap().to_string(), normalized);
    }

    #[test]
    fn prop_surrounding_whitespace_is_ignored(
        input in genomic_variant(),
        lead in "[ \t]{0,3}",
        trail in "[ \t\n]{0,3}",
    ) {
        let padded = format!("{}{}{}", lead, input, trail);
        prop_assert_eq!(validate(&padded), validate(&input));
    }

    #[test]
    fn prop_interior_whitespace_is_rejected(input in genomic_variant(), at in any::<prop::sample::Index>()) {
        let split = 1 + at.index(input.len() - 1);
        let broken = format!("{} {}", &input[..split], &input[split..]);
        prop_assert!(!validate(&broken).is_valid, "accepted {:?}", broken);
    }

    #[test]
    fn prop_validate_is_deterministic(input in ".{0,40}") {
        let first = validate(&input);
        let second = validate(&input);
        prop_assert_eq!(first.is_valid, first.normalized.is_some());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_missing_chromosome_is_rejected(edit in located_edit()) {
        let input = format!(":g.{}", edit);
        prop_assert!(!validate(&input).is_valid);
    }
}

// =============================================================================
// Resolver properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn prop_resolution_is_total(record in record()) {
        let view = AnnotationView::resolve(record.as_ref());
        for (family, field) in view.fields() {
            prop_assert!(!field.display_value.is_empty());
            prop_assert!(field.reference_url.starts_with(family.generic_url().trim_end_matches('/')));
        }
    }

    #[test]
    fn prop_oncokb_class_follows_label(record in record()) {
        for family in [AnnotationFamily::Oncogenicity, AnnotationFamily::MutationEffect] {
            let field = family.resolve(record.as_ref());
            let label = match family {
                AnnotationFamily::Oncogenicity => record.as_ref().and_then(|r| r.oncogenicity_label()),
                _ => record.as_ref().and_then(|r| r.mutation_effect_label()),
            };
            match label {
                Some(label) => {
                    prop_assert_eq!(field.display_value.as_str(), label);
                    prop_assert!(field.category_class.is_some());
                }
                None => {
                    prop_assert_eq!(field.display_value.as_str(), NOT_AVAILABLE);
                    prop_assert_eq!(field.category_class, None);
                }
            }
        }
    }

    #[test]
    fn prop_absent_record_matches_empty_record(variant in genomic_variant()) {
        let empty = AnnotationRecord::new(variant);
        prop_assert_eq!(AnnotationView::resolve(Some(&empty)), AnnotationView::resolve(None));
    }
}
