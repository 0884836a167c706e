//! Performance benchmarks for ferro-nexus
//!
//! Run with: cargo bench
//! Run specific benchmark: cargo bench -- validation

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ferro_nexus::annotation::{
    AnnotationRecord, CrossReference, OncokbAnnotation, PopulationFrequency,
};
use ferro_nexus::{format_frequency, validate, AnnotationView};

// =============================================================================
// Validation benchmarks
// =============================================================================

/// Benchmark validation for each edit kind; runs on every keystroke
fn bench_validation(c: &mut Criterion) {
    let variants = vec![
        ("sub", "7:g.140453136A>T"),
        ("del", "13:g.32914438del"),
        ("del_range", "13:g.32914438_32914441delTTTA"),
        ("ins", "17:g.41242962_41242963insGA"),
        ("delins", "1:g.65325832_65325833delinsTT"),
        ("dup", "X:g.153296777dupA"),
        ("chr_prefix", "chr12:g.25398284C>T"),
        ("invalid_prefix", "17:c.100A>G"),
        ("invalid_gene", "BRCA1"),
        ("partial", "17:g.4124"),
    ];

    let mut group = c.benchmark_group("validation");

    for (name, variant) in &variants {
        group.bench_with_input(BenchmarkId::new("type", name), variant, |b, v| {
            b.iter(|| validate(black_box(v)))
        });
    }

    group.finish();
}

/// Benchmark validating a variant as it is typed, one prefix per keystroke
fn bench_keystrokes(c: &mut Criterion) {
    let variant = "17:g.41242962_41242963insGA";
    let prefixes: Vec<&str> = (1..=variant.len()).map(|i| &variant[..i]).collect();

    let mut group = c.benchmark_group("keystrokes");
    group.throughput(Throughput::Elements(prefixes.len() as u64));
    group.bench_function("type_example", |b| {
        b.iter(|| {
            for prefix in &prefixes {
                let _ = validate(black_box(prefix));
            }
        })
    });
    group.finish();
}

// =============================================================================
// Resolution benchmarks
// =============================================================================

fn full_record() -> AnnotationRecord {
    AnnotationRecord::new("17:g.41242962_41242963insGA")
        .with_population_frequency(
            PopulationFrequency::with_frequency(1.3e-5).with_vcf("17", 41242962, "A", "AGA"),
        )
        .with_cross_reference(CrossReference::new("rs80357906"))
        .with_oncokb(
            OncokbAnnotation::new()
                .with_oncogenicity("Likely Oncogenic")
                .with_mutation_effect("Likely Loss-of-function")
                .with_query("BRCA1", "Q1756Pfs*74"),
        )
}

/// Benchmark resolving the variant page fields
fn bench_resolution(c: &mut Criterion) {
    let full = full_record();
    let empty = AnnotationRecord::new("17:g.41242962_41242963insGA");

    let mut group = c.benchmark_group("resolution");
    group.bench_function("full_record", |b| {
        b.iter(|| AnnotationView::resolve(black_box(Some(&full))))
    });
    group.bench_function("empty_record", |b| {
        b.iter(|| AnnotationView::resolve(black_box(Some(&empty))))
    });
    group.bench_function("no_record", |b| {
        b.iter(|| AnnotationView::resolve(black_box(None)))
    });
    group.finish();
}

/// Benchmark allele frequency formatting across magnitudes
fn bench_format_frequency(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_frequency");
    for frequency in [0.0, 0.25, 0.00012, 1.3e-5] {
        group.bench_with_input(
            BenchmarkId::from_parameter(frequency),
            &frequency,
            |b, &f| b.iter(|| format_frequency(black_box(f))),
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_validation,
    bench_keystrokes,
    bench_resolution,
    bench_format_frequency,
);
criterion_main!(benches);
