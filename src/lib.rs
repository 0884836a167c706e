// Copyright (c) 2024-2025 Fulcrum Genomics LLC
// SPDX-License-Identifier: MIT

//! ferro-nexus: variant search and annotation rendering for Genome Nexus
//!
//! Part of the ferro bioinformatics toolkit.
//!
//! # Example
//!
//! ```
//! use ferro_nexus::annotation::{AnnotationRecord, PopulationFrequency};
//! use ferro_nexus::{validate, AnnotationView};
//!
//! // Check a search box entry
//! let result = validate("17:g.41242962_41242963insGA");
//! assert!(result.is_valid);
//!
//! // Resolve what the variant page shows
//! let record = AnnotationRecord::new("17:g.41242962_41242963insGA").with_population_frequency(
//!     PopulationFrequency::with_frequency(0.25).with_vcf("17", 41242962, "A", "AGA"),
//! );
//! let view = AnnotationView::resolve(Some(&record));
//! assert_eq!(view.population_frequency.display_value, "0.25");
//! assert_eq!(view.database_cross_reference.display_value, "N/A");
//! ```

pub mod annotation;
pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod resolve;
pub mod search;
pub mod variant;

// Re-export commonly used types
pub use annotation::AnnotationRecord;
#[cfg(feature = "genome-nexus")]
pub use client::GenomeNexusClient;
pub use client::{AnnotationSource, MockAnnotationSource};
pub use config::NexusConfig;
pub use error::NexusError;
pub use resolve::{format_frequency, AnnotationFamily, AnnotationView, ResolvedField};
pub use search::{AlertKind, History, Navigator, SearchController, SearchStore};
pub use variant::{is_variant_valid, parse_genomic_variant, validate, GenomicVariant, ValidationResult};

/// Result type alias for ferro-nexus operations
pub type Result<T> = std::result::Result<T, NexusError>;
