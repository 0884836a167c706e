//! Variant identifier validation
//!
//! The search box only sends identifiers to the annotation service when they
//! are well-formed genomic variants, so that a malformed query shows an
//! "invalid format" notice instead of a "not found" one.
//!
//! # Example
//!
//! ```
//! use ferro_nexus::variant::validate;
//!
//! let result = validate(" chr17:g.41242962_41242963insga ");
//! assert!(result.is_valid);
//! assert_eq!(result.normalized.as_deref(), Some("17:g.41242962_41242963insGA"));
//!
//! assert!(!validate("BRCA1").is_valid);
//! ```

mod chromosome;
pub mod parser;

pub use chromosome::{Chromosome, UnknownChromosome};
pub use parser::{parse_genomic_variant, EXAMPLE_VARIANT};

use serde::{Deserialize, Serialize};
use std::fmt;

/// The edit of a genomic variant
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GenomicEdit {
    /// Single-base substitution (e.g., A>G)
    Substitution { reference: char, alternative: char },
    /// Deletion, optionally stating the deleted bases (e.g., del, delAT)
    Deletion { sequence: Option<String> },
    /// Insertion between two adjacent positions (e.g., insGA)
    Insertion { sequence: String },
    /// Deletion-insertion (e.g., delinsTT, delAinsTT)
    Delins {
        deleted: Option<String>,
        inserted: String,
    },
    /// Duplication, optionally stating the duplicated bases (e.g., dup, dupA)
    Duplication { sequence: Option<String> },
}

impl fmt::Display for GenomicEdit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Substitution {
                reference,
                alternative,
            } => write!(f, "{}>{}", reference, alternative),
            Self::Deletion { sequence } => write!(f, "del{}", sequence.as_deref().unwrap_or("")),
            Self::Insertion { sequence } => write!(f, "ins{}", sequence),
            Self::Delins { deleted, inserted } => {
                write!(f, "del{}ins{}", deleted.as_deref().unwrap_or(""), inserted)
            }
            Self::Duplication { sequence } => {
                write!(f, "dup{}", sequence.as_deref().unwrap_or(""))
            }
        }
    }
}

/// A parsed genomic variant identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GenomicVariant {
    pub chromosome: Chromosome,
    /// 1-based start position
    pub start: u64,
    /// 1-based inclusive end position, for ranges
    pub end: Option<u64>,
    pub edit: GenomicEdit,
}

impl fmt::Display for GenomicVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:g.{}", self.chromosome, self.start)?;
        if let Some(end) = self.end {
            write!(f, "_{}", end)?;
        }
        write!(f, "{}", self.edit)
    }
}

/// Outcome of validating user input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    /// Canonical spelling of the identifier, present exactly when valid
    pub normalized: Option<String>,
}

impl ValidationResult {
    fn valid(normalized: String) -> Self {
        Self {
            is_valid: true,
            normalized: Some(normalized),
        }
    }

    fn invalid() -> Self {
        Self {
            is_valid: false,
            normalized: None,
        }
    }
}

/// Validate a variant identifier.
///
/// Pure and deterministic; suitable for re-running on every keystroke.
pub fn validate(input: &str) -> ValidationResult {
    match parse_genomic_variant(input) {
        Ok(variant) => ValidationResult::valid(variant.to_string()),
        Err(_) => ValidationResult::invalid(),
    }
}

/// Shorthand for `validate(input).is_valid`.
pub fn is_variant_valid(input: &str) -> bool {
    parse_genomic_variant(input).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_valid() {
        let result = validate("7:g.140453136A>T");
        assert!(result.is_valid);
        assert_eq!(result.normalized.as_deref(), Some("7:g.140453136A>T"));
    }

    #[test]
    fn test_validate_invalid_has_no_normalized_form() {
        let result = validate("7:g.140453136");
        assert_eq!(result, ValidationResult::invalid());
    }

    #[test]
    fn test_normalization() {
        assert_eq!(
            validate("chrx:g.100dupa").normalized.as_deref(),
            Some("X:g.100dupA")
        );
        assert_eq!(
            validate("chrM:g.3243A>G").normalized.as_deref(),
            Some("MT:g.3243A>G")
        );
        assert_eq!(
            validate("1:g.65325832_65325833delAGinsTT")
                .normalized
                .as_deref(),
            Some("1:g.65325832_65325833delAGinsTT")
        );
    }

    #[test]
    fn test_is_variant_valid() {
        assert!(is_variant_valid(EXAMPLE_VARIANT));
        assert!(!is_variant_valid(""));
        assert!(!is_variant_valid("g.100A>G"));
    }
}
