//! Human chromosome names as accepted by the annotation service.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A human chromosome.
///
/// Parsing accepts an optional `chr` prefix, any case, `M` for the
/// mitochondrial genome, and the numeric aliases `23` (X) and `24` (Y).
/// Display always renders the canonical name without prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Chromosome {
    /// Autosome 1-22
    Autosome(u8),
    /// X chromosome
    X,
    /// Y chromosome
    Y,
    /// Mitochondrial genome
    MT,
}

impl Chromosome {
    /// Canonical name (e.g. "17", "X", "MT").
    pub fn name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Autosome(n) => write!(f, "{}", n),
            Self::X => write!(f, "X"),
            Self::Y => write!(f, "Y"),
            Self::MT => write!(f, "MT"),
        }
    }
}

/// Error returned for an unrecognized chromosome name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownChromosome(pub String);

impl fmt::Display for UnknownChromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown chromosome '{}'", self.0)
    }
}

impl std::error::Error for UnknownChromosome {}

impl FromStr for Chromosome {
    type Err = UnknownChromosome;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = match s.get(..3) {
            Some(prefix) if prefix.eq_ignore_ascii_case("chr") => &s[3..],
            _ => s,
        };

        match name.to_ascii_uppercase().as_str() {
            "X" | "23" => Ok(Self::X),
            "Y" | "24" => Ok(Self::Y),
            "M" | "MT" => Ok(Self::MT),
            digits if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) => {
                match digits.parse::<u8>() {
                    Ok(n @ 1..=22) if !digits.starts_with('0') => Ok(Self::Autosome(n)),
                    _ => Err(UnknownChromosome(s.to_string())),
                }
            }
            _ => Err(UnknownChromosome(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_autosomes() {
        assert_eq!("1".parse::<Chromosome>().unwrap(), Chromosome::Autosome(1));
        assert_eq!("17".parse::<Chromosome>().unwrap(), Chromosome::Autosome(17));
        assert_eq!("22".parse::<Chromosome>().unwrap(), Chromosome::Autosome(22));
        assert!("0".parse::<Chromosome>().is_err());
        assert!("23a".parse::<Chromosome>().is_err());
        assert!("25".parse::<Chromosome>().is_err());
        assert!("07".parse::<Chromosome>().is_err());
        assert!("300".parse::<Chromosome>().is_err());
    }

    #[test]
    fn test_parse_prefix_and_case() {
        assert_eq!(
            "chr17".parse::<Chromosome>().unwrap(),
            Chromosome::Autosome(17)
        );
        assert_eq!("CHRx".parse::<Chromosome>().unwrap(), Chromosome::X);
        assert_eq!("y".parse::<Chromosome>().unwrap(), Chromosome::Y);
        assert_eq!("chrM".parse::<Chromosome>().unwrap(), Chromosome::MT);
        assert_eq!("mt".parse::<Chromosome>().unwrap(), Chromosome::MT);
        assert!("chr".parse::<Chromosome>().is_err());
        assert!("".parse::<Chromosome>().is_err());
    }

    #[test]
    fn test_numeric_sex_chromosome_aliases() {
        assert_eq!("23".parse::<Chromosome>().unwrap(), Chromosome::X);
        assert_eq!("24".parse::<Chromosome>().unwrap(), Chromosome::Y);
    }

    #[test]
    fn test_display() {
        assert_eq!(Chromosome::Autosome(7).to_string(), "7");
        assert_eq!(Chromosome::MT.name(), "MT");
    }
}
