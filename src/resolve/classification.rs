//! OncoKB classification tables.
//!
//! Two closed label sets, each mapped to a short category tag used for
//! styling. The tables are disjoint on purpose: "Neutral" is looked up in
//! whichever table the caller picked, never in both.
//!
//! Labels are matched ignoring ASCII case and surrounding whitespace. Labels
//! outside the known set parse to `Other` and fall into the `unknown`
//! category, the same bucket as an explicit "Unknown" call.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// OncoKB oncogenicity call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Oncogenicity {
    Oncogenic,
    LikelyOncogenic,
    PredictedOncogenic,
    Neutral,
    LikelyNeutral,
    Inconclusive,
    /// Variant of unknown significance
    Vus,
    Unknown,
    /// Any label outside the known set
    Other,
}

/// Category tag for an oncogenicity call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OncogenicityClass {
    Oncogenic,
    Neutral,
    Inconclusive,
    Vus,
    Unknown,
}

impl Oncogenicity {
    /// Convert to the OncoKB string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Oncogenic => "Oncogenic",
            Self::LikelyOncogenic => "Likely Oncogenic",
            Self::PredictedOncogenic => "Predicted Oncogenic",
            Self::Neutral => "Neutral",
            Self::LikelyNeutral => "Likely Neutral",
            Self::Inconclusive => "Inconclusive",
            Self::Vus => "vus",
            Self::Unknown => "Unknown",
            Self::Other => "other",
        }
    }

    /// Category used for styling.
    pub fn class(&self) -> OncogenicityClass {
        match self {
            Self::Oncogenic | Self::LikelyOncogenic | Self::PredictedOncogenic => {
                OncogenicityClass::Oncogenic
            }
            Self::Neutral | Self::LikelyNeutral => OncogenicityClass::Neutral,
            Self::Inconclusive => OncogenicityClass::Inconclusive,
            Self::Vus => OncogenicityClass::Vus,
            Self::Unknown | Self::Other => OncogenicityClass::Unknown,
        }
    }
}

impl OncogenicityClass {
    /// Short category tag (e.g. "oncogenic").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Oncogenic => "oncogenic",
            Self::Neutral => "neutral",
            Self::Inconclusive => "inconclusive",
            Self::Vus => "vus",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Oncogenicity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Oncogenicity {
    /// Look up a label, ignoring case and surrounding whitespace.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "oncogenic" => Self::Oncogenic,
            "likely oncogenic" => Self::LikelyOncogenic,
            "predicted oncogenic" => Self::PredictedOncogenic,
            "neutral" => Self::Neutral,
            "likely neutral" => Self::LikelyNeutral,
            "inconclusive" => Self::Inconclusive,
            "vus" => Self::Vus,
            "unknown" => Self::Unknown,
            _ => Self::Other,
        }
    }
}

impl FromStr for Oncogenicity {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_label(s))
    }
}

/// OncoKB mutation-effect call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MutationEffect {
    GainOfFunction,
    LikelyGainOfFunction,
    LossOfFunction,
    LikelyLossOfFunction,
    SwitchOfFunction,
    LikelySwitchOfFunction,
    Neutral,
    LikelyNeutral,
    Inconclusive,
    Unknown,
    /// Any label outside the known set
    Other,
}

/// Category tag for a mutation-effect call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MutationEffectClass {
    Gain,
    Loss,
    Switch,
    Neutral,
    Inconclusive,
    Unknown,
}

impl MutationEffect {
    /// Convert to the OncoKB string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GainOfFunction => "Gain-of-function",
            Self::LikelyGainOfFunction => "Likely Gain-of-function",
            Self::LossOfFunction => "Loss-of-function",
            Self::LikelyLossOfFunction => "Likely Loss-of-function",
            Self::SwitchOfFunction => "Switch-of-function",
            Self::LikelySwitchOfFunction => "Likely Switch-of-function",
            Self::Neutral => "Neutral",
            Self::LikelyNeutral => "Likely Neutral",
            Self::Inconclusive => "Inconclusive",
            Self::Unknown => "Unknown",
            Self::Other => "other",
        }
    }

    /// Category used for styling.
    pub fn class(&self) -> MutationEffectClass {
        match self {
            Self::GainOfFunction | Self::LikelyGainOfFunction => MutationEffectClass::Gain,
            Self::LossOfFunction | Self::LikelyLossOfFunction => MutationEffectClass::Loss,
            Self::SwitchOfFunction | Self::LikelySwitchOfFunction => MutationEffectClass::Switch,
            Self::Neutral | Self::LikelyNeutral => MutationEffectClass::Neutral,
            Self::Inconclusive => MutationEffectClass::Inconclusive,
            Self::Unknown | Self::Other => MutationEffectClass::Unknown,
        }
    }
}

impl MutationEffectClass {
    /// Short category tag (e.g. "loss").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gain => "gain",
            Self::Loss => "loss",
            Self::Switch => "switch",
            Self::Neutral => "neutral",
            Self::Inconclusive => "inconclusive",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for MutationEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl MutationEffect {
    /// Look up a label, ignoring case and surrounding whitespace.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "gain-of-function" => Self::GainOfFunction,
            "likely gain-of-function" => Self::LikelyGainOfFunction,
            "loss-of-function" => Self::LossOfFunction,
            "likely loss-of-function" => Self::LikelyLossOfFunction,
            "switch-of-function" => Self::SwitchOfFunction,
            "likely switch-of-function" => Self::LikelySwitchOfFunction,
            "neutral" => Self::Neutral,
            "likely neutral" => Self::LikelyNeutral,
            "inconclusive" => Self::Inconclusive,
            "unknown" => Self::Unknown,
            _ => Self::Other,
        }
    }
}

impl FromStr for MutationEffect {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_label(s))
    }
}

/// Category tag for an oncogenicity label.
pub fn oncogenicity_class(label: &str) -> &'static str {
    Oncogenicity::from_label(label).class().as_str()
}

/// Category tag for a mutation-effect label.
pub fn mutation_effect_class(label: &str) -> &'static str {
    MutationEffect::from_label(label).class().as_str()
}
