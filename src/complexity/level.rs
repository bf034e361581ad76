//! The closed set of complexity labels and their badge tones.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Big-O classification produced by the estimator.
///
/// Variants are declared in growth order, so the derived `Ord` sorts
/// `Constant` first and `Unknown` last. Use [`ComplexityLevel::growth_rank`]
/// when `Unknown` must not compare against the other classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ComplexityLevel {
    #[serde(rename = "O(1)")]
    Constant,
    #[serde(rename = "O(log n)", alias = "O(logn)")]
    Logarithmic,
    #[serde(rename = "O(n)")]
    Linear,
    #[serde(rename = "O(n log n)", alias = "O(nlogn)")]
    Linearithmic,
    #[serde(rename = "O(n²)", alias = "O(n^2)")]
    Quadratic,
    #[serde(rename = "O(2ⁿ)", alias = "O(2^n)")]
    Exponential,
    #[serde(rename = "Unknown", alias = "unknown")]
    Unknown,
}

/// Badge color for a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Green,
    Blue,
    Yellow,
    Orange,
    Red,
    Purple,
    Gray,
}

impl ComplexityLevel {
    /// Every label, in growth order with `Unknown` last.
    pub const ALL: [ComplexityLevel; 7] = [
        ComplexityLevel::Constant,
        ComplexityLevel::Logarithmic,
        ComplexityLevel::Linear,
        ComplexityLevel::Linearithmic,
        ComplexityLevel::Quadratic,
        ComplexityLevel::Exponential,
        ComplexityLevel::Unknown,
    ];

    pub const fn label(&self) -> &'static str {
        match self {
            ComplexityLevel::Constant => "O(1)",
            ComplexityLevel::Logarithmic => "O(log n)",
            ComplexityLevel::Linear => "O(n)",
            ComplexityLevel::Linearithmic => "O(n log n)",
            ComplexityLevel::Quadratic => "O(n²)",
            ComplexityLevel::Exponential => "O(2ⁿ)",
            ComplexityLevel::Unknown => "Unknown",
        }
    }

    /// Position in the growth ordering, `None` for `Unknown`.
    pub const fn growth_rank(&self) -> Option<u8> {
        match self {
            ComplexityLevel::Constant => Some(0),
            ComplexityLevel::Logarithmic => Some(1),
            ComplexityLevel::Linear => Some(2),
            ComplexityLevel::Linearithmic => Some(3),
            ComplexityLevel::Quadratic => Some(4),
            ComplexityLevel::Exponential => Some(5),
            ComplexityLevel::Unknown => None,
        }
    }

    /// True when both labels are ranked and `self` grows faster than `other`.
    pub fn exceeds(&self, other: ComplexityLevel) -> bool {
        match (self.growth_rank(), other.growth_rank()) {
            (Some(a), Some(b)) => a > b,
            _ => false,
        }
    }

    pub const fn tone(&self) -> Tone {
        match self {
            ComplexityLevel::Constant => Tone::Green,
            ComplexityLevel::Logarithmic => Tone::Blue,
            ComplexityLevel::Linear => Tone::Yellow,
            ComplexityLevel::Linearithmic => Tone::Orange,
            ComplexityLevel::Quadratic => Tone::Red,
            ComplexityLevel::Exponential => Tone::Purple,
            ComplexityLevel::Unknown => Tone::Gray,
        }
    }
}

impl fmt::Display for ComplexityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized complexity label '{0}'")]
pub struct ParseLevelError(pub String);

impl FromStr for ComplexityLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();

        let level = match compact.as_str() {
            "o(1)" => ComplexityLevel::Constant,
            "o(logn)" => ComplexityLevel::Logarithmic,
            "o(n)" => ComplexityLevel::Linear,
            "o(nlogn)" => ComplexityLevel::Linearithmic,
            "o(n²)" | "o(n^2)" => ComplexityLevel::Quadratic,
            "o(2ⁿ)" | "o(2^n)" => ComplexityLevel::Exponential,
            "unknown" => ComplexityLevel::Unknown,
            _ => return Err(ParseLevelError(s.to_string())),
        };
        Ok(level)
    }
}
