//! # Impact Factors
//!
//! The two ordinal inputs that accompany a violation category: the scale
//! of impact and the recurrence frequency. Both carry small fixed weights
//! that feed the severity average alongside the category's base weight.

use crate::ParseInputError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordinal magnitude-of-impact category.
///
/// Lexically overlaps [`crate::SeverityBand`] but is an *input*, not the
/// classifier's output; the two are distinct types on purpose.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Scale {
    Minor,
    Moderate,
    Severe,
    Critical,
}

/// Ordinal recurrence-rate category.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    OneTime,
    Occasionally,
    Frequently,
    Ongoing,
    Unknown,
}

/// Fallback weight for a scale missing from the table.
pub const DEFAULT_SCALE_WEIGHT: u32 = 1;

/// Fallback weight for a frequency missing from the table.
pub const DEFAULT_FREQUENCY_WEIGHT: u32 = 1;

const SCALE_WEIGHTS: &[(Scale, u32)] = &[
    (Scale::Minor, 1),
    (Scale::Moderate, 2),
    (Scale::Severe, 3),
    (Scale::Critical, 4),
];

// Unknown recurrence is weighted as a moderate middle estimate, the same
// as Occasionally. Intake guidance depends on this; do not reinterpret.
const FREQUENCY_WEIGHTS: &[(Frequency, u32)] = &[
    (Frequency::OneTime, 1),
    (Frequency::Occasionally, 2),
    (Frequency::Frequently, 3),
    (Frequency::Ongoing, 4),
    (Frequency::Unknown, 2),
];

impl Scale {
    /// Every scale, in ascending order of impact.
    pub const ALL: [Self; 4] = [Self::Minor, Self::Moderate, Self::Severe, Self::Critical];

    /// Weight of this scale, falling back to [`DEFAULT_SCALE_WEIGHT`] for
    /// entries missing from the table.
    #[must_use]
    pub fn weight(self) -> u32 {
        SCALE_WEIGHTS
            .iter()
            .find(|(scale, _)| *scale == self)
            .map_or(DEFAULT_SCALE_WEIGHT, |(_, weight)| *weight)
    }

    /// The snake_case wire token, matching the serde representation.
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            Self::Minor => "minor",
            Self::Moderate => "moderate",
            Self::Severe => "severe",
            Self::Critical => "critical",
        }
    }

    /// Human-readable label for CLI and report output.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Minor => "Minor",
            Self::Moderate => "Moderate",
            Self::Severe => "Severe",
            Self::Critical => "Critical",
        }
    }
}

impl Frequency {
    /// Every frequency, declaration order; `Unknown` sorts last even
    /// though its weight ties `Occasionally`.
    pub const ALL: [Self; 5] = [
        Self::OneTime,
        Self::Occasionally,
        Self::Frequently,
        Self::Ongoing,
        Self::Unknown,
    ];

    /// Weight of this frequency, falling back to
    /// [`DEFAULT_FREQUENCY_WEIGHT`] for entries missing from the table.
    #[must_use]
    pub fn weight(self) -> u32 {
        FREQUENCY_WEIGHTS
            .iter()
            .find(|(frequency, _)| *frequency == self)
            .map_or(DEFAULT_FREQUENCY_WEIGHT, |(_, weight)| *weight)
    }

    /// The snake_case wire token, matching the serde representation.
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            Self::OneTime => "one_time",
            Self::Occasionally => "occasionally",
            Self::Frequently => "frequently",
            Self::Ongoing => "ongoing",
            Self::Unknown => "unknown",
        }
    }

    /// Human-readable label for CLI and report output.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::OneTime => "One-time",
            Self::Occasionally => "Occasionally",
            Self::Frequently => "Frequently",
            Self::Ongoing => "Ongoing",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Scale {
    type Err = ParseInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|scale| scale.token() == s)
            .ok_or_else(|| ParseInputError::new("scale", s))
    }
}

impl FromStr for Frequency {
    type Err = ParseInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|frequency| frequency.token() == s)
            .ok_or_else(|| ParseInputError::new("frequency", s))
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_weights_are_ordinal() {
        assert_eq!(Scale::Minor.weight(), 1);
        assert_eq!(Scale::Moderate.weight(), 2);
        assert_eq!(Scale::Severe.weight(), 3);
        assert_eq!(Scale::Critical.weight(), 4);
    }

    #[test]
    fn frequency_weights_match_table() {
        assert_eq!(Frequency::OneTime.weight(), 1);
        assert_eq!(Frequency::Occasionally.weight(), 2);
        assert_eq!(Frequency::Frequently.weight(), 3);
        assert_eq!(Frequency::Ongoing.weight(), 4);
    }

    #[test]
    fn unknown_frequency_weighs_as_occasionally() {
        assert_eq!(Frequency::Unknown.weight(), Frequency::Occasionally.weight());
    }

    #[test]
    fn token_parse_roundtrips() {
        for scale in Scale::ALL {
            assert_eq!(scale.token().parse::<Scale>(), Ok(scale));
        }
        for frequency in Frequency::ALL {
            assert_eq!(frequency.token().parse::<Frequency>(), Ok(frequency));
        }
    }

    #[test]
    fn unknown_tokens_are_errors() {
        assert!("huge".parse::<Scale>().is_err());
        assert!("daily".parse::<Frequency>().is_err());
    }

    #[test]
    fn serde_tokens_match_wire_tokens() {
        for frequency in Frequency::ALL {
            let json = serde_json::to_string(&frequency).expect("serialize");
            assert_eq!(json, format!("\"{}\"", frequency.token()));
        }
    }
}
