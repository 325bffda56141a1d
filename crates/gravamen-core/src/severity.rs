//! # Severity Banding
//!
//! The weighted-average classifier at the center of Gravamen. A record's
//! category base weight and its two factor weights are averaged with real
//! division, then mapped onto a band through ascending inclusive-upper
//! thresholds. Pure and total: complete inputs always classify, and the
//! same inputs always yield the same band.

use crate::{Frequency, Scale, ViolationKind};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordinal severity band produced by the classifier.
///
/// Distinct from [`Scale`] even where the names overlap: `Scale` is what
/// the reporter selected, a band is what the engine derived. The derived
/// `Ord` gives Minimal < Minor < Moderate < Severe < Critical.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SeverityBand {
    Minimal,
    Minor,
    Moderate,
    Severe,
    Critical,
}

/// Band thresholds, ascending, upper bound inclusive. A score above the
/// last entry is Critical. First match wins, so the order is load-bearing.
pub const BAND_THRESHOLDS: &[(f64, SeverityBand)] = &[
    (3.0, SeverityBand::Minimal),
    (5.0, SeverityBand::Minor),
    (7.0, SeverityBand::Moderate),
    (8.5, SeverityBand::Severe),
];

impl SeverityBand {
    /// Every band, ascending.
    pub const ALL: [Self; 5] = [
        Self::Minimal,
        Self::Minor,
        Self::Moderate,
        Self::Severe,
        Self::Critical,
    ];

    /// The snake_case wire token, matching the serde representation.
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
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
            Self::Minimal => "Minimal",
            Self::Minor => "Minor",
            Self::Moderate => "Moderate",
            Self::Severe => "Severe",
            Self::Critical => "Critical",
        }
    }
}

impl fmt::Display for SeverityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SeverityBand {
    type Err = crate::ParseInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|band| band.token() == s)
            .ok_or_else(|| crate::ParseInputError::new("severity band", s))
    }
}

/// Normalized weighted average of the three classification inputs.
///
/// Real division: the Severe/Critical cutoff sits at 8.5, so integer
/// truncation would misband sums of 25.
#[must_use]
pub fn severity_score(violation: ViolationKind, scale: Scale, frequency: Frequency) -> f64 {
    let sum = violation.base_weight() + scale.weight() + frequency.weight();
    f64::from(sum) / 3.0
}

/// Map a score onto its band. The first threshold at or above the score
/// wins; anything beyond the table is Critical.
#[must_use]
pub fn band_for_score(average: f64) -> SeverityBand {
    BAND_THRESHOLDS
        .iter()
        .find(|(upper, _)| average <= *upper)
        .map_or(SeverityBand::Critical, |(_, band)| *band)
}

/// Classify a possibly incomplete selection.
///
/// Returns `None` until all three inputs are selected: a half-filled form
/// has no severity yet, and absence is ordinary here, not an error. With
/// complete inputs the classification always succeeds.
#[must_use]
pub fn classify(
    violation: Option<ViolationKind>,
    scale: Option<Scale>,
    frequency: Option<Frequency>,
) -> Option<SeverityBand> {
    Some(band_for_score(severity_score(
        violation?,
        scale?,
        frequency?,
    )))
}

// =============================================================================
// TESTS
// =============================================================================


#[cfg(test)]
mod props {
    use super::*;
    use proptest::prelude::*;

    fn any_violation() -> impl Strategy<Value = ViolationKind> {
        proptest::sample::select(&ViolationKind::ALL[..])
    }

    fn any_scale() -> impl Strategy<Value = Scale> {
        proptest::sample::select(&Scale::ALL[..])
    }

    fn any_frequency() -> impl Strategy<Value = Frequency> {
        proptest::sample::select(&Frequency::ALL[..])
    }

    proptest! {
        #[test]
        fn classification_is_deterministic(
            violation in any_violation(),
            scale in any_scale(),
            frequency in any_frequency(),
        ) {
            let first = classify(Some(violation), Some(scale), Some(frequency));
            let second = classify(Some(violation), Some(scale), Some(frequency));
            prop_assert_eq!(first, second);
        }

        #[test]
        fn complete_inputs_always_classify(
            violation in any_violation(),
            scale in any_scale(),
            frequency in any_frequency(),
        ) {
            let band = classify(Some(violation), Some(scale), Some(frequency));
            prop_assert!(band.is_some());
            prop_assert!(SeverityBand::ALL.contains(&band.unwrap_or(SeverityBand::Minimal)));
        }

        #[test]
        fn heavier_violations_never_lower_the_band(
            first in any_violation(),
            second in any_violation(),
            scale in any_scale(),
            frequency in any_frequency(),
        ) {
            let (lighter, heavier) = if first.base_weight() <= second.base_weight() {
                (first, second)
            } else {
                (second, first)
            };
            let low = classify(Some(lighter), Some(scale), Some(frequency));
            let high = classify(Some(heavier), Some(scale), Some(frequency));
            prop_assert!(low <= high);
        }

        #[test]
        fn any_missing_input_yields_no_band(
            violation in proptest::option::of(any_violation()),
            scale in proptest::option::of(any_scale()),
            frequency in proptest::option::of(any_frequency()),
        ) {
            let band = classify(violation, scale, frequency);
            let complete = violation.is_some() && scale.is_some() && frequency.is_some();
            prop_assert_eq!(band.is_some(), complete);
        }
    }
}
