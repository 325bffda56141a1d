//! # Weight Reference
//!
//! Serializable snapshot of the weight tables and band thresholds. Pure
//! assembly over the enumerations; the CLI and the HTTP API both render
//! their reference output from this shape so the two never drift.

use crate::severity::BAND_THRESHOLDS;
use crate::{Frequency, Scale, SeverityBand, ViolationKind};
use serde::Serialize;

/// One weighted input value.
#[derive(Debug, Clone, Serialize)]
pub struct WeightRow {
    pub token: &'static str,
    pub label: &'static str,
    pub weight: u32,
}

/// One banding threshold. `upper` is `None` for the open-ended top band.
#[derive(Debug, Clone, Serialize)]
pub struct ThresholdRow {
    pub band: SeverityBand,
    pub upper: Option<f64>,
}

/// The full reference: every weight table plus the band thresholds.
#[derive(Debug, Clone, Serialize)]
pub struct WeightReference {
    pub violations: Vec<WeightRow>,
    pub scales: Vec<WeightRow>,
    pub frequencies: Vec<WeightRow>,
    pub thresholds: Vec<ThresholdRow>,
}

impl WeightReference {
    /// Assemble the reference from the enumeration tables.
    #[must_use]
    pub fn collect() -> Self {
        let violations = ViolationKind::ALL
            .iter()
            .map(|kind| WeightRow {
                token: kind.token(),
                label: kind.label(),
                weight: kind.base_weight(),
            })
            .collect();

        let scales = Scale::ALL
            .iter()
            .map(|scale| WeightRow {
                token: scale.token(),
                label: scale.label(),
                weight: scale.weight(),
            })
            .collect();

        let frequencies = Frequency::ALL
            .iter()
            .map(|frequency| WeightRow {
                token: frequency.token(),
                label: frequency.label(),
                weight: frequency.weight(),
            })
            .collect();

        let mut thresholds: Vec<ThresholdRow> = BAND_THRESHOLDS
            .iter()
            .map(|(upper, band)| ThresholdRow {
                band: *band,
                upper: Some(*upper),
            })
            .collect();
        thresholds.push(ThresholdRow {
            band: SeverityBand::Critical,
            upper: None,
        });

        Self {
            violations,
            scales,
            frequencies,
            thresholds,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_covers_every_variant() {
        let reference = WeightReference::collect();
        assert_eq!(reference.violations.len(), ViolationKind::ALL.len());
        assert_eq!(reference.scales.len(), Scale::ALL.len());
        assert_eq!(reference.frequencies.len(), Frequency::ALL.len());
        assert_eq!(reference.thresholds.len(), SeverityBand::ALL.len());
    }

    #[test]
    fn top_band_is_open_ended() {
        let reference = WeightReference::collect();
        let last = reference.thresholds.last().expect("thresholds not empty");
        assert_eq!(last.band, SeverityBand::Critical);
        assert_eq!(last.upper, None);
    }

    #[test]
    fn reference_serializes_with_wire_tokens() {
        let value = serde_json::to_value(WeightReference::collect()).expect("serialize");
        assert_eq!(value["violations"][0]["token"], "extrajudicial_killing");
        assert_eq!(value["violations"][0]["weight"], 100);
        assert_eq!(value["thresholds"][0]["band"], "minimal");
        assert_eq!(value["thresholds"][0]["upper"], 3.0);
    }
}
