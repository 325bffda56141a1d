//! # Incident Records
//!
//! Draft and assessment shapes for incident intake. A draft mirrors the
//! partially-filled form state the intake layer holds while a reporter is
//! still selecting values; an assessment is the finalized record with its
//! computed severity stored alongside the inputs that produced it.

use crate::severity::{band_for_score, classify, severity_score};
use crate::{Frequency, Scale, SeverityBand, ViolationKind};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error promoting a draft to an assessment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    /// One or more classification inputs are still unselected.
    #[error("draft is incomplete: missing {}", .missing.join(", "))]
    Incomplete {
        /// Field names still unselected, in declaration order.
        missing: Vec<&'static str>,
    },
}

/// In-progress incident intake, as submitted by the form layer.
///
/// The three classification inputs are optional because the form fills
/// them one at a time; everything here tolerates their absence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IncidentDraft {
    /// Reporter's free-text description.
    #[serde(default)]
    pub summary: String,
    /// Where the incident took place, if recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default)]
    pub violation: Option<ViolationKind>,
    #[serde(default)]
    pub scale: Option<Scale>,
    #[serde(default)]
    pub frequency: Option<Frequency>,
}

impl IncidentDraft {
    /// Derived severity, or `None` while any input is unselected.
    ///
    /// This is the value the form displays as read-only state; it is
    /// recomputed on every selection change, never stored on the draft.
    #[must_use]
    pub fn assess(&self) -> Option<SeverityBand> {
        classify(self.violation, self.scale, self.frequency)
    }

    /// Raw weighted average, or `None` while any input is unselected.
    #[must_use]
    pub fn score(&self) -> Option<f64> {
        match (self.violation, self.scale, self.frequency) {
            (Some(violation), Some(scale), Some(frequency)) => {
                Some(severity_score(violation, scale, frequency))
            }
            _ => None,
        }
    }

    /// Names of the classification inputs still unselected.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.violation.is_none() {
            missing.push("violation");
        }
        if self.scale.is_none() {
            missing.push("scale");
        }
        if self.frequency.is_none() {
            missing.push("frequency");
        }
        missing
    }

    /// Whether all three classification inputs are selected.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Promote the draft to a finalized assessment.
    pub fn finalize(&self) -> Result<IncidentAssessment, DraftError> {
        match (self.violation, self.scale, self.frequency) {
            (Some(violation), Some(scale), Some(frequency)) => Ok(IncidentAssessment::new(
                violation,
                scale,
                frequency,
                self.summary.clone(),
                self.location.clone(),
            )),
            _ => Err(DraftError::Incomplete {
                missing: self.missing_fields(),
            }),
        }
    }
}

/// A finalized incident record with its computed severity.
///
/// Band and score are computed at construction and never accepted from
/// the caller, so a stored assessment cannot disagree with its inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncidentAssessment {
    #[serde(default)]
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub violation: ViolationKind,
    pub scale: Scale,
    pub frequency: Frequency,
    pub severity: SeverityBand,
    pub score: f64,
}

impl IncidentAssessment {
    /// Build an assessment, computing band and score from the inputs.
    #[must_use]
    pub fn new(
        violation: ViolationKind,
        scale: Scale,
        frequency: Frequency,
        summary: impl Into<String>,
        location: Option<String>,
    ) -> Self {
        let score = severity_score(violation, scale, frequency);
        Self {
            summary: summary.into(),
            location,
            violation,
            scale,
            frequency,
            severity: band_for_score(score),
            score,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
