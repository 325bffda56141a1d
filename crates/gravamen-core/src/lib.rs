//! # Gravamen Core
//!
//! Deterministic severity engine for human-rights incident records.
//!
//! This crate is the pure logic layer: the closed enumerations a record is
//! classified by, their fixed weight tables, the banding algorithm, and the
//! draft/assessment record shapes the intake layer submits. No async and
//! no I/O: every operation here is a total, referentially transparent
//! function, safe to call from any thread without coordination.

pub mod factors;
pub mod incident;
pub mod reference;
pub mod severity;
pub mod violation;

pub use factors::{Frequency, Scale};
pub use incident::{DraftError, IncidentAssessment, IncidentDraft};
pub use reference::WeightReference;
pub use severity::{SeverityBand, band_for_score, classify, severity_score};
pub use violation::ViolationKind;

use thiserror::Error;

/// Error returned when a wire token does not name any variant of the
/// target enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized {expected} token: {token:?}")]
pub struct ParseInputError {
    /// Name of the enumeration the token was parsed against.
    pub expected: &'static str,
    /// The offending input, verbatim.
    pub token: String,
}

impl ParseInputError {
    pub(crate) fn new(expected: &'static str, token: &str) -> Self {
        Self {
            expected,
            token: token.to_string(),
        }
    }
}
