//! # Violation Categories
//!
//! The closed set of human-rights-violation categories and their fixed
//! base weights. Weights are business constants carried over from the
//! organization's risk policy; they are not derived from anything here.

use crate::ParseInputError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A human-rights-violation category.
///
/// The set is closed: records never carry free-text categories. Each
/// variant has a fixed integer base weight reflecting intrinsic severity,
/// looked up via [`ViolationKind::base_weight`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    ExtrajudicialKilling,
    UnlawfulDetention,
    Torture,
    EnforcedDisappearance,
    Censorship,
    Intimidation,
    Discrimination,
    GenderBasedViolence,
    ChildLabor,
    ForcedLabor,
    UnsafeWorkingConditions,
    DeniedEducation,
    DeniedHealth,
    ForcedEviction,
    Surveillance,
    DataPrivacy,
}

/// Fallback base weight for a category missing from the table.
///
/// The enumeration is closed, so the fallback should never fire; it exists
/// so the lookup stays total if the table and the enum ever drift.
pub const DEFAULT_BASE_WEIGHT: u32 = 5;

/// Base weight table. Order matches variant declaration order.
const BASE_WEIGHTS: &[(ViolationKind, u32)] = &[
    (ViolationKind::ExtrajudicialKilling, 100),
    (ViolationKind::UnlawfulDetention, 20),
    (ViolationKind::Torture, 9),
    (ViolationKind::EnforcedDisappearance, 10),
    (ViolationKind::Censorship, 4),
    (ViolationKind::Intimidation, 5),
    (ViolationKind::Discrimination, 6),
    (ViolationKind::GenderBasedViolence, 7),
    (ViolationKind::ChildLabor, 8),
    (ViolationKind::ForcedLabor, 9),
    (ViolationKind::UnsafeWorkingConditions, 6),
    (ViolationKind::DeniedEducation, 5),
    (ViolationKind::DeniedHealth, 6),
    (ViolationKind::ForcedEviction, 6),
    (ViolationKind::Surveillance, 4),
    (ViolationKind::DataPrivacy, 3),
];

impl ViolationKind {
    /// Every category, in declaration order.
    pub const ALL: [Self; 16] = [
        Self::ExtrajudicialKilling,
        Self::UnlawfulDetention,
        Self::Torture,
        Self::EnforcedDisappearance,
        Self::Censorship,
        Self::Intimidation,
        Self::Discrimination,
        Self::GenderBasedViolence,
        Self::ChildLabor,
        Self::ForcedLabor,
        Self::UnsafeWorkingConditions,
        Self::DeniedEducation,
        Self::DeniedHealth,
        Self::ForcedEviction,
        Self::Surveillance,
        Self::DataPrivacy,
    ];

    /// Base weight of this category.
    ///
    /// Categories absent from the table fall back to
    /// [`DEFAULT_BASE_WEIGHT`] rather than failing the lookup.
    #[must_use]
    pub fn base_weight(self) -> u32 {
        BASE_WEIGHTS
            .iter()
            .find(|(kind, _)| *kind == self)
            .map_or(DEFAULT_BASE_WEIGHT, |(_, weight)| *weight)
    }

    /// The snake_case wire token, matching the serde representation.
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            Self::ExtrajudicialKilling => "extrajudicial_killing",
            Self::UnlawfulDetention => "unlawful_detention",
            Self::Torture => "torture",
            Self::EnforcedDisappearance => "enforced_disappearance",
            Self::Censorship => "censorship",
            Self::Intimidation => "intimidation",
            Self::Discrimination => "discrimination",
            Self::GenderBasedViolence => "gender_based_violence",
            Self::ChildLabor => "child_labor",
            Self::ForcedLabor => "forced_labor",
            Self::UnsafeWorkingConditions => "unsafe_working_conditions",
            Self::DeniedEducation => "denied_education",
            Self::DeniedHealth => "denied_health",
            Self::ForcedEviction => "forced_eviction",
            Self::Surveillance => "surveillance",
            Self::DataPrivacy => "data_privacy",
        }
    }

    /// Human-readable label for CLI and report output.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::ExtrajudicialKilling => "Extrajudicial killing",
            Self::UnlawfulDetention => "Unlawful detention",
            Self::Torture => "Torture",
            Self::EnforcedDisappearance => "Enforced disappearance",
            Self::Censorship => "Censorship",
            Self::Intimidation => "Intimidation",
            Self::Discrimination => "Discrimination",
            Self::GenderBasedViolence => "Gender-based violence",
            Self::ChildLabor => "Child labor",
            Self::ForcedLabor => "Forced labor",
            Self::UnsafeWorkingConditions => "Unsafe working conditions",
            Self::DeniedEducation => "Denied education",
            Self::DeniedHealth => "Denied health",
            Self::ForcedEviction => "Forced eviction",
            Self::Surveillance => "Surveillance",
            Self::DataPrivacy => "Data privacy violation",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ViolationKind {
    type Err = ParseInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.token() == s)
            .ok_or_else(|| ParseInputError::new("violation kind", s))
    }
}

// =============================================================================
// TESTS
// =============================================================================
