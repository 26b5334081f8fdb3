// ABOUTME: Athlete profile model with explicit optional physiology fields
// ABOUTME: Gender category and heart-rate reserve lookup used by the TRIMP calculator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Contributors

use serde::{Deserialize, Serialize};

/// Gender category used to select the Bannister TRIMP weighting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Female weighting (exp factor 1.67)
    Female,
    /// Male weighting (exp factor 1.92)
    Male,
    /// Any other value; weighted like male
    #[serde(other)]
    Other,
}

/// Athlete physiology supplied by the caller
///
/// Every field is optional. When either heart rate is missing, or `max_hr` does
/// not exceed `resting_hr`, load estimation falls back to the pace-based model.
/// A missing `gender` uses the male weighting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AthleteProfile {
    /// Maximum heart rate (BPM)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_hr: Option<u32>,
    /// Resting heart rate (BPM)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resting_hr: Option<u32>,
    /// Gender category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
}

impl AthleteProfile {
    /// Profile with both heart-rate anchors
    #[must_use]
    pub const fn with_heart_rates(max_hr: u32, resting_hr: u32) -> Self {
        Self {
            max_hr: Some(max_hr),
            resting_hr: Some(resting_hr),
            gender: None,
        }
    }

    /// Set the gender category
    #[must_use]
    pub const fn gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    /// `(max_hr, resting_hr)` when both are present and form a positive reserve
    #[must_use]
    pub fn heart_rate_bounds(&self) -> Option<(u32, u32)> {
        match (self.max_hr, self.resting_hr) {
            (Some(max), Some(rest)) if max > rest => Some((max, rest)),
            _ => None,
        }
    }

    /// Whether the female TRIMP weighting applies
    #[must_use]
    pub fn is_female(&self) -> bool {
        self.gender == Some(Gender::Female)
    }
}
