// ABOUTME: Explicit history cache for callers that re-request the same series
// ABOUTME: Content fingerprint keys over workouts, profile and date with an in-memory LRU backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Contributors

//! History caching
//!
//! The engine itself never memoizes. Callers that render the same history
//! repeatedly keep an explicit `HistoryCache` keyed by a `WorkoutFingerprint`,
//! so identical inputs hit the cache and any edit to a workout, the profile or
//! the date produces a new key.

/// In-memory LRU cache implementation
pub mod memory;

pub use memory::HistoryCache;

use chrono::NaiveDate;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fmt;
use stride_core::errors::AppResult;
use stride_core::models::{AthleteProfile, Workout};

/// Canonical form hashed into a fingerprint
#[derive(Serialize)]
struct FingerprintInput<'a> {
    workouts: &'a [Workout],
    profile: &'a AthleteProfile,
    today: NaiveDate,
}

/// Hex-encoded SHA-256 of the inputs a history series depends on
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WorkoutFingerprint(String);

impl WorkoutFingerprint {
    /// Fingerprint the inputs of a history computation
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the inputs cannot be encoded as JSON
    pub fn compute(
        workouts: &[Workout],
        profile: &AthleteProfile,
        today: NaiveDate,
    ) -> AppResult<Self> {
        let canonical = serde_json::to_vec(&FingerprintInput {
            workouts,
            profile,
            today,
        })?;

        let mut hasher = Sha256::new();
        hasher.update(&canonical);
        Ok(Self(hex::encode(hasher.finalize())))
    }

    /// Hex digest
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WorkoutFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stride_core::models::WorkoutBuilder;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, d).unwrap()
    }

    fn run(km: f64) -> Workout {
        WorkoutBuilder::new("r", km, 1_800_000)
            .start(day(1).and_hms_opt(7, 0, 0).unwrap())
            .build()
    }

    #[test]
    fn test_identical_inputs_share_fingerprint() {
        let profile = AthleteProfile::with_heart_rates(190, 50);
        let a = WorkoutFingerprint::compute(&[run(5.0)], &profile, day(2)).unwrap();
        let b = WorkoutFingerprint::compute(&[run(5.0)], &profile, day(2)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.as_str().len(), 64);
    }

    #[test]
    fn test_any_change_produces_new_fingerprint() {
        let profile = AthleteProfile::with_heart_rates(190, 50);
        let base = WorkoutFingerprint::compute(&[run(5.0)], &profile, day(2)).unwrap();

        let edited_workout = WorkoutFingerprint::compute(&[run(5.1)], &profile, day(2)).unwrap();
        let edited_profile =
            WorkoutFingerprint::compute(&[run(5.0)], &AthleteProfile::default(), day(2)).unwrap();
        let edited_day = WorkoutFingerprint::compute(&[run(5.0)], &profile, day(3)).unwrap();

        assert_ne!(base, edited_workout);
        assert_ne!(base, edited_profile);
        assert_ne!(base, edited_day);
    }
}
