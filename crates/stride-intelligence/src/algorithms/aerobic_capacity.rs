// ABOUTME: Aerobic capacity (VO2max) estimation from recent running efforts
// ABOUTME: ACSM running oxygen cost with a duration correction and an acceptance ceiling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Contributors

use stride_core::constants::physiology::{RESTING_VO2, VO2_PER_METER_PER_MINUTE};
use stride_core::constants::units::METERS_PER_KM;
use stride_core::models::Workout;

use crate::config::AerobicCapacityConfig;

/// Duration correction intercept
const CORRECTION_INTERCEPT: f64 = 1.05;
/// Minutes over which the correction drops by one
const CORRECTION_MINUTES: f64 = 300.0;

/// VO2max estimator
///
/// Formula:
/// - `vo2_cost = 3.5 + velocity_m_per_min × 0.2`
/// - `correction = max(0.8, 1.05 - minutes / 300)`
/// - `estimate = vo2_cost / correction`
///
/// Longer efforts get a smaller correction and therefore a higher estimate for
/// the same speed; short maximal efforts are discounted.
///
/// # Scientific References
///
/// - American College of Sports Medicine (2013). "ACSM's Guidelines for Exercise Testing and Prescription" (9th ed.).
#[derive(Debug, Clone, Default)]
pub struct AerobicCapacityEstimator {
    config: AerobicCapacityConfig,
}

impl AerobicCapacityEstimator {
    /// Estimator with the given settings
    #[must_use]
    pub const fn new(config: AerobicCapacityConfig) -> Self {
        Self { config }
    }

    /// Whether a workout is long enough to be considered
    #[must_use]
    pub fn qualifies(&self, workout: &Workout) -> bool {
        workout.distance_km() >= self.config.min_distance_km
    }

    /// Accepted estimate for one effort, `None` when outside `(0, ceiling)`
    #[must_use]
    pub fn estimate_effort(&self, distance_km: f64, duration_minutes: f64) -> Option<f64> {
        if duration_minutes <= 0.0 {
            return None;
        }
        let velocity = distance_km * METERS_PER_KM / duration_minutes;
        let vo2_cost = velocity.mul_add(VO2_PER_METER_PER_MINUTE, RESTING_VO2);
        let correction = (CORRECTION_INTERCEPT - duration_minutes / CORRECTION_MINUTES)
            .max(self.config.correction_floor);
        let estimate = vo2_cost / correction;

        (estimate > 0.0 && estimate < self.config.ceiling).then_some(estimate)
    }

    /// Accepted estimate for one workout that meets the distance minimum
    #[must_use]
    pub fn estimate_workout(&self, workout: &Workout) -> Option<f64> {
        if !self.qualifies(workout) {
            return None;
        }
        self.estimate_effort(workout.distance_km(), workout.duration_minutes())
    }

    /// Best estimate over the most recent qualifying workouts
    ///
    /// `workouts` must be in ascending chronological order. Returns the default
    /// value when no workout yields an accepted estimate.
    #[must_use]
    pub fn estimate(&self, workouts: &[&Workout]) -> f64 {
        workouts
            .iter()
            .rev()
            .filter(|w| self.qualifies(w))
            .take(self.config.sample_size)
            .filter_map(|w| self.estimate_effort(w.distance_km(), w.duration_minutes()))
            .fold(None, |best: Option<f64>, v| Some(best.map_or(v, |b| b.max(v))))
            .unwrap_or(self.config.default_vo2max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stride_core::models::WorkoutBuilder;

    #[test]
    fn test_ten_k_in_forty_five_minutes() {
        let estimator = AerobicCapacityEstimator::default();
        // 222.2 m/min -> cost 47.94, correction 0.9
        let estimate = estimator.estimate_effort(10.0, 45.0).unwrap();
        assert!((estimate - 53.27).abs() < 0.01, "got {estimate}");
    }

    #[test]
    fn test_implausible_effort_rejected() {
        let estimator = AerobicCapacityEstimator::default();
        assert!(estimator.estimate_effort(10.0, 10.0).is_none());
        assert!(estimator.estimate_effort(10.0, 0.0).is_none());
    }

    #[test]
    fn test_short_runs_fall_back_to_default() {
        let estimator = AerobicCapacityEstimator::default();
        let short = WorkoutBuilder::new("short", 2.5, 900_000).build();
        assert!((estimator.estimate(&[&short]) - 35.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_only_recent_qualifying_workouts_count() {
        let estimator = AerobicCapacityEstimator::new(AerobicCapacityConfig {
            sample_size: 1,
            ..AerobicCapacityConfig::default()
        });
        let fast_old = WorkoutBuilder::new("old", 10.0, 2_400_000).build();
        let slow_new = WorkoutBuilder::new("new", 10.0, 3_600_000).build();
        let tiny = WorkoutBuilder::new("tiny", 1.0, 200_000).build();

        let best = estimator.estimate(&[&fast_old, &slow_new, &tiny]);
        let expected = estimator.estimate_effort(10.0, 60.0).unwrap();
        assert!((best - expected).abs() < 1e-12);
    }
}
