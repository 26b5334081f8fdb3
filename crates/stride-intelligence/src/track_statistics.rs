// ABOUTME: Per-workout statistics derived from a recorded track
// ABOUTME: TrackStatistics trait plus the RecordedTrackStatistics default provider
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Contributors

//! Track statistics seam
//!
//! Turning raw samples into moving time, speed and heart rate belongs to the
//! recorder. The engine only consumes the result, so callers with a pause-aware
//! provider plug it in through `TrackStatistics`.

use serde::{Deserialize, Serialize};
use stride_core::constants::units::{SECONDS_PER_HOUR, SECONDS_PER_MINUTE};
use stride_core::models::Workout;

/// Statistics the engine needs for one workout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkoutStatistics {
    /// Time in motion, in seconds
    pub moving_duration_seconds: f64,
    /// Average speed over moving time (km/h)
    pub average_speed_kmh: f64,
    /// Average heart rate (BPM), when any was recorded
    pub average_heart_rate: Option<f64>,
}

impl WorkoutStatistics {
    /// Moving duration in minutes
    #[must_use]
    pub fn moving_minutes(&self) -> f64 {
        self.moving_duration_seconds / SECONDS_PER_MINUTE
    }

    /// Moving duration in hours
    #[must_use]
    pub fn moving_hours(&self) -> f64 {
        self.moving_duration_seconds / SECONDS_PER_HOUR
    }
}

/// Source of per-workout statistics
pub trait TrackStatistics {
    /// Derive statistics for one workout; must be a pure function of the record
    fn statistics(&self, workout: &Workout) -> WorkoutStatistics;
}

/// Statistics taken straight from the recorded totals
///
/// Moving time equals the recorded duration. Heart rate prefers the aggregate
/// value and otherwise averages whatever per-sample readings exist.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordedTrackStatistics;

impl TrackStatistics for RecordedTrackStatistics {
    fn statistics(&self, workout: &Workout) -> WorkoutStatistics {
        let moving_duration_seconds = workout.duration_seconds();
        let average_speed_kmh = if moving_duration_seconds > 0.0 {
            workout.distance_km() / (moving_duration_seconds / SECONDS_PER_HOUR)
        } else {
            0.0
        };

        let average_heart_rate = workout
            .average_heart_rate()
            .map(f64::from)
            .or_else(|| sample_heart_rate_mean(workout));

        WorkoutStatistics {
            moving_duration_seconds,
            average_speed_kmh,
            average_heart_rate,
        }
    }
}

fn sample_heart_rate_mean(workout: &Workout) -> Option<f64> {
    let (sum, count) = workout
        .samples()
        .iter()
        .filter_map(|s| s.heart_rate)
        .fold((0.0, 0_u32), |(sum, count), hr| {
            (sum + f64::from(hr), count + 1)
        });

    (count > 0).then(|| sum / f64::from(count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use stride_core::models::{TrackSample, WorkoutBuilder};

    fn sample(minute: u32, heart_rate: Option<u32>) -> TrackSample {
        let timestamp = NaiveDate::from_ymd_opt(2025, 4, 1)
            .unwrap()
            .and_hms_opt(8, minute, 0)
            .unwrap();
        TrackSample {
            heart_rate,
            ..TrackSample::at(timestamp)
        }
    }

    #[test]
    fn test_speed_from_recorded_totals() {
        let workout = WorkoutBuilder::new("w", 10.0, 3_000_000)
            .sample(sample(0, None))
            .build();
        let stats = RecordedTrackStatistics.statistics(&workout);

        assert!((stats.average_speed_kmh - 12.0).abs() < 1e-9);
        assert!((stats.moving_minutes() - 50.0).abs() < 1e-9);
        assert!(stats.average_heart_rate.is_none());
    }

    #[test]
    fn test_zero_duration_has_zero_speed() {
        let workout = WorkoutBuilder::new("w", 10.0, 0).build();
        let stats = RecordedTrackStatistics.statistics(&workout);
        assert!(stats.average_speed_kmh.abs() < f64::EPSILON);
    }

    #[test]
    fn test_aggregate_heart_rate_wins_over_samples() {
        let workout = WorkoutBuilder::new("w", 5.0, 1_500_000)
            .sample(sample(0, Some(120)))
            .average_heart_rate(150)
            .build();
        let stats = RecordedTrackStatistics.statistics(&workout);
        assert_eq!(stats.average_heart_rate, Some(150.0));
    }

    #[test]
    fn test_sample_heart_rate_mean_skips_gaps() {
        let workout = WorkoutBuilder::new("w", 5.0, 1_500_000)
            .samples([sample(0, Some(140)), sample(1, None), sample(2, Some(160))])
            .build();
        let stats = RecordedTrackStatistics.statistics(&workout);
        assert_eq!(stats.average_heart_rate, Some(150.0));
    }
}
