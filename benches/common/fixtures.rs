// ABOUTME: Benchmark test fixtures for generating realistic running history
// ABOUTME: Provides deterministic workout generation for reproducible performance measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Contributors

//! Benchmark test fixtures for generating realistic running history.
//!
//! Workouts are laid out backwards from a fixed date so every run measures
//! the same input.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use stride_engine::models::{AthleteProfile, TrackSample, Workout, WorkoutBuilder};

/// Predefined batch sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum WorkoutBatchSize {
    /// One month of running
    Month,
    /// Half a year of running
    Season,
    /// Two years of running
    Archive,
}

impl WorkoutBatchSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Month => 15,
            Self::Season => 120,
            Self::Archive => 500,
        }
    }
}

/// Date the generated history ends on
#[must_use]
pub fn bench_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 30).unwrap_or_default()
}

/// Athlete used by every benchmark
#[must_use]
pub const fn bench_profile() -> AthleteProfile {
    AthleteProfile::with_heart_rates(188, 48)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn heart_rate_samples(start: NaiveDateTime, index: usize, minutes: u64) -> Vec<TrackSample> {
    (0..minutes)
        .step_by(5)
        .map(|minute| TrackSample {
            heart_rate: Some(140 + ((index * 7 + minute as usize) % 30) as u32),
            latitude: Some(45.5 + minute as f64 / 10_000.0),
            longitude: Some(-73.56),
            ..TrackSample::at(start + Duration::minutes(minute as i64))
        })
        .collect()
}

/// Generate a single workout; every fourth one carries no heart rate at all
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_possible_wrap
)]
fn generate_workout(index: usize) -> Workout {
    // Roughly every other day, with a long run each week
    let days_ago = (index * 2) as i64;
    let start = (bench_today() - Duration::days(days_ago))
        .and_hms_opt(6, 30, 0)
        .unwrap_or_default();
    let long_run = index % 4 == 3;
    let distance_km = if long_run {
        18.0 + (index % 12) as f64
    } else {
        6.0 + ((index * 37) % 60) as f64 / 10.0
    };
    let pace_seconds_per_km = 270 + ((index * 13) % 60) as u64;
    let duration_seconds = (distance_km * pace_seconds_per_km as f64) as u64;

    let builder = WorkoutBuilder::new(
        format!("bench_workout_{index}"),
        distance_km,
        duration_seconds * 1_000,
    )
    .start(start);

    match index % 4 {
        0 => builder
            .average_heart_rate(145 + (index % 20) as u32)
            .build(),
        1 => builder
            .samples(heart_rate_samples(start, index, duration_seconds / 60))
            .build(),
        _ => builder.build(),
    }
}

/// Generate a batch of workouts ending on `bench_today`
#[must_use]
pub fn generate_workouts(size: WorkoutBatchSize) -> Vec<Workout> {
    (0..size.count()).map(generate_workout).collect()
}
