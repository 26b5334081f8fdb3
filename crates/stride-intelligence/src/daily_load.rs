// ABOUTME: Reference speed selection, per-workout load and calendar-day load aggregation
// ABOUTME: DailyLoad keeps at most one summed entry per local date; absent dates read as zero
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Contributors

//! Daily Load Aggregation
//!
//! The pace-based TRIMP branch needs a reference speed drawn from the athlete's
//! history, so the reference speed is resolved once per call before any workout
//! is aggregated.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use stride_core::models::{AthleteProfile, Workout};
use tracing::debug;

use crate::algorithms::TrimpAlgorithm;
use crate::config::TrimpConfig;
use crate::track_statistics::TrackStatistics;

/// How the reference speed is drawn from the workout history
///
/// The snapshot and the history series deliberately use different strategies;
/// both are kept so results stay comparable with previously published values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceSpeedStrategy {
    /// Mean of the fastest fraction among the most recent workouts
    RecentTopAverage,
    /// Single fastest among the earliest workouts
    EarliestFastest,
}

impl ReferenceSpeedStrategy {
    /// Reference speed (km/h) from chronologically ordered average speeds
    ///
    /// Returns 0 when there is no workout to sample.
    #[must_use]
    pub fn reference_speed(&self, speeds: &[f64], config: &TrimpConfig) -> f64 {
        let sample_size = config.reference_sample_size.min(speeds.len());
        if sample_size == 0 {
            return 0.0;
        }

        match self {
            Self::RecentTopAverage => {
                let mut sample = speeds[speeds.len() - sample_size..].to_vec();
                sample.sort_by(|a, b| b.total_cmp(a));
                let top = ((sample.len() as f64 * config.reference_top_fraction).ceil() as usize)
                    .clamp(1, sample.len());
                sample[..top].iter().sum::<f64>() / top as f64
            }
            Self::EarliestFastest => speeds[..sample_size]
                .iter()
                .copied()
                .fold(0.0, f64::max),
        }
    }
}

/// Calendar-day load totals
///
/// Invariant: at most one entry per date; a date without an entry has load 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyLoad {
    loads: BTreeMap<NaiveDate, f64>,
}

impl DailyLoad {
    /// Add a load to a date's total
    pub fn add(&mut self, date: NaiveDate, load: f64) {
        *self.loads.entry(date).or_insert(0.0) += load;
    }

    /// Load on a date, 0 when nothing was recorded
    #[must_use]
    pub fn get(&self, date: NaiveDate) -> f64 {
        self.loads.get(&date).copied().unwrap_or(0.0)
    }

    /// Number of dates carrying a load
    #[must_use]
    pub fn len(&self) -> usize {
        self.loads.len()
    }

    /// Whether no date carries a load
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.loads.is_empty()
    }

    /// Dates and totals in ascending date order
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, f64)> + '_ {
        self.loads.iter().map(|(date, load)| (*date, *load))
    }
}

/// Per-workout load calculator bound to one athlete and statistics provider
pub struct WorkoutLoadCalculator<'a, S: TrackStatistics> {
    config: &'a TrimpConfig,
    statistics: &'a S,
    profile: &'a AthleteProfile,
}

impl<'a, S: TrackStatistics> WorkoutLoadCalculator<'a, S> {
    /// Bind a calculator
    #[must_use]
    pub const fn new(
        config: &'a TrimpConfig,
        statistics: &'a S,
        profile: &'a AthleteProfile,
    ) -> Self {
        Self {
            config,
            statistics,
            profile,
        }
    }

    /// Reference speed for chronologically ordered workouts
    #[must_use]
    pub fn reference_speed(&self, workouts: &[&Workout], strategy: ReferenceSpeedStrategy) -> f64 {
        let speeds: Vec<f64> = workouts
            .iter()
            .map(|w| self.statistics.statistics(w).average_speed_kmh)
            .collect();
        let reference = strategy.reference_speed(&speeds, self.config);
        debug!(
            strategy = ?strategy,
            workouts = speeds.len(),
            reference_speed_kmh = reference,
            "Resolved TRIMP reference speed"
        );
        reference
    }

    /// Capped TRIMP for one workout
    ///
    /// A configured heart-rate formula that cannot run on this workout degrades
    /// to the pace estimate instead of failing.
    #[must_use]
    pub fn workout_load(&self, workout: &Workout, reference_speed_kmh: f64) -> f64 {
        let stats = self.statistics.statistics(workout);
        let threshold = self.config.threshold_speed(reference_speed_kmh);
        let raw = self
            .config
            .algorithm
            .calculate(&stats, self.profile, threshold)
            .unwrap_or_else(|error| {
                debug!(
                    workout_id = workout.id(),
                    algorithm = self.config.algorithm.name(),
                    %error,
                    "TRIMP inputs unavailable, using pace estimate"
                );
                TrimpAlgorithm::PaceEstimate
                    .calculate(&stats, self.profile, threshold)
                    .unwrap_or(0.0)
            });

        raw.clamp(0.0, self.config.max_load)
    }

    /// Sum workout loads per anchor date; workouts without samples are skipped
    #[must_use]
    pub fn aggregate(&self, workouts: &[&Workout], reference_speed_kmh: f64) -> DailyLoad {
        let mut daily = DailyLoad::default();
        for workout in workouts {
            if let Some(date) = workout.anchor_date() {
                daily.add(date, self.workout_load(workout, reference_speed_kmh));
            }
        }
        daily
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::track_statistics::RecordedTrackStatistics;
    use stride_core::models::WorkoutBuilder;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, day).unwrap()
    }

    fn run(id: &str, day: u32, hour: u32, km: f64, minutes: u64) -> Workout {
        WorkoutBuilder::new(id, km, minutes * 60_000)
            .start(date(day).and_hms_opt(hour, 0, 0).unwrap())
            .build()
    }

    #[test]
    fn test_recent_top_average_uses_fastest_fifth() {
        let config = TrimpConfig::default();
        let speeds: Vec<f64> = (1..=25).map(f64::from).collect();
        // last 20 are 6..=25, top 4 are 22..=25
        let reference = ReferenceSpeedStrategy::RecentTopAverage.reference_speed(&speeds, &config);
        assert!((reference - 23.5).abs() < 1e-12);
    }

    #[test]
    fn test_earliest_fastest_uses_first_twenty() {
        let config = TrimpConfig::default();
        let speeds: Vec<f64> = (1..=25).map(f64::from).collect();
        let reference = ReferenceSpeedStrategy::EarliestFastest.reference_speed(&speeds, &config);
        assert!((reference - 20.0).abs() < 1e-12);
    }

    #[test]
    fn test_single_workout_reference() {
        let config = TrimpConfig::default();
        let reference = ReferenceSpeedStrategy::RecentTopAverage.reference_speed(&[9.0], &config);
        assert!((reference - 9.0).abs() < f64::EPSILON);
        assert!(ReferenceSpeedStrategy::RecentTopAverage
            .reference_speed(&[], &config)
            .abs()
            < f64::EPSILON);
    }

    #[test]
    fn test_same_day_workouts_sum() {
        let config = TrimpConfig::default();
        let profile = AthleteProfile::default();
        let calculator = WorkoutLoadCalculator::new(&config, &RecordedTrackStatistics, &profile);
        let morning = run("am", 3, 7, 12.0, 60);
        let evening = run("pm", 3, 19, 12.0, 60);
        let next = run("next", 4, 7, 12.0, 60);
        let unanchored = WorkoutBuilder::new("none", 12.0, 3_600_000).build();

        let daily = calculator.aggregate(&[&morning, &evening, &next, &unanchored], 0.0);
        assert_eq!(daily.len(), 2);
        assert!((daily.get(date(3)) - 200.0).abs() < 1e-9);
        assert!((daily.get(date(4)) - 100.0).abs() < 1e-9);
        assert!(daily.get(date(5)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_load_is_capped() {
        let config = TrimpConfig::default();
        let profile = AthleteProfile::default();
        let calculator = WorkoutLoadCalculator::new(&config, &RecordedTrackStatistics, &profile);
        // 60 km/h GPS glitch for an hour
        let glitch = run("glitch", 1, 8, 60.0, 60);
        assert!((calculator.workout_load(&glitch, 0.0) - 400.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_explicit_bannister_degrades_to_pace() {
        let config = TrimpConfig {
            algorithm: TrimpAlgorithm::BannisterMale,
            ..TrimpConfig::default()
        };
        let profile = AthleteProfile::default();
        let calculator = WorkoutLoadCalculator::new(&config, &RecordedTrackStatistics, &profile);
        let workout = run("w", 1, 8, 12.0, 60);
        assert!((calculator.workout_load(&workout, 0.0) - 100.0).abs() < 1e-9);
    }
}
