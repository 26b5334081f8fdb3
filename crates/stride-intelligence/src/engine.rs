// ABOUTME: PerformanceEngine wiring every algorithm into the snapshot, history and prediction entry points
// ABOUTME: Owns the chronological sort and never mutates caller-owned workouts or profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Contributors

//! # Performance Engine
//!
//! Three entry points, all pure and infallible:
//!
//! - `snapshot_metrics` returns one `PerformanceMetrics` as of today
//! - `history` returns one `HistoryPoint` per day since the first workout
//! - `race_predictions` returns 5K, 10K, half marathon and marathon predictions
//!
//! Workouts without samples have no anchor date and are ignored, as are
//! workouts anchored after `today`.
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use stride_core::models::{AthleteProfile, WorkoutBuilder};
//! use stride_intelligence::{IntelligenceConfig, PerformanceEngine};
//!
//! let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
//! let run = WorkoutBuilder::new("tempo", 10.0, 2_700_000)
//!     .start(today.and_hms_opt(7, 0, 0).unwrap())
//!     .average_heart_rate(160)
//!     .build();
//! let profile = AthleteProfile::with_heart_rates(185, 50);
//!
//! let engine = PerformanceEngine::new(IntelligenceConfig::default());
//! let metrics = engine.snapshot_metrics(&[run], &profile, today);
//! assert!(metrics.last_trimp > 100.0);
//! ```

use chrono::{Local, NaiveDate};
use stride_core::models::{AthleteProfile, Workout};
use tracing::debug;

use crate::algorithms::AerobicCapacityEstimator;
use crate::config::IntelligenceConfig;
use crate::daily_load::{ReferenceSpeedStrategy, WorkoutLoadCalculator};
use crate::evolution::EvolutionScorer;
use crate::history::HistoryGenerator;
use crate::marathon_shape::MarathonShapeScorer;
use crate::metrics::{HistoryPoint, PerformanceMetrics};
use crate::performance_prediction::{PerformancePredictor, RacePrediction};
use crate::track_statistics::{RecordedTrackStatistics, TrackStatistics};
use crate::training_load::TrainingLoadCalculator;

/// Analytics engine over a configuration and a statistics provider
#[derive(Debug, Clone)]
pub struct PerformanceEngine<S: TrackStatistics = RecordedTrackStatistics> {
    config: IntelligenceConfig,
    statistics: S,
}

impl PerformanceEngine<RecordedTrackStatistics> {
    /// Engine using recorded totals for per-workout statistics
    #[must_use]
    pub fn new(config: IntelligenceConfig) -> Self {
        Self::with_statistics(config, RecordedTrackStatistics)
    }
}

impl Default for PerformanceEngine {
    fn default() -> Self {
        Self::new(IntelligenceConfig::default())
    }
}

impl<S: TrackStatistics> PerformanceEngine<S> {
    /// Engine with a caller-supplied statistics provider
    #[must_use]
    pub const fn with_statistics(config: IntelligenceConfig, statistics: S) -> Self {
        Self { config, statistics }
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &IntelligenceConfig {
        &self.config
    }

    /// Anchored workouts up to `today`, stably sorted by anchor time
    fn chronological<'w>(workouts: &'w [Workout], today: NaiveDate) -> Vec<&'w Workout> {
        let mut sorted: Vec<&Workout> = workouts
            .iter()
            .filter(|w| w.anchor_date().is_some_and(|date| date <= today))
            .collect();
        sorted.sort_by_key(|w| w.anchor_time());
        sorted
    }

    /// Performance snapshot as of `today`
    #[must_use]
    pub fn snapshot_metrics(
        &self,
        workouts: &[Workout],
        profile: &AthleteProfile,
        today: NaiveDate,
    ) -> PerformanceMetrics {
        let sorted = Self::chronological(workouts, today);
        let Some(latest) = sorted.last() else {
            return PerformanceMetrics::default();
        };

        let loads = WorkoutLoadCalculator::new(&self.config.trimp, &self.statistics, profile);
        let reference = loads.reference_speed(&sorted, ReferenceSpeedStrategy::RecentTopAverage);
        let daily = loads.aggregate(&sorted, reference);
        let training_load =
            TrainingLoadCalculator::new(self.config.training_load.clone()).snapshot(&daily, today);

        let marathon_shape =
            MarathonShapeScorer::new(self.config.marathon_shape.clone()).score(&sorted, today);
        let vo2max =
            AerobicCapacityEstimator::new(self.config.aerobic_capacity.clone()).estimate(&sorted);
        let evolution =
            EvolutionScorer::new(self.config.evolution.clone()).evaluate(&sorted, today);

        debug!(
            workouts = sorted.len(),
            reference_speed_kmh = reference,
            atl = training_load.atl,
            ctl = training_load.ctl,
            "Computed snapshot metrics"
        );

        PerformanceMetrics {
            vo2max,
            marathon_shape: marathon_shape.score,
            atl: training_load.atl,
            ctl: training_load.ctl,
            tsb: training_load.tsb,
            workload_ratio: training_load.workload_ratio,
            last_trimp: loads.workout_load(latest, reference),
            monotony: training_load.monotony_percent,
            weekly_load: training_load.weekly_load,
            evolution_score: evolution.score,
            evolution_trend: evolution.trend_percent,
        }
    }

    /// Daily history from the first workout's date through `today`
    #[must_use]
    pub fn history(
        &self,
        workouts: &[Workout],
        profile: &AthleteProfile,
        today: NaiveDate,
    ) -> Vec<HistoryPoint> {
        let sorted = Self::chronological(workouts, today);
        HistoryGenerator::new(&self.config, &self.statistics).generate(&sorted, profile, today)
    }

    /// Race predictions from the best effort of the trailing window
    #[must_use]
    pub fn race_predictions(&self, workouts: &[Workout], today: NaiveDate) -> Vec<RacePrediction> {
        let sorted = Self::chronological(workouts, today);
        PerformancePredictor::new(self.config.prediction.clone()).predict_races(&sorted, today)
    }
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Snapshot metrics with default configuration as of the local calendar date
#[must_use]
pub fn compute_snapshot_metrics(
    workouts: &[Workout],
    profile: &AthleteProfile,
) -> PerformanceMetrics {
    PerformanceEngine::new(IntelligenceConfig::default()).snapshot_metrics(
        workouts,
        profile,
        local_today(),
    )
}

/// History series with default configuration through the local calendar date
#[must_use]
pub fn compute_history(workouts: &[Workout], profile: &AthleteProfile) -> Vec<HistoryPoint> {
    PerformanceEngine::new(IntelligenceConfig::default()).history(workouts, profile, local_today())
}

/// Race predictions with default configuration as of the local calendar date
#[must_use]
pub fn compute_race_predictions(workouts: &[Workout]) -> Vec<RacePrediction> {
    PerformanceEngine::new(IntelligenceConfig::default()).race_predictions(workouts, local_today())
}
