// ABOUTME: Day-by-day history series of ATL, CTL, evolution score and VO2max
// ABOUTME: Rolling per-day buffers evict entries older than their window as the loop advances
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Contributors

//! History Generator
//!
//! Cost is linear in the number of days since the first workout, not in the
//! number of workouts, so callers should request the series only when a
//! time-series view needs it.

use chrono::NaiveDate;
use std::collections::{BTreeMap, VecDeque};
use stride_core::models::{AthleteProfile, Workout};
use tracing::debug;

use crate::algorithms::{AerobicCapacityEstimator, LoadState};
use crate::config::IntelligenceConfig;
use crate::daily_load::{ReferenceSpeedStrategy, WorkoutLoadCalculator};
use crate::evolution::EvolutionScorer;
use crate::metrics::HistoryPoint;
use crate::track_statistics::TrackStatistics;
use crate::training_load::TrainingLoadCalculator;

/// Per-day values kept for a fixed number of trailing days
#[derive(Debug, Clone)]
pub struct RollingDailyBuffer {
    window_days: i64,
    entries: VecDeque<(NaiveDate, f64)>,
}

impl RollingDailyBuffer {
    /// Empty buffer covering `window_days` days including the current one
    #[must_use]
    pub const fn new(window_days: i64) -> Self {
        Self {
            window_days,
            entries: VecDeque::new(),
        }
    }

    /// Drop entries that fall outside the window ending `today`
    pub fn evict(&mut self, today: NaiveDate) {
        while self
            .entries
            .front()
            .is_some_and(|(date, _)| (today - *date).num_days() >= self.window_days)
        {
            self.entries.pop_front();
        }
    }

    /// Record the value for `date`; dates must arrive in increasing order
    pub fn push(&mut self, date: NaiveDate, value: f64) {
        self.entries.push_back((date, value));
    }

    /// Values currently in the window, oldest first
    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        self.entries.iter().map(|(_, value)| *value).collect()
    }

    /// Largest value in the window
    #[must_use]
    pub fn max(&self) -> Option<f64> {
        self.entries
            .iter()
            .map(|(_, value)| *value)
            .reduce(f64::max)
    }
}

/// Best per-day values feeding the rolling buffers
#[derive(Debug, Clone, Copy, Default)]
struct DailyBest {
    score: Option<f64>,
    vo2: Option<f64>,
}

fn keep_max(slot: &mut Option<f64>, value: Option<f64>) {
    if let Some(v) = value {
        *slot = Some(slot.map_or(v, |current| current.max(v)));
    }
}

/// History series generator
pub struct HistoryGenerator<'a, S: TrackStatistics> {
    config: &'a IntelligenceConfig,
    statistics: &'a S,
}

impl<'a, S: TrackStatistics> HistoryGenerator<'a, S> {
    /// Bind a generator to a configuration and statistics provider
    #[must_use]
    pub const fn new(config: &'a IntelligenceConfig, statistics: &'a S) -> Self {
        Self { config, statistics }
    }

    /// One point per day from the first workout's date through `today`
    ///
    /// `workouts` must be anchored and in ascending chronological order.
    #[must_use]
    pub fn generate(
        &self,
        workouts: &[&Workout],
        profile: &AthleteProfile,
        today: NaiveDate,
    ) -> Vec<HistoryPoint> {
        let Some(first_date) = workouts.first().and_then(|w| w.anchor_date()) else {
            return Vec::new();
        };

        let loads = WorkoutLoadCalculator::new(&self.config.trimp, self.statistics, profile);
        let reference = loads.reference_speed(workouts, ReferenceSpeedStrategy::EarliestFastest);
        let daily = loads.aggregate(workouts, reference);

        let evolution = EvolutionScorer::new(self.config.evolution.clone());
        let aerobic = AerobicCapacityEstimator::new(self.config.aerobic_capacity.clone());
        let mut best_by_day: BTreeMap<NaiveDate, DailyBest> = BTreeMap::new();
        for workout in workouts {
            if let Some(date) = workout.anchor_date() {
                let best = best_by_day.entry(date).or_default();
                keep_max(&mut best.score, evolution.normalized_score(workout));
                keep_max(&mut best.vo2, aerobic.estimate_workout(workout));
            }
        }

        let training_load = TrainingLoadCalculator::new(self.config.training_load.clone());
        let decay = *training_load.decay();
        let mut scores = RollingDailyBuffer::new(self.config.history.evolution_buffer_days);
        let mut vo2 = RollingDailyBuffer::new(self.config.history.vo2_buffer_days);
        let mut state = LoadState::default();
        let mut points = Vec::new();

        for day in first_date.iter_days().take_while(|day| *day <= today) {
            state = state.advance(daily.get(day), &decay);

            scores.evict(day);
            vo2.evict(day);
            if let Some(best) = best_by_day.get(&day) {
                if let Some(score) = best.score {
                    scores.push(day, score);
                }
                if let Some(estimate) = best.vo2 {
                    vo2.push(day, estimate);
                }
            }

            points.push(HistoryPoint {
                date: day,
                ctl: state.ctl,
                atl: state.atl,
                evolution_score: evolution.top_average(&scores.values()).map_or(0.0, f64::round),
                vo2max: vo2
                    .max()
                    .unwrap_or(self.config.aerobic_capacity.default_vo2max),
            });
        }

        debug!(
            first_date = %first_date,
            days = points.len(),
            workouts = workouts.len(),
            "Generated history series"
        );
        points
    }
}
