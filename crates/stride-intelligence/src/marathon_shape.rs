// ABOUTME: Marathon readiness score from decayed long runs and average weekly volume
// ABOUTME: Produces a 0-100 percentage over a trailing ten-week window
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Contributors

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use stride_core::constants::units::DAYS_PER_WEEK;
use stride_core::models::Workout;

use crate::config::MarathonShapeConfig;

/// Breakdown of a marathon shape score
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MarathonShape {
    /// Average weekly kilometers over the window
    pub weekly_volume_km: f64,
    /// Decayed long-run points
    pub long_run_score: f64,
    /// Volume component (0-100)
    pub volume_percent: f64,
    /// Long-run component (0-100)
    pub long_run_percent: f64,
    /// Weighted final score (0-100)
    pub score: f64,
}

/// Marathon shape scorer
#[derive(Debug, Clone, Default)]
pub struct MarathonShapeScorer {
    config: MarathonShapeConfig,
}

impl MarathonShapeScorer {
    /// Scorer with the given settings
    #[must_use]
    pub const fn new(config: MarathonShapeConfig) -> Self {
        Self { config }
    }

    /// Points for one long run before decay
    #[must_use]
    pub fn long_run_points(&self, distance_km: f64) -> f64 {
        self.config
            .tiers
            .iter()
            .find(|tier| distance_km >= tier.min_distance_km)
            .map_or(self.config.base_points, |tier| tier.points)
    }

    /// Decay multiplier for a run `weeks_ago` weeks old
    #[must_use]
    pub fn decay(&self, weeks_ago: f64) -> f64 {
        (1.0 - weeks_ago * self.config.weekly_decay).max(self.config.decay_floor)
    }

    /// Score the workouts anchored within the trailing window ending `today`
    #[must_use]
    pub fn score(&self, workouts: &[&Workout], today: NaiveDate) -> MarathonShape {
        let mut total_km = 0.0;
        let mut long_run_score = 0.0;

        for workout in workouts {
            let Some(date) = workout.anchor_date() else {
                continue;
            };
            let days_ago = (today - date).num_days();
            if !(0..self.config.window_days).contains(&days_ago) {
                continue;
            }

            total_km += workout.distance_km();
            if workout.distance_km() > self.config.long_run_min_km {
                let weeks_ago = days_ago as f64 / DAYS_PER_WEEK;
                long_run_score +=
                    self.long_run_points(workout.distance_km()) * self.decay(weeks_ago);
            }
        }

        let weeks = self.config.window_days as f64 / DAYS_PER_WEEK;
        let weekly_volume_km = total_km / weeks;
        let volume_percent =
            (weekly_volume_km / self.config.weekly_volume_target_km * 100.0).min(100.0);
        let long_run_percent = (long_run_score / self.config.long_run_target * 100.0).min(100.0);

        MarathonShape {
            weekly_volume_km,
            long_run_score,
            volume_percent,
            long_run_percent,
            score: volume_percent.mul_add(
                self.config.volume_weight,
                long_run_percent * self.config.long_run_weight,
            ),
        }
    }
}
