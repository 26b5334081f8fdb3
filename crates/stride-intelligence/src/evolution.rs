// ABOUTME: Equivalent-10K normalization and the recent-versus-baseline evolution score
// ABOUTME: Top-average of each window suppresses easy runs and reflects demonstrated capability
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Contributors

//! Evolution Score
//!
//! Every qualifying workout is projected to an equivalent 10 km time with
//! Riegel's formula and scored as ten times the equivalent 10 km speed (km/h).
//! Scores from the last month are compared against the two months before.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use stride_core::constants::race_distances::DISTANCE_10K;
use stride_core::constants::units::SECONDS_PER_HOUR;
use stride_core::models::Workout;

use crate::config::EvolutionConfig;

/// Score scale applied to the equivalent 10 km speed
const SCORE_SCALE: f64 = 10.0;

/// Equivalent 10 km time (seconds) for an effort
///
/// Formula: `T_10k = T × (10 / D)^exponent`
#[must_use]
pub fn equivalent_10k_seconds(distance_km: f64, duration_seconds: f64, exponent: f64) -> f64 {
    duration_seconds * (DISTANCE_10K / distance_km).powf(exponent)
}

/// Evolution outcome for one day
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Evolution {
    /// Rounded recent top-average
    pub score: f64,
    /// Percent change of the recent top-average over the baseline
    pub trend_percent: f64,
    /// Unrounded recent top-average, `None` when the window is empty
    pub recent_average: Option<f64>,
    /// Baseline top-average, `None` when the window is empty
    pub baseline_average: Option<f64>,
}

/// Evolution scorer
#[derive(Debug, Clone, Default)]
pub struct EvolutionScorer {
    config: EvolutionConfig,
}

impl EvolutionScorer {
    /// Scorer with the given settings
    #[must_use]
    pub const fn new(config: EvolutionConfig) -> Self {
        Self { config }
    }

    /// Normalized score for one workout, `None` if it does not qualify
    #[must_use]
    pub fn normalized_score(&self, workout: &Workout) -> Option<f64> {
        let distance_km = workout.distance_km();
        let duration_seconds = workout.duration_seconds();
        if distance_km < self.config.min_distance_km || duration_seconds <= 0.0 {
            return None;
        }
        let predicted_10k =
            equivalent_10k_seconds(distance_km, duration_seconds, self.config.riegel_exponent);
        Some(DISTANCE_10K / (predicted_10k / SECONDS_PER_HOUR) * SCORE_SCALE)
    }

    /// Mean of the best `top_fraction` of the scores (at least one), `None` if empty
    #[must_use]
    pub fn top_average(&self, scores: &[f64]) -> Option<f64> {
        if scores.is_empty() {
            return None;
        }
        let mut sorted = scores.to_vec();
        sorted.sort_by(|a, b| b.total_cmp(a));
        let top = ((sorted.len() as f64 * self.config.top_fraction).ceil() as usize)
            .clamp(1, sorted.len());
        Some(sorted[..top].iter().sum::<f64>() / top as f64)
    }

    /// Score and trend as of `today`
    #[must_use]
    pub fn evaluate(&self, workouts: &[&Workout], today: NaiveDate) -> Evolution {
        let mut recent = Vec::new();
        let mut baseline = Vec::new();

        for workout in workouts {
            let Some(date) = workout.anchor_date() else {
                continue;
            };
            let Some(score) = self.normalized_score(workout) else {
                continue;
            };
            let days_ago = (today - date).num_days();
            if (0..self.config.recent_days).contains(&days_ago) {
                recent.push(score);
            } else if (self.config.recent_days..self.config.baseline_days).contains(&days_ago) {
                baseline.push(score);
            }
        }

        let recent_average = self.top_average(&recent);
        let baseline_average = self.top_average(&baseline);
        Evolution {
            score: recent_average.map_or(0.0, f64::round),
            trend_percent: trend_percent(recent_average, baseline_average),
            recent_average,
            baseline_average,
        }
    }
}

/// Percent change of `recent` over `baseline`
///
/// 100 when only the recent window has data, 0 when the recent window is empty.
#[must_use]
pub fn trend_percent(recent: Option<f64>, baseline: Option<f64>) -> f64 {
    match (recent, baseline) {
        (Some(r), Some(b)) if b > 0.0 => (r - b) / b * 100.0,
        (Some(_), None) => 100.0,
        _ => 0.0,
    }
}
