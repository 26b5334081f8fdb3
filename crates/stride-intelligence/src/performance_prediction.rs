// ABOUTME: Race-time predictions for standard distances from the best recent effort
// ABOUTME: Riegel power-law model plus time and pace display formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Contributors

//! Performance Prediction
//!
//! Predictions use Riegel's formula: `T2 = T1 × (D2 / D1)^1.06`.
//!
//! # Scientific References
//!
//! - Riegel, P.S. (1981). "Athletic records and human endurance." *American Scientist*, 69(3), 285-290.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use stride_core::constants::race_distances::STANDARD_RACES;
use stride_core::constants::units::SECONDS_PER_MINUTE;
use stride_core::errors::{AppError, AppResult};
use stride_core::models::Workout;
use tracing::debug;

use crate::config::PredictionConfig;
use crate::evolution::equivalent_10k_seconds;

/// Comparable effort score scale: `100000 / equivalent_10k_seconds`
const EFFORT_SCORE_SCALE: f64 = 100_000.0;

/// Predicted result for one standard race distance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RacePrediction {
    /// Target distance (km)
    pub distance_km: f64,
    /// Display label ("5K", "10K", "Half Marathon", "Marathon")
    pub label: String,
    /// Predicted finish time (seconds)
    pub predicted_seconds: f64,
    /// Predicted pace (minutes per km)
    pub pace_min_per_km: f64,
}

impl RacePrediction {
    /// Finish time as `H:MM:SS` or `M:SS`
    #[must_use]
    pub fn formatted_time(&self) -> String {
        PerformancePredictor::format_time(self.predicted_seconds)
    }

    /// Pace as `M:SS` per km
    #[must_use]
    pub fn formatted_pace(&self) -> String {
        PerformancePredictor::format_pace(self.pace_min_per_km)
    }
}

/// Race performance predictor
#[derive(Debug, Clone, Default)]
pub struct PerformancePredictor {
    config: PredictionConfig,
}

impl PerformancePredictor {
    /// Predictor with the given settings
    #[must_use]
    pub const fn new(config: PredictionConfig) -> Self {
        Self { config }
    }

    /// Predict race time using Riegel's formula
    ///
    /// `predict_time(d, t, d, e) == t` for any exponent.
    #[must_use]
    pub fn predict_time(
        known_distance: f64,
        known_time: f64,
        target_distance: f64,
        exponent: f64,
    ) -> f64 {
        known_time * (target_distance / known_distance).powf(exponent)
    }

    /// Checked Riegel prediction
    ///
    /// # Errors
    /// Returns `AppError::InvalidInput` if any distance or time is non-positive
    pub fn predict_time_riegel(
        &self,
        known_distance: f64,
        known_time: f64,
        target_distance: f64,
    ) -> AppResult<f64> {
        if known_distance <= 0.0 || known_time <= 0.0 || target_distance <= 0.0 {
            return Err(AppError::invalid_input(
                "All distances and times must be positive".to_owned(),
            ));
        }
        Ok(Self::predict_time(
            known_distance,
            known_time,
            target_distance,
            self.config.riegel_exponent,
        ))
    }

    /// Comparable score of an effort, higher is better
    #[must_use]
    pub fn effort_score(&self, distance_km: f64, duration_seconds: f64) -> f64 {
        EFFORT_SCORE_SCALE
            / equivalent_10k_seconds(distance_km, duration_seconds, self.config.riegel_exponent)
    }

    /// Best qualifying effort within the trailing window ending `today`
    #[must_use]
    pub fn find_best_effort<'w>(
        &self,
        workouts: &[&'w Workout],
        today: NaiveDate,
    ) -> Option<&'w Workout> {
        workouts
            .iter()
            .copied()
            .filter(|w| {
                w.anchor_date().is_some_and(|date| {
                    (0..self.config.window_days).contains(&(today - date).num_days())
                }) && w.distance_km() >= self.config.min_distance_km
                    && w.duration_seconds() > 0.0
            })
            .map(|w| (w, self.effort_score(w.distance_km(), w.duration_seconds())))
            .fold(None, |best: Option<(&'w Workout, f64)>, (w, score)| match best {
                Some((_, best_score)) if best_score >= score => best,
                _ => Some((w, score)),
            })
            .map(|(w, _)| w)
    }

    /// Predictions for 5K, 10K, half marathon and marathon, in that order
    ///
    /// Empty when no workout qualifies.
    #[must_use]
    pub fn predict_races(&self, workouts: &[&Workout], today: NaiveDate) -> Vec<RacePrediction> {
        let Some(best) = self.find_best_effort(workouts, today) else {
            debug!("No qualifying effort for race predictions");
            return Vec::new();
        };
        debug!(
            workout_id = best.id(),
            distance_km = best.distance_km(),
            "Predicting races from best effort"
        );

        STANDARD_RACES
            .iter()
            .map(|&(distance_km, label)| {
                let predicted_seconds = Self::predict_time(
                    best.distance_km(),
                    best.duration_seconds(),
                    distance_km,
                    self.config.riegel_exponent,
                );
                RacePrediction {
                    distance_km,
                    label: label.to_owned(),
                    predicted_seconds,
                    pace_min_per_km: predicted_seconds / SECONDS_PER_MINUTE / distance_km,
                }
            })
            .collect()
    }

    /// Format time in seconds to human-readable format (H:MM:SS or M:SS)
    #[must_use]
    pub fn format_time(seconds: f64) -> String {
        let total_seconds = seconds.max(0.0).round() as u64;
        let hours = total_seconds / 3600;
        let minutes = (total_seconds % 3600) / 60;
        let secs = total_seconds % 60;

        if hours > 0 {
            format!("{hours}:{minutes:02}:{secs:02}")
        } else {
            format!("{minutes}:{secs:02}")
        }
    }

    /// Format pace in minutes per km as `M:SS`
    #[must_use]
    pub fn format_pace(min_per_km: f64) -> String {
        if !min_per_km.is_finite() || min_per_km <= 0.0 {
            return "N/A".to_owned();
        }
        let total_seconds = (min_per_km * SECONDS_PER_MINUTE).round() as u64;
        format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use stride_core::models::WorkoutBuilder;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 9, 1).unwrap()
    }

    fn run(id: &str, km: f64, seconds: u64, days_ago: i64) -> Workout {
        let start = (today() - Duration::days(days_ago)).and_hms_opt(7, 0, 0).unwrap();
        WorkoutBuilder::new(id, km, seconds * 1000).start(start).build()
    }

    #[test]
    fn test_riegel_identity() {
        assert!(
            (PerformancePredictor::predict_time(7.3, 2011.0, 7.3, 1.06) - 2011.0).abs()
                < f64::EPSILON
        );
    }

    #[test]
    fn test_checked_prediction_rejects_zero() {
        let predictor = PerformancePredictor::default();
        assert!(predictor.predict_time_riegel(0.0, 100.0, 5.0).is_err());
        let half = predictor.predict_time_riegel(10.0, 2700.0, 5.0).unwrap();
        assert!((half - 2700.0 * 0.5_f64.powf(1.06)).abs() < 1e-9);
    }

    #[test]
    fn test_best_effort_prefers_faster_equivalent() {
        let predictor = PerformancePredictor::default();
        let slow = run("slow", 10.0, 3000, 5);
        let fast = run("fast", 5.0, 1200, 10);
        let stale = run("stale", 10.0, 2000, 90);

        let best = predictor.find_best_effort(&[&stale, &slow, &fast], today());
        assert_eq!(best.map(Workout::id), Some("fast"));
    }

    #[test]
    fn test_predictions_in_fixed_order() {
        let predictor = PerformancePredictor::default();
        let effort = run("ten", 10.0, 2700, 0);
        let predictions = predictor.predict_races(&[&effort], today());

        let labels: Vec<&str> = predictions.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, ["5K", "10K", "Half Marathon", "Marathon"]);
        assert!((predictions[1].predicted_seconds - 2700.0).abs() < f64::EPSILON);
        assert!((predictions[1].pace_min_per_km - 4.5).abs() < 1e-12);
        assert_eq!(predictions[1].formatted_pace(), "4:30");
    }

    #[test]
    fn test_no_qualifying_effort() {
        let predictor = PerformancePredictor::default();
        let short = run("short", 2.0, 600, 0);
        assert!(predictor.predict_races(&[&short], today()).is_empty());
    }

    #[test]
    fn test_format_time() {
        assert_eq!(PerformancePredictor::format_time(1295.4), "21:35");
        assert_eq!(PerformancePredictor::format_time(3725.0), "1:02:05");
        assert_eq!(PerformancePredictor::format_pace(0.0), "N/A");
    }
}
