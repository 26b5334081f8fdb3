// ABOUTME: Training load and TRIMP configuration
// ABOUTME: EWMA time constants, snapshot window, monotony limits and TRIMP reference speed settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Contributors

use serde::{Deserialize, Serialize};

use crate::algorithms::TrimpAlgorithm;

/// EWMA load model and derived-metric settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingLoadConfig {
    /// Acute load time constant (days)
    pub atl_days: i64,
    /// Chronic load time constant (days)
    pub ctl_days: i64,
    /// Days ending today walked by the snapshot recurrence
    pub snapshot_window_days: i64,
    /// Trailing days summed into weekly load and monotony
    pub weekly_days: i64,
    /// Raw monotony that maps to 100%
    pub monotony_ceiling: f64,
    /// Raw monotony reported for a week of identical non-zero loads
    pub monotony_flat_value: f64,
}

impl Default for TrainingLoadConfig {
    fn default() -> Self {
        Self {
            atl_days: 7,
            ctl_days: 42,
            snapshot_window_days: 90,
            weekly_days: 7,
            monotony_ceiling: 3.0,
            monotony_flat_value: 4.0,
        }
    }
}

/// Single-workout load settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrimpConfig {
    /// Load formula selection
    pub algorithm: TrimpAlgorithm,
    /// Upper bound applied to every workout load
    pub max_load: f64,
    /// Threshold speed used when no reference speed is available (km/h)
    pub fallback_threshold_speed_kmh: f64,
    /// Reference speed multiplier giving the threshold speed
    pub threshold_multiplier: f64,
    /// Most recent workouts inspected for the snapshot reference speed
    pub reference_sample_size: usize,
    /// Fraction of the fastest sampled workouts averaged into the reference speed
    pub reference_top_fraction: f64,
}

impl Default for TrimpConfig {
    fn default() -> Self {
        Self {
            algorithm: TrimpAlgorithm::Hybrid,
            max_load: 400.0,
            fallback_threshold_speed_kmh: 12.0,
            threshold_multiplier: 1.15,
            reference_sample_size: 20,
            reference_top_fraction: 0.2,
        }
    }
}

impl TrimpConfig {
    /// Threshold speed for the pace-based estimate
    #[must_use]
    pub fn threshold_speed(&self, reference_speed_kmh: f64) -> f64 {
        if reference_speed_kmh > 0.0 {
            reference_speed_kmh * self.threshold_multiplier
        } else {
            self.fallback_threshold_speed_kmh
        }
    }
}
