// ABOUTME: Capability score configuration for marathon shape, aerobic capacity and evolution
// ABOUTME: Also holds race prediction and history buffer windows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Contributors

//! Capability Score Configuration
//!
//! Distances are kilometers. A window of `n` days covers today and the `n - 1`
//! days before it, the same span the history buffers keep.

use serde::{Deserialize, Serialize};
use stride_core::constants::physiology::RIEGEL_EXPONENT;

/// Points awarded to a long run of at least `min_distance_km`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LongRunTier {
    /// Inclusive lower bound (km)
    pub min_distance_km: f64,
    /// Points before decay
    pub points: f64,
}

/// Marathon readiness scoring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarathonShapeConfig {
    /// Trailing days considered
    pub window_days: i64,
    /// Runs must be strictly longer than this to count as long runs (km)
    pub long_run_min_km: f64,
    /// Tiers ordered from longest to shortest
    pub tiers: Vec<LongRunTier>,
    /// Points for a long run below every tier
    pub base_points: f64,
    /// Decay lost per week of age
    pub weekly_decay: f64,
    /// Lowest decay multiplier
    pub decay_floor: f64,
    /// Long-run score that maps to 100%
    pub long_run_target: f64,
    /// Average weekly kilometers that map to 100%
    pub weekly_volume_target_km: f64,
    /// Weight of the volume percentage
    pub volume_weight: f64,
    /// Weight of the long-run percentage
    pub long_run_weight: f64,
}

impl Default for MarathonShapeConfig {
    fn default() -> Self {
        Self {
            window_days: 70,
            long_run_min_km: 13.0,
            tiers: vec![
                LongRunTier {
                    min_distance_km: 30.0,
                    points: 3.0,
                },
                LongRunTier {
                    min_distance_km: 25.0,
                    points: 2.2,
                },
                LongRunTier {
                    min_distance_km: 20.0,
                    points: 1.5,
                },
                LongRunTier {
                    min_distance_km: 15.0,
                    points: 0.8,
                },
            ],
            base_points: 0.4,
            weekly_decay: 0.08,
            decay_floor: 0.2,
            long_run_target: 12.0,
            weekly_volume_target_km: 80.0,
            volume_weight: 0.4,
            long_run_weight: 0.6,
        }
    }
}

/// Aerobic capacity (VO2max) estimation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AerobicCapacityConfig {
    /// Most recent qualifying workouts inspected
    pub sample_size: usize,
    /// Minimum qualifying distance (km)
    pub min_distance_km: f64,
    /// Estimates must be strictly below this to be accepted
    pub ceiling: f64,
    /// Reported when workouts exist but none yields an accepted estimate
    pub default_vo2max: f64,
    /// Lowest duration correction factor
    pub correction_floor: f64,
}

impl Default for AerobicCapacityConfig {
    fn default() -> Self {
        Self {
            sample_size: 15,
            min_distance_km: 3.0,
            ceiling: 85.0,
            default_vo2max: 35.0,
            correction_floor: 0.8,
        }
    }
}

/// Evolution score windows and normalization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionConfig {
    /// Recent window length in days, today included
    pub recent_days: i64,
    /// Baseline window end (days ago, exclusive); it starts where the recent window ends
    pub baseline_days: i64,
    /// Fraction of the best scores averaged per window
    pub top_fraction: f64,
    /// Riegel exponent used for 10K normalization
    pub riegel_exponent: f64,
    /// Minimum qualifying distance (km)
    pub min_distance_km: f64,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            recent_days: 30,
            baseline_days: 90,
            top_fraction: 0.5,
            riegel_exponent: RIEGEL_EXPONENT,
            min_distance_km: 3.0,
        }
    }
}

/// Race prediction settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionConfig {
    /// Trailing days searched for the best effort
    pub window_days: i64,
    /// Minimum qualifying distance (km)
    pub min_distance_km: f64,
    /// Riegel fatigue exponent
    pub riegel_exponent: f64,
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            window_days: 90,
            min_distance_km: 3.0,
            riegel_exponent: RIEGEL_EXPONENT,
        }
    }
}

/// Rolling buffer windows for the history series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Days of daily best normalized scores kept for the evolution score
    pub evolution_buffer_days: i64,
    /// Days of daily best VO2 estimates kept for the VO2max series
    pub vo2_buffer_days: i64,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            evolution_buffer_days: 30,
            vo2_buffer_days: 60,
        }
    }
}
