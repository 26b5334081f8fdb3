// ABOUTME: Snapshot and history value objects returned by the engine
// ABOUTME: PerformanceMetrics with TSB interpretation helpers and per-day HistoryPoint
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Contributors

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::training_load::{OvertrainingRisk, TrainingLoadCalculator, TrainingStatus};

/// Performance snapshot as of one day
///
/// An empty workout history yields `PerformanceMetrics::default()`, every field zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    /// Estimated VO2max (ml/kg/min)
    pub vo2max: f64,
    /// Marathon readiness (0-100)
    pub marathon_shape: f64,
    /// Acute training load
    pub atl: f64,
    /// Chronic training load
    pub ctl: f64,
    /// Training Stress Balance (CTL - ATL), unrounded
    pub tsb: f64,
    /// ATL / CTL rounded to 2 decimals, 0 when CTL is 0
    pub workload_ratio: f64,
    /// Load of the most recent workout
    pub last_trimp: f64,
    /// Monotony as a percentage (0-100)
    pub monotony: f64,
    /// Sum of the trailing week of daily loads
    pub weekly_load: f64,
    /// Rounded evolution score
    pub evolution_score: f64,
    /// Evolution trend (percent)
    pub evolution_trend: f64,
}

impl PerformanceMetrics {
    /// TSB rounded to the nearest integer for display
    #[must_use]
    pub fn display_tsb(&self) -> i64 {
        self.tsb.round() as i64
    }

    /// Freshness interpretation of TSB
    #[must_use]
    pub fn training_status(&self) -> TrainingStatus {
        TrainingLoadCalculator::interpret_tsb(self.tsb)
    }

    /// Overtraining risk from ATL, CTL and TSB
    #[must_use]
    pub fn overtraining_risk(&self) -> OvertrainingRisk {
        TrainingLoadCalculator::check_overtraining_risk(self.atl, self.ctl, self.tsb)
    }

    /// Suggested recovery days from TSB
    #[must_use]
    pub fn recovery_days(&self) -> u32 {
        TrainingLoadCalculator::recommend_recovery_days(self.tsb)
    }
}

/// One day of the history series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    /// Calendar date
    pub date: NaiveDate,
    /// Chronic training load
    pub ctl: f64,
    /// Acute training load
    pub atl: f64,
    /// Rounded evolution score over the trailing buffer
    pub evolution_score: f64,
    /// Best VO2max estimate over the trailing buffer
    pub vo2max: f64,
}

impl HistoryPoint {
    /// Training Stress Balance for the day
    #[must_use]
    pub fn tsb(&self) -> f64 {
        self.ctl - self.atl
    }
}
