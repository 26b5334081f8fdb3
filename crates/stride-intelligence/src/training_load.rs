// ABOUTME: Windowed ATL/CTL propagation with TSB, workload ratio, weekly load and monotony
// ABOUTME: Also interprets TSB, flags overtraining risk and recommends recovery days
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Contributors

//! Training Load
//!
//! Every calendar day between the window start and today inclusive is visited
//! in order, including days without training. Skipping a zero day would stop
//! the decay and silently corrupt the 7/42-day half-life semantics.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::algorithms::{LoadDecay, LoadState};
use crate::config::TrainingLoadConfig;
use crate::daily_load::DailyLoad;

/// Load metrics as of one day
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainingLoad {
    /// Acute training load (fatigue)
    pub atl: f64,
    /// Chronic training load (fitness)
    pub ctl: f64,
    /// Training Stress Balance (CTL - ATL), unrounded
    pub tsb: f64,
    /// ATL / CTL rounded to 2 decimals, 0 when CTL is 0
    pub workload_ratio: f64,
    /// Sum of the trailing week of daily loads
    pub weekly_load: f64,
    /// Mean / standard deviation of the trailing week of daily loads
    pub monotony: f64,
    /// Monotony scaled to 0-100
    pub monotony_percent: f64,
}

/// Windowed training load calculator
#[derive(Debug, Clone)]
pub struct TrainingLoadCalculator {
    config: TrainingLoadConfig,
    decay: LoadDecay,
}

impl Default for TrainingLoadCalculator {
    fn default() -> Self {
        Self::new(TrainingLoadConfig::default())
    }
}

impl TrainingLoadCalculator {
    /// Calculator with the given settings
    #[must_use]
    pub fn new(config: TrainingLoadConfig) -> Self {
        let decay = LoadDecay::new(config.atl_days as f64, config.ctl_days as f64);
        Self { config, decay }
    }

    /// Decay factors in use
    #[must_use]
    pub const fn decay(&self) -> &LoadDecay {
        &self.decay
    }

    /// First day of the snapshot window ending `today`
    #[must_use]
    pub fn snapshot_start(&self, today: NaiveDate) -> NaiveDate {
        today - Duration::days(self.config.snapshot_window_days - 1)
    }

    /// State after folding every day from `start` through `end` inclusive
    #[must_use]
    pub fn propagate(&self, daily: &DailyLoad, start: NaiveDate, end: NaiveDate) -> LoadState {
        start
            .iter_days()
            .take_while(|day| *day <= end)
            .fold(LoadState::default(), |state, day| {
                state.advance(daily.get(day), &self.decay)
            })
    }

    /// One state per day from `start` through `end` inclusive
    #[must_use]
    pub fn series(
        &self,
        daily: &DailyLoad,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Vec<(NaiveDate, LoadState)> {
        start
            .iter_days()
            .take_while(|day| *day <= end)
            .scan(LoadState::default(), |state, day| {
                *state = state.advance(daily.get(day), &self.decay);
                Some((day, *state))
            })
            .collect()
    }

    /// Snapshot load metrics over the window ending `today`
    #[must_use]
    pub fn snapshot(&self, daily: &DailyLoad, today: NaiveDate) -> TrainingLoad {
        let state = self.propagate(daily, self.snapshot_start(today), today);
        let week = self.trailing_week(daily, today);
        let monotony = self.monotony(&week);

        TrainingLoad {
            atl: state.atl,
            ctl: state.ctl,
            tsb: state.tsb(),
            workload_ratio: round_to_hundredths(state.workload_ratio()),
            weekly_load: week.iter().sum(),
            monotony,
            monotony_percent: self.monotony_percent(monotony),
        }
    }

    /// Daily loads of the trailing week ending `today`, oldest first
    #[must_use]
    pub fn trailing_week(&self, daily: &DailyLoad, today: NaiveDate) -> Vec<f64> {
        (0..self.config.weekly_days)
            .rev()
            .map(|days_ago| daily.get(today - Duration::days(days_ago)))
            .collect()
    }

    /// Raw monotony: mean / population standard deviation
    ///
    /// A flat non-zero week reports the configured flat value; an empty week is 0.
    #[must_use]
    pub fn monotony(&self, loads: &[f64]) -> f64 {
        if loads.is_empty() {
            return 0.0;
        }
        let n = loads.len() as f64;
        let mean = loads.iter().sum::<f64>() / n;
        if mean <= 0.0 {
            return 0.0;
        }
        let variance = loads.iter().map(|l| (l - mean).powi(2)).sum::<f64>() / n;
        let std_dev = variance.sqrt();
        if std_dev > 0.0 {
            mean / std_dev
        } else {
            self.config.monotony_flat_value
        }
    }

    /// Monotony as a 0-100 percentage of the configured ceiling
    #[must_use]
    pub fn monotony_percent(&self, monotony: f64) -> f64 {
        (monotony / self.config.monotony_ceiling * 100.0).min(100.0)
    }

    /// Interpret TSB value and provide status
    #[must_use]
    pub fn interpret_tsb(tsb: f64) -> TrainingStatus {
        if tsb < -10.0 {
            TrainingStatus::Overreaching
        } else if tsb < 0.0 {
            TrainingStatus::Productive
        } else if tsb <= 10.0 {
            TrainingStatus::Fresh
        } else {
            TrainingStatus::Detraining
        }
    }

    /// Check if athlete is at risk of overtraining
    ///
    /// Warning conditions:
    /// - ATL > CTL x 1.3: Acute load spike
    /// - ATL > 150: Very high acute load
    /// - TSB < -10: Deep fatigue
    #[must_use]
    pub fn check_overtraining_risk(atl: f64, ctl: f64, tsb: f64) -> OvertrainingRisk {
        let mut risk_factors = Vec::new();

        if ctl > 0.0 && atl > ctl * 1.3 {
            risk_factors
                .push("Acute training load spike detected (>30% above chronic load)".to_owned());
        }
        if atl > 150.0 {
            risk_factors.push("Very high acute training load (>150 per day)".to_owned());
        }
        if tsb < -10.0 {
            risk_factors.push("Deep fatigue detected (TSB < -10) - recovery needed".to_owned());
        }

        let risk_level = match risk_factors.len() {
            0 => RiskLevel::Low,
            1 => RiskLevel::Moderate,
            _ => RiskLevel::High,
        };

        OvertrainingRisk {
            risk_level,
            risk_factors,
        }
    }

    /// Calculate recommended recovery days based on TSB
    #[must_use]
    pub fn recommend_recovery_days(tsb: f64) -> u32 {
        const VERY_DEEP_FATIGUE: f64 = -20.0;
        const DEEP_FATIGUE: f64 = -15.0;
        const MODERATE_FATIGUE: f64 = -10.0;
        const LIGHT_FATIGUE: f64 = 0.0;

        if tsb < VERY_DEEP_FATIGUE {
            5
        } else if tsb < DEEP_FATIGUE {
            3
        } else if tsb < MODERATE_FATIGUE {
            2
        } else if tsb < LIGHT_FATIGUE {
            1
        } else {
            0
        }
    }
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Training status based on TSB
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrainingStatus {
    /// TSB < -10: Overreaching, high fatigue
    Overreaching,
    /// TSB -10 to 0: Productive training zone
    Productive,
    /// TSB 0 to +10: Fresh, ready to perform
    Fresh,
    /// TSB > +10: Risk of detraining
    Detraining,
}

/// Risk level for overtraining
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    /// Low risk of overtraining
    Low,
    /// Moderate risk - monitor closely
    Moderate,
    /// High risk - rest recommended
    High,
}

/// Overtraining risk assessment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertrainingRisk {
    /// Overall risk level
    pub risk_level: RiskLevel,
    /// Specific risk factors identified
    pub risk_factors: Vec<String>,
}
