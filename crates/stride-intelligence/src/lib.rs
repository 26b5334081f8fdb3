// ABOUTME: Training-load and performance analytics engine for endurance running
// ABOUTME: Pure, synchronous algorithms plus the snapshot, history and prediction entry points
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Contributors

#![deny(unsafe_code)]

//! # Stride Intelligence
//!
//! Turns a caller-owned workout history and athlete profile into training-stress
//! series, capability scores and race predictions. Every computation is pure: no
//! state survives between calls and inputs are never mutated.
//!
//! ## Modules
//!
//! - **algorithms**: TRIMP variants, the EWMA load state and the aerobic capacity estimator
//! - **track_statistics**: the seam through which per-workout statistics are derived
//! - **daily_load**: reference speed selection and per-day load aggregation
//! - **training_load**: windowed ATL/CTL propagation and derived load metrics
//! - **marathon_shape**, **evolution**, **performance_prediction**: capability scores
//! - **history**: the day-by-day time series used for charting
//! - **engine**: `PerformanceEngine` and the convenience entry points

/// Pluggable calculation algorithms (TRIMP, EWMA load state, aerobic capacity)
pub mod algorithms;

/// Engine configuration with defaults, validation and environment overrides
pub mod config;

/// Per-workout statistics provider trait and its default implementation
pub mod track_statistics;

/// Reference speed selection and calendar-day load aggregation
pub mod daily_load;

/// Windowed ATL/CTL propagation, TSB, monotony and overtraining checks
pub mod training_load;

/// Marathon readiness scoring from long runs and weekly volume
pub mod marathon_shape;

/// Equivalent-10K normalization and the recent-versus-baseline evolution score
pub mod evolution;

/// Riegel race-time prediction and display formatting
pub mod performance_prediction;

/// Day-by-day history series generation
pub mod history;

/// Snapshot and history value objects
pub mod metrics;

/// Engine entry points
pub mod engine;

pub use config::IntelligenceConfig;
pub use engine::{
    compute_history, compute_race_predictions, compute_snapshot_metrics, PerformanceEngine,
};
pub use metrics::{HistoryPoint, PerformanceMetrics};
pub use performance_prediction::{PerformancePredictor, RacePrediction};
pub use track_statistics::{RecordedTrackStatistics, TrackStatistics, WorkoutStatistics};
pub use training_load::{OvertrainingRisk, RiskLevel, TrainingStatus};
