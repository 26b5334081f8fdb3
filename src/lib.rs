// ABOUTME: Main library entry point for the Stride analytics engine
// ABOUTME: Re-exports the engine and hosts logging, configuration, history cache and async service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Contributors

#![deny(unsafe_code)]

//! # Stride
//!
//! Training-load and performance analytics for runners. Given a workout history
//! and an athlete profile, Stride computes training stress (TRIMP, ATL, CTL,
//! TSB), capability scores (VO2max, marathon shape, evolution score) and race
//! predictions.
//!
//! ## Architecture
//!
//! - **`stride_core`**: errors, workout and athlete models, constants
//! - **`stride_intelligence`**: the pure algorithms and `PerformanceEngine`
//! - **this crate**: environment configuration, logging, the history cache and
//!   `AnalyticsService`, the async entry point for presentation code
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use chrono::Local;
//! use stride_engine::config::EngineConfig;
//! use stride_engine::errors::AppResult;
//! use stride_engine::service::AnalyticsService;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = EngineConfig::from_env()?;
//!     let service = AnalyticsService::new(&config);
//!
//!     let today = Local::now().date_naive();
//!     let history = service.history(Vec::new(), Default::default(), today).await?;
//!     println!("{} days of history", history.len());
//!
//!     Ok(())
//! }
//! ```

/// Explicit history cache keyed by input fingerprint
pub mod cache;

/// Environment-driven configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// Async analytics service
pub mod service;

/// Unified error types
pub mod errors {
    pub use stride_core::errors::*;
}

/// Workout and athlete models
pub mod models {
    pub use stride_core::models::*;
}

/// Engine algorithms and entry points
pub mod intelligence {
    pub use stride_intelligence::*;
}

pub use service::AnalyticsService;
pub use stride_intelligence::{
    compute_history, compute_race_predictions, compute_snapshot_metrics, HistoryPoint,
    PerformanceEngine, PerformanceMetrics, RacePrediction,
};
