// ABOUTME: Async analytics service wrapping the engine and the history cache
// ABOUTME: Computes history lazily on the blocking pool and serves repeats from the LRU cache
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Contributors

//! Analytics service
//!
//! Protocol-agnostic entry points for presentation code. Snapshot and
//! prediction calls are cheap and run inline. History is the expensive one: it
//! walks every day since the first workout, so it runs on
//! `tokio::task::spawn_blocking` and the result is cached by fingerprint.

use std::sync::Arc;

use chrono::NaiveDate;
use stride_core::errors::{AppError, AppResult};
use stride_core::models::{AthleteProfile, Workout};
use stride_intelligence::{PerformanceEngine, PerformanceMetrics, RacePrediction};
use tokio::task;
use tracing::{debug, info};

use crate::cache::memory::SharedHistory;
use crate::cache::{HistoryCache, WorkoutFingerprint};
use crate::config::EngineConfig;

struct ServiceInner {
    engine: PerformanceEngine,
    cache: HistoryCache,
}

/// Cloneable handle to the engine and its history cache
#[derive(Clone)]
pub struct AnalyticsService {
    inner: Arc<ServiceInner>,
}

impl AnalyticsService {
    /// Build the service from configuration
    #[must_use]
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            inner: Arc::new(ServiceInner {
                engine: PerformanceEngine::new(config.intelligence.clone()),
                cache: HistoryCache::new(&config.cache),
            }),
        }
    }

    /// Underlying engine
    #[must_use]
    pub fn engine(&self) -> &PerformanceEngine {
        &self.inner.engine
    }

    /// History cache shared by every clone of this service
    #[must_use]
    pub fn cache(&self) -> &HistoryCache {
        &self.inner.cache
    }

    /// Performance snapshot as of `today`
    #[must_use]
    pub fn snapshot(
        &self,
        workouts: &[Workout],
        profile: &AthleteProfile,
        today: NaiveDate,
    ) -> PerformanceMetrics {
        self.inner.engine.snapshot_metrics(workouts, profile, today)
    }

    /// Race predictions as of `today`
    #[must_use]
    pub fn predictions(&self, workouts: &[Workout], today: NaiveDate) -> Vec<RacePrediction> {
        self.inner.engine.race_predictions(workouts, today)
    }

    /// Daily history through `today`, served from cache when inputs are unchanged
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the inputs cannot be fingerprinted, or an
    /// internal error if the blocking computation task fails to complete
    pub async fn history(
        &self,
        workouts: Vec<Workout>,
        profile: AthleteProfile,
        today: NaiveDate,
    ) -> AppResult<SharedHistory> {
        let fingerprint = WorkoutFingerprint::compute(&workouts, &profile, today)?;

        if let Some(cached) = self.inner.cache.get(&fingerprint).await {
            info!(
                fingerprint = %fingerprint,
                days = cached.len(),
                "History served from cache"
            );
            return Ok(cached);
        }

        let inner = Arc::clone(&self.inner);
        let workout_count = workouts.len();
        let series = task::spawn_blocking(move || inner.engine.history(&workouts, &profile, today))
            .await
            .map_err(|e| {
                AppError::internal(format!("History computation failed: {e}")).with_source(e)
            })?;

        let series = Arc::new(series);
        self.inner
            .cache
            .insert(fingerprint.clone(), Arc::clone(&series))
            .await;

        info!(
            fingerprint = %fingerprint,
            workouts = workout_count,
            days = series.len(),
            "History computed"
        );
        let cached = self.inner.cache.len().await;
        debug!(cached, "History cache size");

        Ok(series)
    }
}
