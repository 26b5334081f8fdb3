// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Contributors
// ABOUTME: Analytics commands for stride-cli
// ABOUTME: Runs the snapshot, history and prediction entry points and prints their JSON

use chrono::NaiveDate;
use serde::Serialize;
use stride_engine::errors::AppResult;
use stride_engine::intelligence::{OvertrainingRisk, TrainingStatus};
use stride_engine::{AnalyticsService, HistoryPoint, PerformanceMetrics};
use tracing::info;

use crate::helpers::input::AnalyticsInput;
use crate::helpers::output::print_json;

#[derive(Serialize)]
struct MetricsReport {
    today: NaiveDate,
    metrics: PerformanceMetrics,
    display_tsb: i64,
    training_status: TrainingStatus,
    overtraining_risk: OvertrainingRisk,
    recovery_days: u32,
}

#[derive(Serialize)]
struct PredictionRow {
    race: String,
    distance_km: f64,
    predicted_seconds: f64,
    time: String,
    pace_per_km: String,
}

/// Print snapshot metrics with their interpretations
pub fn metrics(
    service: &AnalyticsService,
    input: &AnalyticsInput,
    today: NaiveDate,
) -> AppResult<()> {
    let metrics = service.snapshot(&input.workouts, &input.profile, today);
    info!(ctl = metrics.ctl, atl = metrics.atl, "Snapshot computed");

    print_json(&MetricsReport {
        today,
        metrics,
        display_tsb: metrics.display_tsb(),
        training_status: metrics.training_status(),
        overtraining_risk: metrics.overtraining_risk(),
        recovery_days: metrics.recovery_days(),
    })
}

/// Print the history series, optionally only the trailing `last` days
pub async fn history(
    service: &AnalyticsService,
    input: AnalyticsInput,
    today: NaiveDate,
    last: Option<usize>,
) -> AppResult<()> {
    let series = service.history(input.workouts, input.profile, today).await?;
    let skip = last.map_or(0, |n| series.len().saturating_sub(n));
    let shown: &[HistoryPoint] = &series[skip..];
    print_json(&shown)
}

/// Print race predictions with formatted times and paces
pub fn predict(
    service: &AnalyticsService,
    input: &AnalyticsInput,
    today: NaiveDate,
) -> AppResult<()> {
    let rows: Vec<PredictionRow> = service
        .predictions(&input.workouts, today)
        .into_iter()
        .map(|prediction| PredictionRow {
            time: prediction.formatted_time(),
            pace_per_km: prediction.formatted_pace(),
            race: prediction.label,
            distance_km: prediction.distance_km,
            predicted_seconds: prediction.predicted_seconds,
        })
        .collect();

    if rows.is_empty() {
        info!("No qualifying effort in the prediction window");
    }
    print_json(&rows)
}
