// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Contributors
// ABOUTME: Input loading helpers for stride-cli
// ABOUTME: Decodes the workout array and optional athlete profile from JSON files

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use stride_engine::errors::{AppError, AppResult};
use stride_engine::models::{AthleteProfile, Workout};
use tracing::debug;

/// Everything the engine needs from disk
pub struct AnalyticsInput {
    pub workouts: Vec<Workout>,
    pub profile: AthleteProfile,
}

impl AnalyticsInput {
    /// Load workouts and, when given, the profile; a missing profile means no heart-rate data
    pub fn load(workouts: &Path, profile: Option<&Path>) -> AppResult<Self> {
        let workouts: Vec<Workout> = read_json(workouts)?;
        let profile = profile.map_or_else(|| Ok(AthleteProfile::default()), read_json)?;

        debug!(
            workouts = workouts.len(),
            has_heart_rates = profile.heart_rate_bounds().is_some(),
            "Loaded analytics input"
        );

        Ok(Self { workouts, profile })
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let raw = fs::read_to_string(path).map_err(|e| {
        AppError::invalid_input(format!("Cannot read {}: {e}", path.display()))
            .with_field(path.display().to_string())
            .with_source(e)
    })?;

    serde_json::from_str(&raw).map_err(|e| {
        AppError::serialization(format!("Invalid JSON in {}: {e}", path.display())).with_source(e)
    })
}
