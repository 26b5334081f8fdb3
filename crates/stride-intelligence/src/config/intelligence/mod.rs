// ABOUTME: Engine configuration container with unified validation and environment overrides
// ABOUTME: Groups training load, TRIMP, capability score, prediction and history settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Contributors

//! Intelligence Configuration Module
//!
//! Configuration is an explicit value handed to `PerformanceEngine`; there is no
//! process-wide instance. Defaults reproduce the published model constants.
//!
//! # Module Structure
//!
//! - `load` - EWMA time constants, snapshot window, monotony and TRIMP settings
//! - `performance` - marathon shape, aerobic capacity, evolution, prediction and history
//! - `error` - validation errors

pub mod error;
pub mod load;
pub mod performance;

pub use error::ConfigError;
pub use load::{TrainingLoadConfig, TrimpConfig};
pub use performance::{
    AerobicCapacityConfig, EvolutionConfig, HistoryConfig, LongRunTier, MarathonShapeConfig,
    PredictionConfig,
};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use stride_core::errors::AppResult;
use tracing::warn;

/// Main engine configuration container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// EWMA load model and derived metrics
    pub training_load: TrainingLoadConfig,
    /// Single-workout load
    pub trimp: TrimpConfig,
    /// Marathon readiness score
    pub marathon_shape: MarathonShapeConfig,
    /// Aerobic capacity estimate
    pub aerobic_capacity: AerobicCapacityConfig,
    /// Evolution score
    pub evolution: EvolutionConfig,
    /// Race prediction
    pub prediction: PredictionConfig,
    /// History series buffers
    pub history: HistoryConfig,
}

impl IntelligenceConfig {
    /// Defaults overlaid with `STRIDE_*` environment variables
    ///
    /// Unparsable values are logged and the default is kept.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        Self::apply_env_var("STRIDE_ATL_DAYS", &mut config.training_load.atl_days);
        Self::apply_env_var("STRIDE_CTL_DAYS", &mut config.training_load.ctl_days);
        Self::apply_env_var(
            "STRIDE_SNAPSHOT_WINDOW_DAYS",
            &mut config.training_load.snapshot_window_days,
        );
        Self::apply_env_var("STRIDE_TRIMP_MAX_LOAD", &mut config.trimp.max_load);
        Self::apply_env_var("STRIDE_TRIMP_ALGORITHM", &mut config.trimp.algorithm);

        let mut riegel_exponent = config.prediction.riegel_exponent;
        Self::apply_env_var("STRIDE_RIEGEL_EXPONENT", &mut riegel_exponent);
        config.prediction.riegel_exponent = riegel_exponent;
        config.evolution.riegel_exponent = riegel_exponent;

        config
    }

    /// Load from the environment and validate
    ///
    /// # Errors
    ///
    /// Returns a `ConfigInvalid` error if the resulting configuration fails validation
    pub fn load() -> AppResult<Self> {
        let config = Self::from_env();
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns a `ConfigInvalid` error naming the first offending setting
    pub fn validate(&self) -> AppResult<()> {
        self.validate_training_load()?;
        self.validate_trimp()?;
        self.validate_marathon_shape()?;
        self.validate_capability()?;
        self.validate_prediction()?;
        Ok(())
    }

    fn validate_training_load(&self) -> Result<(), ConfigError> {
        let load = &self.training_load;
        if load.atl_days <= 0 || load.ctl_days <= 0 {
            return Err(ConfigError::ValueOutOfRange(
                "atl_days and ctl_days must be positive",
            ));
        }
        if load.atl_days >= load.ctl_days {
            return Err(ConfigError::InvalidRange(
                "atl_days must be shorter than ctl_days",
            ));
        }
        if load.snapshot_window_days <= 0 || load.weekly_days <= 0 {
            return Err(ConfigError::ValueOutOfRange(
                "snapshot_window_days and weekly_days must be positive",
            ));
        }
        if load.weekly_days > load.snapshot_window_days {
            return Err(ConfigError::InvalidRange(
                "weekly_days must fit inside snapshot_window_days",
            ));
        }
        validate_positive(load.monotony_ceiling, "monotony_ceiling must be positive")?;
        validate_positive(load.monotony_flat_value, "monotony_flat_value must be positive")
    }

    fn validate_trimp(&self) -> Result<(), ConfigError> {
        let trimp = &self.trimp;
        validate_positive(trimp.max_load, "trimp max_load must be positive")?;
        validate_positive(
            trimp.fallback_threshold_speed_kmh,
            "fallback threshold speed must be positive",
        )?;
        validate_positive(
            trimp.threshold_multiplier,
            "threshold multiplier must be positive",
        )?;
        if trimp.reference_sample_size == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "reference_sample_size must be at least 1",
            ));
        }
        validate_fraction(trimp.reference_top_fraction, "reference_top_fraction")
    }

    fn validate_marathon_shape(&self) -> Result<(), ConfigError> {
        let shape = &self.marathon_shape;
        if shape.window_days < 7 {
            return Err(ConfigError::ValueOutOfRange(
                "marathon shape window must cover at least one week",
            ));
        }
        validate_non_negative(shape.long_run_min_km, "long_run_min_km must not be negative")?;
        validate_positive(shape.long_run_target, "long_run_target must be positive")?;
        validate_positive(
            shape.weekly_volume_target_km,
            "weekly_volume_target_km must be positive",
        )?;
        validate_non_negative(shape.base_points, "base_points must not be negative")?;
        validate_non_negative(shape.weekly_decay, "weekly_decay must not be negative")?;
        validate_unit_interval(shape.decay_floor, "decay_floor must lie in [0, 1]")?;
        validate_unit_interval(shape.volume_weight, "volume_weight must lie in [0, 1]")?;
        validate_unit_interval(shape.long_run_weight, "long_run_weight must lie in [0, 1]")?;
        if (shape.volume_weight + shape.long_run_weight - 1.0).abs() > 1e-9 {
            return Err(ConfigError::InvalidWeights(
                "volume_weight and long_run_weight must sum to 1",
            ));
        }
        for tier in &shape.tiers {
            validate_non_negative(tier.points, "long run tier points must not be negative")?;
            validate_positive(
                tier.min_distance_km,
                "long run tier distances must be positive",
            )?;
        }
        if shape
            .tiers
            .windows(2)
            .any(|pair| pair[0].min_distance_km <= pair[1].min_distance_km)
        {
            return Err(ConfigError::InvalidRange(
                "long run tiers must be ordered from longest to shortest",
            ));
        }
        Ok(())
    }

    fn validate_capability(&self) -> Result<(), ConfigError> {
        let aerobic = &self.aerobic_capacity;
        if aerobic.sample_size == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "aerobic capacity sample_size must be at least 1",
            ));
        }
        validate_positive(aerobic.ceiling, "aerobic capacity ceiling must be positive")?;
        validate_positive(
            aerobic.default_vo2max,
            "aerobic capacity default must be positive",
        )?;
        validate_positive(
            aerobic.correction_floor,
            "aerobic capacity correction_floor must be positive",
        )?;
        validate_non_negative(
            aerobic.min_distance_km,
            "aerobic capacity min_distance_km must not be negative",
        )?;

        let evolution = &self.evolution;
        if evolution.recent_days <= 0 || evolution.baseline_days <= evolution.recent_days {
            return Err(ConfigError::InvalidRange(
                "evolution baseline must extend past a positive recent window",
            ));
        }
        validate_fraction(evolution.top_fraction, "evolution top_fraction")?;
        validate_positive(evolution.riegel_exponent, "riegel exponent must be positive")?;
        validate_non_negative(
            evolution.min_distance_km,
            "evolution min_distance_km must not be negative",
        )
    }

    fn validate_prediction(&self) -> Result<(), ConfigError> {
        let prediction = &self.prediction;
        validate_positive(prediction.riegel_exponent, "riegel exponent must be positive")?;
        validate_non_negative(
            prediction.min_distance_km,
            "prediction min_distance_km must not be negative",
        )?;
        if prediction.window_days <= 0 {
            return Err(ConfigError::ValueOutOfRange(
                "prediction window_days must be positive",
            ));
        }
        if self.history.evolution_buffer_days <= 0 || self.history.vo2_buffer_days <= 0 {
            return Err(ConfigError::ValueOutOfRange(
                "history buffer windows must be positive",
            ));
        }
        Ok(())
    }

    /// Parse and apply an environment variable override, keeping the current value on failure
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) {
        if let Ok(raw) = env::var(env_var_name) {
            match raw.trim().parse() {
                Ok(value) => *target = value,
                Err(_) => warn!(
                    variable = env_var_name,
                    value = %raw,
                    "Ignoring unparsable configuration override, keeping default"
                ),
            }
        }
    }
}

// Every float check also rejects NaN and infinities, which compare false against any bound

fn validate_positive(value: f64, message: &'static str) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::ValueOutOfRange(message))
    }
}

fn validate_non_negative(value: f64, message: &'static str) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::ValueOutOfRange(message))
    }
}

fn validate_unit_interval(value: f64, message: &'static str) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::ValueOutOfRange(message))
    }
}

fn validate_fraction(value: f64, name: &'static str) -> Result<(), ConfigError> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(ConfigError::ValueOutOfRange(name))
    }
}
