// ABOUTME: Configuration module for stride-intelligence crate
// ABOUTME: Re-exports engine configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Contributors

/// Engine tunables (load model, TRIMP, capability scores, history)
pub mod intelligence;

pub use intelligence::{
    AerobicCapacityConfig, ConfigError, EvolutionConfig, HistoryConfig, IntelligenceConfig,
    LongRunTier, MarathonShapeConfig, PredictionConfig, TrainingLoadConfig, TrimpConfig,
};
