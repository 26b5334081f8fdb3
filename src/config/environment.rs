// ABOUTME: Environment-driven engine configuration for the caller-facing service
// ABOUTME: Combines algorithm tunables, history cache sizing and logging settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Contributors

use serde::{Deserialize, Serialize};
use std::env;
use stride_core::errors::AppResult;
use stride_intelligence::IntelligenceConfig;
use tracing::warn;

use crate::logging::LoggingConfig;

/// Default number of history series kept in memory
pub const DEFAULT_CACHE_MAX_ENTRIES: usize = 64;

/// History cache configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Maximum number of history series kept in the LRU cache
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
}

const fn default_max_entries() -> usize {
    DEFAULT_CACHE_MAX_ENTRIES
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_CACHE_MAX_ENTRIES,
        }
    }
}

impl CacheConfig {
    /// Load cache configuration from environment
    #[must_use]
    pub fn from_env() -> Self {
        let max_entries = match env::var("STRIDE_CACHE_MAX_ENTRIES") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                warn!(
                    value = %raw,
                    default = DEFAULT_CACHE_MAX_ENTRIES,
                    "Invalid STRIDE_CACHE_MAX_ENTRIES, using default"
                );
                DEFAULT_CACHE_MAX_ENTRIES
            }),
            Err(_) => DEFAULT_CACHE_MAX_ENTRIES,
        };

        Self { max_entries }
    }
}

/// Complete configuration of the analytics service
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    /// Algorithm tunables
    pub intelligence: IntelligenceConfig,
    /// History cache sizing
    pub cache: CacheConfig,
    /// Logging setup
    pub logging: LoggingConfig,
}

impl EngineConfig {
    /// Load every section from environment variables
    ///
    /// # Errors
    ///
    /// Returns a `ConfigInvalid` error if the algorithm configuration fails validation
    pub fn from_env() -> AppResult<Self> {
        Ok(Self {
            intelligence: IntelligenceConfig::load()?,
            cache: CacheConfig::from_env(),
            logging: LoggingConfig::from_env(),
        })
    }

    /// Short human-readable description for startup logs
    #[must_use]
    pub fn summary(&self) -> String {
        let load = &self.intelligence.training_load;
        format!(
            "ATL {}d / CTL {}d, TRIMP {} capped at {}, history cache {} entries, log level {}",
            load.atl_days,
            load.ctl_days,
            self.intelligence.trimp.algorithm.name(),
            self.intelligence.trimp.max_load,
            self.cache.max_entries,
            self.logging.level,
        )
    }
}
