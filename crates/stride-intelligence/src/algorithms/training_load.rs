// ABOUTME: Exponentially weighted ATL/CTL recurrence over a daily load grid
// ABOUTME: LoadDecay holds the per-day decay factors, LoadState is the immutable per-step record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Contributors

use serde::{Deserialize, Serialize};

/// Per-day decay factors for the acute and chronic loads
///
/// Formula: `decay = exp(-1 / time_constant_days)`
///
/// # Scientific References
///
/// - Banister, E.W. (1991). "Modeling elite athletic performance." *Physiological Testing of Elite Athletes*.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadDecay {
    /// Acute retention per day
    pub acute: f64,
    /// Chronic retention per day
    pub chronic: f64,
}

impl LoadDecay {
    /// Decay factors for the given time constants (days)
    #[must_use]
    pub fn new(atl_days: f64, ctl_days: f64) -> Self {
        Self {
            acute: (-1.0 / atl_days).exp(),
            chronic: (-1.0 / ctl_days).exp(),
        }
    }
}

impl Default for LoadDecay {
    fn default() -> Self {
        Self::new(7.0, 42.0)
    }
}

/// Acute and chronic training load as of one day
///
/// The recurrence is path dependent: states must be advanced once per calendar
/// day, in increasing date order, including days without training.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadState {
    /// Acute training load (fatigue)
    pub atl: f64,
    /// Chronic training load (fitness)
    pub ctl: f64,
}

impl LoadState {
    /// State after one more day carrying `daily_load`
    ///
    /// Formula: `X' = L × (1 - decay) + X × decay`
    #[must_use]
    pub fn advance(self, daily_load: f64, decay: &LoadDecay) -> Self {
        Self {
            atl: daily_load.mul_add(1.0 - decay.acute, self.atl * decay.acute),
            ctl: daily_load.mul_add(1.0 - decay.chronic, self.ctl * decay.chronic),
        }
    }

    /// Training Stress Balance = CTL - ATL
    #[must_use]
    pub fn tsb(&self) -> f64 {
        self.ctl - self.atl
    }

    /// ATL / CTL, or 0 when there is no chronic load
    #[must_use]
    pub fn workload_ratio(&self) -> f64 {
        if self.ctl > 0.0 {
            self.atl / self.ctl
        } else {
            0.0
        }
    }
}
