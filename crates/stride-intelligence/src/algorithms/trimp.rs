// ABOUTME: Training Impulse (TRIMP) calculation algorithms for single workouts
// ABOUTME: Bannister male/female heart-rate formulas, a pace-based estimate, and a hybrid selector
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Contributors

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use stride_core::constants::physiology::{
    TRIMP_BASE_MULTIPLIER, TRIMP_FEMALE_FACTOR, TRIMP_MALE_FACTOR,
};
use stride_core::errors::{AppError, AppResult};
use stride_core::models::AthleteProfile;

use crate::track_statistics::WorkoutStatistics;

/// Pace-estimate load scale: one hour at threshold speed
const PACE_LOAD_SCALE: f64 = 100.0;

/// TRIMP calculation algorithm selection
///
/// - `BannisterMale`: Classic Bannister formula, exp(1.92)
/// - `BannisterFemale`: Classic Bannister formula, exp(1.67)
/// - `PaceEstimate`: Speed relative to a threshold speed, squared, per hour
/// - `Hybrid`: Bannister when heart-rate data allows it, pace otherwise
///
/// # Scientific References
///
/// - Bannister, E.W. (1991). "Modeling elite athletic performance." *Physiological Testing of Elite Athletes*.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TrimpAlgorithm {
    /// Bannister formula for males
    ///
    /// Formula: `duration_minutes × HR_reserve_fraction × 0.64 × exp(1.92 × HR_reserve_fraction)`
    ///
    /// Where `HR_reserve_fraction = (avg_hr - resting_hr) / (max_hr - resting_hr)`
    BannisterMale,

    /// Bannister formula for females
    ///
    /// Formula: `duration_minutes × HR_reserve_fraction × 0.64 × exp(1.67 × HR_reserve_fraction)`
    BannisterFemale,

    /// Pace-based approximation for workouts without usable heart rate
    ///
    /// Formula: `duration_hours × (avg_speed / threshold_speed)² × 100`
    PaceEstimate,

    /// Auto-select based on available data
    ///
    /// Priority:
    /// 1. Bannister (gender-specific) if the workout has a heart rate and the
    ///    profile has a usable max/resting pair
    /// 2. Pace estimate
    #[default]
    Hybrid,
}

impl TrimpAlgorithm {
    /// Calculate the raw (uncapped) TRIMP for one workout
    ///
    /// `threshold_speed_kmh` is only used by the pace-based estimate.
    ///
    /// # Errors
    ///
    /// Returns an error when an explicitly selected Bannister formula lacks its
    /// inputs: a workout heart rate, or a profile max/resting pair with max above
    /// resting. `Hybrid` and `PaceEstimate` never fail.
    pub fn calculate(
        &self,
        stats: &WorkoutStatistics,
        profile: &AthleteProfile,
        threshold_speed_kmh: f64,
    ) -> AppResult<f64> {
        match self {
            Self::BannisterMale => {
                let (avg_hr, max_hr, resting_hr) = Self::heart_rate_inputs(stats, profile)?;
                Ok(Self::calculate_bannister(
                    avg_hr,
                    stats.moving_minutes(),
                    max_hr,
                    resting_hr,
                    TRIMP_MALE_FACTOR,
                ))
            }
            Self::BannisterFemale => {
                let (avg_hr, max_hr, resting_hr) = Self::heart_rate_inputs(stats, profile)?;
                Ok(Self::calculate_bannister(
                    avg_hr,
                    stats.moving_minutes(),
                    max_hr,
                    resting_hr,
                    TRIMP_FEMALE_FACTOR,
                ))
            }
            Self::PaceEstimate => Ok(Self::calculate_pace_estimate(stats, threshold_speed_kmh)),
            Self::Hybrid => Ok(Self::calculate_hybrid(stats, profile, threshold_speed_kmh)),
        }
    }

    /// The formula `Hybrid` resolves to for these inputs
    #[must_use]
    pub fn resolve(stats: &WorkoutStatistics, profile: &AthleteProfile) -> Self {
        if Self::heart_rate_inputs(stats, profile).is_err() {
            Self::PaceEstimate
        } else if profile.is_female() {
            Self::BannisterFemale
        } else {
            Self::BannisterMale
        }
    }

    fn heart_rate_inputs(
        stats: &WorkoutStatistics,
        profile: &AthleteProfile,
    ) -> AppResult<(f64, f64, f64)> {
        let avg_hr = stats
            .average_heart_rate
            .ok_or_else(|| AppError::missing_field("average_heart_rate"))?;
        let max_hr = profile
            .max_hr
            .ok_or_else(|| AppError::missing_field("max_hr"))?;
        let resting_hr = profile
            .resting_hr
            .ok_or_else(|| AppError::missing_field("resting_hr"))?;
        if max_hr <= resting_hr {
            return Err(AppError::invalid_input(format!(
                "Maximum heart rate ({max_hr}) must exceed resting heart rate ({resting_hr})"
            )));
        }
        Ok((avg_hr, f64::from(max_hr), f64::from(resting_hr)))
    }

    /// Bannister TRIMP with the given exponential factor
    fn calculate_bannister(
        avg_hr: f64,
        duration_minutes: f64,
        max_hr: f64,
        resting_hr: f64,
        exponential_factor: f64,
    ) -> f64 {
        let hr_ratio = (avg_hr - resting_hr) / (max_hr - resting_hr);
        duration_minutes * hr_ratio * TRIMP_BASE_MULTIPLIER * (exponential_factor * hr_ratio).exp()
    }

    /// Pace-based estimate; zero for a non-positive speed
    fn calculate_pace_estimate(stats: &WorkoutStatistics, threshold_speed_kmh: f64) -> f64 {
        if stats.average_speed_kmh <= 0.0 || threshold_speed_kmh <= 0.0 {
            return 0.0;
        }
        let intensity = stats.average_speed_kmh / threshold_speed_kmh;
        stats.moving_hours() * intensity.powi(2) * PACE_LOAD_SCALE
    }

    fn calculate_hybrid(
        stats: &WorkoutStatistics,
        profile: &AthleteProfile,
        threshold_speed_kmh: f64,
    ) -> f64 {
        let exponential_factor = if profile.is_female() {
            TRIMP_FEMALE_FACTOR
        } else {
            TRIMP_MALE_FACTOR
        };
        Self::heart_rate_inputs(stats, profile).map_or_else(
            |_| Self::calculate_pace_estimate(stats, threshold_speed_kmh),
            |(avg_hr, max_hr, resting_hr)| {
                Self::calculate_bannister(
                    avg_hr,
                    stats.moving_minutes(),
                    max_hr,
                    resting_hr,
                    exponential_factor,
                )
            },
        )
    }

    /// Get algorithm name for logging and debugging
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::BannisterMale => "bannister_male",
            Self::BannisterFemale => "bannister_female",
            Self::PaceEstimate => "pace_estimate",
            Self::Hybrid => "hybrid",
        }
    }

    /// Get algorithm description
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::BannisterMale => "Bannister male TRIMP (exp(1.92), requires max and resting HR)",
            Self::BannisterFemale => {
                "Bannister female TRIMP (exp(1.67), requires max and resting HR)"
            }
            Self::PaceEstimate => "Pace-based TRIMP estimate relative to a threshold speed",
            Self::Hybrid => "Hybrid TRIMP (Bannister when heart rate is usable, pace otherwise)",
        }
    }

    /// Get the formula as a string
    #[must_use]
    pub const fn formula(&self) -> &'static str {
        match self {
            Self::BannisterMale => {
                "duration × HR_reserve_fraction × 0.64 × exp(1.92 × HR_reserve_fraction)"
            }
            Self::BannisterFemale => {
                "duration × HR_reserve_fraction × 0.64 × exp(1.67 × HR_reserve_fraction)"
            }
            Self::PaceEstimate => "duration_hours × (avg_speed / threshold_speed)² × 100",
            Self::Hybrid => "Bannister if heart rate data is usable, else pace estimate",
        }
    }
}

impl FromStr for TrimpAlgorithm {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bannister_male" | "bannister" | "male" => Ok(Self::BannisterMale),
            "bannister_female" | "female" => Ok(Self::BannisterFemale),
            "pace_estimate" | "pace" => Ok(Self::PaceEstimate),
            "hybrid" => Ok(Self::Hybrid),
            other => Err(AppError::invalid_input(format!(
                "Unknown TRIMP algorithm: '{other}'. Valid options: bannister_male, bannister_female, pace_estimate, hybrid"
            ))),
        }
    }
}
