// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Unit conversions, standard race distances and physiological limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Contributors

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Unit conversion and measurement constants
pub mod units {
    /// Meters in one kilometer
    pub const METERS_PER_KM: f64 = 1_000.0;
    /// Seconds in one minute
    pub const SECONDS_PER_MINUTE: f64 = 60.0;
    /// Seconds in one hour
    pub const SECONDS_PER_HOUR: f64 = 3_600.0;
    /// Milliseconds in one second
    pub const MILLIS_PER_SECOND: f64 = 1_000.0;
    /// Days in one week
    pub const DAYS_PER_WEEK: f64 = 7.0;
}

/// Standard race distances in kilometers
pub mod race_distances {
    /// 5 kilometers
    pub const DISTANCE_5K: f64 = 5.0;
    /// 10 kilometers
    pub const DISTANCE_10K: f64 = 10.0;
    /// Half marathon
    pub const DISTANCE_HALF_MARATHON: f64 = 21.0975;
    /// Marathon
    pub const DISTANCE_MARATHON: f64 = 42.195;

    /// Prediction targets in display order, paired with their labels
    pub const STANDARD_RACES: [(f64, &str); 4] = [
        (DISTANCE_5K, "5K"),
        (DISTANCE_10K, "10K"),
        (DISTANCE_HALF_MARATHON, "Half Marathon"),
        (DISTANCE_MARATHON, "Marathon"),
    ];
}

/// Physiological constants based on sports science research
///
/// References:
/// - Banister, E.W. (1991). "Modeling elite athletic performance."
/// - Riegel, P.S. (1981). "Athletic records and human endurance." *American Scientist*, 69(3).
pub mod physiology {
    /// Bannister TRIMP base multiplier
    pub const TRIMP_BASE_MULTIPLIER: f64 = 0.64;
    /// Bannister exponential factor for males (and unspecified gender)
    pub const TRIMP_MALE_FACTOR: f64 = 1.92;
    /// Bannister exponential factor for females
    pub const TRIMP_FEMALE_FACTOR: f64 = 1.67;
    /// Riegel fatigue exponent for running
    pub const RIEGEL_EXPONENT: f64 = 1.06;
    /// Resting oxygen cost (ml/kg/min), one MET
    pub const RESTING_VO2: f64 = 3.5;
    /// Horizontal running oxygen cost per m/min of velocity (ACSM)
    pub const VO2_PER_METER_PER_MINUTE: f64 = 0.2;
}
