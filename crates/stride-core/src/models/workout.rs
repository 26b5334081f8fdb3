// ABOUTME: Workout record model consumed by the analytics engine
// ABOUTME: Timestamped track samples, totals, WorkoutBuilder and anchor-date accessors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Contributors

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::constants::units::{MILLIS_PER_SECOND, SECONDS_PER_MINUTE};

/// One recorded point of a workout track
///
/// Timestamps are local wall-clock times; the engine never normalizes them to UTC,
/// so the calendar day a workout belongs to is the day the athlete ran it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackSample {
    /// Local time the sample was recorded
    pub timestamp: NaiveDateTime,
    /// Latitude in degrees
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    /// Longitude in degrees
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    /// Heart rate at this sample (BPM)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heart_rate: Option<u32>,
}

impl TrackSample {
    /// Sample carrying only a timestamp
    #[must_use]
    pub const fn at(timestamp: NaiveDateTime) -> Self {
        Self {
            timestamp,
            latitude: None,
            longitude: None,
            heart_rate: None,
        }
    }
}

/// A recorded run, read-only to the engine
///
/// Fields are private to keep the record immutable once built - use accessor
/// methods to read and `WorkoutBuilder` to construct new instances.
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use stride_core::models::WorkoutBuilder;
///
/// let start = NaiveDate::from_ymd_opt(2025, 3, 1)
///     .and_then(|d| d.and_hms_opt(7, 30, 0))
///     .unwrap();
/// let workout = WorkoutBuilder::new("run-1", 10.0, 2_700_000)
///     .start(start)
///     .average_heart_rate(160)
///     .build();
///
/// assert_eq!(workout.anchor_date(), Some(start.date()));
/// assert!((workout.duration_minutes() - 45.0).abs() < f64::EPSILON);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    /// Caller-assigned identifier
    id: String,
    /// Ordered track samples; the first one anchors the workout in time
    samples: Vec<TrackSample>,
    /// Total distance in kilometers
    distance_km: f64,
    /// Total duration in milliseconds
    duration_ms: u64,
    /// Aggregate average heart rate (BPM) when the recorder computed one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    average_heart_rate: Option<u32>,
}

impl Workout {
    /// Caller-assigned identifier
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Ordered track samples
    #[must_use]
    pub fn samples(&self) -> &[TrackSample] {
        &self.samples
    }

    /// Total distance in kilometers
    #[must_use]
    pub const fn distance_km(&self) -> f64 {
        self.distance_km
    }

    /// Total duration in milliseconds
    #[must_use]
    pub const fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    /// Total duration in seconds
    #[must_use]
    pub fn duration_seconds(&self) -> f64 {
        self.duration_ms as f64 / MILLIS_PER_SECOND
    }

    /// Total duration in minutes
    #[must_use]
    pub fn duration_minutes(&self) -> f64 {
        self.duration_seconds() / SECONDS_PER_MINUTE
    }

    /// Aggregate average heart rate, if recorded
    #[must_use]
    pub const fn average_heart_rate(&self) -> Option<u32> {
        self.average_heart_rate
    }

    /// Timestamp of the first sample
    #[must_use]
    pub fn anchor_time(&self) -> Option<NaiveDateTime> {
        self.samples.first().map(|s| s.timestamp)
    }

    /// Local calendar date of the first sample
    #[must_use]
    pub fn anchor_date(&self) -> Option<NaiveDate> {
        self.anchor_time().map(|t| t.date())
    }
}

/// Builder for `Workout`
#[derive(Debug, Clone)]
pub struct WorkoutBuilder {
    workout: Workout,
}

impl WorkoutBuilder {
    /// Start a workout with its totals
    pub fn new(id: impl Into<String>, distance_km: f64, duration_ms: u64) -> Self {
        Self {
            workout: Workout {
                id: id.into(),
                samples: Vec::new(),
                distance_km,
                duration_ms,
                average_heart_rate: None,
            },
        }
    }

    /// Anchor the workout with a timestamp-only first sample
    #[must_use]
    pub fn start(mut self, timestamp: NaiveDateTime) -> Self {
        self.workout.samples.insert(0, TrackSample::at(timestamp));
        self
    }

    /// Append one sample
    #[must_use]
    pub fn sample(mut self, sample: TrackSample) -> Self {
        self.workout.samples.push(sample);
        self
    }

    /// Append many samples
    #[must_use]
    pub fn samples(mut self, samples: impl IntoIterator<Item = TrackSample>) -> Self {
        self.workout.samples.extend(samples);
        self
    }

    /// Aggregate average heart rate (BPM)
    #[must_use]
    pub fn average_heart_rate(mut self, bpm: u32) -> Self {
        self.workout.average_heart_rate = Some(bpm);
        self
    }

    /// Finish building
    #[must_use]
    pub fn build(self) -> Workout {
        self.workout
    }
}
