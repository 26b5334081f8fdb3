// ABOUTME: Core data models consumed by the Stride analytics engine
// ABOUTME: Re-exports Workout, TrackSample, WorkoutBuilder, AthleteProfile and Gender
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Contributors

//! # Data Models
//!
//! Workouts and the athlete profile are owned by the caller. The engine reads
//! them and never mutates them.

mod athlete;
mod workout;

pub use athlete::{AthleteProfile, Gender};
pub use workout::{TrackSample, Workout, WorkoutBuilder};
