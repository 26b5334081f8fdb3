// ABOUTME: Algorithm abstraction layer for the analytics engine
// ABOUTME: Enum-dispatched TRIMP, the EWMA load recurrence and the aerobic capacity estimator

//! Algorithm Selection Module
//!
//! Calculation methods are plain enums and value types rather than strings or
//! trait objects, so a configured selection is checked at parse time and
//! dispatched without a vtable.
//!
//! # Example
//!
//! ```rust
//! use stride_intelligence::algorithms::{LoadDecay, LoadState};
//!
//! let decay = LoadDecay::new(7.0, 42.0);
//! let state = LoadState::default().advance(100.0, &decay);
//! assert!(state.atl > state.ctl);
//! ```

pub mod aerobic_capacity;
pub mod training_load;
pub mod trimp;

pub use aerobic_capacity::AerobicCapacityEstimator;
pub use training_load::{LoadDecay, LoadState};
pub use trimp::TrimpAlgorithm;
