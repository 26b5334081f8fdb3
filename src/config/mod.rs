// ABOUTME: Configuration management module for the analytics service
// ABOUTME: Environment-driven engine, cache and logging settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Contributors
//! Configuration module for the Stride analytics service
//!
//! - **Environment**: service configuration from environment variables
//! - **Intelligence**: algorithm tunables, re-exported from `stride_intelligence`

/// Environment and service configuration
pub mod environment;

pub use environment::{CacheConfig, EngineConfig};
pub use stride_intelligence::config::*;
