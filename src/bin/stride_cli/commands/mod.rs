// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Contributors
// ABOUTME: Re-exports command modules for stride-cli
// ABOUTME: Provides access to the metrics, history and prediction commands

pub mod analytics;
