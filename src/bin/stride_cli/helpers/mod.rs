// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Contributors
// ABOUTME: Re-exports helper modules for stride-cli
// ABOUTME: Provides JSON input loading and output printing

pub mod input;
pub mod output;
