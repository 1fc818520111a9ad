// ABOUTME: Re-exports command modules for fitplan-cli
// ABOUTME: Provides the generate, export, batch, and models commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

pub mod batch;
pub mod export;
pub mod generate;
pub mod models;
