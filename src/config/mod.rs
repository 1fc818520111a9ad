// ABOUTME: Configuration management module for planner settings
// ABOUTME: Model artifact locations, preference matching, and calorie bounds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors
//! Configuration module for Fitplan
//!
//! - **Models**: where the five predictive artifacts live
//! - **Preferences**: free-text matching threshold and note count
//! - **Calories**: clamp bounds and stub regressor behavior
//!
//! Every setting has a default; environment variables override them.

/// Configuration error types
pub mod error;

/// Planner configuration tree
pub mod planner_config;

pub use error::ConfigError;
pub use planner_config::{CalorieBoundsConfig, ModelConfig, PlannerConfig, PreferenceConfig};
