// ABOUTME: Plan computation building blocks: health formulas, catalogs, and planners
// ABOUTME: Pure deterministic functions consumed by the root plan pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

#![deny(unsafe_code)]

//! # Fitplan Intelligence
//!
//! Everything in this crate is a pure function of its inputs. Model inference
//! lives in the root crate; this crate only builds the feature rows handed to
//! the models and consumes their outputs.
//!
//! ## Modules
//!
//! - **`health_metrics`**: BMI, BMR (Harris-Benedict revised), TDEE, and estimates
//! - **features**: cluster feature row and calorie feature record builders
//! - **macros**: goal-driven macronutrient split
//! - **catalog**: static exercise, weekly structure, food, and note knowledge bases
//! - **`workout_planner`** / **`diet_planner`**: 7-day schedule generators
//! - **`energy_balance`**: intake versus expenditure summary
//! - **seeding**: reproducible per-input random number generators

/// Static knowledge bases
pub mod catalog;

/// 7-day meal schedule generation
pub mod diet_planner;

/// Intake versus expenditure summary
pub mod energy_balance;

/// Model feature builders
pub mod features;

/// Formula engine for body metrics
pub mod health_metrics;

/// Macronutrient split by goal
pub mod macros;

/// Reproducible seeded random number generators
pub mod seeding;

/// 7-day workout schedule generation
pub mod workout_planner;

pub use diet_planner::DietPlanner;
pub use health_metrics::HealthMetrics;
pub use workout_planner::WorkoutPlanner;

/// Round `value` to `decimals` decimal places, halves away from zero
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}
