// ABOUTME: Main library entry point for the Fitplan planning engine
// ABOUTME: Wires model artifacts, configuration, and the plan computation pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

#![deny(unsafe_code)]

//! # Fitplan
//!
//! Personalized 7-day workout and diet plans from a biometric profile.
//!
//! ## Architecture
//!
//! - **`fitplan-core`**: errors, constants, and data models
//! - **`fitplan-intelligence`**: formulas, catalogs, and the two planners
//! - **ml**: the model registry with trained artifacts or deterministic stubs
//! - **pipeline**: profile in, immutable plan result out
//! - **export**: reduced JSON projection of a plan
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use fitplan::config::PlannerConfig;
//! use fitplan::ml::ModelRegistry;
//! use fitplan::pipeline::PlanPipeline;
//! use fitplan::models::UserProfile;
//! use fitplan::errors::AppResult;
//!
//! fn plan(profile: &UserProfile) -> AppResult<()> {
//!     let config = PlannerConfig::from_env()?;
//!     let models = ModelRegistry::load(&config);
//!     let result = PlanPipeline::new(&models).compute(profile)?;
//!     println!("{} kcal/day, level {}", result.predicted_calories, result.fitness_level);
//!     Ok(())
//! }
//! ```

/// Planner configuration
pub mod config;

/// Export document
pub mod export;

/// Logging setup and structured planner events
pub mod logging;

/// Model registry and artifacts
pub mod ml;

/// Plan computation pipeline
pub mod pipeline;

pub use fitplan_core::{constants, errors, models};
pub use fitplan_intelligence as intelligence;
