// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, reference profiles, and temporary model directories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `fitplan`

use std::fs;
use std::path::Path;
use std::sync::Once;

use fitplan::config::PlannerConfig;
use fitplan::ml::ModelRegistry;
use fitplan::models::{
    ActivityLevel, DietaryPreference, FitnessGoal, Gender, UserProfile,
};
use serde_json::Value;
use tempfile::TempDir;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// 28-year-old moderately active male aiming for weight loss
pub fn reference_profile() -> UserProfile {
    UserProfile {
        age: 28,
        gender: Gender::Male,
        height_cm: 170.0,
        weight_kg: 70.0,
        activity_level: ActivityLevel::ModeratelyActive,
        fitness_goal: FitnessGoal::WeightLoss,
        dietary_preference: DietaryPreference::NonVegetarian,
        cultural_food_habits: "Western (European/American)".to_owned(),
        budget_usd_per_day: 10.0,
        available_equipment: vec![],
        free_text_prefs: None,
    }
}

/// Registry with every role stubbed and default configuration
pub fn stub_registry() -> ModelRegistry {
    init_test_logging();
    ModelRegistry::stubbed(&PlannerConfig::default())
}

/// Empty temporary model directory
pub fn empty_model_dir() -> TempDir {
    tempfile::tempdir().expect("create temp model dir")
}

/// Write a JSON artifact at `relative` under `dir`, creating parent directories
pub fn write_artifact(dir: &Path, relative: &str, contents: &Value) {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create artifact dir");
    }
    fs::write(&path, serde_json::to_string(contents).expect("encode artifact"))
        .expect("write artifact");
}

/// Write raw text at `relative` under `dir`
pub fn write_raw_artifact(dir: &Path, relative: &str, contents: &str) {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create artifact dir");
    }
    fs::write(&path, contents).expect("write artifact");
}

/// Configuration pointing at `dir`
pub fn config_for(dir: &Path) -> PlannerConfig {
    PlannerConfig::default().with_model_dir(dir)
}
