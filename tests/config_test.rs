// ABOUTME: Tests for planner and logging configuration loaded from environment variables
// ABOUTME: Serialized because they mutate process-wide environment state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;
use std::path::PathBuf;

use fitplan::config::{ConfigError, PlannerConfig};
use fitplan::errors::{AppError, ErrorCode};
use fitplan::logging::{LogFormat, LoggingConfig};
use serial_test::serial;

const PLANNER_VARS: [&str; 5] = [
    "FITPLAN_MODEL_DIR",
    "FITPLAN_SIMILARITY_THRESHOLD",
    "FITPLAN_MAX_NOTES",
    "FITPLAN_CALORIE_MIN",
    "FITPLAN_CALORIE_MAX",
];

fn clear_planner_vars() {
    for var in PLANNER_VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_from_env_without_overrides_matches_defaults() {
    clear_planner_vars();

    let config = PlannerConfig::from_env().unwrap();
    assert_eq!(config, PlannerConfig::default());
}

#[test]
#[serial]
fn test_from_env_applies_overrides() {
    clear_planner_vars();
    env::set_var("FITPLAN_MODEL_DIR", "/opt/fitplan");
    env::set_var("FITPLAN_SIMILARITY_THRESHOLD", "0.4");
    env::set_var("FITPLAN_MAX_NOTES", "2");
    env::set_var("FITPLAN_CALORIE_MIN", "1400");
    env::set_var("FITPLAN_CALORIE_MAX", "5000");

    let config = PlannerConfig::from_env().unwrap();
    clear_planner_vars();

    assert_eq!(config.models.model_dir, PathBuf::from("/opt/fitplan"));
    assert_eq!(
        config.models.resolve(&config.models.scaler_path),
        PathBuf::from("/opt/fitplan/models/scaler.json")
    );
    assert!((config.preferences.similarity_threshold - 0.4).abs() < f64::EPSILON);
    assert_eq!(config.preferences.max_notes, 2);
    assert!((config.calories.min_kcal - 1400.0).abs() < f64::EPSILON);
    assert!((config.calories.max_kcal - 5000.0).abs() < f64::EPSILON);
}

#[test]
#[serial]
fn test_unparseable_override_is_a_parse_error() {
    clear_planner_vars();
    env::set_var("FITPLAN_MAX_NOTES", "three");

    let error = PlannerConfig::from_env().unwrap_err();
    clear_planner_vars();

    assert!(matches!(error, ConfigError::Parse(_)));
    assert!(error.to_string().contains("FITPLAN_MAX_NOTES"));

    let app_error = AppError::from(error);
    assert_eq!(app_error.code, ErrorCode::ConfigError);
}

#[test]
#[serial]
fn test_contradictory_overrides_fail_validation() {
    clear_planner_vars();
    env::set_var("FITPLAN_CALORIE_MIN", "3000");
    env::set_var("FITPLAN_CALORIE_MAX", "2500");

    let error = PlannerConfig::from_env().unwrap_err();
    clear_planner_vars();

    assert!(matches!(error, ConfigError::InvalidRange(_)));
    assert_eq!(AppError::from(error).code, ErrorCode::ConfigInvalid);
}

#[test]
#[serial]
fn test_overrides_may_only_tighten_hard_bounds() {
    clear_planner_vars();
    env::set_var("FITPLAN_CALORIE_MIN", "100");
    let low_floor = PlannerConfig::from_env().unwrap_err();
    clear_planner_vars();

    env::set_var("FITPLAN_MAX_NOTES", "10");
    let many_notes = PlannerConfig::from_env().unwrap_err();
    clear_planner_vars();

    env::set_var("FITPLAN_SIMILARITY_THRESHOLD", "-1");
    let negative_threshold = PlannerConfig::from_env().unwrap_err();
    clear_planner_vars();

    env::set_var("FITPLAN_CALORIE_MAX", "7500");
    let high_ceiling = PlannerConfig::from_env().unwrap_err();
    clear_planner_vars();

    for error in [low_floor, many_notes, negative_threshold, high_ceiling] {
        assert!(matches!(error, ConfigError::ValueOutOfRange(_)), "{error}");
    }
}

#[test]
#[serial]
fn test_zero_max_notes_rejected() {
    clear_planner_vars();
    env::set_var("FITPLAN_MAX_NOTES", "0");

    let error = PlannerConfig::from_env().unwrap_err();
    clear_planner_vars();

    assert!(matches!(error, ConfigError::ValueOutOfRange(_)));
}

#[test]
#[serial]
fn test_logging_config_reads_format_and_environment() {
    env::set_var("RUST_LOG", "debug");
    env::set_var("LOG_FORMAT", "json");
    env::set_var("ENVIRONMENT", "production");

    let config = LoggingConfig::from_env();
    env::remove_var("RUST_LOG");
    env::remove_var("LOG_FORMAT");
    env::remove_var("ENVIRONMENT");

    assert_eq!(config.level, "debug");
    assert_eq!(config.format, LogFormat::Json);
    assert!(config.include_location);
    assert_eq!(config.service_name, "fitplan");
}

#[test]
#[serial]
fn test_logging_config_defaults_to_compact_info() {
    env::remove_var("RUST_LOG");
    env::remove_var("LOG_FORMAT");
    env::remove_var("ENVIRONMENT");
    env::remove_var("LOG_INCLUDE_LOCATION");

    let config = LoggingConfig::from_env().with_level("warn");

    assert_eq!(config.level, "warn");
    assert_eq!(config.format, LogFormat::Compact);
    assert!(!config.include_location);
    assert_eq!(config.environment, "development");
}
