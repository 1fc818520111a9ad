// ABOUTME: Type-safe planner configuration with defaults and environment overrides
// ABOUTME: Covers artifact paths, preference matching, and calorie clamp bounds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors
//! Planner Configuration
//!
//! # Configuration Methods
//!
//! 1. Environment variables (highest priority):
//!    ```bash
//!    export FITPLAN_MODEL_DIR=/opt/fitplan
//!    export FITPLAN_SIMILARITY_THRESHOLD=0.3
//!    export FITPLAN_MAX_NOTES=2
//!    export FITPLAN_CALORIE_MIN=1400
//!    export FITPLAN_CALORIE_MAX=5000
//!    ```
//!
//! 2. Default values (if env vars not set)

use std::path::{Path, PathBuf};

use fitplan_core::constants::{calorie_bounds, model_files, preference_matching};
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Location of the five model artifacts
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModelConfig {
    /// Directory the artifact paths are relative to
    pub model_dir: PathBuf,
    /// Cluster feature scaler
    pub scaler_path: String,
    /// Cluster assigner
    pub cluster_path: String,
    /// Calorie feature preprocessor
    pub calorie_preprocessor_path: String,
    /// Calorie regressor
    pub calorie_regressor_path: String,
    /// Text-embedding encoder
    pub text_encoder_path: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            model_dir: PathBuf::from("."),
            scaler_path: model_files::SCALER.to_owned(),
            cluster_path: model_files::CLUSTER.to_owned(),
            calorie_preprocessor_path: model_files::CALORIE_PREPROCESSOR.to_owned(),
            calorie_regressor_path: model_files::CALORIE_REGRESSOR.to_owned(),
            text_encoder_path: model_files::TEXT_ENCODER.to_owned(),
        }
    }
}

impl ModelConfig {
    /// Join an artifact path onto the model directory
    #[must_use]
    pub fn resolve(&self, relative: &str) -> PathBuf {
        let path = Path::new(relative);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.model_dir.join(path)
        }
    }
}

/// Free-text preference matching
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PreferenceConfig {
    /// Notes must exceed this cosine similarity
    pub similarity_threshold: f64,
    /// Upper bound on returned notes
    pub max_notes: usize,
    /// Width of stub encoder embeddings
    pub embedding_dimension: usize,
}

impl Default for PreferenceConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: preference_matching::SIMILARITY_THRESHOLD,
            max_notes: preference_matching::MAX_NOTES,
            embedding_dimension: preference_matching::STUB_EMBEDDING_DIMENSION,
        }
    }
}

/// Calorie prediction bounds
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalorieBoundsConfig {
    /// Lowest emitted daily target (kcal)
    pub min_kcal: f64,
    /// Highest emitted daily target (kcal)
    pub max_kcal: f64,
    /// Stub prediction when no TDEE column is present
    pub fallback_kcal: f64,
    /// Relative jitter of the stub regressor
    pub stub_jitter: f64,
}

impl Default for CalorieBoundsConfig {
    fn default() -> Self {
        Self {
            min_kcal: calorie_bounds::MIN_DAILY_KCAL,
            max_kcal: calorie_bounds::MAX_DAILY_KCAL,
            fallback_kcal: calorie_bounds::FALLBACK_DAILY_KCAL,
            stub_jitter: calorie_bounds::STUB_JITTER,
        }
    }
}

/// Root planner configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PlannerConfig {
    /// Artifact locations
    pub models: ModelConfig,
    /// Preference matching
    pub preferences: PreferenceConfig,
    /// Calorie bounds
    pub calories: CalorieBoundsConfig,
}

impl PlannerConfig {
    /// Load configuration from defaults and environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable cannot be parsed or the
    /// resulting configuration fails validation
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Replace the model directory
    #[must_use]
    pub fn with_model_dir(mut self, model_dir: impl Into<PathBuf>) -> Self {
        self.models.model_dir = model_dir.into();
        self
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error naming the first invalid setting
    pub fn validate(&self) -> Result<(), ConfigError> {
        let preferences = &self.preferences;
        if !(preference_matching::SIMILARITY_THRESHOLD..=1.0)
            .contains(&preferences.similarity_threshold)
        {
            return Err(ConfigError::ValueOutOfRange(
                "similarity_threshold must be within [0.25, 1]",
            ));
        }
        if !(1..=preference_matching::MAX_NOTES).contains(&preferences.max_notes) {
            return Err(ConfigError::ValueOutOfRange("max_notes must be within [1, 3]"));
        }
        if preferences.embedding_dimension == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "embedding_dimension must be at least 1",
            ));
        }

        let calories = &self.calories;
        if !calories.min_kcal.is_finite() || calories.min_kcal < calorie_bounds::MIN_DAILY_KCAL {
            return Err(ConfigError::ValueOutOfRange("min_kcal must be at least 1200"));
        }
        if !calories.max_kcal.is_finite() || calories.max_kcal > calorie_bounds::MAX_DAILY_KCAL {
            return Err(ConfigError::ValueOutOfRange("max_kcal must be at most 6000"));
        }
        if calories.min_kcal >= calories.max_kcal {
            return Err(ConfigError::InvalidRange("min_kcal must be < max_kcal"));
        }
        if !(calories.min_kcal..=calories.max_kcal).contains(&calories.fallback_kcal) {
            return Err(ConfigError::InvalidRange(
                "fallback_kcal must lie within [min_kcal, max_kcal]",
            ));
        }
        if !(0.0..1.0).contains(&calories.stub_jitter) {
            return Err(ConfigError::ValueOutOfRange(
                "stub_jitter must be within [0, 1)",
            ));
        }

        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Ok(val) = std::env::var("FITPLAN_MODEL_DIR") {
            self.models.model_dir = PathBuf::from(val);
        }

        if let Ok(val) = std::env::var("FITPLAN_SIMILARITY_THRESHOLD") {
            self.preferences.similarity_threshold = val
                .parse()
                .map_err(|_| ConfigError::Parse("Invalid FITPLAN_SIMILARITY_THRESHOLD".into()))?;
        }

        if let Ok(val) = std::env::var("FITPLAN_MAX_NOTES") {
            self.preferences.max_notes = val
                .parse()
                .map_err(|_| ConfigError::Parse("Invalid FITPLAN_MAX_NOTES".into()))?;
        }

        if let Ok(val) = std::env::var("FITPLAN_CALORIE_MIN") {
            self.calories.min_kcal = val
                .parse()
                .map_err(|_| ConfigError::Parse("Invalid FITPLAN_CALORIE_MIN".into()))?;
        }

        if let Ok(val) = std::env::var("FITPLAN_CALORIE_MAX") {
            self.calories.max_kcal = val
                .parse()
                .map_err(|_| ConfigError::Parse("Invalid FITPLAN_CALORIE_MAX".into()))?;
        }

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = PlannerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.preferences.max_notes, 3);
        assert!((config.calories.min_kcal - 1200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_inverted_calorie_bounds_rejected() {
        let mut config = PlannerConfig::default();
        config.calories.min_kcal = 6000.0;
        config.calories.max_kcal = 1200.0;

        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_threshold_outside_cosine_range_rejected() {
        let mut config = PlannerConfig::default();
        config.preferences.similarity_threshold = 1.5;

        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));
    }

    #[test]
    fn test_loosening_past_hard_bounds_rejected() {
        let mut below_floor = PlannerConfig::default();
        below_floor.calories.min_kcal = 100.0;
        let mut above_ceiling = PlannerConfig::default();
        above_ceiling.calories.max_kcal = 9000.0;
        let mut too_many_notes = PlannerConfig::default();
        too_many_notes.preferences.max_notes = 10;
        let mut negative_threshold = PlannerConfig::default();
        negative_threshold.preferences.similarity_threshold = -1.0;

        for config in [below_floor, above_ceiling, too_many_notes, negative_threshold] {
            assert!(matches!(
                config.validate(),
                Err(ConfigError::ValueOutOfRange(_))
            ));
        }
    }

    #[test]
    fn test_tightened_bounds_accepted() {
        let mut config = PlannerConfig::default();
        config.calories.min_kcal = 1500.0;
        config.calories.max_kcal = 4000.0;
        config.preferences.max_notes = 1;
        config.preferences.similarity_threshold = 0.6;

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_resolve_joins_model_dir() {
        let config = PlannerConfig::default().with_model_dir("/srv/fitplan");
        assert_eq!(
            config.models.resolve(&config.models.scaler_path),
            PathBuf::from("/srv/fitplan/models/scaler.json")
        );
    }
}
