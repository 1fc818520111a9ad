// ABOUTME: Model registry presenting one contract over five artifacts, trained or stubbed
// ABOUTME: Loads once at startup, never fails, and falls back to stubs per call on errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

//! # Model Registry
//!
//! The five predictive roles (scale, cluster, calorie preprocessing, calorie
//! regression, text encoding) sit behind the traits in [`adapters`]. A
//! [`ModelRegistry`] is built once per process and shared read-only across
//! plan computations.
//!
//! Loading never fails: an artifact that is missing, unreadable, or fails its
//! schema check is replaced by its deterministic stub and reported through
//! [`ModelRegistry::warnings`]. A loaded artifact that errors on a particular
//! input is bypassed for that call only.

/// Trait interface per artifact role
pub mod adapters;
/// JSON-backed trained artifacts
pub mod artifacts;
/// Model-layer errors
pub mod error;
/// Cosine ranking of candidate notes
pub mod similarity;
/// Deterministic stand-ins
pub mod stubs;

use std::fmt;
use std::path::{Path, PathBuf};

use fitplan_core::constants::calorie_bounds::{MAX_DAILY_KCAL, MIN_DAILY_KCAL};
use fitplan_core::constants::preference_matching::{MAX_NOTES, SIMILARITY_THRESHOLD};
use fitplan_core::models::{FeatureMatrix, FeatureRecord, FitnessGoal, FitnessLevel, ModelWarning};
use fitplan_intelligence::catalog::candidate_bank;
use serde::Serialize;

use crate::config::{CalorieBoundsConfig, PlannerConfig, PreferenceConfig};
use crate::logging::PlanLogger;
use adapters::{CaloriePreprocessor, CalorieRegressor, ClusterAssigner, FeatureScaler, TextEncoder};
use artifacts::{
    CaloriePreprocessorArtifact, DecisionTreeArtifact, JsonArtifact, KMeansArtifact,
    StandardScalerArtifact, VocabularyEncoderArtifact,
};
use error::{ModelError, ModelResult};
use similarity::rank_candidates;
use stubs::{
    FeatureSumClusterAssigner, HashSeededTextEncoder, IdentityScaler,
    NumericPassthroughPreprocessor, TdeeJitterRegressor,
};

/// The five artifact roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    /// Cluster feature scaler
    Scaler,
    /// Cluster assigner
    ClusterAssigner,
    /// Calorie feature preprocessor
    CaloriePreprocessor,
    /// Calorie regressor
    CalorieRegressor,
    /// Text-embedding encoder
    TextEncoder,
}

impl ArtifactKind {
    /// All roles, in load order
    pub const ALL: [Self; 5] = [
        Self::Scaler,
        Self::ClusterAssigner,
        Self::CaloriePreprocessor,
        Self::CalorieRegressor,
        Self::TextEncoder,
    ];

    /// Role name used in logs and warnings
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Scaler => "scaler",
            Self::ClusterAssigner => "cluster_assigner",
            Self::CaloriePreprocessor => "calorie_preprocessor",
            Self::CalorieRegressor => "calorie_regressor",
            Self::TextEncoder => "text_encoder",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What is serving a role
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ArtifactSource {
    /// Trained artifact read from disk
    Loaded,
    /// Deterministic stub, with the reason the artifact was not used
    Stub {
        /// Why the trained artifact is unavailable
        reason: String,
    },
    /// Implementation supplied programmatically
    Custom,
}

/// Load outcome for one role
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactStatus {
    /// Role
    pub kind: ArtifactKind,
    /// Path that was tried
    pub path: PathBuf,
    /// What is serving the role
    #[serde(flatten)]
    pub source: ArtifactSource,
}

const STUB_REGISTRY_REASON: &str = "stub registry requested";

/// Process-wide, read-only holder of the five model roles
pub struct ModelRegistry {
    scaler: Box<dyn FeatureScaler>,
    cluster_assigner: Box<dyn ClusterAssigner>,
    calorie_preprocessor: Box<dyn CaloriePreprocessor>,
    calorie_regressor: Box<dyn CalorieRegressor>,
    text_encoder: Box<dyn TextEncoder>,
    fallback_regressor: TdeeJitterRegressor,
    fallback_encoder: HashSeededTextEncoder,
    statuses: Vec<ArtifactStatus>,
    preferences: PreferenceConfig,
    calories: CalorieBoundsConfig,
}

impl fmt::Debug for ModelRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelRegistry")
            .field("statuses", &self.statuses)
            .field("preferences", &self.preferences)
            .field("calories", &self.calories)
            .finish_non_exhaustive()
    }
}

fn load_or_stub<T: ?Sized>(
    kind: ArtifactKind,
    path: PathBuf,
    statuses: &mut Vec<ArtifactStatus>,
    load: impl FnOnce(&Path) -> ModelResult<Box<T>>,
    stub: impl FnOnce() -> Box<T>,
) -> Box<T> {
    match load(&path) {
        Ok(artifact) => {
            PlanLogger::log_artifact_loaded(kind.name(), &path);
            statuses.push(ArtifactStatus {
                kind,
                path,
                source: ArtifactSource::Loaded,
            });
            artifact
        }
        Err(error) => {
            let reason = error.to_string();
            PlanLogger::log_stub_substituted(kind.name(), &path, &reason);
            statuses.push(ArtifactStatus {
                kind,
                path,
                source: ArtifactSource::Stub { reason },
            });
            stub()
        }
    }
}

impl ModelRegistry {
    /// Load every artifact named by `config`, substituting stubs for failures
    #[must_use]
    pub fn load(config: &PlannerConfig) -> Self {
        let models = &config.models;
        let fallback_regressor = Self::stub_regressor(&config.calories);
        let fallback_encoder = HashSeededTextEncoder::new(config.preferences.embedding_dimension);
        let mut statuses = Vec::with_capacity(ArtifactKind::ALL.len());

        let scaler = load_or_stub::<dyn FeatureScaler>(
            ArtifactKind::Scaler,
            models.resolve(&models.scaler_path),
            &mut statuses,
            |path| Ok(Box::new(StandardScalerArtifact::load(path)?) as Box<dyn FeatureScaler>),
            || Box::new(IdentityScaler),
        );
        let cluster_assigner = load_or_stub::<dyn ClusterAssigner>(
            ArtifactKind::ClusterAssigner,
            models.resolve(&models.cluster_path),
            &mut statuses,
            |path| Ok(Box::new(KMeansArtifact::load(path)?) as Box<dyn ClusterAssigner>),
            || Box::new(FeatureSumClusterAssigner),
        );
        let calorie_preprocessor = load_or_stub::<dyn CaloriePreprocessor>(
            ArtifactKind::CaloriePreprocessor,
            models.resolve(&models.calorie_preprocessor_path),
            &mut statuses,
            |path| {
                let artifact = CaloriePreprocessorArtifact::load(path)?;
                Ok(Box::new(artifact) as Box<dyn CaloriePreprocessor>)
            },
            || Box::new(NumericPassthroughPreprocessor),
        );
        let calorie_regressor = load_or_stub::<dyn CalorieRegressor>(
            ArtifactKind::CalorieRegressor,
            models.resolve(&models.calorie_regressor_path),
            &mut statuses,
            |path| Ok(Box::new(DecisionTreeArtifact::load(path)?) as Box<dyn CalorieRegressor>),
            || Box::new(fallback_regressor),
        );
        let text_encoder = load_or_stub::<dyn TextEncoder>(
            ArtifactKind::TextEncoder,
            models.resolve(&models.text_encoder_path),
            &mut statuses,
            |path| Ok(Box::new(VocabularyEncoderArtifact::load(path)?) as Box<dyn TextEncoder>),
            || Box::new(fallback_encoder),
        );

        Self {
            scaler,
            cluster_assigner,
            calorie_preprocessor,
            calorie_regressor,
            text_encoder,
            fallback_regressor,
            fallback_encoder,
            statuses,
            preferences: config.preferences.clone(),
            calories: config.calories.clone(),
        }
    }

    /// Registry with every role on its stub, without touching the filesystem
    #[must_use]
    pub fn stubbed(config: &PlannerConfig) -> Self {
        let models = &config.models;
        let fallback_regressor = Self::stub_regressor(&config.calories);
        let fallback_encoder = HashSeededTextEncoder::new(config.preferences.embedding_dimension);
        let paths = [
            &models.scaler_path,
            &models.cluster_path,
            &models.calorie_preprocessor_path,
            &models.calorie_regressor_path,
            &models.text_encoder_path,
        ];
        let statuses = ArtifactKind::ALL
            .iter()
            .zip(paths)
            .map(|(&kind, path)| ArtifactStatus {
                kind,
                path: models.resolve(path),
                source: ArtifactSource::Stub {
                    reason: STUB_REGISTRY_REASON.to_owned(),
                },
            })
            .collect();

        Self {
            scaler: Box::new(IdentityScaler),
            cluster_assigner: Box::new(FeatureSumClusterAssigner),
            calorie_preprocessor: Box::new(NumericPassthroughPreprocessor),
            calorie_regressor: Box::new(fallback_regressor),
            text_encoder: Box::new(fallback_encoder),
            fallback_regressor,
            fallback_encoder,
            statuses,
            preferences: config.preferences.clone(),
            calories: config.calories.clone(),
        }
    }

    const fn stub_regressor(calories: &CalorieBoundsConfig) -> TdeeJitterRegressor {
        TdeeJitterRegressor::new(calories.fallback_kcal, calories.stub_jitter)
    }

    fn mark_custom(&mut self, kind: ArtifactKind) {
        if let Some(status) = self.statuses.iter_mut().find(|status| status.kind == kind) {
            status.source = ArtifactSource::Custom;
        }
    }

    /// Replace the scaler
    #[must_use]
    pub fn with_scaler(mut self, scaler: impl FeatureScaler + 'static) -> Self {
        self.scaler = Box::new(scaler);
        self.mark_custom(ArtifactKind::Scaler);
        self
    }

    /// Replace the cluster assigner
    #[must_use]
    pub fn with_cluster_assigner(mut self, assigner: impl ClusterAssigner + 'static) -> Self {
        self.cluster_assigner = Box::new(assigner);
        self.mark_custom(ArtifactKind::ClusterAssigner);
        self
    }

    /// Replace the calorie preprocessor
    #[must_use]
    pub fn with_calorie_preprocessor(
        mut self,
        preprocessor: impl CaloriePreprocessor + 'static,
    ) -> Self {
        self.calorie_preprocessor = Box::new(preprocessor);
        self.mark_custom(ArtifactKind::CaloriePreprocessor);
        self
    }

    /// Replace the calorie regressor
    #[must_use]
    pub fn with_calorie_regressor(mut self, regressor: impl CalorieRegressor + 'static) -> Self {
        self.calorie_regressor = Box::new(regressor);
        self.mark_custom(ArtifactKind::CalorieRegressor);
        self
    }

    /// Replace the text encoder
    #[must_use]
    pub fn with_text_encoder(mut self, encoder: impl TextEncoder + 'static) -> Self {
        self.text_encoder = Box::new(encoder);
        self.mark_custom(ArtifactKind::TextEncoder);
        self
    }

    /// Load outcome of every role, in load order
    #[must_use]
    pub fn statuses(&self) -> &[ArtifactStatus] {
        &self.statuses
    }

    /// One warning per role served by a stub
    #[must_use]
    pub fn warnings(&self) -> Vec<ModelWarning> {
        self.statuses
            .iter()
            .filter_map(|status| match &status.source {
                ArtifactSource::Stub { reason } => Some(ModelWarning {
                    artifact: status.kind.name().to_owned(),
                    path: status.path.display().to_string(),
                    reason: reason.clone(),
                }),
                ArtifactSource::Loaded | ArtifactSource::Custom => None,
            })
            .collect()
    }

    /// True when at least one role runs on its stub
    #[must_use]
    pub fn is_demo_mode(&self) -> bool {
        self.statuses
            .iter()
            .any(|status| matches!(status.source, ArtifactSource::Stub { .. }))
    }

    /// Scale the 7-column cluster feature row
    #[must_use]
    pub fn scale(&self, features: &FeatureMatrix) -> FeatureMatrix {
        self.scaler.transform(features).unwrap_or_else(|error| {
            PlanLogger::log_inference_fallback(ArtifactKind::Scaler.name(), &error);
            IdentityScaler.apply(features)
        })
    }

    /// Cluster id of the first row
    #[must_use]
    pub fn predict_cluster(&self, scaled: &FeatureMatrix) -> i64 {
        let labels = self.cluster_assigner.predict(scaled).unwrap_or_else(|error| {
            PlanLogger::log_inference_fallback(ArtifactKind::ClusterAssigner.name(), &error);
            FeatureSumClusterAssigner.labels(scaled)
        });
        labels.first().copied().unwrap_or_default()
    }

    /// Model features for the calorie record; numeric pass-through on failure
    #[must_use]
    pub fn preprocess_calories(&self, record: &FeatureRecord) -> FeatureMatrix {
        self.calorie_preprocessor
            .transform(record)
            .unwrap_or_else(|error| {
                PlanLogger::log_inference_fallback(
                    ArtifactKind::CaloriePreprocessor.name(),
                    &error,
                );
                NumericPassthroughPreprocessor.apply(record)
            })
    }

    /// Daily calorie target, within the configured bounds and never outside
    /// [1200, 6000]
    #[must_use]
    pub fn predict_calories(&self, features: &FeatureMatrix) -> f64 {
        let predictions = self.calorie_regressor.predict(features).unwrap_or_else(|error| {
            PlanLogger::log_inference_fallback(ArtifactKind::CalorieRegressor.name(), &error);
            self.fallback_regressor.predictions(features)
        });
        let raw = predictions
            .first()
            .copied()
            .filter(|value| value.is_finite())
            .unwrap_or(self.calories.fallback_kcal);
        let floor = self.calories.min_kcal.max(MIN_DAILY_KCAL);
        let ceiling = self.calories.max_kcal.min(MAX_DAILY_KCAL);
        raw.max(floor).min(ceiling.max(floor))
    }

    /// Up to `max_notes` candidate notes most similar to `free_text`
    #[must_use]
    pub fn match_preferences(
        &self,
        free_text: &str,
        fitness_level: FitnessLevel,
        fitness_goal: FitnessGoal,
    ) -> Vec<String> {
        self.rank_preferences(free_text, fitness_level, fitness_goal)
            .into_iter()
            .map(|(note, _)| note)
            .collect()
    }

    /// Like [`Self::match_preferences`], with each note's similarity score
    #[must_use]
    pub fn rank_preferences(
        &self,
        free_text: &str,
        fitness_level: FitnessLevel,
        fitness_goal: FitnessGoal,
    ) -> Vec<(String, f64)> {
        let query = free_text.trim();
        if query.is_empty() {
            return Vec::new();
        }

        let candidates = candidate_bank(fitness_level, fitness_goal);
        let mut texts = Vec::with_capacity(candidates.len() + 1);
        texts.push(query);
        texts.extend_from_slice(candidates);

        let embeddings = self
            .text_encoder
            .encode(&texts)
            .and_then(|embeddings| Self::check_embeddings(embeddings, texts.len()))
            .unwrap_or_else(|error| {
                PlanLogger::log_inference_fallback(ArtifactKind::TextEncoder.name(), &error);
                self.fallback_encoder.embeddings(&texts)
            });

        let Some((query_embedding, candidate_embeddings)) = embeddings.split_first() else {
            return Vec::new();
        };
        let threshold = self
            .preferences
            .similarity_threshold
            .max(SIMILARITY_THRESHOLD);
        let max_notes = self.preferences.max_notes.min(MAX_NOTES);
        rank_candidates(
            query_embedding,
            candidate_embeddings,
            candidates,
            threshold,
            max_notes,
        )
    }

    fn check_embeddings(embeddings: Vec<Vec<f64>>, expected: usize) -> ModelResult<Vec<Vec<f64>>> {
        if embeddings.len() != expected {
            return Err(ModelError::WidthMismatch {
                expected,
                actual: embeddings.len(),
            });
        }
        let width = embeddings.first().map_or(0, Vec::len);
        if let Some(ragged) = embeddings.iter().find(|vector| vector.len() != width) {
            return Err(ModelError::WidthMismatch {
                expected: width,
                actual: ragged.len(),
            });
        }
        Ok(embeddings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingScaler;

    impl FeatureScaler for FailingScaler {
        fn transform(&self, features: &FeatureMatrix) -> ModelResult<FeatureMatrix> {
            Err(ModelError::WidthMismatch {
                expected: 3,
                actual: features.width(),
            })
        }
    }

    struct ExtremeRegressor(f64);

    impl CalorieRegressor for ExtremeRegressor {
        fn predict(&self, _features: &FeatureMatrix) -> ModelResult<Vec<f64>> {
            Ok(vec![self.0])
        }
    }

    fn features() -> FeatureMatrix {
        FeatureMatrix::single_row(vec!["a".into(), "b".into()], vec![28.0, 24.22])
    }

    #[test]
    fn test_stubbed_registry_is_demo_mode_with_five_warnings() {
        let registry = ModelRegistry::stubbed(&PlannerConfig::default());
        assert!(registry.is_demo_mode());
        assert_eq!(registry.warnings().len(), 5);
    }

    #[test]
    fn test_custom_roles_clear_their_warning() {
        let registry = ModelRegistry::stubbed(&PlannerConfig::default())
            .with_scaler(IdentityScaler)
            .with_calorie_regressor(ExtremeRegressor(1.0));
        let warned: Vec<String> = registry.warnings().into_iter().map(|w| w.artifact).collect();
        assert_eq!(
            warned,
            ["cluster_assigner", "calorie_preprocessor", "text_encoder"]
        );
    }

    #[test]
    fn test_failing_scaler_falls_back_to_identity() {
        let registry = ModelRegistry::stubbed(&PlannerConfig::default()).with_scaler(FailingScaler);
        assert_eq!(registry.scale(&features()), features());
    }

    #[test]
    fn test_predictions_are_clamped() {
        let config = PlannerConfig::default();
        let low = ModelRegistry::stubbed(&config).with_calorie_regressor(ExtremeRegressor(10.0));
        let high = ModelRegistry::stubbed(&config).with_calorie_regressor(ExtremeRegressor(1e6));
        let nan =
            ModelRegistry::stubbed(&config).with_calorie_regressor(ExtremeRegressor(f64::NAN));

        assert!((low.predict_calories(&features()) - 1200.0).abs() < f64::EPSILON);
        assert!((high.predict_calories(&features()) - 6000.0).abs() < f64::EPSILON);
        assert!((nan.predict_calories(&features()) - 2000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_loose_bounds_cannot_widen_the_clamp() {
        let mut config = PlannerConfig::default();
        config.calories.min_kcal = 100.0;
        config.calories.max_kcal = 9000.0;
        let low = ModelRegistry::stubbed(&config).with_calorie_regressor(ExtremeRegressor(300.0));
        let high = ModelRegistry::stubbed(&config).with_calorie_regressor(ExtremeRegressor(8000.0));

        assert!((low.predict_calories(&features()) - 1200.0).abs() < f64::EPSILON);
        assert!((high.predict_calories(&features()) - 6000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_blank_preference_text_matches_nothing() {
        let registry = ModelRegistry::stubbed(&PlannerConfig::default());
        assert!(registry
            .match_preferences("   ", FitnessLevel::Beginner, FitnessGoal::WeightLoss)
            .is_empty());
    }
}
