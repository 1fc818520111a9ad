// ABOUTME: Integration tests for model artifact loading, stub substitution, and inference fallback
// ABOUTME: Uses temporary model directories populated with JSON artifacts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use fitplan::constants::model_files;
use fitplan::intelligence::catalog::CANDIDATE_NOTES;
use fitplan::ml::{ArtifactKind, ArtifactSource, ModelRegistry};
use fitplan::models::{FitnessGoal, FitnessLevel};
use fitplan::pipeline::PlanPipeline;
use serde_json::json;

fn identity_scaler() -> serde_json::Value {
    json!({ "mean": vec![0.0; 7], "scale": vec![1.0; 7] })
}

fn two_centroids() -> serde_json::Value {
    json!({
        "centroids": [
            [20.0, 22.0, 0.0, 0.0, 1.0, 0.0, 0.0],
            [60.0, 30.0, 0.0, 0.0, 0.0, 1.0, 0.0]
        ]
    })
}

// tdee sits in column 5 of the numeric pass-through row
fn tdee_split_tree() -> serde_json::Value {
    json!({
        "children_left": [1, -1, -1],
        "children_right": [2, -1, -1],
        "feature": [5, -2, -2],
        "threshold": [2500.0, -2.0, -2.0],
        "value": [2000.0, 1800.0, 2300.0]
    })
}

fn source_of(models: &ModelRegistry, kind: ArtifactKind) -> ArtifactSource {
    models
        .statuses()
        .iter()
        .find(|status| status.kind == kind)
        .map(|status| status.source.clone())
        .unwrap()
}

#[test]
fn test_missing_artifacts_are_all_stubbed() {
    common::init_test_logging();
    let dir = common::empty_model_dir();
    let models = ModelRegistry::load(&common::config_for(dir.path()));

    assert!(models.is_demo_mode());
    let warnings = models.warnings();
    assert_eq!(warnings.len(), 5);
    for warning in &warnings {
        assert!(warning.reason.contains("not found"), "{}", warning.reason);
    }
    assert_eq!(warnings[0].artifact, "scaler");
    assert!(warnings[0].path.ends_with(model_files::SCALER));
}

#[test]
fn test_loaded_scaler_and_kmeans_drive_cluster() {
    common::init_test_logging();
    let dir = common::empty_model_dir();
    common::write_artifact(dir.path(), model_files::SCALER, &identity_scaler());
    common::write_artifact(dir.path(), model_files::CLUSTER, &two_centroids());

    let models = ModelRegistry::load(&common::config_for(dir.path()));
    assert_eq!(source_of(&models, ArtifactKind::Scaler), ArtifactSource::Loaded);
    assert_eq!(
        source_of(&models, ArtifactKind::ClusterAssigner),
        ArtifactSource::Loaded
    );
    assert_eq!(models.warnings().len(), 3);

    let plan = PlanPipeline::new(&models)
        .compute(&common::reference_profile())
        .unwrap();
    assert_eq!(plan.fitness_cluster, 0);
    assert_eq!(plan.fitness_level, FitnessLevel::Beginner);
}

#[test]
fn test_malformed_json_is_stubbed_with_reason() {
    common::init_test_logging();
    let dir = common::empty_model_dir();
    common::write_raw_artifact(dir.path(), model_files::CLUSTER, "{ not json");

    let models = ModelRegistry::load(&common::config_for(dir.path()));
    match source_of(&models, ArtifactKind::ClusterAssigner) {
        ArtifactSource::Stub { reason } => assert!(reason.contains("invalid artifact JSON")),
        other => panic!("expected stub, got {other:?}"),
    }
}

#[test]
fn test_schema_violation_is_stubbed_with_reason() {
    common::init_test_logging();
    let dir = common::empty_model_dir();
    common::write_artifact(
        dir.path(),
        model_files::CLUSTER,
        &json!({ "centroids": [[1.0, 2.0], [3.0]] }),
    );
    common::write_artifact(
        dir.path(),
        model_files::TEXT_ENCODER,
        &json!({ "dimension": 3, "vocabulary": { "knee": [1.0, 0.0] } }),
    );

    let models = ModelRegistry::load(&common::config_for(dir.path()));
    for kind in [ArtifactKind::ClusterAssigner, ArtifactKind::TextEncoder] {
        match source_of(&models, kind) {
            ArtifactSource::Stub { reason } => {
                assert!(reason.contains("incompatible artifact schema"), "{reason}");
            }
            other => panic!("expected stub for {kind}, got {other:?}"),
        }
    }
}

#[test]
fn test_scaler_width_mismatch_falls_back_per_call() {
    common::init_test_logging();
    let dir = common::empty_model_dir();
    common::write_artifact(
        dir.path(),
        model_files::SCALER,
        &json!({ "mean": [0.0, 0.0, 0.0], "scale": [1.0, 1.0, 1.0] }),
    );

    let models = ModelRegistry::load(&common::config_for(dir.path()));
    assert_eq!(source_of(&models, ArtifactKind::Scaler), ArtifactSource::Loaded);

    let plan = PlanPipeline::new(&models)
        .compute(&common::reference_profile())
        .unwrap();
    // identity fallback, then the cluster stub: (28 + 24.22 + 1) mod 4
    assert_eq!(plan.fitness_cluster, 1);
    assert_eq!(plan.model_warnings.len(), 4);
}

#[test]
fn test_decision_tree_on_numeric_passthrough() {
    common::init_test_logging();
    let dir = common::empty_model_dir();
    common::write_artifact(dir.path(), model_files::CALORIE_REGRESSOR, &tdee_split_tree());

    let models = ModelRegistry::load(&common::config_for(dir.path()));
    let plan = PlanPipeline::new(&models)
        .compute(&common::reference_profile())
        .unwrap();

    assert!((plan.predicted_calories - 2300.0).abs() < f64::EPSILON);
}

#[test]
fn test_tree_output_is_clamped() {
    common::init_test_logging();
    let dir = common::empty_model_dir();
    common::write_artifact(
        dir.path(),
        model_files::CALORIE_REGRESSOR,
        &json!({
            "children_left": [-1],
            "children_right": [-1],
            "feature": [-2],
            "threshold": [-2.0],
            "value": [500.0]
        }),
    );

    let models = ModelRegistry::load(&common::config_for(dir.path()));
    let plan = PlanPipeline::new(&models)
        .compute(&common::reference_profile())
        .unwrap();

    assert!((plan.predicted_calories - 1200.0).abs() < f64::EPSILON);
}

#[test]
fn test_preprocessor_one_hot_feeds_tree() {
    common::init_test_logging();
    let dir = common::empty_model_dir();
    common::write_artifact(
        dir.path(),
        model_files::CALORIE_PREPROCESSOR,
        &json!({
            "numeric": [{ "name": "tdee", "mean": 0.0, "scale": 1.0 }],
            "categorical": [{ "name": "gender", "categories": ["Female", "Male"] }]
        }),
    );
    common::write_artifact(
        dir.path(),
        model_files::CALORIE_REGRESSOR,
        &json!({
            "children_left": [1, -1, -1],
            "children_right": [2, -1, -1],
            "feature": [2, -2, -2],
            "threshold": [0.5, -2.0, -2.0],
            "value": [2000.0, 1900.0, 2600.0]
        }),
    );

    let models = ModelRegistry::load(&common::config_for(dir.path()));
    let plan = PlanPipeline::new(&models)
        .compute(&common::reference_profile())
        .unwrap();

    assert!((plan.predicted_calories - 2600.0).abs() < f64::EPSILON);
}

#[test]
fn test_preprocessor_missing_key_falls_back_to_numeric_passthrough() {
    common::init_test_logging();
    let dir = common::empty_model_dir();
    common::write_artifact(
        dir.path(),
        model_files::CALORIE_PREPROCESSOR,
        &json!({ "numeric": [{ "name": "resting_heart_rate", "mean": 60.0, "scale": 10.0 }] }),
    );
    common::write_artifact(dir.path(), model_files::CALORIE_REGRESSOR, &tdee_split_tree());

    let models = ModelRegistry::load(&common::config_for(dir.path()));
    let plan = PlanPipeline::new(&models)
        .compute(&common::reference_profile())
        .unwrap();

    assert!((plan.predicted_calories - 2300.0).abs() < f64::EPSILON);
}

#[test]
fn test_vocabulary_encoder_matches_related_note() {
    common::init_test_logging();
    let dir = common::empty_model_dir();
    common::write_artifact(
        dir.path(),
        model_files::TEXT_ENCODER,
        &json!({
            "dimension": 2,
            "vocabulary": {
                "knee": [1.0, 0.0],
                "pain": [1.0, 0.0],
                "hiit": [0.0, 1.0]
            }
        }),
    );

    let models = ModelRegistry::load(&common::config_for(dir.path()));
    let ranked = models.rank_preferences(
        "Knee pain when running",
        FitnessLevel::Beginner,
        FitnessGoal::WeightLoss,
    );

    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].0, CANDIDATE_NOTES[0]);
    assert!(ranked[0].1 > 0.99);
}

#[test]
fn test_stub_preference_scores_exceed_threshold() {
    let models = common::stub_registry();
    let ranked = models.rank_preferences(
        "gluten free, sore shoulders",
        FitnessLevel::Advanced,
        FitnessGoal::Endurance,
    );

    assert!(ranked.len() <= 3);
    assert!(ranked.iter().all(|(_, score)| *score > 0.25));
    assert!(ranked.windows(2).all(|pair| pair[0].1 >= pair[1].1));
}
