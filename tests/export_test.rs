// ABOUTME: Tests for the reduced JSON export of a computed plan
// ABOUTME: Checks document shape, encodings, and omission of free-text preferences
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use fitplan::export::PlanExport;
use fitplan::models::{DayType, Equipment, PlanResult, UserProfile};
use fitplan::pipeline::PlanPipeline;
use serde_json::Value;

fn export_for(profile: &UserProfile) -> (PlanResult, Value) {
    let models = common::stub_registry();
    let plan = PlanPipeline::new(&models).compute(profile).unwrap();
    let json = PlanExport::new(profile, &plan).to_json_pretty().unwrap();
    (plan, serde_json::from_str(&json).unwrap())
}

#[test]
fn test_export_has_four_sections() {
    let (_, document) = export_for(&common::reference_profile());

    let mut keys: Vec<&str> = document
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        ["health_metrics", "targets", "user_profile", "workout_summary"]
    );
}

#[test]
fn test_export_profile_drops_free_text_and_adds_encodings() {
    let mut profile = common::reference_profile();
    profile.free_text_prefs = Some("private notes about my shoulder".to_owned());
    profile.available_equipment = vec![Equipment::Dumbbells, Equipment::PullUpBar];

    let (_, document) = export_for(&profile);
    let exported = &document["user_profile"];

    assert!(exported.get("free_text_prefs").is_none());
    assert_eq!(exported["activity_level"], "Moderately Active");
    assert_eq!(exported["activity_level_encoded"], 2);
    assert_eq!(exported["fitness_goal"], "Weight Loss");
    assert_eq!(exported["fitness_goal_encoded"], 0);
    assert_eq!(
        exported["available_equipment"],
        serde_json::json!(["Dumbbells", "Pull-up Bar"])
    );
}

#[test]
fn test_export_profile_lists_bodyweight_when_no_equipment_given() {
    let (_, document) = export_for(&common::reference_profile());

    assert_eq!(
        document["user_profile"]["available_equipment"],
        serde_json::json!(["Bodyweight"])
    );
}

#[test]
fn test_export_metrics_and_targets_mirror_plan() {
    let (plan, document) = export_for(&common::reference_profile());

    let metrics = &document["health_metrics"];
    assert_eq!(metrics["bmi"], 24.22);
    assert_eq!(metrics["bmi_category"], "Normal Weight");
    assert_eq!(metrics["bmr"], 1683.0);
    assert_eq!(metrics["fitness_cluster"], 1);

    let targets = &document["targets"];
    assert_eq!(targets["daily_calories"], plan.predicted_calories);
    assert_eq!(targets["macros"]["protein_g"], plan.macros.protein_g);
}

#[test]
fn test_workout_summary_lists_each_day_without_exercises() {
    let (plan, document) = export_for(&common::reference_profile());
    let summary = document["workout_summary"].as_array().unwrap();

    assert_eq!(summary.len(), 7);
    assert_eq!(summary[0]["day"], "Monday");
    assert_eq!(summary[6]["day"], "Sunday");

    for (entry, day) in summary.iter().zip(&plan.workout_plan.days) {
        assert_eq!(entry["focus"], day.focus.as_str());
        let expected_type = match day.day_type {
            DayType::Rest => "rest",
            DayType::Workout => "workout",
        };
        assert_eq!(entry["type"], expected_type);
        assert!(entry.get("exercises").is_none());
    }
}

#[test]
fn test_export_round_trips_through_serde() {
    let profile = common::reference_profile();
    let models = common::stub_registry();
    let plan = PlanPipeline::new(&models).compute(&profile).unwrap();
    let export = PlanExport::new(&profile, &plan);

    let parsed: PlanExport = serde_json::from_str(&export.to_json_pretty().unwrap()).unwrap();
    assert_eq!(parsed, export);
}
