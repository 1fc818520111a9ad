// ABOUTME: Builders for the feature rows consumed by the cluster and calorie models
// ABOUTME: Column order and key set are fixed because trained artifacts depend on them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use fitplan_core::models::{
    ActivityLevel, DerivedMetrics, FeatureMatrix, FeatureRecord, UserProfile,
    CLUSTER_FEATURE_COLUMNS,
};

/// One-hot activity encoding in cluster column order.
///
/// The training data used coarser labels than the profile form, so the column
/// names do not line up with the display labels: "active" is Very Active and
/// "very active" is Extremely Active.
const fn activity_one_hot(level: ActivityLevel) -> [f64; 5] {
    match level {
        ActivityLevel::VeryActive => [1.0, 0.0, 0.0, 0.0, 0.0],
        ActivityLevel::LightlyActive => [0.0, 1.0, 0.0, 0.0, 0.0],
        ActivityLevel::ModeratelyActive => [0.0, 0.0, 1.0, 0.0, 0.0],
        ActivityLevel::Sedentary => [0.0, 0.0, 0.0, 1.0, 0.0],
        ActivityLevel::ExtremelyActive => [0.0, 0.0, 0.0, 0.0, 1.0],
    }
}

/// Seven-column cluster row: age, bmi, then five one-hot activity columns
#[must_use]
pub fn cluster_feature_row(age: u32, bmi: f64, activity_level: ActivityLevel) -> FeatureMatrix {
    let mut row = Vec::with_capacity(CLUSTER_FEATURE_COLUMNS.len());
    row.push(f64::from(age));
    row.push(bmi);
    row.extend(activity_one_hot(activity_level));
    FeatureMatrix::single_row(
        CLUSTER_FEATURE_COLUMNS.iter().map(|&c| c.to_owned()).collect(),
        row,
    )
}

/// Structured calorie record with the nine fixed keys
#[must_use]
pub fn calorie_feature_record(profile: &UserProfile, metrics: &DerivedMetrics) -> FeatureRecord {
    FeatureRecord::new()
        .number("age", f64::from(profile.age))
        .text("gender", profile.gender.as_str())
        .number("height_cm", profile.height_cm)
        .number("weight_kg", profile.weight_kg)
        .text("activity_level", profile.activity_level.as_str())
        .text("fitness_goal", profile.fitness_goal.as_str())
        .number("bmi", metrics.bmi)
        .number("bmr", metrics.bmr)
        .number("tdee", metrics.tdee)
}
