// ABOUTME: Reduced JSON projection of a plan result for download and sharing
// ABOUTME: Profile without free text, headline metrics, targets, and a per-day workout summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use fitplan_core::errors::AppResult;
use fitplan_core::models::{
    ActivityLevel, DayType, DietaryPreference, Equipment, FitnessGoal, FitnessLevel, Gender,
    MacroSplit, PlanResult, UserProfile,
};
use serde::{Deserialize, Serialize};

/// Profile fields carried into the export, with the model encodings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExportedProfile {
    /// Age in years
    pub age: u32,
    /// Gender
    pub gender: Gender,
    /// Height (cm)
    pub height_cm: f64,
    /// Weight (kg)
    pub weight_kg: f64,
    /// Activity level
    pub activity_level: ActivityLevel,
    /// Index of the activity level in the 5-entry activity table
    pub activity_level_encoded: u8,
    /// Fitness goal
    pub fitness_goal: FitnessGoal,
    /// Goal encoding, Weight Loss 0 through Maintenance 4
    pub fitness_goal_encoded: u8,
    /// Dietary preference
    pub dietary_preference: DietaryPreference,
    /// Cuisine description
    pub cultural_food_habits: String,
    /// Daily food budget (USD)
    pub budget_usd_per_day: f64,
    /// Equipment owned, Bodyweight when none was given
    pub available_equipment: Vec<Equipment>,
}

impl From<&UserProfile> for ExportedProfile {
    fn from(profile: &UserProfile) -> Self {
        Self {
            age: profile.age,
            gender: profile.gender,
            height_cm: profile.height_cm,
            weight_kg: profile.weight_kg,
            activity_level: profile.activity_level,
            activity_level_encoded: profile.activity_level.encoded(),
            fitness_goal: profile.fitness_goal,
            fitness_goal_encoded: profile.fitness_goal.encoded(),
            dietary_preference: profile.dietary_preference,
            cultural_food_habits: profile.cultural_food_habits.clone(),
            budget_usd_per_day: profile.budget_usd_per_day,
            available_equipment: profile.normalized_equipment(),
        }
    }
}

/// Headline health metrics
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExportedHealthMetrics {
    /// BMI (2 decimals)
    pub bmi: f64,
    /// BMI band label
    pub bmi_category: String,
    /// BMR (1 decimal)
    pub bmr: f64,
    /// TDEE (1 decimal)
    pub tdee: f64,
    /// Fitness tier
    pub fitness_level: FitnessLevel,
    /// Raw cluster label
    pub fitness_cluster: i64,
}

/// Daily intake targets
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExportedTargets {
    /// Daily calories (whole kcal)
    pub daily_calories: f64,
    /// Macro split
    pub macros: MacroSplit,
}

/// One day of the workout week, without exercise detail
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkoutSummaryEntry {
    /// Weekday name
    pub day: String,
    /// Focus label
    pub focus: String,
    /// Rest or workout
    #[serde(rename = "type")]
    pub day_type: DayType,
}

/// Export document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanExport {
    /// Profile without free-text preferences
    pub user_profile: ExportedProfile,
    /// Headline metrics
    pub health_metrics: ExportedHealthMetrics,
    /// Intake targets
    pub targets: ExportedTargets,
    /// Day, focus, and type for each weekday
    pub workout_summary: Vec<WorkoutSummaryEntry>,
}

impl PlanExport {
    /// Project a computed plan and the profile it came from
    #[must_use]
    pub fn new(profile: &UserProfile, plan: &PlanResult) -> Self {
        Self {
            user_profile: ExportedProfile::from(profile),
            health_metrics: ExportedHealthMetrics {
                bmi: plan.bmi,
                bmi_category: plan.bmi_category.label.clone(),
                bmr: plan.bmr,
                tdee: plan.tdee,
                fitness_level: plan.fitness_level,
                fitness_cluster: plan.fitness_cluster,
            },
            targets: ExportedTargets {
                daily_calories: plan.predicted_calories,
                macros: plan.macros,
            },
            workout_summary: plan
                .workout_plan
                .days
                .iter()
                .map(|entry| WorkoutSummaryEntry {
                    day: entry.day.clone(),
                    focus: entry.focus.clone(),
                    day_type: entry.day_type,
                })
                .collect(),
        }
    }

    /// Pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the document cannot be encoded
    pub fn to_json_pretty(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
