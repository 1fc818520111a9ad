// ABOUTME: Plan computation pipeline turning a user profile into a complete plan result
// ABOUTME: Metrics, cluster, calories, macros, notes, workout and diet plans, energy balance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

//! # Plan Computation Pipeline
//!
//! One call, one profile, one immutable [`PlanResult`]. The only error is a
//! rejected profile; every model-layer failure has already been absorbed by
//! the [`ModelRegistry`].

use fitplan_core::errors::AppResult;
use fitplan_core::models::{FitnessAssessment, PlanResult, UserProfile};
use fitplan_intelligence::energy_balance::calorie_balance;
use fitplan_intelligence::features::{calorie_feature_record, cluster_feature_row};
use fitplan_intelligence::macros::{compute_macros, macro_rationale};
use fitplan_intelligence::{round_to, DietPlanner, HealthMetrics, WorkoutPlanner};
use rayon::prelude::*;

use crate::logging::PlanLogger;
use crate::ml::ModelRegistry;

/// Computes plans against a shared, read-only model registry
#[derive(Debug, Clone, Copy)]
pub struct PlanPipeline<'a> {
    models: &'a ModelRegistry,
}

impl<'a> PlanPipeline<'a> {
    /// Create a pipeline over `models`
    #[must_use]
    pub const fn new(models: &'a ModelRegistry) -> Self {
        Self { models }
    }

    /// Compute the full plan for one profile
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the offending field when the profile
    /// is out of range
    pub fn compute(&self, profile: &UserProfile) -> AppResult<PlanResult> {
        if let Err(error) = profile.validate() {
            PlanLogger::log_validation_failure(error.field(), &error.message);
            return Err(error);
        }

        let metrics = HealthMetrics::from_profile(profile).derive();

        let cluster_row = cluster_feature_row(profile.age, metrics.bmi, profile.activity_level);
        let scaled = self.models.scale(&cluster_row);
        let assessment = FitnessAssessment::from_cluster(self.models.predict_cluster(&scaled));

        let calorie_record = calorie_feature_record(profile, &metrics);
        let calorie_features = self.models.preprocess_calories(&calorie_record);
        let predicted_calories = self.models.predict_calories(&calorie_features);

        let macros = compute_macros(predicted_calories, profile.fitness_goal);

        let embedding_notes = profile
            .preference_text()
            .map(|text| {
                self.models
                    .match_preferences(text, assessment.fitness_level, profile.fitness_goal)
            })
            .unwrap_or_default();

        let equipment = profile.normalized_equipment();
        let workout_plan = WorkoutPlanner::generate(
            assessment.fitness_level,
            profile.fitness_goal,
            &equipment,
            &embedding_notes,
        );
        let diet_plan = DietPlanner::generate(
            predicted_calories,
            macros,
            profile.dietary_preference,
            &profile.cultural_food_habits,
            profile.budget_usd_per_day,
            &embedding_notes,
        );

        let weekly_burn = WorkoutPlanner::estimate_weekly_calorie_burn(
            assessment.fitness_level,
            profile.fitness_goal,
            profile.weight_kg,
        );
        let tdee = round_to(metrics.tdee, 1);
        let target = predicted_calories.round();
        let demo_mode = self.models.is_demo_mode();

        PlanLogger::log_plan_generated(
            assessment.fitness_level,
            assessment.fitness_cluster,
            target,
            embedding_notes.len(),
            demo_mode,
        );

        Ok(PlanResult {
            bmi: round_to(metrics.bmi, 2),
            bmr: round_to(metrics.bmr, 1),
            tdee,
            bmi_category: metrics.bmi_category,
            ideal_weight_range: metrics.ideal_weight_range,
            body_fat_pct: metrics.body_fat_pct,
            fitness_cluster: assessment.fitness_cluster,
            fitness_level: assessment.fitness_level,
            predicted_calories: target,
            macros,
            macro_rationale: macro_rationale(profile.fitness_goal).to_owned(),
            workout_plan,
            diet_plan,
            embedding_notes,
            weekly_burn,
            calorie_balance: calorie_balance(tdee, target, weekly_burn),
            demo_mode,
            model_warnings: self.models.warnings(),
        })
    }

    /// Compute plans for many profiles in parallel, preserving input order
    #[must_use]
    pub fn compute_batch(&self, profiles: &[UserProfile]) -> Vec<AppResult<PlanResult>> {
        profiles
            .par_iter()
            .map(|profile| self.compute(profile))
            .collect()
    }
}
