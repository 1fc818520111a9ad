// ABOUTME: Core data models for the Fitplan planning engine
// ABOUTME: Re-exports profile, metrics, feature, and plan structures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

//! # Data Models
//!
//! Every entity here is a value created fresh for one plan computation and
//! never mutated afterwards.
//!
//! ## Core Models
//!
//! - `UserProfile`: biometric inputs and stated preferences
//! - `DerivedMetrics`: BMI, BMR, TDEE and related estimates
//! - `FeatureMatrix` / `FeatureRecord`: rows exchanged with model artifacts
//! - `WorkoutPlan` / `DietPlan`: the two weekly schedules
//! - `PlanResult`: the combined result handed to presentation

mod features;
mod metrics;
mod plan;
mod profile;

pub use features::{
    FeatureMatrix, FeatureRecord, FeatureValue, CALORIE_FEATURE_KEYS, CLUSTER_FEATURE_COLUMNS,
};
pub use metrics::{
    BalanceLabel, BmiCategory, CalorieBalance, DerivedMetrics, FitnessAssessment, FitnessLevel,
    MacroSplit, WeightRange,
};
pub use plan::{
    DayEntry, DayMeals, DayType, DietPlan, Exercise, Meal, MealCategory, MealSlot, ModelWarning,
    PlanResult, Weekday, WorkoutPlan,
};
pub use profile::{
    ActivityLevel, DietaryPreference, Equipment, FitnessGoal, Gender, UserProfile, MAX_AGE,
    MIN_AGE,
};
