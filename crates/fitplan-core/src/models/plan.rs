// ABOUTME: Weekly workout and diet plan structures plus the combined plan result
// ABOUTME: Weekday and meal-slot enumerations with their fixed ordering and fractions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use serde::{Deserialize, Serialize};

use super::metrics::{BmiCategory, CalorieBalance, FitnessLevel, MacroSplit, WeightRange};
use super::profile::DietaryPreference;

/// Calendar weekday; plans always run Monday through Sunday
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Weekday {
    /// Monday
    Monday,
    /// Tuesday
    Tuesday,
    /// Wednesday
    Wednesday,
    /// Thursday
    Thursday,
    /// Friday
    Friday,
    /// Saturday
    Saturday,
    /// Sunday
    Sunday,
}

impl Weekday {
    /// Plan order
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Day name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }
}

/// Catalog section a meal slot draws from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealCategory {
    /// Breakfast dishes
    Breakfast,
    /// Snacks (shared by both snack slots)
    Snack,
    /// Lunch dishes
    Lunch,
    /// Dinner dishes
    Dinner,
}

/// One of the five daily meal slots
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum MealSlot {
    /// First meal
    Breakfast,
    /// Mid-morning snack
    MorningSnack,
    /// Midday meal
    Lunch,
    /// Mid-afternoon snack
    AfternoonSnack,
    /// Evening meal
    Dinner,
}

impl MealSlot {
    /// Slots in eating order
    pub const ALL: [Self; 5] = [
        Self::Breakfast,
        Self::MorningSnack,
        Self::Lunch,
        Self::AfternoonSnack,
        Self::Dinner,
    ];

    /// Display label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::MorningSnack => "Morning Snack",
            Self::Lunch => "Lunch",
            Self::AfternoonSnack => "Afternoon Snack",
            Self::Dinner => "Dinner",
        }
    }

    /// Share of the daily calorie target; the five fractions sum to 1.0
    #[must_use]
    pub const fn calorie_fraction(self) -> f64 {
        match self {
            Self::Breakfast | Self::Dinner => 0.25,
            Self::MorningSnack | Self::AfternoonSnack => 0.10,
            Self::Lunch => 0.30,
        }
    }

    /// Catalog section used to fill this slot
    #[must_use]
    pub const fn category(self) -> MealCategory {
        match self {
            Self::Breakfast => MealCategory::Breakfast,
            Self::MorningSnack | Self::AfternoonSnack => MealCategory::Snack,
            Self::Lunch => MealCategory::Lunch,
            Self::Dinner => MealCategory::Dinner,
        }
    }
}

/// One exercise prescription
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Exercise {
    /// Exercise name
    pub name: String,
    /// Sets and reps descriptor (e.g. "4x10")
    pub sets: String,
    /// Target muscle group
    pub muscle: String,
}

/// Whether a day trains or recovers
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DayType {
    /// Recovery day without exercises
    Rest,
    /// Training day
    Workout,
}

/// One day of the workout schedule
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DayEntry {
    /// Weekday name
    pub day: String,
    /// Focus label (e.g. "Upper Body")
    pub focus: String,
    /// Rest or workout
    #[serde(rename = "type")]
    pub day_type: DayType,
    /// Exercises (empty on rest days)
    pub exercises: Vec<Exercise>,
    /// Session length in minutes (0 on rest days)
    pub duration_min: u32,
    /// Coaching note
    pub notes: String,
}

/// Seven-day workout schedule, Monday first
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct WorkoutPlan {
    /// Day entries in weekday order
    pub days: Vec<DayEntry>,
}

/// One meal in a day plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Meal {
    /// Slot label (e.g. "Morning Snack")
    pub name: String,
    /// Dish description
    pub item: String,
    /// Target calories for this slot (rounded kcal)
    pub calories: u32,
    /// Catalog protein grams
    pub protein: f64,
    /// Catalog carbohydrate grams
    pub carbs: f64,
    /// Catalog fat grams
    pub fat: f64,
    /// Catalog cost in USD (rounded to cents)
    pub cost: f64,
}

/// All meals for one weekday
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DayMeals {
    /// Weekday name
    pub day: String,
    /// Five meals in slot order
    pub meals: Vec<Meal>,
    /// Sum of meal costs (USD, rounded to cents)
    pub total_cost: f64,
    /// Whether the day's cost fits the daily budget
    pub within_budget: bool,
}

/// Seven-day meal schedule with its targets
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DietPlan {
    /// Day plans in weekday order
    pub weekly_plan: Vec<DayMeals>,
    /// One representative day
    pub daily_template: Vec<Meal>,
    /// Daily calorie target the plan was built for
    pub total_daily_cal: f64,
    /// Macro split carried through for display
    pub macros: MacroSplit,
    /// Daily food budget (USD)
    pub budget_usd: f64,
    /// Dietary preference as entered
    pub dietary_preference: DietaryPreference,
    /// Cuisine description as entered
    pub cultural_food_habits: String,
    /// Diet-specific personalization note, if any
    pub nlp_adjustment: Option<String>,
}

/// A model artifact that could not be used and was replaced by its stub
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModelWarning {
    /// Artifact role (e.g. "scaler")
    pub artifact: String,
    /// Path that was tried
    pub path: String,
    /// Why loading failed
    pub reason: String,
}

/// Complete result of one plan computation, consumed by presentation layers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanResult {
    /// BMI rounded to two decimals
    pub bmi: f64,
    /// BMR rounded to one decimal
    pub bmr: f64,
    /// TDEE rounded to one decimal
    pub tdee: f64,
    /// BMI band
    pub bmi_category: BmiCategory,
    /// Healthy weight range for the user's height
    pub ideal_weight_range: WeightRange,
    /// BMI-based body fat estimate (%)
    pub body_fat_pct: f64,
    /// Raw cluster label
    pub fitness_cluster: i64,
    /// Tier derived from the cluster
    pub fitness_level: FitnessLevel,
    /// Daily calorie target, rounded to whole kcal
    pub predicted_calories: f64,
    /// Macro split
    pub macros: MacroSplit,
    /// Why this macro split suits the goal
    pub macro_rationale: String,
    /// Seven-day workout schedule
    pub workout_plan: WorkoutPlan,
    /// Seven-day diet plan
    pub diet_plan: DietPlan,
    /// Up to three personalization notes
    pub embedding_notes: Vec<String>,
    /// Estimated weekly workout burn (kcal, whole number)
    pub weekly_burn: f64,
    /// Intake versus expenditure summary
    pub calorie_balance: CalorieBalance,
    /// True when any model artifact runs on its stub
    pub demo_mode: bool,
    /// Artifacts replaced by stubs
    pub model_warnings: Vec<ModelWarning>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meal_fractions_sum_to_one() {
        let total: f64 = MealSlot::ALL.iter().map(|slot| slot.calorie_fraction()).sum();
        assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_day_type_serializes_lowercase_under_type_key() {
        let entry = DayEntry {
            day: Weekday::Sunday.as_str().into(),
            focus: "Rest".into(),
            day_type: DayType::Rest,
            exercises: vec![],
            duration_min: 0,
            notes: String::new(),
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["type"], "rest");
        assert_eq!(json["day"], "Sunday");
    }
}
