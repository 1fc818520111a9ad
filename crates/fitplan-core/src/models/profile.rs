// ABOUTME: User profile model with the categorical inputs that drive plan generation
// ABOUTME: Gender, activity, goal, diet, and equipment enums plus profile validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

/// Youngest age accepted by the planner
pub const MIN_AGE: u32 = 16;
/// Oldest age accepted by the planner
pub const MAX_AGE: u32 = 80;

/// Find the variant whose display label matches `label`, ignoring ASCII case
fn parse_label<T: Copy>(all: &[T], label: &str, as_str: fn(T) -> &'static str) -> Option<T> {
    let label = label.trim();
    all.iter()
        .copied()
        .find(|variant| as_str(*variant).eq_ignore_ascii_case(label))
}

/// Biological sex used by the BMR formula
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Gender {
    /// Male BMR branch
    Male,
    /// Female BMR branch
    Female,
    /// Non-binary or undisclosed; shares the female BMR branch
    Other,
}

impl Gender {
    /// All variants in display order
    pub const ALL: [Self; 3] = [Self::Male, Self::Female, Self::Other];

    /// Display label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }
}

/// Habitual activity level outside planned workouts
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    #[serde(rename = "Lightly Active")]
    LightlyActive,
    /// Moderate exercise 3-5 days/week
    #[serde(rename = "Moderately Active")]
    ModeratelyActive,
    /// Hard exercise 6-7 days/week
    #[serde(rename = "Very Active")]
    VeryActive,
    /// Physical job or twice-daily training
    #[serde(rename = "Extremely Active")]
    ExtremelyActive,
}

impl ActivityLevel {
    /// All variants in table order (also the label-encoding order)
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::LightlyActive,
        Self::ModeratelyActive,
        Self::VeryActive,
        Self::ExtremelyActive,
    ];

    /// Display label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sedentary => "Sedentary",
            Self::LightlyActive => "Lightly Active",
            Self::ModeratelyActive => "Moderately Active",
            Self::VeryActive => "Very Active",
            Self::ExtremelyActive => "Extremely Active",
        }
    }

    /// Ordinal encoding used in exports
    #[must_use]
    pub const fn encoded(self) -> u8 {
        match self {
            Self::Sedentary => 0,
            Self::LightlyActive => 1,
            Self::ModeratelyActive => 2,
            Self::VeryActive => 3,
            Self::ExtremelyActive => 4,
        }
    }
}

/// Primary training goal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum FitnessGoal {
    /// Caloric deficit with conditioning focus
    #[serde(rename = "Weight Loss")]
    WeightLoss,
    /// Hypertrophy and strength
    #[serde(rename = "Muscle Gain")]
    MuscleGain,
    /// Aerobic capacity
    Endurance,
    /// Balanced all-round training
    #[serde(rename = "General Fitness")]
    GeneralFitness,
    /// Keep current body composition
    Maintenance,
}

impl FitnessGoal {
    /// All variants in display order (also the label-encoding order)
    pub const ALL: [Self; 5] = [
        Self::WeightLoss,
        Self::MuscleGain,
        Self::Endurance,
        Self::GeneralFitness,
        Self::Maintenance,
    ];

    /// Display label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WeightLoss => "Weight Loss",
            Self::MuscleGain => "Muscle Gain",
            Self::Endurance => "Endurance",
            Self::GeneralFitness => "General Fitness",
            Self::Maintenance => "Maintenance",
        }
    }

    /// Ordinal encoding used in exports
    #[must_use]
    pub const fn encoded(self) -> u8 {
        match self {
            Self::WeightLoss => 0,
            Self::MuscleGain => 1,
            Self::Endurance => 2,
            Self::GeneralFitness => 3,
            Self::Maintenance => 4,
        }
    }
}

/// Stated dietary preference
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DietaryPreference {
    /// Eats meat, fish, eggs, and dairy
    #[serde(rename = "Non-Vegetarian")]
    NonVegetarian,
    /// No meat or fish
    Vegetarian,
    /// No animal products
    Vegan,
    /// Fish but no other meat
    Pescatarian,
    /// Very low carbohydrate
    Keto,
    /// Whole-food, grain-free
    Paleo,
}

impl DietaryPreference {
    /// All variants in display order
    pub const ALL: [Self; 6] = [
        Self::NonVegetarian,
        Self::Vegetarian,
        Self::Vegan,
        Self::Pescatarian,
        Self::Keto,
        Self::Paleo,
    ];

    /// Display label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NonVegetarian => "Non-Vegetarian",
            Self::Vegetarian => "Vegetarian",
            Self::Vegan => "Vegan",
            Self::Pescatarian => "Pescatarian",
            Self::Keto => "Keto",
            Self::Paleo => "Paleo",
        }
    }
}

/// Training equipment a user can access
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Equipment {
    /// No equipment
    Bodyweight,
    /// Free-weight dumbbells
    Dumbbells,
    /// Olympic barbell and plates
    Barbell,
    /// Elastic resistance bands
    #[serde(rename = "Resistance Bands")]
    ResistanceBands,
    /// Gym machines
    Machines,
    /// Doorway or rack pull-up bar
    #[serde(rename = "Pull-up Bar")]
    PullUpBar,
    /// Kettlebells
    Kettlebell,
}

impl Equipment {
    /// All variants in display order
    pub const ALL: [Self; 7] = [
        Self::Bodyweight,
        Self::Dumbbells,
        Self::Barbell,
        Self::ResistanceBands,
        Self::Machines,
        Self::PullUpBar,
        Self::Kettlebell,
    ];

    /// Display label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bodyweight => "Bodyweight",
            Self::Dumbbells => "Dumbbells",
            Self::Barbell => "Barbell",
            Self::ResistanceBands => "Resistance Bands",
            Self::Machines => "Machines",
            Self::PullUpBar => "Pull-up Bar",
            Self::Kettlebell => "Kettlebell",
        }
    }
}

macro_rules! impl_label_traits {
    ($($ty:ident => $field:literal),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }

            impl FromStr for $ty {
                type Err = AppError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    parse_label(&Self::ALL, s, Self::as_str).ok_or_else(|| {
                        AppError::invalid_input(format!("unknown {}: '{s}'", $field))
                            .with_field($field)
                    })
                }
            }
        )*
    };
}

impl_label_traits!(
    Gender => "gender",
    ActivityLevel => "activity_level",
    FitnessGoal => "fitness_goal",
    DietaryPreference => "dietary_preference",
    Equipment => "available_equipment",
);

/// Biometric profile and stated preferences for one plan computation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    /// Age in years (16-80)
    pub age: u32,
    /// Gender for the BMR formula branch
    pub gender: Gender,
    /// Height in centimeters
    pub height_cm: f64,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Habitual activity level
    pub activity_level: ActivityLevel,
    /// Primary training goal
    pub fitness_goal: FitnessGoal,
    /// Dietary preference
    pub dietary_preference: DietaryPreference,
    /// Free-form cuisine description (e.g. "South Asian (Indian/Pakistani)")
    pub cultural_food_habits: String,
    /// Daily food budget in USD
    pub budget_usd_per_day: f64,
    /// Equipment the user owns; empty means bodyweight only
    #[serde(default)]
    pub available_equipment: Vec<Equipment>,
    /// Injuries, tastes, or constraints in the user's own words
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub free_text_prefs: Option<String>,
}

impl UserProfile {
    /// Reject profiles that would make the formulas meaningless
    ///
    /// # Errors
    ///
    /// Returns a `ValueOutOfRange` error naming the first offending field
    pub fn validate(&self) -> AppResult<()> {
        if !(MIN_AGE..=MAX_AGE).contains(&self.age) {
            return Err(AppError::out_of_range(
                "age",
                format!("between {MIN_AGE} and {MAX_AGE} years"),
            ));
        }
        if !self.height_cm.is_finite() || self.height_cm <= 0.0 {
            return Err(AppError::out_of_range("height_cm", "a positive number"));
        }
        if !self.weight_kg.is_finite() || self.weight_kg <= 0.0 {
            return Err(AppError::out_of_range("weight_kg", "a positive number"));
        }
        if !self.budget_usd_per_day.is_finite() || self.budget_usd_per_day < 0.0 {
            return Err(AppError::out_of_range(
                "budget_usd_per_day",
                "a non-negative number",
            ));
        }
        Ok(())
    }

    /// Equipment list with duplicates removed, defaulting to bodyweight
    #[must_use]
    pub fn normalized_equipment(&self) -> Vec<Equipment> {
        let mut equipment: Vec<Equipment> = Vec::with_capacity(self.available_equipment.len());
        for item in &self.available_equipment {
            if !equipment.contains(item) {
                equipment.push(*item);
            }
        }
        if equipment.is_empty() {
            equipment.push(Equipment::Bodyweight);
        }
        equipment
    }

    /// Trimmed free-text preferences, `None` when absent or blank
    #[must_use]
    pub fn preference_text(&self) -> Option<&str> {
        self.free_text_prefs
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> UserProfile {
        UserProfile {
            age: 28,
            gender: Gender::Male,
            height_cm: 170.0,
            weight_kg: 70.0,
            activity_level: ActivityLevel::ModeratelyActive,
            fitness_goal: FitnessGoal::WeightLoss,
            dietary_preference: DietaryPreference::NonVegetarian,
            cultural_food_habits: "Western (European/American)".into(),
            budget_usd_per_day: 10.0,
            available_equipment: vec![],
            free_text_prefs: None,
        }
    }

    #[test]
    fn test_labels_round_trip_through_from_str() {
        for level in ActivityLevel::ALL {
            assert_eq!(level.as_str().parse::<ActivityLevel>().unwrap(), level);
        }
        assert_eq!(
            "pull-up bar".parse::<Equipment>().unwrap(),
            Equipment::PullUpBar
        );
        let err = "Couch Potato".parse::<ActivityLevel>().unwrap_err();
        assert_eq!(err.field(), Some("activity_level"));
    }

    #[test]
    fn test_serde_uses_display_labels() {
        let json = serde_json::to_string(&FitnessGoal::GeneralFitness).unwrap();
        assert_eq!(json, "\"General Fitness\"");
        let parsed: Equipment = serde_json::from_str("\"Resistance Bands\"").unwrap();
        assert_eq!(parsed, Equipment::ResistanceBands);
    }

    #[test]
    fn test_empty_equipment_defaults_to_bodyweight() {
        assert_eq!(profile().normalized_equipment(), vec![Equipment::Bodyweight]);

        let mut with_dupes = profile();
        with_dupes.available_equipment =
            vec![Equipment::Dumbbells, Equipment::Barbell, Equipment::Dumbbells];
        assert_eq!(
            with_dupes.normalized_equipment(),
            vec![Equipment::Dumbbells, Equipment::Barbell]
        );
    }

    #[test]
    fn test_validate_reports_offending_field() {
        assert!(profile().validate().is_ok());

        let mut young = profile();
        young.age = 12;
        assert_eq!(young.validate().unwrap_err().field(), Some("age"));

        let mut weightless = profile();
        weightless.weight_kg = 0.0;
        assert_eq!(weightless.validate().unwrap_err().field(), Some("weight_kg"));

        let mut nan_height = profile();
        nan_height.height_cm = f64::NAN;
        assert_eq!(nan_height.validate().unwrap_err().field(), Some("height_cm"));
    }

    #[test]
    fn test_blank_preference_text_is_none() {
        let mut blank = profile();
        blank.free_text_prefs = Some("   ".into());
        assert_eq!(blank.preference_text(), None);

        blank.free_text_prefs = Some("  bad knee ".into());
        assert_eq!(blank.preference_text(), Some("bad knee"));
    }
}
