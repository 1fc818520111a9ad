// ABOUTME: Derived health metrics, fitness assessment, and calorie/macro target models
// ABOUTME: Values produced fresh per plan computation and never mutated afterwards
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use std::fmt;

use serde::{Deserialize, Serialize};

/// BMI band with its display marker
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BmiCategory {
    /// Band label (e.g. "Normal Weight")
    pub label: String,
    /// Colored marker shown next to the label
    pub emoji: String,
    /// BMI rounded to one decimal
    pub value: f64,
}

/// Healthy weight range for a height (BMI 18.5-24.9)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WeightRange {
    /// Lower bound in kilograms
    pub min_kg: f64,
    /// Upper bound in kilograms
    pub max_kg: f64,
}

/// Metrics derived from the biometric profile
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DerivedMetrics {
    /// Body Mass Index (kg/m^2)
    pub bmi: f64,
    /// BMI band
    pub bmi_category: BmiCategory,
    /// Basal Metabolic Rate (kcal/day), Harris-Benedict revised
    pub bmr: f64,
    /// Total Daily Energy Expenditure (kcal/day)
    pub tdee: f64,
    /// Healthy weight range for the user's height
    pub ideal_weight_range: WeightRange,
    /// BMI-based body fat percentage estimate
    pub body_fat_pct: f64,
}

/// Human fitness tier assigned from a cluster label
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum FitnessLevel {
    /// New to structured training
    Beginner,
    /// Trains regularly
    Intermediate,
    /// Trains hard with good technique
    Advanced,
    /// Competitive athlete
    Elite,
}

impl FitnessLevel {
    /// All tiers in ascending order
    pub const ALL: [Self; 4] = [
        Self::Beginner,
        Self::Intermediate,
        Self::Advanced,
        Self::Elite,
    ];

    /// Map a cluster label (reduced modulo 4) to a tier
    #[must_use]
    pub const fn from_cluster(cluster: i64) -> Self {
        match cluster.rem_euclid(4) {
            0 => Self::Beginner,
            2 => Self::Advanced,
            3 => Self::Elite,
            _ => Self::Intermediate,
        }
    }

    /// Display label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::Elite => "Elite",
        }
    }
}

impl fmt::Display for FitnessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output of the cluster assignment step
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct FitnessAssessment {
    /// Raw cluster label from the assigner
    pub fitness_cluster: i64,
    /// Tier derived from the cluster label
    pub fitness_level: FitnessLevel,
}

impl FitnessAssessment {
    /// Build the assessment for a raw cluster label
    #[must_use]
    pub const fn from_cluster(cluster: i64) -> Self {
        Self {
            fitness_cluster: cluster,
            fitness_level: FitnessLevel::from_cluster(cluster),
        }
    }
}

/// Daily macronutrient targets
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MacroSplit {
    /// Protein grams (rounded to 0.1)
    pub protein_g: f64,
    /// Carbohydrate grams (rounded to 0.1)
    pub carbs_g: f64,
    /// Fat grams (rounded to 0.1)
    pub fat_g: f64,
    /// Share of calories from protein
    pub protein_pct: f64,
    /// Share of calories from carbohydrates
    pub carbs_pct: f64,
    /// Share of calories from fat
    pub fat_pct: f64,
}

impl MacroSplit {
    /// Energy implied by the gram targets (kcal)
    #[must_use]
    pub fn implied_calories(&self) -> f64 {
        use crate::constants::macro_energy::{
            CARBS_KCAL_PER_G, FAT_KCAL_PER_G, PROTEIN_KCAL_PER_G,
        };
        self.protein_g.mul_add(
            PROTEIN_KCAL_PER_G,
            self.carbs_g.mul_add(CARBS_KCAL_PER_G, self.fat_g * FAT_KCAL_PER_G),
        )
    }
}

/// Whether intake sits above or below expenditure
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BalanceLabel {
    /// Target intake exceeds TDEE
    Surplus,
    /// Target intake at or below TDEE
    Deficit,
}

/// Target intake compared with expenditure
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CalorieBalance {
    /// Total Daily Energy Expenditure (kcal)
    pub tdee: f64,
    /// Predicted daily intake target (kcal)
    pub target: f64,
    /// Planned workout burn averaged over the week (kcal/day)
    pub daily_workout_burn: f64,
    /// Target minus TDEE (kcal)
    pub net_balance: f64,
    /// Surplus or deficit
    pub label: BalanceLabel,
    /// Target minus the daily workout burn (kcal)
    pub net_after_workout: f64,
}
