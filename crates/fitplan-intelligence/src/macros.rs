// ABOUTME: Goal-driven macronutrient split with fixed percentage tables
// ABOUTME: Converts a calorie target into protein, carbohydrate, and fat grams
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use fitplan_core::constants::macro_energy::{
    CARBS_KCAL_PER_G, FAT_KCAL_PER_G, PROTEIN_KCAL_PER_G,
};
use fitplan_core::models::{FitnessGoal, MacroSplit};

use crate::round_to;

/// Share of calories assigned to each macronutrient; the three shares sum to 1.0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroRatios {
    /// Protein share
    pub protein: f64,
    /// Carbohydrate share
    pub carbs: f64,
    /// Fat share
    pub fat: f64,
}

const GENERAL_FITNESS_RATIOS: MacroRatios = MacroRatios {
    protein: 0.25,
    carbs: 0.45,
    fat: 0.30,
};

const GOAL_RATIOS: [(&str, MacroRatios); 5] = [
    (
        "Weight Loss",
        MacroRatios {
            protein: 0.35,
            carbs: 0.35,
            fat: 0.30,
        },
    ),
    (
        "Muscle Gain",
        MacroRatios {
            protein: 0.30,
            carbs: 0.45,
            fat: 0.25,
        },
    ),
    (
        "Endurance",
        MacroRatios {
            protein: 0.20,
            carbs: 0.55,
            fat: 0.25,
        },
    ),
    ("General Fitness", GENERAL_FITNESS_RATIOS),
    ("Maintenance", GENERAL_FITNESS_RATIOS),
];

/// Percentage table row for a goal
#[must_use]
pub fn macro_ratios(goal: FitnessGoal) -> MacroRatios {
    macro_ratios_for_label(goal.as_str())
}

/// Percentage table row for a goal label; labels outside the table get General Fitness
#[must_use]
pub fn macro_ratios_for_label(label: &str) -> MacroRatios {
    GOAL_RATIOS
        .iter()
        .find(|(goal, _)| *goal == label)
        .map_or(GENERAL_FITNESS_RATIOS, |&(_, ratios)| ratios)
}

/// Split a daily calorie target into gram targets (rounded to 0.1 g)
#[must_use]
pub fn compute_macros(calories: f64, goal: FitnessGoal) -> MacroSplit {
    let ratios = macro_ratios(goal);
    MacroSplit {
        protein_g: round_to(calories * ratios.protein / PROTEIN_KCAL_PER_G, 1),
        carbs_g: round_to(calories * ratios.carbs / CARBS_KCAL_PER_G, 1),
        fat_g: round_to(calories * ratios.fat / FAT_KCAL_PER_G, 1),
        protein_pct: ratios.protein,
        carbs_pct: ratios.carbs,
        fat_pct: ratios.fat,
    }
}

/// One-sentence explanation of the split chosen for a goal
#[must_use]
pub const fn macro_rationale(goal: FitnessGoal) -> &'static str {
    match goal {
        FitnessGoal::WeightLoss => {
            "High protein (35%) preserves lean mass during deficit. Moderate carbs fuel \
             workouts; healthy fats support hormonal function."
        }
        FitnessGoal::MuscleGain => {
            "Elevated carbs (45%) fuel hypertrophy training sessions. High protein supports \
             muscle protein synthesis. Moderate fat for hormone production."
        }
        FitnessGoal::Endurance => {
            "Carbohydrate-dominant (55%) macro split fuels aerobic systems. Lower protein \
             sufficient for endurance athletes. Controlled fat for sustained energy."
        }
        FitnessGoal::GeneralFitness => {
            "Balanced split supporting overall health, energy, and recovery."
        }
        FitnessGoal::Maintenance => {
            "Maintenance split mirrors General Fitness, sustaining current body composition."
        }
    }
}
