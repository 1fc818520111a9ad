// ABOUTME: Seven-day workout schedule generation and weekly calorie burn estimate
// ABOUTME: Deterministic per-day exercise shuffles seeded from level and day index
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use rand::seq::SliceRandom;
use tracing::debug;

use fitplan_core::constants::workout::{
    EXTENDED_SESSION_MIN, MAX_EXERCISES_PER_DAY, MIN_EXERCISES_PER_DAY, PERSONALIZATION_MARKER,
    REST_DAY_NOTE, SESSION_HOURS, STANDARD_SESSION_MIN,
};
use fitplan_core::models::{
    DayEntry, DayType, Equipment, FitnessGoal, FitnessLevel, Weekday, WorkoutPlan,
};

use crate::catalog::{coaching_note, goal_tiers, is_rest_focus, weekly_structure, EquipmentTier};
use crate::seeding::seeded_rng;

/// Equipment preference order when choosing a catalog tier
pub const EQUIPMENT_PRIORITY: [Equipment; 5] = [
    Equipment::Barbell,
    Equipment::Dumbbells,
    Equipment::ResistanceBands,
    Equipment::Bodyweight,
    Equipment::Machines,
];

/// Pick the exercise tier for the user's equipment.
///
/// Walks [`EQUIPMENT_PRIORITY`] and returns the first tier the user owns that
/// the catalog populates. Falls back to the catalog's first tier.
#[must_use]
pub fn resolve_equipment_tier<'a>(
    tiers: &'a [EquipmentTier],
    available_equipment: &[Equipment],
) -> Option<&'a EquipmentTier> {
    let owned: &[Equipment] = if available_equipment.is_empty() {
        &[Equipment::Bodyweight]
    } else {
        available_equipment
    };

    EQUIPMENT_PRIORITY
        .iter()
        .filter(|equipment| owned.contains(*equipment))
        .find_map(|equipment| tiers.iter().find(|tier| tier.equipment == *equipment))
        .or_else(|| tiers.first())
}

/// Sessions per week by fitness level
const fn sessions_per_week(level: FitnessLevel) -> f64 {
    match level {
        FitnessLevel::Beginner => 4.0,
        FitnessLevel::Intermediate => 5.0,
        FitnessLevel::Advanced | FitnessLevel::Elite => 6.0,
    }
}

/// MET-like intensity by goal
const fn session_met(goal: FitnessGoal) -> f64 {
    match goal {
        FitnessGoal::WeightLoss => 7.0,
        FitnessGoal::MuscleGain => 5.5,
        FitnessGoal::Endurance => 8.5,
        FitnessGoal::GeneralFitness => 6.0,
        FitnessGoal::Maintenance => 5.0,
    }
}

const fn session_minutes(level: FitnessLevel) -> u32 {
    match level {
        FitnessLevel::Beginner | FitnessLevel::Intermediate => STANDARD_SESSION_MIN,
        FitnessLevel::Advanced | FitnessLevel::Elite => EXTENDED_SESSION_MIN,
    }
}

/// Coaching note for a focus, with the first personalization note appended
fn workout_note(focus: &str, notes: &[String]) -> String {
    let base = coaching_note(focus);
    notes.first().map_or_else(
        || base.to_owned(),
        |note| format!("{base} {PERSONALIZATION_MARKER} {note}"),
    )
}

/// Weekly workout schedule generator
pub struct WorkoutPlanner;

impl WorkoutPlanner {
    /// Build the 7-day schedule.
    ///
    /// Identical inputs always produce an identical plan: each training day's
    /// exercise order comes from a generator seeded with the level and day index.
    #[must_use]
    pub fn generate(
        fitness_level: FitnessLevel,
        fitness_goal: FitnessGoal,
        available_equipment: &[Equipment],
        notes: &[String],
    ) -> WorkoutPlan {
        let structure = weekly_structure(fitness_goal);
        let tier =
            resolve_equipment_tier(goal_tiers(fitness_level, fitness_goal), available_equipment);
        let exercises = tier.map_or(&[][..], |tier| tier.exercises);

        debug!(
            fitness_level = %fitness_level,
            fitness_goal = %fitness_goal,
            equipment_tier = ?tier.map(|tier| tier.equipment),
            "Resolved workout exercise tier"
        );

        let days = Weekday::ALL
            .iter()
            .zip(structure)
            .enumerate()
            .map(|(index, (day, focus))| {
                if is_rest_focus(focus) {
                    return DayEntry {
                        day: day.as_str().to_owned(),
                        focus: focus.to_owned(),
                        day_type: DayType::Rest,
                        exercises: Vec::new(),
                        duration_min: 0,
                        notes: REST_DAY_NOTE.to_owned(),
                    };
                }

                let mut rng =
                    seeded_rng(&["workout", fitness_level.as_str(), &index.to_string()]);
                let mut shuffled = exercises.to_vec();
                shuffled.shuffle(&mut rng);
                shuffled.truncate(
                    MAX_EXERCISES_PER_DAY.min(MIN_EXERCISES_PER_DAY.max(shuffled.len())),
                );

                DayEntry {
                    day: day.as_str().to_owned(),
                    focus: focus.to_owned(),
                    day_type: DayType::Workout,
                    exercises: shuffled.iter().map(|entry| entry.to_exercise()).collect(),
                    duration_min: session_minutes(fitness_level),
                    notes: workout_note(focus, notes),
                }
            })
            .collect();

        WorkoutPlan { days }
    }

    /// Rough weekly workout burn: sessions x MET x weight x 0.75 h, whole kcal
    #[must_use]
    pub fn estimate_weekly_calorie_burn(
        fitness_level: FitnessLevel,
        fitness_goal: FitnessGoal,
        weight_kg: f64,
    ) -> f64 {
        (session_met(fitness_goal) * weight_kg * SESSION_HOURS * sessions_per_week(fitness_level))
            .round()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_has_seven_days_in_order() {
        let plan = WorkoutPlanner::generate(
            FitnessLevel::Intermediate,
            FitnessGoal::WeightLoss,
            &[Equipment::Bodyweight],
            &[],
        );

        let days: Vec<&str> = plan.days.iter().map(|entry| entry.day.as_str()).collect();
        let expected: Vec<&str> = Weekday::ALL.iter().map(|day| day.as_str()).collect();
        assert_eq!(days, expected);
        assert_eq!(plan.days[1].focus, "Rest / Walk");
        assert_eq!(plan.days[1].day_type, DayType::Rest);
        assert!(plan.days[1].exercises.is_empty());
        assert_eq!(plan.days[1].notes, REST_DAY_NOTE);
    }

    #[test]
    fn test_training_days_have_four_to_six_exercises() {
        for level in FitnessLevel::ALL {
            for goal in FitnessGoal::ALL {
                let plan = WorkoutPlanner::generate(level, goal, &[Equipment::Dumbbells], &[]);
                for entry in plan.days.iter().filter(|e| e.day_type == DayType::Workout) {
                    assert!((4..=6).contains(&entry.exercises.len()), "{level} {goal}");
                }
            }
        }
    }

    #[test]
    fn test_generation_is_deterministic() {
        let notes = vec!["Use resistance bands as primary equipment for home workouts.".to_owned()];
        let first = WorkoutPlanner::generate(
            FitnessLevel::Advanced,
            FitnessGoal::MuscleGain,
            &[Equipment::Barbell],
            &notes,
        );
        let second = WorkoutPlanner::generate(
            FitnessLevel::Advanced,
            FitnessGoal::MuscleGain,
            &[Equipment::Barbell],
            &notes,
        );
        assert_eq!(first, second);
    }

    #[test]
    fn test_session_length_by_level() {
        let beginner =
            WorkoutPlanner::generate(FitnessLevel::Beginner, FitnessGoal::MuscleGain, &[], &[]);
        let elite =
            WorkoutPlanner::generate(FitnessLevel::Elite, FitnessGoal::MuscleGain, &[], &[]);

        assert_eq!(beginner.days[0].duration_min, 45);
        assert_eq!(elite.days[0].duration_min, 60);
    }

    #[test]
    fn test_equipment_priority_prefers_barbell() {
        let tiers = goal_tiers(FitnessLevel::Intermediate, FitnessGoal::MuscleGain);

        let tier = resolve_equipment_tier(tiers, &[Equipment::Dumbbells, Equipment::Barbell]);
        assert_eq!(tier.map(|t| t.equipment), Some(Equipment::Barbell));

        // bands are not in this catalog entry, so the first tier wins
        let tier = resolve_equipment_tier(tiers, &[Equipment::ResistanceBands]);
        assert_eq!(tier.map(|t| t.equipment), Some(Equipment::Barbell));

        let tier = resolve_equipment_tier(tiers, &[Equipment::Dumbbells]);
        assert_eq!(tier.map(|t| t.equipment), Some(Equipment::Dumbbells));
    }

    #[test]
    fn test_empty_equipment_means_bodyweight() {
        let tiers = goal_tiers(FitnessLevel::Beginner, FitnessGoal::WeightLoss);
        let tier = resolve_equipment_tier(tiers, &[]);
        assert_eq!(tier.map(|t| t.equipment), Some(Equipment::Bodyweight));
    }

    #[test]
    fn test_personalization_note_appended_to_training_days() {
        let notes = vec!["Incorporate HIIT sessions three times per week.".to_owned()];
        let plan = WorkoutPlanner::generate(
            FitnessLevel::Beginner,
            FitnessGoal::WeightLoss,
            &[Equipment::Bodyweight],
            &notes,
        );

        assert_eq!(
            plan.days[0].notes,
            concat!(
                "Keep rest < 30s; heart rate 75-85% max. ",
                "\u{2605} Incorporate HIIT sessions three times per week."
            )
        );
        assert_eq!(plan.days[6].notes, REST_DAY_NOTE);
    }

    #[test]
    fn test_weekly_burn() {
        // 7.0 MET x 70 kg x 0.75 h x 5 sessions
        let burn = WorkoutPlanner::estimate_weekly_calorie_burn(
            FitnessLevel::Intermediate,
            FitnessGoal::WeightLoss,
            70.0,
        );
        assert!((burn - 1838.0).abs() < f64::EPSILON);
    }
}
