// ABOUTME: Exercise catalog keyed by fitness level, goal, and equipment tier
// ABOUTME: Coverage is sparse; lookups fall back to the first populated entry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use fitplan_core::models::{Equipment, Exercise, FitnessGoal, FitnessLevel};

/// One catalog exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExerciseEntry {
    /// Exercise name
    pub name: &'static str,
    /// Sets and reps descriptor
    pub sets: &'static str,
    /// Target muscle group
    pub muscle: &'static str,
}

impl ExerciseEntry {
    /// Owned copy for a plan
    #[must_use]
    pub fn to_exercise(&self) -> Exercise {
        Exercise {
            name: self.name.to_owned(),
            sets: self.sets.to_owned(),
            muscle: self.muscle.to_owned(),
        }
    }
}

/// Exercises that need one kind of equipment
#[derive(Debug, Clone, Copy)]
pub struct EquipmentTier {
    /// Equipment the exercises need
    pub equipment: Equipment,
    /// Exercises in catalog order
    pub exercises: &'static [ExerciseEntry],
}

/// Equipment tiers populated for one goal
#[derive(Debug, Clone, Copy)]
pub struct GoalExercises {
    /// Training goal
    pub goal: FitnessGoal,
    /// Tiers in catalog order (never empty)
    pub tiers: &'static [EquipmentTier],
}

/// Goals populated for one fitness level
#[derive(Debug, Clone, Copy)]
pub struct LevelExercises {
    /// Fitness tier
    pub level: FitnessLevel,
    /// Goals in catalog order (never empty)
    pub goals: &'static [GoalExercises],
}

macro_rules! exercises {
    ($(($name:literal, $sets:literal, $muscle:literal)),* $(,)?) => {
        &[$(ExerciseEntry { name: $name, sets: $sets, muscle: $muscle }),*]
    };
}

/// Level used when a fitness level has no catalog entry
pub const FALLBACK_LEVEL: FitnessLevel = FitnessLevel::Intermediate;

/// The full exercise catalog
pub static EXERCISE_CATALOG: [LevelExercises; 4] = [
    LevelExercises {
        level: FitnessLevel::Beginner,
        goals: &[
            GoalExercises {
                goal: FitnessGoal::WeightLoss,
                tiers: &[
                    EquipmentTier {
                        equipment: Equipment::Bodyweight,
                        exercises: exercises![
                            ("Jumping Jacks", "3×30s", "Full Body"),
                            ("Bodyweight Squats", "3×15", "Quads / Glutes"),
                            ("Push-ups (Knee)", "3×10", "Chest / Triceps"),
                            ("Mountain Climbers", "3×20", "Core / Cardio"),
                            ("Glute Bridges", "3×15", "Glutes / Hamstrings"),
                            ("Plank Hold", "3×20s", "Core"),
                        ],
                    },
                    EquipmentTier {
                        equipment: Equipment::Dumbbells,
                        exercises: exercises![
                            ("DB Goblet Squat", "3×12", "Quads"),
                            ("DB Romanian Deadlift", "3×12", "Hamstrings"),
                            ("DB Shoulder Press", "3×10", "Shoulders"),
                            ("DB Bent-over Row", "3×12", "Back"),
                            ("DB Bicep Curl", "3×12", "Biceps"),
                            ("DB Tricep Kickback", "3×12", "Triceps"),
                        ],
                    },
                ],
            },
            GoalExercises {
                goal: FitnessGoal::MuscleGain,
                tiers: &[
                    EquipmentTier {
                        equipment: Equipment::Bodyweight,
                        exercises: exercises![
                            ("Push-ups", "4×12", "Chest / Triceps"),
                            ("Inverted Rows", "4×10", "Back / Biceps"),
                            ("Jump Squats", "4×10", "Quads / Glutes"),
                            ("Dips (Chair)", "3×10", "Triceps / Chest"),
                            ("Pike Push-ups", "3×10", "Shoulders"),
                            ("Plank to Push-up", "3×8", "Core / Chest"),
                        ],
                    },
                    EquipmentTier {
                        equipment: Equipment::Dumbbells,
                        exercises: exercises![
                            ("DB Bench Press", "4×10", "Chest"),
                            ("DB Deadlift", "4×10", "Posterior Chain"),
                            ("DB Squat", "4×12", "Quads / Glutes"),
                            ("DB Overhead Press", "4×10", "Shoulders"),
                            ("DB Row", "4×10", "Back"),
                            ("DB Curl + Press", "3×10", "Biceps / Shoulders"),
                        ],
                    },
                ],
            },
        ],
    },
    LevelExercises {
        level: FitnessLevel::Intermediate,
        goals: &[
            GoalExercises {
                goal: FitnessGoal::WeightLoss,
                tiers: &[
                    EquipmentTier {
                        equipment: Equipment::Bodyweight,
                        exercises: exercises![
                            ("Burpees", "4×10", "Full Body"),
                            ("Box Jumps", "4×8", "Legs / Power"),
                            ("Spiderman Push-ups", "4×10", "Chest / Core"),
                            ("Bulgarian Split Squat", "3×12", "Quads / Glutes"),
                            ("Bear Crawls", "3×20m", "Full Body"),
                            ("V-ups", "4×15", "Core"),
                        ],
                    },
                    EquipmentTier {
                        equipment: Equipment::Barbell,
                        exercises: exercises![
                            ("Barbell Squat", "4×10", "Quads / Glutes"),
                            ("Deadlift", "4×8", "Posterior Chain"),
                            ("Bench Press", "4×10", "Chest"),
                            ("Bent-over Row", "4×10", "Back"),
                            ("Overhead Press", "3×10", "Shoulders"),
                            ("Romanian Deadlift", "3×12", "Hamstrings"),
                        ],
                    },
                ],
            },
            GoalExercises {
                goal: FitnessGoal::MuscleGain,
                tiers: &[
                    EquipmentTier {
                        equipment: Equipment::Barbell,
                        exercises: exercises![
                            ("Barbell Squat", "5×5", "Quads / Glutes"),
                            ("Bench Press", "5×5", "Chest"),
                            ("Deadlift", "4×5", "Full Posterior"),
                            ("Barbell Row", "4×6", "Back"),
                            ("Overhead Press", "4×6", "Shoulders"),
                            ("Barbell Hip Thrust", "4×10", "Glutes"),
                        ],
                    },
                    EquipmentTier {
                        equipment: Equipment::Dumbbells,
                        exercises: exercises![
                            ("DB Incline Press", "4×10", "Upper Chest"),
                            ("DB Lateral Raise", "4×15", "Side Delts"),
                            ("Hammer Curl", "3×12", "Biceps / Brachialis"),
                            ("Skull Crushers", "3×12", "Triceps"),
                            ("Bulgarian Split Squat", "4×10", "Quads / Glutes"),
                            ("DB Shrugs", "3×15", "Traps"),
                        ],
                    },
                ],
            },
        ],
    },
    LevelExercises {
        level: FitnessLevel::Advanced,
        goals: &[
            GoalExercises {
                goal: FitnessGoal::MuscleGain,
                tiers: &[
                    EquipmentTier {
                        equipment: Equipment::Barbell,
                        exercises: exercises![
                            ("Squat (Heavy)", "6×4", "Quads / Glutes"),
                            ("Deadlift (Heavy)", "5×3", "Full Posterior"),
                            ("Bench Press (Heavy)", "5×4", "Chest"),
                            ("Weighted Pull-ups", "5×5", "Back / Biceps"),
                            ("Push Press", "4×5", "Shoulders / Triceps"),
                            ("Barbell Lunge", "4×8/leg", "Quads / Glutes"),
                        ],
                    },
                    EquipmentTier {
                        equipment: Equipment::Bodyweight,
                        exercises: exercises![
                            ("Muscle-ups", "4×5", "Full Upper Body"),
                            ("Pistol Squats", "4×6/leg", "Quads / Balance"),
                            ("Handstand Push-ups", "3×6", "Shoulders / Triceps"),
                            ("Dragon Flags", "3×6", "Core"),
                            ("One-arm Row", "4×8", "Back"),
                            ("Plyometric Push-ups", "4×10", "Chest / Power"),
                        ],
                    },
                ],
            },
            GoalExercises {
                goal: FitnessGoal::Endurance,
                tiers: &[EquipmentTier {
                    equipment: Equipment::Bodyweight,
                    exercises: exercises![
                        ("EMOM Burpees (10min)", "1×10min", "Full Body"),
                        ("Double Unders", "5×50", "Cardio / Calves"),
                        ("Air Squats Tabata", "8×20s", "Legs"),
                        ("Pull-ups AMRAP", "4×max", "Back / Biceps"),
                        ("Push-up AMRAP", "4×max", "Chest / Triceps"),
                        ("L-sit Hold", "4×15s", "Core"),
                    ],
                }],
            },
        ],
    },
    LevelExercises {
        level: FitnessLevel::Elite,
        goals: &[GoalExercises {
            goal: FitnessGoal::MuscleGain,
            tiers: &[
                EquipmentTier {
                    equipment: Equipment::Barbell,
                    exercises: exercises![
                        ("Competition Squat", "7×3", "Quads / Glutes"),
                        ("Sumo Deadlift", "6×2", "Full Posterior"),
                        ("Close-grip Bench", "5×4", "Chest / Triceps"),
                        ("Pendlay Row", "5×5", "Back"),
                        ("Z-press", "4×6", "Shoulders"),
                        ("Pause Squat", "4×5", "Quads / Core"),
                    ],
                },
                EquipmentTier {
                    equipment: Equipment::Bodyweight,
                    exercises: exercises![
                        ("Ring Muscle-ups", "5×5", "Full Upper Body"),
                        ("Planche Hold", "5×5s", "Chest / Core"),
                        ("Front Lever Row", "4×5", "Back"),
                        ("HSPUs (Strict)", "5×5", "Shoulders"),
                        ("Pistol Squat Depth", "4×8/leg", "Quads"),
                        ("Dragon Flag", "4×8", "Core"),
                    ],
                },
            ],
        }],
    },
];

/// Catalog section for a level, falling back to Intermediate
#[must_use]
pub fn level_entry(level: FitnessLevel) -> &'static LevelExercises {
    let find = |wanted: FitnessLevel| EXERCISE_CATALOG.iter().find(|entry| entry.level == wanted);
    find(level)
        .or_else(|| find(FALLBACK_LEVEL))
        .unwrap_or(&EXERCISE_CATALOG[0])
}

/// Equipment tiers for a level and goal.
///
/// Falls back to the level's first populated goal when the pair has no entry.
#[must_use]
pub fn goal_tiers(level: FitnessLevel, goal: FitnessGoal) -> &'static [EquipmentTier] {
    let goals = level_entry(level).goals;
    goals
        .iter()
        .find(|entry| entry.goal == goal)
        .or_else(|| goals.first())
        .map_or(&[], |entry| entry.tiers)
}
