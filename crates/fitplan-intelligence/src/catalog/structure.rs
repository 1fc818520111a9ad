// ABOUTME: Weekly training structure per goal and per-focus coaching notes
// ABOUTME: Each goal maps to seven focus labels, Monday first
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use fitplan_core::models::FitnessGoal;

/// Seven focus labels, Monday first
pub type WeekStructure = [&'static str; 7];

const GENERAL_FITNESS_WEEK: WeekStructure = [
    "Full Body",
    "Cardio",
    "Rest",
    "Upper",
    "Lower",
    "Cardio",
    "Rest",
];

/// Coaching note for focus labels without a dedicated one
pub const GENERIC_COACHING_NOTE: &str = "Focus on quality reps over speed.";

const COACHING_NOTES: [(&str, &str); 10] = [
    ("Full Body HIIT", "Keep rest < 30s; heart rate 75-85% max."),
    (
        "Upper Body",
        "Focus on mind-muscle connection; controlled negatives.",
    ),
    ("Lower Body", "Drive through heels; full depth on squats."),
    (
        "Push",
        "Progressive overload: add 2.5kg when you hit top of rep range.",
    ),
    (
        "Pull",
        "Control the eccentric; aim for full shoulder extension.",
    ),
    ("Legs", "Warm up thoroughly; prioritise form over load."),
    ("Cardio", "Maintain conversational pace for aerobic base."),
    ("Strength", "Rest 2-3 min between heavy sets."),
    (
        "Full Body",
        "Compound-first ordering; save isolation for the end.",
    ),
    ("Long Cardio", "Zone 2 intensity: 60-70% max HR for 45-90 min."),
];

const GOAL_WEEKS: [(&str, WeekStructure); 5] = [
    (
        "Weight Loss",
        [
            "Full Body HIIT",
            "Rest / Walk",
            "Upper Body",
            "Cardio",
            "Lower Body",
            "Full Body",
            "Rest",
        ],
    ),
    (
        "Muscle Gain",
        ["Push", "Pull", "Legs", "Rest", "Push", "Pull", "Legs"],
    ),
    (
        "Endurance",
        [
            "Cardio",
            "Strength",
            "Cardio",
            "Rest",
            "Cardio",
            "Strength",
            "Long Cardio",
        ],
    ),
    ("General Fitness", GENERAL_FITNESS_WEEK),
    (
        "Maintenance",
        [
            "Full Body",
            "Rest",
            "Full Body",
            "Cardio",
            "Full Body",
            "Cardio",
            "Rest",
        ],
    ),
];

/// Weekly focus sequence for a goal
#[must_use]
pub fn weekly_structure(goal: FitnessGoal) -> WeekStructure {
    weekly_structure_for_label(goal.as_str())
}

/// Weekly focus sequence for a goal label; labels outside the table get General Fitness
#[must_use]
pub fn weekly_structure_for_label(label: &str) -> WeekStructure {
    GOAL_WEEKS
        .iter()
        .find(|(goal, _)| *goal == label)
        .map_or(GENERAL_FITNESS_WEEK, |&(_, week)| week)
}

/// Whether a focus label marks a recovery day
#[must_use]
pub fn is_rest_focus(focus: &str) -> bool {
    focus.contains("Rest")
}

/// Coaching note for a focus label
#[must_use]
pub fn coaching_note(focus: &str) -> &'static str {
    COACHING_NOTES
        .iter()
        .find(|(label, _)| *label == focus)
        .map_or(GENERIC_COACHING_NOTE, |&(_, note)| note)
}
