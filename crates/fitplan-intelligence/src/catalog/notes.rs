// ABOUTME: Candidate bank of personalization notes matched against free-text preferences
// ABOUTME: Curated training and nutrition adjustments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use fitplan_core::models::{FitnessGoal, FitnessLevel};

/// Every candidate adjustment note
pub const CANDIDATE_NOTES: [&str; 18] = [
    "Avoid high-impact exercises due to knee pain; substitute with low-impact alternatives.",
    "Incorporate swimming or cycling for cardiovascular training.",
    "Focus on upper-body exercises only to protect lower back injury.",
    "Add yoga and mobility work for flexibility improvement.",
    "Include daily stretching routine for injury prevention.",
    "Prefer plant-based protein sources like lentils, tofu, and tempeh.",
    "Avoid gluten-containing foods; use rice and quinoa as carb bases.",
    "Incorporate high-fibre vegetables for digestive health.",
    "Reduce sodium intake; focus on whole, unprocessed foods.",
    "Include omega-3 rich foods like flaxseed and walnuts.",
    "Prefer spicy cuisine; incorporate jalapeños and hot sauce.",
    "Focus on quick-prep meals under 20 minutes.",
    "Batch-cook on Sundays for the week ahead.",
    "Include intermittent fasting window (16:8).",
    "Focus on progressive overload with barbell compound movements.",
    "Use resistance bands as primary equipment for home workouts.",
    "Incorporate HIIT sessions three times per week.",
    "Prioritise recovery; include active rest days with walking.",
];

/// Candidate notes for a level and goal.
///
/// The bank is currently shared by every level and goal. The parameters are
/// the hook for level- or goal-specific banks.
#[must_use]
pub const fn candidate_bank(
    _fitness_level: FitnessLevel,
    _fitness_goal: FitnessGoal,
) -> &'static [&'static str] {
    &CANDIDATE_NOTES
}
