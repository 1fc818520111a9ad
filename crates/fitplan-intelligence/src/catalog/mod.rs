// ABOUTME: Static knowledge bases used by the planners and the preference matcher
// ABOUTME: Exercises, weekly structures, foods, and candidate personalization notes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

//! Content catalog
//!
//! Read-only data compiled into the binary. Lookups never fail: a combination
//! the catalog does not cover resolves to a documented default entry.

/// Exercise catalog by level, goal, and equipment
pub mod exercises;

/// Food catalog by diet, cuisine, and meal category
pub mod foods;

/// Personalization note bank
pub mod notes;

/// Weekly focus structures and coaching notes
pub mod structure;

pub use exercises::{goal_tiers, EquipmentTier, ExerciseEntry, EXERCISE_CATALOG};
pub use foods::{
    menu, resolve_culture_key, resolve_diet_key, CuisineMenu, CultureKey, DietKey, FoodItem,
    FALLBACK_FOOD,
};
pub use notes::{candidate_bank, CANDIDATE_NOTES};
pub use structure::{coaching_note, is_rest_focus, weekly_structure, WeekStructure};
