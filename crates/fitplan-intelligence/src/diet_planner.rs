// ABOUTME: Seven-day meal schedule generation from calorie and macro targets
// ABOUTME: Diet and cuisine resolution, per-slot calorie fractions, and budget tracking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use rand::seq::SliceRandom;
use tracing::debug;

use fitplan_core::models::{
    DayMeals, DietPlan, DietaryPreference, MacroSplit, Meal, MealSlot, Weekday,
};

use crate::catalog::{menu, resolve_culture_key, resolve_diet_key, FoodItem, FALLBACK_FOOD};
use crate::round_to;
use crate::seeding::seeded_rng;

fn meal_for(slot: MealSlot, item: &FoodItem, daily_calories: f64) -> Meal {
    Meal {
        name: slot.as_str().to_owned(),
        item: item.item.to_owned(),
        calories: (daily_calories * slot.calorie_fraction()).round().max(0.0) as u32,
        protein: item.protein,
        carbs: item.carbs,
        fat: item.fat,
        cost: round_to(item.cost, 2),
    }
}

/// Weekly meal schedule generator
pub struct DietPlanner;

impl DietPlanner {
    /// Build the 7-day meal plan.
    ///
    /// Each weekday's dish choices come from a generator seeded with the day
    /// name, so a day always gets the same dishes for the same menu. Catalog
    /// macros and costs are carried unchanged; only slot calories scale with
    /// `daily_calories`.
    #[must_use]
    pub fn generate(
        daily_calories: f64,
        macros: MacroSplit,
        dietary_preference: DietaryPreference,
        cultural_food_habits: &str,
        budget_usd: f64,
        notes: &[String],
    ) -> DietPlan {
        let diet_key = resolve_diet_key(dietary_preference);
        let culture_key = resolve_culture_key(cultural_food_habits);
        let menu = menu(diet_key, culture_key);

        debug!(?diet_key, ?culture_key, "Resolved diet catalog section");

        let daily_template = MealSlot::ALL
            .iter()
            .map(|&slot| {
                let item = menu.items(slot.category()).first().unwrap_or(&FALLBACK_FOOD);
                meal_for(slot, item, daily_calories)
            })
            .collect();

        let weekly_plan = Weekday::ALL
            .iter()
            .map(|day| {
                let mut rng = seeded_rng(&["diet", day.as_str()]);
                let meals: Vec<Meal> = MealSlot::ALL
                    .iter()
                    .map(|&slot| {
                        let item = menu
                            .items(slot.category())
                            .choose(&mut rng)
                            .unwrap_or(&FALLBACK_FOOD);
                        meal_for(slot, item, daily_calories)
                    })
                    .collect();
                let total_cost = round_to(meals.iter().map(|meal| meal.cost).sum(), 2);

                DayMeals {
                    day: day.as_str().to_owned(),
                    meals,
                    total_cost,
                    within_budget: total_cost <= budget_usd,
                }
            })
            .collect();

        DietPlan {
            weekly_plan,
            daily_template,
            total_daily_cal: daily_calories,
            macros,
            budget_usd,
            dietary_preference,
            cultural_food_habits: cultural_food_habits.to_owned(),
            nlp_adjustment: notes.get(1).cloned(),
        }
    }
}
