// ABOUTME: Food catalog keyed by diet type, regional cuisine, and meal category
// ABOUTME: Diet and culture resolution from free-form profile values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use fitplan_core::models::{DietaryPreference, MealCategory};

/// One catalog dish with fixed macros and cost
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FoodItem {
    /// Dish description
    pub item: &'static str,
    /// Protein grams
    pub protein: f64,
    /// Carbohydrate grams
    pub carbs: f64,
    /// Fat grams
    pub fat: f64,
    /// Cost in USD
    pub cost: f64,
}

/// Dish used when a catalog category is empty
pub const FALLBACK_FOOD: FoodItem = FoodItem {
    item: "Mixed salad",
    protein: 10.0,
    carbs: 20.0,
    fat: 5.0,
    cost: 1.00,
};

/// Dishes for one diet and cuisine, split by meal category
#[derive(Debug, Clone, Copy)]
pub struct CuisineMenu {
    /// Breakfast dishes
    pub breakfast: &'static [FoodItem],
    /// Lunch dishes
    pub lunch: &'static [FoodItem],
    /// Snack dishes
    pub snack: &'static [FoodItem],
    /// Dinner dishes
    pub dinner: &'static [FoodItem],
}

impl CuisineMenu {
    /// Dishes for a category
    #[must_use]
    pub const fn items(&self, category: MealCategory) -> &'static [FoodItem] {
        match category {
            MealCategory::Breakfast => self.breakfast,
            MealCategory::Snack => self.snack,
            MealCategory::Lunch => self.lunch,
            MealCategory::Dinner => self.dinner,
        }
    }
}

/// Catalog diet section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DietKey {
    /// Meat, fish, and eggs allowed
    NonVegetarian,
    /// No meat or fish
    Vegetarian,
    /// No animal products
    Vegan,
}

/// Catalog cuisine section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CultureKey {
    /// Indian subcontinent and neighbouring cuisines
    SouthAsian,
    /// European and American cuisine
    Western,
}

/// Substrings that route a cuisine description to the South Asian menu
pub const SOUTH_ASIAN_KEYWORDS: [&str; 4] = [
    "Indian",
    "South Asian",
    "Middle Eastern",
    "Southeast Asian",
];

/// Map a dietary preference onto the three catalog sections.
///
/// Pescatarian, Keto, and Paleo have no dedicated menus and use Non-Vegetarian.
#[must_use]
pub const fn resolve_diet_key(preference: DietaryPreference) -> DietKey {
    match preference {
        DietaryPreference::Vegetarian => DietKey::Vegetarian,
        DietaryPreference::Vegan => DietKey::Vegan,
        DietaryPreference::NonVegetarian
        | DietaryPreference::Pescatarian
        | DietaryPreference::Keto
        | DietaryPreference::Paleo => DietKey::NonVegetarian,
    }
}

/// Classify a free-form cuisine description by case-sensitive keyword match
#[must_use]
pub fn resolve_culture_key(cultural_food_habits: &str) -> CultureKey {
    if SOUTH_ASIAN_KEYWORDS
        .iter()
        .any(|keyword| cultural_food_habits.contains(keyword))
    {
        CultureKey::SouthAsian
    } else {
        CultureKey::Western
    }
}

macro_rules! foods {
    ($(($item:literal, $protein:literal, $carbs:literal, $fat:literal, $cost:literal)),* $(,)?) => {
        &[$(FoodItem { item: $item, protein: $protein, carbs: $carbs, fat: $fat, cost: $cost }),*]
    };
}

static VEGETARIAN_SOUTH_ASIAN: CuisineMenu = CuisineMenu {
    breakfast: foods![
        ("Masala Oats with milk", 12.0, 45.0, 8.0, 0.80),
        ("Idli (3) + Sambar + Chutney", 10.0, 55.0, 4.0, 0.60),
        ("Poha with peanuts + boiled egg", 14.0, 48.0, 7.0, 0.70),
    ],
    lunch: foods![
        ("Brown rice + Dal + Mixed veg sabzi + Raita", 18.0, 70.0, 6.0, 1.20),
        ("Roti (3) + Paneer curry + Salad", 22.0, 55.0, 14.0, 1.50),
        ("Rajma rice + Curd", 20.0, 72.0, 5.0, 1.10),
    ],
    snack: foods![
        ("Greek yogurt + banana", 14.0, 30.0, 2.0, 0.50),
        ("Roasted chana + sprouts", 12.0, 22.0, 3.0, 0.40),
        ("Paneer cubes + cucumber", 16.0, 5.0, 10.0, 0.70),
    ],
    dinner: foods![
        ("Chapati (2) + Palak tofu + Dal soup", 24.0, 55.0, 8.0, 1.30),
        ("Khichdi (rice + moong) + Ghee + Papad", 16.0, 65.0, 7.0, 0.90),
        ("Paneer tikka + roti (2) + salad", 28.0, 48.0, 12.0, 1.80),
    ],
};

static VEGETARIAN_WESTERN: CuisineMenu = CuisineMenu {
    breakfast: foods![
        ("Overnight oats + chia + berries", 12.0, 55.0, 8.0, 1.20),
        ("Whole-grain toast + avocado + poached eggs", 18.0, 38.0, 16.0, 2.00),
        ("Smoothie bowl (banana, protein powder, granola)", 22.0, 60.0, 5.0, 1.80),
    ],
    lunch: foods![
        ("Quinoa salad + chickpeas + feta + olive oil", 18.0, 52.0, 12.0, 2.50),
        ("Lentil soup + whole-grain bread", 16.0, 55.0, 5.0, 1.50),
        ("Buddha bowl (brown rice, roasted veg, tahini)", 14.0, 65.0, 10.0, 2.20),
    ],
    snack: foods![
        ("Apple + almond butter", 5.0, 28.0, 8.0, 0.80),
        ("Cottage cheese + pineapple", 18.0, 18.0, 2.0, 1.00),
        ("Hummus + carrot sticks", 7.0, 20.0, 6.0, 0.70),
    ],
    dinner: foods![
        ("Stuffed bell peppers (quinoa, black beans, cheese)", 22.0, 55.0, 10.0, 2.80),
        ("Pasta primavera + parmesan", 18.0, 68.0, 9.0, 2.00),
        ("Veggie stir-fry with tofu + brown rice", 24.0, 62.0, 8.0, 1.80),
    ],
};

static NON_VEGETARIAN_SOUTH_ASIAN: CuisineMenu = CuisineMenu {
    breakfast: foods![
        ("Egg omelette (3 eggs) + toast + milk", 24.0, 35.0, 14.0, 0.90),
        ("Chicken poha + boiled egg", 22.0, 50.0, 8.0, 1.00),
        ("Oats + whey protein + banana", 28.0, 55.0, 5.0, 1.20),
    ],
    lunch: foods![
        ("Chicken biryani (200g chicken) + raita", 35.0, 75.0, 12.0, 1.80),
        ("Fish curry + brown rice + salad", 32.0, 68.0, 10.0, 1.50),
        ("Egg curry (3 eggs) + roti (3) + dal", 30.0, 60.0, 14.0, 1.20),
    ],
    snack: foods![
        ("Boiled eggs (2) + chaat masala", 14.0, 2.0, 10.0, 0.40),
        ("Tuna salad on whole-grain crackers", 20.0, 18.0, 4.0, 1.10),
        ("Greek yogurt + protein powder", 24.0, 18.0, 2.0, 0.80),
    ],
    dinner: foods![
        ("Grilled chicken (200g) + quinoa + steamed broccoli", 42.0, 45.0, 8.0, 2.50),
        ("Prawn stir-fry + roti (2) + dal soup", 35.0, 55.0, 9.0, 2.20),
        ("Mutton keema (150g) + roti (2) + salad", 38.0, 48.0, 16.0, 2.80),
    ],
};

static NON_VEGETARIAN_WESTERN: CuisineMenu = CuisineMenu {
    breakfast: foods![
        ("Scrambled eggs (4) + turkey bacon + sourdough", 32.0, 40.0, 18.0, 2.50),
        ("Greek yogurt parfait + granola + chicken sausage", 28.0, 52.0, 12.0, 2.20),
        ("Protein pancakes + maple syrup + bacon", 30.0, 58.0, 14.0, 2.80),
    ],
    lunch: foods![
        ("Grilled chicken salad + vinaigrette + whole-grain roll", 38.0, 42.0, 10.0, 3.50),
        ("Tuna wrap + Greek salad", 32.0, 48.0, 8.0, 2.50),
        ("Salmon bowl + quinoa + avocado", 36.0, 52.0, 16.0, 4.00),
    ],
    snack: foods![
        ("Cottage cheese + almonds", 22.0, 10.0, 12.0, 1.20),
        ("Turkey slices + celery + hummus", 20.0, 12.0, 5.0, 1.50),
        ("Whey protein shake + banana", 28.0, 32.0, 2.0, 1.00),
    ],
    dinner: foods![
        ("Grilled salmon (200g) + sweet potato + asparagus", 42.0, 45.0, 14.0, 5.00),
        ("Beef stir-fry + brown rice + bok choy", 38.0, 58.0, 12.0, 4.50),
        ("Baked chicken thighs + roasted veg + couscous", 40.0, 52.0, 10.0, 3.50),
    ],
};

static VEGAN_SOUTH_ASIAN: CuisineMenu = CuisineMenu {
    breakfast: foods![
        ("Tofu scramble + roti (2) + coconut milk chai", 18.0, 45.0, 10.0, 0.90),
        ("Moong dosa + coconut chutney + sambar", 14.0, 55.0, 6.0, 0.80),
        ("Oats porridge with almond milk + chia seeds", 10.0, 52.0, 8.0, 1.00),
    ],
    lunch: foods![
        ("Rajma (kidney bean) curry + brown rice + salad", 18.0, 72.0, 4.0, 1.00),
        ("Chana masala + roti (3) + onion salad", 20.0, 65.0, 5.0, 0.90),
        ("Mixed dal + millet roti + sabzi", 16.0, 60.0, 5.0, 0.80),
    ],
    snack: foods![
        ("Roasted makhana + green tea", 5.0, 20.0, 2.0, 0.40),
        ("Banana + peanut butter", 8.0, 35.0, 10.0, 0.50),
        ("Sprout chaat", 12.0, 25.0, 2.0, 0.40),
    ],
    dinner: foods![
        ("Tofu palak + roti (2) + dal soup", 22.0, 50.0, 8.0, 1.20),
        ("Lentil kitchari + coconut raita", 18.0, 62.0, 7.0, 0.80),
        ("Chickpea tikka + roti (2) + salad", 20.0, 55.0, 6.0, 1.00),
    ],
};

static VEGAN_WESTERN: CuisineMenu = CuisineMenu {
    breakfast: foods![
        ("Açaí bowl + granola + mixed berries + hemp seeds", 10.0, 65.0, 8.0, 3.50),
        ("Overnight oats (oat milk) + flaxseed + walnuts", 12.0, 58.0, 12.0, 1.80),
        ("Tofu scramble + avocado + sourdough (2 slices)", 18.0, 45.0, 14.0, 2.50),
    ],
    lunch: foods![
        ("Lentil & roasted vegetable bowl + tahini", 18.0, 62.0, 10.0, 2.50),
        ("Black bean tacos (3) + guacamole + salsa", 16.0, 70.0, 12.0, 2.80),
        ("Chickpea pasta + marinara + nutritional yeast", 20.0, 72.0, 6.0, 2.20),
    ],
    snack: foods![
        ("Edamame + sea salt", 16.0, 14.0, 5.0, 0.80),
        ("Almond butter + apple slices", 6.0, 30.0, 10.0, 1.00),
        ("Pumpkin seeds + dark chocolate", 8.0, 20.0, 12.0, 1.20),
    ],
    dinner: foods![
        ("Tempeh stir-fry + brown rice + broccoli", 26.0, 60.0, 8.0, 3.00),
        ("Stuffed portobello + quinoa + roasted tomatoes", 18.0, 55.0, 8.0, 3.50),
        ("Red lentil soup + crusty sourdough + side salad", 18.0, 65.0, 5.0, 2.00),
    ],
};

/// Menu for a diet and cuisine
#[must_use]
pub fn menu(diet: DietKey, culture: CultureKey) -> &'static CuisineMenu {
    match (diet, culture) {
        (DietKey::Vegetarian, CultureKey::SouthAsian) => &VEGETARIAN_SOUTH_ASIAN,
        (DietKey::Vegetarian, CultureKey::Western) => &VEGETARIAN_WESTERN,
        (DietKey::NonVegetarian, CultureKey::SouthAsian) => &NON_VEGETARIAN_SOUTH_ASIAN,
        (DietKey::NonVegetarian, CultureKey::Western) => &NON_VEGETARIAN_WESTERN,
        (DietKey::Vegan, CultureKey::SouthAsian) => &VEGAN_SOUTH_ASIAN,
        (DietKey::Vegan, CultureKey::Western) => &VEGAN_WESTERN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diet_key_collapses_unmodelled_diets() {
        assert_eq!(
            resolve_diet_key(DietaryPreference::Pescatarian),
            DietKey::NonVegetarian
        );
        assert_eq!(resolve_diet_key(DietaryPreference::Keto), DietKey::NonVegetarian);
        assert_eq!(resolve_diet_key(DietaryPreference::Vegan), DietKey::Vegan);
    }

    #[test]
    fn test_culture_key_matches_keywords() {
        assert_eq!(
            resolve_culture_key("South Asian (Indian/Pakistani/Sri Lankan)"),
            CultureKey::SouthAsian
        );
        assert_eq!(resolve_culture_key("Middle Eastern"), CultureKey::SouthAsian);
        assert_eq!(resolve_culture_key("middle eastern"), CultureKey::Western);
        assert_eq!(
            resolve_culture_key("Western (European/American)"),
            CultureKey::Western
        );
        assert_eq!(resolve_culture_key(""), CultureKey::Western);
    }

    #[test]
    fn test_every_menu_category_has_three_dishes() {
        for diet in [DietKey::Vegetarian, DietKey::NonVegetarian, DietKey::Vegan] {
            for culture in [CultureKey::SouthAsian, CultureKey::Western] {
                let menu = menu(diet, culture);
                for category in [
                    MealCategory::Breakfast,
                    MealCategory::Lunch,
                    MealCategory::Snack,
                    MealCategory::Dinner,
                ] {
                    assert_eq!(menu.items(category).len(), 3);
                }
            }
        }
    }
}
