// ABOUTME: Calorie balance between the intake target and energy expenditure
// ABOUTME: Surplus or deficit against TDEE, plus the effect of planned workouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

use fitplan_core::models::{BalanceLabel, CalorieBalance};

use crate::round_to;

const DAYS_PER_WEEK: f64 = 7.0;

/// Compare a daily intake target with TDEE and the average daily workout burn
#[must_use]
pub fn calorie_balance(tdee: f64, target: f64, weekly_burn: f64) -> CalorieBalance {
    let daily_workout_burn = round_to(weekly_burn / DAYS_PER_WEEK, 1);
    let net_balance = round_to(target - tdee, 1);
    CalorieBalance {
        tdee,
        target,
        daily_workout_burn,
        net_balance,
        label: if net_balance > 0.0 {
            BalanceLabel::Surplus
        } else {
            BalanceLabel::Deficit
        },
        net_after_workout: round_to(target - daily_workout_burn, 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deficit_when_target_below_tdee() {
        let balance = calorie_balance(2608.7, 2500.0, 1838.0);

        assert_eq!(balance.label, BalanceLabel::Deficit);
        assert!((balance.net_balance + 108.7).abs() < 1e-9);
        assert!((balance.daily_workout_burn - 262.6).abs() < 1e-9);
        assert!((balance.net_after_workout - 2237.4).abs() < 1e-9);
    }

    #[test]
    fn test_equal_target_counts_as_deficit() {
        assert_eq!(calorie_balance(2000.0, 2000.0, 0.0).label, BalanceLabel::Deficit);
        assert_eq!(calorie_balance(2000.0, 2100.0, 0.0).label, BalanceLabel::Surplus);
    }
}
