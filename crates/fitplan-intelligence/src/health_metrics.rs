// ABOUTME: Body metric formulas using the Harris-Benedict revised BMR equation
// ABOUTME: BMI and its category bands, BMR, TDEE, ideal weight range, body fat estimate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

//! Health Metrics Module
//!
//! Pure numeric formulas over a biometric profile. None of them can fail:
//! inputs are validated by [`UserProfile::validate`] before they reach here.
//!
//! # Scientific References
//!
//! - Roza, A.M., & Shizgal, H.M. (1984). The Harris Benedict equation reevaluated:
//!   resting energy requirements and the body cell mass.
//!   *American Journal of Clinical Nutrition*, 40(1), 168-182.
//!   <https://doi.org/10.1093/ajcn/40.1.168>
//!
//! - Deurenberg, P., Weststrate, J.A., & Seidell, J.C. (1991). Body mass index as a
//!   measure of body fatness: age- and sex-specific prediction formulas.
//!   *British Journal of Nutrition*, 65(2), 105-114.
//!   <https://doi.org/10.1079/BJN19910073>

use fitplan_core::models::{
    ActivityLevel, BmiCategory, DerivedMetrics, Gender, UserProfile, WeightRange,
};

use crate::round_to;

/// TDEE multiplier for each activity label, in table order
pub const ACTIVITY_MULTIPLIERS: [(&str, f64); 5] = [
    ("Sedentary", 1.2),
    ("Lightly Active", 1.375),
    ("Moderately Active", 1.55),
    ("Very Active", 1.725),
    ("Extremely Active", 1.9),
];

/// Multiplier used when an activity label is not in the table
pub const DEFAULT_ACTIVITY_MULTIPLIER: f64 = 1.55;

/// Harris-Benedict revised coefficients for one sex branch
#[derive(Debug, Clone, Copy)]
struct BmrCoefficients {
    constant: f64,
    weight: f64,
    height: f64,
    age: f64,
}

const MALE_BMR: BmrCoefficients = BmrCoefficients {
    constant: 88.362,
    weight: 13.397,
    height: 4.799,
    age: 5.677,
};

const FEMALE_BMR: BmrCoefficients = BmrCoefficients {
    constant: 447.593,
    weight: 9.247,
    height: 3.098,
    age: 4.330,
};

/// Healthy BMI range used for the ideal weight estimate
const HEALTHY_BMI_RANGE: (f64, f64) = (18.5, 24.9);

/// One BMI band: `lower <= bmi < upper`
#[derive(Debug, Clone, Copy)]
pub struct BmiBand {
    /// Inclusive lower bound
    pub lower: f64,
    /// Exclusive upper bound
    pub upper: f64,
    /// Band label
    pub label: &'static str,
    /// Display marker
    pub emoji: &'static str,
}

/// Ordered BMI bands covering `[0, inf)`
pub const BMI_BANDS: [BmiBand; 6] = [
    BmiBand {
        lower: 0.0,
        upper: 18.5,
        label: "Underweight",
        emoji: "\u{1f535}",
    },
    BmiBand {
        lower: 18.5,
        upper: 25.0,
        label: "Normal Weight",
        emoji: "\u{1f7e2}",
    },
    BmiBand {
        lower: 25.0,
        upper: 30.0,
        label: "Overweight",
        emoji: "\u{1f7e1}",
    },
    BmiBand {
        lower: 30.0,
        upper: 35.0,
        label: "Obese Class I",
        emoji: "\u{1f7e0}",
    },
    BmiBand {
        lower: 35.0,
        upper: 40.0,
        label: "Obese Class II",
        emoji: "\u{1f534}",
    },
    BmiBand {
        lower: 40.0,
        upper: f64::INFINITY,
        label: "Obese Class III",
        emoji: "\u{1f534}",
    },
];

/// Label returned when no band matches (only reachable for NaN or negative input)
pub const UNKNOWN_BMI_LABEL: &str = "Unknown";
const UNKNOWN_BMI_EMOJI: &str = "\u{26aa}";

/// TDEE multiplier for an activity level
#[must_use]
pub fn activity_multiplier(level: ActivityLevel) -> f64 {
    activity_multiplier_for_label(level.as_str())
}

/// TDEE multiplier for an activity label; labels outside the table get 1.55
#[must_use]
pub fn activity_multiplier_for_label(label: &str) -> f64 {
    ACTIVITY_MULTIPLIERS
        .iter()
        .find(|(candidate, _)| *candidate == label)
        .map_or(DEFAULT_ACTIVITY_MULTIPLIER, |(_, multiplier)| *multiplier)
}

/// Classify a BMI value into its band
#[must_use]
pub fn bmi_category_for(bmi: f64) -> BmiCategory {
    let (label, emoji) = BMI_BANDS
        .iter()
        .find(|band| band.lower <= bmi && bmi < band.upper)
        .map_or((UNKNOWN_BMI_LABEL, UNKNOWN_BMI_EMOJI), |band| {
            (band.label, band.emoji)
        });
    BmiCategory {
        label: label.to_owned(),
        emoji: emoji.to_owned(),
        value: round_to(bmi, 1),
    }
}

/// Formula engine over one biometric profile
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HealthMetrics {
    age: u32,
    gender: Gender,
    height_cm: f64,
    weight_kg: f64,
    activity_level: ActivityLevel,
}

impl HealthMetrics {
    /// Create a formula engine from raw biometrics
    #[must_use]
    pub const fn new(
        age: u32,
        gender: Gender,
        height_cm: f64,
        weight_kg: f64,
        activity_level: ActivityLevel,
    ) -> Self {
        Self {
            age,
            gender,
            height_cm,
            weight_kg,
            activity_level,
        }
    }

    /// Create a formula engine from a profile
    #[must_use]
    pub const fn from_profile(profile: &UserProfile) -> Self {
        Self::new(
            profile.age,
            profile.gender,
            profile.height_cm,
            profile.weight_kg,
            profile.activity_level,
        )
    }

    fn height_m(&self) -> f64 {
        self.height_cm / 100.0
    }

    /// Body Mass Index: `weight_kg / height_m^2`
    #[must_use]
    pub fn bmi(&self) -> f64 {
        self.weight_kg / self.height_m().powi(2)
    }

    /// BMI band with label, marker, and BMI rounded to one decimal
    #[must_use]
    pub fn bmi_category(&self) -> BmiCategory {
        bmi_category_for(self.bmi())
    }

    /// Basal Metabolic Rate (kcal/day), Harris-Benedict revised
    ///
    /// - Male: 88.362 + 13.397 x weight + 4.799 x height - 5.677 x age
    /// - Female and Other: 447.593 + 9.247 x weight + 3.098 x height - 4.330 x age
    #[must_use]
    pub fn bmr(&self) -> f64 {
        let coefficients = match self.gender {
            Gender::Male => MALE_BMR,
            Gender::Female | Gender::Other => FEMALE_BMR,
        };

        let weight_component = coefficients.weight * self.weight_kg;
        let height_component = coefficients.height * self.height_cm;
        let age_component = coefficients.age * f64::from(self.age);

        coefficients.constant + weight_component + height_component - age_component
    }

    /// Total Daily Energy Expenditure: BMR x activity multiplier
    #[must_use]
    pub fn tdee(&self) -> f64 {
        self.bmr() * activity_multiplier(self.activity_level)
    }

    /// Weight range that keeps BMI within 18.5-24.9, rounded to 0.1 kg
    #[must_use]
    pub fn ideal_weight_range(&self) -> WeightRange {
        let height_sq = self.height_m().powi(2);
        WeightRange {
            min_kg: round_to(HEALTHY_BMI_RANGE.0 * height_sq, 1),
            max_kg: round_to(HEALTHY_BMI_RANGE.1 * height_sq, 1),
        }
    }

    /// BMI-based body fat percentage (Deurenberg), rounded to 0.1 %
    #[must_use]
    pub fn body_fat_estimate(&self) -> f64 {
        let sex_offset = match self.gender {
            Gender::Male => 16.2,
            Gender::Female | Gender::Other => 5.4,
        };
        round_to(
            0.23f64.mul_add(f64::from(self.age), 1.20 * self.bmi()) - sex_offset,
            1,
        )
    }

    /// All derived metrics at full precision
    #[must_use]
    pub fn derive(&self) -> DerivedMetrics {
        DerivedMetrics {
            bmi: self.bmi(),
            bmi_category: self.bmi_category(),
            bmr: self.bmr(),
            tdee: self.tdee(),
            ideal_weight_range: self.ideal_weight_range(),
            body_fat_pct: self.body_fat_estimate(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_male() -> HealthMetrics {
        HealthMetrics::new(28, Gender::Male, 170.0, 70.0, ActivityLevel::ModeratelyActive)
    }

    #[test]
    fn test_reference_profile_metrics() {
        let metrics = reference_male();

        assert!((round_to(metrics.bmi(), 2) - 24.22).abs() < f64::EPSILON);
        // 88.362 + 937.79 + 815.83 - 158.956
        assert!((metrics.bmr() - 1683.026).abs() < 1e-6);
        assert!((metrics.tdee() - metrics.bmr() * 1.55).abs() < 1e-9);
        assert_eq!(metrics.bmi_category().label, "Normal Weight");
    }

    #[test]
    fn test_bmi_band_lower_bound_inclusive() {
        assert_eq!(bmi_category_for(18.5).label, "Normal Weight");
        assert_eq!(bmi_category_for(18.499_99).label, "Underweight");
        assert_eq!(bmi_category_for(25.0).label, "Overweight");
        assert_eq!(bmi_category_for(40.0).label, "Obese Class III");
        assert_eq!(bmi_category_for(0.0).label, "Underweight");
        assert_eq!(bmi_category_for(f64::NAN).label, UNKNOWN_BMI_LABEL);
    }

    #[test]
    fn test_bmr_monotonic_in_inputs() {
        for gender in Gender::ALL {
            let base = HealthMetrics::new(40, gender, 175.0, 80.0, ActivityLevel::Sedentary);
            let older = HealthMetrics::new(41, gender, 175.0, 80.0, ActivityLevel::Sedentary);
            let heavier = HealthMetrics::new(40, gender, 175.0, 81.0, ActivityLevel::Sedentary);
            let taller = HealthMetrics::new(40, gender, 176.0, 80.0, ActivityLevel::Sedentary);

            assert!(older.bmr() < base.bmr());
            assert!(heavier.bmr() > base.bmr());
            assert!(taller.bmr() > base.bmr());
        }
    }

    #[test]
    fn test_other_gender_uses_female_branch() {
        let female = HealthMetrics::new(30, Gender::Female, 165.0, 60.0, ActivityLevel::Sedentary);
        let other = HealthMetrics::new(30, Gender::Other, 165.0, 60.0, ActivityLevel::Sedentary);
        assert!((female.bmr() - other.bmr()).abs() < f64::EPSILON);
    }

    #[test]
    fn test_activity_multiplier_table() {
        for level in ActivityLevel::ALL {
            let listed = ACTIVITY_MULTIPLIERS
                .iter()
                .any(|(label, _)| *label == level.as_str());
            assert!(listed, "{level} missing from multiplier table");
        }
        assert!((activity_multiplier(ActivityLevel::Sedentary) - 1.2).abs() < f64::EPSILON);
        assert!((activity_multiplier(ActivityLevel::ExtremelyActive) - 1.9).abs() < f64::EPSILON);
        assert!((activity_multiplier_for_label("Very Active") - 1.725).abs() < f64::EPSILON);
        assert!(
            (activity_multiplier_for_label("Marathon Monk") - DEFAULT_ACTIVITY_MULTIPLIER).abs()
                < f64::EPSILON
        );
    }

    #[test]
    fn test_ideal_weight_and_body_fat() {
        let metrics = reference_male();
        let range = metrics.ideal_weight_range();

        assert!((range.min_kg - 53.5).abs() < f64::EPSILON);
        assert!((range.max_kg - 72.0).abs() < f64::EPSILON);
        // 1.2 * 24.2215 + 0.23 * 28 - 16.2 = 19.3058
        assert!((metrics.body_fat_estimate() - 19.3).abs() < f64::EPSILON);
    }
}
