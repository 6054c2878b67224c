//! Deterministic nutrition targets from a biometric profile.
//!
//! BMR uses the Mifflin-St Jeor equation. Macro split: protein by body
//! weight, 25% of energy from fat, the remainder from carbohydrates.

use crate::domain::profile::model::UserProfile;
use crate::domain::profile::value_objects::{Gender, HealthGoal};
use crate::domain::shared::rounding::round_half_up;

use super::model::{FoodGroupTargets, NutritionTarget};

const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
const KCAL_PER_GRAM_CARBS: f64 = 4.0;
const KCAL_PER_GRAM_FAT: f64 = 9.0;
const FAT_ENERGY_SHARE: f64 = 0.25;

const PROTEIN_G_PER_KG: f64 = 1.2;
const PROTEIN_G_PER_KG_MUSCLE_GAIN: f64 = 2.0;

const FRUIT_SERVINGS: u32 = 2;

/// Basal Metabolic Rate in kcal/day.
///
/// Men: 10w + 6.25h - 5a + 5. Everyone else: 10w + 6.25h - 5a - 161.
pub fn bmr(profile: &UserProfile) -> f64 {
    let base = 10.0 * profile.weight_kg + 6.25 * profile.height_cm - 5.0 * f64::from(profile.age);
    match profile.gender {
        Gender::Male => base + 5.0,
        Gender::Female | Gender::Other => base - 161.0,
    }
}

/// Total Daily Energy Expenditure: BMR scaled by activity, shifted by goal.
pub fn tdee(profile: &UserProfile) -> f64 {
    bmr(profile) * profile.activity_level.multiplier() + profile.health_goal.calorie_adjustment()
}

pub fn protein_grams(profile: &UserProfile) -> f64 {
    let per_kg = match profile.health_goal {
        HealthGoal::GainMuscle => PROTEIN_G_PER_KG_MUSCLE_GAIN,
        _ => PROTEIN_G_PER_KG,
    };
    profile.weight_kg * per_kg
}

pub fn bmi(profile: &UserProfile) -> f64 {
    let height_m = profile.height_cm / 100.0;
    profile.weight_kg / (height_m * height_m)
}

/// Computes calorie and macro targets, each rounded to one decimal.
///
/// Carbs take whatever energy protein and fat leave. For very low TDEE
/// profiles that remainder is negative and is reported as such.
pub fn calculate_target(profile: &UserProfile) -> NutritionTarget {
    let calories = tdee(profile);
    let protein = protein_grams(profile);
    let fats = calories * FAT_ENERGY_SHARE / KCAL_PER_GRAM_FAT;
    let carbs =
        (calories - (protein * KCAL_PER_GRAM_PROTEIN + fats * KCAL_PER_GRAM_FAT)) / KCAL_PER_GRAM_CARBS;

    NutritionTarget {
        calories: round_half_up(calories, 1),
        protein: round_half_up(protein, 1),
        carbs: round_half_up(carbs, 1),
        fats: round_half_up(fats, 1),
        bmi: round_half_up(bmi(profile), 1),
    }
}

/// Serving and fiber heuristics. Weight loss favours volume eating: more
/// vegetables and 5 g more fiber.
pub fn calculate_food_group_targets(profile: &UserProfile) -> FoodGroupTargets {
    let target = calculate_target(profile);
    let losing_weight = profile.health_goal == HealthGoal::LoseWeight;

    let veggie_servings = if losing_weight { 5 } else { 3 };
    let mut fiber_grams = match profile.gender {
        Gender::Male => 30.0,
        Gender::Female | Gender::Other => 25.0,
    };
    if losing_weight {
        fiber_grams += 5.0;
    }

    FoodGroupTargets {
        protein_grams: target.protein,
        veggie_servings,
        fruit_servings: FRUIT_SERVINGS,
        fiber_grams: round_half_up(fiber_grams, 1),
        carbs_grams: target.carbs,
        fats_grams: target.fats,
    }
}
