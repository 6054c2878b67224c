use crate::domain::profile::value_objects::Gender;

use super::model::WalkingEstimate;

const STRIDE_M_MALE: f64 = 0.78;
const STRIDE_M_FEMALE: f64 = 0.70;
const STRIDE_M_DEFAULT: f64 = 0.75;

const WALKING_MET: f64 = 3.5;
const WALKING_SPEED_KMH: f64 = 4.8;
const DEFAULT_WEIGHT_KG: f64 = 70.0;

fn stride_m(gender: Option<Gender>) -> f64 {
    match gender {
        Some(Gender::Male) => STRIDE_M_MALE,
        Some(Gender::Female) => STRIDE_M_FEMALE,
        Some(Gender::Other) | None => STRIDE_M_DEFAULT,
    }
}

/// Steps and kcal for walking `distance_km` one way.
pub fn estimate(distance_km: f64, gender: Option<Gender>, weight_kg: Option<f64>) -> WalkingEstimate {
    let distance_km = if distance_km.is_finite() { distance_km.max(0.0) } else { 0.0 };
    let weight_kg = weight_kg
        .filter(|w| w.is_finite() && *w > 0.0)
        .unwrap_or(DEFAULT_WEIGHT_KG);

    let steps = (distance_km * 1000.0 / stride_m(gender)).round();
    let hours = distance_km / WALKING_SPEED_KMH;
    let calories = (WALKING_MET * weight_kg * hours).round();

    WalkingEstimate {
        steps: steps as u64,
        calories: calories as u64,
    }
}
