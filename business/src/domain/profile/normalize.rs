//! Mapping from the free-text vocabulary found in stored profiles and
//! request payloads onto the closed profile enums.
//!
//! Every field has exactly one default, defined here. Callers must go
//! through these functions instead of matching raw strings themselves.

use serde_json::Value;

use super::value_objects::{ActivityLevel, DietType, Gender, HealthGoal};

pub const DEFAULT_AGE: i64 = 20;
pub const DEFAULT_WEIGHT_KG: f64 = 70.0;
pub const DEFAULT_HEIGHT_CM: f64 = 170.0;

/// Activity level assumed for stored profiles whose preferences do not
/// carry one.
pub const STORED_PROFILE_ACTIVITY: ActivityLevel = ActivityLevel::Moderate;

fn clean(raw: &str) -> String {
    raw.trim().to_lowercase().replace([' ', '-'], "_")
}

/// Missing gender defaults to `Female`; unrecognised values map to `Other`.
pub fn normalize_gender(raw: Option<&str>) -> Gender {
    let Some(raw) = raw else {
        return Gender::Female;
    };
    match clean(raw).as_str() {
        "male" => Gender::Male,
        "female" => Gender::Female,
        _ => Gender::Other,
    }
}

/// Missing or unrecognised goals default to `Maintain`.
pub fn normalize_health_goal(raw: Option<&str>) -> HealthGoal {
    match raw.map(clean).as_deref() {
        Some("lose" | "loss" | "lose_weight") => HealthGoal::LoseWeight,
        Some("gain" | "muscle" | "gain_muscle") => HealthGoal::GainMuscle,
        Some("energy" | "increase_energy") => HealthGoal::IncreaseEnergy,
        _ => HealthGoal::Maintain,
    }
}

/// Missing diet defaults to `Balanced`; unknown diets are kept upper-cased.
pub fn normalize_diet_type(raw: Option<&str>) -> DietType {
    let Some(raw) = raw.filter(|r| !r.trim().is_empty()) else {
        return DietType::Balanced;
    };
    match clean(raw).as_str() {
        "balanced" => DietType::Balanced,
        "vegan" => DietType::Vegan,
        "vegetarian" => DietType::Vegetarian,
        "keto" => DietType::Keto,
        "paleo" => DietType::Paleo,
        "mediterranean" => DietType::Mediterranean,
        _ => DietType::Other(raw.trim().to_uppercase()),
    }
}

/// Missing or unrecognised levels default to `Light` (multiplier 1.375).
pub fn normalize_activity_level(raw: Option<&str>) -> ActivityLevel {
    match raw.map(clean).as_deref() {
        Some("sedentary") => ActivityLevel::Sedentary,
        Some("light") => ActivityLevel::Light,
        Some("moderate") => ActivityLevel::Moderate,
        Some("active") => ActivityLevel::Active,
        Some("very_active") => ActivityLevel::VeryActive,
        _ => ActivityLevel::Light,
    }
}

/// Reads `activityLevel` out of a stored preferences document.
///
/// Falls back to [`STORED_PROFILE_ACTIVITY`] when the document is missing,
/// is not an object, or has no textual `activityLevel`.
pub fn activity_from_preferences(preferences: Option<&Value>) -> ActivityLevel {
    preferences
        .and_then(|p| p.get("activityLevel"))
        .and_then(Value::as_str)
        .map(|level| normalize_activity_level(Some(level)))
        .unwrap_or(STORED_PROFILE_ACTIVITY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_default_gender_to_female_when_missing() {
        assert_eq!(normalize_gender(None), Gender::Female);
        assert_eq!(normalize_gender(Some(" MALE ")), Gender::Male);
        assert_eq!(normalize_gender(Some("non-binary")), Gender::Other);
    }

    #[test]
    fn should_map_goal_synonyms() {
        assert_eq!(normalize_health_goal(Some("lose")), HealthGoal::LoseWeight);
        assert_eq!(normalize_health_goal(Some("LOSE_WEIGHT")), HealthGoal::LoseWeight);
        assert_eq!(normalize_health_goal(Some("muscle")), HealthGoal::GainMuscle);
        assert_eq!(normalize_health_goal(Some("Energy")), HealthGoal::IncreaseEnergy);
        assert_eq!(normalize_health_goal(Some("maintain_weight")), HealthGoal::Maintain);
        assert_eq!(normalize_health_goal(Some("bulk")), HealthGoal::Maintain);
        assert_eq!(normalize_health_goal(None), HealthGoal::Maintain);
    }

    #[test]
    fn should_keep_unknown_diet_upper_cased() {
        assert_eq!(normalize_diet_type(Some("keto")), DietType::Keto);
        assert_eq!(normalize_diet_type(None), DietType::Balanced);
        assert_eq!(normalize_diet_type(Some("  ")), DietType::Balanced);
        assert_eq!(
            normalize_diet_type(Some("pescatarian")),
            DietType::Other("PESCATARIAN".to_string())
        );
    }

    #[test]
    fn should_default_activity_to_light() {
        assert_eq!(normalize_activity_level(Some("Very Active")), ActivityLevel::VeryActive);
        assert_eq!(normalize_activity_level(Some("very-active")), ActivityLevel::VeryActive);
        assert_eq!(normalize_activity_level(Some(" moderate ")), ActivityLevel::Moderate);
        assert_eq!(normalize_activity_level(Some("athlete")), ActivityLevel::Light);
        assert_eq!(normalize_activity_level(None), ActivityLevel::Light);
    }

    #[test]
    fn should_read_activity_from_preferences() {
        let prefs = json!({ "activityLevel": "Active" });
        assert_eq!(activity_from_preferences(Some(&prefs)), ActivityLevel::Active);
    }

    #[test]
    fn should_fall_back_to_moderate_for_unusable_preferences() {
        let tags = json!(["spicy", "no dairy"]);
        let numeric = json!({ "activityLevel": 3 });
        assert_eq!(activity_from_preferences(None), ActivityLevel::Moderate);
        assert_eq!(activity_from_preferences(Some(&tags)), ActivityLevel::Moderate);
        assert_eq!(activity_from_preferences(Some(&numeric)), ActivityLevel::Moderate);
    }
}
