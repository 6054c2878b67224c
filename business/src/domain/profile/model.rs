use serde_json::Value;

use super::errors::ProfileError;
use super::normalize::{
    DEFAULT_AGE, DEFAULT_HEIGHT_CM, DEFAULT_WEIGHT_KG, activity_from_preferences,
    normalize_diet_type, normalize_gender, normalize_health_goal,
};
use super::value_objects::{ActivityLevel, DietType, Gender, HealthGoal};

/// Biometric profile driving every nutrition computation. Immutable for the
/// duration of a request.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub age: u32,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub gender: Gender,
    pub health_goal: HealthGoal,
    pub diet_type: DietType,
    pub activity_level: ActivityLevel,
}

pub struct NewUserProfileProps {
    pub age: i64,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub gender: Gender,
    pub health_goal: HealthGoal,
    pub diet_type: DietType,
    pub activity_level: ActivityLevel,
}

impl UserProfile {
    pub fn new(props: NewUserProfileProps) -> Result<Self, ProfileError> {
        let age = u32::try_from(props.age)
            .ok()
            .filter(|age| *age > 0)
            .ok_or(ProfileError::InvalidAge)?;

        if !props.weight_kg.is_finite() || props.weight_kg <= 0.0 {
            return Err(ProfileError::InvalidWeight);
        }

        if !props.height_cm.is_finite() || props.height_cm <= 0.0 {
            return Err(ProfileError::InvalidHeight);
        }

        Ok(Self {
            age,
            weight_kg: props.weight_kg,
            height_cm: props.height_cm,
            gender: props.gender,
            health_goal: props.health_goal,
            diet_type: props.diet_type,
            activity_level: props.activity_level,
        })
    }
}

/// Profile row as stored in the profile store, before normalization.
#[derive(Debug, Clone, Default)]
pub struct ProfileRecord {
    pub user_id: String,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub health_goal: Option<String>,
    pub diet_type: Option<String>,
    pub preferences: Option<Value>,
}

impl ProfileRecord {
    /// Applies the default ladder and vocabulary mapping, then validates.
    pub fn into_profile(self) -> Result<UserProfile, ProfileError> {
        UserProfile::new(NewUserProfileProps {
            age: self.age.map(i64::from).unwrap_or(DEFAULT_AGE),
            weight_kg: self.weight_kg.unwrap_or(DEFAULT_WEIGHT_KG),
            height_cm: self.height_cm.unwrap_or(DEFAULT_HEIGHT_CM),
            gender: normalize_gender(self.gender.as_deref()),
            health_goal: normalize_health_goal(self.health_goal.as_deref()),
            diet_type: normalize_diet_type(self.diet_type.as_deref()),
            activity_level: activity_from_preferences(self.preferences.as_ref()),
        })
    }
}
