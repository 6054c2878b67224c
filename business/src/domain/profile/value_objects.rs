use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
            Gender::Other => write!(f, "other"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HealthGoal {
    LoseWeight,
    GainMuscle,
    Maintain,
    IncreaseEnergy,
}

impl HealthGoal {
    /// Daily calorie offset applied on top of the activity-scaled BMR.
    pub fn calorie_adjustment(&self) -> f64 {
        match self {
            HealthGoal::LoseWeight => -500.0,
            HealthGoal::GainMuscle => 300.0,
            HealthGoal::IncreaseEnergy => 150.0,
            HealthGoal::Maintain => 0.0,
        }
    }
}

impl std::fmt::Display for HealthGoal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HealthGoal::LoseWeight => write!(f, "LOSE_WEIGHT"),
            HealthGoal::GainMuscle => write!(f, "GAIN_MUSCLE"),
            HealthGoal::Maintain => write!(f, "MAINTAIN"),
            HealthGoal::IncreaseEnergy => write!(f, "INCREASE_ENERGY"),
        }
    }
}

/// Diet the user follows. Values outside the known set are kept verbatim
/// (upper-cased) so suggestion tags for new diets still match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DietType {
    Balanced,
    Vegan,
    Vegetarian,
    Keto,
    Paleo,
    Mediterranean,
    Other(String),
}

impl DietType {
    pub fn as_str(&self) -> &str {
        match self {
            DietType::Balanced => "BALANCED",
            DietType::Vegan => "VEGAN",
            DietType::Vegetarian => "VEGETARIAN",
            DietType::Keto => "KETO",
            DietType::Paleo => "PALEO",
            DietType::Mediterranean => "MEDITERRANEAN",
            DietType::Other(name) => name,
        }
    }

    /// Case-insensitive comparison against a catalog diet tag.
    pub fn matches_tag(&self, tag: &str) -> bool {
        tag.trim().eq_ignore_ascii_case(self.as_str())
    }
}

impl std::fmt::Display for DietType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    /// TDEE multiplier applied to the BMR.
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }
}

impl std::fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActivityLevel::Sedentary => write!(f, "SEDENTARY"),
            ActivityLevel::Light => write!(f, "LIGHT"),
            ActivityLevel::Moderate => write!(f, "MODERATE"),
            ActivityLevel::Active => write!(f, "ACTIVE"),
            ActivityLevel::VeryActive => write!(f, "VERY_ACTIVE"),
        }
    }
}
