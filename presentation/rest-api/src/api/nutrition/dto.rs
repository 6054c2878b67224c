use chrono::NaiveDate;
use poem_openapi::Object;

use business::domain::ingredient::model::Ingredient;
use business::domain::nutrition::model::{
    FoodGroupTargets, NutritionAnalysis, NutritionTarget, ShoppingItem,
};
use business::domain::profile::errors::ProfileError;
use business::domain::profile::model::{NewUserProfileProps, UserProfile};
use business::domain::profile::normalize::{
    DEFAULT_AGE, DEFAULT_HEIGHT_CM, DEFAULT_WEIGHT_KG, normalize_activity_level,
    normalize_diet_type, normalize_gender, normalize_health_goal,
};

#[derive(Debug, Clone, Object)]
pub struct UserProfileRequest {
    /// Age in years (default: 20)
    pub age: Option<i64>,
    /// Body weight in kg (default: 70)
    pub weight_kg: Option<f64>,
    /// Height in cm (default: 170)
    pub height_cm: Option<f64>,
    /// male, female or other (default: female)
    pub gender: Option<String>,
    /// LOSE_WEIGHT, GAIN_MUSCLE, MAINTAIN or INCREASE_ENERGY (default: MAINTAIN)
    pub health_goal: Option<String>,
    /// BALANCED, VEGAN, VEGETARIAN, KETO, PALEO, MEDITERRANEAN or any custom diet
    pub diet_type: Option<String>,
    /// SEDENTARY, LIGHT, MODERATE, ACTIVE or VERY_ACTIVE (default: LIGHT)
    pub activity_level: Option<String>,
}

impl UserProfileRequest {
    pub fn into_domain(self) -> Result<UserProfile, ProfileError> {
        UserProfile::new(NewUserProfileProps {
            age: self.age.unwrap_or(DEFAULT_AGE),
            weight_kg: self.weight_kg.unwrap_or(DEFAULT_WEIGHT_KG),
            height_cm: self.height_cm.unwrap_or(DEFAULT_HEIGHT_CM),
            gender: normalize_gender(self.gender.as_deref()),
            health_goal: normalize_health_goal(self.health_goal.as_deref()),
            diet_type: normalize_diet_type(self.diet_type.as_deref()),
            activity_level: normalize_activity_level(self.activity_level.as_deref()),
        })
    }
}

#[derive(Debug, Clone, Object)]
pub struct IngredientRequest {
    /// Food name, matched case-insensitively against the food catalog.
    /// Ingredients without a name are ignored.
    pub name: Option<String>,
    /// Amount in `unit` (default: 0, counted as 100 g)
    pub quantity: Option<f64>,
    /// g, kg, ml, l, piece...
    pub unit: Option<String>,
    pub purchase_date: Option<NaiveDate>,
    pub shelf_life_days: Option<i64>,
    /// Detection confidence in [0, 1] (default: 1)
    pub confidence_score: Option<f64>,
}

impl From<IngredientRequest> for Ingredient {
    fn from(dto: IngredientRequest) -> Self {
        Ingredient {
            name: dto.name.unwrap_or_default(),
            quantity: dto.quantity.unwrap_or_default(),
            unit: dto.unit,
            purchase_date: dto.purchase_date,
            shelf_life_days: dto.shelf_life_days,
            confidence_score: dto.confidence_score.unwrap_or(1.0).clamp(0.0, 1.0),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct AnalyzeNutritionRequest {
    /// Inline profile; takes precedence over `user_id`
    pub user_profile: Option<UserProfileRequest>,
    /// Id of a stored profile
    pub user_id: Option<String>,
    pub ingredients: Option<Vec<IngredientRequest>>,
}

#[derive(Debug, Clone, Object)]
pub struct NutritionTargetResponse {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
    pub bmi: f64,
}

impl From<NutritionTarget> for NutritionTargetResponse {
    fn from(t: NutritionTarget) -> Self {
        Self {
            calories: t.calories,
            protein: t.protein,
            carbs: t.carbs,
            fats: t.fats,
            bmi: t.bmi,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct FoodGroupTargetsResponse {
    pub protein_grams: f64,
    pub veggie_servings: u32,
    pub fruit_servings: u32,
    pub fiber_grams: f64,
    pub carbs_grams: f64,
    pub fats_grams: f64,
}

impl From<FoodGroupTargets> for FoodGroupTargetsResponse {
    fn from(t: FoodGroupTargets) -> Self {
        Self {
            protein_grams: t.protein_grams,
            veggie_servings: t.veggie_servings,
            fruit_servings: t.fruit_servings,
            fiber_grams: t.fiber_grams,
            carbs_grams: t.carbs_grams,
            fats_grams: t.fats_grams,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ShoppingItemResponse {
    pub item: String,
    pub reason: String,
}

impl From<ShoppingItem> for ShoppingItemResponse {
    fn from(item: ShoppingItem) -> Self {
        Self {
            item: item.item,
            reason: item.reason,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct NutritionAnalysisResponse {
    pub nutrition_target: NutritionTargetResponse,
    pub food_group_targets: FoodGroupTargetsResponse,
    /// Detected gaps, e.g. LOW_PROTEIN, NO_VEGGIES
    pub gaps: Vec<String>,
    pub recommendations: Vec<String>,
    pub shopping_list: Vec<ShoppingItemResponse>,
}

impl From<NutritionAnalysis> for NutritionAnalysisResponse {
    fn from(a: NutritionAnalysis) -> Self {
        Self {
            nutrition_target: a.nutrition_target.into(),
            food_group_targets: a.food_group_targets.into(),
            gaps: a.gaps.iter().map(|gap| gap.to_string()).collect(),
            recommendations: a.recommendations,
            shopping_list: a.shopping_list.into_iter().map(|i| i.into()).collect(),
        }
    }
}
