use serde::{Deserialize, Serialize};

use crate::domain::nutrition::model::FoodGap;
use crate::domain::profile::value_objects::DietType;

/// Coarse nutrient category used for coverage heuristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FoodGroup {
    Protein,
    Carbs,
    Fats,
    Veggies,
    Fruits,
    Fiber,
}

impl FoodGroup {
    pub const ALL: [FoodGroup; 6] = [
        FoodGroup::Protein,
        FoodGroup::Carbs,
        FoodGroup::Fats,
        FoodGroup::Veggies,
        FoodGroup::Fruits,
        FoodGroup::Fiber,
    ];

    /// Maps a catalog `food_group` tag onto a primary group.
    ///
    /// Fiber is never a primary group: it is derived from the fiber content.
    pub fn from_catalog_tag(tag: &str) -> Option<FoodGroup> {
        match tag.trim().to_lowercase().as_str() {
            "protein" | "proteins" => Some(FoodGroup::Protein),
            "carb" | "carbs" | "grains" => Some(FoodGroup::Carbs),
            "fat" | "fats" => Some(FoodGroup::Fats),
            "veggie" | "veggies" | "vegetable" | "vegetables" => Some(FoodGroup::Veggies),
            "fruit" | "fruits" => Some(FoodGroup::Fruits),
            _ => None,
        }
    }
}

impl std::fmt::Display for FoodGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FoodGroup::Protein => write!(f, "PROTEIN"),
            FoodGroup::Carbs => write!(f, "CARBS"),
            FoodGroup::Fats => write!(f, "FATS"),
            FoodGroup::Veggies => write!(f, "VEGGIES"),
            FoodGroup::Fruits => write!(f, "FRUITS"),
            FoodGroup::Fiber => write!(f, "FIBER"),
        }
    }
}

/// Nutrient profile of a food, per 100 g.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FoodCatalogEntry {
    pub name: String,
    pub protein_per_100g: f64,
    pub carbs_per_100g: f64,
    pub fats_per_100g: f64,
    pub fiber_per_100g: f64,
    pub calories_per_100g: f64,
    pub food_group: Option<String>,
    pub diet_tags: Vec<String>,
}

/// A catalog-backed food proposed to close a gap.
#[derive(Debug, Clone, PartialEq)]
pub struct FoodSuggestion {
    pub gap: FoodGap,
    pub food_name: Option<String>,
    pub reason: String,
    pub priority: i32,
    pub diet_types: Vec<String>,
}

impl FoodSuggestion {
    /// Untagged suggestions fit every diet; tagged ones must list the
    /// user's diet.
    pub fn allows_diet(&self, diet: &DietType) -> bool {
        self.diet_types.is_empty() || self.diet_types.iter().any(|tag| diet.matches_tag(tag))
    }

    /// Trimmed food name, `None` when missing or blank.
    pub fn usable_name(&self) -> Option<&str> {
        self.food_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}
