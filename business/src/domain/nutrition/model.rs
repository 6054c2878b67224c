use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Daily calorie and macro targets, each rounded to one decimal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionTarget {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
    pub bmi: f64,
}

/// Food-group heuristics layered on top of [`NutritionTarget`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodGroupTargets {
    pub protein_grams: f64,
    pub veggie_servings: u32,
    pub fruit_servings: u32,
    pub fiber_grams: f64,
    pub carbs_grams: f64,
    pub fats_grams: f64,
}

/// A detected shortfall in the inventory.
///
/// The declaration order is the output order: gap sets are `BTreeSet`s and
/// recommendations iterate them as stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FoodGap {
    LowProtein,
    NoVeggies,
    NoFruits,
    LowFiber,
    LowHealthyFats,
    LowComplexCarbs,
}

impl FoodGap {
    pub const ALL: [FoodGap; 6] = [
        FoodGap::LowProtein,
        FoodGap::NoVeggies,
        FoodGap::NoFruits,
        FoodGap::LowFiber,
        FoodGap::LowHealthyFats,
        FoodGap::LowComplexCarbs,
    ];
}

impl std::fmt::Display for FoodGap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FoodGap::LowProtein => write!(f, "LOW_PROTEIN"),
            FoodGap::NoVeggies => write!(f, "NO_VEGGIES"),
            FoodGap::NoFruits => write!(f, "NO_FRUITS"),
            FoodGap::LowFiber => write!(f, "LOW_FIBER"),
            FoodGap::LowHealthyFats => write!(f, "LOW_HEALTHY_FATS"),
            FoodGap::LowComplexCarbs => write!(f, "LOW_COMPLEX_CARBS"),
        }
    }
}

impl std::str::FromStr for FoodGap {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "LOW_PROTEIN" => Ok(FoodGap::LowProtein),
            "NO_VEGGIES" => Ok(FoodGap::NoVeggies),
            "NO_FRUITS" => Ok(FoodGap::NoFruits),
            "LOW_FIBER" => Ok(FoodGap::LowFiber),
            "LOW_HEALTHY_FATS" => Ok(FoodGap::LowHealthyFats),
            "LOW_COMPLEX_CARBS" => Ok(FoodGap::LowComplexCarbs),
            _ => Err(format!("Invalid food gap: {}", s)),
        }
    }
}

/// An item to buy and why. Two items are the same entry when their
/// trimmed, lower-cased names match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingItem {
    pub item: String,
    pub reason: String,
}

impl ShoppingItem {
    pub fn new(item: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            reason: reason.into(),
        }
    }

    pub fn dedup_key(&self) -> String {
        self.item.trim().to_lowercase()
    }
}

/// Full result of analysing a profile against an inventory.
#[derive(Debug, Clone, PartialEq)]
pub struct NutritionAnalysis {
    pub nutrition_target: NutritionTarget,
    pub food_group_targets: FoodGroupTargets,
    pub gaps: BTreeSet<FoodGap>,
    pub recommendations: Vec<String>,
    pub shopping_list: Vec<ShoppingItem>,
}
