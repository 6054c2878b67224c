use std::collections::{BTreeSet, HashSet};

use chrono::NaiveDate;

use crate::domain::food::catalog::{FoodCatalog, SuggestionCatalog};
use crate::domain::ingredient::freshness::Freshness;
use crate::domain::ingredient::model::Ingredient;
use crate::domain::profile::value_objects::DietType;

use super::model::{FoodGap, ShoppingItem};

pub const EXPIRED_WARNING: &str =
    "Some ingredients may be expired, please check and discard them for safety.";
pub const USE_SOON_NOTICE: &str =
    "You have ingredients to use soon, prioritize meals that use them to reduce waste.";

/// Suggestions taken per gap before de-duplication.
pub const MAX_ITEMS_PER_GAP: usize = 2;

pub fn advice_for(gap: FoodGap) -> &'static str {
    match gap {
        FoodGap::LowProtein => {
            "Protein is low compared to your target, add a high-protein option today."
        }
        FoodGap::NoVeggies => {
            "No vegetables detected, add low-calorie veggies for fiber and micronutrients."
        }
        FoodGap::NoFruits => "No fruits detected, add 1-2 servings for vitamins and fiber.",
        FoodGap::LowFiber => {
            "Fiber looks low, add higher-fiber foods (e.g. oats, lentils, veggies, fruits)."
        }
        FoodGap::LowHealthyFats => {
            "Healthy fats are missing, consider foods like avocado, olive oil, nuts, or salmon (diet permitting)."
        }
        FoodGap::LowComplexCarbs => {
            "Complex carbs are missing, add whole grains or starchy carbs (diet permitting)."
        }
    }
}

/// Freshness warnings first, then one advisory per gap in gap order.
pub fn generate_recommendations(
    ingredients: &[Ingredient],
    gaps: &BTreeSet<FoodGap>,
    today: NaiveDate,
) -> Vec<String> {
    let freshness: Vec<Freshness> = ingredients.iter().map(|i| i.freshness(today)).collect();
    let mut recommendations = Vec::new();

    if freshness.contains(&Freshness::Expired) {
        recommendations.push(EXPIRED_WARNING.to_string());
    }
    if freshness.contains(&Freshness::UseSoon) {
        recommendations.push(USE_SOON_NOTICE.to_string());
    }
    recommendations.extend(gaps.iter().map(|gap| advice_for(*gap).to_string()));

    recommendations
}

/// Picks up to [`MAX_ITEMS_PER_GAP`] catalogued, diet-compatible foods per
/// gap, by ascending suggestion priority.
pub fn generate_shopping_list(
    diet: &DietType,
    gaps: &BTreeSet<FoodGap>,
    suggestions: &SuggestionCatalog,
    catalog: &FoodCatalog,
) -> Vec<ShoppingItem> {
    let mut items = Vec::new();

    for gap in gaps {
        let picked = suggestions
            .for_gap(*gap)
            .iter()
            .filter(|suggestion| suggestion.allows_diet(diet))
            .filter_map(|suggestion| {
                let name = suggestion.usable_name()?;
                catalog
                    .contains(name)
                    .then(|| ShoppingItem::new(name, suggestion.reason.clone()))
            })
            .take(MAX_ITEMS_PER_GAP);
        items.extend(picked);
    }

    dedup_shopping_items(items)
}

/// Keeps the first item per lower-cased, trimmed name, in insertion order.
pub fn dedup_shopping_items(items: Vec<ShoppingItem>) -> Vec<ShoppingItem> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.dedup_key()))
        .collect()
}
