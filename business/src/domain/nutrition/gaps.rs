use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::domain::food::catalog::FoodCatalog;
use crate::domain::food::groups::count_groups;
use crate::domain::food::model::FoodGroup;
use crate::domain::ingredient::model::Ingredient;
use crate::domain::profile::model::UserProfile;
use crate::domain::profile::value_objects::DietType;

use super::calculator::calculate_target;
use super::errors::NutritionError;
use super::model::FoodGap;

/// Available protein below this share of the target counts as a gap.
pub const LOW_PROTEIN_RATIO: f64 = 0.6;

/// Rejects the first non-blank ingredient name missing from the catalog.
pub fn validate_ingredients(
    ingredients: &[Ingredient],
    catalog: &FoodCatalog,
) -> Result<(), NutritionError> {
    for ingredient in ingredients {
        if let Some(key) = ingredient.lookup_key()
            && !catalog.contains(&key)
        {
            return Err(NutritionError::UnknownIngredient(
                ingredient.name.trim().to_string(),
            ));
        }
    }
    Ok(())
}

/// Grams of protein on hand across non-expired, catalogued ingredients.
pub fn estimate_protein(ingredients: &[Ingredient], catalog: &FoodCatalog, today: NaiveDate) -> f64 {
    ingredients
        .iter()
        .filter(|ingredient| ingredient.is_available(today))
        .filter_map(|ingredient| {
            let key = ingredient.lookup_key()?;
            let entry = catalog.find(&key)?;
            Some(entry.protein_per_100g * ingredient.grams() / 100.0)
        })
        .sum()
}

pub fn detect_gaps(
    profile: &UserProfile,
    ingredients: &[Ingredient],
    catalog: &FoodCatalog,
    today: NaiveDate,
) -> BTreeSet<FoodGap> {
    let target = calculate_target(profile);
    let counts = count_groups(ingredients, catalog, today);
    let count = |group: FoodGroup| counts.get(&group).copied().unwrap_or(0);

    let mut gaps = BTreeSet::new();

    if estimate_protein(ingredients, catalog, today) < LOW_PROTEIN_RATIO * target.protein {
        gaps.insert(FoodGap::LowProtein);
    }
    if count(FoodGroup::Veggies) == 0 {
        gaps.insert(FoodGap::NoVeggies);
    }
    if count(FoodGroup::Fruits) == 0 {
        gaps.insert(FoodGap::NoFruits);
    }
    if count(FoodGroup::Fiber) == 0 {
        gaps.insert(FoodGap::LowFiber);
    }

    let keto = profile.diet_type == DietType::Keto;
    if keto && count(FoodGroup::Fats) == 0 {
        gaps.insert(FoodGap::LowHealthyFats);
    }
    if !keto && count(FoodGroup::Carbs) == 0 {
        gaps.insert(FoodGap::LowComplexCarbs);
    }

    gaps
}
