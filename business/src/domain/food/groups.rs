use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;

use crate::domain::ingredient::model::Ingredient;

use super::catalog::FoodCatalog;
use super::model::{FoodCatalogEntry, FoodGroup};

/// Groups a catalog entry belongs to: its primary group (if recognised)
/// plus `Fiber` when it carries any fiber.
pub fn groups_of(entry: &FoodCatalogEntry) -> BTreeSet<FoodGroup> {
    let mut groups = BTreeSet::new();
    if let Some(primary) = entry.food_group.as_deref().and_then(FoodGroup::from_catalog_tag) {
        groups.insert(primary);
    }
    if entry.fiber_per_100g > 0.0 {
        groups.insert(FoodGroup::Fiber);
    }
    groups
}

/// Resolves an ingredient name against the catalog. Unknown names resolve
/// to no groups.
pub fn groups_for(name: &str, catalog: &FoodCatalog) -> BTreeSet<FoodGroup> {
    catalog.find(name).map(groups_of).unwrap_or_default()
}

/// Counts available (non-expired) ingredients per food group. Every group
/// is present in the result.
pub fn count_groups(
    ingredients: &[Ingredient],
    catalog: &FoodCatalog,
    today: NaiveDate,
) -> BTreeMap<FoodGroup, usize> {
    let mut counts: BTreeMap<FoodGroup, usize> =
        FoodGroup::ALL.into_iter().map(|group| (group, 0)).collect();

    for ingredient in ingredients {
        if ingredient.lookup_key().is_none() || !ingredient.is_available(today) {
            continue;
        }
        for group in groups_for(&ingredient.name, catalog) {
            *counts.entry(group).or_default() += 1;
        }
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn food(name: &str, group: &str, fiber: f64) -> FoodCatalogEntry {
        FoodCatalogEntry {
            name: name.to_string(),
            fiber_per_100g: fiber,
            food_group: Some(group.to_string()),
            ..Default::default()
        }
    }

    fn catalog() -> FoodCatalog {
        FoodCatalog::from_entries(vec![
            food("Spinach", "veggies", 2.2),
            food("Chicken Breast", "PROTEIN", 0.0),
            food("Apple", "Fruits", 2.4),
            food("Butter", "dairy", 0.0),
        ])
    }

    #[test]
    fn should_resolve_primary_group_and_fiber() {
        let groups = groups_for("spinach", &catalog());
        assert_eq!(
            groups.into_iter().collect::<Vec<_>>(),
            vec![FoodGroup::Veggies, FoodGroup::Fiber]
        );
    }

    #[test]
    fn should_resolve_unknown_primary_group_to_nothing() {
        assert!(groups_for("Butter", &catalog()).is_empty());
        assert!(groups_for("dragonfruit", &catalog()).is_empty());
    }

    #[test]
    fn should_count_only_non_expired_ingredients() {
        let expired_apple = Ingredient {
            purchase_date: Some(today() - Duration::days(20)),
            shelf_life_days: Some(14),
            ..Ingredient::named("Apple")
        };
        let ingredients = vec![
            Ingredient::named("Spinach"),
            Ingredient::named("chicken breast"),
            expired_apple,
            Ingredient::named(""),
            Ingredient::named("unobtainium"),
        ];

        let counts = count_groups(&ingredients, &catalog(), today());

        assert_eq!(counts[&FoodGroup::Veggies], 1);
        assert_eq!(counts[&FoodGroup::Protein], 1);
        assert_eq!(counts[&FoodGroup::Fruits], 0);
        assert_eq!(counts[&FoodGroup::Fiber], 1);
        assert_eq!(counts[&FoodGroup::Carbs], 0);
        assert_eq!(counts.len(), FoodGroup::ALL.len());
    }
}
