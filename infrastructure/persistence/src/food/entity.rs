use sqlx::FromRow;

use business::domain::food::model::{FoodCatalogEntry, FoodSuggestion};
use business::domain::nutrition::model::FoodGap;

#[derive(Debug, FromRow)]
pub struct FoodEntity {
    pub name: String,
    pub protein_per_100g: Option<f64>,
    pub carbs_per_100g: Option<f64>,
    pub fats_per_100g: Option<f64>,
    pub fiber_per_100g: Option<f64>,
    pub calories_per_100g: Option<f64>,
    pub food_group: Option<String>,
    pub diet_tags: Option<Vec<String>>,
}

impl FoodEntity {
    pub fn into_domain(self) -> FoodCatalogEntry {
        FoodCatalogEntry {
            name: self.name,
            protein_per_100g: self.protein_per_100g.unwrap_or_default(),
            carbs_per_100g: self.carbs_per_100g.unwrap_or_default(),
            fats_per_100g: self.fats_per_100g.unwrap_or_default(),
            fiber_per_100g: self.fiber_per_100g.unwrap_or_default(),
            calories_per_100g: self.calories_per_100g.unwrap_or_default(),
            food_group: self.food_group,
            diet_tags: self.diet_tags.unwrap_or_default(),
        }
    }
}

#[derive(Debug, FromRow)]
pub struct FoodSuggestionEntity {
    pub gap: String,
    pub food_name: Option<String>,
    pub reason: Option<String>,
    pub priority: Option<i32>,
    pub diet_types: Option<Vec<String>>,
}

impl FoodSuggestionEntity {
    /// `None` when the row names a gap this service does not know.
    pub fn into_domain(self) -> Option<FoodSuggestion> {
        let gap = self.gap.parse::<FoodGap>().ok()?;
        Some(FoodSuggestion {
            gap,
            food_name: self.food_name,
            reason: self.reason.unwrap_or_default(),
            priority: self.priority.unwrap_or(i32::MAX),
            diet_types: self.diet_types.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suggestion_row(gap: &str) -> FoodSuggestionEntity {
        FoodSuggestionEntity {
            gap: gap.to_string(),
            food_name: Some("Lentils".to_string()),
            reason: None,
            priority: None,
            diet_types: None,
        }
    }

    #[test]
    fn should_default_missing_nutrients_to_zero() {
        let entry = FoodEntity {
            name: "Water".to_string(),
            protein_per_100g: None,
            carbs_per_100g: None,
            fats_per_100g: None,
            fiber_per_100g: None,
            calories_per_100g: Some(0.0),
            food_group: None,
            diet_tags: None,
        }
        .into_domain();

        assert_eq!(entry.fiber_per_100g, 0.0);
        assert!(entry.diet_tags.is_empty());
    }

    #[test]
    fn should_sort_unprioritised_suggestions_last() {
        let suggestion = suggestion_row("low_fiber").into_domain().unwrap();
        assert_eq!(suggestion.gap, FoodGap::LowFiber);
        assert_eq!(suggestion.priority, i32::MAX);
        assert_eq!(suggestion.reason, "");
    }

    #[test]
    fn should_drop_rows_with_unknown_gap() {
        assert!(suggestion_row("LOW_SUGAR").into_domain().is_none());
    }
}
