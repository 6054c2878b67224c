use chrono::NaiveDate;

use super::freshness::{Freshness, classify};
use super::units::estimate_grams;

/// One item of the household inventory.
#[derive(Debug, Clone, PartialEq)]
pub struct Ingredient {
    pub name: String,
    pub quantity: f64,
    pub unit: Option<String>,
    pub purchase_date: Option<NaiveDate>,
    pub shelf_life_days: Option<i64>,
    pub confidence_score: f64,
}

impl Ingredient {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: 0.0,
            unit: None,
            purchase_date: None,
            shelf_life_days: None,
            confidence_score: 1.0,
        }
    }

    pub fn freshness(&self, today: NaiveDate) -> Freshness {
        classify(self.purchase_date, self.shelf_life_days, today)
    }

    pub fn is_available(&self, today: NaiveDate) -> bool {
        self.freshness(today).is_available()
    }

    /// Catalog lookup key: trimmed and lower-cased. `None` for blank names.
    pub fn lookup_key(&self) -> Option<String> {
        let key = self.name.trim().to_lowercase();
        (!key.is_empty()).then_some(key)
    }

    pub fn grams(&self) -> f64 {
        estimate_grams(self.quantity, self.unit.as_deref())
    }
}
