use std::collections::{BTreeMap, HashMap};

use crate::domain::nutrition::model::FoodGap;

use super::model::{FoodCatalogEntry, FoodSuggestion};

/// Immutable snapshot of the food catalog keyed by trimmed, lower-cased name.
#[derive(Debug, Clone, Default)]
pub struct FoodCatalog {
    entries: HashMap<String, FoodCatalogEntry>,
}

impl FoodCatalog {
    pub fn from_entries(entries: impl IntoIterator<Item = FoodCatalogEntry>) -> Self {
        let entries = entries
            .into_iter()
            .filter_map(|entry| {
                let key = entry.name.trim().to_lowercase();
                (!key.is_empty()).then_some((key, entry))
            })
            .collect();
        Self { entries }
    }

    pub fn find(&self, name: &str) -> Option<&FoodCatalogEntry> {
        self.entries.get(&name.trim().to_lowercase())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Immutable snapshot of food suggestions grouped by gap, each group sorted
/// by ascending priority.
#[derive(Debug, Clone, Default)]
pub struct SuggestionCatalog {
    by_gap: BTreeMap<FoodGap, Vec<FoodSuggestion>>,
}

impl SuggestionCatalog {
    pub fn from_suggestions(suggestions: impl IntoIterator<Item = FoodSuggestion>) -> Self {
        let mut by_gap: BTreeMap<FoodGap, Vec<FoodSuggestion>> = BTreeMap::new();
        for suggestion in suggestions {
            by_gap.entry(suggestion.gap).or_default().push(suggestion);
        }
        // Stable sort keeps source order among equal priorities.
        for group in by_gap.values_mut() {
            group.sort_by_key(|s| s.priority);
        }
        Self { by_gap }
    }

    pub fn for_gap(&self, gap: FoodGap) -> &[FoodSuggestion] {
        self.by_gap.get(&gap).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.by_gap.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_gap.is_empty()
    }
}
