use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::shared::rounding::round_half_up;

/// WGS84 coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Store {
    pub id: String,
    pub name: String,
    pub chain: String,
    pub address: Option<String>,
    pub location: GeoPoint,
}

/// Store row as read from the catalog. Rows missing identity or
/// coordinates never become a [`Store`].
#[derive(Debug, Clone, Default)]
pub struct StoreRecord {
    pub id: Option<String>,
    pub name: Option<String>,
    pub chain: Option<String>,
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl StoreRecord {
    pub fn into_store(self) -> Option<Store> {
        let non_blank = |value: Option<String>| value.filter(|v| !v.trim().is_empty());
        Some(Store {
            id: non_blank(self.id)?,
            name: non_blank(self.name)?,
            chain: non_blank(self.chain)?,
            address: self.address,
            location: GeoPoint::new(self.latitude?, self.longitude?),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StorePrice {
    pub store_id: Uuid,
    pub food_name: String,
    pub price: f64,
}

/// Unit prices per store, keyed by lower-cased trimmed food name.
#[derive(Debug, Clone, Default)]
pub struct PriceTable {
    prices: HashMap<Uuid, HashMap<String, f64>>,
}

impl PriceTable {
    pub fn from_prices(prices: impl IntoIterator<Item = StorePrice>) -> Self {
        let mut table: HashMap<Uuid, HashMap<String, f64>> = HashMap::new();
        for price in prices {
            let key = price.food_name.trim().to_lowercase();
            if key.is_empty() {
                continue;
            }
            table.entry(price.store_id).or_default().insert(key, price.price);
        }
        Self { prices: table }
    }

    pub fn price_of(&self, store_id: &Uuid, food_name: &str) -> Option<f64> {
        self.prices
            .get(store_id)?
            .get(&food_name.trim().to_lowercase())
            .copied()
    }

    pub fn len(&self) -> usize {
        self.prices.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Stores and prices loaded together so a ranking never mixes two catalog
/// generations.
#[derive(Debug, Clone, Default)]
pub struct StoreCatalog {
    pub stores: Vec<Store>,
    pub prices: PriceTable,
}

impl StoreCatalog {
    pub fn from_parts(records: Vec<StoreRecord>, prices: Vec<StorePrice>) -> Self {
        Self {
            stores: records.into_iter().filter_map(StoreRecord::into_store).collect(),
            prices: PriceTable::from_prices(prices),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceSource {
    Driving,
    Haversine,
}

impl std::fmt::Display for DistanceSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DistanceSource::Driving => write!(f, "driving"),
            DistanceSource::Haversine => write!(f, "haversine"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WalkingEstimate {
    pub steps: u64,
    pub calories: u64,
}

/// Relative weight of price and distance in the combined score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankingWeights {
    pub price: f64,
    pub distance: f64,
}

impl Default for RankingWeights {
    fn default() -> Self {
        Self {
            price: 0.5,
            distance: 0.5,
        }
    }
}

/// Raw per-store figures gathered before normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreMeasurement {
    pub store: Store,
    pub total_price: f64,
    pub distance_km: f64,
    pub distance_source: DistanceSource,
    pub walking: WalkingEstimate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StoreScore {
    pub store: Store,
    pub total_price: f64,
    pub distance_km: f64,
    pub normalized_price: f64,
    pub normalized_distance: f64,
    /// Lower is better.
    pub score: f64,
    pub distance_source: DistanceSource,
    pub walking: WalkingEstimate,
}

impl StoreScore {
    /// Output precision: money and distance to cents, normalized values
    /// and score to thousandths.
    pub fn rounded(self) -> Self {
        Self {
            total_price: round_half_up(self.total_price, 2),
            distance_km: round_half_up(self.distance_km, 2),
            normalized_price: round_half_up(self.normalized_price, 3),
            normalized_distance: round_half_up(self.normalized_distance, 3),
            score: round_half_up(self.score, 3),
            ..self
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct StoreRanking {
    pub best_overall: Option<StoreScore>,
    pub cheapest: Option<StoreScore>,
    pub closest: Option<StoreScore>,
    pub all_stores: Vec<StoreScore>,
}
