use poem_openapi::Object;

use business::domain::profile::normalize::normalize_gender;
use business::domain::profile::value_objects::Gender;
use business::domain::store::model::{StoreRanking, StoreScore};

#[derive(Debug, Clone, Object)]
pub struct RecommendStoresRequest {
    /// Latitude of the user in decimal degrees
    pub lat: f64,
    /// Longitude of the user in decimal degrees
    pub lng: f64,
    /// Items to buy, usually the shopping list of a nutrition analysis
    #[oai(default)]
    pub needed_items: Vec<String>,
    /// male, female or other; only affects the walking estimate
    pub gender: Option<String>,
    /// Body weight in kg for the walking estimate (default: 70)
    pub weight_kg: Option<f64>,
}

impl RecommendStoresRequest {
    pub fn gender(&self) -> Option<Gender> {
        self.gender
            .as_deref()
            .filter(|g| !g.trim().is_empty())
            .map(|g| normalize_gender(Some(g)))
    }
}

#[derive(Debug, Clone, Object)]
pub struct WalkingEstimateResponse {
    pub steps: u64,
    pub calories: u64,
}

#[derive(Debug, Clone, Object)]
pub struct StoreScoreResponse {
    pub store_id: String,
    pub name: String,
    pub chain: String,
    #[oai(skip_serializing_if_is_none)]
    pub address: Option<String>,
    pub lat: f64,
    pub lng: f64,
    pub total_price: f64,
    pub distance_km: f64,
    pub normalized_price: f64,
    pub normalized_distance: f64,
    /// Weighted score, lower is better
    pub score: f64,
    /// driving or haversine
    pub distance_source: String,
    pub walking: WalkingEstimateResponse,
}

impl From<StoreScore> for StoreScoreResponse {
    fn from(s: StoreScore) -> Self {
        Self {
            store_id: s.store.id,
            name: s.store.name,
            chain: s.store.chain,
            address: s.store.address,
            lat: s.store.location.lat,
            lng: s.store.location.lng,
            total_price: s.total_price,
            distance_km: s.distance_km,
            normalized_price: s.normalized_price,
            normalized_distance: s.normalized_distance,
            score: s.score,
            distance_source: s.distance_source.to_string(),
            walking: WalkingEstimateResponse {
                steps: s.walking.steps,
                calories: s.walking.calories,
            },
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct StoreRecommendationResponse {
    #[oai(skip_serializing_if_is_none)]
    pub best_overall: Option<StoreScoreResponse>,
    #[oai(skip_serializing_if_is_none)]
    pub cheapest: Option<StoreScoreResponse>,
    #[oai(skip_serializing_if_is_none)]
    pub closest: Option<StoreScoreResponse>,
    pub all_stores: Vec<StoreScoreResponse>,
}

impl From<StoreRanking> for StoreRecommendationResponse {
    fn from(r: StoreRanking) -> Self {
        Self {
            best_overall: r.best_overall.map(|s| s.into()),
            cheapest: r.cheapest.map(|s| s.into()),
            closest: r.closest.map(|s| s.into()),
            all_stores: r.all_stores.into_iter().map(|s| s.into()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(gender: Option<&str>) -> RecommendStoresRequest {
        RecommendStoresRequest {
            lat: 0.0,
            lng: 0.0,
            needed_items: vec![],
            gender: gender.map(str::to_string),
            weight_kg: None,
        }
    }

    #[test]
    fn should_leave_missing_gender_unset() {
        assert_eq!(request(None).gender(), None);
        assert_eq!(request(Some(" ")).gender(), None);
    }

    #[test]
    fn should_normalize_given_gender() {
        assert_eq!(request(Some("MALE")).gender(), Some(Gender::Male));
        assert_eq!(request(Some("nonbinary")).gender(), Some(Gender::Other));
    }
}
