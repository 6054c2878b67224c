//! Multi-criteria store ranking: min-max normalized price and distance,
//! combined with configurable weights. Lower scores rank first.

use uuid::Uuid;

use super::model::{
    GeoPoint, PriceTable, RankingWeights, StoreMeasurement, StoreRanking, StoreScore,
};

/// Charged for each needed item a store does not price.
pub const MISSING_ITEM_PENALTY: f64 = 6.0;
/// Total charged to a store whose id is not a UUID, so it sorts last on price.
pub const INVALID_STORE_PENALTY: f64 = 10_000.0;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance.
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().min(1.0).asin()
}

/// Maps `value` from `[min, max]` onto `[0, 1]`. A degenerate range maps to 0.
pub fn normalize(value: f64, min: f64, max: f64) -> f64 {
    let span = max - min;
    if !span.is_finite() || span <= 0.0 {
        return 0.0;
    }
    ((value - min) / span).clamp(0.0, 1.0)
}

/// Sum of the needed items' prices at one store. An empty list costs
/// nothing at any store, valid id or not.
pub fn total_price(store_id: &str, needed_items: &[String], prices: &PriceTable) -> f64 {
    if needed_items.is_empty() {
        return 0.0;
    }
    let Ok(store_uuid) = Uuid::parse_str(store_id.trim()) else {
        return INVALID_STORE_PENALTY;
    };

    needed_items
        .iter()
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .map(|item| prices.price_of(&store_uuid, item).unwrap_or(MISSING_ITEM_PENALTY))
        .sum()
}

fn bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), v| {
        (min.min(v), max.max(v))
    })
}

/// First element holding the minimum of `key`.
fn first_min_by(scores: &[StoreScore], key: impl Fn(&StoreScore) -> f64) -> Option<StoreScore> {
    scores
        .iter()
        .fold(None::<&StoreScore>, |best, candidate| match best {
            Some(current) if key(current) <= key(candidate) => Some(current),
            _ => Some(candidate),
        })
        .cloned()
}

pub fn rank_stores(measurements: Vec<StoreMeasurement>, weights: &RankingWeights) -> StoreRanking {
    if measurements.is_empty() {
        return StoreRanking::default();
    }

    let (min_price, max_price) = bounds(measurements.iter().map(|m| m.total_price));
    let (min_distance, max_distance) = bounds(measurements.iter().map(|m| m.distance_km));

    let mut scores: Vec<StoreScore> = measurements
        .into_iter()
        .map(|m| {
            let normalized_price = normalize(m.total_price, min_price, max_price);
            let normalized_distance = normalize(m.distance_km, min_distance, max_distance);
            StoreScore {
                score: weights.price * normalized_price + weights.distance * normalized_distance,
                store: m.store,
                total_price: m.total_price,
                distance_km: m.distance_km,
                normalized_price,
                normalized_distance,
                distance_source: m.distance_source,
                walking: m.walking,
            }
        })
        .collect();

    scores.sort_by(|a, b| a.score.total_cmp(&b.score));

    let cheapest = first_min_by(&scores, |s| s.total_price).map(StoreScore::rounded);
    let closest = first_min_by(&scores, |s| s.distance_km).map(StoreScore::rounded);
    let all_stores: Vec<StoreScore> = scores.into_iter().map(StoreScore::rounded).collect();

    StoreRanking {
        best_overall: all_stores.first().cloned(),
        cheapest,
        closest,
        all_stores,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::store::model::{DistanceSource, Store, StorePrice, WalkingEstimate};
    use proptest::prelude::*;

    fn store(id: &str) -> Store {
        Store {
            id: id.to_string(),
            name: format!("Store {}", id),
            chain: "Chain".to_string(),
            address: None,
            location: GeoPoint::new(0.0, 0.0),
        }
    }

    fn measurement(id: &str, total_price: f64, distance_km: f64) -> StoreMeasurement {
        StoreMeasurement {
            store: store(id),
            total_price,
            distance_km,
            distance_source: DistanceSource::Driving,
            walking: WalkingEstimate::default(),
        }
    }

    fn items(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn should_score_two_store_example() {
        let ranking = rank_stores(
            vec![measurement("a", 10.0, 2.0), measurement("b", 20.0, 4.0)],
            &RankingWeights::default(),
        );

        let scores: Vec<f64> = ranking.all_stores.iter().map(|s| s.score).collect();
        assert_eq!(scores, vec![0.0, 1.0]);
        assert_eq!(ranking.all_stores[1].normalized_price, 1.0);
        assert_eq!(ranking.all_stores[1].normalized_distance, 1.0);
        assert_eq!(ranking.best_overall.unwrap().store.id, "a");
        assert_eq!(ranking.cheapest.unwrap().store.id, "a");
        assert_eq!(ranking.closest.unwrap().store.id, "a");
    }

    #[test]
    fn should_sort_by_weighted_score() {
        let ranking = rank_stores(
            vec![
                measurement("pricey-near", 30.0, 1.0),
                measurement("cheap-far", 10.0, 9.0),
                measurement("middle", 15.0, 3.0),
            ],
            &RankingWeights {
                price: 0.8,
                distance: 0.2,
            },
        );

        let order: Vec<&str> = ranking.all_stores.iter().map(|s| s.store.id.as_str()).collect();
        assert_eq!(order, vec!["cheap-far", "middle", "pricey-near"]);
        assert_eq!(ranking.cheapest.unwrap().store.id, "cheap-far");
        assert_eq!(ranking.closest.unwrap().store.id, "pricey-near");
    }

    #[test]
    fn should_normalize_identical_values_to_zero() {
        let ranking = rank_stores(
            vec![measurement("a", 12.0, 1.0), measurement("b", 12.0, 5.0)],
            &RankingWeights::default(),
        );

        assert!(ranking.all_stores.iter().all(|s| s.normalized_price == 0.0));
        assert_eq!(ranking.cheapest.unwrap().store.id, "a");
    }

    #[test]
    fn should_return_empty_ranking_without_stores() {
        let ranking = rank_stores(vec![], &RankingWeights::default());
        assert_eq!(ranking, StoreRanking::default());
    }

    #[test]
    fn should_round_only_in_output() {
        let ranking = rank_stores(
            vec![measurement("a", 3.333, 1.23456), measurement("b", 9.999, 7.0)],
            &RankingWeights::default(),
        );
        let first = &ranking.all_stores[0];
        assert_eq!(first.total_price, 3.33);
        assert_eq!(first.distance_km, 1.23);
    }

    #[test]
    fn should_price_items_with_penalties() {
        let store_id = Uuid::new_v4();
        let prices = PriceTable::from_prices(vec![StorePrice {
            store_id,
            food_name: "tofu".to_string(),
            price: 2.5,
        }]);

        let total = total_price(&store_id.to_string(), &items(&["Tofu ", "kale", " "]), &prices);
        assert_eq!(total, 2.5 + MISSING_ITEM_PENALTY);
        assert_eq!(total_price(&store_id.to_string(), &[], &prices), 0.0);
        assert_eq!(
            total_price("not-a-uuid", &items(&["tofu"]), &prices),
            INVALID_STORE_PENALTY
        );
    }

    #[test]
    fn should_not_penalize_invalid_store_when_nothing_is_needed() {
        let prices = PriceTable::default();

        assert_eq!(total_price("not-a-uuid", &[], &prices), 0.0);
        assert_eq!(
            total_price("not-a-uuid", &items(&["  "]), &prices),
            INVALID_STORE_PENALTY
        );
    }

    #[test]
    fn should_compute_haversine_distance() {
        let madrid = GeoPoint::new(40.4168, -3.7038);
        let barcelona = GeoPoint::new(41.3874, 2.1686);
        let distance = haversine_km(madrid, barcelona);
        assert!((distance - 505.0).abs() < 5.0);
        assert_eq!(haversine_km(madrid, madrid), 0.0);
    }

    proptest! {
        #[test]
        fn normalized_values_stay_in_unit_range(
            values in prop::collection::vec(-1.0e6f64..1.0e6, 1..20),
        ) {
            let (min, max) = bounds(values.iter().copied());
            for v in &values {
                let n = normalize(*v, min, max);
                prop_assert!((0.0..=1.0).contains(&n));
            }
        }
    }
}
