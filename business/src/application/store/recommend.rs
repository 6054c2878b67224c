use std::sync::Arc;

use async_trait::async_trait;

use crate::application::catalog::store::CachedStoreCatalog;
use crate::domain::logger::Logger;
use crate::domain::store::errors::StoreError;
use crate::domain::store::model::{
    DistanceSource, GeoPoint, RankingWeights, Store, StoreMeasurement, StoreRanking,
};
use crate::domain::store::ranking::{haversine_km, rank_stores, total_price};
use crate::domain::store::services::DistanceService;
use crate::domain::store::use_cases::recommend::{RecommendStoresParams, RecommendStoresUseCase};
use crate::domain::store::walking;

pub struct RecommendStoresUseCaseImpl {
    pub store_catalog: Arc<CachedStoreCatalog>,
    pub distance_service: Arc<dyn DistanceService>,
    pub weights: RankingWeights,
    pub logger: Arc<dyn Logger>,
}

impl RecommendStoresUseCaseImpl {
    /// Driving distance when available, great-circle otherwise.
    async fn measure_distance(&self, origin: GeoPoint, store: &Store) -> (f64, DistanceSource) {
        match self.distance_service.distance_km(origin, store.location).await {
            Ok(km) if km.is_finite() && km >= 0.0 => (km, DistanceSource::Driving),
            Ok(km) => {
                self.logger.warn(&format!(
                    "Unusable driving distance {} for store {}, using haversine",
                    km, store.id
                ));
                (haversine_km(origin, store.location), DistanceSource::Haversine)
            }
            Err(err) => {
                self.logger.warn(&format!(
                    "Driving distance unavailable for store {}: {}, using haversine",
                    store.id, err
                ));
                (haversine_km(origin, store.location), DistanceSource::Haversine)
            }
        }
    }
}

#[async_trait]
impl RecommendStoresUseCase for RecommendStoresUseCaseImpl {
    async fn execute(&self, params: RecommendStoresParams) -> Result<StoreRanking, StoreError> {
        if !params.origin.is_valid() {
            return Err(StoreError::InvalidLocation);
        }

        let catalog = self.store_catalog.snapshot().await;

        self.logger.info(&format!(
            "Ranking {} stores for {} needed items",
            catalog.stores.len(),
            params.needed_items.len()
        ));

        let mut measurements = Vec::with_capacity(catalog.stores.len());
        for store in &catalog.stores {
            let (distance_km, distance_source) = self.measure_distance(params.origin, store).await;
            measurements.push(StoreMeasurement {
                store: store.clone(),
                total_price: total_price(&store.id, &params.needed_items, &catalog.prices),
                distance_km,
                distance_source,
                walking: walking::estimate(distance_km, params.gender, params.weight_kg),
            });
        }

        let ranking = rank_stores(measurements, &self.weights);

        if let Some(best) = &ranking.best_overall {
            self.logger.info(&format!(
                "Best store {} with score {}",
                best.store.id, best.score
            ));
        }

        Ok(ranking)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::profile::value_objects::Gender;
    use crate::domain::store::model::{StorePrice, StoreRecord};
    use crate::domain::store::ranking::INVALID_STORE_PENALTY;
    use crate::domain::store::repository::StoreRepository;
    use crate::domain::store::services::DistanceError;
    use mockall::mock;
    use std::time::Duration;
    use uuid::Uuid;

    mock! {
        pub StoreRepo {}

        #[async_trait]
        impl StoreRepository for StoreRepo {
            async fn get_stores(&self) -> Result<Vec<StoreRecord>, RepositoryError>;
            async fn get_prices(&self) -> Result<Vec<StorePrice>, RepositoryError>;
        }
    }

    mock! {
        pub Distance {}

        #[async_trait]
        impl DistanceService for Distance {
            async fn distance_km(
                &self,
                origin: GeoPoint,
                destination: GeoPoint,
            ) -> Result<f64, DistanceError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn record(id: &str, name: &str, lat: f64) -> StoreRecord {
        StoreRecord {
            id: Some(id.to_string()),
            name: Some(name.to_string()),
            chain: Some("Chain".to_string()),
            address: None,
            latitude: Some(lat),
            longitude: Some(0.0),
        }
    }

    fn price(store_id: Uuid, food: &str, price: f64) -> StorePrice {
        StorePrice {
            store_id,
            food_name: food.to_string(),
            price,
        }
    }

    fn use_case(
        records: Vec<StoreRecord>,
        prices: Vec<StorePrice>,
        distance: MockDistance,
    ) -> RecommendStoresUseCaseImpl {
        let mut repo = MockStoreRepo::new();
        repo.expect_get_stores()
            .returning(move || Ok(records.clone()));
        repo.expect_get_prices()
            .returning(move || Ok(prices.clone()));

        RecommendStoresUseCaseImpl {
            store_catalog: Arc::new(CachedStoreCatalog::new(
                Arc::new(repo),
                mock_logger(),
                Duration::from_secs(60),
                Duration::from_secs(5),
            )),
            distance_service: Arc::new(distance),
            weights: RankingWeights::default(),
            logger: mock_logger(),
        }
    }

    fn params(needed: &[&str]) -> RecommendStoresParams {
        RecommendStoresParams {
            origin: GeoPoint::new(0.0, 0.0),
            needed_items: needed.iter().map(|n| n.to_string()).collect(),
            gender: Some(Gender::Male),
            weight_kg: Some(70.0),
        }
    }

    #[tokio::test]
    async fn should_rank_stores_by_price_and_driving_distance() {
        let cheap = Uuid::new_v4();
        let near = Uuid::new_v4();

        let mut distance = MockDistance::new();
        distance
            .expect_distance_km()
            .returning(|_, destination| Ok(if destination.lat > 0.05 { 8.0 } else { 2.0 }));

        let ranking = use_case(
            vec![
                record(&cheap.to_string(), "Cheap", 0.1),
                record(&near.to_string(), "Near", 0.01),
            ],
            vec![
                price(cheap, "milk", 1.0),
                price(cheap, "eggs", 2.0),
                price(near, "milk", 1.5),
                price(near, "eggs", 2.5),
            ],
            distance,
        )
        .execute(params(&["Milk", "eggs"]))
        .await
        .unwrap();

        assert_eq!(ranking.all_stores.len(), 2);
        assert_eq!(ranking.cheapest.as_ref().unwrap().store.name, "Cheap");
        assert_eq!(ranking.closest.as_ref().unwrap().store.name, "Near");
        assert!(
            ranking
                .all_stores
                .iter()
                .all(|s| s.distance_source == DistanceSource::Driving)
        );
        let near_score = ranking.closest.unwrap();
        assert_eq!(near_score.total_price, 4.0);
        assert_eq!(near_score.walking.steps, 2564);
    }

    #[tokio::test]
    async fn should_fall_back_to_haversine_when_driving_distance_fails() {
        let store_id = Uuid::new_v4();

        let mut distance = MockDistance::new();
        distance
            .expect_distance_km()
            .times(1)
            .returning(|_, _| Err(DistanceError::Transport));

        let ranking = use_case(vec![record(&store_id.to_string(), "Only", 0.1)], vec![], distance)
            .execute(params(&["bread"]))
            .await
            .unwrap();

        let best = ranking.best_overall.unwrap();
        assert_eq!(best.distance_source, DistanceSource::Haversine);
        assert!((best.distance_km - 11.12).abs() < 0.01);
        assert_eq!(best.total_price, 6.0);
        assert_eq!(best.score, 0.0);
    }

    #[tokio::test]
    async fn should_penalise_store_with_invalid_id() {
        let valid = Uuid::new_v4();

        let mut distance = MockDistance::new();
        distance.expect_distance_km().returning(|_, _| Ok(1.0));

        let ranking = use_case(
            vec![record("legacy-7", "Legacy", 0.1), record(&valid.to_string(), "Valid", 0.1)],
            vec![price(valid, "rice", 1.2)],
            distance,
        )
        .execute(params(&["rice"]))
        .await
        .unwrap();

        assert_eq!(ranking.best_overall.unwrap().store.name, "Valid");
        let legacy = ranking.all_stores.last().unwrap();
        assert_eq!(legacy.total_price, INVALID_STORE_PENALTY);
    }

    #[tokio::test]
    async fn should_reject_out_of_range_origin() {
        let mut distance = MockDistance::new();
        distance.expect_distance_km().never();

        let result = use_case(vec![], vec![], distance)
            .execute(RecommendStoresParams {
                origin: GeoPoint::new(95.0, 0.0),
                ..params(&[])
            })
            .await;

        assert_eq!(result, Err(StoreError::InvalidLocation));
    }

    #[tokio::test]
    async fn should_return_empty_ranking_without_stores() {
        let ranking = use_case(vec![], vec![], MockDistance::new())
            .execute(params(&["milk"]))
            .await
            .unwrap();

        assert!(ranking.best_overall.is_none());
        assert!(ranking.cheapest.is_none());
        assert!(ranking.closest.is_none());
        assert!(ranking.all_stores.is_empty());
    }
}
