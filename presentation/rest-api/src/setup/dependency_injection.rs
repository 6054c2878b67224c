use std::sync::Arc;

use anyhow::Context;

use logger::TracingLogger;
use maps::client::GoogleMapsClient;
use maps::distance_matrix::DistanceMatrixService;
use persistence::food::repository::{
    FoodCatalogRepositoryPostgres, FoodSuggestionRepositoryPostgres,
};
use persistence::profile::repository::ProfileRepositoryPostgres;
use persistence::store::repository::StoreRepositoryPostgres;

use business::application::catalog::food::{CachedFoodCatalog, CachedSuggestionCatalog};
use business::application::catalog::store::CachedStoreCatalog;
use business::application::nutrition::analyze::AnalyzeNutritionUseCaseImpl;
use business::application::store::recommend::RecommendStoresUseCaseImpl;
use business::domain::logger::Logger;

use crate::config::engine_config::EngineConfig;
use crate::config::maps_config::MapsConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub nutrition_api: crate::api::nutrition::routes::NutritionApi,
    pub store_api: crate::api::store::routes::StoreApi,
}

impl DependencyContainer {
    pub async fn new(
        pool: sqlx::PgPool,
        maps_config: &MapsConfig,
        engine_config: &EngineConfig,
    ) -> anyhow::Result<Self> {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();
        let ttl = engine_config.catalog_cache_ttl;
        let fetch_timeout = engine_config.catalog_fetch_timeout;

        // Infrastructure adapters
        let food_repository = Arc::new(FoodCatalogRepositoryPostgres::new(pool.clone()));
        let suggestion_repository = Arc::new(FoodSuggestionRepositoryPostgres::new(pool.clone()));
        let profile_repository = Arc::new(ProfileRepositoryPostgres::new(pool.clone()));
        let store_repository = Arc::new(StoreRepositoryPostgres::new(pool));

        let maps_client = GoogleMapsClient::new(
            maps_config.api_key.clone(),
            maps_config.mode.clone(),
            maps_config.timeout,
        )
        .context("failed to build Google Maps HTTP client")?;
        if !maps_client.is_configured() {
            logger.warn("GOOGLE_MAPS_API_KEY not set, store distances use haversine only");
        }
        let distance_service = Arc::new(DistanceMatrixService::new(maps_client));

        // Cached catalogs
        let food_catalog = Arc::new(CachedFoodCatalog::new(
            food_repository,
            logger.clone(),
            ttl,
            fetch_timeout,
        ));
        let suggestion_catalog = Arc::new(CachedSuggestionCatalog::new(
            suggestion_repository,
            logger.clone(),
            ttl,
            fetch_timeout,
        ));
        let store_catalog = Arc::new(CachedStoreCatalog::new(
            store_repository,
            logger.clone(),
            ttl,
            fetch_timeout,
        ));

        // Use cases
        let analyze_use_case = Arc::new(AnalyzeNutritionUseCaseImpl {
            profile_repository,
            food_catalog,
            suggestion_catalog,
            logger: logger.clone(),
            strict_validation: engine_config.strict_ingredient_validation,
            profile_timeout: fetch_timeout,
        });
        let recommend_use_case = Arc::new(RecommendStoresUseCaseImpl {
            store_catalog,
            distance_service,
            weights: engine_config.ranking_weights,
            logger,
        });

        let nutrition_api = crate::api::nutrition::routes::NutritionApi::new(analyze_use_case);
        let store_api = crate::api::store::routes::StoreApi::new(recommend_use_case);

        Ok(Self {
            health_api,
            nutrition_api,
            store_api,
        })
    }
}
