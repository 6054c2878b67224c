use std::sync::Arc;
use std::time::Duration;

use tokio::time::timeout;

use crate::domain::errors::RepositoryError;
use crate::domain::food::catalog::{FoodCatalog, SuggestionCatalog};
use crate::domain::food::repository::{FoodCatalogRepository, FoodSuggestionRepository};
use crate::domain::logger::Logger;
use crate::domain::shared::cache::TtlCache;

/// Food catalog read through a TTL snapshot cache. A failed or timed-out
/// fetch degrades to an empty catalog for that request only.
pub struct CachedFoodCatalog {
    repository: Arc<dyn FoodCatalogRepository>,
    logger: Arc<dyn Logger>,
    fetch_timeout: Duration,
    cache: TtlCache<FoodCatalog>,
}

impl CachedFoodCatalog {
    pub fn new(
        repository: Arc<dyn FoodCatalogRepository>,
        logger: Arc<dyn Logger>,
        ttl: Duration,
        fetch_timeout: Duration,
    ) -> Self {
        Self {
            repository,
            logger,
            fetch_timeout,
            cache: TtlCache::new(ttl),
        }
    }

    pub async fn snapshot(&self) -> Arc<FoodCatalog> {
        let loaded = self
            .cache
            .get_or_refresh(|| async {
                let entries =
                    timeout(self.fetch_timeout, self.repository.get_all()).await??;
                let catalog = FoodCatalog::from_entries(entries);
                self.logger
                    .info(&format!("Food catalog refreshed with {} entries", catalog.len()));
                Ok::<_, RepositoryError>(catalog)
            })
            .await;

        loaded.unwrap_or_else(|err| {
            self.logger
                .warn(&format!("Food catalog unavailable, using empty catalog: {}", err));
            Arc::new(FoodCatalog::default())
        })
    }
}

/// Food suggestions grouped by gap, cached the same way as the catalog.
pub struct CachedSuggestionCatalog {
    repository: Arc<dyn FoodSuggestionRepository>,
    logger: Arc<dyn Logger>,
    fetch_timeout: Duration,
    cache: TtlCache<SuggestionCatalog>,
}

impl CachedSuggestionCatalog {
    pub fn new(
        repository: Arc<dyn FoodSuggestionRepository>,
        logger: Arc<dyn Logger>,
        ttl: Duration,
        fetch_timeout: Duration,
    ) -> Self {
        Self {
            repository,
            logger,
            fetch_timeout,
            cache: TtlCache::new(ttl),
        }
    }

    pub async fn snapshot(&self) -> Arc<SuggestionCatalog> {
        let loaded = self
            .cache
            .get_or_refresh(|| async {
                let suggestions =
                    timeout(self.fetch_timeout, self.repository.get_all()).await??;
                let catalog = SuggestionCatalog::from_suggestions(suggestions);
                self.logger.info(&format!(
                    "Suggestion catalog refreshed with {} suggestions",
                    catalog.len()
                ));
                Ok::<_, RepositoryError>(catalog)
            })
            .await;

        loaded.unwrap_or_else(|err| {
            self.logger.warn(&format!(
                "Suggestion catalog unavailable, using empty catalog: {}",
                err
            ));
            Arc::new(SuggestionCatalog::default())
        })
    }
}
