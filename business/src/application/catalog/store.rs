use std::sync::Arc;
use std::time::Duration;

use tokio::time::timeout;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::shared::cache::TtlCache;
use crate::domain::store::model::StoreCatalog;
use crate::domain::store::repository::StoreRepository;

/// Stores and their prices, refreshed together under one TTL.
pub struct CachedStoreCatalog {
    repository: Arc<dyn StoreRepository>,
    logger: Arc<dyn Logger>,
    fetch_timeout: Duration,
    cache: TtlCache<StoreCatalog>,
}

impl CachedStoreCatalog {
    pub fn new(
        repository: Arc<dyn StoreRepository>,
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

    pub async fn snapshot(&self) -> Arc<StoreCatalog> {
        let loaded = self
            .cache
            .get_or_refresh(|| async {
                let (records, prices) = timeout(self.fetch_timeout, async {
                    let records = self.repository.get_stores().await?;
                    let prices = self.repository.get_prices().await?;
                    Ok::<_, RepositoryError>((records, prices))
                })
                .await??;
                let catalog = StoreCatalog::from_parts(records, prices);
                self.logger.info(&format!(
                    "Store catalog refreshed with {} stores and {} prices",
                    catalog.stores.len(),
                    catalog.prices.len()
                ));
                Ok::<_, RepositoryError>(catalog)
            })
            .await;

        loaded.unwrap_or_else(|err| {
            self.logger
                .warn(&format!("Store catalog unavailable, using empty catalog: {}", err));
            Arc::new(StoreCatalog::default())
        })
    }
}
