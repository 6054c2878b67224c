use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::store::model::{StorePrice, StoreRecord};
use business::domain::store::repository::StoreRepository;

use super::entity::{StoreEntity, StorePriceEntity};

pub struct StoreRepositoryPostgres {
    pool: PgPool,
}

impl StoreRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StoreRepository for StoreRepositoryPostgres {
    async fn get_stores(&self) -> Result<Vec<StoreRecord>, RepositoryError> {
        let entities = sqlx::query_as::<_, StoreEntity>(
            r#"SELECT id::text AS id, name, chain, address,
                lat::float8 AS lat,
                lng::float8 AS lng
            FROM stores"#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|err| {
            tracing::warn!("Failed to load stores: {}", err);
            RepositoryError::DatabaseError
        })?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_prices(&self) -> Result<Vec<StorePrice>, RepositoryError> {
        let entities = sqlx::query_as::<_, StorePriceEntity>(
            r#"SELECT p.store_id, f.name AS food_name, p.price_usd::numeric AS price_usd
            FROM store_prices p
            JOIN foods f ON f.id = p.food_id
            WHERE p.store_id IS NOT NULL
              AND p.price_usd IS NOT NULL
              AND f.name IS NOT NULL"#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|err| {
            tracing::warn!("Failed to load store prices: {}", err);
            RepositoryError::DatabaseError
        })?;

        Ok(entities.into_iter().filter_map(|e| e.into_domain()).collect())
    }
}
