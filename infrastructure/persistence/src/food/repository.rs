use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::food::model::{FoodCatalogEntry, FoodSuggestion};
use business::domain::food::repository::{FoodCatalogRepository, FoodSuggestionRepository};

use super::entity::{FoodEntity, FoodSuggestionEntity};

pub struct FoodCatalogRepositoryPostgres {
    pool: PgPool,
}

impl FoodCatalogRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FoodCatalogRepository for FoodCatalogRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<FoodCatalogEntry>, RepositoryError> {
        let entities = sqlx::query_as::<_, FoodEntity>(
            r#"SELECT name,
                protein_per_100g::float8 AS protein_per_100g,
                carbs_per_100g::float8 AS carbs_per_100g,
                fats_per_100g::float8 AS fats_per_100g,
                fiber_per_100g::float8 AS fiber_per_100g,
                calories_per_100g::float8 AS calories_per_100g,
                food_group::text AS food_group,
                diet_tags::text[] AS diet_tags
            FROM foods
            WHERE name IS NOT NULL"#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|err| {
            tracing::warn!("Failed to load foods: {}", err);
            RepositoryError::DatabaseError
        })?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }
}

pub struct FoodSuggestionRepositoryPostgres {
    pool: PgPool,
}

impl FoodSuggestionRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FoodSuggestionRepository for FoodSuggestionRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<FoodSuggestion>, RepositoryError> {
        let entities = sqlx::query_as::<_, FoodSuggestionEntity>(
            r#"SELECT s.gap::text AS gap,
                f.name AS food_name,
                s.reason,
                s.priority::int4 AS priority,
                s.diet_types::text[] AS diet_types
            FROM food_suggestions s
            LEFT JOIN foods f ON f.id = s.food_id
            ORDER BY s.priority ASC"#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|err| {
            tracing::warn!("Failed to load food suggestions: {}", err);
            RepositoryError::DatabaseError
        })?;

        let total = entities.len();
        let suggestions: Vec<FoodSuggestion> = entities
            .into_iter()
            .filter_map(|e| e.into_domain())
            .collect();

        if suggestions.len() < total {
            tracing::warn!(
                "Skipped {} food suggestions with unknown gap",
                total - suggestions.len()
            );
        }

        Ok(suggestions)
    }
}
