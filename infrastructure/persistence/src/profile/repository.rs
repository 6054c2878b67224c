use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::profile::model::ProfileRecord;
use business::domain::profile::repository::ProfileRepository;
use business::domain::shared::value_objects::UserId;

use super::entity::ProfileEntity;

pub struct ProfileRepositoryPostgres {
    pool: PgPool,
}

impl ProfileRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileRepository for ProfileRepositoryPostgres {
    async fn find_by_user_id(
        &self,
        user_id: &UserId,
    ) -> Result<Option<ProfileRecord>, RepositoryError> {
        let entity = sqlx::query_as::<_, ProfileEntity>(
            r#"SELECT user_id::text AS user_id,
                age::int4 AS age,
                gender::text AS gender,
                weight_kg::float8 AS weight_kg,
                height_cm::float8 AS height_cm,
                health_goal::text AS health_goal,
                diet_type::text AS diet_type,
                preferences::jsonb AS preferences
            FROM profiles
            WHERE user_id::text = $1
            LIMIT 1"#,
        )
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| {
            tracing::warn!("Failed to load profile {}: {}", user_id, err);
            RepositoryError::DatabaseError
        })?;

        Ok(entity.map(|e| e.into_domain()))
    }
}
