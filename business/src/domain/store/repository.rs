use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{StorePrice, StoreRecord};

#[async_trait]
pub trait StoreRepository: Send + Sync {
    async fn get_stores(&self) -> Result<Vec<StoreRecord>, RepositoryError>;
    async fn get_prices(&self) -> Result<Vec<StorePrice>, RepositoryError>;
}
