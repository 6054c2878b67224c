use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{FoodCatalogEntry, FoodSuggestion};

#[async_trait]
pub trait FoodCatalogRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<FoodCatalogEntry>, RepositoryError>;
}

#[async_trait]
pub trait FoodSuggestionRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<FoodSuggestion>, RepositoryError>;
}
