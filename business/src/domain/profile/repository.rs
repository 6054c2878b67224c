use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::ProfileRecord;

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Returns `Ok(None)` when no profile exists for the user.
    async fn find_by_user_id(
        &self,
        user_id: &UserId,
    ) -> Result<Option<ProfileRecord>, RepositoryError>;
}
