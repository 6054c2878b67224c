/// Failures of the catalog and profile stores.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum RepositoryError {
    #[error("repository.database_error")]
    DatabaseError,
    #[error("repository.timeout")]
    Timeout,
}

impl From<tokio::time::error::Elapsed> for RepositoryError {
    fn from(_: tokio::time::error::Elapsed) -> Self {
        RepositoryError::Timeout
    }
}
