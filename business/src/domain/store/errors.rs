#[derive(Debug, thiserror::Error, PartialEq)]
pub enum StoreError {
    #[error("store.invalid_location")]
    InvalidLocation,
}
