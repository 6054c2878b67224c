#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ProfileError {
    #[error("profile.invalid_age")]
    InvalidAge,
    #[error("profile.invalid_weight")]
    InvalidWeight,
    #[error("profile.invalid_height")]
    InvalidHeight,
}
