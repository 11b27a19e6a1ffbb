use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

/// Errors surfaced to the UI. Kept `Clone` so results can live inside
/// signals and be handed to whichever component renders them.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    #[error("API error: {0}")]
    Api(String),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Api(err.to_string())
    }
}
