use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum FoodServiceError {
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("food not found")]
    NotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<AppError> for FoodServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::UnprocessableEntity(msg) => FoodServiceError::Invalid(msg),
            AppError::NotFound(_) => FoodServiceError::NotFound,
            _ => FoodServiceError::Dependency(err.to_string()),
        }
    }
}

impl From<FoodServiceError> for AppError {
    fn from(err: FoodServiceError) -> Self {
        match err {
            FoodServiceError::Invalid(msg) => AppError::UnprocessableEntity(msg),
            FoodServiceError::NotFound => AppError::NotFound("Food not found".to_string()),
            FoodServiceError::Dependency(msg) => AppError::Internal(msg),
            FoodServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
