use axum::{extract::State, http::StatusCode};
use std::sync::Arc;

use crate::{
    error::AppResult,
    infrastructure::repositories::{FoodRepository, UserRepository},
};

/// Development-only endpoints. The reset operation is the in-process
/// replacement for the external database drop/recreate the original test
/// suite relied on.
pub struct AdminController {
    user_repo: Arc<UserRepository>,
    food_repo: Arc<FoodRepository>,
}

impl AdminController {
    pub fn new(user_repo: Arc<UserRepository>, food_repo: Arc<FoodRepository>) -> Self {
        Self {
            user_repo,
            food_repo,
        }
    }

    /// POST /admin/reset - Clear all users and foods
    pub async fn reset(
        State(controller): State<Arc<AdminController>>,
    ) -> AppResult<StatusCode> {
        controller.food_repo.clear().await?;
        controller.user_repo.clear().await?;

        tracing::warn!("All users and foods cleared via /admin/reset");

        Ok(StatusCode::NO_CONTENT)
    }
}
