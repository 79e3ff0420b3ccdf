use std::sync::Arc;

use async_trait::async_trait;

use super::error::FoodServiceError;
use crate::domain::food::{CreateFoodRequest, Food, FoodResponse};
use crate::infrastructure::repositories::FoodRepository;

pub struct FoodService {
    food_repo: Arc<FoodRepository>,
}

impl FoodService {
    pub fn new(food_repo: Arc<FoodRepository>) -> Self {
        Self { food_repo }
    }
}

#[async_trait]
pub trait FoodServiceApi: Send + Sync {
    /// All foods belonging to the user, in creation order
    async fn list_foods(&self, user_id: i64) -> Result<Vec<FoodResponse>, FoodServiceError>;

    async fn create_food(
        &self,
        user_id: i64,
        request: CreateFoodRequest,
    ) -> Result<FoodResponse, FoodServiceError>;

    /// Fetch one food by id. A food owned by another user is reported the
    /// same way as a missing one.
    async fn get_food(&self, user_id: i64, food_id: i64)
        -> Result<FoodResponse, FoodServiceError>;
}

#[async_trait]
impl FoodServiceApi for FoodService {
    async fn list_foods(&self, user_id: i64) -> Result<Vec<FoodResponse>, FoodServiceError> {
        let foods = self
            .food_repo
            .find_by_user(user_id)
            .await
            .map_err(|e| FoodServiceError::Dependency(e.to_string()))?;
        Ok(foods.into_iter().map(FoodResponse::from).collect())
    }

    async fn create_food(
        &self,
        user_id: i64,
        request: CreateFoodRequest,
    ) -> Result<FoodResponse, FoodServiceError> {
        let params = request.food;

        if params.name.trim().is_empty() {
            return Err(FoodServiceError::Invalid(
                "Food name must not be empty".to_string(),
            ));
        }

        let food = self
            .food_repo
            .create(user_id, &params.name, &params.status)
            .await
            .map_err(|e| FoodServiceError::Dependency(e.to_string()))?;

        tracing::debug!(user_id, food_id = food.id, "Food created");

        Ok(FoodResponse::from(food))
    }

    async fn get_food(
        &self,
        user_id: i64,
        food_id: i64,
    ) -> Result<FoodResponse, FoodServiceError> {
        let food = self.verify_food_ownership(food_id, user_id).await?;
        Ok(FoodResponse::from(food))
    }
}

impl FoodService {
    async fn verify_food_ownership(
        &self,
        food_id: i64,
        user_id: i64,
    ) -> Result<Food, FoodServiceError> {
        let food = self
            .food_repo
            .find_by_id(food_id)
            .await
            .map_err(|e| FoodServiceError::Dependency(e.to_string()))?
            .ok_or(FoodServiceError::NotFound)?;

        if food.user_id != user_id {
            return Err(FoodServiceError::NotFound);
        }

        Ok(food)
    }
}
