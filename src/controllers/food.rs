use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use std::sync::Arc;

use crate::domain::food::{CreateFoodRequest, DataEnvelope, FoodResponse};
use crate::{
    domain::food::{FoodService, FoodServiceApi},
    error::AppResult,
    infrastructure::auth::AuthUser,
};

pub struct FoodController {
    food_service: Arc<FoodService>,
}

impl FoodController {
    pub fn new(food_service: Arc<FoodService>) -> Self {
        Self { food_service }
    }

    /// GET /foods - List the user's foods
    pub async fn list_foods(
        State(controller): State<Arc<FoodController>>,
        Extension(auth_user): Extension<AuthUser>,
    ) -> AppResult<Json<DataEnvelope<Vec<FoodResponse>>>> {
        let foods = controller.food_service.list_foods(auth_user.user_id).await?;
        Ok(Json(DataEnvelope { data: foods }))
    }

    /// POST /foods - Create a new food
    pub async fn create_food(
        State(controller): State<Arc<FoodController>>,
        Extension(auth_user): Extension<AuthUser>,
        Json(request): Json<CreateFoodRequest>,
    ) -> AppResult<(StatusCode, Json<DataEnvelope<FoodResponse>>)> {
        let food = controller
            .food_service
            .create_food(auth_user.user_id, request)
            .await?;
        Ok((StatusCode::CREATED, Json(DataEnvelope { data: food })))
    }

    /// GET /foods/{foodId} - Fetch one food by id
    pub async fn get_food(
        State(controller): State<Arc<FoodController>>,
        Extension(auth_user): Extension<AuthUser>,
        Path(food_id): Path<i64>,
    ) -> AppResult<Json<DataEnvelope<FoodResponse>>> {
        let food = controller
            .food_service
            .get_food(auth_user.user_id, food_id)
            .await?;
        Ok(Json(DataEnvelope { data: food }))
    }
}
