use axum::{extract::State, Extension, Json};
use std::sync::Arc;

use crate::domain::user::MeResponse;
use crate::{domain::user::UserService, error::AppResult, infrastructure::auth::AuthUser};

pub struct UserController {
    user_service: Arc<UserService>,
}

impl UserController {
    pub fn new(user_service: Arc<UserService>) -> Self {
        Self { user_service }
    }

    /// GET /me - Id and email of the authenticated user
    pub async fn get_me(
        State(controller): State<Arc<UserController>>,
        Extension(auth_user): Extension<AuthUser>,
    ) -> AppResult<Json<MeResponse>> {
        let response = controller.user_service.get_me(auth_user.user_id).await?;
        Ok(Json(response))
    }
}
