use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::domain::auth::{SignInRequest, SignUpRequest, TokenResponse};
use crate::{domain::auth::AuthService, error::AppResult};

pub struct AuthController {
    auth_service: Arc<AuthService>,
}

impl AuthController {
    pub fn new(auth_service: Arc<AuthService>) -> Self {
        Self { auth_service }
    }

    /// POST /sign_up - Register a new account, returns a JWT
    pub async fn sign_up(
        State(controller): State<Arc<AuthController>>,
        Json(request): Json<SignUpRequest>,
    ) -> AppResult<(StatusCode, Json<TokenResponse>)> {
        let response = controller.auth_service.sign_up(request).await?;
        Ok((StatusCode::CREATED, Json(response)))
    }

    /// POST /sign_in - Exchange credentials for a JWT
    pub async fn sign_in(
        State(controller): State<Arc<AuthController>>,
        Json(request): Json<SignInRequest>,
    ) -> AppResult<Json<TokenResponse>> {
        let response = controller.auth_service.sign_in(request).await?;
        Ok(Json(response))
    }
}
