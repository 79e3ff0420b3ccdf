use serde::{Deserialize, Serialize};

/// Sign-up request: `{"user": {"email", "password", "password_confirmation"}}`
#[derive(Debug, Serialize, Deserialize)]
pub struct SignUpRequest {
    pub user: SignUpParams,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SignUpParams {
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

/// Sign-in request: `{"email", "password"}`
#[derive(Debug, Serialize, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// Token response for sign-up and sign-in
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub jwt: String,
}
