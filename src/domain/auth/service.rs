use std::sync::Arc;

use super::error::AuthServiceError;
use crate::domain::auth::jwt::JwtManager;
use crate::domain::auth::{SignInRequest, SignUpRequest, TokenResponse};
use crate::infrastructure::repositories::UserRepository;

const MIN_PASSWORD_LENGTH: usize = 8;

pub struct AuthService {
    user_repo: Arc<UserRepository>,
    jwt_manager: JwtManager,
    bcrypt_cost: u32,
}

impl AuthService {
    pub fn new(
        user_repo: Arc<UserRepository>,
        jwt_secret: String,
        jwt_expiration_hours: i64,
        bcrypt_cost: u32,
    ) -> Self {
        Self {
            user_repo,
            jwt_manager: JwtManager::new(jwt_secret, jwt_expiration_hours),
            bcrypt_cost,
        }
    }

    /// Register a new user and issue a JWT for the fresh account
    pub async fn sign_up(&self, request: SignUpRequest) -> Result<TokenResponse, AuthServiceError> {
        let params = request.user;

        validate_email(&params.email)?;
        validate_password(&params.password, &params.password_confirmation)?;

        if self
            .user_repo
            .find_by_email(&params.email)
            .await?
            .is_some()
        {
            return Err(AuthServiceError::EmailTaken);
        }

        let password_hash = hash_password(params.password, self.bcrypt_cost).await?;

        // The repository re-checks uniqueness under its write lock, so a
        // concurrent sign-up with the same email still surfaces as EmailTaken
        let user = self.user_repo.create(&params.email, &password_hash).await?;

        tracing::info!(user_id = user.id, "User signed up");

        let jwt = self
            .jwt_manager
            .generate_token(user.id, &user.email)
            .map_err(|e| AuthServiceError::Dependency(e.to_string()))?;

        Ok(TokenResponse { jwt })
    }

    /// Exchange valid credentials for a JWT
    pub async fn sign_in(&self, request: SignInRequest) -> Result<TokenResponse, AuthServiceError> {
        let user = self
            .user_repo
            .find_by_email(&request.email)
            .await?
            .ok_or(AuthServiceError::InvalidCredentials)?;

        // Unknown email and wrong password produce the same error
        if !verify_password(request.password, user.password_hash.clone()).await? {
            return Err(AuthServiceError::InvalidCredentials);
        }

        tracing::info!(user_id = user.id, "User signed in");

        let jwt = self
            .jwt_manager
            .generate_token(user.id, &user.email)
            .map_err(|e| AuthServiceError::Dependency(e.to_string()))?;

        Ok(TokenResponse { jwt })
    }
}

fn validate_email(email: &str) -> Result<(), AuthServiceError> {
    let valid = match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty(),
        None => false,
    };

    if !valid {
        return Err(AuthServiceError::Validation(
            "Email is not a valid address".to_string(),
        ));
    }
    Ok(())
}

fn validate_password(password: &str, confirmation: &str) -> Result<(), AuthServiceError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AuthServiceError::Validation(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        )));
    }

    if password != confirmation {
        return Err(AuthServiceError::Validation(
            "Password confirmation does not match".to_string(),
        ));
    }

    Ok(())
}

// bcrypt is CPU-bound, keep it off the async workers
async fn hash_password(password: String, cost: u32) -> Result<String, AuthServiceError> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| AuthServiceError::Dependency(e.to_string()))?
        .map_err(|e| AuthServiceError::Dependency(e.to_string()))
}

async fn verify_password(password: String, hash: String) -> Result<bool, AuthServiceError> {
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| AuthServiceError::Dependency(e.to_string()))?
        .map_err(|e| AuthServiceError::Dependency(e.to_string()))
}
