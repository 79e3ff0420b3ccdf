use std::sync::Arc;

use super::error::UserServiceError;
use crate::domain::user::MeResponse;
use crate::infrastructure::repositories::UserRepository;

pub struct UserService {
    user_repo: Arc<UserRepository>,
}

impl UserService {
    pub fn new(user_repo: Arc<UserRepository>) -> Self {
        Self { user_repo }
    }

    /// Profile of the authenticated user
    pub async fn get_me(&self, user_id: i64) -> Result<MeResponse, UserServiceError> {
        let user = self
            .user_repo
            .find_by_id(user_id)
            .await
            .map_err(|e| UserServiceError::Dependency(e.to_string()))?
            .ok_or(UserServiceError::NotFound)?;

        Ok(MeResponse::from(user))
    }
}
