use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::domain::user::User;
use crate::error::{AppError, AppResult};
use crate::infrastructure::id::IdGenerator;

/// In-memory user store. Keyed by snowflake id, so iteration order is
/// creation order. Email uniqueness is enforced case-insensitively under
/// the write lock.
pub struct UserRepository {
    ids: Arc<IdGenerator>,
    users: RwLock<BTreeMap<i64, User>>,
}

impl UserRepository {
    pub fn new(ids: Arc<IdGenerator>) -> Self {
        Self {
            ids,
            users: RwLock::new(BTreeMap::new()),
        }
    }

    /// Find user by ID
    pub async fn find_by_id(&self, user_id: i64) -> AppResult<Option<User>> {
        let users = self.users.read();
        Ok(users.get(&user_id).cloned())
    }

    /// Find user by email (case-insensitive)
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let users = self.users.read();
        let user = users
            .values()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned();
        Ok(user)
    }

    /// Create a new user
    pub async fn create(&self, email: &str, password_hash: &str) -> AppResult<User> {
        let mut users = self.users.write();

        if users.values().any(|u| u.email.eq_ignore_ascii_case(email)) {
            return Err(AppError::Conflict("Email already registered".to_string()));
        }

        let user = User {
            id: self.ids.next_id(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            created_at: chrono::Utc::now(),
        };

        users.insert(user.id, user.clone());
        Ok(user)
    }

    /// Count all users
    pub async fn count(&self) -> AppResult<usize> {
        Ok(self.users.read().len())
    }

    /// Remove all users (test-fixture reset)
    pub async fn clear(&self) -> AppResult<()> {
        self.users.write().clear();
        Ok(())
    }
}
