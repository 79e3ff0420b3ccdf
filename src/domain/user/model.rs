use chrono::{DateTime, Utc};

/// A registered account. The password hash stays inside the domain and is
/// never serialized; responses go through [`super::MeResponse`].
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}
