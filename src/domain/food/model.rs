use chrono::{DateTime, Utc};

/// A food item tracked by a user, e.g. "coffee"/"roasted". The status is a
/// free-form description of the item's preparation or aging state.
#[derive(Debug, Clone)]
pub struct Food {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
