use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::domain::food::Food;
use crate::error::AppResult;
use crate::infrastructure::id::IdGenerator;

/// In-memory food store. Snowflake keys make BTreeMap iteration follow
/// creation order, which is the order `GET /foods` promises.
pub struct FoodRepository {
    ids: Arc<IdGenerator>,
    foods: RwLock<BTreeMap<i64, Food>>,
}

impl FoodRepository {
    pub fn new(ids: Arc<IdGenerator>) -> Self {
        Self {
            ids,
            foods: RwLock::new(BTreeMap::new()),
        }
    }

    /// Get all foods for a user, in creation order
    pub async fn find_by_user(&self, user_id: i64) -> AppResult<Vec<Food>> {
        let foods = self.foods.read();
        Ok(foods
            .values()
            .filter(|f| f.user_id == user_id)
            .cloned()
            .collect())
    }

    /// Get a food by ID
    pub async fn find_by_id(&self, food_id: i64) -> AppResult<Option<Food>> {
        let foods = self.foods.read();
        Ok(foods.get(&food_id).cloned())
    }

    /// Create a new food for a user
    pub async fn create(&self, user_id: i64, name: &str, status: &str) -> AppResult<Food> {
        let food = Food {
            id: self.ids.next_id(),
            user_id,
            name: name.to_string(),
            status: status.to_string(),
            created_at: chrono::Utc::now(),
        };

        self.foods.write().insert(food.id, food.clone());
        Ok(food)
    }

    /// Count foods for a user
    pub async fn count_by_user(&self, user_id: i64) -> AppResult<usize> {
        let foods = self.foods.read();
        Ok(foods.values().filter(|f| f.user_id == user_id).count())
    }

    /// Remove all foods (test-fixture reset)
    pub async fn clear(&self) -> AppResult<()> {
        self.foods.write().clear();
        Ok(())
    }
}
