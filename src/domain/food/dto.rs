use serde::{Deserialize, Serialize};

use super::model::Food;

/// Request to create a food item: `{"food": {"name", "status"}}`
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateFoodRequest {
    pub food: FoodParams,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FoodParams {
    pub name: String,
    pub status: String,
}

/// Response shape for a single food item
#[derive(Debug, Serialize, Deserialize)]
pub struct FoodResponse {
    pub id: i64,
    pub name: String,
    pub status: String,
}

/// Food endpoints wrap their payload in a `data` envelope
#[derive(Debug, Serialize, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

impl From<Food> for FoodResponse {
    fn from(food: Food) -> Self {
        Self {
            id: food.id,
            name: food.name,
            status: food.status,
        }
    }
}
