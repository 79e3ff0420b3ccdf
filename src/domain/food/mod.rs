pub mod dto;
pub mod error;
pub mod model;
pub mod service;

pub use dto::{CreateFoodRequest, DataEnvelope, FoodResponse};
pub use error::FoodServiceError;
pub use model::Food;
pub use service::{FoodService, FoodServiceApi};
