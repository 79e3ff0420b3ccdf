pub mod food_repository;
pub mod user_repository;

pub use food_repository::FoodRepository;
pub use user_repository::UserRepository;
