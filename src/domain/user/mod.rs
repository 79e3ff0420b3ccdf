pub mod dto;
pub mod error;
pub mod model;
pub mod service;

pub use dto::MeResponse;
pub use error::UserServiceError;
pub use model::User;
pub use service::UserService;
