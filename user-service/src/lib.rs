// User Service Library
// Domain model, validation and in-memory storage for the user API

pub mod config;
pub mod error;
pub mod ids;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use config::ServiceConfig;
pub use error::{ServiceError, ServiceResult};
pub use ids::{IdGenerator, SequentialIdGenerator, UuidGenerator};
pub use models::{CreateUserRequest, User};
pub use services::UserService;
