pub mod user;

pub use user::{CreateUserRequest, User, MISSING_FIELDS_MESSAGE};
