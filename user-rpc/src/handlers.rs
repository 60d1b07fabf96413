pub mod docs_handler;
pub mod health_handler;
pub mod user_handler;

pub use docs_handler::ApiDoc;
pub use user_handler::{CreatedUserResponse, UserHandler, UserListResponse};
