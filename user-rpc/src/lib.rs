pub mod api;
pub mod error;
pub mod handlers;

pub use api::{shutdown_signal, AppState, RpcServer};
pub use error::{RpcError, RpcResult};
pub use handlers::{ApiDoc, CreatedUserResponse, UserHandler, UserListResponse};

// Re-export types needed by clients
pub use user_service;
pub use user_service::{ServiceConfig, User};
