use crate::error::ErrorBody;
use crate::handlers::{health_handler, user_handler};
use axum::Json;
use user_service::models::{CreateUserRequest, User};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "User API", description = "Create and list users held in memory"),
    paths(
        health_handler::health_check,
        user_handler::create_user,
        user_handler::list_users,
    ),
    components(schemas(
        User,
        CreateUserRequest,
        user_handler::CreatedUserResponse,
        user_handler::UserListResponse,
        ErrorBody,
    )),
    tags(
        (name = "health", description = "Liveness"),
        (name = "users", description = "User management"),
    )
)]
pub struct ApiDoc;

pub async fn api_docs() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
