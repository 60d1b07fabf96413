use crate::api::AppState;
use crate::error::{ErrorBody, RpcResult};
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use serde_json::Value;
use user_service::models::{CreateUserRequest, User};
use user_service::{IdGenerator, UserService};
use utoipa::ToSchema;

/// Response to a successful create: the environment label merged with the new user.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CreatedUserResponse {
    pub env: String,
    #[serde(flatten)]
    pub user: User,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserListResponse {
    pub env: String,
    pub total: usize,
    pub users: Vec<User>,
}

pub fn created_message(env_name: &str, name: &str) -> String {
    format!("[{}] User created: {}", env_name, name)
}

pub struct UserHandler {
    service: UserService,
}

impl UserHandler {
    pub fn new() -> Self {
        Self {
            service: UserService::default(),
        }
    }

    pub fn with_id_generator(ids: impl IdGenerator + 'static) -> Self {
        Self {
            service: UserService::new(ids),
        }
    }

    pub fn create_user(&mut self, request: CreateUserRequest) -> RpcResult<User> {
        let (name, email) = request.validate()?;
        Ok(self.service.create_user(name, email)?)
    }

    /// Count and records come from the same borrow of the store.
    pub fn list_users(&self, env: &str) -> UserListResponse {
        let users = self.service.list_users().to_vec();
        UserListResponse {
            env: env.to_string(),
            total: users.len(),
            users,
        }
    }

    pub fn count(&self) -> usize {
        self.service.count()
    }
}

impl Default for UserHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a user
#[utoipa::path(
    post,
    path = "/user",
    tag = "users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = CreatedUserResponse),
        (status = 400, description = "Name or email missing", body = ErrorBody),
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> RpcResult<(StatusCode, Json<CreatedUserResponse>)> {
    let request = CreateUserRequest::from_body(body);
    let user = state.users.write().await.create_user(request)?;

    tracing::info!("{}", created_message(&state.env_name, &user.name));

    Ok((
        StatusCode::CREATED,
        Json(CreatedUserResponse {
            env: state.env_name.to_string(),
            user,
        }),
    ))
}

/// List all users in creation order
#[utoipa::path(
    get,
    path = "/user",
    tag = "users",
    responses(
        (status = 200, description = "All stored users", body = UserListResponse),
    )
)]
pub async fn list_users(State(state): State<AppState>) -> Json<UserListResponse> {
    let users = state.users.read().await;
    Json(users.list_users(&state.env_name))
}
