use crate::api::AppState;
use axum::extract::State;

pub fn health_message(env_name: &str) -> String {
    format!("API is running in {} environment.", env_name)
}

/// Report that the API is up and which environment it runs in
#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses((status = 200, description = "Service is running", body = String, content_type = "text/plain"))
)]
pub async fn health_check(State(state): State<AppState>) -> String {
    health_message(&state.env_name)
}
