//! Role handlers.

use axum::{extract::State, routing::get, Router};

use common::{ApiResponse, AppResult};
use domain::Role;

use crate::state::AppState;

pub fn role_routes() -> Router<AppState> {
    Router::new().route("/", get(list_roles))
}

/// List live roles
#[utoipa::path(
    get,
    path = "/roles",
    tag = "Roles",
    responses(
        (status = 200, description = "Live roles", body = Vec<Role>)
    )
)]
pub async fn list_roles(State(state): State<AppState>) -> AppResult<ApiResponse<Vec<Role>>> {
    let roles = state.services.roles.list().await?;
    Ok(ApiResponse::success(roles))
}
