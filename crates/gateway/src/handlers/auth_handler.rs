//! Authentication handlers.

use axum::{
    extract::{Extension, State},
    response::Json,
    routing::{get, post},
    Router,
};

use common::{ApiResponse, AppResult};
use domain::{AccountResponse, LoginCredentials};
use placement_service_lib::service::TokenResponse;

use crate::extractors::ValidatedJson;
use crate::middleware::CurrentUser;
use crate::state::AppState;

/// Routes open to anonymous callers
pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/login", post(login))
}

/// Routes that need a bearer token
pub fn account_routes() -> Router<AppState> {
    Router::new().route("/me", get(me))
}

/// Login and get JWT token
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "Authentication",
    request_body = LoginCredentials,
    responses(
        (status = 200, description = "Login successful", body = TokenResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginCredentials>,
) -> AppResult<Json<TokenResponse>> {
    let token = state.services.auth.login(payload).await?;
    Ok(Json(token))
}

/// The account the token was issued to
#[utoipa::path(
    get,
    path = "/auth/me",
    tag = "Authentication",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current account", body = AccountResponse),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn me(
    Extension(CurrentUser(claims)): Extension<CurrentUser>,
    State(state): State<AppState>,
) -> AppResult<ApiResponse<AccountResponse>> {
    let account = state.services.auth.current_account(&claims).await?;
    Ok(ApiResponse::success(account))
}
