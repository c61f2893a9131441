//! Route configuration.

use axum::{middleware, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers::{
    account_routes, auth_routes, facility_routes, health_routes, placement_executive_routes,
    role_routes, student_routes,
};
use crate::middleware::auth_middleware;
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest(
            "/auth",
            auth_routes().merge(account_routes().route_layer(middleware::from_fn_with_state(
                state.clone(),
                auth_middleware,
            ))),
        )
        .nest("/facilities", facility_routes())
        .nest("/placement-executives", placement_executive_routes())
        .nest("/students", student_routes())
        .nest("/roles", role_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
