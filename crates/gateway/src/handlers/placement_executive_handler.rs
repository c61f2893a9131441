//! Placement executive handlers.

use axum::{
    extract::{Path, Query, State},
    routing::{delete, get},
    Router,
};

use common::{ApiResponse, AppResult, Created, NoContent, Paginated, PaginationParams};
use domain::{
    CreatePlacementExecutive, PlacementExecutive, PlacementExecutiveAggregate,
    UpdatePlacementExecutive,
};

use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// Create placement executive routes
pub fn placement_executive_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_placement_executives).post(create_placement_executive))
        .route(
            "/:id",
            get(get_placement_executive)
                .put(update_placement_executive)
                .delete(delete_placement_executive),
        )
        .route("/:id/permanent", delete(purge_placement_executive))
}

/// Create a placement executive with regions and optional login
#[utoipa::path(
    post,
    path = "/placement-executives",
    tag = "Placement Executives",
    request_body = CreatePlacementExecutive,
    responses(
        (status = 201, description = "Placement executive created", body = PlacementExecutiveAggregate),
        (status = 400, description = "Validation error, including a missing joining_date"),
        (status = 409, description = "userID already exists")
    )
)]
pub async fn create_placement_executive(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreatePlacementExecutive>,
) -> AppResult<Created<PlacementExecutiveAggregate>> {
    let executive = state.services.placement_executives.create(payload).await?;
    Ok(Created::new(
        executive,
        "Placement executive created successfully",
    ))
}

/// List live placement executives
#[utoipa::path(
    get,
    path = "/placement-executives",
    tag = "Placement Executives",
    params(
        ("page" = Option<u64>, Query, description = "Page number, from 1"),
        ("per_page" = Option<u64>, Query, description = "Items per page, at most 100")
    ),
    responses(
        (status = 200, description = "Page of placement executives with pagination meta", body = Vec<PlacementExecutive>)
    )
)]
pub async fn list_placement_executives(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Paginated<PlacementExecutive>> {
    state.services.placement_executives.list(params).await
}

#[utoipa::path(
    get,
    path = "/placement-executives/{id}",
    tag = "Placement Executives",
    params(("id" = i32, Path, description = "Placement executive ID")),
    responses(
        (status = 200, description = "Placement executive", body = PlacementExecutiveAggregate),
        (status = 404, description = "Placement executive not found")
    )
)]
pub async fn get_placement_executive(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<ApiResponse<PlacementExecutiveAggregate>> {
    let executive = state.services.placement_executives.get(id).await?;
    Ok(ApiResponse::success(executive))
}

#[utoipa::path(
    put,
    path = "/placement-executives/{id}",
    tag = "Placement Executives",
    params(("id" = i32, Path, description = "Placement executive ID")),
    request_body = UpdatePlacementExecutive,
    responses(
        (status = 200, description = "Placement executive updated", body = PlacementExecutiveAggregate),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Placement executive not found")
    )
)]
pub async fn update_placement_executive(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdatePlacementExecutive>,
) -> AppResult<ApiResponse<PlacementExecutiveAggregate>> {
    let executive = state
        .services
        .placement_executives
        .update(id, payload)
        .await?;
    Ok(ApiResponse::with_message(
        executive,
        "Placement executive updated successfully",
    ))
}

#[utoipa::path(
    delete,
    path = "/placement-executives/{id}",
    tag = "Placement Executives",
    params(("id" = i32, Path, description = "Placement executive ID")),
    responses(
        (status = 204, description = "Placement executive deleted"),
        (status = 404, description = "Placement executive not found")
    )
)]
pub async fn delete_placement_executive(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<NoContent> {
    state.services.placement_executives.delete(id).await?;
    Ok(NoContent)
}

#[utoipa::path(
    delete,
    path = "/placement-executives/{id}/permanent",
    tag = "Placement Executives",
    params(("id" = i32, Path, description = "Placement executive ID")),
    responses(
        (status = 204, description = "Placement executive removed"),
        (status = 404, description = "Placement executive not found")
    )
)]
pub async fn purge_placement_executive(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<NoContent> {
    state.services.placement_executives.hard_delete(id).await?;
    Ok(NoContent)
}
