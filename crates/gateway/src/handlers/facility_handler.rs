//! Facility handlers.

use axum::{
    extract::{Path, Query, State},
    routing::{delete, get},
    Router,
};

use common::{ApiResponse, AppResult, Created, NoContent, Paginated, PaginationParams};
use domain::{CreateFacility, Facility, FacilityAggregate, UpdateFacility};

use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// Create facility routes
pub fn facility_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_facilities).post(create_facility))
        .route(
            "/:id",
            get(get_facility).put(update_facility).delete(delete_facility),
        )
        .route("/:id/permanent", delete(purge_facility))
}

/// Create a facility with its child records and optional login
#[utoipa::path(
    post,
    path = "/facilities",
    tag = "Facilities",
    request_body = CreateFacility,
    responses(
        (status = 201, description = "Facility created", body = FacilityAggregate),
        (status = 400, description = "Validation error"),
        (status = 409, description = "userID already exists")
    )
)]
pub async fn create_facility(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateFacility>,
) -> AppResult<Created<FacilityAggregate>> {
    let facility = state.services.facilities.create(payload).await?;
    Ok(Created::new(facility, "Facility created successfully"))
}

/// List live facilities
#[utoipa::path(
    get,
    path = "/facilities",
    tag = "Facilities",
    params(
        ("page" = Option<u64>, Query, description = "Page number, from 1"),
        ("per_page" = Option<u64>, Query, description = "Items per page, at most 100")
    ),
    responses(
        (status = 200, description = "Page of facilities with pagination meta", body = Vec<Facility>)
    )
)]
pub async fn list_facilities(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Paginated<Facility>> {
    state.services.facilities.list(params).await
}

/// Get a facility with its live child records
#[utoipa::path(
    get,
    path = "/facilities/{id}",
    tag = "Facilities",
    params(("id" = i32, Path, description = "Facility ID")),
    responses(
        (status = 200, description = "Facility", body = FacilityAggregate),
        (status = 404, description = "Facility not found")
    )
)]
pub async fn get_facility(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<ApiResponse<FacilityAggregate>> {
    let facility = state.services.facilities.get(id).await?;
    Ok(ApiResponse::success(facility))
}

/// Update a facility's own fields
#[utoipa::path(
    put,
    path = "/facilities/{id}",
    tag = "Facilities",
    params(("id" = i32, Path, description = "Facility ID")),
    request_body = UpdateFacility,
    responses(
        (status = 200, description = "Facility updated", body = FacilityAggregate),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Facility not found")
    )
)]
pub async fn update_facility(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateFacility>,
) -> AppResult<ApiResponse<FacilityAggregate>> {
    let facility = state.services.facilities.update(id, payload).await?;
    Ok(ApiResponse::with_message(facility, "Facility updated successfully"))
}

/// Soft delete a facility, its child records and its account
#[utoipa::path(
    delete,
    path = "/facilities/{id}",
    tag = "Facilities",
    params(("id" = i32, Path, description = "Facility ID")),
    responses(
        (status = 204, description = "Facility deleted"),
        (status = 404, description = "Facility not found")
    )
)]
pub async fn delete_facility(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<NoContent> {
    state.services.facilities.delete(id).await?;
    Ok(NoContent)
}

/// Permanently delete a facility, live or soft deleted
#[utoipa::path(
    delete,
    path = "/facilities/{id}/permanent",
    tag = "Facilities",
    params(("id" = i32, Path, description = "Facility ID")),
    responses(
        (status = 204, description = "Facility removed"),
        (status = 404, description = "Facility not found")
    )
)]
pub async fn purge_facility(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<NoContent> {
    state.services.facilities.hard_delete(id).await?;
    Ok(NoContent)
}
