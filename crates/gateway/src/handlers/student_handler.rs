//! Student handlers.

use axum::{
    extract::{Path, Query, State},
    routing::{delete, get},
    Router,
};

use common::{ApiResponse, AppResult, Created, NoContent, Paginated, PaginationParams};
use domain::{CreateStudent, Student, StudentAggregate, UpdateStudent};

use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// Create student routes
pub fn student_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_students).post(create_student))
        .route(
            "/:id",
            get(get_student).put(update_student).delete(delete_student),
        )
        .route("/:id/permanent", delete(purge_student))
}

/// Create a student with addresses, visas, eligibility, job statuses and optional login
#[utoipa::path(
    post,
    path = "/students",
    tag = "Students",
    request_body = CreateStudent,
    responses(
        (status = 201, description = "Student created", body = StudentAggregate),
        (status = 400, description = "Validation error"),
        (status = 409, description = "userID already exists")
    )
)]
pub async fn create_student(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateStudent>,
) -> AppResult<Created<StudentAggregate>> {
    let student = state.services.students.create(payload).await?;
    Ok(Created::new(student, "Student created successfully"))
}

#[utoipa::path(
    get,
    path = "/students",
    tag = "Students",
    params(
        ("page" = Option<u64>, Query, description = "Page number, from 1"),
        ("per_page" = Option<u64>, Query, description = "Items per page, at most 100")
    ),
    responses(
        (status = 200, description = "Page of students with pagination meta", body = Vec<Student>)
    )
)]
pub async fn list_students(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Paginated<Student>> {
    state.services.students.list(params).await
}

#[utoipa::path(
    get,
    path = "/students/{id}",
    tag = "Students",
    params(("id" = i32, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Student", body = StudentAggregate),
        (status = 404, description = "Student not found")
    )
)]
pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<ApiResponse<StudentAggregate>> {
    let student = state.services.students.get(id).await?;
    Ok(ApiResponse::success(student))
}

/// Update a student's own fields; child records are left alone
#[utoipa::path(
    put,
    path = "/students/{id}",
    tag = "Students",
    params(("id" = i32, Path, description = "Student ID")),
    request_body = UpdateStudent,
    responses(
        (status = 200, description = "Student updated", body = StudentAggregate),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Student not found")
    )
)]
pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateStudent>,
) -> AppResult<ApiResponse<StudentAggregate>> {
    let student = state.services.students.update(id, payload).await?;
    Ok(ApiResponse::with_message(student, "Student updated successfully"))
}

#[utoipa::path(
    delete,
    path = "/students/{id}",
    tag = "Students",
    params(("id" = i32, Path, description = "Student ID")),
    responses(
        (status = 204, description = "Student deleted"),
        (status = 404, description = "Student not found")
    )
)]
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<NoContent> {
    state.services.students.delete(id).await?;
    Ok(NoContent)
}

#[utoipa::path(
    delete,
    path = "/students/{id}/permanent",
    tag = "Students",
    params(("id" = i32, Path, description = "Student ID")),
    responses(
        (status = 204, description = "Student removed"),
        (status = 404, description = "Student not found")
    )
)]
pub async fn purge_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<NoContent> {
    state.services.students.hard_delete(id).await?;
    Ok(NoContent)
}
