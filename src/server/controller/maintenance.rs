use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        maintenance::{
            CreateMaintenanceRequestDto, MaintenanceQuery, MaintenanceRequestDto,
            UpdateMaintenanceRequestDto,
        },
    },
    server::{
        controller::util::access::{require_admin, require_student},
        error::Error,
        model::app::AppState,
        service::maintenance::MaintenanceService,
    },
};

pub static MAINTENANCE_TAG: &str = "maintenance";

/// List maintenance requests of the admin's institution
#[utoipa::path(
    get,
    path = "/api/admin/maintenance",
    tag = MAINTENANCE_TAG,
    params(MaintenanceQuery),
    responses(
        (status = 200, description = "Requests newest first with room and student names", body = Vec<MaintenanceRequestDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_maintenance_requests(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<MaintenanceQuery>,
) -> Result<impl IntoResponse, Error> {
    let admin = require_admin(&state, &session).await?;

    let requests = MaintenanceService::new(&state.db)
        .list(admin.institution_id, query.status)
        .await?;

    Ok((StatusCode::OK, Json(requests)))
}

/// Change the status or priority of a maintenance request
#[utoipa::path(
    patch,
    path = "/api/admin/maintenance/{id}",
    tag = MAINTENANCE_TAG,
    params(("id" = i32, Path, description = "Maintenance request ID")),
    request_body = UpdateMaintenanceRequestDto,
    responses(
        (status = 200, description = "Updated request", body = MaintenanceRequestDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Request not found in the admin's institution", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_maintenance_request(
    State(state): State<AppState>,
    session: Session,
    Path(request_id): Path<i32>,
    Json(changes): Json<UpdateMaintenanceRequestDto>,
) -> Result<impl IntoResponse, Error> {
    let admin = require_admin(&state, &session).await?;

    let request = MaintenanceService::new(&state.db)
        .update(admin.institution_id, request_id, changes)
        .await?;

    Ok((StatusCode::OK, Json(request)))
}

#[utoipa::path(
    delete,
    path = "/api/admin/maintenance/{id}",
    tag = MAINTENANCE_TAG,
    params(("id" = i32, Path, description = "Maintenance request ID")),
    responses(
        (status = 204, description = "Request deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Request not found in the admin's institution", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_maintenance_request(
    State(state): State<AppState>,
    session: Session,
    Path(request_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let admin = require_admin(&state, &session).await?;

    MaintenanceService::new(&state.db)
        .delete(admin.institution_id, request_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Submit a maintenance request for the logged in student's room
#[utoipa::path(
    post,
    path = "/api/maintenance",
    tag = MAINTENANCE_TAG,
    request_body = CreateMaintenanceRequestDto,
    responses(
        (status = 201, description = "Request submitted", body = MaintenanceRequestDto),
        (status = 400, description = "Student has no room or invalid field", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "User is not a student", body = ErrorDto),
        (status = 404, description = "No student record for the user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_maintenance_request(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<CreateMaintenanceRequestDto>,
) -> Result<impl IntoResponse, Error> {
    let user = require_student(&state, &session).await?;

    let request = MaintenanceService::new(&state.db)
        .submit(user.id, request)
        .await?;

    Ok((StatusCode::CREATED, Json(request)))
}

/// List the logged in student's own maintenance requests
#[utoipa::path(
    get,
    path = "/api/maintenance",
    tag = MAINTENANCE_TAG,
    responses(
        (status = 200, description = "The student's requests, newest first", body = Vec<MaintenanceRequestDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "User is not a student", body = ErrorDto),
        (status = 404, description = "No student record for the user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_my_maintenance_requests(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = require_student(&state, &session).await?;

    let requests = MaintenanceService::new(&state.db)
        .list_for_student(user.id)
        .await?;

    Ok((StatusCode::OK, Json(requests)))
}
