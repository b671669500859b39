use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        hostel::{CreateHostelDto, HostelDto, UpdateHostelDto},
    },
    server::{
        controller::util::access::require_admin, error::Error, model::app::AppState,
        service::hostel::HostelService,
    },
};

pub static HOSTEL_TAG: &str = "hostel";

/// List hostels of the admin's institution
#[utoipa::path(
    get,
    path = "/api/admin/hostels",
    tag = HOSTEL_TAG,
    responses(
        (status = 200, description = "Hostels ordered by name", body = Vec<HostelDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Admin has no institution", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_hostels(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let admin = require_admin(&state, &session).await?;

    let hostels = HostelService::new(&state.db)
        .list(admin.institution_id)
        .await?;

    Ok((StatusCode::OK, Json(hostels)))
}

/// Create a hostel in the admin's institution
#[utoipa::path(
    post,
    path = "/api/admin/hostels",
    tag = HOSTEL_TAG,
    request_body = CreateHostelDto,
    responses(
        (status = 201, description = "Hostel created", body = HostelDto),
        (status = 400, description = "Invalid hostel field", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_hostel(
    State(state): State<AppState>,
    session: Session,
    Json(hostel): Json<CreateHostelDto>,
) -> Result<impl IntoResponse, Error> {
    let admin = require_admin(&state, &session).await?;

    let hostel = HostelService::new(&state.db)
        .create(admin.institution_id, hostel)
        .await?;

    Ok((StatusCode::CREATED, Json(hostel)))
}

#[utoipa::path(
    get,
    path = "/api/admin/hostels/{id}",
    tag = HOSTEL_TAG,
    params(("id" = i32, Path, description = "Hostel ID")),
    responses(
        (status = 200, description = "Hostel found", body = HostelDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Hostel not found in the admin's institution", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_hostel(
    State(state): State<AppState>,
    session: Session,
    Path(hostel_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let admin = require_admin(&state, &session).await?;

    let hostel = HostelService::new(&state.db)
        .get(admin.institution_id, hostel_id)
        .await?;

    Ok((StatusCode::OK, Json(hostel)))
}

#[utoipa::path(
    patch,
    path = "/api/admin/hostels/{id}",
    tag = HOSTEL_TAG,
    params(("id" = i32, Path, description = "Hostel ID")),
    request_body = UpdateHostelDto,
    responses(
        (status = 200, description = "Updated hostel", body = HostelDto),
        (status = 400, description = "Invalid hostel field", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Hostel not found in the admin's institution", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_hostel(
    State(state): State<AppState>,
    session: Session,
    Path(hostel_id): Path<i32>,
    Json(changes): Json<UpdateHostelDto>,
) -> Result<impl IntoResponse, Error> {
    let admin = require_admin(&state, &session).await?;

    let hostel = HostelService::new(&state.db)
        .update(admin.institution_id, hostel_id, changes)
        .await?;

    Ok((StatusCode::OK, Json(hostel)))
}

/// Delete a hostel along with its rooms
#[utoipa::path(
    delete,
    path = "/api/admin/hostels/{id}",
    tag = HOSTEL_TAG,
    params(("id" = i32, Path, description = "Hostel ID")),
    responses(
        (status = 204, description = "Hostel deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Hostel not found in the admin's institution", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_hostel(
    State(state): State<AppState>,
    session: Session,
    Path(hostel_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let admin = require_admin(&state, &session).await?;

    HostelService::new(&state.db)
        .delete(admin.institution_id, hostel_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
