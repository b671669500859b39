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
        warden::{CreateWardenDto, UpdateWardenDto, WardenDto},
    },
    server::{
        controller::util::access::require_admin, error::Error, model::app::AppState,
        service::warden::WardenService,
    },
};

pub static WARDEN_TAG: &str = "warden";

/// List wardens of the admin's institution, newest first
#[utoipa::path(
    get,
    path = "/api/admin/wardens",
    tag = WARDEN_TAG,
    responses(
        (status = 200, description = "Wardens with their account and hostel", body = Vec<WardenDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_wardens(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let admin = require_admin(&state, &session).await?;

    let wardens = WardenService::new(&state.db)
        .list(admin.institution_id)
        .await?;

    Ok((StatusCode::OK, Json(wardens)))
}

/// Create a warden account and its warden record
#[utoipa::path(
    post,
    path = "/api/admin/wardens",
    tag = WARDEN_TAG,
    request_body = CreateWardenDto,
    responses(
        (status = 201, description = "Warden created", body = WardenDto),
        (status = 400, description = "Invalid warden field", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Hostel not found in the admin's institution", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_warden(
    State(state): State<AppState>,
    session: Session,
    Json(warden): Json<CreateWardenDto>,
) -> Result<impl IntoResponse, Error> {
    let admin = require_admin(&state, &session).await?;

    let warden = WardenService::new(&state.db)
        .create(admin.institution_id, warden)
        .await?;

    Ok((StatusCode::CREATED, Json(warden)))
}

#[utoipa::path(
    get,
    path = "/api/admin/wardens/{id}",
    tag = WARDEN_TAG,
    params(("id" = i32, Path, description = "Warden ID")),
    responses(
        (status = 200, description = "Warden found", body = WardenDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Warden not found in the admin's institution", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_warden(
    State(state): State<AppState>,
    session: Session,
    Path(warden_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let admin = require_admin(&state, &session).await?;

    let warden = WardenService::new(&state.db)
        .get(admin.institution_id, warden_id)
        .await?;

    Ok((StatusCode::OK, Json(warden)))
}

/// Update a warden's profile and assignment
///
/// `hostel_id: null` unassigns the warden from their hostel, leaving it out keeps the
/// current hostel.
#[utoipa::path(
    patch,
    path = "/api/admin/wardens/{id}",
    tag = WARDEN_TAG,
    params(("id" = i32, Path, description = "Warden ID")),
    request_body = UpdateWardenDto,
    responses(
        (status = 200, description = "Updated warden", body = WardenDto),
        (status = 400, description = "Invalid warden field", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Warden or hostel not found in the admin's institution", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_warden(
    State(state): State<AppState>,
    session: Session,
    Path(warden_id): Path<i32>,
    Json(changes): Json<UpdateWardenDto>,
) -> Result<impl IntoResponse, Error> {
    let admin = require_admin(&state, &session).await?;

    let warden = WardenService::new(&state.db)
        .update(admin.institution_id, warden_id, changes)
        .await?;

    Ok((StatusCode::OK, Json(warden)))
}

/// Delete a warden along with their user account
#[utoipa::path(
    delete,
    path = "/api/admin/wardens/{id}",
    tag = WARDEN_TAG,
    params(("id" = i32, Path, description = "Warden ID")),
    responses(
        (status = 204, description = "Warden deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Warden not found in the admin's institution", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_warden(
    State(state): State<AppState>,
    session: Session,
    Path(warden_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let admin = require_admin(&state, &session).await?;

    WardenService::new(&state.db)
        .delete(admin.institution_id, warden_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
