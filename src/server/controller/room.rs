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
        room::{CreateRoomDto, RoomDto, RoomQuery, UpdateRoomDto},
    },
    server::{
        controller::util::access::require_admin, error::Error, model::app::AppState,
        service::room::RoomService,
    },
};

pub static ROOM_TAG: &str = "room";

/// List rooms of the admin's institution, optionally for a single hostel
#[utoipa::path(
    get,
    path = "/api/admin/rooms",
    tag = ROOM_TAG,
    params(RoomQuery),
    responses(
        (status = 200, description = "Rooms ordered by hostel and room number", body = Vec<RoomDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_rooms(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<RoomQuery>,
) -> Result<impl IntoResponse, Error> {
    let admin = require_admin(&state, &session).await?;

    let rooms = RoomService::new(&state.db)
        .list(admin.institution_id, query.hostel_id)
        .await?;

    Ok((StatusCode::OK, Json(rooms)))
}

/// Create a room in one of the admin's hostels
#[utoipa::path(
    post,
    path = "/api/admin/rooms",
    tag = ROOM_TAG,
    request_body = CreateRoomDto,
    responses(
        (status = 201, description = "Room created", body = RoomDto),
        (status = 400, description = "Invalid room field", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Hostel not found in the admin's institution", body = ErrorDto),
        (status = 409, description = "Room number already exists in the hostel", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_room(
    State(state): State<AppState>,
    session: Session,
    Json(room): Json<CreateRoomDto>,
) -> Result<impl IntoResponse, Error> {
    let admin = require_admin(&state, &session).await?;

    let room = RoomService::new(&state.db)
        .create(admin.institution_id, room)
        .await?;

    Ok((StatusCode::CREATED, Json(room)))
}

#[utoipa::path(
    get,
    path = "/api/admin/rooms/{id}",
    tag = ROOM_TAG,
    params(("id" = i32, Path, description = "Room ID")),
    responses(
        (status = 200, description = "Room found", body = RoomDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Room not found in the admin's institution", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_room(
    State(state): State<AppState>,
    session: Session,
    Path(room_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let admin = require_admin(&state, &session).await?;

    let room = RoomService::new(&state.db)
        .get(admin.institution_id, room_id)
        .await?;

    Ok((StatusCode::OK, Json(room)))
}

/// Update a room
///
/// The stored status follows occupancy: a full room becomes `occupied` and a room with free
/// beds becomes `available`, unless `maintenance` is requested.
#[utoipa::path(
    patch,
    path = "/api/admin/rooms/{id}",
    tag = ROOM_TAG,
    params(("id" = i32, Path, description = "Room ID")),
    request_body = UpdateRoomDto,
    responses(
        (status = 200, description = "Updated room", body = RoomDto),
        (status = 400, description = "Invalid room field", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Room not found in the admin's institution", body = ErrorDto),
        (status = 409, description = "Capacity below current occupancy or room number taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_room(
    State(state): State<AppState>,
    session: Session,
    Path(room_id): Path<i32>,
    Json(changes): Json<UpdateRoomDto>,
) -> Result<impl IntoResponse, Error> {
    let admin = require_admin(&state, &session).await?;

    let room = RoomService::new(&state.db)
        .update(admin.institution_id, room_id, changes)
        .await?;

    Ok((StatusCode::OK, Json(room)))
}

#[utoipa::path(
    delete,
    path = "/api/admin/rooms/{id}",
    tag = ROOM_TAG,
    params(("id" = i32, Path, description = "Room ID")),
    responses(
        (status = 204, description = "Room deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Room not found in the admin's institution", body = ErrorDto),
        (status = 409, description = "Room still has students placed in it", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_room(
    State(state): State<AppState>,
    session: Session,
    Path(room_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let admin = require_admin(&state, &session).await?;

    RoomService::new(&state.db)
        .delete(admin.institution_id, room_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
