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
        student::{CreateStudentDto, StudentDto, UpdateStudentDto},
    },
    server::{
        controller::util::access::require_admin, error::Error, model::app::AppState,
        service::student::StudentService,
    },
};

pub static STUDENT_TAG: &str = "student";

/// List students of the admin's institution, newest first
#[utoipa::path(
    get,
    path = "/api/admin/students",
    tag = STUDENT_TAG,
    responses(
        (status = 200, description = "Students with account, hostel, and room details", body = Vec<StudentDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_students(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let admin = require_admin(&state, &session).await?;

    let students = StudentService::new(&state.db)
        .list(admin.institution_id)
        .await?;

    Ok((StatusCode::OK, Json(students)))
}

/// Create a student account, optionally placing it in a room
#[utoipa::path(
    post,
    path = "/api/admin/students",
    tag = STUDENT_TAG,
    request_body = CreateStudentDto,
    responses(
        (status = 201, description = "Student created", body = StudentDto),
        (status = 400, description = "Invalid student field", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Room not found in the admin's institution", body = ErrorDto),
        (status = 409, description = "Email already registered, or room is full or under maintenance", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_student(
    State(state): State<AppState>,
    session: Session,
    Json(student): Json<CreateStudentDto>,
) -> Result<impl IntoResponse, Error> {
    let admin = require_admin(&state, &session).await?;

    let student = StudentService::new(&state.db)
        .create(admin.institution_id, student)
        .await?;

    Ok((StatusCode::CREATED, Json(student)))
}

#[utoipa::path(
    get,
    path = "/api/admin/students/{id}",
    tag = STUDENT_TAG,
    params(("id" = i32, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Student found", body = StudentDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Student not found in the admin's institution", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_student(
    State(state): State<AppState>,
    session: Session,
    Path(student_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let admin = require_admin(&state, &session).await?;

    let student = StudentService::new(&state.db)
        .get(admin.institution_id, student_id)
        .await?;

    Ok((StatusCode::OK, Json(student)))
}

/// Update a student's profile, academic details, or room
///
/// `room_id: null` releases the student's bed, a different room moves them, leaving it out
/// keeps the current placement.
#[utoipa::path(
    patch,
    path = "/api/admin/students/{id}",
    tag = STUDENT_TAG,
    params(("id" = i32, Path, description = "Student ID")),
    request_body = UpdateStudentDto,
    responses(
        (status = 200, description = "Updated student", body = StudentDto),
        (status = 400, description = "Invalid student field", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Student or room not found in the admin's institution", body = ErrorDto),
        (status = 409, description = "Target room is full or under maintenance", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_student(
    State(state): State<AppState>,
    session: Session,
    Path(student_id): Path<i32>,
    Json(changes): Json<UpdateStudentDto>,
) -> Result<impl IntoResponse, Error> {
    let admin = require_admin(&state, &session).await?;

    let student = StudentService::new(&state.db)
        .update(admin.institution_id, student_id, changes)
        .await?;

    Ok((StatusCode::OK, Json(student)))
}

/// Delete a student, releasing their bed and removing their user account
#[utoipa::path(
    delete,
    path = "/api/admin/students/{id}",
    tag = STUDENT_TAG,
    params(("id" = i32, Path, description = "Student ID")),
    responses(
        (status = 204, description = "Student deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Student not found in the admin's institution", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_student(
    State(state): State<AppState>,
    session: Session,
    Path(student_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let admin = require_admin(&state, &session).await?;

    StudentService::new(&state.db)
        .delete(admin.institution_id, student_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
