use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        institution::{
            AdminAssignmentDto, AssignInstitutionDto, CreateInstitutionDto, InstitutionDto,
            UpdateInstitutionDto,
        },
    },
    server::{
        controller::util::{access::require_admin, get_user::get_user_from_session},
        error::Error,
        model::app::AppState,
        service::institution::InstitutionService,
    },
};

pub static INSTITUTION_TAG: &str = "institution";

/// List all institutions
#[utoipa::path(
    get,
    path = "/api/institutions",
    tag = INSTITUTION_TAG,
    responses(
        (status = 200, description = "All institutions ordered by name", body = Vec<InstitutionDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_institutions(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let institutions = InstitutionService::new(&state.db).list().await?;

    Ok((StatusCode::OK, Json(institutions)))
}

/// Create a new institution
#[utoipa::path(
    post,
    path = "/api/admin/institutions",
    tag = INSTITUTION_TAG,
    request_body = CreateInstitutionDto,
    responses(
        (status = 201, description = "Institution created", body = InstitutionDto),
        (status = 400, description = "Missing or empty institution field", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 409, description = "Institution code already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_institution(
    State(state): State<AppState>,
    session: Session,
    Json(institution): Json<CreateInstitutionDto>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let institution = InstitutionService::new(&state.db)
        .create(institution)
        .await?;

    Ok((StatusCode::CREATED, Json(institution)))
}

/// Make the logged in user the admin of an institution
///
/// Sets the user's role to `admin`, binds them to the institution, and creates or moves
/// their admin record.
#[utoipa::path(
    post,
    path = "/api/admin/institutions/assign",
    tag = INSTITUTION_TAG,
    request_body = AssignInstitutionDto,
    responses(
        (status = 200, description = "User assigned as institution admin", body = AdminAssignmentDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Institution not found", body = ErrorDto),
        (status = 409, description = "User is a student or warden", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn assign_institution(
    State(state): State<AppState>,
    session: Session,
    Json(assignment): Json<AssignInstitutionDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let assignment = InstitutionService::new(&state.db)
        .assign_admin(user.id, assignment.institution_id)
        .await?;

    Ok((StatusCode::OK, Json(assignment)))
}

/// Get the institution the logged in user belongs to
#[utoipa::path(
    get,
    path = "/api/admin/institutions/my",
    tag = INSTITUTION_TAG,
    responses(
        (status = 200, description = "The user's institution", body = InstitutionDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "User has no institution", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_institution(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let institution = InstitutionService::new(&state.db)
        .get_for_user(user.id, user.institution_id)
        .await?;

    Ok((StatusCode::OK, Json(institution)))
}

/// Update the institution of the logged in admin
#[utoipa::path(
    patch,
    path = "/api/admin/institutions/my",
    tag = INSTITUTION_TAG,
    request_body = UpdateInstitutionDto,
    responses(
        (status = 200, description = "Updated institution", body = InstitutionDto),
        (status = 400, description = "Invalid institution field", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Admin has no institution", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_my_institution(
    State(state): State<AppState>,
    session: Session,
    Json(changes): Json<UpdateInstitutionDto>,
) -> Result<impl IntoResponse, Error> {
    let admin = require_admin(&state, &session).await?;

    let institution = InstitutionService::new(&state.db)
        .update(admin.institution_id, changes)
        .await?;

    Ok((StatusCode::OK, Json(institution)))
}
