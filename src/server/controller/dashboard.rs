use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, dashboard::DashboardDto},
    server::{
        controller::util::access::require_admin, error::Error, model::app::AppState,
        service::dashboard::DashboardService,
    },
};

pub static DASHBOARD_TAG: &str = "dashboard";

/// Totals, maintenance breakdown, and per-hostel occupancy for the admin's institution
#[utoipa::path(
    get,
    path = "/api/admin/dashboard",
    tag = DASHBOARD_TAG,
    responses(
        (status = 200, description = "Dashboard figures", body = DashboardDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Admin has no institution", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dashboard(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let admin = require_admin(&state, &session).await?;

    let dashboard = DashboardService::new(&state.db)
        .get(admin.institution_id)
        .await?;

    Ok((StatusCode::OK, Json(dashboard)))
}
