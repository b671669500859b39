//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. Handlers sharing a path are registered together so each path appears once
//! in the document, and Swagger UI is served at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `/api/auth/*` - Register, login, logout, current user
/// - `/api/profile` - Read and update the logged in user's profile
/// - `/api/institutions`, `/api/admin/institutions/*` - Institution listing, creation,
///   admin assignment, and the admin's own institution
/// - `/api/admin/{hostels,rooms,wardens,students}` - Institution-scoped CRUD
/// - `/api/admin/maintenance` - Maintenance request triage
/// - `/api/maintenance` - Student maintenance requests
/// - `/api/admin/dashboard` - Dashboard figures
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState { db }).layer(session);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Hostel", description = "Hostel administration API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Registration, login, and logout"),
        (name = controller::profile::PROFILE_TAG, description = "Logged in user's profile"),
        (name = controller::institution::INSTITUTION_TAG, description = "Institutions and admin assignment"),
        (name = controller::hostel::HOSTEL_TAG, description = "Hostels of the admin's institution"),
        (name = controller::room::ROOM_TAG, description = "Rooms of the admin's institution"),
        (name = controller::warden::WARDEN_TAG, description = "Wardens of the admin's institution"),
        (name = controller::student::STUDENT_TAG, description = "Students of the admin's institution"),
        (name = controller::maintenance::MAINTENANCE_TAG, description = "Maintenance requests"),
        (name = controller::dashboard::DASHBOARD_TAG, description = "Admin dashboard"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::register))
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::get_user))
        .routes(routes!(
            controller::profile::get_profile,
            controller::profile::update_profile
        ))
        .routes(routes!(controller::institution::list_institutions))
        .routes(routes!(controller::institution::create_institution))
        .routes(routes!(controller::institution::assign_institution))
        .routes(routes!(
            controller::institution::get_my_institution,
            controller::institution::update_my_institution
        ))
        .routes(routes!(
            controller::hostel::list_hostels,
            controller::hostel::create_hostel
        ))
        .routes(routes!(
            controller::hostel::get_hostel,
            controller::hostel::update_hostel,
            controller::hostel::delete_hostel
        ))
        .routes(routes!(
            controller::room::list_rooms,
            controller::room::create_room
        ))
        .routes(routes!(
            controller::room::get_room,
            controller::room::update_room,
            controller::room::delete_room
        ))
        .routes(routes!(
            controller::warden::list_wardens,
            controller::warden::create_warden
        ))
        .routes(routes!(
            controller::warden::get_warden,
            controller::warden::update_warden,
            controller::warden::delete_warden
        ))
        .routes(routes!(
            controller::student::list_students,
            controller::student::create_student
        ))
        .routes(routes!(
            controller::student::get_student,
            controller::student::update_student,
            controller::student::delete_student
        ))
        .routes(routes!(controller::maintenance::list_maintenance_requests))
        .routes(routes!(
            controller::maintenance::update_maintenance_request,
            controller::maintenance::delete_maintenance_request
        ))
        .routes(routes!(
            controller::maintenance::submit_maintenance_request,
            controller::maintenance::list_my_maintenance_requests
        ))
        .routes(routes!(controller::dashboard::get_dashboard))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
