//! HTTP controller endpoints for the hostel web API.
//!
//! Axum handlers resolve the caller from the session, check their role, call into the
//! service layer, and return JSON. Every handler carries a utoipa annotation for the
//! OpenAPI document served with Swagger UI.

pub mod auth;
pub mod dashboard;
pub mod hostel;
pub mod institution;
pub mod maintenance;
pub mod profile;
pub mod room;
pub mod student;
pub mod util;
pub mod warden;
