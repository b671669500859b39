//! Error types for the hostel server application.
//!
//! Domain errors (authentication, configuration, resource lookups) each implement
//! `IntoResponse` with their own status mapping. Anything else becomes a logged 500 with a
//! generic body so internal details never reach API consumers.

pub mod auth;
pub mod config;
pub mod resource;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, resource::ResourceError},
};

/// Main error type for the hostel server application.
///
/// Aggregates the domain-specific error types and external library errors so that
/// repositories, services, and controllers can all propagate with `?`.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication or authorization error.
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Missing, conflicting, or invalid resource.
    #[error(transparent)]
    ResourceError(#[from] ResourceError),
    /// A stored value could not be parsed into its typed representation.
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Internal error indicating a bug, such as a broken foreign key invariant.
    #[error("Internal error: {0}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Valkey session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
    /// Password hashing or hash parsing failed.
    #[error("Password hash error: {0}")]
    PasswordHashError(#[from] argon2::password_hash::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400/404/409 - For resource errors
/// - 401/403/404 - For authentication and authorization errors
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::ResourceError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
