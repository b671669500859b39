use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Errors about the record a request refers to or wants to create.
#[derive(Error, Debug)]
pub enum ResourceError {
    /// Record does not exist, or belongs to another institution.
    #[error("{kind} ID {id} not found")]
    NotFound { kind: &'static str, id: i32 },
    /// Write would violate a uniqueness or capacity rule.
    #[error("{0}")]
    Conflict(String),
    /// Request body is well-formed JSON but not an acceptable value.
    #[error("{0}")]
    Validation(String),
}

impl ResourceError {
    pub fn not_found(kind: &'static str, id: i32) -> Self {
        Self::NotFound { kind, id }
    }
}

impl IntoResponse for ResourceError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::NotFound { kind, .. } => (StatusCode::NOT_FOUND, format!("{} not found", kind)),
            Self::Conflict(message) => (StatusCode::CONFLICT, message.clone()),
            Self::Validation(message) => (StatusCode::BAD_REQUEST, message.clone()),
        };

        tracing::debug!("{}", self);

        (status, Json(ErrorDto { error: message })).into_response()
    }
}
