use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::{api::ErrorDto, user::Role};

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("User ID is not present in session")]
    UserNotInSession,
    #[error("User ID {0:?} not found in database despite having an active session")]
    UserNotInDatabase(i32),
    #[error("Login failed due to unknown email or wrong password")]
    InvalidCredentials,
    #[error("User ID {user_id:?} with role {role} attempted an action requiring role {required}")]
    RoleRequired {
        user_id: i32,
        role: Role,
        required: Role,
    },
    #[error("User ID {0:?} is not associated with an institution")]
    NoInstitution(i32),
}

impl AuthError {
    fn unauthorized(message: &str) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                Self::unauthorized("Unauthorized")
            }
            Self::InvalidCredentials => Self::unauthorized("Invalid email or password"),
            Self::RoleRequired { .. } => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "Forbidden".to_string(),
                }),
            )
                .into_response(),
            Self::NoInstitution(_) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: "Institution not found".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
