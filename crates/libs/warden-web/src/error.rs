//! Main Crate Error

use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;
use tracing::error;

/// Errors surfaced by the authentication endpoints and guard.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Models(#[from] warden_models::error::Error),

    #[error(transparent)]
    Auth(#[from] warden_auth::error::Error),

    /* Request validation */
    #[error("Email is required or malformed")]
    InvalidEmail,

    #[error("Password is required")]
    MissingPassword,

    /* Credentials */
    #[error("Unauthorized")]
    WrongCredentials,

    #[error("User may already exist")]
    DuplicateUser,

    /* Guard */
    #[error("No authorization headers.")]
    MissingAuthHeader,

    #[error("Malformed token.")]
    MalformedAuthHeader,

    #[error("Failed to authenticate.")]
    TokenVerification,
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        error!("Creating API error response for error: {:?}", self);
        let (status, body) = match &self {
            Error::MissingAuthHeader | Error::MalformedAuthHeader => {
                (StatusCode::UNAUTHORIZED, json!({ "message": self.to_string() }))
            }
            Error::TokenVerification => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "auth": false, "message": self.to_string() }),
            ),
            Error::InvalidEmail | Error::MissingPassword => (
                StatusCode::BAD_REQUEST,
                json!({ "auth": false, "message": self.to_string() }),
            ),
            Error::WrongCredentials => (
                StatusCode::UNAUTHORIZED,
                json!({ "auth": false, "message": self.to_string() }),
            ),
            Error::DuplicateUser => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({ "auth": false, "message": self.to_string() }),
            ),
            Error::Models(_) | Error::Auth(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "auth": false, "message": "Internal server error" }),
            ),
        };

        (status, Json(body)).into_response()
    }
}
