use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Backend returned {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),

    #[error("HTTP error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Multipart error: {0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match self {
            Error::BadRequest(msg) => (StatusCode::BAD_REQUEST, json!({ "message": msg })),
            Error::Validation(err) => (
                StatusCode::BAD_REQUEST,
                json!({ "message": "Validation failed", "error": err.to_string() }),
            ),
            Error::Multipart(err) => (
                StatusCode::BAD_REQUEST,
                json!({ "message": "Invalid upload", "error": err.to_string() }),
            ),
            Error::Upstream { status, body } => (
                StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                json!({ "message": "Error from cloud API", "error": body }),
            ),
            Error::Reqwest(err) => (
                StatusCode::BAD_GATEWAY,
                json!({ "message": "External API unavailable", "error": err.to_string() }),
            ),
            Error::Json(err) => (
                StatusCode::BAD_GATEWAY,
                json!({ "message": "Invalid response from cloud API", "error": err.to_string() }),
            ),
            other => {
                tracing::error!(error = %other, "Unhandled request error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "message": "Internal Server Error", "error": other.to_string() }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
