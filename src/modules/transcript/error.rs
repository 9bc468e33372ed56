use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

use crate::modules::transcript::schema::{ErrorResponse, TranscriptErrorResponse};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("youtubeUrl is required")]
    MissingUrl,
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("{}", .0.error)]
    Transcript(TranscriptErrorResponse),
    #[error("Internal server error")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::MissingUrl => StatusCode::BAD_REQUEST,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Transcript(body) => {
                return (StatusCode::BAD_REQUEST, Json(body)).into_response();
            }
            ApiError::Internal(detail) => {
                error!(%detail, "request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(ErrorResponse { error: self.to_string() })).into_response()
    }
}
