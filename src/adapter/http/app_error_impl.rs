use crate::application::app_error::AppError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::InvalidId(_) | AppError::InvalidForm(_) => (StatusCode::BAD_REQUEST, Some(self.to_string())),
            AppError::UploadTooLarge(_) => (StatusCode::PAYLOAD_TOO_LARGE, Some(self.to_string())),
            AppError::NoUserFound => (StatusCode::UNAUTHORIZED, Some(self.to_string())),
            AppError::BackendError(msg) => (StatusCode::BAD_GATEWAY, Some(msg.clone())),
            AppError::TransportError(_) => (StatusCode::BAD_GATEWAY, None),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, None),
        };

        if status.is_server_error() {
            error!("Request failed: {}", self);
        }

        let message = match message {
            Some(msg) => msg,
            None => status.canonical_reason().unwrap_or("Unknown error").to_string(),
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
