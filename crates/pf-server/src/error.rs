//! API error responses
//!
//! Errors serialize as `{"error": {"message": ..., "type": ...}}` with the
//! matching HTTP status.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use pf_types::AppError;

pub type ApiResult<T> = Result<T, ApiErrorResponse>;

#[derive(Debug)]
pub struct ApiErrorResponse {
    pub status: StatusCode,
    pub error_type: &'static str,
    pub message: String,
}

impl ApiErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error_type: "invalid_request",
            message: message.into(),
        }
    }

    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            error_type: "invalid_request",
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            error_type: "not_found",
            message: message.into(),
        }
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error_type: "internal_error",
            message: message.into(),
        }
    }
}

impl From<AppError> for ApiErrorResponse {
    fn from(err: AppError) -> Self {
        match &err {
            // Shells only offer ids they got from GET /v1/catalog, so an
            // unknown id is a caller bug, not user input
            AppError::UnknownCatalogEntry { .. } => {
                tracing::error!("catalog id rejected: {err}");
                Self::not_found(err.to_string())
            }
            AppError::InvalidParams(_) => Self::bad_request(err.to_string()),
            _ => Self::internal_error(err.to_string()),
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": {
                "message": self.message,
                "type": self.error_type,
            }
        }));

        (self.status, body).into_response()
    }
}
