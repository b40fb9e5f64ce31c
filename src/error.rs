//! HTTP error type and its mapping to responses

use crate::validation::FieldError;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request validation failed with {} error(s)", .0.len())]
    Validation(Vec<FieldError>),

    #[error("Request rejected: {message}")]
    Rejected { status: StatusCode, message: String },

    #[error("Analysis failed")]
    Analysis(#[from] hypermodern_polars::Error),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Rejected { status, .. } => *status,
            ApiError::Analysis(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonSyntaxError(e) => {
                ApiError::Validation(vec![FieldError::json_invalid(e.body_text())])
            }
            JsonRejection::JsonDataError(e) => {
                ApiError::Validation(vec![FieldError::json_invalid(e.body_text())])
            }
            other => ApiError::Rejected {
                status: other.status(),
                message: other.body_text(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match self {
            ApiError::Validation(errors) => {
                tracing::debug!(errors = errors.len(), "request validation failed");
                json!({ "detail": errors })
            }
            ApiError::Rejected { message, .. } => {
                tracing::debug!(%status, %message, "request rejected");
                json!({ "detail": message })
            }
            ApiError::Analysis(e) => {
                tracing::error!(error = %e, "analysis failed");
                json!({ "detail": "Internal Server Error" })
            }
        };

        (status, Json(body)).into_response()
    }
}
