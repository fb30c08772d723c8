use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::db::StoreError;
use crate::models::ErrorResponse;
use crate::validation::ValidationError;

/// Every failure a handler can return. Rendered as `{"error": "..."}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The body or query string could not be read.
    #[error("{0}")]
    BadRequest(String),

    #[error("Employee not found")]
    NotFound,

    #[error("API endpoint not found")]
    EndpointNotFound,

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Store(StoreError::DuplicateEmail) => StatusCode::BAD_REQUEST,
            Self::NotFound | Self::EndpointNotFound => StatusCode::NOT_FOUND,
            Self::Store(StoreError::Sqlite(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Storage error: {}", self);
        } else {
            tracing::debug!("Rejected request: {}", self);
        }

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}
