//! HTTP error envelope.
//!
//! Every failure leaves the API as
//! `{"error": {"code": "...", "message": "..."}}`. Messages are generic;
//! underlying causes are logged, never returned.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::domains::experts::search::SearchError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("search unavailable: {0}")]
    SearchUnavailable(#[from] SearchError),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::SearchUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(&self) -> ErrorBody {
        match self {
            ApiError::SearchUnavailable(_) => ErrorBody {
                code: "search_unavailable",
                message: "Search is temporarily unavailable".to_string(),
            },
            ApiError::NotFound(what) => ErrorBody {
                code: "not_found",
                message: format!("{} not found", what),
            },
            ApiError::Internal(_) => ErrorBody {
                code: "internal_error",
                message: "An internal error occurred".to_string(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(e) = &self {
            tracing::error!(error = %e, "Request failed");
        }

        (self.status(), Json(ErrorEnvelope { error: self.body() })).into_response()
    }
}
