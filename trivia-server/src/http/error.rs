//! API error envelopes
//!
//! Every failure leaves the server as one of four fixed bodies:
//! `{"success": false, "error": <code>, "message": <text>}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::models::RequestError;
use crate::store::StoreError;

/// API error type with fixed status and message per variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    /// Unparsable request (400)
    BadRequest,

    /// Entity absent or lookup failed (404)
    NotFound,

    /// Invalid input or failed mutation (422)
    Unprocessable,

    /// Unexpected failure (500)
    Internal,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::BadRequest => "bad request",
            Self::NotFound => "Resource Not Found",
            Self::Unprocessable => "unprocessable",
            Self::Internal => "Internal server error",
        }
    }

    /// Fold a store error into this endpoint's fixed status.
    ///
    /// Absence passes through silently; a genuine store failure is logged
    /// with its cause first, since the client only ever sees the envelope.
    pub fn from_store(err: StoreError, status: ApiError) -> Self {
        if !err.is_not_found() {
            tracing::error!(error = %err, code = status.status().as_u16(), "Store error");
        }
        status
    }

    /// Endpoints that report failures as 404.
    pub fn not_found(err: StoreError) -> Self {
        Self::from_store(err, Self::NotFound)
    }

    /// Endpoints that report failures as 422.
    pub fn unprocessable(err: StoreError) -> Self {
        Self::from_store(err, Self::Unprocessable)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = json!({
            "success": false,
            "error": status.as_u16(),
            "message": self.message(),
        });

        (status, Json(body)).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound { .. } => Self::NotFound,
            _ => Self::from_store(e, Self::Internal),
        }
    }
}

impl From<RequestError> for ApiError {
    fn from(e: RequestError) -> Self {
        tracing::debug!(error = %e, "Rejected request body");
        Self::Unprocessable
    }
}
