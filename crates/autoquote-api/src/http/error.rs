//! HTTP error mapping

use autoquote_common::{AutoquoteError, PricingError};
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{error, warn};

/// Errors surfaced by the HTTP layer
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Body missing, not JSON, or not a valid quote request
    #[error("Invalid request body: {0}")]
    Rejected(#[from] JsonRejection),

    #[error(transparent)]
    Service(#[from] AutoquoteError),
}

impl ApiError {
    fn status_and_kind(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Rejected(JsonRejection::JsonDataError(_)) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "validation_error")
            }
            ApiError::Rejected(JsonRejection::JsonSyntaxError(_)) => {
                (StatusCode::BAD_REQUEST, "invalid_json")
            }
            ApiError::Rejected(JsonRejection::MissingJsonContentType(_)) => {
                (StatusCode::UNSUPPORTED_MEDIA_TYPE, "unsupported_media_type")
            }
            ApiError::Rejected(rejection) => (rejection.status(), "invalid_request"),
            ApiError::Service(AutoquoteError::Pricing(PricingError::Overflow { .. })) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "unprocessable_quote")
            }
            ApiError::Service(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        }
    }

    fn detail(&self) -> String {
        match self {
            ApiError::Rejected(rejection) => rejection.body_text(),
            ApiError::Service(err) => err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, kind) = self.status_and_kind();
        let detail = self.detail();

        if status.is_server_error() {
            error!(%status, %detail, "Request failed");
        } else {
            warn!(%status, %detail, "Request rejected");
        }

        (status, Json(json!({ "error": kind, "detail": detail }))).into_response()
    }
}
