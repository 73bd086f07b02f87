//! Mapping of handler failures to HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use honeyrae_core::StoreError;
use serde::Serialize;
use tracing::error;

/// Handler failure.
///
/// Client errors carry no body. Internal errors carry a JSON message.
#[derive(Debug)]
pub enum ApiError {
    NotFound,
    BadRequest,
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
            ApiError::BadRequest => StatusCode::BAD_REQUEST.into_response(),
            ApiError::Internal(msg) => {
                error!(error = %msg, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse { error: msg }),
                )
                    .into_response()
            }
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::CustomerNotFound(_) | StoreError::TicketNotFound(_) => ApiError::BadRequest,
            StoreError::LockPoisoned => ApiError::Internal(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_references_map_to_bad_request() {
        assert!(matches!(
            ApiError::from(StoreError::CustomerNotFound(9)),
            ApiError::BadRequest
        ));
        assert!(matches!(
            ApiError::from(StoreError::TicketNotFound(9)),
            ApiError::BadRequest
        ));
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::NotFound.into_response().status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::BadRequest.into_response().status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::from(StoreError::LockPoisoned).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
