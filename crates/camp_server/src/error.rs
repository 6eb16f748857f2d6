//! API error type and its JSON bodies.
//!
//! # Invariants
//! - Validation failures always render as `{"errors": [<message>]}` with 400.
//! - Missing resources always render as `{"error": <message>}` with 404.
//! - Internal messages are logged, never echoed to the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::{error, warn};
use serde::Serialize;
use std::fmt::Display;

pub const CAMPER_NOT_FOUND: &str = "Camper not found";
pub const ACTIVITY_NOT_FOUND: &str = "Activity not found";
pub const CAMPER_CREATE_INVALID: &str = "Validation errors";
pub const REQUEST_INVALID: &str = "validation errors";
const INTERNAL_ERROR: &str = "internal error";

/// Failure returned by a request handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// 400 with a generic `errors` list.
    Validation(&'static str),
    /// 404 with a single `error` message.
    NotFound(&'static str),
    /// 500; only produced on read and delete paths.
    Internal,
}

#[derive(Serialize)]
struct ErrorsBody {
    errors: [&'static str; 1],
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
}

impl ApiError {
    /// Logs the rejected input and returns a 400 with `message`.
    pub fn rejected(event: &str, message: &'static str, err: impl Display) -> Self {
        warn!("event={event} module=api status=rejected error={err}");
        Self::Validation(message)
    }

    /// Logs a storage failure and returns a 500.
    pub fn internal(event: &str, err: impl Display) -> Self {
        error!("event={event} module=api status=error error={err}");
        Self::Internal
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            Self::Validation(message) => (status, Json(ErrorsBody { errors: [message] })).into_response(),
            Self::NotFound(message) => (status, Json(ErrorBody { error: message })).into_response(),
            Self::Internal => (
                status,
                Json(ErrorsBody {
                    errors: [INTERNAL_ERROR],
                }),
            )
                .into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ApiError, CAMPER_NOT_FOUND};
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[test]
    fn status_codes_follow_error_kind() {
        assert_eq!(
            ApiError::Validation("x").into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::NotFound(CAMPER_NOT_FOUND).into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Internal.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
