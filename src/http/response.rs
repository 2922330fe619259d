//! Response handling.
//!
//! # Responsibilities
//! - Map route service errors to HTTP status codes
//! - Render error bodies as `{"error": "<message>"}`

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::routes::RouteError;

/// JSON error body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Error returned by API handlers.
#[derive(Debug)]
pub enum ApiError {
    Route(RouteError),
    /// Body could not be read at all (e.g. over the size limit).
    Body(JsonRejection),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Route(RouteError::Validation { .. })
            | ApiError::Route(RouteError::VehicleNotFound(_)) => StatusCode::BAD_REQUEST,
            ApiError::Route(RouteError::RouteNotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Body(rejection) => rejection.status(),
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::Route(err) => err.to_string(),
            ApiError::Body(rejection) => rejection.body_text(),
        }
    }
}

impl From<RouteError> for ApiError {
    fn from(err: RouteError) -> Self {
        ApiError::Route(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.message(),
        };
        (self.status(), Json(body)).into_response()
    }
}
