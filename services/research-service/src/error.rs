//! API error type and HTTP mapping

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::aggregate::AggregateError;
use crate::models::ErrorResponse;

/// Request-level errors raised by the service itself.
///
/// Framework-level rejections (malformed JSON, mistyped fields) are
/// answered by axum's extractors before a handler runs and are not
/// represented here.
#[derive(Debug, Error)]
pub enum ApiError {
    /// `/compute` received an empty candle list
    #[error("candle list is empty")]
    EmptyCandles,
}

impl From<AggregateError> for ApiError {
    fn from(err: AggregateError) -> Self {
        match err {
            AggregateError::EmptyCandles => Self::EmptyCandles,
        }
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::EmptyCandles => StatusCode::BAD_REQUEST,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Self::EmptyCandles => "empty_candles",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.code().to_string(),
            message: self.to_string(),
            details: None,
        };

        (self.status(), Json(body)).into_response()
    }
}
