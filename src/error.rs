use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::config::CACHE_CONTROL_ERROR;
use crate::sequence::SequenceError;

/// Request-level failures. All of them are the client's fault and map to 400.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("missing parameter: {0}")]
    MissingParameter(&'static str),

    #[error("invalid length")]
    InvalidLength,

    #[error("failed to compute sequence: {0}")]
    Sequence(#[from] SequenceError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::BAD_REQUEST;
        tracing::debug!(status = status.as_u16(), error = %self, "Rejected request");

        (
            status,
            [(header::CACHE_CONTROL, CACHE_CONTROL_ERROR)],
            self.to_string(),
        )
            .into_response()
    }
}
