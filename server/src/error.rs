use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use countries_core::UpstreamError;
use thiserror::Error;

/// Errors surfaced to API clients as `400 Bad Request` with the message as body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    #[error("missing query parameter `{0}`")]
    MissingParameter(&'static str),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, self.to_string()).into_response()
    }
}
