use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tinyurl_core::ServiceError;
use tracing::{debug, error, warn};

pub type Result<T> = std::result::Result<T, AppError>;

/// Body returned for every failed create.
pub const CREATE_FAILED_BODY: &str = "Error occurred while generating the tiny URL";
/// Body returned for every failed resolve.
pub const NOT_FOUND_BODY: &str = "URL not found";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("create failed: {0}")]
    Create(#[source] ServiceError),
    #[error("request has no origin and no public origin is configured")]
    MissingOrigin,
    #[error("resolve failed: {0}")]
    Resolve(#[source] ServiceError),
    #[error("stored url is not a valid location header: {0}")]
    InvalidLocation(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            // Validation failures keep the 500 that existing clients expect.
            AppError::Create(_) | AppError::MissingOrigin => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Resolve(_) | AppError::InvalidLocation(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Create(ServiceError::Validation(_)) => {
                warn!(error = %self, "rejected create request")
            }
            AppError::Create(_) | AppError::MissingOrigin => {
                error!(error = %self, "failed to create tiny url")
            }
            AppError::Resolve(_) => debug!(error = %self, "tiny url not resolved"),
            AppError::InvalidLocation(_) => error!(error = %self, "failed to resolve tiny url"),
        }

        let body = match self.status() {
            StatusCode::NOT_FOUND => NOT_FOUND_BODY,
            _ => CREATE_FAILED_BODY,
        };
        (self.status(), body).into_response()
    }
}
