//! Translation of backend error outcomes to HTTP responses.
//!
//! This table is the single authoritative mapping; backend services never
//! pick HTTP statuses and their error kinds never reach clients directly.

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use error_types::{ErrorKind, ServiceError};
use std::fmt;

#[derive(Debug)]
pub struct GatewayError {
    pub kind: ErrorKind,
    pub message: String,
}

impl GatewayError {
    /// The only error kind the gateway originates itself: token failures,
    /// raised before any backend call is made.
    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Unauthenticated,
            message: message.into(),
        }
    }
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind.as_str(), self.message)
    }
}

impl From<ServiceError> for GatewayError {
    fn from(err: ServiceError) -> Self {
        Self {
            kind: err.kind,
            message: err.message,
        }
    }
}

impl ResponseError for GatewayError {
    fn status_code(&self) -> StatusCode {
        match self.kind {
            ErrorKind::InvalidArgument => StatusCode::BAD_REQUEST,
            ErrorKind::Unauthenticated => StatusCode::UNAUTHORIZED,
            ErrorKind::PermissionDenied => StatusCode::FORBIDDEN,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::AlreadyExists => StatusCode::CONFLICT,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": self.kind.as_str(),
            "message": self.message,
        }))
    }
}
