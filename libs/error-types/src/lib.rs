//! Shared error taxonomy for backend services.
//!
//! Every backend service returns `ServiceError` across the service seam. The
//! API gateway is the single place where an `ErrorKind` is translated into an
//! HTTP status; services never pick status codes themselves. Raw storage
//! failures are lowered to `ErrorKind::Internal` with a generic message so
//! driver details never cross the seam.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServiceError>;

/// Structured outcome category carried from a backend service to the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or missing required input
    InvalidArgument,
    /// Missing, malformed, or expired credentials
    Unauthenticated,
    /// Ownership or visibility violation
    PermissionDenied,
    /// No entity with the given id
    NotFound,
    /// Uniqueness violation (duplicate login/email/code)
    AlreadyExists,
    /// Storage failure or unexpected condition
    Internal,
}

impl ErrorKind {
    /// Short category label used in wire error bodies.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidArgument => "invalid_argument",
            ErrorKind::Unauthenticated => "unauthenticated",
            ErrorKind::PermissionDenied => "permission_denied",
            ErrorKind::NotFound => "not_found",
            ErrorKind::AlreadyExists => "already_exists",
            ErrorKind::Internal => "internal",
        }
    }
}

/// Error returned by every backend service operation.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ServiceError {
    pub kind: ErrorKind,
    pub message: String,
}

impl ServiceError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument, message)
    }

    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unauthenticated, message)
    }

    pub fn permission_denied(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::PermissionDenied, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    pub fn already_exists(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::AlreadyExists, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }
}

impl From<sqlx::Error> for ServiceError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!("database error: {}", err);
        // Clients only ever see the generic message; the detail stays in logs.
        ServiceError::internal("internal error")
    }
}

/// Whether a sqlx error is a unique-constraint violation. Stores use this to
/// turn a duplicate key into `AlreadyExists` instead of `Internal`.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db) => db.is_unique_violation(),
        _ => false,
    }
}
