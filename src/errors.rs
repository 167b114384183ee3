//! Centralized error handling.
//!
//! Provides the unified error taxonomy every service boundary returns,
//! plus the wire shape the edge embeds in tagged response unions.

use serde::Serialize;
use thiserror::Error;

/// Application error taxonomy.
///
/// Expected failure conditions are first-class variants; anything
/// unexpected is folded into `Database`/`Internal` and surfaced to the
/// caller only as a generic internal error.
#[derive(Error, Debug)]
pub enum AppError {
    /// Gated operation invoked with an anonymous context.
    #[error("You must be logged in")]
    Authentication,

    /// Bad credentials at login (distinct from a missing token).
    #[error("Incorrect username or password")]
    Unauthorized,

    #[error("{0}")]
    NotFound(String),

    /// Unique-key collision, e.g. "User already exists".
    #[error("{0} already exists")]
    Duplicate(String),

    /// Constraint violation reported by the storage schema validator.
    /// The payload is the validator's detail; clients only ever see the
    /// generic message.
    #[error("Validation error")]
    Validation(String),

    // External failures
    #[error("Database error")]
    Database(#[from] mongodb::error::Error),

    #[error("Token error")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

/// Error payload embedded in the `Error` member of response unions.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}

impl AppError {
    /// Get error code for the client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Authentication => "AUTHENTICATION_ERROR",
            AppError::Unauthorized => "UNAUTHORIZED",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Duplicate(_) => "DUPLICATE_KEY",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Database(_) | AppError::Jwt(_) | AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(detail) => {
                tracing::warn!("Validation rejected by store: {}", detail);
                "Validation error".to_string()
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "An internal error occurred".to_string()
            }
            AppError::Jwt(e) => {
                tracing::error!("Token error: {:?}", e);
                "An internal error occurred".to_string()
            }
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                "An internal error occurred".to_string()
            }
            _ => self.to_string(),
        }
    }

    /// Convert into the wire payload, logging internal detail as a side
    /// effect of `user_message`.
    pub fn into_body(self) -> ErrorBody {
        ErrorBody {
            code: self.code(),
            message: self.user_message(),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn not_found(what: impl Into<String>) -> Self {
        AppError::NotFound(what.into())
    }

    pub fn duplicate(entity: impl Into<String>) -> Self {
        AppError::Duplicate(entity.into())
    }

    pub fn validation(detail: impl Into<String>) -> Self {
        AppError::Validation(detail.into())
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        AppError::Internal(detail.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expected_errors_keep_their_message() {
        assert_eq!(
            AppError::duplicate("User").user_message(),
            "User already exists"
        );
        assert_eq!(
            AppError::not_found("No such user exists").user_message(),
            "No such user exists"
        );
        assert_eq!(
            AppError::Unauthorized.user_message(),
            "Incorrect username or password"
        );
    }

    #[test]
    fn internal_detail_never_reaches_the_client() {
        let body = AppError::internal("connection pool exhausted").into_body();
        assert_eq!(body.code, "INTERNAL_ERROR");
        assert_eq!(body.message, "An internal error occurred");

        let body = AppError::validation("title too long").into_body();
        assert_eq!(body.code, "VALIDATION_ERROR");
        assert_eq!(body.message, "Validation error");
    }
}
