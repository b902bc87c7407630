//! Unified error handling for the desk service.
//!
//! Every failure path is user-facing and non-fatal: the operation aborts
//! with a message and no partial mutation. QR generation failure is the one
//! exception to surfacing - it degrades to an empty image and the operation
//! still completes (see the `qr` module).

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type for the desk service.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required form field is missing or a fee failed to parse.
    #[error("Invalid field: {field}")]
    Validation {
        /// Name of the offending field.
        field: &'static str,
    },

    /// Login failed. Deliberately generic: no distinction between a wrong
    /// password and an unknown customer, so the response leaks nothing
    /// about which identities exist.
    #[error("Invalid credentials")]
    Unauthorized,

    /// The session's role lacks the capability for this operation.
    #[error("Forbidden: {0}")]
    Forbidden(&'static str),

    /// Document not found (or, for pickup, already picked up).
    #[error("Not found: {0}")]
    NotFound(String),

    /// Customer notifications are not configured.
    #[error("Notifications are not configured")]
    NotifyUnavailable,

    /// The Telegram Bot API rejected or failed a notification.
    #[error("Notification failed: {0}")]
    Notify(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if matches!(self, Self::Internal(_) | Self::Notify(_)) {
            tracing::error!(error = %self, "Desk request error");
        }

        let status = match &self {
            Self::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::NotifyUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::Notify(_) => StatusCode::BAD_GATEWAY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Internal(_) => "Internal server error".to_string(),
            _ => self.to_string(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::Validation {
            field: "customer_name",
        };
        assert_eq!(err.to_string(), "Invalid field: customer_name");

        let err = AppError::NotFound("DOC-1".to_string());
        assert_eq!(err.to_string(), "Not found: DOC-1");
    }

    #[test]
    fn test_app_error_status_codes() {
        fn get_status(err: AppError) -> StatusCode {
            err.into_response().status()
        }

        assert_eq!(
            get_status(AppError::Validation { field: "x" }),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(get_status(AppError::Unauthorized), StatusCode::UNAUTHORIZED);
        assert_eq!(
            get_status(AppError::Forbidden("delete")),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            get_status(AppError::NotFound("test".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::NotifyUnavailable),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            get_status(AppError::Internal("test".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn internal_details_are_not_exposed() {
        let response = AppError::Internal("secret detail".to_string()).into_response();
        // Body building is infallible here; the message swap happens before.
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
