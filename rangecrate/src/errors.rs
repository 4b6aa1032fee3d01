//! # Error Handling for Range Pagination
//!
//! This module provides the error type used across the crate. It:
//! - Returns appropriate HTTP status codes
//! - Sends sanitized JSON bodies of the form `{"error": ..., "error_description": ...}`
//! - Logs internal details with `tracing` without exposing them to clients
//!
//! ## Range errors
//!
//! A requested window larger than the resource allows is **not** surfaced to callers
//! as an `Err`. The formatter recovers locally by replacing the outgoing response
//! with [`ApiError::RangeExceeded`]'s response:
//!
//! ```text
//! HTTP/1.1 400 Bad Request
//! Content-Type: application/json
//!
//! {"error":"range error","error_description":"Requested range not allowed"}
//! ```
//!
//! ## Logging
//!
//! Internal errors are logged using the `tracing` crate. To see them, install a
//! subscriber in your application:
//!
//! ```rust,ignore
//! tracing_subscriber::fmt()
//!     .with_target(false)
//!     .compact()
//!     .init();
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::fmt;
use utoipa::ToSchema;

/// Error code sent when the requested window is too large
pub const RANGE_ERROR: &str = "range error";
/// Description sent when the requested window exceeds the resource maximum
pub const RANGE_NOT_ALLOWED: &str = "Requested range not allowed";
/// Description sent when the `range` parameter cannot be read
pub const MALFORMED_RANGE: &str = "Malformed range parameter";

/// API error type with automatic logging and sanitized responses
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request - Requested window is larger than the resource allows
    RangeExceeded {
        /// Upper bound sent by the client
        requested: u64,
        /// Maximum allowed by the resource policy
        max: u64,
    },

    /// 400 Bad Request - Range parameter could not be parsed
    BadRequest {
        /// User-facing error message
        message: String,
    },

    /// 500 Internal Server Error - A header value could not be built
    InvalidHeader {
        /// Header that failed
        name: String,
        /// Internal error details (logged, not sent to user)
        internal: String,
    },
}

impl ApiError {
    /// Create the range-exceeded error
    #[must_use]
    pub const fn range_exceeded(requested: u64, max: u64) -> Self {
        Self::RangeExceeded { requested, max }
    }

    /// Create a 400 Bad Request error
    ///
    /// # Example
    /// ```rust,ignore
    /// return Err(ApiError::bad_request("Malformed range parameter"));
    /// ```
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    /// Create a 500 error for a header value that cannot be represented
    pub fn invalid_header(name: impl Into<String>, internal: impl fmt::Display) -> Self {
        Self::InvalidHeader {
            name: name.into(),
            internal: internal.to_string(),
        }
    }

    // ============================================================================
    // Internal methods
    // ============================================================================

    /// Get the HTTP status code for this error
    pub(crate) const fn status_code(&self) -> StatusCode {
        match self {
            Self::RangeExceeded { .. } | Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::InvalidHeader { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Machine-readable error code
    const fn error_code(&self) -> &'static str {
        match self {
            Self::RangeExceeded { .. } => RANGE_ERROR,
            Self::BadRequest { .. } => "invalid_request",
            Self::InvalidHeader { .. } => "server_error",
        }
    }

    /// Get the user-facing error message (sanitized)
    pub(crate) fn user_message(&self) -> String {
        match self {
            Self::RangeExceeded { .. } => RANGE_NOT_ALLOWED.to_string(),
            Self::BadRequest { message } => message.clone(),
            Self::InvalidHeader { .. } => "An internal error occurred".to_string(),
        }
    }

    /// Log internal error details (not sent to user)
    fn log_internal(&self) {
        match self {
            Self::RangeExceeded { requested, max } => {
                tracing::debug!(requested, max, "Requested range exceeds resource maximum");
            }
            Self::BadRequest { message } => {
                tracing::debug!(error = %message, "Rejected pagination request");
            }
            Self::InvalidHeader { name, internal } => {
                tracing::error!(header = %name, details = %internal, "Failed to build header value");
            }
        }
    }
}

/// Error response sent to users (sanitized)
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error code
    #[schema(example = "range error")]
    pub error: String,
    /// Human readable description
    #[schema(example = "Requested range not allowed")]
    pub error_description: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.log_internal();

        let body = ErrorResponse {
            error: self.error_code().to_string(),
            error_description: self.user_message(),
        };

        // Json sets `Content-Type: application/json`
        (self.status_code(), Json(body)).into_response()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RangeExceeded { requested, max } => {
                write!(f, "{RANGE_NOT_ALLOWED} ({requested} > {max})")
            }
            _ => write!(f, "{}", self.user_message()),
        }
    }
}

impl std::error::Error for ApiError {}
