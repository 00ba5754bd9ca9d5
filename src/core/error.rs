//! Typed error handling for the vitrine service
//!
//! This module provides the error type hierarchy used across the crate so
//! that handlers and clients can react to specific failures instead of a
//! generic error string.
//!
//! # Error Categories
//!
//! - [`VehicleError`]: catalog record operations
//! - [`ContactError`]: contact triage operations
//! - [`SettingsError`]: site settings operations
//! - [`ValidationError`]: rejected input payloads and query parameters
//! - [`ConfigError`]: configuration loading
//! - [`StorageError`]: store backend failures
//!
//! Every error maps to an HTTP status code and a stable machine-readable
//! error code, and renders as a JSON body via axum's `IntoResponse`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// The top-level error type for the service
#[derive(Debug, Error)]
pub enum VitrineError {
    /// Catalog record errors
    #[error(transparent)]
    Vehicle(#[from] VehicleError),

    /// Contact triage errors
    #[error(transparent)]
    Contact(#[from] ContactError),

    /// Site settings errors
    #[error(transparent)]
    Settings(#[from] SettingsError),

    /// Input validation errors
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Store backend errors
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Internal errors that should not happen in normal operation
    #[error("internal error: {0}")]
    Internal(String),
}

/// Errors for vehicle record operations
#[derive(Debug, Error)]
pub enum VehicleError {
    #[error("vehicle {id} not found")]
    NotFound { id: i64 },
}

/// Errors for contact operations
#[derive(Debug, Error)]
pub enum ContactError {
    #[error("contact {id} not found")]
    NotFound { id: i64 },
}

/// Errors for site settings operations
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("site settings are not available")]
    Unavailable,
}

/// Errors for rejected input
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A single field failed a format or range check
    #[error("invalid {field}: {message}")]
    Field { field: String, message: String },

    /// A payload failed `validator` derive checks; details carry the
    /// per-field messages
    #[error("payload failed validation")]
    Payload(#[from] validator::ValidationErrors),

    #[error("unknown sort field '{0}'")]
    UnknownSortField(String),

    #[error("unknown sort direction '{0}'")]
    UnknownSortDirection(String),

    #[error("unknown contact status filter '{0}'")]
    UnknownStatusFilter(String),
}

impl ValidationError {
    /// Convenience constructor for single-field rejections
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Field {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Errors raised by store backends
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("store backend failure: {0}")]
    Backend(String),
}

impl From<anyhow::Error> for VitrineError {
    fn from(err: anyhow::Error) -> Self {
        VitrineError::Storage(StorageError::Backend(err.to_string()))
    }
}

/// Error response body for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Stable error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (per-field validation messages)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl VitrineError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            VitrineError::Vehicle(VehicleError::NotFound { .. }) => StatusCode::NOT_FOUND,
            VitrineError::Contact(ContactError::NotFound { .. }) => StatusCode::NOT_FOUND,
            VitrineError::Settings(SettingsError::Unavailable) => StatusCode::SERVICE_UNAVAILABLE,
            VitrineError::Validation(_) => StatusCode::BAD_REQUEST,
            VitrineError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            VitrineError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            VitrineError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the stable error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            VitrineError::Vehicle(VehicleError::NotFound { .. }) => "VEHICLE_NOT_FOUND",
            VitrineError::Contact(ContactError::NotFound { .. }) => "CONTACT_NOT_FOUND",
            VitrineError::Settings(SettingsError::Unavailable) => "SETTINGS_UNAVAILABLE",
            VitrineError::Validation(ValidationError::UnknownSortField(_)) => "UNKNOWN_SORT_FIELD",
            VitrineError::Validation(ValidationError::UnknownSortDirection(_)) => {
                "UNKNOWN_SORT_DIRECTION"
            }
            VitrineError::Validation(ValidationError::UnknownStatusFilter(_)) => {
                "UNKNOWN_STATUS_FILTER"
            }
            VitrineError::Validation(_) => "VALIDATION_ERROR",
            VitrineError::Config(_) => "CONFIG_ERROR",
            VitrineError::Storage(_) => "STORAGE_ERROR",
            VitrineError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to an error response body
    pub fn to_response(&self) -> ErrorResponse {
        let details = match self {
            VitrineError::Validation(ValidationError::Payload(errors)) => {
                serde_json::to_value(errors).ok()
            }
            _ => None,
        };

        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details,
        }
    }
}

impl IntoResponse for VitrineError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(code = self.error_code(), error = %self, "request failed");
        }
        (status, Json(self.to_response())).into_response()
    }
}
