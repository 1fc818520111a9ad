// ABOUTME: Unified error types with standard error codes for the planning engine
// ABOUTME: AppError carries a code, message, field context, and optional source
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

//! # Unified Error Handling System
//!
//! Centralized error handling for Fitplan. Every fallible public operation
//! returns [`AppResult`]. Model-layer failures never surface here: they are
//! absorbed into stub substitutions by the model registry, so an `AppError`
//! always means a caller contract violation or an I/O problem at the edges.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Input failed a structural or semantic check
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// A required field was absent
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField = 3001,
    /// The data could not be parsed in the expected format
    #[serde(rename = "INVALID_FORMAT")]
    InvalidFormat = 3002,
    /// A numeric field fell outside its declared range
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3003,

    // Configuration (6000-6999)
    /// Generic configuration failure
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError = 6000,
    /// Configuration values are present but invalid
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// Filesystem read or write failed
    #[serde(rename = "STORAGE_ERROR")]
    StorageError = 9002,
    /// JSON serialization or deserialization failed
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Process exit status used by the CLI for this error class
    #[must_use]
    pub const fn exit_status(self) -> i32 {
        match self {
            Self::InvalidInput
            | Self::MissingRequiredField
            | Self::InvalidFormat
            | Self::ValueOutOfRange => 2,
            Self::ConfigError | Self::ConfigInvalid => 3,
            Self::InternalError | Self::StorageError | Self::SerializationError => 1,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingRequiredField => "A required field is missing",
            Self::InvalidFormat => "The data format is invalid",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::ConfigError => "Configuration error encountered",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal error occurred",
            Self::StorageError => "Storage operation failed",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }
}

/// Additional context that can be attached to errors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorContext {
    /// Name of the offending input field, if any
    pub field: Option<String>,
    /// Additional key-value context
    pub details: serde_json::Value,
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self {
            field: None,
            details: serde_json::Value::Object(serde_json::Map::new()),
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Additional context
    pub context: ErrorContext,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: ErrorContext::default(),
            source: None,
        }
    }

    /// Attach the name of the offending field
    #[must_use]
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.context.field = Some(field.into());
        self
    }

    /// Add details to the error context
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.context.details = details;
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Name of the offending field, when the error concerns one
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        self.context.field.as_deref()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Convenience functions for creating common errors
impl AppError {
    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// A numeric field violated its declared range
    pub fn out_of_range(field: &str, constraint: impl Into<String>) -> Self {
        let constraint = constraint.into();
        Self::new(
            ErrorCode::ValueOutOfRange,
            format!("{field} must be {constraint}"),
        )
        .with_field(field)
        .with_details(serde_json::json!({ "constraint": constraint }))
    }

    /// A required field was absent or empty
    pub fn missing_field(field: &str) -> Self {
        Self::new(
            ErrorCode::MissingRequiredField,
            format!("{field} is required"),
        )
        .with_field(field)
    }

    /// Input JSON that failed to deserialize; an absent field is reported by name
    pub fn invalid_json(origin: &str, error: serde_json::Error) -> Self {
        let message = error.to_string();
        let app_error = message
            .strip_prefix("missing field `")
            .and_then(|rest| rest.split_once('`'))
            .map_or_else(
                || {
                    Self::new(
                        ErrorCode::InvalidFormat,
                        format!("invalid JSON in {origin}: {message}"),
                    )
                },
                |(field, _)| Self::missing_field(field),
            );
        app_error.with_source(error)
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }

    /// Storage (filesystem) error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }

    /// Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::serialization(error.to_string()).with_source(error)
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::storage(error.to_string()).with_source(error)
    }
}

/// Conversion from `anyhow::Error` to `AppError`
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        match error.chain().nth(1) {
            Some(source) => Self::internal(error.to_string()).with_details(serde_json::json!({
                "source": source.to_string()
            })),
            None => Self::internal(error.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_names_field() {
        let error = AppError::out_of_range("age", "between 16 and 80");

        assert_eq!(error.code, ErrorCode::ValueOutOfRange);
        assert_eq!(error.field(), Some("age"));
        assert!(error.to_string().contains("age must be between 16 and 80"));
    }

    #[derive(Debug, Deserialize)]
    struct Sample {
        age: u32,
    }

    #[test]
    fn test_absent_json_field_is_named() {
        assert_eq!(serde_json::from_str::<Sample>("{\"age\": 30}").unwrap().age, 30);

        let error = serde_json::from_str::<Sample>("{}").unwrap_err();
        let error = AppError::invalid_json("profile.json", error);

        assert_eq!(error.code, ErrorCode::MissingRequiredField);
        assert_eq!(error.field(), Some("age"));
        assert_eq!(error.code.exit_status(), 2);
    }

    #[test]
    fn test_malformed_json_is_invalid_format() {
        let error = serde_json::from_str::<Sample>("{ \"age\": ").unwrap_err();
        let error = AppError::invalid_json("profile.json", error);

        assert_eq!(error.code, ErrorCode::InvalidFormat);
        assert!(error.message.contains("profile.json"));
        assert!(error.field().is_none());
    }

    #[test]
    fn test_exit_status_groups() {
        assert_eq!(ErrorCode::ValueOutOfRange.exit_status(), 2);
        assert_eq!(ErrorCode::ConfigInvalid.exit_status(), 3);
        assert_eq!(ErrorCode::StorageError.exit_status(), 1);
    }

    #[test]
    fn test_error_code_serializes_screaming_case() {
        let json = serde_json::to_string(&ErrorCode::MissingRequiredField).unwrap();
        assert_eq!(json, "\"MISSING_REQUIRED_FIELD\"");
    }
}
