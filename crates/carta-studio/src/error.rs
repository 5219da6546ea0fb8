//! # API Error Type
//!
//! Unified error type for the command surface.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Carta Studio                           │
//! │                                                                         │
//! │  Frontend                     Rust Backend                              │
//! │  ────────                     ────────────                              │
//! │                                                                         │
//! │  dispatch('add_category')                                               │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Validation Error? ── ValidationError::Required ──┐              │  │
//! │  │         │                                         ▼              │  │
//! │  │  Missing id? ──────── CoreError::NotFound ────── ApiError ─────► │  │
//! │  │         │                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────► │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Serialization
//! The frontend receives a machine-readable `code` plus a human-readable
//! `message`, so it can branch on the code and display the message.

use serde::Serialize;
use thiserror::Error;
use ts_rs::TS;

use carta_core::{CoreError, ValidationError};

/// API error returned from commands.
///
/// ## Serialization
/// This is what the frontend receives when a command fails:
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Category not found: cat-404"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Error, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
#[error("{message}")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// The addressed category or item no longer exists
    NotFound,

    /// Input validation failed
    ValidationError,
}

impl ApiError {
    /// Builds a validation error with a display message.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError {
            code: ErrorCode::ValidationError,
            message: message.into(),
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let code = match err {
            CoreError::CategoryNotFound(_) | CoreError::ItemNotFound { .. } => ErrorCode::NotFound,
            CoreError::Validation(_) => ErrorCode::ValidationError,
        };
        ApiError {
            code,
            message: err.to_string(),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError {
            code: ErrorCode::ValidationError,
            message: err.to_string(),
        }
    }
}
