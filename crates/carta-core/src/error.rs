//! # Error Types
//!
//! Domain-specific error types for carta-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  carta-core errors (this file)                                         │
//! │  ├── CoreError        - Store operations addressed to missing ids      │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  carta-studio errors (session crate)                                   │
//! │  └── ApiError         - What the frontend sees (serialized)            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Frontend               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Permissive by contract, reportable by type
//! The editor's mutation surface is deliberately forgiving: an operation
//! addressed to an id that no longer exists leaves the configuration
//! untouched. The typed error exists so callers CAN tell "applied" from
//! "ignored"; the session layer logs the miss and moves on rather than
//! surfacing a crash.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (category id, item id, etc.)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A store operation addressed a category id that is not in the tree.
    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    /// A store operation addressed an item id that is not in the named
    /// category (or the category itself is missing).
    #[error("Item not found: {item_id} in category {category_id}")]
    ItemNotFound {
        category_id: String,
        item_id: String,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when operator input doesn't meet requirements, before any
/// store mutation runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., not a hex color).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::CategoryNotFound("cat-404".to_string());
        assert_eq!(err.to_string(), "Category not found: cat-404");

        let err = CoreError::ItemNotFound {
            category_id: "mains".to_string(),
            item_id: "item-404".to_string(),
        };
        assert_eq!(err.to_string(), "Item not found: item-404 in category mains");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
