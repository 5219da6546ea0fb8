//! # Validation Module
//!
//! Input validation utilities for the editor's command layer.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend (TypeScript)                                        │
//! │  ├── Basic format checks (empty, length)                               │
//! │  └── Immediate operator feedback                                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Session Commands (Rust)                                      │
//! │  └── THIS MODULE: guard input before the store mutates                 │
//! │                                                                         │
//! │  The store itself stays total: it applies well-formed input and        │
//! │  reports unmatched ids; free-form guarding happens here.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Maximum quantity of a single item per cart entry.
///
/// Prevents accidental over-ordering (typing 100 instead of 10); the
/// stepper in the detail sheet stops here.
pub const MAX_ORDER_QUANTITY: i64 = 99;

/// Column counts the editor offers for category grids.
pub const MIN_COLUMNS: u8 = 1;
pub const MAX_COLUMNS: u8 = 3;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a category name.
///
/// ## Rules
/// - Must not be blank after trimming (the editor drops blank submissions;
///   the command layer rejects them with a typed error)
/// - Must be at most 80 characters
///
/// ## Returns
/// The trimmed name.
pub fn validate_category_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "category name".to_string(),
        });
    }

    if name.len() > 80 {
        return Err(ValidationError::TooLong {
            field: "category name".to_string(),
            max: 80,
        });
    }

    Ok(name.to_string())
}

/// Validates a CSS hex color from the theme editor (`#rgb` or `#rrggbb`).
pub fn validate_hex_color(value: &str) -> ValidationResult<()> {
    let digits = value.strip_prefix('#').unwrap_or("");

    let well_formed = matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit());
    if !well_formed {
        return Err(ValidationError::InvalidFormat {
            field: "color".to_string(),
            reason: "must be a hex color like #f97316".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates an order quantity.
///
/// ## Rules
/// - Must be positive (>= 1)
/// - Must not exceed MAX_ORDER_QUANTITY
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ORDER_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ORDER_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a grid column count (global default or per-category override).
pub fn validate_columns(columns: u8) -> ValidationResult<()> {
    if !(MIN_COLUMNS..=MAX_COLUMNS).contains(&columns) {
        return Err(ValidationError::OutOfRange {
            field: "columns".to_string(),
            min: MIN_COLUMNS as i64,
            max: MAX_COLUMNS as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
