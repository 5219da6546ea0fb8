//! # Price Module
//!
//! Provides the `Money` type plus the two conversions between operator-entered
//! price text and monetary values.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A menu total is (base + modifiers) × quantity, summed per cart entry.  │
//! │  Accumulating that in floats drifts; accumulating cents never does.     │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    "$12.50" parses to 1250, formats back to "$12.50", exactly          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Price text
//! Item prices are stored on the model as the operator typed them
//! (`"$12.00"`). [`parse_price`] converts that free text to `Money` at
//! computation time; it never fails: junk degrades to zero, which the
//! editor surfaces as a `$0.00` preview rather than an error.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: modifier options may carry negative surcharges
///   (discount-style options), so totals can dip below zero
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Derives**: full serde support for JSON serialization
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS, Default,
)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use carta_core::price::Money;
    ///
    /// let unit_price = Money::from_cents(1250); // $12.50
    /// assert_eq!(unit_price.multiply_quantity(2).cents(), 2500);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Display renders the same string [`format_price`] produces.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_price(*self))
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by i64 (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Summing an iterator of Money values.
impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Price Text Conversions
// =============================================================================

/// Parses operator-entered price text into `Money`.
///
/// Strips every character that is not a digit or decimal point, parses the
/// remainder as a decimal number, and rounds to the nearest cent. Anything
/// that does not parse to a finite number (empty string, stray symbols,
/// multiple decimal points) degrades to `Money::zero()`: free-text price
/// entry must never fail.
///
/// Note the stripping removes minus signs too: parsed prices are always
/// non-negative, matching the editor's single-currency dollar assumption.
///
/// ## Example
/// ```rust
/// use carta_core::price::{parse_price, Money};
///
/// assert_eq!(parse_price("$12.50"), Money::from_cents(1250));
/// assert_eq!(parse_price("about 9 dollars"), Money::from_cents(900));
/// assert_eq!(parse_price("n/a"), Money::zero());
/// ```
pub fn parse_price(text: &str) -> Money {
    let digits: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    match digits.parse::<f64>() {
        Ok(value) if value.is_finite() => Money::from_cents((value * 100.0).round() as i64),
        _ => Money::zero(),
    }
}

/// Formats a monetary amount as display text with exactly two decimals.
///
/// Negative amounts render with the minus inside the dollar sign
/// (`"$-1.00"`), matching what the preview shows when discount-style
/// modifiers push a total below zero. Totals are deliberately not clamped.
pub fn format_price(amount: Money) -> String {
    let sign = if amount.is_negative() { "-" } else { "" };
    format!("${}{}.{:02}", sign, amount.dollars().abs(), amount.cents_part())
}

// =============================================================================
// Unit Tests
// =============================================================================
