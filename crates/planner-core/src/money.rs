//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A purchase plan that buys the $0.99 bundle five times must cost        │
//! │  exactly $4.95 — not $4.950000000000001 — or the "can I afford one     │
//! │  more?" check drifts.                                                   │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    All budgets, prices and plan totals are i64 cents. Floats exist     │
//! │    only at the form boundary and as transient ranking ratios.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use planner_core::money::Money;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(99); // $0.99
//!
//! // The ONE sanctioned float entry point, for form input:
//! let budget = Money::try_from_major(25.00).unwrap();
//! assert_eq!(budget.cents(), 2500);
//!
//! // NaN, infinity and negative amounts are rejected, never coerced to zero
//! assert!(Money::try_from_major(f64::NAN).is_err());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use ts_rs::TS;

use crate::error::ValidationError;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: subtraction of a price from a remaining budget must be
///   able to express "short by N cents" during comparisons
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Derives**: full serde/TS support, total ordering for budget checks
///
/// Every affordability check in the purchase planner is `remaining >= price`
/// on this type; no float ever participates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use planner_core::money::Money;
    ///
    /// let price = Money::from_cents(1499); // $14.99
    /// assert_eq!(price.cents(), 1499);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from a float amount in major units (dollars).
    ///
    /// This is the single sanctioned float entry point, for amounts typed
    /// into the budget form. The amount is rounded to whole cents.
    ///
    /// ## Errors
    /// - [`ValidationError::NotFinite`] for NaN or ±∞
    /// - [`ValidationError::Negative`] for amounts below zero
    ///
    /// ## Example
    /// ```rust
    /// use planner_core::money::Money;
    ///
    /// assert_eq!(Money::try_from_major(0.99).unwrap().cents(), 99);
    /// assert!(Money::try_from_major(-1.0).is_err());
    /// assert!(Money::try_from_major(f64::INFINITY).is_err());
    /// ```
    pub fn try_from_major(amount: f64) -> Result<Self, ValidationError> {
        if !amount.is_finite() {
            return Err(ValidationError::NotFinite {
                field: "amount".to_string(),
            });
        }
        if amount < 0.0 {
            return Err(ValidationError::Negative {
                field: "amount".to_string(),
            });
        }
        Ok(Money((amount * 100.0).round() as i64))
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn minor(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
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

    /// Multiplies money by a quantity (line totals in plan summaries).
    ///
    /// ## Example
    /// ```rust
    /// use planner_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(99);
    /// assert_eq!(unit_price.multiply_quantity(5).cents(), 495);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging and log events. The frontend formats amounts itself
/// to handle localization and non-USD currencies properly.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, self.major().abs(), self.minor())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
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

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1499);
        assert_eq!(money.cents(), 1499);
        assert_eq!(money.major(), 14);
        assert_eq!(money.minor(), 99);
    }

    #[test]
    fn test_try_from_major() {
        assert_eq!(Money::try_from_major(0.99).unwrap().cents(), 99);
        assert_eq!(Money::try_from_major(25.0).unwrap().cents(), 2500);
        assert_eq!(Money::try_from_major(0.0).unwrap().cents(), 0);
        // Rounds to the nearest cent
        assert_eq!(Money::try_from_major(1.005).unwrap().cents(), 100);
    }

    #[test]
    fn test_try_from_major_rejects_bad_input() {
        assert!(matches!(
            Money::try_from_major(f64::NAN),
            Err(ValidationError::NotFinite { .. })
        ));
        assert!(matches!(
            Money::try_from_major(f64::INFINITY),
            Err(ValidationError::NotFinite { .. })
        ));
        assert!(matches!(
            Money::try_from_major(-0.01),
            Err(ValidationError::Negative { .. })
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(99);

        assert_eq!((a + b).cents(), 1099);
        assert_eq!((a - b).cents(), 901);

        let mut remaining = a;
        remaining -= b;
        remaining -= b;
        assert_eq!(remaining.cents(), 802);
    }

    #[test]
    fn test_ordering_drives_affordability() {
        let remaining = Money::from_cents(101);
        let price = Money::from_cents(99);
        assert!(remaining >= price);
        assert!((remaining - price) < price);
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_cents(99);
        assert_eq!(unit_price.multiply_quantity(5).cents(), 495);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_negative());
        assert!(Money::from_cents(-1).is_negative());
        assert_eq!(Money::default(), Money::zero());
    }
}
