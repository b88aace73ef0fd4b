//! # Error Types
//!
//! Domain-specific error types for planner-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  planner-core errors (this file)                                       │
//! │  ├── PlanError        - Stable error surface of the engine             │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  Host application errors (out of scope)                                │
//! │  └── ApiError         - What the frontend sees (serialized)            │
//! │                                                                         │
//! │  Flow: ValidationError → PlanError → ApiError → Frontend               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, offending value)
//! 3. Errors are enum variants, never String
//! 4. Every error is caused by caller input and is fatal to that call only —
//!    the engine holds no shared state, so nothing needs rollback
//!
//! There are no retryable failures: degenerate-but-valid inputs (zero budget,
//! nothing affordable, zero gap) return empty plans, not errors.

use thiserror::Error;

// =============================================================================
// Plan Error
// =============================================================================

/// The stable error type returned by every planning entry point.
///
/// Today all failures are input failures; the wrapper keeps the public
/// surface stable if domain-level variants are added later (e.g. per-currency
/// catalog lookup in the host).
#[derive(Debug, Error)]
pub enum PlanError {
    /// Caller input failed validation before any allocation step ran.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when caller input doesn't meet requirements. Validation runs
/// synchronously before any allocation step, so a plan is never partially
/// computed when one of these is returned.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A float amount from the form boundary was NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },

    /// A money amount or target was negative.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// A value that drives loop progress was zero or below.
    ///
    /// ## Why this is load-bearing
    /// A bundle with zero price would be "affordable" forever in budget mode,
    /// and a bundle with zero value could never reduce a target — either way
    /// the greedy loop could not terminate.
    #[error("{field} must be greater than zero")]
    MustBePositive { field: String },

    /// A collection that requires at least one entry was empty.
    #[error("{field} must contain at least one entry")]
    Empty { field: String },

    /// Material tier values were not strictly descending.
    #[error("material values must be sorted from largest to smallest")]
    NotDescending,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with PlanError.
pub type PlanResult<T> = Result<T, PlanError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::NotFinite {
            field: "budget".to_string(),
        };
        assert_eq!(err.to_string(), "budget must be a finite number");

        let err = ValidationError::MustBePositive {
            field: "bundle price".to_string(),
        };
        assert_eq!(err.to_string(), "bundle price must be greater than zero");
    }

    #[test]
    fn test_validation_converts_to_plan_error() {
        let validation_err = ValidationError::Empty {
            field: "material values".to_string(),
        };
        let plan_err: PlanError = validation_err.into();
        assert!(matches!(plan_err, PlanError::Validation(_)));
        assert_eq!(
            plan_err.to_string(),
            "Validation error: material values must contain at least one entry"
        );
    }
}
