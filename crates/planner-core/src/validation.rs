//! # Validation Module
//!
//! Input validation for planning calls.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend (TypeScript)                                        │
//! │  ├── Basic format checks (empty field, not a number)                   │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Budget/target sanity (finite, non-negative)                       │
//! │  └── Catalog/tier sanity (termination guarantees)                      │
//! │                                                                         │
//! │  Every planning entry point validates BEFORE any allocation step,     │
//! │  so a failed call never produces a partial plan.                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Degenerate-but-valid inputs are deliberately NOT errors here: a zero
//! budget, a catalog nobody can afford, or a zero experience gap are valid
//! planning outcomes (empty plans), not faults.

use crate::catalog::Bundle;
use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Goal Validators
// =============================================================================

/// Validates a money budget.
///
/// ## Rules
/// - Must not be negative
/// - Zero is allowed (yields an empty plan)
///
/// Non-finite float input never reaches this point: it is rejected by
/// [`Money::try_from_major`] at the form boundary.
pub fn validate_budget(budget: Money) -> ValidationResult<()> {
    if budget.is_negative() {
        return Err(ValidationError::Negative {
            field: "budget".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Catalog Validators
// =============================================================================

/// Validates a purchase catalog.
///
/// ## Rules
/// - Every bundle must grant at least one crystal (target-mode progress)
/// - Every bundle must cost at least one cent (budget-mode progress)
/// - An empty catalog is allowed and plans to an empty result
pub fn validate_catalog(catalog: &[Bundle]) -> ValidationResult<()> {
    for bundle in catalog {
        if bundle.crystals == 0 {
            return Err(ValidationError::MustBePositive {
                field: "bundle value".to_string(),
            });
        }
        if bundle.price_cents <= 0 {
            return Err(ValidationError::MustBePositive {
                field: "bundle price".to_string(),
            });
        }
    }

    Ok(())
}

// =============================================================================
// Material Tier Validators
// =============================================================================

/// Validates material tier values for the cover search.
///
/// ## Rules
/// - At least one tier (the search seeds from `values[0]`)
/// - Every value positive (ceil division needs a non-zero divisor)
/// - Strictly descending (the shift-down-a-tier exploration assumes it)
pub fn validate_tiers(values: &[u64]) -> ValidationResult<()> {
    if values.is_empty() {
        return Err(ValidationError::Empty {
            field: "material values".to_string(),
        });
    }

    if values.contains(&0) {
        return Err(ValidationError::MustBePositive {
            field: "material value".to_string(),
        });
    }

    if values.windows(2).any(|pair| pair[0] <= pair[1]) {
        return Err(ValidationError::NotDescending);
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
