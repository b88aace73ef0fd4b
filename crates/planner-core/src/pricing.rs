//! # Pricing Module
//!
//! The yield model: how many crystals one purchase of a bundle actually
//! grants, and what one crystal costs for ranking purposes.
//!
//! ## Yield Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  First purchase:   yield = crystals × 2        (one-time double)        │
//! │  Repeat purchase:  yield = crystals + bonus    (smaller store bonus)    │
//! │                                                                         │
//! │  Example: 980 bundle, +110 repeat bonus                                 │
//! │    1st purchase → 1960 crystals                                         │
//! │    2nd purchase → 1090 crystals                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both functions are pure given the bundle's current `first_bonus` flag;
//! the planner recomputes them on every access so a flipped flag is visible
//! immediately (no cached yields anywhere).

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::Bundle;

// =============================================================================
// Pricing Mode
// =============================================================================

/// How the first-purchase bonus weighs into the per-crystal ranking key.
///
/// The production calculator divides a first-bonus bundle's price by
/// `effective_yield × 2` — on top of the doubling already inside
/// `effective_yield`. Whether that quadrupled denominator is an intentional
/// "count doubled crystals as worth double when ranking" heuristic is
/// unresolved, so both behaviors are available. [`Legacy`] reproduces the
/// observed ranking and is the default; [`Proportional`] is the plain
/// price-per-crystal contract.
///
/// [`Legacy`]: PricingMode::Legacy
/// [`Proportional`]: PricingMode::Proportional
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PricingMode {
    /// Observed behavior: first-bonus bundles divide by `effective_yield × 2`.
    Legacy,
    /// Plain contract: always `price / effective_yield`.
    Proportional,
}

impl Default for PricingMode {
    fn default() -> Self {
        PricingMode::Legacy
    }
}

// =============================================================================
// Yield Model
// =============================================================================

/// Crystals granted by one purchase of `bundle` right now.
#[inline]
pub fn effective_yield(bundle: &Bundle) -> u64 {
    if bundle.first_bonus {
        bundle.crystals * 2
    } else {
        bundle.crystals + bundle.bonus
    }
}

/// Cost of one crystal from `bundle`, used only as a sort key.
///
/// The returned ratio is transient: it is never stored, summed or shown,
/// so float precision cannot leak into plan totals.
#[inline]
pub fn unit_price(bundle: &Bundle, mode: PricingMode) -> f64 {
    let yield_f = effective_yield(bundle) as f64;
    let denominator = match mode {
        PricingMode::Legacy if bundle.first_bonus => yield_f * 2.0,
        _ => yield_f,
    };
    bundle.price_cents as f64 / denominator
}

// =============================================================================
// Unit Tests
// =============================================================================
