//! # Catalog Module
//!
//! The denomination catalog: the fixed set of crystal bundles a player can
//! buy, and constructors for the standard storefront catalog.
//!
//! ## Catalog Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Catalog Per Planning Call                          │
//! │                                                                         │
//! │  Caller input (currency prices + "bonus already used" flags)           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  standard_catalog(...) ──► Vec<Bundle>  (snapshot)                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  plan_purchase(...) clones the snapshot; first-bonus flags mutate      │
//! │  ONLY inside that clone. Nothing survives the call.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Bundles carry currency-specific prices in integer cents; the same shape
//! serves every storefront currency because only the price column varies.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Bundle
// =============================================================================

/// One purchasable crystal bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Bundle {
    /// Display name shown in the plan table.
    pub name: String,

    /// Base crystal amount granted by every purchase.
    pub crystals: u64,

    /// Extra crystals granted on repeat purchases (not the first).
    pub bonus: u64,

    /// Whether the one-time first-purchase bonus (doubles `crystals`) is
    /// still available. Flips to `false` the first time the bundle is chosen
    /// within a planning run and never flips back inside that run.
    pub first_bonus: bool,

    /// Price in cents of the storefront currency.
    pub price_cents: i64,
}

impl Bundle {
    /// Creates a bundle with the first-purchase bonus still available.
    pub fn new(crystals: u64, bonus: u64, price_cents: i64) -> Self {
        Bundle {
            name: format!("{crystals} crystals"),
            crystals,
            bonus,
            first_bonus: true,
            price_cents,
        }
    }

    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Standard Catalog
// =============================================================================

/// The six standard storefront bundles as `(base crystals, repeat bonus)`.
///
/// The repeat bonus is what the store grants once the doubled first purchase
/// has been consumed.
pub const STANDARD_BUNDLES: [(u64, u64); 6] = [
    (60, 0),
    (300, 30),
    (980, 110),
    (1980, 260),
    (3280, 600),
    (6480, 1600),
];

/// USD reference prices for [`STANDARD_BUNDLES`], in cents.
pub const STANDARD_PRICES_USD_CENTS: [i64; 6] = [99, 499, 1499, 2999, 4999, 9999];

/// Builds the standard six-bundle catalog with currency-specific prices and
/// per-bundle first-bonus availability.
///
/// `first_bonus[i] = false` represents "this account already used the first
/// purchase bonus of bundle i".
///
/// ## Example
/// ```rust
/// use planner_core::catalog::{standard_catalog, STANDARD_PRICES_USD_CENTS};
///
/// let catalog = standard_catalog(STANDARD_PRICES_USD_CENTS, [true; 6]);
/// assert_eq!(catalog.len(), 6);
/// assert_eq!(catalog[5].crystals, 6480);
/// assert_eq!(catalog[5].bonus, 1600);
/// ```
pub fn standard_catalog(prices_cents: [i64; 6], first_bonus: [bool; 6]) -> Vec<Bundle> {
    STANDARD_BUNDLES
        .iter()
        .zip(prices_cents)
        .zip(first_bonus)
        .map(|((&(crystals, bonus), price_cents), available)| Bundle {
            first_bonus: available,
            ..Bundle::new(crystals, bonus, price_cents)
        })
        .collect()
}

/// Builds the standard catalog at USD prices with every first bonus available
/// (a fresh account at the start of a session).
pub fn standard_catalog_usd() -> Vec<Bundle> {
    standard_catalog(STANDARD_PRICES_USD_CENTS, [true; 6])
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_usd() {
        let catalog = standard_catalog_usd();
        assert_eq!(catalog.len(), 6);
        assert!(catalog.iter().all(|b| b.first_bonus));

        let smallest = &catalog[0];
        assert_eq!(smallest.crystals, 60);
        assert_eq!(smallest.bonus, 0);
        assert_eq!(smallest.price(), Money::from_cents(99));

        let largest = &catalog[5];
        assert_eq!(largest.crystals, 6480);
        assert_eq!(largest.bonus, 1600);
        assert_eq!(largest.price(), Money::from_cents(9999));
    }

    #[test]
    fn test_catalog_with_used_bonuses() {
        let mut used = [true; 6];
        used[0] = false;
        used[1] = false;

        let catalog = standard_catalog(STANDARD_PRICES_USD_CENTS, used);
        assert!(!catalog[0].first_bonus);
        assert!(!catalog[1].first_bonus);
        assert!(catalog[2].first_bonus);
    }

    #[test]
    fn test_bundle_name() {
        let bundle = Bundle::new(980, 110, 1499);
        assert_eq!(bundle.name, "980 crystals");
    }
}
