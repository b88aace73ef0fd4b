//! # planner-core: Pure Allocation Engine for Wish Planner
//!
//! This crate is the **heart** of Wish Planner. It contains the one subsystem
//! of the content site with genuine algorithmic depth — discrete-denomination
//! resource allocation — as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Wish Planner Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (content site)                      │   │
//! │  │    Budget form ──► Plan table      Level form ──► Material list │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON                                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ planner-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │  pricing  │  │  planner  │  │   cover   │  │   │
//! │  │   │  Bundle   │  │  yields   │  │ purchases │  │ materials │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO STORAGE • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                                                         │
//! │  Form validation, rendering, localization, data fetching and           │
//! │  persistence are external collaborators and never appear here.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - Crystal bundles and the standard storefront catalog
//! - [`pricing`] - Yield model (first-purchase double, repeat bonus, ranking)
//! - [`planner`] - Purchase planning under a budget or wish target
//! - [`cover`] - Material cover search for experience gaps
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same catalog + goal always produces the same plan;
//!    the only mutation (first-bonus flags) is scoped to a private snapshot
//!    inside one call
//! 2. **No I/O**: network, storage and rendering are FORBIDDEN here
//! 3. **Integer Money**: budgets, prices and totals are cents (i64); floats
//!    exist only at the form boundary and as transient ranking ratios
//! 4. **Explicit Errors**: invalid input is a typed error before any
//!    allocation step, never a silent coercion to zero
//!
//! ## Example Usage
//!
//! ```rust
//! use planner_core::catalog::standard_catalog_usd;
//! use planner_core::cover::cover_gap;
//! use planner_core::money::Money;
//! use planner_core::planner::{plan_purchase, Goal};
//! use planner_core::EXP_BOOK_VALUES;
//!
//! // "What should I buy with $25?"
//! let catalog = standard_catalog_usd();
//! let budget = Money::try_from_major(25.0).unwrap();
//! let plan = plan_purchase(&catalog, Goal::Budget(budget)).unwrap();
//! assert!(plan.total_cost() <= budget);
//!
//! // "How many books close a 23000 experience gap?"
//! let materials = cover_gap(&EXP_BOOK_VALUES, 23_000).unwrap();
//! assert_eq!(materials.leftover, 0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod cover;
pub mod error;
pub mod money;
pub mod planner;
pub mod pricing;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use planner_core::Money` instead of
// `use planner_core::money::Money`

pub use catalog::{standard_catalog, standard_catalog_usd, Bundle};
pub use cover::{cover_gap, CoverPlan};
pub use error::{PlanError, PlanResult, ValidationError};
pub use money::Money;
pub use planner::{plan_purchase, plan_purchase_with, Goal, PurchasePlan, TieBreak};
pub use pricing::{effective_yield, unit_price, PricingMode};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Crystals consumed by one wish.
///
/// Target-mode goals are expressed in wishes; [`Goal::for_wishes`] multiplies
/// by this constant.
pub const CRYSTALS_PER_WISH: u64 = 160;

/// Experience granted by one unit of each material tier, largest first.
///
/// ## Why these values?
/// The three storefront experience books are fixed at 20000/5000/1000, and
/// the cover search's bounded exploration leans on them being few and widely
/// separated (see [`cover`]).
pub const EXP_BOOK_VALUES: [u64; 3] = [20_000, 5_000, 1_000];
