//! # Purchase Planner
//!
//! Decides which crystal bundles to buy, under a money budget or toward a
//! wish target, and returns the better of two greedy strategies.
//!
//! ## Why Two Strategies?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Neither greedy ordering dominates the other:                           │
//! │                                                                         │
//! │  UnitPriceAsc (cheapest crystal first)                                  │
//! │    └── can strand money on an unaffordable last step                   │
//! │                                                                         │
//! │  YieldDesc (biggest bundle first)                                       │
//! │    └── can overspend chasing first-purchase doubles                    │
//! │                                                                         │
//! │  So both run as candidate solutions and the larger total yield wins;   │
//! │  a tie keeps the UnitPriceAsc result.                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Greedy Loop
//! The working list is a queue of catalog indices sorted once by the chosen
//! strategy. While the queue is non-empty the front bundle is bought as long
//! as it fits (budget left, or yield not above the remaining target); when
//! it no longer fits it is dropped and never revisited. Yield and price are
//! recomputed from the bundle on every access, so a first-bonus flip is
//! visible to every later iteration.
//!
//! Target mode ends with a closest-match top-up: one unit of whichever
//! catalog bundle lands nearest the leftover target, even if it overshoots.

use std::cmp::Reverse;
use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::catalog::Bundle;
use crate::error::PlanResult;
use crate::money::Money;
use crate::pricing::{effective_yield, unit_price, PricingMode};
use crate::validation::{validate_budget, validate_catalog};
use crate::CRYSTALS_PER_WISH;

// =============================================================================
// Goal
// =============================================================================

/// What the plan optimizes for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    /// Maximize crystals obtained without spending more than this.
    Budget(Money),
    /// Reach at least this many crystals, minimizing the final overshoot.
    Target(u64),
}

impl Goal {
    /// Target goal for a number of wishes (one wish costs
    /// [`CRYSTALS_PER_WISH`] crystals).
    pub fn for_wishes(wishes: u64) -> Self {
        Goal::Target(wishes.saturating_mul(CRYSTALS_PER_WISH))
    }
}

// =============================================================================
// Tie-Break Strategy
// =============================================================================

/// The ordering heuristic that drives one greedy run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Cheapest crystal first (per-unit price ascending).
    UnitPriceAsc,
    /// Biggest bundle first (effective yield descending).
    YieldDesc,
}

// =============================================================================
// Purchase Plan
// =============================================================================

/// One catalog bundle and how many units of it the plan buys.
///
/// Uses the snapshot pattern: name and unit price are frozen copies so the
/// frontend can render the table without re-joining against the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PurchaseLine {
    /// Index of the bundle in the caller's catalog.
    pub bundle: usize,
    /// Bundle name at planning time (frozen).
    pub name: String,
    /// Unit price in cents at planning time (frozen).
    pub unit_price_cents: i64,
    /// Units bought.
    pub quantity: u32,
    /// Crystals these units grant (first purchase counted at its doubled
    /// yield, repeats at base + bonus).
    pub line_yield: u64,
    /// Total cost of these units in cents.
    pub line_cost_cents: i64,
}

/// The outcome of one planning call.
///
/// Immutable once returned; consumed by presentation code (tables, totals).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PurchasePlan {
    /// Bundles to buy, in catalog order. Bundles with zero quantity are
    /// omitted; an empty vector is a valid "nothing affordable" outcome.
    pub purchases: Vec<PurchaseLine>,
    /// Total crystals obtained.
    pub total_yield: u64,
    /// Total cost in cents. Never exceeds a budget goal.
    pub total_cost_cents: i64,
    /// The strategy that produced this plan.
    pub tie_break: TieBreak,
}

impl PurchasePlan {
    /// Returns the total cost as Money.
    #[inline]
    pub fn total_cost(&self) -> Money {
        Money::from_cents(self.total_cost_cents)
    }
}

// =============================================================================
// Public Entry Points
// =============================================================================

/// Plans purchases with both tie-break strategies and keeps the better run.
///
/// The run with the larger total yield wins; a tie keeps the
/// [`TieBreak::UnitPriceAsc`] result. Uses [`PricingMode::Legacy`] ranking,
/// matching the production calculator.
///
/// ## Example
/// ```rust
/// use planner_core::catalog::standard_catalog_usd;
/// use planner_core::money::Money;
/// use planner_core::planner::{plan_purchase, Goal};
///
/// let catalog = standard_catalog_usd();
/// let plan = plan_purchase(&catalog, Goal::Budget(Money::from_cents(2000))).unwrap();
/// assert!(plan.total_cost_cents <= 2000);
/// ```
pub fn plan_purchase(catalog: &[Bundle], goal: Goal) -> PlanResult<PurchasePlan> {
    let by_price = plan_purchase_with(catalog, goal, TieBreak::UnitPriceAsc, PricingMode::Legacy)?;
    let by_yield = plan_purchase_with(catalog, goal, TieBreak::YieldDesc, PricingMode::Legacy)?;

    let chosen = if by_yield.total_yield > by_price.total_yield {
        by_yield
    } else {
        by_price
    };
    debug!(
        tie_break = ?chosen.tie_break,
        total_yield = chosen.total_yield,
        total_cost_cents = chosen.total_cost_cents,
        "selected purchase plan"
    );
    Ok(chosen)
}

/// Plans purchases with a single tie-break strategy.
///
/// The catalog is cloned internally: first-bonus flags mutate only inside
/// this call, so planning is pure with respect to its inputs and running the
/// same inputs twice returns the same plan.
pub fn plan_purchase_with(
    catalog: &[Bundle],
    goal: Goal,
    tie_break: TieBreak,
    pricing: PricingMode,
) -> PlanResult<PurchasePlan> {
    validate_catalog(catalog)?;
    if let Goal::Budget(budget) = goal {
        validate_budget(budget)?;
    }

    // Private snapshot; flag flips stay scoped to this run.
    let mut bundles = catalog.to_vec();

    // Working list of catalog indices, sorted once by the strategy key
    // computed on the initial flag state. Yield/price are NOT cached here:
    // every later access reads the live bundle.
    let mut order: Vec<usize> = (0..bundles.len()).collect();
    match tie_break {
        TieBreak::UnitPriceAsc => order.sort_by(|&a, &b| {
            unit_price(&bundles[a], pricing).total_cmp(&unit_price(&bundles[b], pricing))
        }),
        TieBreak::YieldDesc => order.sort_by_key(|&i| Reverse(effective_yield(&bundles[i]))),
    }
    let mut queue: VecDeque<usize> = order.into();

    let mut quantities = vec![0u32; bundles.len()];
    let mut line_yields = vec![0u64; bundles.len()];
    let mut total_yield: u64 = 0;
    let mut total_cost = Money::zero();

    // Records one purchase of bundle `i` against the run accumulators.
    fn buy(
        i: usize,
        bundles: &mut [Bundle],
        quantities: &mut [u32],
        line_yields: &mut [u64],
        total_yield: &mut u64,
        total_cost: &mut Money,
    ) -> u64 {
        let granted = effective_yield(&bundles[i]);
        quantities[i] += 1;
        line_yields[i] += granted;
        *total_yield += granted;
        *total_cost += bundles[i].price();
        // One-time bonus is consumed for the remainder of this run.
        bundles[i].first_bonus = false;
        granted
    }

    match goal {
        Goal::Budget(budget) => {
            let mut remaining = budget;
            while let Some(&i) = queue.front() {
                if remaining >= bundles[i].price() {
                    remaining -= bundles[i].price();
                    buy(
                        i,
                        &mut bundles,
                        &mut quantities,
                        &mut line_yields,
                        &mut total_yield,
                        &mut total_cost,
                    );
                } else {
                    // Unaffordable fronts are dropped and never revisited.
                    queue.pop_front();
                }
            }
        }
        Goal::Target(target) => {
            let mut remaining = target;
            while let Some(&i) = queue.front() {
                let granted = effective_yield(&bundles[i]);
                if granted <= remaining {
                    remaining -= granted;
                    buy(
                        i,
                        &mut bundles,
                        &mut quantities,
                        &mut line_yields,
                        &mut total_yield,
                        &mut total_cost,
                    );
                } else {
                    queue.pop_front();
                }
            }

            // Closest-match top-up: every bundle still yields more than the
            // leftover target, so add the one unit that lands nearest it,
            // overshoot included. Scans the full catalog, dropped entries too.
            if remaining > 0 {
                let nearest = bundles
                    .iter()
                    .enumerate()
                    .min_by_key(|(_, b)| effective_yield(b).abs_diff(remaining))
                    .map(|(i, _)| i);
                if let Some(i) = nearest {
                    let granted = buy(
                        i,
                        &mut bundles,
                        &mut quantities,
                        &mut line_yields,
                        &mut total_yield,
                        &mut total_cost,
                    );
                    debug!(bundle = i, granted, remaining, "target top-up");
                }
            }
        }
    }

    let purchases = quantities
        .iter()
        .enumerate()
        .filter(|(_, &qty)| qty > 0)
        .map(|(i, &quantity)| PurchaseLine {
            bundle: i,
            name: catalog[i].name.clone(),
            unit_price_cents: catalog[i].price_cents,
            quantity,
            line_yield: line_yields[i],
            line_cost_cents: catalog[i].price_cents * i64::from(quantity),
        })
        .collect();

    let plan = PurchasePlan {
        purchases,
        total_yield,
        total_cost_cents: total_cost.cents(),
        tie_break,
    };
    debug!(
        ?tie_break,
        total_yield = plan.total_yield,
        total_cost_cents = plan.total_cost_cents,
        "purchase plan candidate"
    );
    Ok(plan)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{standard_catalog, standard_catalog_usd, STANDARD_PRICES_USD_CENTS};

    /// A first purchase doubles the 60 bundle to 120; the second, with the
    /// bonus consumed, still fits the $2.00 budget and grants the base 60.
    #[test]
    fn test_budget_consumes_first_bonus_once() {
        let catalog = vec![Bundle::new(60, 0, 99)];
        let plan = plan_purchase(&catalog, Goal::Budget(Money::from_cents(200))).unwrap();

        assert_eq!(plan.total_yield, 180);
        assert_eq!(plan.total_cost_cents, 198);
        assert_eq!(plan.purchases.len(), 1);
        assert_eq!(plan.purchases[0].quantity, 2);
        assert_eq!(plan.purchases[0].line_yield, 180);
    }

    #[test]
    fn test_budget_is_never_exceeded() {
        let catalog = standard_catalog_usd();
        for budget_cents in [0, 98, 99, 500, 1234, 4999, 10_000, 25_000] {
            let plan = plan_purchase(&catalog, Goal::Budget(Money::from_cents(budget_cents)))
                .unwrap();
            assert!(
                plan.total_cost_cents <= budget_cents,
                "budget {budget_cents} exceeded: {}",
                plan.total_cost_cents
            );
        }
    }

    /// $5.00: cheapest-crystal-first burns the budget on five 60 bundles
    /// (360 crystals), biggest-first lands the 300 bundle's double (600).
    /// The dual-strategy comparison must keep the latter.
    #[test]
    fn test_strategies_disagree_and_better_yield_wins() {
        let catalog = standard_catalog_usd();
        let budget = Goal::Budget(Money::from_cents(500));

        let by_price =
            plan_purchase_with(&catalog, budget, TieBreak::UnitPriceAsc, PricingMode::Legacy)
                .unwrap();
        let by_yield =
            plan_purchase_with(&catalog, budget, TieBreak::YieldDesc, PricingMode::Legacy)
                .unwrap();
        assert_eq!(by_price.total_yield, 360);
        assert_eq!(by_yield.total_yield, 600);

        let best = plan_purchase(&catalog, budget).unwrap();
        assert_eq!(best.tie_break, TieBreak::YieldDesc);
        assert_eq!(best.total_yield, 600);
        assert_eq!(best.total_cost_cents, 499);
    }

    #[test]
    fn test_yield_tie_keeps_unit_price_result() {
        // Single bundle: both strategies produce identical plans.
        let catalog = vec![Bundle::new(60, 0, 99)];
        let plan = plan_purchase(&catalog, Goal::Budget(Money::from_cents(99))).unwrap();
        assert_eq!(plan.tie_break, TieBreak::UnitPriceAsc);
    }

    #[test]
    fn test_empty_and_unaffordable_catalogs_plan_to_nothing() {
        let empty = plan_purchase(&[], Goal::Budget(Money::from_cents(10_000))).unwrap();
        assert!(empty.purchases.is_empty());
        assert_eq!(empty.total_yield, 0);
        assert_eq!(empty.total_cost_cents, 0);

        // Budget below the cheapest bundle: valid outcome, not an error.
        let catalog = standard_catalog_usd();
        let broke = plan_purchase(&catalog, Goal::Budget(Money::from_cents(98))).unwrap();
        assert!(broke.purchases.is_empty());
        assert_eq!(broke.total_yield, 0);
    }

    #[test]
    fn test_negative_budget_is_rejected() {
        let catalog = standard_catalog_usd();
        assert!(plan_purchase(&catalog, Goal::Budget(Money::from_cents(-1))).is_err());
    }

    #[test]
    fn test_invalid_catalog_is_rejected() {
        let free = vec![Bundle::new(60, 0, 0)];
        assert!(plan_purchase(&free, Goal::Budget(Money::from_cents(100))).is_err());

        let worthless = vec![Bundle::new(0, 0, 99)];
        assert!(plan_purchase(&worthless, Goal::Target(160)).is_err());
    }

    /// One wish (160 crystals) against the standard catalog: no bundle
    /// yields exactly 160, so the run must terminate via the top-up and
    /// cover the target.
    #[test]
    fn test_one_wish_terminates_via_top_up() {
        let catalog = standard_catalog_usd();
        let plan = plan_purchase(&catalog, Goal::for_wishes(1)).unwrap();

        // Loop buys the 60 bundle's double (120), leaving 40; the top-up
        // adds a second 60 bundle at its base yield.
        assert_eq!(plan.total_yield, 180);
        assert!(plan.total_yield >= 160);
        assert_eq!(plan.total_cost_cents, 198);
        assert_eq!(plan.purchases.len(), 1);
        assert_eq!(plan.purchases[0].bundle, 0);
        assert_eq!(plan.purchases[0].quantity, 2);
    }

    #[test]
    fn test_target_mode_always_covers_the_target() {
        let catalog = standard_catalog_usd();
        for target in [1, 160, 500, 1600, 5000, 12_960, 20_000] {
            let plan = plan_purchase(&catalog, Goal::Target(target)).unwrap();
            assert!(
                plan.total_yield >= target,
                "target {target} not covered: {}",
                plan.total_yield
            );
        }
    }

    #[test]
    fn test_zero_target_plans_to_nothing() {
        let catalog = standard_catalog_usd();
        let plan = plan_purchase(&catalog, Goal::Target(0)).unwrap();
        assert!(plan.purchases.is_empty());
        assert_eq!(plan.total_yield, 0);
    }

    #[test]
    fn test_already_used_bonuses_are_respected() {
        // All first bonuses spent: the 60 bundle yields 60, never 120.
        let catalog = standard_catalog(STANDARD_PRICES_USD_CENTS, [false; 6]);
        let plan = plan_purchase(&catalog, Goal::Budget(Money::from_cents(200))).unwrap();
        assert_eq!(plan.total_yield, 120); // two repeat purchases of 60
        assert_eq!(plan.purchases[0].quantity, 2);
    }

    #[test]
    fn test_planning_is_idempotent() {
        let catalog = standard_catalog_usd();
        let goal = Goal::Budget(Money::from_cents(12_345));
        let first = plan_purchase(&catalog, goal).unwrap();
        let second = plan_purchase(&catalog, goal).unwrap();
        assert_eq!(first, second);

        // The caller's catalog is untouched: flags still set.
        assert!(catalog.iter().all(|b| b.first_bonus));
    }

    #[test]
    fn test_plan_serializes_for_the_frontend() {
        let catalog = vec![Bundle::new(60, 0, 99)];
        let plan = plan_purchase(&catalog, Goal::Budget(Money::from_cents(99))).unwrap();
        let json = serde_json::to_value(&plan).unwrap();

        assert_eq!(json["total_yield"], 120);
        assert_eq!(json["total_cost_cents"], 99);
        assert_eq!(json["tie_break"], "unit_price_asc");
        assert_eq!(json["purchases"][0]["name"], "60 crystals");

        let goal_json = serde_json::to_value(Goal::Budget(Money::from_cents(199))).unwrap();
        assert_eq!(goal_json, serde_json::json!({ "budget": 199 }));
    }
}
