//! # Cover Search
//!
//! Decides how many units of each fixed-value material tier close an
//! experience gap with the least wasted value.
//!
//! ## Candidate Family
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  target 23000, tiers [20000, 5000, 1000]                                │
//! │                                                                         │
//! │  Seed A    [2, 0, 0]   cover with the top tier alone (ceil)             │
//! │  Seed B    [1, 1, 0]   one top unit swapped down a tier                 │
//! │  explore   [1, 0, 3]   ...and again, one tier further down              │
//! │                                                                         │
//! │  leftover = target − Σ usage·value   (negative = overshoot/waste)       │
//! │  winner   = numerically largest leftover → [1, 0, 3], leftover 0        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The exploration is intentionally NOT exhaustive: it walks a single
//! descending chain of "shift one unit down a tier" moves (recursion depth
//! is bounded by the tier count). With few, widely separated tier values
//! this is a good approximation of true minimum-waste cover at trivial cost.
//!
//! Every explored candidate reaches or exceeds the target: the last touched
//! tier is always ceil-filled over whatever the higher tiers left open.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use ts_rs::TS;

use crate::error::PlanResult;
use crate::validation::validate_tiers;

// =============================================================================
// Cover Plan
// =============================================================================

/// The outcome of a cover search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CoverPlan {
    /// Units used per tier, same order as the caller's `values`.
    pub usage: Vec<u32>,
    /// `target − Σ usage·value`. Negative means overshoot (wasted value);
    /// zero means the gap was closed exactly.
    pub leftover: i64,
}

impl CoverPlan {
    fn trivial(tiers: usize, target: i64) -> Self {
        CoverPlan {
            usage: vec![0; tiers],
            leftover: target,
        }
    }
}

// =============================================================================
// Public Entry Point
// =============================================================================

/// Searches for the material counts that close `target` experience with the
/// least waste.
///
/// `values` are the per-unit tier values, sorted from largest to smallest.
/// A zero or negative target returns the trivial all-zero plan with
/// `leftover = target` (nothing to cover is a valid outcome, not an error).
///
/// ## Example
/// ```rust
/// use planner_core::cover::cover_gap;
/// use planner_core::EXP_BOOK_VALUES;
///
/// let plan = cover_gap(&EXP_BOOK_VALUES, 23_000).unwrap();
/// assert_eq!(plan.usage, vec![1, 0, 3]);
/// assert_eq!(plan.leftover, 0);
/// ```
pub fn cover_gap(values: &[u64], target: i64) -> PlanResult<CoverPlan> {
    validate_tiers(values)?;

    if target <= 0 {
        return Ok(CoverPlan::trivial(values.len(), target));
    }
    let target = target as u64;

    let mut candidates: Vec<CoverPlan> = Vec::new();

    // Seed A: cover the whole gap with the top tier alone.
    let mut usage = vec![0u32; values.len()];
    usage[0] = target.div_ceil(values[0]) as u32;
    record(&mut candidates, values, &usage, target);

    // Seed B: swap one top-tier unit for a ceil-fill of the next tier,
    // then walk the same move down the remaining tiers.
    if values.len() > 1 {
        usage[0] -= 1;
        let open = target.saturating_sub(u64::from(usage[0]) * values[0]);
        usage[1] = open.div_ceil(values[1]) as u32;
        record(&mut candidates, values, &usage, target);
        explore(&mut candidates, values, &mut usage, 1, target);
    }

    // Largest leftover is the least overshoot; ties keep the earliest
    // candidate (the one using higher tiers).
    let mut remaining = candidates.into_iter();
    let mut best = remaining
        .next()
        .unwrap_or_else(|| CoverPlan::trivial(values.len(), target as i64));
    for candidate in remaining {
        if candidate.leftover > best.leftover {
            best = candidate;
        }
    }
    debug!(usage = ?best.usage, leftover = best.leftover, "cover search result");
    Ok(best)
}

// =============================================================================
// Candidate Generation
// =============================================================================

/// Generates the "shift one unit down a tier" chain below `usage[from]`.
///
/// Each step gives back one unit of tier `from`, clears everything below,
/// ceil-fills tier `from + 1` over the value still open, records the result
/// and recurses one tier down. Recursion stops at the last tier, so depth
/// is bounded by the tier count.
fn explore(candidates: &mut Vec<CoverPlan>, values: &[u64], usage: &mut [u32], from: usize, target: u64) {
    if from + 1 >= values.len() {
        return;
    }

    while usage[from] > 0 {
        usage[from] -= 1;
        for below in usage.iter_mut().skip(from + 1) {
            *below = 0;
        }
        let covered: u64 = usage
            .iter()
            .take(from + 1)
            .zip(values)
            .map(|(&count, &value)| u64::from(count) * value)
            .sum();
        let open = target.saturating_sub(covered);
        usage[from + 1] = open.div_ceil(values[from + 1]) as u32;

        record(candidates, values, usage, target);
        explore(candidates, values, usage, from + 1, target);
    }
}

/// Scores `usage` and records it as a candidate.
fn record(candidates: &mut Vec<CoverPlan>, values: &[u64], usage: &[u32], target: u64) {
    let total: u64 = usage
        .iter()
        .zip(values)
        .map(|(&count, &value)| u64::from(count) * value)
        .sum();
    let leftover = target as i64 - total as i64;
    trace!(?usage, leftover, "cover candidate");
    candidates.push(CoverPlan {
        usage: usage.to_vec(),
        leftover,
    });
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EXP_BOOK_VALUES;

    /// The exact-cover candidate [1, 0, 3] is reachable along the explored
    /// chain and must beat both seeds.
    #[test]
    fn test_exact_cover_beats_both_seeds() {
        let plan = cover_gap(&EXP_BOOK_VALUES, 23_000).unwrap();
        assert_eq!(plan.usage, vec![1, 0, 3]);
        assert_eq!(plan.leftover, 0);
    }

    #[test]
    fn test_zero_gap_is_trivial() {
        let plan = cover_gap(&EXP_BOOK_VALUES, 0).unwrap();
        assert_eq!(plan.usage, vec![0, 0, 0]);
        assert_eq!(plan.leftover, 0);
    }

    /// A gap below two levels (already past the target) is a valid outcome:
    /// all-zero usage, the surplus reported as-is.
    #[test]
    fn test_negative_gap_is_trivial() {
        let plan = cover_gap(&EXP_BOOK_VALUES, -4_200).unwrap();
        assert_eq!(plan.usage, vec![0, 0, 0]);
        assert_eq!(plan.leftover, -4_200);
    }

    #[test]
    fn test_small_gap_falls_through_to_bottom_tier() {
        // 4000: [1,0,0] wastes 16000, [0,1,0] wastes 1000, [0,0,4] wastes 0.
        let plan = cover_gap(&EXP_BOOK_VALUES, 4_000).unwrap();
        assert_eq!(plan.usage, vec![0, 0, 4]);
        assert_eq!(plan.leftover, 0);
    }

    #[test]
    fn test_kept_candidates_never_undershoot() {
        for target in [1, 999, 1_000, 1_001, 4_000, 19_999, 23_000, 61_500, 100_000] {
            let plan = cover_gap(&EXP_BOOK_VALUES, target).unwrap();
            let total: i64 = plan
                .usage
                .iter()
                .zip(EXP_BOOK_VALUES)
                .map(|(&count, value)| i64::from(count) * value as i64)
                .sum();
            assert!(total >= target, "undershoot at target {target}");
            assert_eq!(plan.leftover, target - total);
            assert!(plan.leftover <= 0);
        }
    }

    #[test]
    fn test_single_tier_is_plain_ceil() {
        let plan = cover_gap(&[1_000], 2_500).unwrap();
        assert_eq!(plan.usage, vec![3]);
        assert_eq!(plan.leftover, -500);
    }

    #[test]
    fn test_invalid_tiers_are_rejected() {
        assert!(cover_gap(&[], 1_000).is_err());
        assert!(cover_gap(&[20_000, 0, 1_000], 1_000).is_err());
        assert!(cover_gap(&[1_000, 5_000], 1_000).is_err());
    }

    #[test]
    fn test_search_is_idempotent() {
        let first = cover_gap(&EXP_BOOK_VALUES, 61_500).unwrap();
        let second = cover_gap(&EXP_BOOK_VALUES, 61_500).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_cover_plan_serializes_for_the_frontend() {
        let plan = cover_gap(&EXP_BOOK_VALUES, 23_000).unwrap();
        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["usage"], serde_json::json!([1, 0, 3]));
        assert_eq!(json["leftover"], 0);
    }
}
