//! Naive top-down solver.
//!
//! Explores every decision sequence without caching, branching three ways
//! per remaining day: O(3^horizon_days) calls. This is the reference
//! implementation the faster solvers must match bit for bit, so it stays
//! uncached.

use crate::cost::holding_cost;
use crate::decision::daily_decisions;
use crate::plan::StockPlan;

/// Minimum total penalty over the plan horizon, by exhaustive recursion.
///
/// Practical only for small horizons; past roughly twenty days the 3^n
/// call tree takes longer than anyone will wait. That is expected: this
/// solver exists to contrast with [`MemoizedSolver`](crate::MemoizedSolver)
/// and [`solve_tabulated`](crate::solve_tabulated), not to scale.
pub fn solve_recursive(plan: &StockPlan) -> i64 {
    best_remaining(plan, 0, plan.initial_stock)
}

fn best_remaining(plan: &StockPlan, day: u32, stock: i64) -> i64 {
    if day == plan.horizon_days {
        return 0;
    }
    let mut best = i64::MAX;
    for decision in daily_decisions(plan.ideal_consumption) {
        let next_stock = stock - decision;
        let total = holding_cost(next_stock, plan.ideal_stock)
            + best_remaining(plan, day + 1, next_stock);
        if total < best {
            best = total;
        }
    }
    best
}
