//! Memoized top-down solver.
//!
//! Same recurrence as the naive solver, with each `(day, stock)` state
//! computed at most once per session. The cache is owned by the solver
//! value and dropped with it, so results can never leak between plans with
//! different parameters; within one session the plan is fixed, which makes
//! `(day, stock)` a complete cache key.

use std::collections::HashMap;

use crate::cost::holding_cost;
use crate::decision::daily_decisions;
use crate::plan::StockPlan;

/// Top-down solver with a per-session memo cache.
///
/// The visited state space is bounded by `horizon_days` times the reachable
/// stock range rather than 3^horizon_days, and repeated
/// [`solve`](Self::solve) calls on the same value return the cached answer
/// without re-expanding the recursion.
#[derive(Debug, Clone)]
pub struct MemoizedSolver {
    plan: StockPlan,
    cache: HashMap<(u32, i64), i64>,
}

impl MemoizedSolver {
    /// Create a solver session for one plan.
    pub fn new(plan: StockPlan) -> Self {
        Self {
            plan,
            cache: HashMap::new(),
        }
    }

    /// The plan this session solves.
    pub fn plan(&self) -> &StockPlan {
        &self.plan
    }

    /// Number of `(day, stock)` states currently cached.
    pub fn cached_states(&self) -> usize {
        self.cache.len()
    }

    /// Minimum total penalty over the plan horizon.
    ///
    /// Bit-identical to [`solve_recursive`](crate::solve_recursive) on the
    /// same plan.
    pub fn solve(&mut self) -> i64 {
        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!(
            "memoized_solve",
            horizon = self.plan.horizon_days,
            cached = self.cache.len()
        );
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let initial_stock = self.plan.initial_stock;
        self.best_remaining(0, initial_stock)
    }

    fn best_remaining(&mut self, day: u32, stock: i64) -> i64 {
        if day == self.plan.horizon_days {
            return 0;
        }
        if let Some(&known) = self.cache.get(&(day, stock)) {
            return known;
        }
        let mut best = i64::MAX;
        for decision in daily_decisions(self.plan.ideal_consumption) {
            let next_stock = stock - decision;
            let total = holding_cost(next_stock, self.plan.ideal_stock)
                + self.best_remaining(day + 1, next_stock);
            if total < best {
                best = total;
            }
        }
        self.cache.insert((day, stock), best);
        best
    }
}

#[cfg(test)]
mod tests {
    use super::MemoizedSolver;
    use crate::plan::StockPlan;
    use crate::solvers::recursive::solve_recursive;

    #[test]
    fn matches_the_naive_solver() {
        for &(initial, ideal, rate, days) in
            &[(10, 10, 3, 7), (8, 4, 0, 6), (6, 3, 1, 5), (-3, 4, 2, 3)]
        {
            let plan = StockPlan::new(initial, ideal, rate, days).unwrap();
            assert_eq!(
                MemoizedSolver::new(plan).solve(),
                solve_recursive(&plan),
                "diverged on {plan:?}"
            );
        }
    }

    #[test]
    fn second_solve_is_a_cache_hit() {
        let plan = StockPlan::new(10, 10, 3, 7).unwrap();
        let mut solver = MemoizedSolver::new(plan);
        let first = solver.solve();
        let states = solver.cached_states();
        assert!(states > 0);
        let second = solver.solve();
        assert_eq!(first, second);
        assert_eq!(solver.cached_states(), states);
    }

    #[test]
    fn visited_states_stay_polynomial() {
        // Each day reaches at most 2*day + 1 distinct stock levels, far
        // fewer than the 3^day call tree the naive solver expands.
        let plan = StockPlan::new(10, 10, 3, 12).unwrap();
        let mut solver = MemoizedSolver::new(plan);
        solver.solve();
        let days = i64::from(plan.horizon_days);
        assert!(solver.cached_states() as i64 <= days * (2 * days + 1));
    }
}
