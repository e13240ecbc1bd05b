//! Comparison driver: run every solver on one plan and report.
//!
//! A validation harness rather than a reusable API: it feeds all three
//! solvers identical parameters, collects the three minima, and renders a
//! human-readable consistency report.

use std::fmt;

use crate::error::PlanError;
use crate::plan::StockPlan;
use crate::solvers::memoized::MemoizedSolver;
use crate::solvers::recursive::solve_recursive;
use crate::solvers::tabulated::solve_tabulated;

/// Results of running the three solvers on one plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverReport {
    /// Display label of the consumable; carries no computational meaning.
    pub label: String,
    /// The plan every solver received.
    pub plan: StockPlan,
    /// Minimum found by the naive recursive solver.
    pub recursive: i64,
    /// Minimum found by the memoized solver.
    pub memoized: i64,
    /// Minimum found by the tabulated solver.
    pub tabulated: i64,
}

impl SolverReport {
    /// True when all three solvers produced the same minimum.
    pub fn consistent(&self) -> bool {
        self.recursive == self.memoized && self.memoized == self.tabulated
    }
}

impl fmt::Display for SolverReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Item: {}", self.label)?;
        writeln!(
            f,
            "Initial stock: {} | Ideal daily consumption: {}",
            self.plan.initial_stock, self.plan.ideal_consumption
        )?;
        writeln!(f)?;
        writeln!(f, "Recursive: {}", self.recursive)?;
        writeln!(f, "Memoized recursive: {}", self.memoized)?;
        writeln!(f, "Tabulated (bottom-up): {}", self.tabulated)?;
        writeln!(f)?;
        if self.consistent() {
            write!(f, "All solvers returned the same minimal cost")
        } else {
            write!(f, "Solvers returned different minimal costs")
        }
    }
}

/// Run all three solvers on `plan` with identical arguments.
///
/// Fails only when the tabulated solver cannot represent the plan inside
/// its stock window; the recursive solvers have no failure modes beyond
/// resource exhaustion on large horizons.
pub fn compare_solvers(label: &str, plan: &StockPlan) -> Result<SolverReport, PlanError> {
    #[cfg(feature = "tracing")]
    let span = tracing::info_span!("compare_solvers", label, horizon = plan.horizon_days);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let recursive = solve_recursive(plan);
    let memoized = MemoizedSolver::new(*plan).solve();
    let tabulated = solve_tabulated(plan)?;

    Ok(SolverReport {
        label: label.to_owned(),
        plan: *plan,
        recursive,
        memoized,
        tabulated,
    })
}
