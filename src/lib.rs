//! Inventory replenishment planning via dynamic programming.
//!
//! Given a consumable with an initial stock level, an ideal stock level, an
//! ideal daily consumption rate, and a planning horizon, this crate
//! computes the minimum total penalty for managing the stock across the
//! horizon. Each day the consumption may deviate by one unit from the
//! ideal rate; stock held above the ideal level is charged per unit, and a
//! shortage is charged strictly more per unit.
//!
//! The same discrete-time cost-minimization DP is solved three ways:
//! 1. [`solve_recursive`]: naive top-down exploration, O(3^days), the
//!    correctness baseline.
//! 2. [`MemoizedSolver`]: the same recursion with per-session caching,
//!    visiting each `(day, stock)` state once.
//! 3. [`solve_tabulated`]: bottom-up tabulation over a bounded stock
//!    window.
//!
//! [`compare_solvers`] runs all three on identical parameters and reports
//! whether they agree.
//!
//! ## Quick start
//! ```
//! use stockplan::{solve_recursive, solve_tabulated, MemoizedSolver, StockPlan};
//!
//! let plan = StockPlan::new(10, 10, 3, 7)?;
//! let naive = solve_recursive(&plan);
//! let memoized = MemoizedSolver::new(plan).solve();
//! let tabulated = solve_tabulated(&plan)?;
//! assert_eq!(naive, 48);
//! assert_eq!(naive, memoized);
//! assert_eq!(naive, tabulated);
//! # Ok::<(), stockplan::PlanError>(())
//! ```

pub mod cost;
pub mod decision;
pub mod error;
pub mod plan;
pub mod report;
pub mod solvers;

pub use crate::error::PlanError;
pub use crate::plan::StockPlan;
pub use crate::report::{compare_solvers, SolverReport};
pub use crate::solvers::memoized::MemoizedSolver;
pub use crate::solvers::recursive::solve_recursive;
pub use crate::solvers::tabulated::{solve_tabulated, stock_window};
