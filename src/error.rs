//! Error taxonomy for plan construction and solving.
//!
//! Every variant is detected before a solver does real work: parameter
//! problems at [`StockPlan::new`](crate::StockPlan::new), window problems at
//! the tabulated solver's entry and root read. No solver returns a partial
//! result.

use thiserror::Error;

/// Errors surfaced by plan validation and the tabulated solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlanError {
    /// A plan parameter is outside its accepted range.
    #[error("invalid parameter {name}: {value}")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: i64,
    },

    /// Every decision sequence from `stock` leaves the tabulated solver's
    /// stock window `[lower, upper]` at some point in the horizon, or
    /// `stock` itself lies outside it.
    #[error("plan from stock {stock} leaves the table window [{lower}, {upper}]")]
    WindowExceeded {
        /// The starting stock level of the failed solve.
        stock: i64,
        /// Inclusive lower bound of the window.
        lower: i64,
        /// Inclusive upper bound of the window.
        upper: i64,
    },
}
