//! Planning instance: the input parameters every solver consumes.

use crate::error::PlanError;

/// A single-item replenishment planning instance.
///
/// Carries the four computational parameters of the optimization; the
/// display-only item label lives in [`SolverReport`](crate::SolverReport).
/// Instances exist only through [`StockPlan::new`], so every solver may
/// assume a validated plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockPlan {
    /// Stock on hand at day 0. May be negative (an inherited shortage).
    pub initial_stock: i64,
    /// Target stock level; units above it, or any shortage, are charged.
    pub ideal_stock: i64,
    /// Nominal daily usage rate; actual decisions vary by at most one unit.
    pub ideal_consumption: i64,
    /// Number of days planned.
    pub horizon_days: u32,
}

impl StockPlan {
    /// Validate and build a plan.
    ///
    /// Rejects a negative ideal stock level or a negative ideal consumption
    /// rate before any solver runs. The horizon is non-negative by type.
    pub fn new(
        initial_stock: i64,
        ideal_stock: i64,
        ideal_consumption: i64,
        horizon_days: u32,
    ) -> Result<Self, PlanError> {
        if ideal_stock < 0 {
            return Err(PlanError::InvalidParameter {
                name: "ideal_stock",
                value: ideal_stock,
            });
        }
        if ideal_consumption < 0 {
            return Err(PlanError::InvalidParameter {
                name: "ideal_consumption",
                value: ideal_consumption,
            });
        }
        Ok(Self {
            initial_stock,
            ideal_stock,
            ideal_consumption,
            horizon_days,
        })
    }
}
