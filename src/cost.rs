//! Daily holding penalty for a stock level.
//!
//! The penalty is piecewise linear and asymmetric: each missing unit is
//! charged [`SHORTAGE_UNIT_COST`], each unit held above the ideal level is
//! charged [`SURPLUS_UNIT_COST`], and levels inside `[0, ideal]` are free.
//! The shortage slope must stay strictly steeper than the surplus slope;
//! with equal slopes the optimization degenerates.

/// Cost charged per missing unit when the stock level is negative.
pub const SHORTAGE_UNIT_COST: i64 = 8;

/// Cost charged per unit held above the ideal level.
pub const SURPLUS_UNIT_COST: i64 = 2;

/// Daily penalty for holding `stock` units against an ideal level.
///
/// Total over all inputs, never negative, no side effects.
#[inline]
pub fn holding_cost(stock: i64, ideal: i64) -> i64 {
    if stock < 0 {
        -stock * SHORTAGE_UNIT_COST
    } else if stock > ideal {
        (stock - ideal) * SURPLUS_UNIT_COST
    } else {
        0
    }
}
