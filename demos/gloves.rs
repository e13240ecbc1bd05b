//! Example: minimum replenishment cost for a box of disposable gloves.
//!
//! Run with:
//! `cargo run --example gloves`

use stockplan::{compare_solvers, StockPlan};

fn main() {
    let plan = StockPlan::new(10, 10, 3, 7).expect("example parameters are valid");
    let report = compare_solvers("Disposable gloves", &plan).expect("plan fits the table window");
    println!("{report}");
}
