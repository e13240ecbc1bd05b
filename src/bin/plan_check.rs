//! Run the canonical disposable-gloves scenario through every solver and
//! report consistency.
//!
//! Takes no arguments; exits 0 when the three solvers agree and 1 on
//! divergence or error.

use stockplan::{compare_solvers, StockPlan};

fn main() {
    let plan = match StockPlan::new(10, 10, 3, 7) {
        Ok(plan) => plan,
        Err(err) => {
            eprintln!("plan_check: {err}");
            std::process::exit(1);
        }
    };

    match compare_solvers("Disposable gloves", &plan) {
        Ok(report) => {
            println!("{report}");
            if !report.consistent() {
                std::process::exit(1);
            }
        }
        Err(err) => {
            eprintln!("plan_check: {err}");
            std::process::exit(1);
        }
    }
}
