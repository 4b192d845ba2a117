//! Loan amortization: installment and period-by-period schedule

mod engine;
mod schedule;

pub use engine::compute_loan;
pub use schedule::{AmortizationRecord, LoanResult};
