//! Loan amortization engine
//!
//! Computes the periodic installment for an amortizing loan and expands it
//! into a full period-by-period schedule. The schedule always terminates at
//! exactly zero outstanding balance: residual balances within tolerance are
//! clamped during the loop, and any meaningful residual left after the last
//! period is folded into that period's principal portion.

use crate::input::LoanInput;
use crate::numeric::{clamp_to_zero, BALANCE_EPSILON};

use super::schedule::{AmortizationRecord, LoanResult};

/// Compute the installment and amortization schedule for a loan
///
/// `total_repayment` and `total_interest` are derived from the nominal
/// installment and nominal payment count, even when the final period is
/// reconciled against a residual balance. The reconciled figures are
/// available through `LoanResult::total_principal_paid`.
pub fn compute_loan(input: &LoanInput) -> LoanResult {
    let principal = input.principal;
    let number_of_payments = input.number_of_payments();

    // Division-by-zero guard for a hand-built input that bypassed validation
    if number_of_payments == 0 {
        return LoanResult {
            installment: 0.0,
            total_repayment: 0.0,
            total_interest: 0.0,
            schedule: Vec::new(),
            currency: input.currency,
        };
    }

    let periodic_rate = input.periodic_rate();

    let mut installment = if periodic_rate == 0.0 {
        // Straight-line repayment, no interest
        principal / number_of_payments as f64
    } else {
        let growth = (1.0 + periodic_rate).powi(number_of_payments as i32);
        principal * periodic_rate * growth / (growth - 1.0)
    };

    // Totals use the nominal installment and count; the final-period
    // reconciliation below does not feed back into them.
    let total_repayment = installment * number_of_payments as f64;
    let total_interest = total_repayment - principal;

    let mut schedule = Vec::with_capacity(number_of_payments as usize);
    let mut balance = principal;

    for period in 1..=number_of_payments {
        let interest = balance * periodic_rate;
        let principal_portion = installment - interest;
        balance = clamp_to_zero(balance - principal_portion, BALANCE_EPSILON);

        schedule.push(AmortizationRecord {
            period,
            principal: principal_portion,
            interest,
            ending_balance: balance,
        });

        // Clamping can pay the loan off before the nominal count
        if balance == 0.0 && period < number_of_payments {
            break;
        }
    }

    reconcile_final_period(&mut schedule, &mut installment);

    LoanResult {
        installment,
        total_repayment,
        total_interest,
        schedule,
        currency: input.currency,
    }
}

/// Fold any residual balance after the last period into that period
///
/// A residual smaller than one installment is added to the final principal
/// portion (and to the reported installment, which the final payment now
/// differs by); residuals within tolerance are zeroed without adjustment.
fn reconcile_final_period(schedule: &mut [AmortizationRecord], installment: &mut f64) {
    if let Some(last) = schedule.last_mut() {
        if last.ending_balance != 0.0 && last.ending_balance < *installment {
            if last.ending_balance.abs() > BALANCE_EPSILON {
                last.principal += last.ending_balance;
                *installment += last.ending_balance;
            }
            last.ending_balance = 0.0;
        }
    }
}
