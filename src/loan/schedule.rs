//! Amortization schedule records and the loan result container

use serde::{Deserialize, Serialize};

use crate::input::Currency;

/// One scheduled payment, split into principal and interest
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmortizationRecord {
    /// 1-based payment number
    pub period: u32,

    /// Portion of the payment applied to principal
    pub principal: f64,

    /// Portion of the payment applied to interest
    pub interest: f64,

    /// Outstanding balance after this payment
    pub ending_balance: f64,
}

/// Result of a loan amortization calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanResult {
    /// Payment due each period
    ///
    /// When the final period is reconciled against a residual balance the
    /// residual is reflected here as well, matching the schedule.
    pub installment: f64,

    /// Nominal installment x nominal payment count
    pub total_repayment: f64,

    /// Total repayment less the principal borrowed
    pub total_interest: f64,

    /// Period-by-period breakdown, ordered by period
    pub schedule: Vec<AmortizationRecord>,

    /// Display currency
    pub currency: Currency,
}

impl LoanResult {
    /// Number of payments actually scheduled (early payoff may shorten it)
    pub fn payment_count(&self) -> usize {
        self.schedule.len()
    }

    /// Sum of the principal portions across the schedule
    ///
    /// After reconciliation this equals the amount borrowed.
    pub fn total_principal_paid(&self) -> f64 {
        self.schedule.iter().map(|r| r.principal).sum()
    }

    /// Sum of the interest portions across the schedule
    pub fn total_interest_paid(&self) -> f64 {
        self.schedule.iter().map(|r| r.interest).sum()
    }

    /// Outstanding balance after the last scheduled payment
    pub fn final_balance(&self) -> f64 {
        self.schedule.last().map(|r| r.ending_balance).unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_schedule_accessors() {
        let result = LoanResult {
            installment: 0.0,
            total_repayment: 0.0,
            total_interest: 0.0,
            schedule: Vec::new(),
            currency: Currency::Usd,
        };

        assert_eq!(result.payment_count(), 0);
        assert_eq!(result.final_balance(), 0.0);
        assert_eq!(result.total_principal_paid(), 0.0);
    }

    #[test]
    fn test_schedule_sums() {
        let result = LoanResult {
            installment: 55.0,
            total_repayment: 110.0,
            total_interest: 10.0,
            schedule: vec![
                AmortizationRecord {
                    period: 1,
                    principal: 50.0,
                    interest: 5.0,
                    ending_balance: 50.0,
                },
                AmortizationRecord {
                    period: 2,
                    principal: 50.0,
                    interest: 5.0,
                    ending_balance: 0.0,
                },
            ],
            currency: Currency::Usd,
        };

        assert_eq!(result.payment_count(), 2);
        assert_eq!(result.total_principal_paid(), 100.0);
        assert_eq!(result.total_interest_paid(), 10.0);
        assert_eq!(result.final_balance(), 0.0);
    }
}
