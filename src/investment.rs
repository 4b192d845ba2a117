//! Compound investment growth engine
//!
//! Single lump-sum compounding, no contribution stream.

use serde::{Deserialize, Serialize};

use crate::input::{Currency, InvestmentInput};

/// Result of a compound growth calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InvestmentResult {
    /// Projected value at the end of the period
    pub future_value: f64,

    /// Future value less the principal
    pub total_interest: f64,

    /// Principal echoed back for display
    pub principal: f64,

    /// Display currency
    pub currency: Currency,
}

/// Compute the future value of a lump sum under periodic compounding
///
/// `fv = principal * (1 + rate/n)^(n * years)` where `n` is the number of
/// compounding periods per year. A zero rate leaves the principal unchanged.
pub fn compute_investment_growth(input: &InvestmentInput) -> InvestmentResult {
    let principal = input.principal;
    let annual_rate = input.annual_rate_pct / 100.0;
    let periods_per_year = input.compounding.periods_per_year();
    let total_periods = periods_per_year * input.years;

    let periodic_rate = annual_rate / periods_per_year as f64;
    let future_value = principal * (1.0 + periodic_rate).powi(total_periods as i32);
    let total_interest = future_value - principal;

    InvestmentResult {
        future_value,
        total_interest,
        principal,
        currency: input.currency,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::CompoundingFrequency;

    fn investment(
        principal: f64,
        rate_pct: f64,
        years: u32,
        compounding: CompoundingFrequency,
    ) -> InvestmentInput {
        InvestmentInput {
            principal,
            annual_rate_pct: rate_pct,
            years,
            compounding,
            currency: Currency::Usd,
        }
    }

    #[test]
    fn test_reference_growth() {
        // 1,000 at 7% over 10 years, compounded annually
        let result = compute_investment_growth(&investment(
            1_000.0,
            7.0,
            10,
            CompoundingFrequency::Annually,
        ));

        assert!(
            (result.future_value - 1_967.15).abs() < 0.01,
            "future value {} != ~1967.15",
            result.future_value
        );
        assert!((result.total_interest - 967.15).abs() < 0.01);
        assert_eq!(result.principal, 1_000.0);
    }

    #[test]
    fn test_zero_rate_preserves_principal() {
        for compounding in [
            CompoundingFrequency::Annually,
            CompoundingFrequency::SemiAnnually,
            CompoundingFrequency::Quarterly,
            CompoundingFrequency::Monthly,
        ] {
            let result = compute_investment_growth(&investment(5_000.0, 0.0, 20, compounding));
            assert_eq!(result.future_value, 5_000.0);
            assert_eq!(result.total_interest, 0.0);
        }
    }

    #[test]
    fn test_more_frequent_compounding_grows_more() {
        let annually = compute_investment_growth(&investment(
            1_000.0,
            7.0,
            10,
            CompoundingFrequency::Annually,
        ));
        let monthly = compute_investment_growth(&investment(
            1_000.0,
            7.0,
            10,
            CompoundingFrequency::Monthly,
        ));

        assert!(monthly.future_value > annually.future_value);
    }

    #[test]
    fn test_idempotent() {
        let input = investment(1_000.0, 7.0, 10, CompoundingFrequency::Quarterly);
        assert_eq!(
            compute_investment_growth(&input),
            compute_investment_growth(&input)
        );
    }
}
