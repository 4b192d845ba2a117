//! Retirement savings projection engine
//!
//! Projects a nest egg as the sum of two future values: the existing
//! savings compounded annually, and the monthly contribution stream grown
//! as an ordinary annuity at the monthly rate. The compounding asymmetry
//! between the two legs matches the observed product behavior and is kept
//! as-is.

use serde::{Deserialize, Serialize};

use crate::input::{Currency, RetirementInput};

/// Result of a retirement projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RetirementResult {
    /// Projected savings at retirement age
    pub total_savings_at_retirement: f64,

    /// Current savings plus every future monthly contribution
    pub total_principal_invested: f64,

    /// Projected savings less principal invested
    pub total_interest_earned: f64,

    /// Display currency
    pub currency: Currency,
}

/// Project total savings at retirement
pub fn compute_retirement_projection(input: &RetirementInput) -> RetirementResult {
    let years = input.years_to_retirement();
    let months = input.months_to_retirement();
    let annual_rate = input.annual_rate();
    let monthly_rate = input.monthly_rate();

    // Lump sum compounds annually
    let fv_current_savings = input.current_savings * (1.0 + annual_rate).powi(years as i32);

    // Contribution stream: ordinary annuity at the monthly rate
    let fv_contributions = if monthly_rate == 0.0 {
        input.monthly_contribution * months as f64
    } else {
        input.monthly_contribution * ((1.0 + monthly_rate).powi(months as i32) - 1.0)
            / monthly_rate
    };

    let total_savings_at_retirement = fv_current_savings + fv_contributions;
    let total_principal_invested =
        input.current_savings + input.monthly_contribution * months as f64;
    let total_interest_earned = total_savings_at_retirement - total_principal_invested;

    RetirementResult {
        total_savings_at_retirement,
        total_principal_invested,
        total_interest_earned,
        currency: input.currency,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn retirement(
        current_age: u8,
        retirement_age: u8,
        savings: f64,
        contribution: f64,
        return_pct: f64,
    ) -> RetirementInput {
        RetirementInput {
            current_age,
            retirement_age,
            current_savings: savings,
            monthly_contribution: contribution,
            annual_return_pct: return_pct,
            currency: Currency::Usd,
        }
    }

    #[test]
    fn test_reference_projection() {
        // Age 30 to 65, 50k saved, 500/month at 7%
        let input = retirement(30, 65, 50_000.0, 500.0, 7.0);
        let result = compute_retirement_projection(&input);

        // 50,000 + 500 * 420 months
        assert_eq!(result.total_principal_invested, 260_000.0);
        assert!(result.total_savings_at_retirement > result.total_principal_invested);
        assert!(result.total_interest_earned > 0.0);

        // Lump-sum leg alone: 50,000 * 1.07^35
        let lump = 50_000.0 * 1.07_f64.powi(35);
        assert!(result.total_savings_at_retirement > lump);
    }

    #[test]
    fn test_zero_rate_is_linear() {
        let input = retirement(30, 65, 50_000.0, 500.0, 0.0);
        let result = compute_retirement_projection(&input);

        assert_relative_eq!(
            result.total_savings_at_retirement,
            260_000.0,
            max_relative = 1e-12
        );
        assert_relative_eq!(result.total_interest_earned, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_monotone_in_return_rate() {
        let mut previous = 0.0;
        for return_pct in [0.0, 1.0, 3.0, 5.0, 7.0, 10.0] {
            let input = retirement(30, 65, 50_000.0, 500.0, return_pct);
            let result = compute_retirement_projection(&input);
            assert!(
                result.total_savings_at_retirement > previous,
                "projection not increasing at {}%",
                return_pct
            );
            previous = result.total_savings_at_retirement;
        }
    }

    #[test]
    fn test_no_contributions() {
        let input = retirement(40, 60, 100_000.0, 0.0, 5.0);
        let result = compute_retirement_projection(&input);

        assert_relative_eq!(
            result.total_savings_at_retirement,
            100_000.0 * 1.05_f64.powi(20),
            max_relative = 1e-12
        );
        assert_eq!(result.total_principal_invested, 100_000.0);
    }

    #[test]
    fn test_idempotent() {
        let input = retirement(30, 65, 50_000.0, 500.0, 7.0);
        assert_eq!(
            compute_retirement_projection(&input),
            compute_retirement_projection(&input)
        );
    }
}
