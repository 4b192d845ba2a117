//! Form-surface validation for calculator inputs
//!
//! Engines assume pre-validated input; these constructors enforce the same
//! numeric bounds the submission forms apply before a calculation runs.

use thiserror::Error;

use super::data::{
    CompoundingFrequency, CryptoInput, CryptoTicker, Currency, InvestmentInput, LoanInput,
    RepaymentFrequency, RetirementInput,
};

/// Smallest accepted crypto holding
pub const MIN_CRYPTO_AMOUNT: f64 = 0.000001;

/// Longest accepted crypto investment period in years
pub const MAX_CRYPTO_PERIOD_YEARS: u32 = 50;

/// Validation failure for a submitted field
#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("{field} must be at least {min}")]
    BelowMinimum { field: &'static str, min: f64 },

    #[error("{field} must be no more than {max}")]
    AboveMaximum { field: &'static str, max: f64 },

    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    #[error("retirement age must be greater than current age")]
    RetirementAgeNotAfterCurrent,

    #[error("unsupported ticker symbol: {0}")]
    UnknownTicker(String),
}

fn require_finite(field: &'static str, value: f64) -> Result<f64, InputError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(InputError::NotFinite { field })
    }
}

fn require_range(
    field: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<f64, InputError> {
    let value = require_finite(field, value)?;
    if value < min {
        return Err(InputError::BelowMinimum { field, min });
    }
    if value > max {
        return Err(InputError::AboveMaximum { field, max });
    }
    Ok(value)
}

/// Validate loan form values into a typed input record
pub fn validate_loan(
    principal: f64,
    annual_rate_pct: f64,
    tenure_years: u32,
    frequency: RepaymentFrequency,
    currency: Currency,
) -> Result<LoanInput, InputError> {
    let principal = require_range("loan amount", principal, 1.0, f64::MAX)?;
    let annual_rate_pct = require_range("interest rate", annual_rate_pct, 0.0, 100.0)?;
    if tenure_years < 1 {
        return Err(InputError::BelowMinimum {
            field: "loan tenure",
            min: 1.0,
        });
    }

    Ok(LoanInput {
        principal,
        annual_rate_pct,
        tenure_years,
        frequency,
        currency,
    })
}

/// Validate investment form values into a typed input record
pub fn validate_investment(
    principal: f64,
    annual_rate_pct: f64,
    years: u32,
    compounding: CompoundingFrequency,
    currency: Currency,
) -> Result<InvestmentInput, InputError> {
    let principal = require_range("principal amount", principal, 1.0, f64::MAX)?;
    let annual_rate_pct = require_range("interest rate", annual_rate_pct, 0.0, 100.0)?;
    if years < 1 {
        return Err(InputError::BelowMinimum {
            field: "investment period",
            min: 1.0,
        });
    }

    Ok(InvestmentInput {
        principal,
        annual_rate_pct,
        years,
        compounding,
        currency,
    })
}

/// Validate retirement form values into a typed input record
pub fn validate_retirement(
    current_age: u8,
    retirement_age: u8,
    current_savings: f64,
    monthly_contribution: f64,
    annual_return_pct: f64,
    currency: Currency,
) -> Result<RetirementInput, InputError> {
    if current_age < 18 {
        return Err(InputError::BelowMinimum {
            field: "current age",
            min: 18.0,
        });
    }
    if current_age > 99 {
        return Err(InputError::AboveMaximum {
            field: "current age",
            max: 99.0,
        });
    }
    if retirement_age > 100 {
        return Err(InputError::AboveMaximum {
            field: "retirement age",
            max: 100.0,
        });
    }
    if retirement_age <= current_age {
        return Err(InputError::RetirementAgeNotAfterCurrent);
    }
    let current_savings = require_range("current savings", current_savings, 0.0, f64::MAX)?;
    let monthly_contribution =
        require_range("monthly contribution", monthly_contribution, 0.0, f64::MAX)?;
    let annual_return_pct = require_range("expected return rate", annual_return_pct, 0.0, 50.0)?;

    Ok(RetirementInput {
        current_age,
        retirement_age,
        current_savings,
        monthly_contribution,
        annual_return_pct,
        currency,
    })
}

/// Validate crypto form values into a typed input record
///
/// Accepts the ticker as a string so callers can pass user input directly;
/// parsing is case-insensitive over the supported enumeration.
pub fn validate_crypto(
    amount: f64,
    ticker: &str,
    period_years: u32,
) -> Result<CryptoInput, InputError> {
    let amount = require_range("crypto amount", amount, MIN_CRYPTO_AMOUNT, f64::MAX)?;
    let ticker = CryptoTicker::parse(ticker)
        .ok_or_else(|| InputError::UnknownTicker(ticker.trim().to_string()))?;
    if period_years < 1 {
        return Err(InputError::BelowMinimum {
            field: "investment period",
            min: 1.0,
        });
    }
    if period_years > MAX_CRYPTO_PERIOD_YEARS {
        return Err(InputError::AboveMaximum {
            field: "investment period",
            max: MAX_CRYPTO_PERIOD_YEARS as f64,
        });
    }

    Ok(CryptoInput {
        amount,
        ticker,
        period_years,
    })
}
