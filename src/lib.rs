//! FinanceForward - deterministic financial calculation engines
//!
//! This library provides:
//! - Loan amortization with full period-by-period schedules
//! - Compound-interest investment growth
//! - Retirement savings projection (lump sum + monthly annuity)
//! - Crypto price resolution with tiered fallback
//! - Crypto future-value estimation with optional advisor delegation

pub mod crypto;
pub mod input;
pub mod investment;
pub mod loan;
pub mod numeric;
pub mod retirement;

// Re-export commonly used types
pub use crypto::{CryptoEstimator, CryptoResult, PriceResolver};
pub use input::{CryptoInput, InvestmentInput, LoanInput, RetirementInput};
pub use investment::{compute_investment_growth, InvestmentResult};
pub use loan::{compute_loan, AmortizationRecord, LoanResult};
pub use retirement::{compute_retirement_projection, RetirementResult};
