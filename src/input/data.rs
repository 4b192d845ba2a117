//! Typed input records for the calculator engines
//!
//! Every calculation request is an immutable value record built by the
//! validation layer and passed into a pure engine function. The records
//! carry no state beyond the submitted values.

use serde::{Deserialize, Serialize};

/// Display currency carried through inputs and results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Inr,
}

impl Currency {
    /// ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Inr => "INR",
        }
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::Usd
    }
}

/// How often loan repayments are made
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RepaymentFrequency {
    Monthly,
    BiWeekly,
    Weekly,
}

impl RepaymentFrequency {
    /// Number of repayment periods in a year
    pub fn periods_per_year(&self) -> u32 {
        match self {
            RepaymentFrequency::Monthly => 12,
            RepaymentFrequency::Weekly => 52,
            RepaymentFrequency::BiWeekly => 26,
        }
    }

    /// Human-readable label for result display
    pub fn label(&self) -> &'static str {
        match self {
            RepaymentFrequency::Monthly => "Monthly",
            RepaymentFrequency::BiWeekly => "Bi-Weekly",
            RepaymentFrequency::Weekly => "Weekly",
        }
    }
}

/// How often investment interest compounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompoundingFrequency {
    Annually,
    SemiAnnually,
    Quarterly,
    Monthly,
}

impl CompoundingFrequency {
    /// Number of compounding periods in a year
    pub fn periods_per_year(&self) -> u32 {
        match self {
            CompoundingFrequency::Annually => 1,
            CompoundingFrequency::SemiAnnually => 2,
            CompoundingFrequency::Quarterly => 4,
            CompoundingFrequency::Monthly => 12,
        }
    }
}

/// Supported cryptocurrency tickers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CryptoTicker {
    Btc,
    Eth,
    Sol,
    Ada,
    Doge,
    Dot,
    Link,
    Ltc,
    Bch,
    Xlm,
    Fil,
    Trx,
    Xmr,
    Eos,
}

impl CryptoTicker {
    /// All supported tickers, in display order
    pub const ALL: [CryptoTicker; 14] = [
        CryptoTicker::Btc,
        CryptoTicker::Eth,
        CryptoTicker::Sol,
        CryptoTicker::Ada,
        CryptoTicker::Doge,
        CryptoTicker::Dot,
        CryptoTicker::Link,
        CryptoTicker::Ltc,
        CryptoTicker::Bch,
        CryptoTicker::Xlm,
        CryptoTicker::Fil,
        CryptoTicker::Trx,
        CryptoTicker::Xmr,
        CryptoTicker::Eos,
    ];

    /// Canonical uppercase symbol
    pub fn as_str(&self) -> &'static str {
        match self {
            CryptoTicker::Btc => "BTC",
            CryptoTicker::Eth => "ETH",
            CryptoTicker::Sol => "SOL",
            CryptoTicker::Ada => "ADA",
            CryptoTicker::Doge => "DOGE",
            CryptoTicker::Dot => "DOT",
            CryptoTicker::Link => "LINK",
            CryptoTicker::Ltc => "LTC",
            CryptoTicker::Bch => "BCH",
            CryptoTicker::Xlm => "XLM",
            CryptoTicker::Fil => "FIL",
            CryptoTicker::Trx => "TRX",
            CryptoTicker::Xmr => "XMR",
            CryptoTicker::Eos => "EOS",
        }
    }

    /// Parse a ticker symbol, case-insensitively
    pub fn parse(symbol: &str) -> Option<CryptoTicker> {
        let upper = symbol.trim().to_ascii_uppercase();
        CryptoTicker::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == upper)
    }

    /// Quote-endpoint symbol: lowercase ticker + "usd" (e.g. BTC -> "btcusd")
    pub fn quote_symbol(&self) -> String {
        format!("{}usd", self.as_str().to_ascii_lowercase())
    }
}

/// Input for the loan amortization engine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanInput {
    /// Amount borrowed
    pub principal: f64,

    /// Annual interest rate as a percentage (e.g. 5.0 for 5%)
    pub annual_rate_pct: f64,

    /// Loan tenure in years
    pub tenure_years: u32,

    /// Repayment frequency
    pub frequency: RepaymentFrequency,

    /// Display currency
    #[serde(default)]
    pub currency: Currency,
}

impl LoanInput {
    /// Total number of scheduled payments over the tenure
    pub fn number_of_payments(&self) -> u32 {
        self.tenure_years * self.frequency.periods_per_year()
    }

    /// Interest rate per repayment period, as a decimal
    pub fn periodic_rate(&self) -> f64 {
        (self.annual_rate_pct / 100.0) / self.frequency.periods_per_year() as f64
    }
}

/// Input for the compound investment engine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InvestmentInput {
    /// Initial lump sum invested
    pub principal: f64,

    /// Annual interest rate as a percentage
    pub annual_rate_pct: f64,

    /// Investment period in years
    pub years: u32,

    /// Compounding frequency
    pub compounding: CompoundingFrequency,

    /// Display currency
    #[serde(default)]
    pub currency: Currency,
}

/// Input for the retirement projection engine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RetirementInput {
    /// Current age in years
    pub current_age: u8,

    /// Planned retirement age; must exceed `current_age`
    pub retirement_age: u8,

    /// Savings already accumulated
    pub current_savings: f64,

    /// Contribution added at the end of each month
    pub monthly_contribution: f64,

    /// Expected annual return as a percentage
    pub annual_return_pct: f64,

    /// Display currency
    #[serde(default)]
    pub currency: Currency,
}

impl RetirementInput {
    /// Years remaining until retirement
    pub fn years_to_retirement(&self) -> u32 {
        (self.retirement_age as u32).saturating_sub(self.current_age as u32)
    }

    /// Months remaining until retirement
    pub fn months_to_retirement(&self) -> u32 {
        self.years_to_retirement() * 12
    }

    /// Expected annual return as a decimal
    pub fn annual_rate(&self) -> f64 {
        self.annual_return_pct / 100.0
    }

    /// Expected monthly return as a decimal
    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate() / 12.0
    }
}

/// Input for the crypto future-value estimator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CryptoInput {
    /// Amount of cryptocurrency held
    pub amount: f64,

    /// Ticker symbol
    pub ticker: CryptoTicker,

    /// Investment period in whole years
    pub period_years: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_periods() {
        assert_eq!(RepaymentFrequency::Monthly.periods_per_year(), 12);
        assert_eq!(RepaymentFrequency::BiWeekly.periods_per_year(), 26);
        assert_eq!(RepaymentFrequency::Weekly.periods_per_year(), 52);

        assert_eq!(CompoundingFrequency::Annually.periods_per_year(), 1);
        assert_eq!(CompoundingFrequency::SemiAnnually.periods_per_year(), 2);
        assert_eq!(CompoundingFrequency::Quarterly.periods_per_year(), 4);
        assert_eq!(CompoundingFrequency::Monthly.periods_per_year(), 12);
    }

    #[test]
    fn test_loan_derived_quantities() {
        let input = LoanInput {
            principal: 10_000.0,
            annual_rate_pct: 5.0,
            tenure_years: 5,
            frequency: RepaymentFrequency::Monthly,
            currency: Currency::Usd,
        };

        assert_eq!(input.number_of_payments(), 60);
        assert!((input.periodic_rate() - 0.05 / 12.0).abs() < 1e-12);
    }

    #[test]
    fn test_retirement_derived_quantities() {
        let input = RetirementInput {
            current_age: 30,
            retirement_age: 65,
            current_savings: 50_000.0,
            monthly_contribution: 500.0,
            annual_return_pct: 7.0,
            currency: Currency::Usd,
        };

        assert_eq!(input.years_to_retirement(), 35);
        assert_eq!(input.months_to_retirement(), 420);
        assert!((input.monthly_rate() - 0.07 / 12.0).abs() < 1e-12);
    }

    #[test]
    fn test_ticker_parse() {
        assert_eq!(CryptoTicker::parse("BTC"), Some(CryptoTicker::Btc));
        assert_eq!(CryptoTicker::parse("btc"), Some(CryptoTicker::Btc));
        assert_eq!(CryptoTicker::parse(" doge "), Some(CryptoTicker::Doge));
        assert_eq!(CryptoTicker::parse("SHIB"), None);
    }

    #[test]
    fn test_ticker_quote_symbol() {
        assert_eq!(CryptoTicker::Btc.quote_symbol(), "btcusd");
        assert_eq!(CryptoTicker::Eth.quote_symbol(), "ethusd");
        assert_eq!(CryptoTicker::Xlm.quote_symbol(), "xlmusd");
    }

    #[test]
    fn test_frequency_wire_format() {
        let json = serde_json::to_string(&RepaymentFrequency::BiWeekly).unwrap();
        assert_eq!(json, "\"bi-weekly\"");

        let freq: CompoundingFrequency = serde_json::from_str("\"semi-annually\"").unwrap();
        assert_eq!(freq, CompoundingFrequency::SemiAnnually);
    }
}
