//! Crypto price resolution with tiered fallback
//!
//! Resolution order for a ticker:
//! 1. Live quote from the public ticker endpoint
//! 2. Static mock-price table
//! 3. Constant placeholder price of 1.0
//!
//! Every failure is absorbed here; the resolver only ever degrades to the
//! next tier and the returned price is always strictly positive.

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use log::{debug, warn};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::input::CryptoTicker;

/// Default public ticker endpoint (Gemini)
pub const DEFAULT_QUOTE_BASE_URL: &str = "https://api.gemini.com";

/// Placeholder price when every tier has failed; never zero or negative so
/// downstream multiplication stays well-defined
pub const FALLBACK_PRICE: f64 = 1.0;

/// Request timeout for a single quote lookup; no retries are attempted
const QUOTE_TIMEOUT: Duration = Duration::from_secs(10);

/// Why a live quote lookup failed
#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("unexpected status: {0}")]
    Status(u16),

    #[error("malformed quote body: {0}")]
    Parse(String),

    #[error("missing, non-numeric, or non-positive last price")]
    InvalidPrice,
}

/// Public ticker response; `last` arrives as a string but numeric bodies
/// are accepted too
#[derive(Debug, Deserialize)]
struct TickerResponse {
    last: Option<Value>,
}

/// HTTP client for the public ticker endpoint
#[derive(Debug, Clone)]
pub struct QuoteClient {
    base_url: String,
}

impl Default for QuoteClient {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteClient {
    /// Client against the default endpoint
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_QUOTE_BASE_URL)
    }

    /// Client against a specific endpoint (tests, regional deployments)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn quote_url(&self, ticker: CryptoTicker) -> String {
        format!("{}/v1/pubticker/{}", self.base_url, ticker.quote_symbol())
    }

    /// Fetch the last traded price for a ticker (async)
    pub async fn fetch_last(&self, ticker: CryptoTicker) -> Result<f64, QuoteError> {
        let url = self.quote_url(ticker);
        debug!("fetching live quote from {}", url);

        let client = reqwest::Client::builder()
            .timeout(QUOTE_TIMEOUT)
            .build()
            .map_err(|e| QuoteError::Request(e.to_string()))?;

        let response = client
            .get(&url)
            .send()
            .await
            .map_err(|e| QuoteError::Request(e.to_string()))?;

        if !response.status().is_success() {
            return Err(QuoteError::Status(response.status().as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| QuoteError::Request(e.to_string()))?;

        Self::parse_last(&body)
    }

    /// Fetch the last traded price for a ticker (blocking)
    pub fn fetch_last_blocking(&self, ticker: CryptoTicker) -> Result<f64, QuoteError> {
        let url = self.quote_url(ticker);
        debug!("fetching live quote from {}", url);

        let client = reqwest::blocking::Client::builder()
            .timeout(QUOTE_TIMEOUT)
            .build()
            .map_err(|e| QuoteError::Request(e.to_string()))?;

        let response = client
            .get(&url)
            .send()
            .map_err(|e| QuoteError::Request(e.to_string()))?;

        if !response.status().is_success() {
            return Err(QuoteError::Status(response.status().as_u16()));
        }

        let body = response
            .text()
            .map_err(|e| QuoteError::Request(e.to_string()))?;

        Self::parse_last(&body)
    }

    /// Extract a finite, strictly positive last price from a response body
    fn parse_last(body: &str) -> Result<f64, QuoteError> {
        let response: TickerResponse =
            serde_json::from_str(body).map_err(|e| QuoteError::Parse(e.to_string()))?;

        let last = match response.last {
            Some(Value::String(s)) => s.trim().parse::<f64>().map_err(|_| QuoteError::InvalidPrice)?,
            Some(Value::Number(n)) => n.as_f64().ok_or(QuoteError::InvalidPrice)?,
            _ => return Err(QuoteError::InvalidPrice),
        };

        if last.is_finite() && last > 0.0 {
            Ok(last)
        } else {
            Err(QuoteError::InvalidPrice)
        }
    }
}

/// Static table of representative prices used when live quotes fail
#[derive(Debug, Clone)]
pub struct MockPriceTable {
    prices: HashMap<CryptoTicker, f64>,
}

impl Default for MockPriceTable {
    /// Built-in representative prices covering every supported ticker
    fn default() -> Self {
        let prices = HashMap::from([
            (CryptoTicker::Btc, 110_000.0),
            (CryptoTicker::Eth, 5_500.0),
            (CryptoTicker::Sol, 200.0),
            (CryptoTicker::Ada, 0.80),
            (CryptoTicker::Doge, 0.15),
            (CryptoTicker::Dot, 7.00),
            (CryptoTicker::Link, 15.00),
            (CryptoTicker::Ltc, 80.00),
            (CryptoTicker::Bch, 400.00),
            (CryptoTicker::Xlm, 0.10),
            (CryptoTicker::Fil, 5.00),
            (CryptoTicker::Trx, 0.12),
            (CryptoTicker::Xmr, 120.00),
            (CryptoTicker::Eos, 0.80),
        ]);
        Self { prices }
    }
}

impl MockPriceTable {
    /// Empty table; every lookup falls through to the constant tier
    pub fn empty() -> Self {
        Self {
            prices: HashMap::new(),
        }
    }

    /// Load table overrides from a CSV file with `ticker,price_usd` rows
    ///
    /// Rows with unknown tickers are skipped.
    pub fn from_csv_path(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let mut reader = csv::Reader::from_path(path)?;
        let mut prices = HashMap::new();

        for result in reader.records() {
            let record = result?;
            let price: f64 = record[1].parse()?;
            if let Some(ticker) = CryptoTicker::parse(&record[0]) {
                prices.insert(ticker, price);
            }
        }

        Ok(Self { prices })
    }

    /// Look up the table price for a ticker
    pub fn get(&self, ticker: CryptoTicker) -> Option<f64> {
        self.prices.get(&ticker).copied()
    }
}

/// Three-tier price resolver: live quote, static table, constant
#[derive(Debug, Clone, Default)]
pub struct PriceResolver {
    client: QuoteClient,
    table: MockPriceTable,
}

impl PriceResolver {
    pub fn new(client: QuoteClient, table: MockPriceTable) -> Self {
        Self { client, table }
    }

    /// Resolve a strictly positive USD unit price for a ticker (async)
    pub async fn resolve(&self, ticker: CryptoTicker) -> f64 {
        match self.client.fetch_last(ticker).await {
            Ok(price) => price,
            Err(err) => {
                warn!(
                    "live quote for {} failed ({}), falling back to mock price",
                    ticker.as_str(),
                    err
                );
                self.resolve_from_table(ticker)
            }
        }
    }

    /// Resolve a strictly positive USD unit price for a ticker (blocking)
    pub fn resolve_blocking(&self, ticker: CryptoTicker) -> f64 {
        match self.client.fetch_last_blocking(ticker) {
            Ok(price) => price,
            Err(err) => {
                warn!(
                    "live quote for {} failed ({}), falling back to mock price",
                    ticker.as_str(),
                    err
                );
                self.resolve_from_table(ticker)
            }
        }
    }

    /// Table tier with the constant tier behind it
    fn resolve_from_table(&self, ticker: CryptoTicker) -> f64 {
        match self.table.get(ticker) {
            Some(price) if price.is_finite() && price > 0.0 => price,
            Some(price) => {
                warn!(
                    "mock price {} for {} is not positive, using placeholder {}",
                    price,
                    ticker.as_str(),
                    FALLBACK_PRICE
                );
                FALLBACK_PRICE
            }
            None => {
                warn!(
                    "no mock price for {}, using placeholder {}",
                    ticker.as_str(),
                    FALLBACK_PRICE
                );
                FALLBACK_PRICE
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Endpoint that refuses connections immediately (discard port)
    const UNREACHABLE_BASE_URL: &str = "http://127.0.0.1:9";

    #[test]
    fn test_quote_url() {
        let client = QuoteClient::new();
        assert_eq!(
            client.quote_url(CryptoTicker::Btc),
            "https://api.gemini.com/v1/pubticker/btcusd"
        );

        let custom = QuoteClient::with_base_url("http://localhost:8080");
        assert_eq!(
            custom.quote_url(CryptoTicker::Doge),
            "http://localhost:8080/v1/pubticker/dogeusd"
        );
    }

    #[test]
    fn test_parse_last_string_price() {
        let body = r#"{"bid":"109950.00","ask":"110050.00","last":"110000.25"}"#;
        let price = QuoteClient::parse_last(body).unwrap();
        assert_eq!(price, 110_000.25);
    }

    #[test]
    fn test_parse_last_numeric_price() {
        let body = r#"{"last":5500.5}"#;
        assert_eq!(QuoteClient::parse_last(body).unwrap(), 5_500.5);
    }

    #[test]
    fn test_parse_last_rejects_bad_bodies() {
        assert!(matches!(
            QuoteClient::parse_last("not json"),
            Err(QuoteError::Parse(_))
        ));
        assert!(matches!(
            QuoteClient::parse_last(r#"{"bid":"1.0"}"#),
            Err(QuoteError::InvalidPrice)
        ));
        assert!(matches!(
            QuoteClient::parse_last(r#"{"last":"0"}"#),
            Err(QuoteError::InvalidPrice)
        ));
        assert!(matches!(
            QuoteClient::parse_last(r#"{"last":"-5"}"#),
            Err(QuoteError::InvalidPrice)
        ));
        assert!(matches!(
            QuoteClient::parse_last(r#"{"last":"NaN"}"#),
            Err(QuoteError::InvalidPrice)
        ));
        assert!(matches!(
            QuoteClient::parse_last(r#"{"last":"abc"}"#),
            Err(QuoteError::InvalidPrice)
        ));
    }

    #[test]
    fn test_default_table_covers_all_tickers() {
        let table = MockPriceTable::default();
        for ticker in CryptoTicker::ALL {
            let price = table.get(ticker).unwrap();
            assert!(price > 0.0, "{} has non-positive mock price", ticker.as_str());
        }
        assert_eq!(table.get(CryptoTicker::Btc), Some(110_000.0));
        assert_eq!(table.get(CryptoTicker::Ada), Some(0.80));
    }

    #[test]
    fn test_load_table_from_csv() {
        let table = MockPriceTable::from_csv_path(Path::new("data/mock_prices.csv")).unwrap();

        assert_eq!(table.get(CryptoTicker::Btc), Some(110_000.0));
        assert_eq!(table.get(CryptoTicker::Trx), Some(0.12));
        for ticker in CryptoTicker::ALL {
            assert!(table.get(ticker).is_some(), "{} missing", ticker.as_str());
        }
    }

    #[test]
    fn test_resolver_falls_back_to_table() {
        let resolver = PriceResolver::new(
            QuoteClient::with_base_url(UNREACHABLE_BASE_URL),
            MockPriceTable::default(),
        );

        assert_eq!(resolver.resolve_blocking(CryptoTicker::Btc), 110_000.0);
        assert_eq!(resolver.resolve_blocking(CryptoTicker::Xlm), 0.10);
    }

    #[test]
    fn test_resolver_constant_tier() {
        let resolver = PriceResolver::new(
            QuoteClient::with_base_url(UNREACHABLE_BASE_URL),
            MockPriceTable::empty(),
        );

        assert_eq!(resolver.resolve_blocking(CryptoTicker::Eth), FALLBACK_PRICE);
    }

    #[test]
    fn test_resolver_rejects_non_positive_table_entry() {
        let table = MockPriceTable {
            prices: HashMap::from([(CryptoTicker::Eos, 0.0)]),
        };
        let resolver =
            PriceResolver::new(QuoteClient::with_base_url(UNREACHABLE_BASE_URL), table);

        assert_eq!(resolver.resolve_blocking(CryptoTicker::Eos), FALLBACK_PRICE);
    }
}
