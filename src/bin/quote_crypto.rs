//! Resolve a crypto price and estimate its future value
//!
//! Usage: quote_crypto [TICKER] [AMOUNT] [YEARS]
//! Accepts config via environment variables:
//!   QUOTE_BASE_URL - override the public ticker endpoint

use anyhow::{Context, Result};
use finance_forward::crypto::{
    DeterministicEstimator, MockPriceTable, PriceResolver, QuoteClient, ANNUAL_GROWTH_RATE,
    DEFAULT_QUOTE_BASE_URL,
};
use finance_forward::input::validate_crypto;
use std::env;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let ticker = args.get(1).map(String::as_str).unwrap_or("BTC");
    let amount: f64 = args
        .get(2)
        .map(|v| v.parse())
        .transpose()
        .context("AMOUNT must be a number")?
        .unwrap_or(1.0);
    let years: u32 = args
        .get(3)
        .map(|v| v.parse())
        .transpose()
        .context("YEARS must be a whole number")?
        .unwrap_or(5);

    let input = validate_crypto(amount, ticker, years)?;

    let base_url =
        env::var("QUOTE_BASE_URL").unwrap_or_else(|_| DEFAULT_QUOTE_BASE_URL.to_string());
    let resolver = PriceResolver::new(
        QuoteClient::with_base_url(base_url),
        MockPriceTable::default(),
    );
    let estimator = DeterministicEstimator::new(resolver);

    let result = estimator.estimate_blocking(&input);

    println!("{} x {}", input.amount, input.ticker.as_str());
    println!("  Current price: ${:.2} per unit", result.current_price_usd);
    println!(
        "  Holding value: ${:.2}",
        input.amount * result.current_price_usd
    );
    println!(
        "  Future value after {} years at {:.0}%/yr: ${:.2}",
        input.period_years,
        ANNUAL_GROWTH_RATE * 100.0,
        result.future_value
    );

    Ok(())
}
