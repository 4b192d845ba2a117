//! Crypto future-value estimation
//!
//! Applies a fixed 10% annual growth assumption to the resolved unit price.
//! An optional remote advisor can produce the estimate instead; its reply is
//! untrusted and validated, and the deterministic path always stands behind
//! it so a result is produced for every request.

use std::time::Duration;

use async_trait::async_trait;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::input::CryptoInput;
use crate::numeric::round2;

use super::prices::{PriceResolver, FALLBACK_PRICE};

/// Fixed assumed annual growth rate; not a market model
pub const ANNUAL_GROWTH_RATE: f64 = 0.10;

/// Request timeout for the advisor call
const ADVISOR_TIMEOUT: Duration = Duration::from_secs(15);

/// Estimated current price and projected future value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CryptoResult {
    /// Resolved unit price in USD, unrounded
    pub current_price_usd: f64,

    /// Projected value in USD, rounded to cents for display
    pub future_value: f64,
}

/// A source of future-value estimates
///
/// Implementations return `None` when they cannot produce a usable result;
/// the caller decides what to fall back to.
#[async_trait]
pub trait EstimateStrategy: Send + Sync {
    async fn try_estimate(&self, input: &CryptoInput) -> Option<CryptoResult>;
}

/// Deterministic estimator: resolve the price, apply the growth formula
#[derive(Debug, Clone, Default)]
pub struct DeterministicEstimator {
    resolver: PriceResolver,
}

impl DeterministicEstimator {
    pub fn new(resolver: PriceResolver) -> Self {
        Self { resolver }
    }

    /// Estimate using a live-resolved price (async)
    pub async fn estimate(&self, input: &CryptoInput) -> CryptoResult {
        let price = self.resolver.resolve(input.ticker).await;
        project(input, price)
    }

    /// Estimate using a live-resolved price (blocking)
    pub fn estimate_blocking(&self, input: &CryptoInput) -> CryptoResult {
        let price = self.resolver.resolve_blocking(input.ticker);
        project(input, price)
    }
}

#[async_trait]
impl EstimateStrategy for DeterministicEstimator {
    async fn try_estimate(&self, input: &CryptoInput) -> Option<CryptoResult> {
        Some(self.estimate(input).await)
    }
}

/// Apply the fixed growth formula to a resolved price
///
/// `future_value = amount * price * 1.10^years`, rounded to cents. The
/// resolver guarantees a positive price; a non-positive one slipping
/// through is replaced with the placeholder rather than propagated.
fn project(input: &CryptoInput, price: f64) -> CryptoResult {
    let price = if price.is_finite() && price > 0.0 {
        price
    } else {
        FALLBACK_PRICE
    };

    let growth = (1.0 + ANNUAL_GROWTH_RATE).powi(input.period_years as i32);
    CryptoResult {
        current_price_usd: price,
        future_value: round2(input.amount * price * growth),
    }
}

/// Wire format for the advisor request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AdvisorRequest {
    crypto_amount: f64,
    crypto_ticker: &'static str,
    investment_period: u32,
}

/// Untrusted advisor reply; both fields must survive validation
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct AdvisorReply {
    #[serde(rename = "currentPriceUSD")]
    pub current_price_usd: Option<f64>,
    #[serde(rename = "futureValue")]
    pub future_value: Option<f64>,
}

impl AdvisorReply {
    /// Accept the reply only when both fields are present, finite, and the
    /// price is strictly positive
    pub fn validated(self) -> Option<CryptoResult> {
        let price = self.current_price_usd?;
        let future_value = self.future_value?;

        if !price.is_finite() || price <= 0.0 || !future_value.is_finite() {
            return None;
        }

        Some(CryptoResult {
            current_price_usd: price,
            future_value: round2(future_value),
        })
    }
}

/// Remote generative advisor for future-value estimates
///
/// Posts the calculation inputs to a hosted collaborator that is expected
/// to resolve the price itself and apply the same growth formula. Any
/// transport failure or invalid reply yields `None`.
#[derive(Debug, Clone)]
pub struct RemoteAdvisor {
    url: String,
}

impl RemoteAdvisor {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[async_trait]
impl EstimateStrategy for RemoteAdvisor {
    async fn try_estimate(&self, input: &CryptoInput) -> Option<CryptoResult> {
        let request = AdvisorRequest {
            crypto_amount: input.amount,
            crypto_ticker: input.ticker.as_str(),
            investment_period: input.period_years,
        };

        let client = reqwest::Client::builder()
            .timeout(ADVISOR_TIMEOUT)
            .build()
            .ok()?;

        let response = match client.post(&self.url).json(&request).send().await {
            Ok(response) => response,
            Err(err) => {
                warn!("advisor request failed: {}", err);
                return None;
            }
        };

        if !response.status().is_success() {
            warn!("advisor returned status {}", response.status());
            return None;
        }

        let reply: AdvisorReply = match response.json().await {
            Ok(reply) => reply,
            Err(err) => {
                warn!("advisor reply was malformed: {}", err);
                return None;
            }
        };

        let validated = reply.validated();
        if validated.is_none() {
            warn!(
                "advisor reply for {} failed validation, discarding",
                input.ticker.as_str()
            );
        }
        validated
    }
}

/// Future-value estimator with advisor delegation and deterministic fallback
#[derive(Debug, Clone, Default)]
pub struct CryptoEstimator {
    deterministic: DeterministicEstimator,
    advisor: Option<RemoteAdvisor>,
}

impl CryptoEstimator {
    /// Estimator using only the deterministic path
    pub fn new(resolver: PriceResolver) -> Self {
        Self {
            deterministic: DeterministicEstimator::new(resolver),
            advisor: None,
        }
    }

    /// Estimator that consults the advisor first
    pub fn with_advisor(resolver: PriceResolver, advisor: RemoteAdvisor) -> Self {
        Self {
            deterministic: DeterministicEstimator::new(resolver),
            advisor: Some(advisor),
        }
    }

    /// Produce an estimate; this never fails
    ///
    /// The advisor is tried first when configured. Any invalid or absent
    /// reply falls through to the deterministic path, which always
    /// produces a result.
    pub async fn estimate(&self, input: &CryptoInput) -> CryptoResult {
        if let Some(advisor) = &self.advisor {
            if let Some(result) = advisor.try_estimate(input).await {
                return result;
            }
            warn!(
                "no usable advisor estimate for {}, using deterministic path",
                input.ticker.as_str()
            );
        }

        self.deterministic.estimate(input).await
    }
}
