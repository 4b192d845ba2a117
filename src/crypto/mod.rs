//! Crypto price resolution and future-value estimation

mod estimator;
mod prices;

pub use estimator::{
    AdvisorReply, CryptoEstimator, CryptoResult, DeterministicEstimator, EstimateStrategy,
    RemoteAdvisor, ANNUAL_GROWTH_RATE,
};
pub use prices::{
    MockPriceTable, PriceResolver, QuoteClient, QuoteError, DEFAULT_QUOTE_BASE_URL, FALLBACK_PRICE,
};
