//! AWS Lambda handler exposing the calculators as a JSON API
//!
//! Accepts a tagged request selecting a calculator and returns its result
//! record. Validation failures map to 400; the crypto path consults the
//! advisor endpoint when `ADVISOR_URL` is set and always falls back to the
//! deterministic estimator.
//!
//! Supports Lambda Function URLs for direct HTTP access.

use finance_forward::crypto::{
    CryptoEstimator, MockPriceTable, PriceResolver, QuoteClient, RemoteAdvisor,
    DEFAULT_QUOTE_BASE_URL,
};
use finance_forward::input::{
    self, CompoundingFrequency, Currency, RepaymentFrequency,
};
use finance_forward::{compute_investment_growth, compute_loan, compute_retirement_projection};
use lambda_http::{run, service_fn, Body, Error, Request, Response};
use serde::{Deserialize, Serialize};
use std::env;

/// Incoming calculation request, tagged by calculator
#[derive(Debug, Deserialize)]
#[serde(tag = "calculator", rename_all = "lowercase")]
enum CalcRequest {
    #[serde(rename_all = "camelCase")]
    Loan {
        loan_amount: f64,
        interest_rate: f64,
        loan_tenure: u32,
        repayment_frequency: RepaymentFrequency,
        #[serde(default)]
        currency: Currency,
    },

    #[serde(rename_all = "camelCase")]
    Investment {
        principal_amount: f64,
        annual_interest_rate: f64,
        investment_period: u32,
        compounding_frequency: CompoundingFrequency,
        #[serde(default)]
        currency: Currency,
    },

    #[serde(rename_all = "camelCase")]
    Retirement {
        current_age: u8,
        retirement_age: u8,
        current_savings: f64,
        monthly_contribution: f64,
        expected_return_rate: f64,
        #[serde(default)]
        currency: Currency,
    },

    #[serde(rename_all = "camelCase")]
    Crypto {
        crypto_amount: f64,
        crypto_ticker: String,
        investment_period: u32,
    },
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

fn error_response(status: u16, message: &str) -> Response<Body> {
    let body = serde_json::to_string(&ErrorBody {
        error: message.to_string(),
    })
    .unwrap();
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Body::Text(body))
        .unwrap()
}

fn json_response<T: Serialize>(body: &T) -> Response<Body> {
    Response::builder()
        .status(200)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
        .body(Body::Text(serde_json::to_string(body).unwrap()))
        .unwrap()
}

/// Build the crypto estimator from the environment
///
/// `QUOTE_BASE_URL` overrides the ticker endpoint; `ADVISOR_URL` enables
/// the generative advisor in front of the deterministic path.
fn build_estimator() -> CryptoEstimator {
    let base_url =
        env::var("QUOTE_BASE_URL").unwrap_or_else(|_| DEFAULT_QUOTE_BASE_URL.to_string());
    let resolver = PriceResolver::new(
        QuoteClient::with_base_url(base_url),
        MockPriceTable::default(),
    );

    match env::var("ADVISOR_URL") {
        Ok(url) if !url.is_empty() => {
            CryptoEstimator::with_advisor(resolver, RemoteAdvisor::new(url))
        }
        _ => CryptoEstimator::new(resolver),
    }
}

/// Lambda handler function
async fn handler(event: Request) -> Result<Response<Body>, Error> {
    // Handle CORS preflight
    if event.method().as_str() == "OPTIONS" {
        return Ok(Response::builder()
            .status(200)
            .header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Methods", "POST, OPTIONS")
            .header("Access-Control-Allow-Headers", "Content-Type")
            .body(Body::Empty)
            .unwrap());
    }

    // Parse request body
    let body = event.body();
    let body_str = match body {
        Body::Text(s) => s.clone(),
        Body::Binary(b) => String::from_utf8_lossy(b).to_string(),
        Body::Empty => "{}".to_string(),
    };

    let request: CalcRequest = match serde_json::from_str(&body_str) {
        Ok(r) => r,
        Err(e) => {
            return Ok(error_response(400, &format!("Invalid JSON: {}", e)));
        }
    };

    let response = match request {
        CalcRequest::Loan {
            loan_amount,
            interest_rate,
            loan_tenure,
            repayment_frequency,
            currency,
        } => {
            match input::validate_loan(
                loan_amount,
                interest_rate,
                loan_tenure,
                repayment_frequency,
                currency,
            ) {
                Ok(loan) => json_response(&compute_loan(&loan)),
                Err(e) => error_response(400, &e.to_string()),
            }
        }

        CalcRequest::Investment {
            principal_amount,
            annual_interest_rate,
            investment_period,
            compounding_frequency,
            currency,
        } => {
            match input::validate_investment(
                principal_amount,
                annual_interest_rate,
                investment_period,
                compounding_frequency,
                currency,
            ) {
                Ok(investment) => json_response(&compute_investment_growth(&investment)),
                Err(e) => error_response(400, &e.to_string()),
            }
        }

        CalcRequest::Retirement {
            current_age,
            retirement_age,
            current_savings,
            monthly_contribution,
            expected_return_rate,
            currency,
        } => {
            match input::validate_retirement(
                current_age,
                retirement_age,
                current_savings,
                monthly_contribution,
                expected_return_rate,
                currency,
            ) {
                Ok(retirement) => json_response(&compute_retirement_projection(&retirement)),
                Err(e) => error_response(400, &e.to_string()),
            }
        }

        CalcRequest::Crypto {
            crypto_amount,
            crypto_ticker,
            investment_period,
        } => {
            match input::validate_crypto(crypto_amount, &crypto_ticker, investment_period) {
                Ok(crypto) => {
                    let estimator = build_estimator();
                    json_response(&estimator.estimate(&crypto).await)
                }
                Err(e) => error_response(400, &e.to_string()),
            }
        }
    };

    Ok(response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
