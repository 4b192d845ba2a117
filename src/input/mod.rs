//! Calculator input records, validation, and form persistence

mod data;
pub mod store;
mod validate;

pub use data::{
    CompoundingFrequency, CryptoInput, CryptoTicker, Currency, InvestmentInput, LoanInput,
    RepaymentFrequency, RetirementInput,
};
pub use store::{FormStore, FormStoreExt, JsonFileStore, StoredForm};
pub use validate::{
    validate_crypto, validate_investment, validate_loan, validate_retirement, InputError,
    MAX_CRYPTO_PERIOD_YEARS, MIN_CRYPTO_AMOUNT,
};
