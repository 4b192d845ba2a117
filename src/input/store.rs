//! Persistence of last-used form values
//!
//! The engines never touch storage; callers inject a `FormStore` when they
//! want submitted values echoed back on the next visit. `JsonFileStore`
//! keeps one JSON file per calculator under a configurable directory.

use std::error::Error;
use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Store key for the loan calculator
pub const LOAN_FORM_KEY: &str = "financeForwardLoanCalculator";
/// Store key for the investment calculator
pub const INVESTMENT_FORM_KEY: &str = "financeForwardInvestmentCalculator";
/// Store key for the retirement planner
pub const RETIREMENT_FORM_KEY: &str = "financeForwardRetirementPlanner";
/// Store key for the crypto estimator
pub const CRYPTO_FORM_KEY: &str = "financeForwardCryptoInvestmentCalculator";

/// A persisted form snapshot with the time it was saved
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredForm<T> {
    pub values: T,
    pub saved_at: DateTime<Utc>,
}

/// Key-value persistence for last-used form values
pub trait FormStore {
    /// Load the raw JSON previously saved under `key`, if any
    fn load_raw(&self, key: &str) -> Result<Option<String>, Box<dyn Error>>;

    /// Save raw JSON under `key`, replacing any previous value
    fn save_raw(&self, key: &str, json: &str) -> Result<(), Box<dyn Error>>;

    /// Remove any value saved under `key`
    fn clear(&self, key: &str) -> Result<(), Box<dyn Error>>;
}

/// Typed helpers over the raw JSON surface
pub trait FormStoreExt: FormStore {
    /// Load and decode the form saved under `key`
    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<StoredForm<T>>, Box<dyn Error>> {
        match self.load_raw(key)? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    /// Save `values` under `key`, stamped with the current time
    fn save<T: Serialize>(&self, key: &str, values: &T) -> Result<(), Box<dyn Error>> {
        let stored = StoredForm {
            values,
            saved_at: Utc::now(),
        };
        self.save_raw(key, &serde_json::to_string_pretty(&stored)?)
    }
}

impl<S: FormStore + ?Sized> FormStoreExt for S {}

/// File-backed form store: one `<key>.json` per calculator
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Create a store rooted at `dir`; the directory is created on first save
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl FormStore for JsonFileStore {
    fn load_raw(&self, key: &str) -> Result<Option<String>, Box<dyn Error>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn save_raw(&self, key: &str, json: &str) -> Result<(), Box<dyn Error>> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), json)?;
        Ok(())
    }

    fn clear(&self, key: &str) -> Result<(), Box<dyn Error>> {
        let path = self.path_for(key);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Currency, LoanInput, RepaymentFrequency};

    fn temp_store(name: &str) -> JsonFileStore {
        let dir = std::env::temp_dir().join(format!("finance_forward_store_{}", name));
        let _ = fs::remove_dir_all(&dir);
        JsonFileStore::new(dir)
    }

    #[test]
    fn test_load_missing_key() {
        let store = temp_store("missing");
        let loaded: Option<StoredForm<LoanInput>> = store.load(LOAN_FORM_KEY).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let store = temp_store("round_trip");
        let input = LoanInput {
            principal: 10_000.0,
            annual_rate_pct: 5.0,
            tenure_years: 5,
            frequency: RepaymentFrequency::Monthly,
            currency: Currency::Usd,
        };

        store.save(LOAN_FORM_KEY, &input).unwrap();
        let loaded: StoredForm<LoanInput> = store.load(LOAN_FORM_KEY).unwrap().unwrap();

        assert_eq!(loaded.values, input);
        assert!(loaded.saved_at <= Utc::now());
    }

    #[test]
    fn test_clear_removes_value() {
        let store = temp_store("clear");
        let input = LoanInput {
            principal: 500.0,
            annual_rate_pct: 0.0,
            tenure_years: 1,
            frequency: RepaymentFrequency::Weekly,
            currency: Currency::Inr,
        };

        store.save(LOAN_FORM_KEY, &input).unwrap();
        store.clear(LOAN_FORM_KEY).unwrap();

        let loaded: Option<StoredForm<LoanInput>> = store.load(LOAN_FORM_KEY).unwrap();
        assert!(loaded.is_none());

        // Clearing an absent key is not an error
        store.clear(LOAN_FORM_KEY).unwrap();
    }
}
