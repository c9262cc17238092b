//! Airline registry
//!
//! Airlines register once under their identity and are never deleted.
//! Funded status is not stored here; it is derived from cumulative
//! contributions held in custody (see [`crate::custody`]).

use std::collections::HashMap;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use aerosure_common::{AccountId, LedgerError, Result};

/// A registered airline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Airline {
    /// Airline identity, immutable once registered
    pub account: AccountId,

    /// Display name
    pub name: String,

    /// Always true for a stored record
    pub registered: bool,

    /// Registration timestamp (Unix milliseconds)
    pub registered_at: i64,
}

/// Registered airlines, keyed by identity
#[derive(Debug, Default)]
pub struct AirlineRegistry {
    airlines: HashMap<AccountId, Airline>,
}

impl AirlineRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an airline; an identity registers at most once
    pub fn register(&mut self, account: AccountId, name: impl Into<String>) -> Result<&Airline> {
        if self.airlines.contains_key(&account) {
            return Err(LedgerError::AlreadyRegistered {
                what: format!("airline {}", account),
            });
        }

        let airline = Airline {
            account: account.clone(),
            name: name.into(),
            registered: true,
            registered_at: Utc::now().timestamp_millis(),
        };
        Ok(self.airlines.entry(account).or_insert(airline))
    }

    /// Whether an identity has registered
    pub fn is_registered(&self, account: &AccountId) -> bool {
        self.airlines.contains_key(account)
    }

    /// Look up a registered airline
    pub fn get(&self, account: &AccountId) -> Option<&Airline> {
        self.airlines.get(account)
    }

    /// How many airlines have registered
    pub fn count(&self) -> usize {
        self.airlines.len()
    }
}
