//! # Aerosure Common
//!
//! Shared types, errors, and constants for the Aerosure flight-delay
//! insurance ledger.
//!
//! ## Core Types
//!
//! - [`AccountId`]: identity for airlines, passengers, and callers
//! - [`FlightKey`]: deterministic hash identifying a registered flight
//! - [`Flight`]/[`FlightStatus`]: registered flight state
//! - [`Policy`]: one insurance purchase, snapshotting the insured flight
//! - [`LedgerError`]: the whole-operation failure taxonomy

pub mod error;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{LedgerError, Result};
pub use types::{
    flight::{Flight, FlightKey, FlightStatus},
    identity::AccountId,
    policy::Policy,
};

use rust_decimal::Decimal;

/// Aerosure version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum amount a single policy will insure
pub const MAX_INSURANCE_VALUE: Decimal = Decimal::ONE;

/// Cumulative contribution at which an airline counts as funded
pub const MIN_AIRLINE_FUND: Decimal = Decimal::TEN;
