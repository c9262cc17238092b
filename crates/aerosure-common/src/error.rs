//! Error types for the Aerosure ledger
//!
//! Every failure is a whole-operation abort: an operation that returns one
//! of these variants has left the ledger state untouched. Nothing is
//! retried internally; callers re-issue after resolving the precondition.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::types::flight::FlightKey;
use crate::types::identity::AccountId;

/// Result type alias using LedgerError
pub type Result<T> = std::result::Result<T, LedgerError>;

/// Unified error type for ledger operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LedgerError {
    /// A mutating call arrived while the operational switch is off
    #[error("Ledger is not operational")]
    NotOperational,

    /// Caller is not in the authorized-caller set
    #[error("Caller {caller} is not authorized")]
    Unauthorized { caller: AccountId },

    /// Caller is not the contract owner (owner-only operation)
    #[error("Caller {caller} is not the owner")]
    NotOwner { caller: AccountId },

    /// Duplicate airline identity or duplicate flight key
    #[error("Already registered: {what}")]
    AlreadyRegistered { what: String },

    /// Purchase or status update against an unregistered flight key
    #[error("Flight not found: {key}")]
    FlightNotFound { key: FlightKey },

    /// Purchase amount is not positive
    #[error("Invalid payment amount: {amount}")]
    InvalidPayment { amount: Decimal },

    /// A funding contribution with a non-positive amount
    #[error("Contribution amount must be positive")]
    ZeroAmount,

    /// Payout could not be completed against the custody pool
    #[error("Transfer failed: requested {requested}, pool holds {available}")]
    TransferFailure {
        requested: Decimal,
        available: Decimal,
    },
}
