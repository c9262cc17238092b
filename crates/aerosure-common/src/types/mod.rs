//! Core data types for the insurance ledger

pub mod flight;
pub mod identity;
pub mod policy;

pub use flight::{Flight, FlightKey, FlightStatus};
pub use identity::AccountId;
pub use policy::Policy;
