//! Insurance policy records
//!
//! One purchase = one policy. Policies snapshot the flight as it was at
//! purchase time, decoupling the record from later flight mutation. A
//! credited policy has its amount zeroed but is never removed; the policy
//! book only grows.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::flight::{Flight, FlightKey};
use crate::types::identity::AccountId;

/// A single insurance purchase
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Policy {
    /// Policy identifier
    pub id: Uuid,

    /// Insured passenger
    pub passenger: AccountId,

    /// Insured amount; zeroed when the policy is credited
    pub amount: Decimal,

    /// The flight as it was at purchase time
    pub flight: Flight,

    /// Purchase timestamp (Unix milliseconds)
    pub purchased_at: i64,
}

impl Policy {
    /// Write a new policy against a flight snapshot
    pub fn new(passenger: AccountId, amount: Decimal, flight: Flight) -> Self {
        Self {
            id: Uuid::now_v7(),
            passenger,
            amount,
            flight,
            purchased_at: chrono::Utc::now().timestamp_millis(),
        }
    }

    /// True once the policy has been credited
    pub fn is_spent(&self) -> bool {
        self.amount.is_zero()
    }

    /// The key of the insured flight, recomputed from the snapshot
    pub fn flight_key(&self) -> FlightKey {
        self.flight.key()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_flight() -> Flight {
        Flight::new("AB100", AccountId::new("acct:airline-a"), 1000)
    }

    #[test]
    fn test_new_policy_is_unspent() {
        let policy = Policy::new(AccountId::new("acct:p1"), dec!(0.5), sample_flight());
        assert!(!policy.is_spent());
        assert_eq!(policy.amount, dec!(0.5));
    }

    #[test]
    fn test_snapshot_key_survives_flight_mutation() {
        let flight = sample_flight();
        let expected = flight.key();
        let policy = Policy::new(AccountId::new("acct:p1"), dec!(0.5), flight);
        // The snapshot alone determines the key the policy matches against.
        assert_eq!(policy.flight_key(), expected);
    }
}
