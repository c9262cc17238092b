//! Ledger events
//!
//! Every completed mutation appends one event to the in-order journal and
//! fans it out on a broadcast channel for observers (oracle layer,
//! front-ends). The core never consumes its own events; a lagging or
//! absent subscriber never blocks or fails a mutation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use aerosure_common::{AccountId, FlightKey, FlightStatus};

/// Events emitted by completed ledger mutations
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum LedgerEvent {
    /// The operational switch was flipped
    OperationalChanged { on: bool },

    /// An identity was added to the authorized-caller set
    CallerAuthorized { account: AccountId },

    /// An identity was removed from the authorized-caller set
    CallerDeauthorized { account: AccountId },

    /// An airline registered
    AirlineRegistered { account: AccountId, name: String },

    /// A flight registered
    FlightRegistered {
        key: FlightKey,
        name: String,
        airline: AccountId,
        departs_at: i64,
    },

    /// The oracle layer reported a flight status
    FlightStatusRecorded { key: FlightKey, status: FlightStatus },

    /// A passenger bought a policy
    InsurancePurchased {
        key: FlightKey,
        passenger: AccountId,
        insured: Decimal,
        paid: Decimal,
    },

    /// One passenger's crediting notification: amount credited this call
    /// and the resulting total balance
    InsureesCredited {
        key: FlightKey,
        passenger: AccountId,
        credited: Decimal,
        balance: Decimal,
    },

    /// A payout balance was withdrawn
    PayoutWithdrawn { passenger: AccountId, amount: Decimal },

    /// A funding contribution landed in custody
    FundsDeposited {
        contributor: AccountId,
        amount: Decimal,
        total_contribution: Decimal,
    },
}

impl LedgerEvent {
    /// Stable event-type tag, for logs and filtering
    pub fn kind(&self) -> &'static str {
        match self {
            LedgerEvent::OperationalChanged { .. } => "OperationalChanged",
            LedgerEvent::CallerAuthorized { .. } => "CallerAuthorized",
            LedgerEvent::CallerDeauthorized { .. } => "CallerDeauthorized",
            LedgerEvent::AirlineRegistered { .. } => "AirlineRegistered",
            LedgerEvent::FlightRegistered { .. } => "FlightRegistered",
            LedgerEvent::FlightStatusRecorded { .. } => "FlightStatusRecorded",
            LedgerEvent::InsurancePurchased { .. } => "InsurancePurchased",
            LedgerEvent::InsureesCredited { .. } => "InsureesCredited",
            LedgerEvent::PayoutWithdrawn { .. } => "PayoutWithdrawn",
            LedgerEvent::FundsDeposited { .. } => "FundsDeposited",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_event_json_shape() {
        let event = LedgerEvent::InsureesCredited {
            key: FlightKey::compute(&AccountId::new("acct:a"), "AB100", 1000),
            passenger: AccountId::new("acct:p1"),
            credited: dec!(0.75),
            balance: dec!(0.75),
        };

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "InsureesCredited");
        assert_eq!(json["data"]["passenger"], "acct:p1");
    }

    #[test]
    fn test_kind_matches_tag() {
        let event = LedgerEvent::OperationalChanged { on: false };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], event.kind());
    }
}
