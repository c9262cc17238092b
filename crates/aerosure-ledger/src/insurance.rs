//! Policy book - purchased insurance policies
//!
//! Append-only: policies are written on purchase and their amount is zeroed
//! on crediting, never removed. A per-flight index maps keys to policy
//! positions so crediting touches only the matching policies rather than
//! scanning the whole book; insertion order within a flight is preserved,
//! so passengers are credited in purchase order.

use std::collections::HashMap;

use rust_decimal::Decimal;

use aerosure_common::{AccountId, Flight, FlightKey, Policy};

/// One passenger's share of a crediting pass
#[derive(Debug, Clone, PartialEq)]
pub struct CreditEntry {
    pub passenger: AccountId,
    pub refund: Decimal,
}

/// All policies ever written, with a flight-key index
#[derive(Debug, Default)]
pub struct PolicyBook {
    policies: Vec<Policy>,
    by_flight: HashMap<FlightKey, Vec<usize>>,
}

impl PolicyBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a policy for `passenger` against a flight snapshot
    ///
    /// Policies are never merged; each purchase is a separate line item
    /// even for the same passenger/flight pair.
    pub fn underwrite(
        &mut self,
        passenger: AccountId,
        amount: Decimal,
        flight: Flight,
    ) -> &Policy {
        let key = flight.key();
        let policy = Policy::new(passenger, amount, flight);

        let index = self.policies.len();
        self.policies.push(policy);
        self.by_flight.entry(key).or_default().push(index);
        &self.policies[index]
    }

    /// Credit every unspent policy matching `key` at amount + amount/2
    ///
    /// Zeroing the policy amount is what makes a second pass over the same
    /// flight a no-op; there is no separate credited flag. Returns the
    /// per-passenger refunds in purchase order.
    pub fn credit(&mut self, key: &FlightKey) -> Vec<CreditEntry> {
        let Some(indices) = self.by_flight.get(key) else {
            return Vec::new();
        };

        let mut entries = Vec::new();
        for &i in indices {
            let policy = &mut self.policies[i];
            if policy.amount.is_zero() {
                continue;
            }
            let refund = policy.amount + policy.amount / Decimal::TWO;
            policy.amount = Decimal::ZERO;
            entries.push(CreditEntry {
                passenger: policy.passenger.clone(),
                refund,
            });
        }
        entries
    }

    /// Unspent amount currently written against `key`
    pub fn exposure(&self, key: &FlightKey) -> Decimal {
        self.by_flight
            .get(key)
            .map(|indices| indices.iter().map(|&i| self.policies[i].amount).sum())
            .unwrap_or(Decimal::ZERO)
    }

    /// Total number of policies ever written
    pub fn len(&self) -> usize {
        self.policies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }

    /// All policies, in purchase order
    pub fn policies(&self) -> &[Policy] {
        &self.policies
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn flight() -> Flight {
        Flight::new("AB100", AccountId::new("acct:airline-a"), 1000)
    }

    fn other_flight() -> Flight {
        Flight::new("CD200", AccountId::new("acct:airline-a"), 2000)
    }

    #[test]
    fn test_purchases_never_merge() {
        let mut book = PolicyBook::new();
        let p = AccountId::new("acct:p1");

        book.underwrite(p.clone(), dec!(0.3), flight());
        book.underwrite(p.clone(), dec!(0.2), flight());

        assert_eq!(book.len(), 2);
        assert_eq!(book.exposure(&flight().key()), dec!(0.5));
    }

    #[test]
    fn test_credit_pays_150_percent() {
        let mut book = PolicyBook::new();
        book.underwrite(AccountId::new("acct:p1"), dec!(0.5), flight());

        let entries = book.credit(&flight().key());
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].refund, dec!(0.75));
    }

    #[test]
    fn test_credit_is_idempotent() {
        let mut book = PolicyBook::new();
        book.underwrite(AccountId::new("acct:p1"), dec!(0.5), flight());
        book.underwrite(AccountId::new("acct:p2"), dec!(1), flight());

        let first = book.credit(&flight().key());
        assert_eq!(first.len(), 2);

        // Policies stay in the book, spent
        assert_eq!(book.len(), 2);
        assert!(book.policies().iter().all(|p| p.is_spent()));

        let second = book.credit(&flight().key());
        assert!(second.is_empty());
    }

    #[test]
    fn test_credit_total_is_1_5x_matched_exposure() {
        let mut book = PolicyBook::new();
        book.underwrite(AccountId::new("acct:p1"), dec!(0.4), flight());
        book.underwrite(AccountId::new("acct:p2"), dec!(0.6), flight());
        book.underwrite(AccountId::new("acct:p3"), dec!(1), other_flight());

        let matched = book.exposure(&flight().key());
        let total: Decimal = book.credit(&flight().key()).iter().map(|e| e.refund).sum();

        assert_eq!(total, matched * dec!(1.5));
        // The other flight's exposure is untouched
        assert_eq!(book.exposure(&other_flight().key()), dec!(1));
    }

    #[test]
    fn test_credit_order_is_purchase_order() {
        let mut book = PolicyBook::new();
        book.underwrite(AccountId::new("acct:p2"), dec!(0.1), flight());
        book.underwrite(AccountId::new("acct:p1"), dec!(0.1), flight());

        let entries = book.credit(&flight().key());
        assert_eq!(entries[0].passenger, AccountId::new("acct:p2"));
        assert_eq!(entries[1].passenger, AccountId::new("acct:p1"));
    }

    #[test]
    fn test_credit_unknown_flight_is_empty() {
        let mut book = PolicyBook::new();
        assert!(book.credit(&flight().key()).is_empty());
    }
}
