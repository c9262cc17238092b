//! Payout ledger - claimable balances per passenger
//!
//! Balances are created implicitly on first credit, drained to zero by a
//! withdrawal, and may be recredited later. The zero-then-transfer ordering
//! for withdrawals lives in the top-level ledger; this module provides the
//! take/restore pair it needs for all-or-nothing semantics.

use std::collections::HashMap;

use rust_decimal::Decimal;

use aerosure_common::AccountId;

/// Claimable payout balances
#[derive(Debug, Default)]
pub struct PayoutLedger {
    balances: HashMap<AccountId, Decimal>,
}

impl PayoutLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current claimable balance; zero for unknown passengers
    pub fn balance_of(&self, passenger: &AccountId) -> Decimal {
        self.balances
            .get(passenger)
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    /// Add a refund to a passenger's balance, returning the new total
    pub fn credit(&mut self, passenger: AccountId, refund: Decimal) -> Decimal {
        let balance = self.balances.entry(passenger).or_insert(Decimal::ZERO);
        *balance += refund;
        *balance
    }

    /// Drain a balance to zero, returning what was held
    ///
    /// Probing a passenger that never held a balance takes nothing and
    /// leaves no entry behind.
    pub fn take(&mut self, passenger: &AccountId) -> Decimal {
        match self.balances.get_mut(passenger) {
            Some(balance) => std::mem::replace(balance, Decimal::ZERO),
            None => Decimal::ZERO,
        }
    }

    /// Undo a `take` after a failed transfer
    pub fn restore(&mut self, passenger: &AccountId, amount: Decimal) {
        self.balances.insert(passenger.clone(), amount);
    }

    /// Number of passengers with a tracked balance entry
    pub fn len(&self) -> usize {
        self.balances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balances.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_credit_accumulates() {
        let mut ledger = PayoutLedger::new();
        let p = AccountId::new("acct:p1");

        assert_eq!(ledger.credit(p.clone(), dec!(0.75)), dec!(0.75));
        assert_eq!(ledger.credit(p.clone(), dec!(0.25)), dec!(1));
        assert_eq!(ledger.balance_of(&p), dec!(1));
    }

    #[test]
    fn test_take_drains_to_zero() {
        let mut ledger = PayoutLedger::new();
        let p = AccountId::new("acct:p1");
        ledger.credit(p.clone(), dec!(0.75));

        assert_eq!(ledger.take(&p), dec!(0.75));
        assert_eq!(ledger.balance_of(&p), Decimal::ZERO);
        // A second take yields nothing
        assert_eq!(ledger.take(&p), Decimal::ZERO);
    }

    #[test]
    fn test_take_unknown_passenger_leaves_no_residue() {
        let mut ledger = PayoutLedger::new();

        assert_eq!(ledger.take(&AccountId::new("acct:ghost")), Decimal::ZERO);
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_restore_after_failed_transfer() {
        let mut ledger = PayoutLedger::new();
        let p = AccountId::new("acct:p1");
        ledger.credit(p.clone(), dec!(0.75));

        let taken = ledger.take(&p);
        ledger.restore(&p, taken);
        assert_eq!(ledger.balance_of(&p), dec!(0.75));
    }

    #[test]
    fn test_recredit_after_withdrawal() {
        let mut ledger = PayoutLedger::new();
        let p = AccountId::new("acct:p1");

        ledger.credit(p.clone(), dec!(0.75));
        ledger.take(&p);
        assert_eq!(ledger.credit(p.clone(), dec!(0.3)), dec!(0.3));
    }
}
