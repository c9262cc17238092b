//! Funds custody - pooled capital backing payouts
//!
//! Tracks two things: the cumulative contribution per identity (which only
//! gates an airline's funded status) and the pooled balance that actually
//! backs withdrawals. Insurance premiums flow into the pool without
//! touching the contribution record.

use std::collections::HashMap;

use rust_decimal::Decimal;

use aerosure_common::{AccountId, LedgerError, Result};

/// Pooled capital plus per-contributor funding records
#[derive(Debug, Default)]
pub struct FundsCustody {
    contributions: HashMap<AccountId, Decimal>,
    pool: Decimal,
}

impl FundsCustody {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a funding contribution and add it to the pool
    ///
    /// Registration is not required to contribute; funded status is only
    /// meaningful for identities that also registered as airlines.
    pub fn fund(&mut self, contributor: AccountId, amount: Decimal) -> Result<Decimal> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::ZeroAmount);
        }

        let total = self.contributions.entry(contributor).or_insert(Decimal::ZERO);
        *total += amount;
        self.pool += amount;
        Ok(*total)
    }

    /// Add an insurance premium to the pool (no contribution record)
    pub fn receive_premium(&mut self, amount: Decimal) {
        self.pool += amount;
    }

    /// Pay `amount` out of the pool, failing when it cannot cover it
    pub fn pay_out(&mut self, amount: Decimal) -> Result<()> {
        if amount > self.pool {
            return Err(LedgerError::TransferFailure {
                requested: amount,
                available: self.pool,
            });
        }
        self.pool -= amount;
        Ok(())
    }

    /// Cumulative contribution for an identity
    pub fn contribution_of(&self, account: &AccountId) -> Decimal {
        self.contributions
            .get(account)
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    /// Funded means cumulative contribution at or above the threshold
    ///
    /// The threshold comes from ledger configuration
    /// ([`aerosure_common::MIN_AIRLINE_FUND`] by default).
    pub fn is_funded(&self, account: &AccountId, threshold: Decimal) -> bool {
        self.contribution_of(account) >= threshold
    }

    /// Current pooled balance
    pub fn pool(&self) -> Decimal {
        self.pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_fund_accumulates_toward_threshold() {
        let mut custody = FundsCustody::new();
        let a = AccountId::new("acct:airline-a");

        custody.fund(a.clone(), dec!(4)).unwrap();
        assert!(!custody.is_funded(&a, dec!(10)));

        custody.fund(a.clone(), dec!(6)).unwrap();
        assert!(custody.is_funded(&a, dec!(10)));
        assert_eq!(custody.contribution_of(&a), dec!(10));
        assert_eq!(custody.pool(), dec!(10));
    }

    #[test]
    fn test_zero_and_negative_contributions_rejected() {
        let mut custody = FundsCustody::new();
        let a = AccountId::new("acct:airline-a");

        assert_eq!(custody.fund(a.clone(), dec!(0)), Err(LedgerError::ZeroAmount));
        assert_eq!(custody.fund(a.clone(), dec!(-1)), Err(LedgerError::ZeroAmount));
        assert_eq!(custody.pool(), Decimal::ZERO);
    }

    #[test]
    fn test_premiums_do_not_count_as_contributions() {
        let mut custody = FundsCustody::new();
        custody.receive_premium(dec!(0.5));

        assert_eq!(custody.pool(), dec!(0.5));
        assert!(!custody.is_funded(&AccountId::new("acct:p1"), dec!(10)));
    }

    #[test]
    fn test_pay_out_bounded_by_pool() {
        let mut custody = FundsCustody::new();
        custody.receive_premium(dec!(0.5));

        let result = custody.pay_out(dec!(0.75));
        assert!(matches!(result, Err(LedgerError::TransferFailure { .. })));
        assert_eq!(custody.pool(), dec!(0.5));

        custody.pay_out(dec!(0.5)).unwrap();
        assert_eq!(custody.pool(), Decimal::ZERO);
    }
}
