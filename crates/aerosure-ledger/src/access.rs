//! Access gate - operational switch, owner, authorized-caller set
//!
//! Every mutating ledger operation passes through [`AccessGate::check`]
//! before touching state. The two owner-only operations (the switch itself
//! and caller authorization) go through [`AccessGate::require_owner`].

use std::collections::HashSet;

use aerosure_common::{AccountId, LedgerError, Result};

/// Cross-cutting gate for all mutating operations
#[derive(Debug)]
pub struct AccessGate {
    /// Contract owner, fixed at construction
    owner: AccountId,

    /// Global switch; when off, all mutation except the switch itself fails
    operational: bool,

    /// Identities permitted to invoke privileged operations
    authorized: HashSet<AccountId>,
}

impl AccessGate {
    /// Create a gate owned by `owner`, operational, with an empty allowlist
    pub fn new(owner: AccountId) -> Self {
        Self {
            owner,
            operational: true,
            authorized: HashSet::new(),
        }
    }

    /// Whether mutation is currently allowed at all
    pub fn is_operational(&self) -> bool {
        self.operational
    }

    /// The owner identity
    pub fn owner(&self) -> &AccountId {
        &self.owner
    }

    /// Whether `account` may call privileged operations
    ///
    /// The owner is implicitly authorized.
    pub fn is_authorized(&self, account: &AccountId) -> bool {
        *account == self.owner || self.authorized.contains(account)
    }

    /// Guard for owner-only operations
    pub fn require_owner(&self, caller: &AccountId) -> Result<()> {
        if *caller != self.owner {
            return Err(LedgerError::NotOwner {
                caller: caller.clone(),
            });
        }
        Ok(())
    }

    /// Guard for privileged mutating operations
    ///
    /// Checks the operational switch first, then the allowlist. Failing
    /// either aborts the caller's operation before any state is touched.
    pub fn check(&self, caller: &AccountId) -> Result<()> {
        if !self.operational {
            return Err(LedgerError::NotOperational);
        }
        if !self.is_authorized(caller) {
            return Err(LedgerError::Unauthorized {
                caller: caller.clone(),
            });
        }
        Ok(())
    }

    /// Flip the operational switch; exempt from the operational check
    pub fn set_operational(&mut self, caller: &AccountId, on: bool) -> Result<()> {
        self.require_owner(caller)?;
        self.operational = on;
        Ok(())
    }

    /// Add an identity to the allowlist
    pub fn authorize(&mut self, caller: &AccountId, account: AccountId) -> Result<()> {
        self.require_owner(caller)?;
        self.authorized.insert(account);
        Ok(())
    }

    /// Remove an identity from the allowlist
    pub fn deauthorize(&mut self, caller: &AccountId, account: &AccountId) -> Result<()> {
        self.require_owner(caller)?;
        self.authorized.remove(account);
        Ok(())
    }
}
