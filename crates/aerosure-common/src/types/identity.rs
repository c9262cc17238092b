//! AccountId - the unique account reference used as a key throughout
//!
//! Airlines, passengers, authorized callers, and the owner are all plain
//! account references. The ledger never interprets the string beyond
//! equality; key management lives outside this core.

use serde::{Deserialize, Serialize};

/// Opaque account identity
///
/// Equality and hashing are by the underlying string, so an `AccountId`
/// can key any of the ledger maps directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    /// Create an account id from any string-like reference
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The underlying account string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AccountId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for AccountId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_account_equality() {
        let a = AccountId::new("acct:airline-1");
        let b = AccountId::from("acct:airline-1");
        assert_eq!(a, b);
        assert_ne!(a, AccountId::new("acct:airline-2"));
    }

    #[test]
    fn test_account_as_map_key() {
        let mut balances: HashMap<AccountId, u64> = HashMap::new();
        balances.insert(AccountId::new("acct:p1"), 75);
        assert_eq!(balances.get(&AccountId::new("acct:p1")), Some(&75));
    }
}
