//! Ledger configuration

use anyhow::Result;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use aerosure_common::{MAX_INSURANCE_VALUE, MIN_AIRLINE_FUND};

/// Ledger configuration
///
/// Defaults mirror the crate constants; deployments override via
/// `AEROSURE_*` environment variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Underwriting cap per policy
    pub max_insurance_value: Decimal,
    /// Cumulative contribution at which an airline counts as funded
    pub min_airline_fund: Decimal,
    /// Broadcast channel capacity for event subscribers
    pub event_capacity: usize,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            max_insurance_value: MAX_INSURANCE_VALUE,
            min_airline_fund: MIN_AIRLINE_FUND,
            event_capacity: 256,
        }
    }
}

impl LedgerConfig {
    /// Load configuration from environment
    pub fn load() -> Result<Self> {
        // Try to load .env file
        let _ = dotenvy::dotenv();

        let mut cfg = Self::default();

        if let Ok(val) = std::env::var("AEROSURE_MAX_INSURANCE_VALUE") {
            if let Ok(v) = val.parse() {
                cfg.max_insurance_value = v;
            }
        }
        if let Ok(val) = std::env::var("AEROSURE_MIN_AIRLINE_FUND") {
            if let Ok(v) = val.parse() {
                cfg.min_airline_fund = v;
            }
        }
        if let Ok(val) = std::env::var("AEROSURE_EVENT_CAPACITY") {
            if let Ok(v) = val.parse() {
                cfg.event_capacity = v;
            }
        }

        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults_mirror_constants() {
        let cfg = LedgerConfig::default();
        assert_eq!(cfg.max_insurance_value, dec!(1));
        assert_eq!(cfg.min_airline_fund, dec!(10));
        assert!(cfg.event_capacity > 0);
    }
}
