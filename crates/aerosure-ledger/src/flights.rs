//! Flight registry
//!
//! Flights are keyed by [`FlightKey`] and kept forever. An insertion-ordered
//! key list backs enumeration, so `list()` replays registrations in the
//! order they happened.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use aerosure_common::{AccountId, Flight, FlightKey, FlightStatus, LedgerError, Result};

/// Read-only projection over all registered flights, in insertion order
///
/// Three parallel sequences; index `i` of each describes the same flight.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlightListing {
    pub names: Vec<String>,
    pub airlines: Vec<AccountId>,
    pub departures: Vec<i64>,
}

/// Registered flights plus their enumeration order
#[derive(Debug, Default)]
pub struct FlightRegistry {
    flights: HashMap<FlightKey, Flight>,
    ordered_keys: Vec<FlightKey>,
}

impl FlightRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a flight; a given (airline, name, departure) triple
    /// registers at most once
    pub fn register(
        &mut self,
        name: impl Into<String>,
        departs_at: i64,
        airline: AccountId,
    ) -> Result<FlightKey> {
        let name = name.into();
        let key = FlightKey::compute(&airline, &name, departs_at);

        if self.flights.contains_key(&key) {
            return Err(LedgerError::AlreadyRegistered {
                what: format!("flight {}", key),
            });
        }

        self.flights.insert(key, Flight::new(name, airline, departs_at));
        self.ordered_keys.push(key);
        Ok(key)
    }

    /// Pure lookup by recomputed key
    pub fn is_registered(&self, name: &str, departs_at: i64, airline: &AccountId) -> bool {
        let key = FlightKey::compute(airline, name, departs_at);
        self.flights.contains_key(&key)
    }

    /// Look up a flight by key
    pub fn get(&self, key: &FlightKey) -> Option<&Flight> {
        self.flights.get(key)
    }

    /// Record the externally determined status for a registered flight
    pub fn set_status(&mut self, key: &FlightKey, status: FlightStatus) -> Result<()> {
        let flight = self
            .flights
            .get_mut(key)
            .ok_or(LedgerError::FlightNotFound { key: *key })?;
        flight.status = status;
        Ok(())
    }

    /// Enumerate all flights in registration order
    pub fn list(&self) -> FlightListing {
        let mut listing = FlightListing::default();
        for key in &self.ordered_keys {
            if let Some(flight) = self.flights.get(key) {
                listing.names.push(flight.name.clone());
                listing.airlines.push(flight.airline.clone());
                listing.departures.push(flight.departs_at);
            }
        }
        listing
    }

    /// How many flights have registered
    pub fn count(&self) -> usize {
        self.ordered_keys.len()
    }
}
