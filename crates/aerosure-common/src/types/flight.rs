//! Flight identity and state
//!
//! A flight is canonically identified by a [`FlightKey`]: the blake3 hash
//! of (airline account, flight name, departure timestamp). Two
//! registrations with identical triples collide on the same key and the
//! second one fails.

use serde::{Deserialize, Serialize};

use crate::types::identity::AccountId;

/// Flight status as determined by the external oracle layer
///
/// The ledger only stores the latest reported status; it never decides one.
/// `LateAirline` is the status that triggers crediting in the orchestrating
/// layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlightStatus {
    #[default]
    Unknown,
    OnTime,
    LateAirline,
    LateWeather,
    LateTechnical,
    LateOther,
}

impl FlightStatus {
    /// Numeric wire code used by oracle reports
    pub fn code(&self) -> u8 {
        match self {
            FlightStatus::Unknown => 0,
            FlightStatus::OnTime => 10,
            FlightStatus::LateAirline => 20,
            FlightStatus::LateWeather => 30,
            FlightStatus::LateTechnical => 40,
            FlightStatus::LateOther => 50,
        }
    }

    /// Decode a wire code; unrecognized codes map to `Unknown`
    pub fn from_code(code: u8) -> Self {
        match code {
            10 => FlightStatus::OnTime,
            20 => FlightStatus::LateAirline,
            30 => FlightStatus::LateWeather,
            40 => FlightStatus::LateTechnical,
            50 => FlightStatus::LateOther,
            _ => FlightStatus::Unknown,
        }
    }
}

impl std::fmt::Display for FlightStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            FlightStatus::Unknown => "unknown",
            FlightStatus::OnTime => "on_time",
            FlightStatus::LateAirline => "late_airline",
            FlightStatus::LateWeather => "late_weather",
            FlightStatus::LateTechnical => "late_technical",
            FlightStatus::LateOther => "late_other",
        };
        write!(f, "{}", s)
    }
}

/// Deterministic flight identifier
///
/// blake3 over (airline, name, departure timestamp) with field separators,
/// so the key is a pure function of the triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FlightKey([u8; 32]);

impl FlightKey {
    /// Compute the key for an (airline, name, departure) triple
    pub fn compute(airline: &AccountId, name: &str, departs_at: i64) -> Self {
        let mut hasher = blake3::Hasher::new();
        hasher.update(airline.as_str().as_bytes());
        hasher.update(&[0u8]);
        hasher.update(name.as_bytes());
        hasher.update(&[0u8]);
        hasher.update(&departs_at.to_le_bytes());
        Self(*hasher.finalize().as_bytes())
    }

    /// Raw key bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl std::fmt::Display for FlightKey {
    // Short hex form for logs and error messages
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", hex::encode(&self.0[..8]))
    }
}

/// A registered flight
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flight {
    /// Flight name (e.g. "AB100")
    pub name: String,

    /// Always true for a stored flight; kept for parity with lookups
    pub registered: bool,

    /// Owning airline identity
    pub airline: AccountId,

    /// Latest oracle-reported status, `Unknown` until a report lands
    pub status: FlightStatus,

    /// Scheduled departure (Unix milliseconds)
    pub departs_at: i64,
}

impl Flight {
    /// Build a freshly registered flight with unknown status
    pub fn new(name: impl Into<String>, airline: AccountId, departs_at: i64) -> Self {
        Self {
            name: name.into(),
            registered: true,
            airline,
            status: FlightStatus::Unknown,
            departs_at,
        }
    }

    /// Recompute this flight's canonical key
    pub fn key(&self) -> FlightKey {
        FlightKey::compute(&self.airline, &self.name, self.departs_at)
    }
}
