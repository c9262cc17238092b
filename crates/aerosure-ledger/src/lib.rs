//! # Aerosure Ledger
//!
//! Accounting and state-machine engine for flight-delay insurance.
//!
//! ## Components
//!
//! - **AccessGate**: operational switch, owner, authorized-caller set
//! - **AirlineRegistry**: registered airlines and their funding status
//! - **FlightRegistry**: flights keyed by (airline, name, departure)
//! - **PolicyBook**: purchased policies, snapshotting the insured flight
//! - **PayoutLedger**: claimable balances per passenger
//! - **FundsCustody**: pooled capital backing payouts
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                        Ledger                            │
//! │  AccessGate ── guards every mutation                     │
//! │  ┌──────────┐ ┌──────────┐ ┌────────────┐ ┌───────────┐  │
//! │  │ Airlines │ │ Flights  │ │ PolicyBook │ │  Payouts  │  │
//! │  └──────────┘ └──────────┘ └────────────┘ └─────┬─────┘  │
//! │                                          FundsCustody    │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Every mutating operation runs under one write lock and either completes
//! fully or returns a [`LedgerError`] with no partial effect. Completed
//! mutations append a [`LedgerEvent`] to the journal and broadcast it to
//! subscribers.

pub mod access;
pub mod airlines;
pub mod config;
pub mod custody;
pub mod events;
pub mod flights;
pub mod insurance;
pub mod payouts;

pub use airlines::Airline;
pub use config::LedgerConfig;
pub use events::LedgerEvent;
pub use flights::FlightListing;
pub use insurance::CreditEntry;

use parking_lot::RwLock;
use rust_decimal::Decimal;
use tokio::sync::broadcast;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use aerosure_common::{AccountId, FlightKey, FlightStatus, LedgerError, Policy, Result};

use access::AccessGate;
use airlines::AirlineRegistry;
use custody::FundsCustody;
use flights::FlightRegistry;
use insurance::PolicyBook;
use payouts::PayoutLedger;

/// All mutable ledger state, guarded by a single lock
struct LedgerState {
    gate: AccessGate,
    airlines: AirlineRegistry,
    flights: FlightRegistry,
    policies: PolicyBook,
    payouts: PayoutLedger,
    custody: FundsCustody,
    journal: Vec<LedgerEvent>,
}

/// The flight-delay insurance ledger
///
/// One instance owns all registry, policy, payout, and custody state. All
/// mutating operations serialize on an internal write lock, which provides
/// the single-transaction atomicity the accounting invariants rely on.
pub struct Ledger {
    config: LedgerConfig,
    state: RwLock<LedgerState>,
    events: broadcast::Sender<LedgerEvent>,
}

impl Ledger {
    /// Create a ledger owned by `owner` with default configuration
    pub fn new(owner: AccountId) -> Self {
        Self::with_config(owner, LedgerConfig::default())
    }

    /// Create a ledger with explicit configuration
    pub fn with_config(owner: AccountId, config: LedgerConfig) -> Self {
        let (events, _) = broadcast::channel(config.event_capacity);
        Self {
            config,
            state: RwLock::new(LedgerState {
                gate: AccessGate::new(owner),
                airlines: AirlineRegistry::new(),
                flights: FlightRegistry::new(),
                policies: PolicyBook::new(),
                payouts: PayoutLedger::new(),
                custody: FundsCustody::new(),
                journal: Vec::new(),
            }),
            events,
        }
    }

    /// Subscribe to ledger events
    ///
    /// Subscribers that lag past the channel capacity miss events; the
    /// journal keeps the complete history.
    pub fn subscribe(&self) -> broadcast::Receiver<LedgerEvent> {
        self.events.subscribe()
    }

    /// Configuration in effect
    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    fn record(&self, state: &mut LedgerState, event: LedgerEvent) {
        debug!(event = event.kind(), "ledger event");
        state.journal.push(event.clone());
        // No subscribers is fine; mutations never depend on delivery.
        let _ = self.events.send(event);
    }

    // ---- AccessGate ------------------------------------------------------

    /// Flip the operational switch (owner-only, exempt from the switch)
    #[instrument(skip(self))]
    pub fn set_operational(&self, caller: &AccountId, on: bool) -> Result<()> {
        let mut state = self.state.write();
        state.gate.set_operational(caller, on)?;
        info!(on, "operational switch changed");
        self.record(&mut state, LedgerEvent::OperationalChanged { on });
        Ok(())
    }

    /// Whether mutation is currently allowed
    pub fn is_operational(&self) -> bool {
        self.state.read().gate.is_operational()
    }

    /// Add an identity to the authorized-caller set (owner-only)
    #[instrument(skip(self))]
    pub fn authorize_caller(&self, caller: &AccountId, account: AccountId) -> Result<()> {
        let mut state = self.state.write();
        if !state.gate.is_operational() {
            return Err(LedgerError::NotOperational);
        }
        state.gate.authorize(caller, account.clone())?;
        self.record(&mut state, LedgerEvent::CallerAuthorized { account });
        Ok(())
    }

    /// Remove an identity from the authorized-caller set (owner-only)
    #[instrument(skip(self))]
    pub fn deauthorize_caller(&self, caller: &AccountId, account: &AccountId) -> Result<()> {
        let mut state = self.state.write();
        if !state.gate.is_operational() {
            return Err(LedgerError::NotOperational);
        }
        state.gate.deauthorize(caller, account)?;
        self.record(
            &mut state,
            LedgerEvent::CallerDeauthorized {
                account: account.clone(),
            },
        );
        Ok(())
    }

    /// Whether an identity may invoke privileged operations
    pub fn is_caller_authorized(&self, account: &AccountId) -> bool {
        self.state.read().gate.is_authorized(account)
    }

    // ---- AirlineRegistry -------------------------------------------------

    /// Register an airline under its identity
    #[instrument(skip(self))]
    pub fn register_airline(
        &self,
        caller: &AccountId,
        account: AccountId,
        name: &str,
    ) -> Result<()> {
        let mut state = self.state.write();
        state.gate.check(caller)?;
        state.airlines.register(account.clone(), name)?;
        info!(%account, name, "airline registered");
        self.record(
            &mut state,
            LedgerEvent::AirlineRegistered {
                account,
                name: name.to_string(),
            },
        );
        Ok(())
    }

    /// How many airlines have registered
    pub fn airline_count(&self) -> usize {
        self.state.read().airlines.count()
    }

    /// Whether an identity has registered as an airline
    pub fn is_airline_registered(&self, account: &AccountId) -> bool {
        self.state.read().airlines.is_registered(account)
    }

    /// Whether an airline's cumulative contribution meets the threshold
    pub fn is_airline_funded(&self, account: &AccountId) -> bool {
        self.state
            .read()
            .custody
            .is_funded(account, self.config.min_airline_fund)
    }

    // ---- FlightRegistry --------------------------------------------------

    /// Register a flight for an airline
    #[instrument(skip(self))]
    pub fn register_flight(
        &self,
        caller: &AccountId,
        name: &str,
        departs_at: i64,
        airline: AccountId,
    ) -> Result<FlightKey> {
        let mut state = self.state.write();
        state.gate.check(caller)?;
        let key = state.flights.register(name, departs_at, airline.clone())?;
        info!(%key, name, %airline, "flight registered");
        self.record(
            &mut state,
            LedgerEvent::FlightRegistered {
                key,
                name: name.to_string(),
                airline,
                departs_at,
            },
        );
        Ok(key)
    }

    /// Pure lookup by recomputed key
    pub fn is_flight_registered(&self, name: &str, departs_at: i64, airline: &AccountId) -> bool {
        self.state.read().flights.is_registered(name, departs_at, airline)
    }

    /// Enumerate all flights in registration order
    pub fn list_flights(&self) -> FlightListing {
        self.state.read().flights.list()
    }

    /// Latest recorded status for a flight, if registered
    pub fn flight_status(
        &self,
        name: &str,
        departs_at: i64,
        airline: &AccountId,
    ) -> Option<FlightStatus> {
        let key = FlightKey::compute(airline, name, departs_at);
        self.state.read().flights.get(&key).map(|f| f.status)
    }

    /// Record the status the oracle layer determined for a flight
    #[instrument(skip(self))]
    pub fn record_flight_status(
        &self,
        caller: &AccountId,
        name: &str,
        departs_at: i64,
        airline: AccountId,
        status: FlightStatus,
    ) -> Result<()> {
        let mut state = self.state.write();
        state.gate.check(caller)?;
        let key = FlightKey::compute(&airline, name, departs_at);
        state.flights.set_status(&key, status)?;
        info!(%key, %status, "flight status recorded");
        self.record(&mut state, LedgerEvent::FlightStatusRecorded { key, status });
        Ok(())
    }

    // ---- InsuranceLedger -------------------------------------------------

    /// Buy a policy for `passenger` against a registered flight
    ///
    /// The insured amount is min(payment, cap): payment above the cap is
    /// accepted into custody, but only the cap is refundable. Returns the
    /// policy id.
    #[instrument(skip(self))]
    pub fn buy_insurance(
        &self,
        caller: &AccountId,
        name: &str,
        departs_at: i64,
        airline: AccountId,
        passenger: AccountId,
        payment: Decimal,
    ) -> Result<Uuid> {
        let mut state = self.state.write();
        state.gate.check(caller)?;

        if payment <= Decimal::ZERO {
            return Err(LedgerError::InvalidPayment { amount: payment });
        }

        let key = FlightKey::compute(&airline, name, departs_at);
        let flight = state
            .flights
            .get(&key)
            .ok_or(LedgerError::FlightNotFound { key })?
            .clone();

        let insured = payment.min(self.config.max_insurance_value);
        if insured < payment {
            warn!(%key, %passenger, %payment, %insured, "payment above cap; excess retained in custody");
        }

        let policy_id = state
            .policies
            .underwrite(passenger.clone(), insured, flight)
            .id;
        state.custody.receive_premium(payment);

        info!(%key, %passenger, %insured, "insurance purchased");
        self.record(
            &mut state,
            LedgerEvent::InsurancePurchased {
                key,
                passenger,
                insured,
                paid: payment,
            },
        );
        Ok(policy_id)
    }

    /// Credit every unclaimed policy for a flight at 1.5x
    ///
    /// Idempotent per flight: each matching policy's amount is zeroed as it
    /// is credited, so a second call moves nothing. One
    /// [`LedgerEvent::InsureesCredited`] is emitted per credited passenger.
    #[instrument(skip(self))]
    pub fn credit_insurees(
        &self,
        caller: &AccountId,
        name: &str,
        departs_at: i64,
        airline: AccountId,
    ) -> Result<Vec<CreditEntry>> {
        let mut state = self.state.write();
        state.gate.check(caller)?;

        let key = FlightKey::compute(&airline, name, departs_at);
        let entries = state.policies.credit(&key);

        for entry in &entries {
            let balance = state
                .payouts
                .credit(entry.passenger.clone(), entry.refund);
            info!(%key, passenger = %entry.passenger, credited = %entry.refund, %balance, "insuree credited");
            self.record(
                &mut state,
                LedgerEvent::InsureesCredited {
                    key,
                    passenger: entry.passenger.clone(),
                    credited: entry.refund,
                    balance,
                },
            );
        }
        Ok(entries)
    }

    /// Total number of policies ever written
    pub fn policy_count(&self) -> usize {
        self.state.read().policies.len()
    }

    /// All policies in purchase order (read-only projection)
    pub fn policies(&self) -> Vec<Policy> {
        self.state.read().policies.policies().to_vec()
    }

    // ---- PayoutLedger ----------------------------------------------------

    /// Current claimable balance for a passenger
    pub fn balance_of(&self, passenger: &AccountId) -> Decimal {
        self.state.read().payouts.balance_of(passenger)
    }

    /// Withdraw a passenger's entire balance against custody
    ///
    /// The balance is zeroed before the transfer; if custody cannot cover
    /// it the zeroing is rolled back and the whole operation fails, so a
    /// failed withdrawal leaves the balance unchanged.
    #[instrument(skip(self))]
    pub fn withdraw(&self, caller: &AccountId, passenger: &AccountId) -> Result<Decimal> {
        let mut state = self.state.write();
        state.gate.check(caller)?;

        let amount = state.payouts.take(passenger);
        if amount.is_zero() {
            return Ok(Decimal::ZERO);
        }

        if let Err(err) = state.custody.pay_out(amount) {
            state.payouts.restore(passenger, amount);
            warn!(%passenger, %amount, "withdrawal failed; balance restored");
            return Err(err);
        }

        info!(%passenger, %amount, "payout withdrawn");
        self.record(
            &mut state,
            LedgerEvent::PayoutWithdrawn {
                passenger: passenger.clone(),
                amount,
            },
        );
        Ok(amount)
    }

    // ---- FundsCustody ----------------------------------------------------

    /// Contribute funding to the custody pool
    ///
    /// Also the catch-all path for value received with no designated
    /// operation: it requires a positive amount and an operational ledger
    /// but no authorization, so any identity may fund.
    #[instrument(skip(self))]
    pub fn fund(&self, contributor: AccountId, amount: Decimal) -> Result<Decimal> {
        let mut state = self.state.write();
        if !state.gate.is_operational() {
            return Err(LedgerError::NotOperational);
        }

        let total = state.custody.fund(contributor.clone(), amount)?;
        info!(%contributor, %amount, %total, "funds deposited");
        self.record(
            &mut state,
            LedgerEvent::FundsDeposited {
                contributor,
                amount,
                total_contribution: total,
            },
        );
        Ok(total)
    }

    /// Current pooled custody balance
    pub fn pool_balance(&self) -> Decimal {
        self.state.read().custody.pool()
    }

    /// Cumulative contribution for an identity
    pub fn contribution_of(&self, account: &AccountId) -> Decimal {
        self.state.read().custody.contribution_of(account)
    }

    // ---- Journal ---------------------------------------------------------

    /// Complete in-order event history
    pub fn journal(&self) -> Vec<LedgerEvent> {
        self.state.read().journal.clone()
    }
}
