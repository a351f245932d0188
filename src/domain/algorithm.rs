//! Algorithm and host contracts.
//!
//! The host calls [`Algorithm::initialize`] once with an [`AlgorithmHost`]
//! that records the backtest settings, then calls [`Algorithm::select`] for
//! every universe data cycle and [`Algorithm::on_securities_changed`] whenever
//! the active set of securities changes. Callbacks are invoked synchronously
//! and in that order; an algorithm never drives the loop itself.

use crate::domain::congress_trade::{CongressTrade, UniverseSlice};
use crate::domain::error::CongressError;
use crate::domain::resolution::Resolution;
use crate::domain::security_changes::SecurityChanges;
use crate::domain::symbol::Symbol;
use crate::ports::log_port::LogSink;
use chrono::NaiveDate;

/// Handle returned by [`AlgorithmHost::add_universe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniverseHandle(usize);

impl UniverseHandle {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniverseRegistration {
    pub source: String,
    /// Universe resolution at registration time.
    pub resolution: Resolution,
}

/// Settings collected during initialization. Built once, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct AlgorithmConfig {
    pub resolution: Resolution,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub cash: f64,
    pub universes: Vec<UniverseRegistration>,
}

/// Host services available during initialization.
pub trait AlgorithmHost {
    fn set_start_date(&mut self, date: NaiveDate);
    fn set_end_date(&mut self, date: NaiveDate);
    fn set_cash(&mut self, cash: f64);
    fn set_universe_resolution(&mut self, resolution: Resolution);
    fn add_universe(&mut self, source: &str) -> UniverseHandle;
    fn history(
        &self,
        universe: &UniverseHandle,
        periods: usize,
    ) -> Result<Vec<UniverseSlice>, CongressError>;
}

pub trait Algorithm {
    fn initialize(&mut self, host: &mut dyn AlgorithmHost) -> Result<(), CongressError>;

    fn select(&self, data: &[CongressTrade], log: &dyn LogSink) -> Vec<Symbol>;

    fn on_securities_changed(&self, changes: &SecurityChanges, log: &dyn LogSink);
}
