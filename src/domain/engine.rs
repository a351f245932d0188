//! Host engine: drives an [`Algorithm`] through initialization and one
//! universe selection cycle per data date in the backtest window.

use crate::domain::algorithm::{
    Algorithm, AlgorithmConfig, AlgorithmHost, UniverseHandle, UniverseRegistration,
};
use crate::domain::config_validation::validate_algorithm_config;
use crate::domain::congress_trade::UniverseSlice;
use crate::domain::error::CongressError;
use crate::domain::resolution::Resolution;
use crate::domain::security_changes::SecurityChanges;
use crate::domain::symbol::Symbol;
use crate::ports::data_port::UniverseDataPort;
use crate::ports::log_port::LogSink;
use chrono::NaiveDate;
use tracing::{debug, info};

pub const DEFAULT_CASH: f64 = 100_000.0;

/// Collects settings while [`Algorithm::initialize`] runs.
pub struct HostSetup<'a> {
    data_port: &'a dyn UniverseDataPort,
    resolution: Resolution,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    cash: f64,
    universes: Vec<UniverseRegistration>,
}

impl<'a> HostSetup<'a> {
    pub fn new(data_port: &'a dyn UniverseDataPort) -> Self {
        Self {
            data_port,
            resolution: Resolution::Minute,
            start_date: None,
            end_date: None,
            cash: DEFAULT_CASH,
            universes: Vec::new(),
        }
    }

    pub fn finish(self) -> Result<AlgorithmConfig, CongressError> {
        let start_date = self.start_date.ok_or_else(|| missing("start_date"))?;
        let end_date = self.end_date.ok_or_else(|| missing("end_date"))?;
        Ok(AlgorithmConfig {
            resolution: self.resolution,
            start_date,
            end_date,
            cash: self.cash,
            universes: self.universes,
        })
    }
}

fn missing(key: &str) -> CongressError {
    CongressError::ConfigMissing {
        section: "algorithm".into(),
        key: key.into(),
    }
}

impl AlgorithmHost for HostSetup<'_> {
    fn set_start_date(&mut self, date: NaiveDate) {
        self.start_date = Some(date);
    }

    fn set_end_date(&mut self, date: NaiveDate) {
        self.end_date = Some(date);
    }

    fn set_cash(&mut self, cash: f64) {
        self.cash = cash;
    }

    fn set_universe_resolution(&mut self, resolution: Resolution) {
        self.resolution = resolution;
    }

    fn add_universe(&mut self, source: &str) -> UniverseHandle {
        self.universes.push(UniverseRegistration {
            source: source.to_string(),
            resolution: self.resolution,
        });
        debug!(source, resolution = %self.resolution, "universe registered");
        UniverseHandle::new(self.universes.len() - 1)
    }

    /// The `periods` most recent data dates before the start date, oldest
    /// first. Dates whose file holds no records are still returned.
    fn history(
        &self,
        universe: &UniverseHandle,
        periods: usize,
    ) -> Result<Vec<UniverseSlice>, CongressError> {
        if universe.index() >= self.universes.len() {
            return Err(CongressError::ConfigInvalid {
                section: "algorithm".into(),
                key: "universe".into(),
                reason: format!("unknown universe handle {}", universe.index()),
            });
        }
        let start = self.start_date.ok_or_else(|| missing("start_date"))?;
        if periods == 0 {
            return Ok(Vec::new());
        }

        let dates: Vec<NaiveDate> = self
            .data_port
            .list_dates()?
            .into_iter()
            .filter(|d| *d < start)
            .collect();
        let window = &dates[dates.len().saturating_sub(periods)..];
        let (Some(first), Some(last)) = (window.first(), window.last()) else {
            return Ok(Vec::new());
        };
        self.data_port.fetch_slices(*first, *last)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DailySelection {
    pub date: NaiveDate,
    pub selected: Vec<Symbol>,
    pub changes: SecurityChanges,
}

#[derive(Debug, Clone)]
pub struct EngineResult {
    pub config: AlgorithmConfig,
    pub days: Vec<DailySelection>,
}

impl EngineResult {
    /// Active universe after the last selection cycle.
    pub fn final_universe(&self) -> &[Symbol] {
        self.days.last().map(|d| d.selected.as_slice()).unwrap_or(&[])
    }

    /// Number of cycles that produced a non-empty change set.
    pub fn change_count(&self) -> usize {
        self.days.iter().filter(|d| !d.changes.is_empty()).count()
    }
}

pub struct UniverseEngine<'a> {
    data_port: &'a dyn UniverseDataPort,
    log: &'a dyn LogSink,
}

impl<'a> UniverseEngine<'a> {
    pub fn new(data_port: &'a dyn UniverseDataPort, log: &'a dyn LogSink) -> Self {
        Self { data_port, log }
    }

    pub fn run<A: Algorithm + ?Sized>(&self, algorithm: &mut A) -> Result<EngineResult, CongressError> {
        let mut setup = HostSetup::new(self.data_port);
        algorithm.initialize(&mut setup)?;
        let config = setup.finish()?;
        validate_algorithm_config(&config)?;

        info!(
            start = %config.start_date,
            end = %config.end_date,
            cash = config.cash,
            resolution = %config.resolution,
            "algorithm initialized"
        );

        let slices = self
            .data_port
            .fetch_slices(config.start_date, config.end_date)?;
        if slices.is_empty() {
            return Err(CongressError::NoData {
                start: config.start_date.to_string(),
                end: config.end_date.to_string(),
            });
        }

        let mut active: Vec<Symbol> = Vec::new();
        let mut days = Vec::with_capacity(slices.len());

        for slice in slices {
            let selected = dedup(algorithm.select(&slice.data, self.log));
            let changes = SecurityChanges::between(&active, &selected);
            if !changes.is_empty() {
                algorithm.on_securities_changed(&changes, self.log);
            }
            debug!(
                date = %slice.date,
                records = slice.len(),
                selected = selected.len(),
                "selection cycle"
            );
            active = selected.clone();
            days.push(DailySelection {
                date: slice.date,
                selected,
                changes,
            });
        }

        info!(days = days.len(), final_size = active.len(), "backtest complete");
        Ok(EngineResult { config, days })
    }
}

/// Drops repeated symbols, keeping the first occurrence.
fn dedup(symbols: Vec<Symbol>) -> Vec<Symbol> {
    let mut out: Vec<Symbol> = Vec::with_capacity(symbols.len());
    for s in symbols {
        if !out.contains(&s) {
            out.push(s);
        }
    }
    out
}
