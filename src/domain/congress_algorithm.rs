//! Congressional trading universe algorithm.
//!
//! Selects securities that members of Congress bought for more than
//! 200 000 over a one-week daily backtest (2022-02-14 to 2022-02-18,
//! 100 000 starting cash). The `[algorithm]` config section can override
//! any of these settings.

use crate::domain::algorithm::{Algorithm, AlgorithmHost, UniverseHandle};
use crate::domain::congress_trade::CongressTrade;
use crate::domain::error::CongressError;
use crate::domain::resolution::Resolution;
use crate::domain::security_changes::SecurityChanges;
use crate::domain::selection::{select_symbols, SelectionCriteria};
use crate::domain::symbol::Symbol;
use crate::ports::config_port::ConfigPort;
use crate::ports::log_port::LogSink;
use chrono::NaiveDate;

pub const CONGRESS_UNIVERSE: &str = "QuiverQuantCongressUniverse";

const SECTION: &str = "algorithm";

#[derive(Debug, Clone)]
pub struct CongressUniverseAlgorithm {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub cash: f64,
    pub resolution: Resolution,
    pub criteria: SelectionCriteria,
    pub history_periods: usize,
    pub universe: Option<UniverseHandle>,
}

impl Default for CongressUniverseAlgorithm {
    fn default() -> Self {
        Self {
            start_date: ymd(2022, 2, 14),
            end_date: ymd(2022, 2, 18),
            cash: 100_000.0,
            resolution: Resolution::Daily,
            criteria: SelectionCriteria::default(),
            history_periods: 1,
            universe: None,
        }
    }
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn invalid(key: &str, reason: String) -> CongressError {
    CongressError::ConfigInvalid {
        section: SECTION.into(),
        key: key.into(),
        reason,
    }
}

impl CongressUniverseAlgorithm {
    /// Defaults overridden by whichever `[algorithm]` keys are present.
    pub fn from_config(config: &dyn ConfigPort) -> Result<Self, CongressError> {
        let defaults = Self::default();

        let date = |key: &str, default: NaiveDate| match config.get_date(SECTION, key) {
            None => Ok(default),
            Some(Ok(d)) => Ok(d),
            Some(Err(raw)) => Err(invalid(
                key,
                format!("invalid date {raw:?}, expected YYYY-MM-DD"),
            )),
        };
        let start_date = date("start_date", defaults.start_date)?;
        let end_date = date("end_date", defaults.end_date)?;

        let cash = parse_or(config, "cash", defaults.cash)?;
        let min_amount = parse_or(config, "min_amount", defaults.criteria.min_amount)?;
        let resolution = parse_or(config, "resolution", defaults.resolution)?;
        let direction = parse_or(config, "transaction", defaults.criteria.direction)?;
        let history_periods = parse_or(config, "history_periods", defaults.history_periods)?;

        Ok(Self {
            start_date,
            end_date,
            cash,
            resolution,
            criteria: SelectionCriteria {
                min_amount,
                direction,
            },
            history_periods,
            universe: None,
        })
    }

    /// Handle of the registered universe, once initialized.
    pub fn universe(&self) -> Option<UniverseHandle> {
        self.universe
    }
}

fn parse_or<T>(config: &dyn ConfigPort, key: &str, default: T) -> Result<T, CongressError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match config.get_string(SECTION, key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| invalid(key, format!("{raw:?}: {e}"))),
    }
}

impl Algorithm for CongressUniverseAlgorithm {
    fn initialize(&mut self, host: &mut dyn AlgorithmHost) -> Result<(), CongressError> {
        // Securities added through universe selection use this resolution.
        host.set_universe_resolution(self.resolution);

        host.set_start_date(self.start_date);
        host.set_end_date(self.end_date);
        host.set_cash(self.cash);

        let universe = host.add_universe(CONGRESS_UNIVERSE);

        let history = host.history(&universe, self.history_periods)?;
        if history.len() != self.history_periods {
            return Err(CongressError::History {
                reason: format!(
                    "got {} slices, expected {}",
                    history.len(),
                    self.history_periods
                ),
            });
        }
        if let Some(empty) = history.iter().find(|slice| slice.is_empty()) {
            return Err(CongressError::History {
                reason: format!("no universe data for {}", empty.date),
            });
        }

        self.universe = Some(universe);
        Ok(())
    }

    fn select(&self, data: &[CongressTrade], log: &dyn LogSink) -> Vec<Symbol> {
        for datum in data {
            log.log(&datum.to_string());
        }
        select_symbols(data, &self.criteria)
    }

    fn on_securities_changed(&self, changes: &SecurityChanges, log: &dyn LogSink) {
        log.log(&changes.to_string());
    }
}
