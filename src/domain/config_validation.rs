//! Configuration validation.
//!
//! The algorithm sets its window and cash without checking them; the host
//! rejects invalid values here, both from the config file before a run and
//! from the collected [`AlgorithmConfig`] after initialization.

use crate::domain::algorithm::AlgorithmConfig;
use crate::domain::congress_algorithm::CongressUniverseAlgorithm;
use crate::domain::error::CongressError;
use crate::ports::config_port::ConfigPort;
use tracing::level_filters::LevelFilter;

pub fn validate_run_config(config: &dyn ConfigPort) -> Result<(), CongressError> {
    validate_data_path(config)?;
    validate_log_level(config)?;
    validate_algorithm_section(config)
}

/// `[log] level`, when present, must be a level name (`off` to `trace`).
pub fn validate_log_level(config: &dyn ConfigPort) -> Result<(), CongressError> {
    match config.get_string("log", "level") {
        None => Ok(()),
        Some(raw) => raw
            .trim()
            .parse::<LevelFilter>()
            .map(|_| ())
            .map_err(|e| CongressError::ConfigInvalid {
                section: "log".to_string(),
                key: "level".to_string(),
                reason: format!("{raw:?}: {e}"),
            }),
    }
}

/// Checks only the optional `[algorithm]` overrides.
pub fn validate_algorithm_section(config: &dyn ConfigPort) -> Result<(), CongressError> {
    let algorithm = CongressUniverseAlgorithm::from_config(config)?;
    validate_window(algorithm.start_date, algorithm.end_date)?;
    validate_cash(algorithm.cash)?;
    validate_min_amount(algorithm.criteria.min_amount)?;
    Ok(())
}

pub fn validate_algorithm_config(config: &AlgorithmConfig) -> Result<(), CongressError> {
    validate_window(config.start_date, config.end_date)?;
    validate_cash(config.cash)?;
    if config.universes.is_empty() {
        return Err(CongressError::ConfigMissing {
            section: "algorithm".to_string(),
            key: "universe".to_string(),
        });
    }
    Ok(())
}

fn validate_data_path(config: &dyn ConfigPort) -> Result<(), CongressError> {
    match config.get_string("data", "path") {
        Some(s) if !s.trim().is_empty() => Ok(()),
        _ => Err(CongressError::ConfigMissing {
            section: "data".to_string(),
            key: "path".to_string(),
        }),
    }
}

fn validate_window(
    start_date: chrono::NaiveDate,
    end_date: chrono::NaiveDate,
) -> Result<(), CongressError> {
    if start_date > end_date {
        return Err(CongressError::ConfigInvalid {
            section: "algorithm".to_string(),
            key: "start_date".to_string(),
            reason: "start_date must not be after end_date".to_string(),
        });
    }
    Ok(())
}

fn validate_cash(cash: f64) -> Result<(), CongressError> {
    if !cash.is_finite() || cash < 0.0 {
        return Err(CongressError::ConfigInvalid {
            section: "algorithm".to_string(),
            key: "cash".to_string(),
            reason: "cash must be non-negative".to_string(),
        });
    }
    Ok(())
}

fn validate_min_amount(min_amount: f64) -> Result<(), CongressError> {
    if !min_amount.is_finite() || min_amount < 0.0 {
        return Err(CongressError::ConfigInvalid {
            section: "algorithm".to_string(),
            key: "min_amount".to_string(),
            reason: "min_amount must be non-negative".to_string(),
        });
    }
    Ok(())
}
