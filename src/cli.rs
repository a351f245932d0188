//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::adapters::csv_adapter::CsvUniverseAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::tracing_log::TracingLog;
use crate::domain::congress_algorithm::CongressUniverseAlgorithm;
use crate::domain::config_validation::{
    validate_algorithm_section, validate_log_level, validate_run_config,
};
use crate::domain::engine::{DailySelection, EngineResult, UniverseEngine};
use crate::domain::error::CongressError;
use crate::ports::config_port::ConfigPort;
use crate::ports::data_port::UniverseDataPort;
use crate::ports::log_port::LogSink;

#[derive(Parser, Debug)]
#[command(
    name = "congress-universe",
    about = "Congressional trading universe selection backtest"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the universe selection backtest
    Run {
        #[arg(short, long)]
        config: PathBuf,
        /// Overrides [data] path
        #[arg(long)]
        data: Option<PathBuf>,
    },
    /// Validate a configuration file
    Validate {
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Show the available universe data range
    Info {
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(long)]
        data: Option<PathBuf>,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Run { config, data } => run_backtest(&config, data.as_ref()),
        Command::Validate { config } => run_validate(&config),
        Command::Info { config, data } => run_info(config.as_ref(), data.as_ref()),
    }
}

/// Installs the stderr subscriber. `RUST_LOG` wins over `[log] level`.
/// Safe to call more than once; later calls are no-ops.
pub fn init_logging(level: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level(level).to_string()));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// `[log] level` as a filter; missing or unrecognised levels become `info`.
pub fn log_level(level: Option<&str>) -> LevelFilter {
    let Some(raw) = level else {
        return LevelFilter::INFO;
    };
    raw.trim().parse().unwrap_or_else(|_| {
        eprintln!("warning: unknown [log] level {raw:?}, using info");
        LevelFilter::INFO
    })
}

pub fn load_config(path: &PathBuf) -> Result<FileConfigAdapter, ExitCode> {
    FileConfigAdapter::from_file(path).map_err(|err| {
        eprintln!("error: {err}");
        ExitCode::from(&err)
    })
}

pub fn resolve_data_path(
    data_override: Option<&PathBuf>,
    config: &dyn ConfigPort,
) -> Result<PathBuf, CongressError> {
    if let Some(p) = data_override {
        return Ok(p.clone());
    }
    match config.get_string("data", "path") {
        Some(p) if !p.trim().is_empty() => Ok(PathBuf::from(p.trim())),
        _ => Err(CongressError::ConfigMissing {
            section: "data".into(),
            key: "path".into(),
        }),
    }
}

/// Builds the algorithm from `config` and runs it against the given ports.
pub fn run_pipeline(
    config: &dyn ConfigPort,
    data_port: &dyn UniverseDataPort,
    log: &dyn LogSink,
) -> Result<EngineResult, CongressError> {
    let mut algorithm = CongressUniverseAlgorithm::from_config(config)?;
    UniverseEngine::new(data_port, log).run(&mut algorithm)
}

/// `YYYY-MM-DD: SYM1,SYM2`, or `YYYY-MM-DD: (none)` for an empty selection.
pub fn format_selection(day: &DailySelection) -> String {
    if day.selected.is_empty() {
        return format!("{}: (none)", day.date);
    }
    let symbols: Vec<&str> = day.selected.iter().map(|s| s.as_str()).collect();
    format!("{}: {}", day.date, symbols.join(","))
}

fn run_backtest(config_path: &PathBuf, data_override: Option<&PathBuf>) -> ExitCode {
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };
    init_logging(config.get_string("log", "level").as_deref());
    info!(path = %config_path.display(), "config loaded");

    let data_path = match resolve_data_path(data_override, &config) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };
    let validation = match data_override {
        Some(_) => validate_log_level(&config).and_then(|()| validate_algorithm_section(&config)),
        None => validate_run_config(&config),
    };
    if let Err(e) = validation {
        eprintln!("error: {e}");
        return (&e).into();
    }

    info!(path = %data_path.display(), "reading universe data");
    let data_port = CsvUniverseAdapter::new(data_path);

    let result = match run_pipeline(&config, &data_port, &TracingLog) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    for day in &result.days {
        println!("{}", format_selection(day));
    }
    eprintln!(
        "\n{} selection days, {} universe changes, final universe: {}",
        result.days.len(),
        result.change_count(),
        result.final_universe().len()
    );
    ExitCode::SUCCESS
}

fn run_validate(config_path: &PathBuf) -> ExitCode {
    eprintln!("Validating config: {}", config_path.display());
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };

    if let Err(e) = validate_run_config(&config) {
        eprintln!("error: {e}");
        return (&e).into();
    }

    let algorithm = match CongressUniverseAlgorithm::from_config(&config) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    eprintln!("\nAlgorithm:");
    eprintln!("  start_date:      {}", algorithm.start_date);
    eprintln!("  end_date:        {}", algorithm.end_date);
    eprintln!("  cash:            {}", algorithm.cash);
    eprintln!("  resolution:      {}", algorithm.resolution);
    eprintln!(
        "  selection:       amount > {} and transaction = {}",
        algorithm.criteria.min_amount, algorithm.criteria.direction
    );
    eprintln!("  history_periods: {}", algorithm.history_periods);

    eprintln!("\nConfiguration is valid.");
    ExitCode::SUCCESS
}

fn run_info(config_path: Option<&PathBuf>, data_override: Option<&PathBuf>) -> ExitCode {
    let config = match config_path {
        Some(p) => match load_config(p) {
            Ok(c) => Some(c),
            Err(code) => return code,
        },
        None => None,
    };

    let data_path = match (data_override, &config) {
        (Some(p), _) => p.clone(),
        (None, Some(c)) => match resolve_data_path(None, c) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("error: {e}");
                return (&e).into();
            }
        },
        (None, None) => {
            eprintln!("error: --config or --data is required for info");
            return ExitCode::from(1);
        }
    };

    let adapter = CsvUniverseAdapter::new(data_path.clone());
    match adapter.get_data_range() {
        Ok(Some((first, last, count))) => {
            println!("{}: {} records, {} to {}", data_path.display(), count, first, last);
            ExitCode::SUCCESS
        }
        Ok(None) => {
            eprintln!("{}: no universe data found", data_path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}
