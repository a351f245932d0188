//! CSV universe data adapter.
//!
//! One file per data date, `YYYYMMDD.csv`, with the header
//! `ticker,representative,transaction,amount`.

use crate::domain::congress_trade::{CongressTrade, UniverseSlice};
use crate::domain::error::CongressError;
use crate::domain::order_direction::OrderDirection;
use crate::domain::symbol::Symbol;
use crate::ports::data_port::UniverseDataPort;
use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

const FILE_DATE_FORMAT: &str = "%Y%m%d";

pub struct CsvUniverseAdapter {
    base_path: PathBuf,
}

impl CsvUniverseAdapter {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    fn csv_path(&self, date: NaiveDate) -> PathBuf {
        self.base_path
            .join(format!("{}.csv", date.format(FILE_DATE_FORMAT)))
    }

    fn read_slice(&self, date: NaiveDate) -> Result<UniverseSlice, CongressError> {
        let path = self.csv_path(date);
        let content = fs::read_to_string(&path).map_err(|e| CongressError::DataSource {
            reason: format!("failed to read {}: {}", path.display(), e),
        })?;

        let mut rdr = csv::Reader::from_reader(content.as_bytes());
        let mut data = Vec::new();

        for (row, result) in rdr.records().enumerate() {
            let record = result.map_err(|e| CongressError::DataSource {
                reason: format!("CSV parse error in {}: {}", path.display(), e),
            })?;
            let field = |index: usize, name: &str| {
                record.get(index).ok_or_else(|| CongressError::DataSource {
                    reason: format!("{} row {}: missing {} column", path.display(), row + 1, name),
                })
            };

            let ticker = field(0, "ticker")?;
            if ticker.trim().is_empty() {
                return Err(CongressError::DataSource {
                    reason: format!("{} row {}: empty ticker", path.display(), row + 1),
                });
            }
            let representative = field(1, "representative")?;
            let transaction: OrderDirection =
                field(2, "transaction")?
                    .parse()
                    .map_err(|e| CongressError::DataSource {
                        reason: format!("{} row {}: {}", path.display(), row + 1, e),
                    })?;
            let amount: f64 = field(3, "amount")?
                .trim()
                .parse()
                .map_err(|e| CongressError::DataSource {
                    reason: format!("{} row {}: invalid amount: {}", path.display(), row + 1, e),
                })?;
            if !amount.is_finite() {
                return Err(CongressError::DataSource {
                    reason: format!(
                        "{} row {}: invalid amount: {} is not finite",
                        path.display(),
                        row + 1,
                        amount
                    ),
                });
            }

            data.push(CongressTrade {
                symbol: Symbol::new(ticker),
                date,
                representative: representative.trim().to_string(),
                amount,
                transaction,
            });
        }

        debug!(%date, records = data.len(), "loaded universe file");
        Ok(UniverseSlice { date, data })
    }
}

impl UniverseDataPort for CsvUniverseAdapter {
    fn fetch_slices(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<UniverseSlice>, CongressError> {
        self.list_dates()?
            .into_iter()
            .filter(|d| *d >= start_date && *d <= end_date)
            .map(|d| self.read_slice(d))
            .collect()
    }

    fn list_dates(&self) -> Result<Vec<NaiveDate>, CongressError> {
        let entries = fs::read_dir(&self.base_path).map_err(|e| CongressError::DataSource {
            reason: format!(
                "failed to read directory {}: {}",
                self.base_path.display(),
                e
            ),
        })?;

        let mut dates = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|e| CongressError::DataSource {
                reason: format!("directory entry error: {}", e),
            })?;

            let name = entry.file_name();
            let name_str = name.to_string_lossy();

            if let Some(stem) = name_str.strip_suffix(".csv") {
                if let Ok(date) = NaiveDate::parse_from_str(stem, FILE_DATE_FORMAT) {
                    dates.push(date);
                }
            }
        }

        dates.sort();
        Ok(dates)
    }

    fn get_data_range(&self) -> Result<Option<(NaiveDate, NaiveDate, usize)>, CongressError> {
        let dates = self.list_dates()?;
        let (Some(first), Some(last)) = (dates.first(), dates.last()) else {
            return Ok(None);
        };
        let count = self
            .fetch_slices(*first, *last)?
            .iter()
            .map(UniverseSlice::len)
            .sum();
        Ok(Some((*first, *last, count)))
    }
}
