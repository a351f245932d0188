#![allow(dead_code)]

use chrono::NaiveDate;
pub use congress_universe::domain::congress_trade::{CongressTrade, UniverseSlice};
use congress_universe::domain::error::CongressError;
pub use congress_universe::domain::order_direction::OrderDirection;
pub use congress_universe::domain::symbol::Symbol;
use congress_universe::ports::data_port::UniverseDataPort;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

pub struct MockUniverseDataPort {
    pub slices: BTreeMap<NaiveDate, Vec<CongressTrade>>,
    pub error: Option<String>,
}

impl MockUniverseDataPort {
    pub fn new() -> Self {
        Self {
            slices: BTreeMap::new(),
            error: None,
        }
    }

    pub fn with_day(mut self, date: NaiveDate, trades: Vec<CongressTrade>) -> Self {
        self.slices.insert(date, trades);
        self
    }

    pub fn with_error(mut self, reason: &str) -> Self {
        self.error = Some(reason.to_string());
        self
    }

    fn check(&self) -> Result<(), CongressError> {
        match &self.error {
            Some(reason) => Err(CongressError::DataSource {
                reason: reason.clone(),
            }),
            None => Ok(()),
        }
    }
}

impl UniverseDataPort for MockUniverseDataPort {
    fn fetch_slices(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<UniverseSlice>, CongressError> {
        self.check()?;
        Ok(self
            .slices
            .range(start_date..=end_date)
            .map(|(date, data)| UniverseSlice {
                date: *date,
                data: data.clone(),
            })
            .collect())
    }

    fn list_dates(&self) -> Result<Vec<NaiveDate>, CongressError> {
        self.check()?;
        Ok(self.slices.keys().copied().collect())
    }

    fn get_data_range(&self) -> Result<Option<(NaiveDate, NaiveDate, usize)>, CongressError> {
        self.check()?;
        let first = self.slices.keys().next().copied();
        let last = self.slices.keys().next_back().copied();
        let count = self.slices.values().map(Vec::len).sum();
        Ok(first.zip(last).map(|(f, l)| (f, l, count)))
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn make_trade(
    symbol: &str,
    representative: &str,
    amount: f64,
    transaction: OrderDirection,
) -> CongressTrade {
    CongressTrade {
        symbol: Symbol::new(symbol),
        date: date(2022, 2, 14),
        representative: representative.to_string(),
        amount,
        transaction,
    }
}

/// The week of 2022-02-14 plus one prior trading day for the history check.
pub fn sample_week() -> MockUniverseDataPort {
    use OrderDirection::*;
    MockUniverseDataPort::new()
        .with_day(
            date(2022, 2, 11),
            vec![make_trade("TSLA", "Rep Prior", 75_000.0, Buy)],
        )
        .with_day(
            date(2022, 2, 14),
            vec![
                make_trade("SYM_A", "Rep1", 250_000.0, Buy),
                make_trade("SYM_B", "Rep2", 150_000.0, Buy),
                make_trade("SYM_C", "Rep3", 300_000.0, Sell),
            ],
        )
        .with_day(
            date(2022, 2, 15),
            vec![
                make_trade("SYM_A", "Rep1", 500_000.0, Buy),
                make_trade("SYM_D", "Rep4", 1_000_000.0, Buy),
            ],
        )
        .with_day(
            date(2022, 2, 17),
            vec![make_trade("SYM_D", "Rep4", 200_001.0, Buy)],
        )
}

/// Writes `YYYYMMDD.csv` files under `dir`.
pub fn write_day_csv(dir: &Path, date: NaiveDate, rows: &[&str]) {
    let mut content = String::from("ticker,representative,transaction,amount\n");
    for row in rows {
        content.push_str(row);
        content.push('\n');
    }
    fs::write(dir.join(format!("{}.csv", date.format("%Y%m%d"))), content).unwrap();
}
