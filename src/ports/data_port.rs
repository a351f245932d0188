//! Universe data access port trait.

use crate::domain::congress_trade::UniverseSlice;
use crate::domain::error::CongressError;
use chrono::NaiveDate;

pub trait UniverseDataPort {
    /// Slices with dates in `[start_date, end_date]`, ascending by date.
    fn fetch_slices(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<UniverseSlice>, CongressError>;

    /// All dates with data, ascending.
    fn list_dates(&self) -> Result<Vec<NaiveDate>, CongressError>;

    /// `(first date, last date, record count)` or `None` when there is no data.
    fn get_data_range(&self) -> Result<Option<(NaiveDate, NaiveDate, usize)>, CongressError>;
}
