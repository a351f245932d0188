//! Configuration access port trait.

use chrono::NaiveDate;

pub trait ConfigPort {
    fn get_string(&self, section: &str, key: &str) -> Option<String>;

    /// `YYYY-MM-DD` value. `None` when the key is absent, `Some(Err(raw))`
    /// when present but unparseable.
    fn get_date(&self, section: &str, key: &str) -> Option<Result<NaiveDate, String>> {
        self.get_string(section, key)
            .map(|raw| NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| raw))
    }
}
