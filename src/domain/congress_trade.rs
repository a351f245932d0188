//! Congressional trade disclosure record, one universe datum.

use crate::domain::order_direction::OrderDirection;
use crate::domain::symbol::Symbol;
use chrono::NaiveDate;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct CongressTrade {
    pub symbol: Symbol,
    pub date: NaiveDate,
    pub representative: String,
    pub amount: f64,
    pub transaction: OrderDirection,
}

/// Log form: `symbol,representative,amount,transaction`.
impl fmt::Display for CongressTrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{}",
            self.symbol, self.representative, self.amount, self.transaction
        )
    }
}

/// All universe data delivered for a single date.
#[derive(Debug, Clone, PartialEq)]
pub struct UniverseSlice {
    pub date: NaiveDate,
    pub data: Vec<CongressTrade>,
}

impl UniverseSlice {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
