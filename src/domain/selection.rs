//! Universe selection predicate.
//!
//! A datum is selected when its transaction amount is strictly above the
//! threshold and its direction matches. Selection is a stable filter: the
//! output keeps the relative order of the input.

use crate::domain::congress_trade::CongressTrade;
use crate::domain::order_direction::OrderDirection;
use crate::domain::symbol::Symbol;

pub const DEFAULT_MIN_AMOUNT: f64 = 200_000.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionCriteria {
    pub min_amount: f64,
    pub direction: OrderDirection,
}

impl Default for SelectionCriteria {
    fn default() -> Self {
        Self {
            min_amount: DEFAULT_MIN_AMOUNT,
            direction: OrderDirection::Buy,
        }
    }
}

impl SelectionCriteria {
    pub fn matches(&self, trade: &CongressTrade) -> bool {
        trade.amount > self.min_amount && trade.transaction == self.direction
    }
}

pub fn select_symbols(data: &[CongressTrade], criteria: &SelectionCriteria) -> Vec<Symbol> {
    data.iter()
        .filter(|d| criteria.matches(d))
        .map(|d| d.symbol.clone())
        .collect()
}
