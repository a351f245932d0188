//! Transaction direction of a reported trade.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderDirection {
    Buy,
    Sell,
    Hold,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown transaction direction: {0}")]
pub struct UnknownDirection(pub String);

impl FromStr for OrderDirection {
    type Err = UnknownDirection;

    /// Accepts both order-side spellings and disclosure-report spellings
    /// ("Purchase", "Sale (Partial)").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "buy" | "purchase" => Ok(OrderDirection::Buy),
            "sell" | "sale" | "sale (full)" | "sale (partial)" | "sale_full"
            | "sale_partial" => Ok(OrderDirection::Sell),
            "hold" => Ok(OrderDirection::Hold),
            _ => Err(UnknownDirection(s.to_string())),
        }
    }
}

impl fmt::Display for OrderDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OrderDirection::Buy => "Buy",
            OrderDirection::Sell => "Sell",
            OrderDirection::Hold => "Hold",
        };
        f.write_str(name)
    }
}
