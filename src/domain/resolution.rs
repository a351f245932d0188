//! Data resolution (time granularity of delivered data).

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Resolution {
    Tick,
    Second,
    Minute,
    Hour,
    Daily,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown resolution: {0}")]
pub struct UnknownResolution(pub String);

impl FromStr for Resolution {
    type Err = UnknownResolution;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tick" => Ok(Resolution::Tick),
            "second" => Ok(Resolution::Second),
            "minute" => Ok(Resolution::Minute),
            "hour" => Ok(Resolution::Hour),
            "daily" | "day" => Ok(Resolution::Daily),
            _ => Err(UnknownResolution(s.to_string())),
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Resolution::Tick => "Tick",
            Resolution::Second => "Second",
            Resolution::Minute => "Minute",
            Resolution::Hour => "Hour",
            Resolution::Daily => "Daily",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("daily".parse(), Ok(Resolution::Daily));
        assert_eq!("Day".parse(), Ok(Resolution::Daily));
        assert_eq!("MINUTE".parse(), Ok(Resolution::Minute));
    }

    #[test]
    fn rejects_unknown() {
        assert!("weekly".parse::<Resolution>().is_err());
    }

    #[test]
    fn orders_fine_to_coarse() {
        assert!(Resolution::Tick < Resolution::Minute);
        assert!(Resolution::Hour < Resolution::Daily);
    }
}
