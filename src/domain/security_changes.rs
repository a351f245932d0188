//! Securities added to and removed from the active universe between cycles.

use crate::domain::symbol::Symbol;
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecurityChanges {
    pub added: Vec<Symbol>,
    pub removed: Vec<Symbol>,
}

impl SecurityChanges {
    /// Diff two selections. `added` follows the order of `current`,
    /// `removed` the order of `previous`.
    pub fn between(previous: &[Symbol], current: &[Symbol]) -> Self {
        let added = current
            .iter()
            .filter(|s| !previous.contains(s))
            .cloned()
            .collect();
        let removed = previous
            .iter()
            .filter(|s| !current.contains(s))
            .cloned()
            .collect();
        Self { added, removed }
    }

    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

fn join(symbols: &[Symbol]) -> String {
    symbols
        .iter()
        .map(Symbol::as_str)
        .collect::<Vec<_>>()
        .join(",")
}

impl fmt::Display for SecurityChanges {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("SecurityChanges: None");
        }
        f.write_str("SecurityChanges:")?;
        if !self.added.is_empty() {
            write!(f, " Added: {}", join(&self.added))?;
        }
        if !self.removed.is_empty() {
            write!(f, " Removed: {}", join(&self.removed))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbols(tickers: &[&str]) -> Vec<Symbol> {
        tickers.iter().map(|t| Symbol::new(t)).collect()
    }

    #[test]
    fn between_detects_added_and_removed() {
        let changes = SecurityChanges::between(&symbols(&["A", "B"]), &symbols(&["B", "C", "D"]));
        assert_eq!(changes.added, symbols(&["C", "D"]));
        assert_eq!(changes.removed, symbols(&["A"]));
    }

    #[test]
    fn identical_selections_have_no_changes() {
        let changes = SecurityChanges::between(&symbols(&["A", "B"]), &symbols(&["B", "A"]));
        assert!(changes.is_empty());
    }

    #[test]
    fn display_formats() {
        let none = SecurityChanges::default();
        assert_eq!(none.to_string(), "SecurityChanges: None");

        let added = SecurityChanges::between(&[], &symbols(&["A", "B"]));
        assert_eq!(added.to_string(), "SecurityChanges: Added: A,B");

        let both = SecurityChanges::between(&symbols(&["X"]), &symbols(&["A"]));
        assert_eq!(both.to_string(), "SecurityChanges: Added: A Removed: X");

        let removed = SecurityChanges::between(&symbols(&["X"]), &[]);
        assert_eq!(removed.to_string(), "SecurityChanges: Removed: X");
    }
}
