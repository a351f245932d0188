//! In-memory log sink that records every message, for inspection in tests
//! and by callers that want the algorithm output as data.

use crate::ports::log_port::LogSink;
use std::cell::RefCell;

#[derive(Debug, Default)]
pub struct MemoryLog {
    messages: RefCell<Vec<String>>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.messages.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.borrow().is_empty()
    }
}

impl LogSink for MemoryLog {
    fn log(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_order() {
        let log = MemoryLog::new();
        assert!(log.is_empty());
        log.log("first");
        log.log("second");
        assert_eq!(log.len(), 2);
        assert_eq!(log.messages(), vec!["first", "second"]);
    }
}
