//! Core domain types and logic.

pub mod symbol;
pub mod order_direction;
pub mod resolution;
pub mod congress_trade;
pub mod selection;
pub mod security_changes;
pub mod algorithm;
pub mod congress_algorithm;
pub mod engine;
pub mod config_validation;
pub mod error;
