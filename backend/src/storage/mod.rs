//! # Storage Module
//!
//! Data persistence for the finance tracker: the storage traits the domain
//! layer programs against, and the file-based implementations that back them.

pub mod csv;
pub mod traits;

pub use csv::{CsvConnection, ExpenseRepository, GoalRepository, SettingsRepository};
pub use traits::{ExpenseStorage, GoalStorage, SettingsStorage};
