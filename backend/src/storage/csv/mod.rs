//! # File-Based Storage
//!
//! CSV-backed repositories for expenses and goals, plus YAML-backed profile
//! settings, all rooted in a single data directory:
//!
//! ```text
//! data/
//! ├── settings.yaml
//! ├── expenses.csv
//! └── goals.csv
//! ```
//!
//! CSV files carry a header row. Full rewrites go through a temp file and an
//! atomic rename; inserts append.

pub mod connection;
pub mod expense_repository;
pub mod goal_repository;
pub mod settings_repository;

pub use connection::CsvConnection;
pub use expense_repository::ExpenseRepository;
pub use goal_repository::GoalRepository;
pub use settings_repository::SettingsRepository;
