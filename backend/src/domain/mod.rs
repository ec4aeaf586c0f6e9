//! # Domain Module
//!
//! Business logic for the finance tracker: the pure settlement and projection
//! calculations, the domain models, and the services that validate input and
//! coordinate persistence. Works against the storage traits and knows nothing
//! about HTTP.
//!
//! ## Module Organization
//!
//! - **balance**: the two-person settlement calculation
//! - **projection**: goal feasibility projection
//! - **expense_service**: expense CRUD and validation
//! - **balance_service**: recomputing the settlement from stored expenses
//! - **goal_service**: goal CRUD, validation, and projections
//! - **report_service**: monthly/category spending breakdowns
//! - **settings_service**: profile display names
//! - **export_service**: full-data export (JSON bundle, CSV)

pub mod balance;
pub mod balance_service;
pub mod expense_service;
pub mod export_service;
pub mod goal_service;
pub mod models;
pub mod projection;
pub mod report_service;
pub mod settings_service;

pub use balance_service::BalanceService;
pub use expense_service::ExpenseService;
pub use export_service::{ExportData, ExportService};
pub use goal_service::{GoalService, ProjectedGoal};
pub use report_service::{MonthlySummary, ReportService};
pub use settings_service::SettingsService;
