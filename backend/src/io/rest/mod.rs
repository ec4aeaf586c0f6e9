//! # REST API
//!
//! One module per resource, each exposing a `router()` that the application
//! router nests under `/api`. Handlers translate between the shared DTOs and
//! the domain services, and map service errors onto HTTP status codes.

pub mod balance_apis;
pub mod expense_apis;
pub mod export_apis;
pub mod goal_apis;
pub mod mappers;
pub mod report_apis;
pub mod settings_apis;
