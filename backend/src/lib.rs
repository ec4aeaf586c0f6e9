//! # Finance Tracker Backend
//!
//! Non-UI logic for the shared finance tracker: a two-person household logs
//! expenses, sets savings goals, and reads the derived settlement balance.
//!
//! The crate follows a layered architecture:
//! ```text
//! UI Layer (web SPA)
//!     ↓
//! IO Layer (REST API, handlers)
//!     ↓
//! Domain Layer (business logic, services)
//!     ↓
//! Storage Layer (file persistence)
//! ```
//!
//! The backend is UI-agnostic: the same services could back a CLI or a
//! desktop shell without modification.

pub mod domain;
pub mod io;
pub mod storage;

use axum::{
    http::{HeaderValue, Method},
    Router,
};
use log::info;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::domain::{
    BalanceService, ExpenseService, ExportService, GoalService, ReportService, SettingsService,
};
use crate::storage::CsvConnection;

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub expense_service: ExpenseService,
    pub balance_service: BalanceService,
    pub goal_service: GoalService,
    pub report_service: ReportService,
    pub settings_service: SettingsService,
    pub export_service: ExportService,
}

/// Build all services on top of one storage connection
pub fn initialize_backend(connection: CsvConnection) -> AppState {
    info!("Setting up domain services");
    let connection = Arc::new(connection);

    AppState {
        expense_service: ExpenseService::new(connection.clone()),
        balance_service: BalanceService::new(connection.clone()),
        goal_service: GoalService::new(connection.clone()),
        report_service: ReportService::new(connection.clone()),
        settings_service: SettingsService::new(connection.clone()),
        export_service: ExportService::new(connection),
    }
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router {
    // CORS setup to allow the frontend to make requests
    let cors = CorsLayer::new()
        .allow_origin("http://localhost:8080".parse::<HeaderValue>().unwrap())
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    let api_routes = Router::new()
        .nest("/expenses", io::rest::expense_apis::router())
        .nest("/balance", io::rest::balance_apis::router())
        .nest("/goals", io::rest::goal_apis::router())
        .nest("/reports", io::rest::report_apis::router())
        .nest("/settings", io::rest::settings_apis::router())
        .nest("/export", io::rest::export_apis::router());

    Router::new()
        .nest("/api", api_routes)
        .fallback_service(ServeDir::new("public"))
        .layer(cors)
        .with_state(app_state)
}
