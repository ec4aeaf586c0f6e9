//! # REST API for Data Export
//!
//! A JSON bundle of everything, plus standalone CSV downloads per collection.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use chrono::Utc;
use log::{error, info};

use shared::ExportBundle;

use crate::io::rest::mappers::{expense_mapper::ExpenseMapper, goal_mapper::GoalMapper};
use crate::AppState;

/// Create a router for export related APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(export_bundle))
        .route("/expenses.csv", get(export_expenses_csv))
        .route("/goals.csv", get(export_goals_csv))
}

/// Export both collections as one JSON bundle
pub async fn export_bundle(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/export");

    match state.export_service.export_data().await {
        Ok(data) => {
            let goals = data
                .goals
                .into_iter()
                .map(GoalMapper::to_dto)
                .collect();
            let response = ExportBundle {
                exported_at: Utc::now().to_rfc3339(),
                expenses: ExpenseMapper::to_dto_list(data.expenses),
                goals,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to export data: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error exporting data").into_response()
        }
    }
}

/// Download all expenses as CSV
pub async fn export_expenses_csv(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/export/expenses.csv");

    match state.export_service.export_expenses_csv().await {
        Ok(csv) => ([(header::CONTENT_TYPE, "text/csv")], csv).into_response(),
        Err(e) => {
            error!("Failed to export expenses CSV: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error exporting expenses").into_response()
        }
    }
}

/// Download all goals as CSV
pub async fn export_goals_csv(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/export/goals.csv");

    match state.export_service.export_goals_csv().await {
        Ok(csv) => ([(header::CONTENT_TYPE, "text/csv")], csv).into_response(),
        Err(e) => {
            error!("Failed to export goals CSV: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error exporting goals").into_response()
        }
    }
}
