//! # REST API for Spending Reports

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use log::{error, info};

use shared::{MonthlySummaryResponse, YearlyReportRequest};

use crate::io::rest::mappers::expense_mapper::ExpenseMapper;
use crate::AppState;

/// Create a router for report related APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/yearly", get(get_yearly_report))
        .route("/monthly-summary", get(get_monthly_summary))
}

/// Per-month and per-category breakdown for one year
pub async fn get_yearly_report(
    State(state): State<AppState>,
    Query(query): Query<YearlyReportRequest>,
) -> impl IntoResponse {
    info!("GET /api/reports/yearly - query: {:?}", query);

    match state.report_service.yearly_report(query.year).await {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(e) => {
            error!("Failed to build yearly report: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error building report").into_response()
        }
    }
}

/// Current-month totals plus the most recent expenses
pub async fn get_monthly_summary(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/reports/monthly-summary");

    match state.report_service.monthly_summary().await {
        Ok(summary) => {
            let response = MonthlySummaryResponse {
                year: summary.year,
                month: summary.month,
                total_spent: summary.total_spent,
                hasnaa_spent: summary.hasnaa_spent,
                achraf_spent: summary.achraf_spent,
                recent_expenses: ExpenseMapper::to_dto_list(summary.recent),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to build monthly summary: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error building summary").into_response()
        }
    }
}
