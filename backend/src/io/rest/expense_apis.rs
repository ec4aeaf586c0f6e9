//! # REST API for Expense Management
//!
//! Endpoints for logging, listing, and deleting expenses. Mutating endpoints
//! return the recomputed balance alongside the result so clients can refresh
//! the settlement display without a second request.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{delete, get},
    Router,
};
use log::{error, info};

use shared::{
    CreateExpenseRequest, CreateExpenseResponse, DeleteExpenseResponse, ExpenseListRequest,
    ExpenseListResponse,
};

use crate::io::rest::mappers::expense_mapper::ExpenseMapper;
use crate::AppState;

/// Create a router for expense related APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_expenses).post(create_expense))
        .route("/:expense_id", delete(delete_expense))
}

/// Log a new expense
pub async fn create_expense(
    State(state): State<AppState>,
    Json(request): Json<CreateExpenseRequest>,
) -> impl IntoResponse {
    info!("POST /api/expenses - request: {:?}", request);

    let expense = match state.expense_service.create_expense(request).await {
        Ok(expense) => expense,
        Err(e) => {
            error!("Failed to create expense: {}", e);
            let status = if e.to_string().contains("must be positive")
                || e.to_string().contains("cannot exceed")
                || e.to_string().contains("Invalid expense date")
            {
                StatusCode::BAD_REQUEST
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };
            return (status, e.to_string()).into_response();
        }
    };

    match state.balance_service.get_balance().await {
        Ok(balance) => {
            let formatted_amount = ExpenseMapper::format_amount(expense.amount);
            let response = CreateExpenseResponse {
                expense: ExpenseMapper::to_dto(expense),
                balance,
                formatted_amount,
                success_message: "Expense added successfully".to_string(),
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to recompute balance: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error computing balance").into_response()
        }
    }
}

/// List expenses, optionally filtered by year and month
pub async fn list_expenses(
    State(state): State<AppState>,
    Query(query): Query<ExpenseListRequest>,
) -> impl IntoResponse {
    info!("GET /api/expenses - query: {:?}", query);

    match state
        .expense_service
        .list_expenses(query.year, query.month)
        .await
    {
        Ok(expenses) => {
            let response = ExpenseListResponse {
                expenses: ExpenseMapper::to_dto_list(expenses),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to list expenses: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error retrieving expenses").into_response()
        }
    }
}

/// Delete an expense by id
pub async fn delete_expense(
    State(state): State<AppState>,
    Path(expense_id): Path<String>,
) -> impl IntoResponse {
    info!("DELETE /api/expenses/{}", expense_id);

    if let Err(e) = state.expense_service.delete_expense(&expense_id).await {
        error!("Failed to delete expense: {}", e);
        let status = if e.to_string().contains("not found") {
            StatusCode::NOT_FOUND
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        return (status, e.to_string()).into_response();
    }

    match state.balance_service.get_balance().await {
        Ok(balance) => {
            let response = DeleteExpenseResponse {
                balance,
                success_message: "Expense deleted successfully".to_string(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to recompute balance: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error computing balance").into_response()
        }
    }
}
