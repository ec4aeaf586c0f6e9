//! # REST API for the Settlement Balance

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use log::{error, info};

use shared::BalanceResponse;

use crate::AppState;

/// Create a router for balance related APIs
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_balance))
}

/// Recompute and return the settlement over all expenses
pub async fn get_balance(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/balance");

    match state.balance_service.get_balance().await {
        Ok(balance) => {
            let response = BalanceResponse { balance };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to compute balance: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error computing balance").into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::initialize_backend;
    use crate::storage::CsvConnection;

    #[tokio::test]
    async fn test_get_balance_api_returns_ok() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let connection =
            CsvConnection::new(temp_dir.path()).expect("Failed to create connection");
        let app_state = initialize_backend(connection);

        let response = get_balance(State(app_state)).await.into_response();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_even_balance_serializes_with_null_owner() {
        let balance = shared::Balance {
            hasnaa_paid: 50.0,
            achraf_paid: 50.0,
            difference: 0.0,
            who_owes: None,
            amount: 0.0,
        };

        let value = serde_json::to_value(&balance).unwrap();

        assert!(value["who_owes"].is_null());
        assert_eq!(value["amount"], 0.0);
    }

    #[test]
    fn test_uneven_balance_serializes_owner_name() {
        let balance = shared::Balance {
            hasnaa_paid: 300.0,
            achraf_paid: 0.0,
            difference: 300.0,
            who_owes: Some(shared::Profile::Achraf),
            amount: 150.0,
        };

        let value = serde_json::to_value(&balance).unwrap();

        assert_eq!(value["who_owes"], "Achraf");
    }
}
