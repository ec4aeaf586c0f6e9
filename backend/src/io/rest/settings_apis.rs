//! # REST API for Profile Settings

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use log::{error, info};

use shared::{
    GetProfileSettingsResponse, UpdateProfileSettingsRequest, UpdateProfileSettingsResponse,
};

use crate::AppState;

/// Create a router for settings related APIs
pub fn router() -> Router<AppState> {
    Router::new().route("/profiles", get(get_profile_settings).put(update_profile_settings))
}

/// Current display names for the two profiles
pub async fn get_profile_settings(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/settings/profiles");

    match state.settings_service.get_settings().await {
        Ok(settings) => {
            let response = GetProfileSettingsResponse { settings };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to load settings: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error retrieving settings").into_response()
        }
    }
}

/// Update one or both display names
pub async fn update_profile_settings(
    State(state): State<AppState>,
    Json(request): Json<UpdateProfileSettingsRequest>,
) -> impl IntoResponse {
    info!("PUT /api/settings/profiles - request: {:?}", request);

    match state.settings_service.update_settings(request).await {
        Ok(settings) => {
            let response = UpdateProfileSettingsResponse {
                settings,
                success_message: "Settings updated successfully".to_string(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to update settings: {}", e);
            let status = if e.to_string().contains("cannot be empty")
                || e.to_string().contains("cannot exceed")
            {
                StatusCode::BAD_REQUEST
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };
            (status, e.to_string()).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::initialize_backend;
    use crate::storage::CsvConnection;

    fn setup_test_app_state() -> (AppState, tempfile::TempDir) {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let connection =
            CsvConnection::new(temp_dir.path()).expect("Failed to create connection");
        (initialize_backend(connection), temp_dir)
    }

    #[tokio::test]
    async fn test_get_profile_settings_api_returns_ok() {
        let (app_state, _temp_dir) = setup_test_app_state();

        let response = get_profile_settings(State(app_state)).await.into_response();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_update_with_empty_name_is_rejected() {
        let (app_state, _temp_dir) = setup_test_app_state();

        let request = UpdateProfileSettingsRequest {
            hasnaa_display_name: Some("".to_string()),
            achraf_display_name: None,
        };
        let response = update_profile_settings(State(app_state), Json(request))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
