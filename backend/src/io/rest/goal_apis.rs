//! # REST API for Goal Management
//!
//! Endpoints for creating, listing, updating, and deleting savings goals.
//! Every goal in a response is paired with its projection against today.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, put},
    Router,
};
use log::{error, info};

use shared::{
    CreateGoalRequest, CreateGoalResponse, DeleteGoalResponse, GoalListResponse,
    UpdateGoalRequest, UpdateGoalResponse,
};

use crate::io::rest::mappers::goal_mapper::GoalMapper;
use crate::AppState;

/// Create a router for goal related APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_goals).post(create_goal))
        .route("/:goal_id", put(update_goal).delete(delete_goal))
}

fn goal_error_status(message: &str) -> StatusCode {
    if message.contains("not found") {
        StatusCode::NOT_FOUND
    } else if message.contains("cannot be empty")
        || message.contains("must be positive")
        || message.contains("cannot exceed")
        || message.contains("cannot be negative")
        || message.contains("Invalid goal deadline")
    {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

/// Create a new goal
pub async fn create_goal(
    State(state): State<AppState>,
    Json(request): Json<CreateGoalRequest>,
) -> impl IntoResponse {
    info!("POST /api/goals - request: {:?}", request);

    match state.goal_service.create_goal(request).await {
        Ok(projected) => {
            let with_projection = GoalMapper::to_with_projection(projected);
            let response = CreateGoalResponse {
                goal: with_projection.goal,
                projection: with_projection.projection,
                success_message: "Goal created successfully".to_string(),
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to create goal: {}", e);
            (goal_error_status(&e.to_string()), e.to_string()).into_response()
        }
    }
}

/// List all goals with projections, soonest deadline first
pub async fn list_goals(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/goals");

    match state.goal_service.list_goals().await {
        Ok(goals) => {
            let response = GoalListResponse {
                goals: GoalMapper::to_with_projection_list(goals),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to list goals: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error retrieving goals").into_response()
        }
    }
}

/// Apply a partial update to a goal
pub async fn update_goal(
    State(state): State<AppState>,
    Path(goal_id): Path<String>,
    Json(request): Json<UpdateGoalRequest>,
) -> impl IntoResponse {
    info!("PUT /api/goals/{} - request: {:?}", goal_id, request);

    match state.goal_service.update_goal(&goal_id, request).await {
        Ok(projected) => {
            let with_projection = GoalMapper::to_with_projection(projected);
            let response = UpdateGoalResponse {
                goal: with_projection.goal,
                projection: with_projection.projection,
                success_message: "Goal updated successfully".to_string(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to update goal: {}", e);
            (goal_error_status(&e.to_string()), e.to_string()).into_response()
        }
    }
}

/// Delete a goal by id
pub async fn delete_goal(
    State(state): State<AppState>,
    Path(goal_id): Path<String>,
) -> impl IntoResponse {
    info!("DELETE /api/goals/{}", goal_id);

    match state.goal_service.delete_goal(&goal_id).await {
        Ok(()) => {
            let response = DeleteGoalResponse {
                success_message: "Goal deleted successfully".to_string(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to delete goal: {}", e);
            (goal_error_status(&e.to_string()), e.to_string()).into_response()
        }
    }
}
