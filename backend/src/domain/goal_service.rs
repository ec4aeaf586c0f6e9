//! Goal service: CRUD over savings goals plus feasibility projections.
//!
//! Validation happens here, before anything reaches storage. In particular
//! `target_amount > 0` and `0 <= saved_amount <= target_amount` are enforced
//! at create and update time, which is what lets the projection stay a pure
//! unchecked calculation.

use anyhow::Result;
use chrono::{Local, NaiveDate, Utc};
use log::info;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use shared::{CreateGoalRequest, GoalProjection, UpdateGoalRequest};

use crate::domain::models::goal::{DomainGoal, GoalValidationError};
use crate::domain::projection::project_goal;
use crate::storage::csv::{CsvConnection, GoalRepository};
use crate::storage::GoalStorage;

const MAX_NAME_LENGTH: usize = 100;

/// A goal paired with its projection as of today.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedGoal {
    pub goal: DomainGoal,
    pub projection: GoalProjection,
}

/// Service for managing savings goals
#[derive(Clone)]
pub struct GoalService {
    goal_repository: GoalRepository,
}

impl GoalService {
    pub fn new(connection: Arc<CsvConnection>) -> Self {
        let goal_repository = GoalRepository::new((*connection).clone());
        Self { goal_repository }
    }

    /// Validate and store a new goal
    pub async fn create_goal(&self, request: CreateGoalRequest) -> Result<ProjectedGoal> {
        info!("Creating goal: {:?}", request);

        let name = Self::validate_name(&request.name)?;

        if request.target_amount <= 0.0 {
            return Err(GoalValidationError::NonPositiveTargetAmount.into());
        }

        let saved_amount = request.saved_amount.unwrap_or(0.0);
        Self::validate_saved_amount(saved_amount, request.target_amount)?;

        let deadline = Self::parse_deadline(&request.deadline)?;

        let now_millis = SystemTime::now().duration_since(UNIX_EPOCH)?.as_millis() as u64;
        let now_rfc3339 = Utc::now().to_rfc3339();

        let goal = DomainGoal {
            id: DomainGoal::generate_id(now_millis),
            name,
            target_amount: request.target_amount,
            saved_amount,
            deadline,
            priority: request.priority,
            created_at: now_rfc3339.clone(),
            updated_at: now_rfc3339,
        };

        self.goal_repository.store_goal(&goal).await?;

        info!("Successfully created goal: {}", goal.id);
        Ok(self.with_projection(goal))
    }

    /// Apply a partial update to an existing goal
    pub async fn update_goal(
        &self,
        goal_id: &str,
        request: UpdateGoalRequest,
    ) -> Result<ProjectedGoal> {
        info!("Updating goal {}: {:?}", goal_id, request);

        let mut goal = self
            .goal_repository
            .get_goal(goal_id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Goal not found: {}", goal_id))?;

        if let Some(name) = request.name {
            goal.name = Self::validate_name(&name)?;
        }
        if let Some(target_amount) = request.target_amount {
            if target_amount <= 0.0 {
                return Err(GoalValidationError::NonPositiveTargetAmount.into());
            }
            goal.target_amount = target_amount;
        }
        if let Some(saved_amount) = request.saved_amount {
            goal.saved_amount = saved_amount;
        }
        if let Some(deadline) = request.deadline {
            goal.deadline = Self::parse_deadline(&deadline)?;
        }
        if let Some(priority) = request.priority {
            goal.priority = priority;
        }

        // The combined record must still hold, whichever fields changed
        Self::validate_saved_amount(goal.saved_amount, goal.target_amount)?;

        goal.updated_at = Utc::now().to_rfc3339();

        self.goal_repository.update_goal(&goal).await?;

        info!("Successfully updated goal: {}", goal.id);
        Ok(self.with_projection(goal))
    }

    /// Delete a goal by id
    pub async fn delete_goal(&self, goal_id: &str) -> Result<()> {
        info!("Deleting goal: {}", goal_id);

        let deleted = self.goal_repository.delete_goal(goal_id).await?;
        if !deleted {
            return Err(anyhow::anyhow!("Goal not found: {}", goal_id));
        }

        Ok(())
    }

    /// List all goals, soonest deadline first, each with its projection
    pub async fn list_goals(&self) -> Result<Vec<ProjectedGoal>> {
        let goals = self.goal_repository.list_goals().await?;

        Ok(goals.into_iter().map(|g| self.with_projection(g)).collect())
    }

    fn with_projection(&self, goal: DomainGoal) -> ProjectedGoal {
        let projection = project_goal(&goal, Local::now().date_naive());
        ProjectedGoal { goal, projection }
    }

    fn validate_name(name: &str) -> Result<String> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(GoalValidationError::EmptyName.into());
        }
        if trimmed.len() > MAX_NAME_LENGTH {
            return Err(GoalValidationError::NameTooLong.into());
        }
        Ok(trimmed.to_string())
    }

    fn validate_saved_amount(saved_amount: f64, target_amount: f64) -> Result<()> {
        if saved_amount < 0.0 {
            return Err(GoalValidationError::NegativeSavedAmount.into());
        }
        if saved_amount > target_amount {
            return Err(GoalValidationError::SavedExceedsTarget.into());
        }
        Ok(())
    }

    fn parse_deadline(deadline: &str) -> Result<NaiveDate> {
        NaiveDate::parse_from_str(deadline, "%Y-%m-%d")
            .map_err(|e| GoalValidationError::InvalidDeadline(e.to_string()).into())
    }
}
