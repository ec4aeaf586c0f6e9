use chrono::NaiveDate;
use shared::GoalPriority;

/// A savings target. Every field can change over its lifetime, including
/// `saved_amount` as progress is recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct DomainGoal {
    pub id: String,
    pub name: String,
    pub target_amount: f64,
    pub saved_amount: f64,
    pub deadline: NaiveDate,
    pub priority: GoalPriority,
    pub created_at: String,
    pub updated_at: String,
}

impl DomainGoal {
    pub fn generate_id(now_millis: u64) -> String {
        format!("goal::{}", now_millis)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GoalValidationError {
    #[error("Goal name cannot be empty")]
    EmptyName,
    #[error("Goal name cannot exceed 100 characters")]
    NameTooLong,
    #[error("Goal target amount must be positive")]
    NonPositiveTargetAmount,
    #[error("Saved amount cannot be negative")]
    NegativeSavedAmount,
    #[error("Saved amount cannot exceed the target amount")]
    SavedExceedsTarget,
    #[error("Invalid goal deadline: {0}")]
    InvalidDeadline(String),
}
