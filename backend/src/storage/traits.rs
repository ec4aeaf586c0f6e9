//! # Storage Traits
//!
//! This module defines the storage abstraction traits that allow different
//! storage backends to be used interchangeably in the domain layer.

use anyhow::Result;
use async_trait::async_trait;
use shared::ProfileSettings;

use crate::domain::models::expense::DomainExpense;
use crate::domain::models::goal::DomainGoal;

/// Trait defining the interface for expense storage operations
///
/// Expenses are immutable once stored; the only mutations are insert and
/// delete.
#[async_trait]
pub trait ExpenseStorage: Send + Sync {
    /// Store a new expense
    async fn store_expense(&self, expense: &DomainExpense) -> Result<()>;

    /// Retrieve a specific expense by ID
    async fn get_expense(&self, expense_id: &str) -> Result<Option<DomainExpense>>;

    /// List all expenses ordered by date descending (most recent first)
    async fn list_expenses(&self) -> Result<Vec<DomainExpense>>;

    /// Delete an expense by ID
    /// Returns true if the expense was found and deleted, false otherwise
    async fn delete_expense(&self, expense_id: &str) -> Result<bool>;
}

/// Trait defining the interface for goal storage operations
#[async_trait]
pub trait GoalStorage: Send + Sync {
    /// Store a new goal
    async fn store_goal(&self, goal: &DomainGoal) -> Result<()>;

    /// Retrieve a specific goal by ID
    async fn get_goal(&self, goal_id: &str) -> Result<Option<DomainGoal>>;

    /// List all goals ordered by deadline ascending (soonest first)
    async fn list_goals(&self) -> Result<Vec<DomainGoal>>;

    /// Replace an existing goal with the same ID
    async fn update_goal(&self, goal: &DomainGoal) -> Result<()>;

    /// Delete a goal by ID
    /// Returns true if the goal was found and deleted, false otherwise
    async fn delete_goal(&self, goal_id: &str) -> Result<bool>;
}

/// Trait defining the interface for profile settings storage
#[async_trait]
pub trait SettingsStorage: Send + Sync {
    /// Load the profile settings, falling back to defaults when none are stored
    async fn get_profile_settings(&self) -> Result<ProfileSettings>;

    /// Persist the profile settings
    async fn update_profile_settings(&self, settings: &ProfileSettings) -> Result<()>;
}
