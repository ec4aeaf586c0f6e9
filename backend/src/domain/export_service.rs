//! Data export: the full expense and goal collections as a bundle or as CSV.

use anyhow::Result;
use csv::Writer;
use log::info;
use std::sync::Arc;

use crate::domain::models::expense::DomainExpense;
use crate::domain::models::goal::DomainGoal;
use crate::storage::csv::{CsvConnection, ExpenseRepository, GoalRepository};
use crate::storage::{ExpenseStorage, GoalStorage};

/// Everything the export covers, in domain form.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportData {
    pub expenses: Vec<DomainExpense>,
    pub goals: Vec<DomainGoal>,
}

#[derive(Clone)]
pub struct ExportService {
    expense_repository: ExpenseRepository,
    goal_repository: GoalRepository,
}

impl ExportService {
    pub fn new(connection: Arc<CsvConnection>) -> Self {
        let expense_repository = ExpenseRepository::new((*connection).clone());
        let goal_repository = GoalRepository::new((*connection).clone());
        Self {
            expense_repository,
            goal_repository,
        }
    }

    /// Collect both collections for a bundle export
    pub async fn export_data(&self) -> Result<ExportData> {
        let expenses = self.expense_repository.list_expenses().await?;
        let goals = self.goal_repository.list_goals().await?;

        info!(
            "Exporting {} expenses and {} goals",
            expenses.len(),
            goals.len()
        );

        Ok(ExportData { expenses, goals })
    }

    /// Render all expenses as a CSV document
    pub async fn export_expenses_csv(&self) -> Result<String> {
        let expenses = self.expense_repository.list_expenses().await?;

        let mut writer = Writer::from_writer(Vec::new());
        writer.write_record(["id", "amount", "category", "date", "paid_by", "notes", "created_at"])?;

        for expense in &expenses {
            writer.write_record(&[
                expense.id.clone(),
                expense.amount.to_string(),
                expense.category.to_string(),
                expense.date.format("%Y-%m-%d").to_string(),
                expense.paid_by.to_string(),
                expense.notes.clone().unwrap_or_default(),
                expense.created_at.clone(),
            ])?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| anyhow::anyhow!("Failed to finish CSV export: {}", e))?;
        Ok(String::from_utf8(bytes)?)
    }

    /// Render all goals as a CSV document
    pub async fn export_goals_csv(&self) -> Result<String> {
        let goals = self.goal_repository.list_goals().await?;

        let mut writer = Writer::from_writer(Vec::new());
        writer.write_record([
            "id",
            "name",
            "target_amount",
            "saved_amount",
            "deadline",
            "priority",
            "created_at",
            "updated_at",
        ])?;

        for goal in &goals {
            writer.write_record(&[
                goal.id.clone(),
                goal.name.clone(),
                goal.target_amount.to_string(),
                goal.saved_amount.to_string(),
                goal.deadline.format("%Y-%m-%d").to_string(),
                goal.priority.to_string(),
                goal.created_at.clone(),
                goal.updated_at.clone(),
            ])?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| anyhow::anyhow!("Failed to finish CSV export: {}", e))?;
        Ok(String::from_utf8(bytes)?)
    }
}
