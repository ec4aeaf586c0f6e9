//! Expense management: validation, creation, listing, deletion.
//!
//! Expenses are immutable once logged. The only write operations are adding
//! a new expense and deleting one by id; the settlement derived from them is
//! recomputed by callers after every change.

use anyhow::Result;
use chrono::{Datelike, NaiveDate, Utc};
use log::info;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use shared::CreateExpenseRequest;

use crate::domain::models::expense::{DomainExpense, ExpenseValidationError};
use crate::storage::csv::{CsvConnection, ExpenseRepository};
use crate::storage::ExpenseStorage;

const MAX_NOTES_LENGTH: usize = 256;

/// Service for managing the shared expense log
#[derive(Clone)]
pub struct ExpenseService {
    expense_repository: ExpenseRepository,
}

impl ExpenseService {
    pub fn new(connection: Arc<CsvConnection>) -> Self {
        let expense_repository = ExpenseRepository::new((*connection).clone());
        Self { expense_repository }
    }

    /// Validate and store a new expense
    pub async fn create_expense(&self, request: CreateExpenseRequest) -> Result<DomainExpense> {
        info!("Creating expense: {:?}", request);

        if request.amount <= 0.0 {
            return Err(ExpenseValidationError::NonPositiveAmount.into());
        }

        let notes = request
            .notes
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());

        if let Some(ref notes) = notes {
            if notes.len() > MAX_NOTES_LENGTH {
                return Err(ExpenseValidationError::NotesTooLong.into());
            }
        }

        let date = NaiveDate::parse_from_str(&request.date, "%Y-%m-%d")
            .map_err(|e| ExpenseValidationError::InvalidDate(e.to_string()))?;

        let now_millis = SystemTime::now().duration_since(UNIX_EPOCH)?.as_millis() as u64;

        let expense = DomainExpense {
            id: DomainExpense::generate_id(now_millis),
            amount: request.amount,
            category: request.category,
            date,
            paid_by: request.paid_by,
            notes,
            created_at: Utc::now().to_rfc3339(),
        };

        self.expense_repository.store_expense(&expense).await?;

        info!("Successfully created expense: {}", expense.id);
        Ok(expense)
    }

    /// List expenses, most recent first, optionally narrowed to a year and/or
    /// month
    pub async fn list_expenses(
        &self,
        year: Option<i32>,
        month: Option<u32>,
    ) -> Result<Vec<DomainExpense>> {
        let expenses = self.expense_repository.list_expenses().await?;

        let filtered = expenses
            .into_iter()
            .filter(|e| year.map_or(true, |y| e.date.year() == y))
            .filter(|e| month.map_or(true, |m| e.date.month() == m))
            .collect();

        Ok(filtered)
    }

    /// Delete an expense by id
    pub async fn delete_expense(&self, expense_id: &str) -> Result<()> {
        info!("Deleting expense: {}", expense_id);

        let deleted = self.expense_repository.delete_expense(expense_id).await?;
        if !deleted {
            return Err(anyhow::anyhow!("Expense not found: {}", expense_id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{ExpenseCategory, Profile};
    use tempfile::TempDir;

    fn setup_test_service() -> (ExpenseService, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let connection =
            Arc::new(CsvConnection::new(temp_dir.path()).expect("Failed to create connection"));
        (ExpenseService::new(connection), temp_dir)
    }

    fn request(amount: f64, date: &str, paid_by: Profile) -> CreateExpenseRequest {
        CreateExpenseRequest {
            amount,
            category: ExpenseCategory::Dining,
            date: date.to_string(),
            paid_by,
            notes: None,
        }
    }

    #[tokio::test]
    async fn test_create_expense() {
        let (service, _temp_dir) = setup_test_service();

        let expense = service
            .create_expense(request(85.5, "2025-03-10", Profile::Hasnaa))
            .await
            .expect("Failed to create expense");

        assert!(expense.id.starts_with("expense::"));
        assert_eq!(expense.amount, 85.5);
        assert_eq!(expense.paid_by, Profile::Hasnaa);

        let listed = service.list_expenses(None, None).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0], expense);
    }

    #[tokio::test]
    async fn test_create_expense_rejects_non_positive_amount() {
        let (service, _temp_dir) = setup_test_service();

        let result = service
            .create_expense(request(0.0, "2025-03-10", Profile::Hasnaa))
            .await;
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("must be positive"));

        let result = service
            .create_expense(request(-10.0, "2025-03-10", Profile::Hasnaa))
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_create_expense_rejects_bad_date() {
        let (service, _temp_dir) = setup_test_service();

        let result = service
            .create_expense(request(10.0, "10/03/2025", Profile::Hasnaa))
            .await;

        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Invalid expense date"));
    }

    #[tokio::test]
    async fn test_create_expense_rejects_oversized_notes() {
        let (service, _temp_dir) = setup_test_service();

        let mut req = request(10.0, "2025-03-10", Profile::Hasnaa);
        req.notes = Some("x".repeat(257));

        let result = service.create_expense(req).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_blank_notes_are_dropped() {
        let (service, _temp_dir) = setup_test_service();

        let mut req = request(10.0, "2025-03-10", Profile::Hasnaa);
        req.notes = Some("   ".to_string());

        let expense = service.create_expense(req).await.unwrap();
        assert_eq!(expense.notes, None);
    }

    #[tokio::test]
    async fn test_list_filters_by_year_and_month() {
        let (service, _temp_dir) = setup_test_service();

        service
            .create_expense(request(10.0, "2024-12-20", Profile::Hasnaa))
            .await
            .unwrap();
        service
            .create_expense(request(20.0, "2025-01-05", Profile::Achraf))
            .await
            .unwrap();
        service
            .create_expense(request(30.0, "2025-03-15", Profile::Hasnaa))
            .await
            .unwrap();

        let in_2025 = service.list_expenses(Some(2025), None).await.unwrap();
        assert_eq!(in_2025.len(), 2);

        let in_jan_2025 = service.list_expenses(Some(2025), Some(1)).await.unwrap();
        assert_eq!(in_jan_2025.len(), 1);
        assert_eq!(in_jan_2025[0].amount, 20.0);
    }

    #[tokio::test]
    async fn test_delete_unknown_expense_fails() {
        let (service, _temp_dir) = setup_test_service();

        let result = service.delete_expense("expense::missing").await;

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not found"));
    }
}
