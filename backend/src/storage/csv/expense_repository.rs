//! # CSV Expense Repository
//!
//! File-based expense storage. All expenses live in a single `expenses.csv`
//! in the data directory. Inserts append; deletes rewrite the file through a
//! temp file and an atomic rename.

use anyhow::Result;
use async_trait::async_trait;
use csv::{Reader, Writer, WriterBuilder};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter};
use std::str::FromStr;

use super::connection::CsvConnection;
use crate::domain::models::expense::DomainExpense;
use crate::storage::traits::ExpenseStorage;

const EXPENSES_HEADER: &str = "id,amount,category,date,paid_by,notes,created_at\n";

/// CSV record structure for expenses
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ExpenseRecord {
    id: String,
    amount: f64,
    category: String,
    date: String,
    paid_by: String,
    notes: Option<String>,
    created_at: String,
}

impl From<DomainExpense> for ExpenseRecord {
    fn from(expense: DomainExpense) -> Self {
        ExpenseRecord {
            id: expense.id,
            amount: expense.amount,
            category: expense.category.to_string(),
            date: expense.date.format("%Y-%m-%d").to_string(),
            paid_by: expense.paid_by.to_string(),
            notes: expense.notes,
            created_at: expense.created_at,
        }
    }
}

impl TryFrom<ExpenseRecord> for DomainExpense {
    type Error = anyhow::Error;

    fn try_from(record: ExpenseRecord) -> Result<Self> {
        let category = shared::ExpenseCategory::from_str(&record.category)
            .map_err(|e| anyhow::anyhow!("Failed to parse expense category: {}", e))?;
        let paid_by = shared::Profile::from_str(&record.paid_by)
            .map_err(|e| anyhow::anyhow!("Failed to parse expense payer: {}", e))?;
        let date = chrono::NaiveDate::parse_from_str(&record.date, "%Y-%m-%d")
            .map_err(|e| anyhow::anyhow!("Failed to parse expense date: {}", e))?;

        // Empty notes fields round-trip as None
        let notes = record.notes.filter(|n| !n.is_empty());

        Ok(DomainExpense {
            id: record.id,
            amount: record.amount,
            category,
            date,
            paid_by,
            notes,
            created_at: record.created_at,
        })
    }
}

/// CSV-backed expense repository
#[derive(Clone)]
pub struct ExpenseRepository {
    connection: CsvConnection,
}

impl ExpenseRepository {
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }

    /// Create the expenses CSV file with its header when missing
    fn ensure_expenses_file_exists(&self) -> Result<()> {
        let file_path = self.connection.expenses_file_path();

        if !file_path.exists() {
            std::fs::write(&file_path, EXPENSES_HEADER)?;
            debug!("Created expenses CSV file: {:?}", file_path);
        }

        Ok(())
    }

    /// Read every parseable expense from the CSV file
    fn read_expenses(&self) -> Result<Vec<DomainExpense>> {
        self.ensure_expenses_file_exists()?;

        let file = File::open(self.connection.expenses_file_path())?;
        let mut csv_reader = Reader::from_reader(BufReader::new(file));

        let mut expenses = Vec::new();

        for result in csv_reader.deserialize::<ExpenseRecord>() {
            let record = match result {
                Ok(record) => record,
                Err(e) => {
                    warn!("Failed to read expense record: {}. Skipping.", e);
                    continue;
                }
            };

            match DomainExpense::try_from(record) {
                Ok(expense) => expenses.push(expense),
                Err(e) => {
                    warn!("Failed to parse expense record: {}. Skipping.", e);
                    continue;
                }
            }
        }

        Ok(expenses)
    }

    /// Write the full expense list, replacing the file atomically
    fn write_expenses(&self, expenses: &[DomainExpense]) -> Result<()> {
        let file_path = self.connection.expenses_file_path();
        let temp_file_path = file_path.with_extension("csv.tmp");

        {
            let temp_file = File::create(&temp_file_path)?;
            let mut csv_writer = Writer::from_writer(BufWriter::new(temp_file));

            for expense in expenses {
                let record = ExpenseRecord::from(expense.clone());
                csv_writer.serialize(record)?;
            }

            csv_writer.flush()?;
        }

        std::fs::rename(&temp_file_path, &file_path)?;

        debug!("Wrote {} expenses to {:?}", expenses.len(), file_path);
        Ok(())
    }

    /// Append a single expense without rewriting the file
    fn append_expense(&self, expense: &DomainExpense) -> Result<()> {
        self.ensure_expenses_file_exists()?;

        let file = OpenOptions::new()
            .append(true)
            .open(self.connection.expenses_file_path())?;

        let mut csv_writer = WriterBuilder::new().has_headers(false).from_writer(file);
        csv_writer.serialize(ExpenseRecord::from(expense.clone()))?;
        csv_writer.flush()?;

        Ok(())
    }
}

#[async_trait]
impl ExpenseStorage for ExpenseRepository {
    async fn store_expense(&self, expense: &DomainExpense) -> Result<()> {
        self.append_expense(expense)?;
        info!("Stored expense: {}", expense.id);
        Ok(())
    }

    async fn get_expense(&self, expense_id: &str) -> Result<Option<DomainExpense>> {
        let expenses = self.read_expenses()?;
        Ok(expenses.into_iter().find(|e| e.id == expense_id))
    }

    async fn list_expenses(&self) -> Result<Vec<DomainExpense>> {
        let mut expenses = self.read_expenses()?;

        // Most recent first; same-day entries fall back to creation time
        expenses.sort_by(|a, b| {
            b.date
                .cmp(&a.date)
                .then_with(|| b.created_at.cmp(&a.created_at))
        });

        Ok(expenses)
    }

    async fn delete_expense(&self, expense_id: &str) -> Result<bool> {
        let expenses = self.read_expenses()?;
        let original_len = expenses.len();

        let remaining: Vec<DomainExpense> = expenses
            .into_iter()
            .filter(|e| e.id != expense_id)
            .collect();

        if remaining.len() == original_len {
            return Ok(false);
        }

        self.write_expenses(&remaining)?;
        info!("Deleted expense: {}", expense_id);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::{ExpenseCategory, Profile};
    use tempfile::TempDir;

    fn setup_test_repo() -> (ExpenseRepository, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let connection = CsvConnection::new(temp_dir.path()).expect("Failed to create connection");
        (ExpenseRepository::new(connection), temp_dir)
    }

    fn expense(id: &str, date: &str, amount: f64, paid_by: Profile) -> DomainExpense {
        DomainExpense {
            id: id.to_string(),
            amount,
            category: ExpenseCategory::Groceries,
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            paid_by,
            notes: None,
            created_at: format!("{}T10:00:00Z", date),
        }
    }

    #[tokio::test]
    async fn test_store_and_get_expense() {
        let (repo, _temp_dir) = setup_test_repo();

        let mut stored = expense("expense::1", "2025-03-10", 120.0, Profile::Hasnaa);
        stored.notes = Some("weekly groceries, market".to_string());

        repo.store_expense(&stored).await.expect("Failed to store");

        let retrieved = repo
            .get_expense("expense::1")
            .await
            .expect("Failed to get expense")
            .expect("Expense should exist");

        assert_eq!(retrieved, stored);
    }

    #[tokio::test]
    async fn test_list_orders_by_date_descending() {
        let (repo, _temp_dir) = setup_test_repo();

        repo.store_expense(&expense("expense::1", "2025-01-05", 50.0, Profile::Hasnaa))
            .await
            .unwrap();
        repo.store_expense(&expense("expense::2", "2025-03-01", 75.0, Profile::Achraf))
            .await
            .unwrap();
        repo.store_expense(&expense("expense::3", "2025-02-14", 20.0, Profile::Hasnaa))
            .await
            .unwrap();

        let expenses = repo.list_expenses().await.unwrap();

        let ids: Vec<&str> = expenses.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["expense::2", "expense::3", "expense::1"]);
    }

    #[tokio::test]
    async fn test_delete_expense() {
        let (repo, _temp_dir) = setup_test_repo();

        repo.store_expense(&expense("expense::1", "2025-03-10", 120.0, Profile::Hasnaa))
            .await
            .unwrap();
        repo.store_expense(&expense("expense::2", "2025-03-11", 30.0, Profile::Achraf))
            .await
            .unwrap();

        let deleted = repo.delete_expense("expense::1").await.unwrap();
        assert!(deleted);

        let expenses = repo.list_expenses().await.unwrap();
        assert_eq!(expenses.len(), 1);
        assert_eq!(expenses[0].id, "expense::2");
    }

    #[tokio::test]
    async fn test_delete_unknown_expense_returns_false() {
        let (repo, _temp_dir) = setup_test_repo();

        let deleted = repo.delete_expense("expense::missing").await.unwrap();
        assert!(!deleted);
    }

    #[tokio::test]
    async fn test_empty_file_lists_nothing() {
        let (repo, _temp_dir) = setup_test_repo();

        let expenses = repo.list_expenses().await.unwrap();
        assert!(expenses.is_empty());
    }

    #[tokio::test]
    async fn test_notes_with_commas_round_trip() {
        let (repo, _temp_dir) = setup_test_repo();

        let mut stored = expense("expense::1", "2025-03-10", 45.0, Profile::Achraf);
        stored.notes = Some("taxi, airport, \"late night\"".to_string());

        repo.store_expense(&stored).await.unwrap();

        let retrieved = repo
            .get_expense("expense::1")
            .await
            .unwrap()
            .expect("Expense should exist");

        assert_eq!(retrieved.notes, stored.notes);
    }
}
