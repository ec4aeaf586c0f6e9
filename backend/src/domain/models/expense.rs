use chrono::NaiveDate;
use shared::{ExpenseCategory, Profile};

/// A single logged payment. Immutable after creation; removed only by
/// explicit deletion.
#[derive(Debug, Clone, PartialEq)]
pub struct DomainExpense {
    pub id: String,
    pub amount: f64,
    pub category: ExpenseCategory,
    pub date: NaiveDate,
    pub paid_by: Profile,
    pub notes: Option<String>,
    pub created_at: String,
}

impl DomainExpense {
    pub fn generate_id(now_millis: u64) -> String {
        format!("expense::{}", now_millis)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExpenseValidationError {
    #[error("Expense amount must be positive")]
    NonPositiveAmount,
    #[error("Notes cannot exceed 256 characters")]
    NotesTooLong,
    #[error("Invalid expense date: {0}")]
    InvalidDate(String),
}
