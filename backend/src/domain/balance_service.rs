//! Settlement service: recomputes who owes whom from the stored expenses.
//!
//! The balance is derived state. It is never persisted; every call loads the
//! current expense collection and runs the calculation again.

use anyhow::Result;
use log::debug;
use shared::Balance;
use std::sync::Arc;

use crate::domain::balance::compute_balance;
use crate::storage::csv::{CsvConnection, ExpenseRepository};
use crate::storage::ExpenseStorage;

#[derive(Clone)]
pub struct BalanceService {
    expense_repository: ExpenseRepository,
}

impl BalanceService {
    pub fn new(connection: Arc<CsvConnection>) -> Self {
        let expense_repository = ExpenseRepository::new((*connection).clone());
        Self { expense_repository }
    }

    /// Recompute the settlement over the full expense collection
    pub async fn get_balance(&self) -> Result<Balance> {
        let expenses = self.expense_repository.list_expenses().await?;
        let balance = compute_balance(&expenses);

        debug!(
            "Computed balance over {} expenses: difference={:.2}",
            expenses.len(),
            balance.difference
        );

        Ok(balance)
    }
}
