use shared::Expense;

use crate::domain::models::expense::DomainExpense;

pub struct ExpenseMapper;

impl ExpenseMapper {
    /// Convert a domain expense to its wire DTO
    pub fn to_dto(domain: DomainExpense) -> Expense {
        Expense {
            id: domain.id,
            amount: domain.amount,
            category: domain.category,
            date: domain.date.format("%Y-%m-%d").to_string(),
            paid_by: domain.paid_by,
            notes: domain.notes,
            created_at: domain.created_at,
        }
    }

    pub fn to_dto_list(domain_expenses: Vec<DomainExpense>) -> Vec<Expense> {
        domain_expenses.into_iter().map(Self::to_dto).collect()
    }

    /// Currency rendering used in messages and response fields
    pub fn format_amount(amount: f64) -> String {
        format!("{:.2} MAD", amount)
    }
}
