//! Spending reports: yearly per-month/per-category breakdowns and the
//! current-month summary shown on the dashboard.

use anyhow::Result;
use chrono::{Datelike, Local, NaiveDate};
use log::info;
use shared::{CategoryBreakdown, ExpenseCategory, MonthlyBreakdown, Profile, YearlyReportResponse};
use std::sync::Arc;

use crate::domain::models::expense::DomainExpense;
use crate::storage::csv::{CsvConnection, ExpenseRepository};
use crate::storage::ExpenseStorage;

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// How many recent expenses the dashboard summary carries
const RECENT_EXPENSES_LIMIT: usize = 5;

/// Current-month spending totals plus the latest expenses.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySummary {
    pub year: i32,
    pub month: u32,
    pub total_spent: f64,
    pub hasnaa_spent: f64,
    pub achraf_spent: f64,
    pub recent: Vec<DomainExpense>,
}

/// Service producing spending breakdowns from the expense log
#[derive(Clone)]
pub struct ReportService {
    expense_repository: ExpenseRepository,
}

impl ReportService {
    pub fn new(connection: Arc<CsvConnection>) -> Self {
        let expense_repository = ExpenseRepository::new((*connection).clone());
        Self { expense_repository }
    }

    /// Build the per-month and per-category breakdown for one year.
    ///
    /// Defaults to the current year when none is given.
    pub async fn yearly_report(&self, year: Option<i32>) -> Result<YearlyReportResponse> {
        let expenses = self.expense_repository.list_expenses().await?;
        let current_year = Local::now().year();

        let mut available_years: Vec<i32> = expenses.iter().map(|e| e.date.year()).collect();
        available_years.sort_unstable();
        available_years.dedup();
        available_years.reverse();
        if available_years.is_empty() {
            available_years.push(current_year);
        }

        let year = year.unwrap_or(current_year);
        info!("Building yearly report for {}", year);

        let in_year: Vec<&DomainExpense> =
            expenses.iter().filter(|e| e.date.year() == year).collect();

        let months = MONTH_NAMES
            .iter()
            .enumerate()
            .map(|(index, name)| {
                let month_number = index as u32 + 1;
                let mut hasnaa = 0.0;
                let mut achraf = 0.0;

                for expense in in_year.iter().filter(|e| e.date.month() == month_number) {
                    match expense.paid_by {
                        Profile::Hasnaa => hasnaa += expense.amount,
                        Profile::Achraf => achraf += expense.amount,
                    }
                }

                MonthlyBreakdown {
                    month: name.to_string(),
                    hasnaa,
                    achraf,
                    total: hasnaa + achraf,
                }
            })
            .collect();

        let categories = ExpenseCategory::ALL
            .iter()
            .filter_map(|&category| {
                let total: f64 = in_year
                    .iter()
                    .filter(|e| e.category == category)
                    .map(|e| e.amount)
                    .sum();

                if total > 0.0 {
                    Some(CategoryBreakdown { category, total })
                } else {
                    None
                }
            })
            .collect();

        Ok(YearlyReportResponse {
            year,
            months,
            categories,
            available_years,
        })
    }

    /// Spending totals for the current calendar month plus the most recent
    /// expenses overall
    pub async fn monthly_summary(&self) -> Result<MonthlySummary> {
        self.monthly_summary_as_of(Local::now().date_naive()).await
    }

    async fn monthly_summary_as_of(&self, today: NaiveDate) -> Result<MonthlySummary> {
        let expenses = self.expense_repository.list_expenses().await?;

        let mut hasnaa_spent = 0.0;
        let mut achraf_spent = 0.0;

        for expense in expenses
            .iter()
            .filter(|e| e.date.year() == today.year() && e.date.month() == today.month())
        {
            match expense.paid_by {
                Profile::Hasnaa => hasnaa_spent += expense.amount,
                Profile::Achraf => achraf_spent += expense.amount,
            }
        }

        // Already date-descending from the repository
        let recent = expenses
            .into_iter()
            .take(RECENT_EXPENSES_LIMIT)
            .collect();

        Ok(MonthlySummary {
            year: today.year(),
            month: today.month(),
            total_spent: hasnaa_spent + achraf_spent,
            hasnaa_spent,
            achraf_spent,
            recent,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (ReportService, ExpenseRepository, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let connection =
            Arc::new(CsvConnection::new(temp_dir.path()).expect("Failed to create connection"));
        let repo = ExpenseRepository::new((*connection).clone());
        (ReportService::new(connection), repo, temp_dir)
    }

    fn expense(
        id: &str,
        date: &str,
        amount: f64,
        category: ExpenseCategory,
        paid_by: Profile,
    ) -> DomainExpense {
        DomainExpense {
            id: id.to_string(),
            amount,
            category,
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            paid_by,
            notes: None,
            created_at: format!("{}T12:00:00Z", date),
        }
    }

    #[tokio::test]
    async fn test_yearly_report_sums_months_per_profile() {
        let (service, repo, _temp_dir) = setup();

        repo.store_expense(&expense(
            "expense::1",
            "2025-01-10",
            100.0,
            ExpenseCategory::Rent,
            Profile::Hasnaa,
        ))
        .await
        .unwrap();
        repo.store_expense(&expense(
            "expense::2",
            "2025-01-20",
            40.0,
            ExpenseCategory::Dining,
            Profile::Achraf,
        ))
        .await
        .unwrap();
        repo.store_expense(&expense(
            "expense::3",
            "2025-03-05",
            60.0,
            ExpenseCategory::Dining,
            Profile::Achraf,
        ))
        .await
        .unwrap();
        // Different year, must not appear
        repo.store_expense(&expense(
            "expense::4",
            "2024-01-15",
            999.0,
            ExpenseCategory::Other,
            Profile::Hasnaa,
        ))
        .await
        .unwrap();

        let report = service.yearly_report(Some(2025)).await.unwrap();

        assert_eq!(report.year, 2025);
        assert_eq!(report.months.len(), 12);

        let january = &report.months[0];
        assert_eq!(january.month, "Jan");
        assert_eq!(january.hasnaa, 100.0);
        assert_eq!(january.achraf, 40.0);
        assert_eq!(january.total, 140.0);

        let march = &report.months[2];
        assert_eq!(march.achraf, 60.0);

        assert_eq!(report.available_years, vec![2025, 2024]);
    }

    #[tokio::test]
    async fn test_yearly_report_skips_empty_categories() {
        let (service, repo, _temp_dir) = setup();

        repo.store_expense(&expense(
            "expense::1",
            "2025-02-01",
            80.0,
            ExpenseCategory::Groceries,
            Profile::Hasnaa,
        ))
        .await
        .unwrap();
        repo.store_expense(&expense(
            "expense::2",
            "2025-02-11",
            20.0,
            ExpenseCategory::Groceries,
            Profile::Achraf,
        ))
        .await
        .unwrap();

        let report = service.yearly_report(Some(2025)).await.unwrap();

        assert_eq!(report.categories.len(), 1);
        assert_eq!(report.categories[0].category, ExpenseCategory::Groceries);
        assert_eq!(report.categories[0].total, 100.0);
    }

    #[tokio::test]
    async fn test_empty_store_still_reports_twelve_months() {
        let (service, _repo, _temp_dir) = setup();

        let report = service.yearly_report(None).await.unwrap();

        assert_eq!(report.months.len(), 12);
        assert!(report.months.iter().all(|m| m.total == 0.0));
        assert!(report.categories.is_empty());
        assert_eq!(report.available_years.len(), 1);
    }

    #[tokio::test]
    async fn test_monthly_summary_totals_and_recent() {
        let (service, repo, _temp_dir) = setup();

        for (i, (date, amount, paid_by)) in [
            ("2025-06-01", 10.0, Profile::Hasnaa),
            ("2025-06-05", 20.0, Profile::Achraf),
            ("2025-06-10", 30.0, Profile::Hasnaa),
            ("2025-06-15", 40.0, Profile::Hasnaa),
            ("2025-06-20", 50.0, Profile::Achraf),
            ("2025-06-25", 60.0, Profile::Hasnaa),
            ("2025-05-20", 500.0, Profile::Achraf),
        ]
        .iter()
        .enumerate()
        {
            repo.store_expense(&expense(
                &format!("expense::{}", i),
                date,
                *amount,
                ExpenseCategory::Other,
                *paid_by,
            ))
            .await
            .unwrap();
        }

        let today = NaiveDate::from_ymd_opt(2025, 6, 28).unwrap();
        let summary = service.monthly_summary_as_of(today).await.unwrap();

        assert_eq!(summary.year, 2025);
        assert_eq!(summary.month, 6);
        assert_eq!(summary.hasnaa_spent, 140.0);
        assert_eq!(summary.achraf_spent, 70.0);
        assert_eq!(summary.total_spent, 210.0);

        // Five most recent overall, newest first
        assert_eq!(summary.recent.len(), 5);
        assert_eq!(summary.recent[0].amount, 60.0);
        assert_eq!(summary.recent[4].amount, 20.0);
    }
}
