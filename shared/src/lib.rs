use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the two fixed household members an expense can be paid by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Profile {
    Hasnaa,
    Achraf,
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Profile::Hasnaa => write!(f, "Hasnaa"),
            Profile::Achraf => write!(f, "Achraf"),
        }
    }
}

impl FromStr for Profile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Hasnaa" => Ok(Profile::Hasnaa),
            "Achraf" => Ok(Profile::Achraf),
            other => Err(format!("Unknown profile: {}", other)),
        }
    }
}

/// Fixed set of expense categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpenseCategory {
    Rent,
    Utilities,
    Groceries,
    Dining,
    Transportation,
    Entertainment,
    Health,
    Shopping,
    Other,
}

impl ExpenseCategory {
    /// All categories, in display order.
    pub const ALL: [ExpenseCategory; 9] = [
        ExpenseCategory::Rent,
        ExpenseCategory::Utilities,
        ExpenseCategory::Groceries,
        ExpenseCategory::Dining,
        ExpenseCategory::Transportation,
        ExpenseCategory::Entertainment,
        ExpenseCategory::Health,
        ExpenseCategory::Shopping,
        ExpenseCategory::Other,
    ];
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExpenseCategory::Rent => "Rent",
            ExpenseCategory::Utilities => "Utilities",
            ExpenseCategory::Groceries => "Groceries",
            ExpenseCategory::Dining => "Dining",
            ExpenseCategory::Transportation => "Transportation",
            ExpenseCategory::Entertainment => "Entertainment",
            ExpenseCategory::Health => "Health",
            ExpenseCategory::Shopping => "Shopping",
            ExpenseCategory::Other => "Other",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for ExpenseCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Rent" => Ok(ExpenseCategory::Rent),
            "Utilities" => Ok(ExpenseCategory::Utilities),
            "Groceries" => Ok(ExpenseCategory::Groceries),
            "Dining" => Ok(ExpenseCategory::Dining),
            "Transportation" => Ok(ExpenseCategory::Transportation),
            "Entertainment" => Ok(ExpenseCategory::Entertainment),
            "Health" => Ok(ExpenseCategory::Health),
            "Shopping" => Ok(ExpenseCategory::Shopping),
            "Other" => Ok(ExpenseCategory::Other),
            other => Err(format!("Unknown expense category: {}", other)),
        }
    }
}

/// Goal classification on the importance/urgency matrix, used for display
/// grouping only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GoalPriority {
    #[serde(rename = "Important-Urgent")]
    ImportantUrgent,
    #[serde(rename = "Important-NotUrgent")]
    ImportantNotUrgent,
    #[serde(rename = "NotImportant-Urgent")]
    NotImportantUrgent,
    #[serde(rename = "NotImportant-NotUrgent")]
    NotImportantNotUrgent,
}

impl fmt::Display for GoalPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GoalPriority::ImportantUrgent => "Important-Urgent",
            GoalPriority::ImportantNotUrgent => "Important-NotUrgent",
            GoalPriority::NotImportantUrgent => "NotImportant-Urgent",
            GoalPriority::NotImportantNotUrgent => "NotImportant-NotUrgent",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for GoalPriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Important-Urgent" => Ok(GoalPriority::ImportantUrgent),
            "Important-NotUrgent" => Ok(GoalPriority::ImportantNotUrgent),
            "NotImportant-Urgent" => Ok(GoalPriority::NotImportantUrgent),
            "NotImportant-NotUrgent" => Ok(GoalPriority::NotImportantNotUrgent),
            other => Err(format!("Unknown goal priority: {}", other)),
        }
    }
}

/// Expense ID in format: "expense::<epoch_millis>"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: String,
    /// Amount paid, in MAD
    pub amount: f64,
    pub category: ExpenseCategory,
    /// Calendar date the expense occurred (YYYY-MM-DD)
    pub date: String,
    pub paid_by: Profile,
    /// Optional free-text annotation (max 256 characters)
    pub notes: Option<String>,
    /// Creation timestamp (RFC 3339)
    pub created_at: String,
}

/// Settlement summary derived from the full expense collection.
///
/// Never persisted; recomputed whenever the expense list changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    pub hasnaa_paid: f64,
    pub achraf_paid: f64,
    /// `hasnaa_paid - achraf_paid`
    pub difference: f64,
    /// Who owes the other, `None` when even
    pub who_owes: Option<Profile>,
    /// Transfer needed to settle, always non-negative
    pub amount: f64,
}

/// Goal ID in format: "goal::<epoch_millis>"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    pub name: String,
    pub target_amount: f64,
    pub saved_amount: f64,
    /// Target date (YYYY-MM-DD)
    pub deadline: String,
    pub priority: GoalPriority,
    pub created_at: String,
    pub updated_at: String,
}

/// Feasibility projection for a single goal against today's date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalProjection {
    /// Rounded percentage of the target already saved
    pub progress_percent: u32,
    /// Whole 30-day months until the deadline, floored at one
    pub months_left: i64,
    /// Amount to save per remaining month; zero or negative once the goal is met
    pub monthly_needed: f64,
}

/// A goal paired with its current projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalWithProjection {
    pub goal: Goal,
    pub projection: GoalProjection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateExpenseRequest {
    pub amount: f64,
    pub category: ExpenseCategory,
    /// Calendar date (YYYY-MM-DD)
    pub date: String,
    pub paid_by: Profile,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateExpenseResponse {
    pub expense: Expense,
    /// Balance recomputed over the updated collection
    pub balance: Balance,
    pub formatted_amount: String,
    pub success_message: String,
}

/// Optional year/month filter for expense listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseListRequest {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseListResponse {
    pub expenses: Vec<Expense>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteExpenseResponse {
    /// Balance recomputed over the updated collection
    pub balance: Balance,
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceResponse {
    pub balance: Balance,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateGoalRequest {
    pub name: String,
    pub target_amount: f64,
    /// Starting progress, defaults to zero
    pub saved_amount: Option<f64>,
    /// Target date (YYYY-MM-DD)
    pub deadline: String,
    pub priority: GoalPriority,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateGoalResponse {
    pub goal: Goal,
    pub projection: GoalProjection,
    pub success_message: String,
}

/// Partial update; omitted fields keep their current value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateGoalRequest {
    pub name: Option<String>,
    pub target_amount: Option<f64>,
    pub saved_amount: Option<f64>,
    pub deadline: Option<String>,
    pub priority: Option<GoalPriority>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateGoalResponse {
    pub goal: Goal,
    pub projection: GoalProjection,
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteGoalResponse {
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalListResponse {
    pub goals: Vec<GoalWithProjection>,
}

/// One month's per-profile spending, for the yearly report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyBreakdown {
    /// Abbreviated month name ("Jan" .. "Dec")
    pub month: String,
    pub hasnaa: f64,
    pub achraf: f64,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub category: ExpenseCategory,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyReportRequest {
    pub year: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyReportResponse {
    pub year: i32,
    /// Always twelve entries, January through December
    pub months: Vec<MonthlyBreakdown>,
    /// Categories with at least one expense in the year
    pub categories: Vec<CategoryBreakdown>,
    /// Years that contain expenses, most recent first
    pub available_years: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySummaryResponse {
    pub year: i32,
    pub month: u32,
    pub total_spent: f64,
    pub hasnaa_spent: f64,
    pub achraf_spent: f64,
    /// The five most recent expenses
    pub recent_expenses: Vec<Expense>,
}

/// Display names for the two fixed profiles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSettings {
    pub hasnaa_display_name: String,
    pub achraf_display_name: String,
}

impl Default for ProfileSettings {
    fn default() -> Self {
        Self {
            hasnaa_display_name: "Hasnaa".to_string(),
            achraf_display_name: "Achraf".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetProfileSettingsResponse {
    pub settings: ProfileSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateProfileSettingsRequest {
    pub hasnaa_display_name: Option<String>,
    pub achraf_display_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateProfileSettingsResponse {
    pub settings: ProfileSettings,
    pub success_message: String,
}

/// Full data export: everything needed to rebuild both collections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportBundle {
    /// Export timestamp (RFC 3339)
    pub exported_at: String,
    pub expenses: Vec<Expense>,
    pub goals: Vec<Goal>,
}
