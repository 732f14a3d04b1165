//! Domain models for Pocketwise

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Direction of a money movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl std::str::FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(format!("Unknown transaction type: {}", s)),
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn expense_type() -> TransactionType {
    TransactionType::Expense
}

/// A recorded income or expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub title: String,
    /// Always positive; direction is carried by `kind`
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Transaction {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        amount: f64,
        kind: TransactionType,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            amount,
            kind,
            category: None,
            user_id: String::new(),
            created_at,
            notes: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }
}

/// A recurring monthly obligation (rent, insurance, ...)
///
/// Structurally close to [`Transaction`] but never mixed with it: fixed
/// expenses are assumed to recur every month and are summed as a whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedExpense {
    pub id: String,
    pub title: String,
    pub amount: f64,
    #[serde(rename = "type", default = "expense_type")]
    pub kind: TransactionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub user_id: String,
    pub created_at: DateTime<Utc>,
}

impl FixedExpense {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        amount: f64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            amount,
            kind: TransactionType::Expense,
            category: None,
            user_id: String::new(),
            created_at,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// Financial snapshot for the current month
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialStats {
    pub balance: f64,
    /// Effective income: transaction income, or declared monthly income when none
    pub income: f64,
    pub expenses: f64,
    pub fixed_expenses_total: f64,
    pub available_for_spending: f64,
    /// Percentage points; negative when spending exceeds income
    pub savings_rate: f64,
}

// ========== Report Models ==========

/// Income/expense totals for one calendar month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendDataPoint {
    /// Short month name (e.g. "Mar")
    pub label: String,
    /// `YYYY-MM`
    pub period: String,
    pub income: f64,
    pub expenses: f64,
    pub balance: f64,
}

/// Monthly income/expense trend ending with the reference month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendsReport {
    pub months: u32,
    pub data: Vec<TrendDataPoint>,
}

impl TrendsReport {
    /// True when no month in the window has any income or expense
    pub fn is_empty(&self) -> bool {
        self.data
            .iter()
            .all(|p| p.income == 0.0 && p.expenses == 0.0)
    }
}

/// Expense total for a single category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySpending {
    pub category: String,
    pub amount: f64,
    pub percentage: f64,
    pub transaction_count: usize,
}

/// Income and expense totals for one day of the month
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyTotals {
    pub day: u32,
    pub income: f64,
    pub expense: f64,
}

/// Transaction totals for one calendar month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthTotals {
    /// `YYYY-MM`
    pub period: String,
    pub income: f64,
    pub expenses: f64,
    pub balance: f64,
}

/// The current month against the one before it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthComparison {
    pub current: MonthTotals,
    pub previous: MonthTotals,
    /// Percent change in income; 0 when the previous month had none
    pub income_change_pct: f64,
    /// Percent change in expenses; 0 when the previous month had none
    pub expenses_change_pct: f64,
    /// Largest expense categories of the current month, at most three
    pub top_categories: Vec<CategorySpending>,
}
