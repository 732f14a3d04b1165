//! Pocketwise Core Library
//!
//! Shared functionality for the Pocketwise personal finance tracker:
//! - Monthly financial statistics (income, expenses, balance, savings rate)
//! - Rule-based saving suggestions
//! - Chart-ready reports (monthly trends, category breakdown, daily overview,
//!   month-over-month comparison)
//! - Ledger files and CSV transaction import
//! - Title-based category suggestion
//! - Currency and percentage formatting

pub mod categories;
pub mod config;
pub mod error;
pub mod format;
pub mod import;
pub mod ledger;
pub mod models;
pub mod period;
pub mod reports;
pub mod stats;
pub mod suggestions;

/// Test utilities (transaction builders and a fixed reference instant)
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use categories::CategorySuggester;
pub use config::{Config, FormatConfig, ImportConfig, ReportConfig, SuggestionConfig};
pub use error::{Error, Result};
pub use format::{format_currency, format_percent, CurrencyOptions, Notation};
pub use import::{parse_csv, ImportOptions};
pub use ledger::Ledger;
pub use models::{
    CategorySpending, DailyTotals, FinancialStats, FixedExpense, MonthComparison, MonthTotals,
    Transaction, TransactionType, TrendDataPoint, TrendsReport,
};
pub use period::CalendarMonth;
pub use reports::{
    category_breakdown, current_month_breakdown, daily_overview, month_comparison, monthly_trends,
};
pub use stats::{calculate_financial_stats, SavingsHealth, StatsIndicators};
pub use suggestions::{saving_suggestions, Priority, RuleKind, SavingSuggestion, SuggestionEngine};
