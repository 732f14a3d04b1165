//! Monthly financial statistics
//!
//! Reduces the current month's transactions plus every fixed expense into a
//! [`FinancialStats`] snapshot. Fixed expenses are not month-filtered: they
//! recur every month, so the full list is this month's obligation.

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{FinancialStats, FixedExpense, Transaction, TransactionType};
use crate::period::current_month;

/// Savings rate (percentage points) at or above which habits count as good
pub const GOOD_SAVINGS_RATE: f64 = 20.0;

/// Compute the current month's snapshot
///
/// When the month has no income transactions yet, `monthly_income` (the
/// declared profile income) stands in so the ratios stay meaningful.
pub fn calculate_financial_stats<Tz: TimeZone>(
    transactions: &[Transaction],
    fixed_expenses: &[FixedExpense],
    monthly_income: f64,
    now: &DateTime<Tz>,
) -> FinancialStats {
    let this_month = current_month(transactions, now);

    let income = sum_of_kind(&this_month, TransactionType::Income);
    let expenses = sum_of_kind(&this_month, TransactionType::Expense);
    let fixed_expenses_total = fixed_total(fixed_expenses);

    let total_income = if income > 0.0 { income } else { monthly_income };
    let balance = total_income - expenses;
    let available_for_spending = total_income - fixed_expenses_total;
    let savings_rate = if total_income > 0.0 {
        (balance / total_income) * 100.0
    } else {
        0.0
    };

    debug!(
        transactions = this_month.len(),
        income,
        total_income,
        expenses,
        fixed_expenses_total,
        savings_rate,
        "Computed financial stats"
    );

    FinancialStats {
        balance,
        income: total_income,
        expenses,
        fixed_expenses_total,
        available_for_spending,
        savings_rate,
    }
}

/// Sum of every fixed expense
pub fn fixed_total(fixed_expenses: &[FixedExpense]) -> f64 {
    fixed_expenses.iter().map(|e| e.amount).sum()
}

fn sum_of_kind(transactions: &[&Transaction], kind: TransactionType) -> f64 {
    transactions
        .iter()
        .filter(|t| t.kind == kind)
        .map(|t| t.amount)
        .sum()
}

/// Whether the savings rate looks healthy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SavingsHealth {
    Good,
    CouldImprove,
}

impl SavingsHealth {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::CouldImprove => "could_improve",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Good => "Good saving habits",
            Self::CouldImprove => "Could improve",
        }
    }
}

impl std::fmt::Display for SavingsHealth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Dashboard comparisons derived from a [`FinancialStats`] snapshot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsIndicators {
    /// How far effective income exceeds the declared monthly income, in percent
    pub income_above_expected_pct: Option<f64>,
    /// How far expenses exceed the fixed expense total, in percent
    pub expenses_above_fixed_pct: Option<f64>,
    pub savings_health: SavingsHealth,
}

impl StatsIndicators {
    /// Ratios are only reported when their denominator is positive and the
    /// numerator actually exceeds it.
    pub fn from_stats(stats: &FinancialStats, monthly_income: f64) -> Self {
        let income_above_expected_pct = (monthly_income > 0.0 && stats.income > monthly_income)
            .then(|| (stats.income / monthly_income) * 100.0 - 100.0);

        let expenses_above_fixed_pct = (stats.fixed_expenses_total > 0.0
            && stats.expenses > stats.fixed_expenses_total)
            .then(|| (stats.expenses / stats.fixed_expenses_total) * 100.0 - 100.0);

        let savings_health = if stats.savings_rate >= GOOD_SAVINGS_RATE {
            SavingsHealth::Good
        } else {
            SavingsHealth::CouldImprove
        };

        Self {
            income_above_expected_pct,
            expenses_above_fixed_pct,
            savings_health,
        }
    }
}
