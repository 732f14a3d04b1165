//! Chart-ready reports: monthly trends, category breakdown, daily overview
//! and month-over-month comparison

use std::collections::BTreeMap;

use chrono::{DateTime, TimeZone, Utc};

use crate::models::{
    CategorySpending, DailyTotals, MonthComparison, MonthTotals, Transaction, TransactionType,
    TrendDataPoint, TrendsReport,
};
use crate::period::CalendarMonth;

/// Categories listed in a [`MonthComparison`]
pub const TOP_CATEGORY_COUNT: usize = 3;

/// Income, expenses and balance for the `months` calendar months ending with
/// the month containing `now`, oldest first
pub fn monthly_trends<Tz: TimeZone>(
    transactions: &[Transaction],
    now: &DateTime<Tz>,
    months: u32,
) -> TrendsReport {
    let data = CalendarMonth::containing(now)
        .trailing(months)
        .into_iter()
        .map(|month| {
            let (income, expenses) = month
                .filter(transactions)
                .iter()
                .fold((0.0, 0.0), |(inc, exp), t| match t.kind {
                    TransactionType::Income => (inc + t.amount, exp),
                    TransactionType::Expense => (inc, exp + t.amount),
                });

            TrendDataPoint {
                label: month.label().to_string(),
                period: month.period(),
                income,
                expenses,
                balance: income - expenses,
            }
        })
        .collect();

    TrendsReport { months, data }
}

/// Expense totals per category, largest first
///
/// Expenses without a category are grouped under `default_label`. Ties are
/// ordered by category name.
pub fn category_breakdown(
    transactions: &[Transaction],
    default_label: &str,
) -> Vec<CategorySpending> {
    breakdown(transactions.iter(), default_label)
}

/// [`category_breakdown`] restricted to the month containing `now`
pub fn current_month_breakdown<Tz: TimeZone>(
    transactions: &[Transaction],
    now: &DateTime<Tz>,
    default_label: &str,
) -> Vec<CategorySpending> {
    let month = CalendarMonth::containing(now);
    breakdown(month.filter(transactions).into_iter(), default_label)
}

fn breakdown<'a>(
    transactions: impl Iterator<Item = &'a Transaction>,
    default_label: &str,
) -> Vec<CategorySpending> {
    let totals: BTreeMap<&str, (f64, usize)> = transactions
        .filter(|t| t.is_expense())
        .fold(BTreeMap::new(), |mut acc, t| {
            let category = t.category.as_deref().unwrap_or(default_label);
            let entry = acc.entry(category).or_insert((0.0, 0));
            entry.0 += t.amount;
            entry.1 += 1;
            acc
        });

    let total: f64 = totals.values().map(|(amount, _)| amount).sum();

    let mut categories: Vec<CategorySpending> = totals
        .into_iter()
        .map(|(category, (amount, count))| CategorySpending {
            category: category.to_string(),
            amount,
            percentage: if total > 0.0 {
                (amount / total) * 100.0
            } else {
                0.0
            },
            transaction_count: count,
        })
        .collect();

    // Stable sort keeps name order for equal amounts
    categories.sort_by(|a, b| {
        b.amount
            .partial_cmp(&a.amount)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    categories
}

/// Totals for the month containing `now` against the previous month
///
/// Uncategorized expenses count under `default_label` in the top categories.
pub fn month_comparison<Tz: TimeZone>(
    transactions: &[Transaction],
    now: &DateTime<Tz>,
    default_label: &str,
) -> MonthComparison {
    let month = CalendarMonth::containing(now);
    let current = month_totals(&month, transactions);
    let previous = month_totals(&month.previous(), transactions);

    let mut top_categories = current_month_breakdown(transactions, now, default_label);
    top_categories.truncate(TOP_CATEGORY_COUNT);

    MonthComparison {
        income_change_pct: percent_change(current.income, previous.income),
        expenses_change_pct: percent_change(current.expenses, previous.expenses),
        current,
        previous,
        top_categories,
    }
}

/// Change from `previous` to `current` in percent; 0 when `previous` is 0
pub fn percent_change(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        return 0.0;
    }
    ((current - previous) / previous) * 100.0
}

fn month_totals(month: &CalendarMonth, transactions: &[Transaction]) -> MonthTotals {
    let in_month = month.filter(transactions);
    let income: f64 = in_month
        .iter()
        .filter(|t| t.is_income())
        .map(|t| t.amount)
        .sum();
    let expenses: f64 = in_month
        .iter()
        .filter(|t| t.is_expense())
        .map(|t| t.amount)
        .sum();

    MonthTotals {
        period: month.period(),
        income,
        expenses,
        balance: income - expenses,
    }
}

/// Per-day totals for the current month, from day 1 through today
pub fn daily_overview<Tz: TimeZone>(
    transactions: &[Transaction],
    now: &DateTime<Tz>,
) -> Vec<DailyTotals> {
    let month = CalendarMonth::containing(now);
    let today = month.day_of(&now.with_timezone(&Utc));

    let mut days: Vec<DailyTotals> = (1..=month.days_in_month())
        .map(|day| DailyTotals {
            day,
            income: 0.0,
            expense: 0.0,
        })
        .collect();

    for t in month.filter(transactions) {
        let index = month.day_of(&t.created_at) as usize - 1;
        if let Some(slot) = days.get_mut(index) {
            match t.kind {
                TransactionType::Income => slot.income += t.amount,
                TransactionType::Expense => slot.expense += t.amount,
            }
        }
    }

    days.truncate(today as usize);
    days
}
