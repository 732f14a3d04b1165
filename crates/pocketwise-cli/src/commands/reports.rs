//! Report command implementations

use anyhow::Result;
use chrono::{DateTime, FixedOffset};
use pocketwise_core::format::{format_currency, format_percent, CurrencyOptions};
use pocketwise_core::{
    category_breakdown, current_month_breakdown, daily_overview, month_comparison,
    monthly_trends, Config, Ledger,
};

use super::{print_json, truncate};

pub fn cmd_report_trends(
    ledger: &Ledger,
    config: &Config,
    now: &DateTime<FixedOffset>,
    months: u32,
    json: bool,
) -> Result<()> {
    if months == 0 {
        anyhow::bail!("--months must be at least 1");
    }

    let report = monthly_trends(&ledger.transactions, now, months);

    if json {
        return print_json(&report);
    }

    println!();
    println!("📈 Trends (last {} months)", months);
    println!("   ─────────────────────────────────────────────────────────────");

    if report.is_empty() {
        println!("   No transactions in this period.");
        return Ok(());
    }

    let options = CurrencyOptions::with_currency(config.format.currency.clone());
    println!(
        "   {:<8} {:>14} {:>14} {:>14}",
        "Month", "Income", "Expenses", "Balance"
    );
    for point in &report.data {
        println!(
            "   {:<8} {:>14} {:>14} {:>14}",
            point.period,
            format_currency(point.income, &options),
            format_currency(point.expenses, &options),
            format_currency(point.balance, &options),
        );
    }
    println!();

    Ok(())
}

/// All-time breakdown, or only the month containing `month` when given
pub fn cmd_report_categories(
    ledger: &Ledger,
    config: &Config,
    month: Option<&DateTime<FixedOffset>>,
    json: bool,
) -> Result<()> {
    let label = &config.reports.uncategorized_label;
    let categories = match month {
        Some(now) => current_month_breakdown(&ledger.transactions, now, label),
        None => category_breakdown(&ledger.transactions, label),
    };

    if json {
        return print_json(&categories);
    }

    println!();
    match month {
        Some(now) => println!("🗂️  Spending by Category ({})", now.format("%B %Y")),
        None => println!("🗂️  Spending by Category"),
    }
    println!("   ─────────────────────────────────────────────────────────────");

    if categories.is_empty() {
        println!("   No expenses recorded.");
        return Ok(());
    }

    let options = CurrencyOptions::with_currency(config.format.currency.clone());
    for category in &categories {
        println!(
            "   {:<20} {:>14} {:>7}  ({} transactions)",
            truncate(&category.category, 20),
            format_currency(category.amount, &options),
            format_percent(category.percentage, 1),
            category.transaction_count,
        );
    }
    println!();

    Ok(())
}

pub fn cmd_report_compare(
    ledger: &Ledger,
    config: &Config,
    now: &DateTime<FixedOffset>,
    json: bool,
) -> Result<()> {
    let comparison = month_comparison(
        &ledger.transactions,
        now,
        &config.suggestions.default_category,
    );

    if json {
        return print_json(&comparison);
    }

    let options = CurrencyOptions::with_currency(config.format.currency.clone());

    println!();
    println!("📊 {} vs {}", comparison.current.period, comparison.previous.period);
    println!("   ─────────────────────────────────────────────────────────────");
    println!(
        "   Income:    {:>14}  (was {}, {})",
        format_currency(comparison.current.income, &options),
        format_currency(comparison.previous.income, &options),
        signed_percent(comparison.income_change_pct),
    );
    println!(
        "   Expenses:  {:>14}  (was {}, {})",
        format_currency(comparison.current.expenses, &options),
        format_currency(comparison.previous.expenses, &options),
        signed_percent(comparison.expenses_change_pct),
    );
    println!("   Balance:   {:>14}", format_currency(comparison.current.balance, &options));

    if !comparison.top_categories.is_empty() {
        println!();
        println!("   Top categories");
        for category in &comparison.top_categories {
            println!(
                "   {:<20} {:>14} {:>7}",
                truncate(&category.category, 20),
                format_currency(category.amount, &options),
                format_percent(category.percentage, 1),
            );
        }
    }
    println!();

    Ok(())
}

pub(crate) fn signed_percent(value: f64) -> String {
    let text = format_percent(value, 1);
    if value > 0.0 && text != "0%" {
        format!("+{}", text)
    } else {
        text
    }
}

pub fn cmd_report_daily(
    ledger: &Ledger,
    config: &Config,
    now: &DateTime<FixedOffset>,
    json: bool,
) -> Result<()> {
    let days = daily_overview(&ledger.transactions, now);

    if json {
        return print_json(&days);
    }

    println!();
    println!("📅 {} Day by Day", now.format("%B %Y"));
    println!("   ─────────────────────────────────────────────────────────────");

    let options = CurrencyOptions::with_currency(config.format.currency.clone()).compact();
    for day in days.iter().filter(|d| d.income > 0.0 || d.expense > 0.0) {
        println!(
            "   {:>2}  +{:<10} -{:<10}",
            day.day,
            format_currency(day.income, &options),
            format_currency(day.expense, &options),
        );
    }
    println!();

    Ok(())
}
