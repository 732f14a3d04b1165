//! Status-related command implementations (stats, suggest, dashboard)

use anyhow::Result;
use chrono::{DateTime, FixedOffset};
use pocketwise_core::format::{format_currency, format_percent, CurrencyOptions};
use pocketwise_core::{
    Config, FinancialStats, Ledger, Priority, SavingSuggestion, StatsIndicators, SuggestionEngine,
};
use serde_json::json;

use super::print_json;

fn currency(config: &Config) -> CurrencyOptions {
    CurrencyOptions::with_currency(config.format.currency.clone())
}

fn suggestions_for(
    ledger: &Ledger,
    config: &Config,
    now: &DateTime<FixedOffset>,
) -> Vec<SavingSuggestion> {
    let engine = SuggestionEngine::with_config(config.suggestions.clone());
    ledger.suggestions(&engine, now)
}

fn priority_icon(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "🔴",
        Priority::Medium => "🟡",
        Priority::Low => "🟢",
    }
}

fn print_stats(stats: &FinancialStats, options: &CurrencyOptions) {
    println!("  Income:           {}", format_currency(stats.income, options));
    println!("  Expenses:         {}", format_currency(stats.expenses, options));
    println!(
        "  Fixed expenses:   {}",
        format_currency(stats.fixed_expenses_total, options)
    );
    println!("  Balance:          {}", format_currency(stats.balance, options));
    println!(
        "  Available:        {}",
        format_currency(stats.available_for_spending, options)
    );
    println!("  Savings rate:     {}", format_percent(stats.savings_rate, 1));
}

fn print_suggestions(suggestions: &[SavingSuggestion]) {
    for suggestion in suggestions {
        println!(
            "   {} {} [{}]",
            priority_icon(suggestion.priority),
            suggestion.title,
            suggestion.priority
        );
        println!("      {}", suggestion.description);
    }
}

pub fn cmd_stats(
    ledger: &Ledger,
    config: &Config,
    now: &DateTime<FixedOffset>,
    json: bool,
) -> Result<()> {
    let stats = ledger.stats(now);

    if json {
        return print_json(&stats);
    }

    println!();
    println!("📊 {} Summary", now.format("%B %Y"));
    println!("   ─────────────────────────────");
    print_stats(&stats, &currency(config));
    println!();

    Ok(())
}

pub fn cmd_suggest(
    ledger: &Ledger,
    config: &Config,
    now: &DateTime<FixedOffset>,
    json: bool,
) -> Result<()> {
    let suggestions = suggestions_for(ledger, config, now);

    if json {
        return print_json(&suggestions);
    }

    println!();
    println!("💡 Saving Suggestions");
    println!("   ─────────────────────────────────────────────────────────────");
    print_suggestions(&suggestions);
    println!();

    Ok(())
}

pub fn cmd_dashboard(
    ledger: &Ledger,
    config: &Config,
    now: &DateTime<FixedOffset>,
    json: bool,
) -> Result<()> {
    let stats = ledger.stats(now);
    let indicators = StatsIndicators::from_stats(&stats, ledger.monthly_income);
    let suggestions = suggestions_for(ledger, config, now);

    if json {
        return print_json(&json!({
            "stats": stats,
            "indicators": indicators,
            "suggestions": suggestions,
        }));
    }

    let options = currency(config);

    println!();
    println!("╭─────────────────────────────────────────╮");
    println!("│         💰 Pocketwise Dashboard         │");
    println!("╰─────────────────────────────────────────╯");
    println!();
    print_stats(&stats, &options);
    println!();

    if let Some(pct) = indicators.income_above_expected_pct {
        println!("  📈 Income is {} above expected", format_percent(pct, 1));
    }
    if let Some(pct) = indicators.expenses_above_fixed_pct {
        println!("  💸 Expenses are {} above fixed costs", format_percent(pct, 1));
    }
    println!("  🏦 {}", indicators.savings_health.label());
    println!();

    println!("  💡 Suggestions");
    print_suggestions(&suggestions);
    println!();

    Ok(())
}
