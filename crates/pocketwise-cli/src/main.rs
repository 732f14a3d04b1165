//! Pocketwise CLI - Monthly statistics and saving suggestions
//!
//! Usage:
//!   pocketwise stats                    Current month snapshot
//!   pocketwise suggest                  Saving suggestions
//!   pocketwise report trends            Monthly income/expense trend
//!   pocketwise import --file CSV        Merge transactions into the ledger

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    let config = commands::load_config(cli.config.as_deref())?;
    let now = commands::resolve_now(cli.now.as_deref())?;

    match cli.command {
        Commands::Stats => {
            let ledger = commands::open_ledger(&cli.ledger)?;
            commands::cmd_stats(&ledger, &config, &now, cli.json)
        }
        Commands::Suggest => {
            let ledger = commands::open_ledger(&cli.ledger)?;
            commands::cmd_suggest(&ledger, &config, &now, cli.json)
        }
        Commands::Dashboard => {
            let ledger = commands::open_ledger(&cli.ledger)?;
            commands::cmd_dashboard(&ledger, &config, &now, cli.json)
        }
        Commands::Report { report_type } => {
            let ledger = commands::open_ledger(&cli.ledger)?;
            match report_type {
                ReportType::Trends { months } => {
                    let months = months.unwrap_or(config.reports.trend_months);
                    commands::cmd_report_trends(&ledger, &config, &now, months, cli.json)
                }
                ReportType::Categories { month } => {
                    let scope = month.then_some(&now);
                    commands::cmd_report_categories(&ledger, &config, scope, cli.json)
                }
                ReportType::Compare => {
                    commands::cmd_report_compare(&ledger, &config, &now, cli.json)
                }
                ReportType::Daily => commands::cmd_report_daily(&ledger, &config, &now, cli.json),
            }
        }
        Commands::Categorize { title } => commands::cmd_categorize(&title, cli.json),
        Commands::Import { file, dry_run } => {
            commands::cmd_import(&cli.ledger, &file, &config, dry_run).map(|_| ())
        }
        Commands::Validate => commands::cmd_validate(&cli.ledger),
    }
}
