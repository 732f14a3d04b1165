//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Pocketwise - Know where this month's money went
#[derive(Parser)]
#[command(name = "pocketwise")]
#[command(about = "Monthly statistics and saving suggestions for a personal ledger", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Ledger file (JSON)
    #[arg(long, default_value = "ledger.json", global = true)]
    pub ledger: PathBuf,

    /// Config file (defaults to the per-user override, then built-in defaults)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Reference instant (YYYY-MM-DD or RFC 3339); defaults to now
    ///
    /// The current month is evaluated in this instant's UTC offset.
    #[arg(long, global = true)]
    pub now: Option<String>,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show this month's income, expenses and savings rate
    Stats,

    /// Show saving suggestions for this month
    Suggest,

    /// Show stats, indicators and suggestions together
    Dashboard,

    /// Generate reports
    Report {
        #[command(subcommand)]
        report_type: ReportType,
    },

    /// Suggest a category for a transaction title
    Categorize {
        /// Transaction title, e.g. "Uber to airport"
        title: String,
    },

    /// Import transactions from CSV into the ledger
    Import {
        /// CSV file to import (date,title,amount[,type,category,notes])
        #[arg(short, long)]
        file: PathBuf,

        /// Parse and report without writing the ledger
        #[arg(long)]
        dry_run: bool,
    },

    /// Check the ledger for invalid records
    Validate,
}

#[derive(Subcommand)]
pub enum ReportType {
    /// Monthly income and expenses, oldest first
    Trends {
        /// Number of months (defaults to the configured window)
        #[arg(short, long)]
        months: Option<u32>,
    },

    /// Expense totals per category
    Categories {
        /// Only the current month (all time by default)
        #[arg(long)]
        month: bool,
    },

    /// Current month against the previous one, with the top categories
    Compare,

    /// Day-by-day totals for the current month
    Daily,
}
