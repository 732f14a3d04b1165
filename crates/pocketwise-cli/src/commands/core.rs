//! Core command implementations and shared utilities
//!
//! This module contains:
//! - `open_ledger` - Shared utility to load the ledger file
//! - `load_config` - Shared utility to resolve configuration
//! - `resolve_now` - Parse the `--now` reference instant
//! - `cmd_validate` - Check a ledger file

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset, Local};
use pocketwise_core::import::parse_timestamp;
use pocketwise_core::{Config, Ledger};
use tracing::debug;

/// Load and validate the ledger file
pub fn open_ledger(path: &Path) -> Result<Ledger> {
    Ledger::load(path).with_context(|| format!("Failed to open ledger: {}", path.display()))
}

/// Explicit config file, then the per-user override, then built-in defaults
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    Config::load(path).context("Failed to load config")
}

/// The reference instant, in its own UTC offset
///
/// Without `--now` the local clock is used, so "this month" follows the
/// machine's timezone.
pub fn resolve_now(now: Option<&str>) -> Result<DateTime<FixedOffset>> {
    let resolved = match now {
        Some(value) => {
            if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
                dt
            } else {
                parse_timestamp(value)
                    .map(|dt| dt.fixed_offset())
                    .ok_or_else(|| {
                        anyhow::anyhow!(
                            "Invalid --now value: {} (use YYYY-MM-DD or RFC 3339)",
                            value
                        )
                    })?
            }
        }
        None => Local::now().fixed_offset(),
    };
    debug!(now = %resolved, "Reference instant");
    Ok(resolved)
}

pub fn cmd_validate(ledger_path: &Path) -> Result<()> {
    let ledger = open_ledger(ledger_path)?;

    println!("✅ Ledger is valid: {}", ledger_path.display());
    println!("   Transactions:   {}", ledger.transactions.len());
    println!("   Fixed expenses: {}", ledger.fixed_expenses.len());

    Ok(())
}
