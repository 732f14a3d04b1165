//! Import command implementation

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use pocketwise_core::{parse_csv, CategorySuggester, Config, ImportOptions, Ledger};
use tracing::info;

/// Merge a CSV file into the ledger, creating the ledger if it does not exist
///
/// Returns the number of new transactions.
pub fn cmd_import(
    ledger_path: &Path,
    file: &Path,
    config: &Config,
    dry_run: bool,
) -> Result<usize> {
    let csv_file =
        File::open(file).with_context(|| format!("Failed to open file: {}", file.display()))?;

    println!("📥 Importing {}...", file.display());

    let suggester = if config.import.auto_categorize {
        Some(CategorySuggester::new().context("Failed to build category rules")?)
    } else {
        None
    };
    let options = ImportOptions {
        suggester: suggester.as_ref(),
        ..ImportOptions::default()
    };
    let transactions = parse_csv(csv_file, &options)
        .with_context(|| format!("Failed to parse {}", file.display()))?;
    let found = transactions.len();

    println!("   Found {} transactions", found);

    let mut ledger = if ledger_path.exists() {
        super::open_ledger(ledger_path)?
    } else {
        info!(path = %ledger_path.display(), "Creating new ledger");
        Ledger::default()
    };

    let imported = ledger.merge_transactions(transactions);
    ledger.validate()?;

    if dry_run {
        println!("🔎 Dry run, ledger not written");
    } else {
        ledger
            .save(ledger_path)
            .with_context(|| format!("Failed to write ledger: {}", ledger_path.display()))?;
        println!("✅ Import complete!");
    }
    println!("   Imported: {}", imported);
    println!("   Skipped (duplicates): {}", found - imported);

    Ok(imported)
}
