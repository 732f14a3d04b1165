//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `core` - Shared utilities (open_ledger, load_config, resolve_now) and validate
//! - `status` - Stats, suggestions and dashboard commands
//! - `reports` - Report commands (trends, categories, compare, daily)
//! - `categories` - Category suggestion command
//! - `import` - CSV import command

pub mod categories;
pub mod core;
pub mod import;
pub mod reports;
pub mod status;

// Re-export command functions for main.rs
pub use categories::*;
pub use core::*;
pub use import::*;
pub use reports::*;
pub use status::*;

/// Truncate a string to a maximum length, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Pretty-print a value as JSON on stdout
pub fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
