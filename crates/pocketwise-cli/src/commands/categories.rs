//! Category suggestion command

use anyhow::{Context, Result};
use pocketwise_core::CategorySuggester;
use serde_json::json;

use super::print_json;

pub fn cmd_categorize(title: &str, json: bool) -> Result<()> {
    let suggester = CategorySuggester::new().context("Failed to build category rules")?;
    let category = suggester.suggest(title);

    if json {
        return print_json(&json!({ "title": title, "category": category }));
    }

    match category {
        Some(category) => println!("🏷️  {} → {}", title, category),
        None => println!("No category matches \"{}\"", title),
    }

    Ok(())
}
