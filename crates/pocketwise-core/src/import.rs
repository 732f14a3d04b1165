//! CSV import of transactions
//!
//! Expected header (case-insensitive, any column order):
//! `date,title,amount,type,category,notes`
//!
//! `type` is optional: without it the amount's sign decides, negative meaning
//! expense. `category` and `notes` are optional too.

use std::collections::HashMap;
use std::io::Read;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use csv::{ReaderBuilder, StringRecord};
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::categories::CategorySuggester;
use crate::error::{Error, Result};
use crate::models::{Transaction, TransactionType};

/// Settings for a CSV import
#[derive(Default)]
pub struct ImportOptions<'a> {
    /// Owner recorded on every imported transaction
    pub user_id: String,
    /// Fills in missing categories from the title when set
    pub suggester: Option<&'a CategorySuggester>,
}

/// Column positions resolved from the header row
struct Columns {
    date: usize,
    title: usize,
    amount: usize,
    kind: Option<usize>,
    category: Option<usize>,
    notes: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
        };
        let require = |name: &str| {
            find(name).ok_or_else(|| Error::Import(format!("Missing column: {}", name)))
        };

        Ok(Self {
            date: require("date")?,
            title: require("title")?,
            amount: require("amount")?,
            kind: find("type"),
            category: find("category"),
            notes: find("notes"),
        })
    }
}

/// Parse CSV data into transactions
pub fn parse_csv<R: Read>(reader: R, options: &ImportOptions<'_>) -> Result<Vec<Transaction>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let columns = Columns::from_headers(rdr.headers()?)?;
    let mut transactions = Vec::new();
    // Rows with identical content seen so far, keyed by their base id
    let mut occurrences: HashMap<String, u32> = HashMap::new();

    for (index, result) in rdr.records().enumerate() {
        let record = result?;
        // Header is line 1
        let line = index + 2;

        let field = |i: usize| record.get(i).filter(|v| !v.is_empty());
        let optional = |i: Option<usize>| i.and_then(field).map(str::to_string);

        let date_str = field(columns.date)
            .ok_or_else(|| Error::Import(format!("Line {}: missing date", line)))?;
        let created_at = parse_timestamp(date_str).ok_or_else(|| {
            Error::Import(format!("Line {}: invalid date '{}'", line, date_str))
        })?;

        let title = field(columns.title)
            .ok_or_else(|| Error::Import(format!("Line {}: missing title", line)))?
            .to_string();

        let amount_str = field(columns.amount)
            .ok_or_else(|| Error::Import(format!("Line {}: missing amount", line)))?;
        let signed: f64 = amount_str
            .replace(['$', ','], "")
            .parse()
            .map_err(|_| {
                Error::Import(format!("Line {}: invalid amount '{}'", line, amount_str))
            })?;

        let kind = match columns.kind.and_then(field) {
            Some(k) => k
                .parse::<TransactionType>()
                .map_err(|e| Error::Import(format!("Line {}: {}", line, e)))?,
            None if signed < 0.0 => TransactionType::Expense,
            None => TransactionType::Income,
        };

        let amount = signed.abs();
        if amount == 0.0 {
            return Err(Error::Import(format!("Line {}: amount must not be zero", line)));
        }

        let category = optional(columns.category).or_else(|| {
            options
                .suggester
                .and_then(|s| s.suggest(&title))
                .map(str::to_string)
        });

        let base = generate_id(&created_at, &title, amount, kind, None);
        let seen = occurrences.entry(base.clone()).or_insert(0);
        let id = if *seen == 0 {
            base
        } else {
            generate_id(&created_at, &title, amount, kind, Some(*seen))
        };
        *seen += 1;

        let mut tx = Transaction::new(id, title, amount, kind, created_at)
            .with_user(options.user_id.clone());
        tx.category = category.map(|c| c.to_lowercase());
        if let Some(notes) = optional(columns.notes) {
            tx = tx.with_notes(notes);
        }

        transactions.push(tx);
    }

    debug!(count = transactions.len(), "Parsed CSV transactions");
    Ok(transactions)
}

/// Accepts RFC 3339, `YYYY-MM-DD` and `MM/DD/YYYY` (dates are taken as midnight UTC)
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    ["%Y-%m-%d", "%m/%d/%Y"]
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
}

/// Stable id so re-importing the same file adds nothing
///
/// `occurrence` counts earlier rows in the same file with identical content,
/// so two same-day purchases of the same thing stay two transactions.
fn generate_id(
    created_at: &DateTime<Utc>,
    title: &str,
    amount: f64,
    kind: TransactionType,
    occurrence: Option<u32>,
) -> String {
    let mut hasher = Sha256::new();
    hasher.update(created_at.to_rfc3339().as_bytes());
    hasher.update(title.as_bytes());
    hasher.update(amount.to_be_bytes());
    hasher.update(kind.as_str().as_bytes());
    if let Some(n) = occurrence {
        hasher.update(n.to_be_bytes());
    }
    hex::encode(hasher.finalize())
}
