//! Test utilities: transaction builders pinned to a fixed reference instant

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, TimeZone, Utc};

use crate::models::{FixedExpense, Transaction, TransactionType};

static COUNTER: AtomicU64 = AtomicU64::new(0);

fn next_id(prefix: &str) -> String {
    format!("{}_{}", prefix, COUNTER.fetch_add(1, Ordering::SeqCst))
}

/// 2024-03-15 12:00 UTC, the "now" used throughout the tests
pub fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap()
}

/// A timestamp in the month before [`reference_now`]
pub fn last_month() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 2, 20, 9, 30, 0).unwrap()
}

/// A timestamp `months` calendar months before [`reference_now`], on the 10th
pub fn months_ago(months: u32) -> DateTime<Utc> {
    let total = 2024 * 12 + 2 - months as i32;
    Utc.with_ymd_and_hms(total / 12, (total % 12) as u32 + 1, 10, 8, 0, 0)
        .unwrap()
}

pub fn income(title: &str, amount: f64, at: DateTime<Utc>) -> Transaction {
    Transaction::new(next_id("tx"), title, amount, TransactionType::Income, at).with_user("user-1")
}

pub fn expense(title: &str, amount: f64, at: DateTime<Utc>) -> Transaction {
    Transaction::new(next_id("tx"), title, amount, TransactionType::Expense, at)
        .with_user("user-1")
}

pub fn fixed(title: &str, amount: f64) -> FixedExpense {
    FixedExpense::new(next_id("fx"), title, amount, last_month())
}
