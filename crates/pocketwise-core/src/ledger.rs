//! Ledger files: the transactions, fixed expenses and declared income of one user
//!
//! The ledger is the boundary where input is validated. The calculators
//! downstream assume positive amounts and never re-check them.

use std::fs;
use std::io::Read;
use std::path::Path;

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::models::{FinancialStats, FixedExpense, Transaction, TransactionType};
use crate::stats::calculate_financial_stats;
use crate::suggestions::{SavingSuggestion, SuggestionEngine};

/// Everything the calculators need for one user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ledger {
    /// Declared monthly income from the user profile
    #[serde(default)]
    pub monthly_income: f64,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub fixed_expenses: Vec<FixedExpense>,
}

impl Ledger {
    /// Read and validate a ledger JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let file = fs::File::open(path)?;
        let ledger = Self::from_reader(file)?;
        info!(
            path = %path.display(),
            transactions = ledger.transactions.len(),
            fixed_expenses = ledger.fixed_expenses.len(),
            "Loaded ledger"
        );
        Ok(ledger)
    }

    /// Parse and validate a ledger from any JSON source
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let ledger: Ledger = serde_json::from_reader(reader)?;
        ledger.validate()?;
        Ok(ledger)
    }

    /// Write the ledger as pretty-printed JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Reject records the calculators cannot take literally
    pub fn validate(&self) -> Result<()> {
        if !self.monthly_income.is_finite() || self.monthly_income < 0.0 {
            return Err(Error::InvalidData(format!(
                "monthlyIncome must be zero or positive, got {}",
                self.monthly_income
            )));
        }

        for tx in &self.transactions {
            if !is_positive_amount(tx.amount) {
                warn!(id = %tx.id, amount = tx.amount, "Rejected transaction amount");
                return Err(Error::InvalidData(format!(
                    "transaction {} has non-positive amount {}",
                    tx.id, tx.amount
                )));
            }
        }

        for fixed in &self.fixed_expenses {
            if !is_positive_amount(fixed.amount) {
                warn!(id = %fixed.id, amount = fixed.amount, "Rejected fixed expense amount");
                return Err(Error::InvalidData(format!(
                    "fixed expense {} has non-positive amount {}",
                    fixed.id, fixed.amount
                )));
            }
            if fixed.kind != TransactionType::Expense {
                return Err(Error::InvalidData(format!(
                    "fixed expense {} must have type expense, got {}",
                    fixed.id, fixed.kind
                )));
            }
        }

        Ok(())
    }

    /// Append transactions whose id is not already present
    ///
    /// Returns the number of transactions added.
    pub fn merge_transactions(&mut self, imported: Vec<Transaction>) -> usize {
        let mut added = 0;
        for tx in imported {
            if self.transactions.iter().any(|t| t.id == tx.id) {
                continue;
            }
            self.transactions.push(tx);
            added += 1;
        }
        added
    }

    /// Current month's statistics for this ledger
    pub fn stats<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> FinancialStats {
        calculate_financial_stats(
            &self.transactions,
            &self.fixed_expenses,
            self.monthly_income,
            now,
        )
    }

    /// Current month's saving suggestions for this ledger
    pub fn suggestions<Tz: TimeZone>(
        &self,
        engine: &SuggestionEngine,
        now: &DateTime<Tz>,
    ) -> Vec<SavingSuggestion> {
        engine.suggest(&self.transactions, &self.fixed_expenses, now)
    }
}

fn is_positive_amount(amount: f64) -> bool {
    amount.is_finite() && amount > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{expense, fixed, income, reference_now};

    const LEDGER_JSON: &str = r#"{
        "monthlyIncome": 3000,
        "transactions": [
            {"id": "t1", "title": "Salary", "amount": 3000, "type": "income",
             "userId": "u1", "createdAt": "2024-03-01T09:00:00Z"},
            {"id": "t2", "title": "Groceries", "amount": 1200, "type": "expense",
             "category": "food", "userId": "u1", "createdAt": "2024-03-03T18:00:00Z"}
        ],
        "fixedExpenses": [
            {"id": "f1", "title": "Rent", "amount": 800, "type": "expense",
             "userId": "u1", "createdAt": "2024-01-01T00:00:00Z"}
        ]
    }"#;

    #[test]
    fn test_from_reader_and_stats() {
        let ledger = Ledger::from_reader(LEDGER_JSON.as_bytes()).unwrap();
        assert_eq!(ledger.transactions.len(), 2);

        let stats = ledger.stats(&reference_now());
        assert_eq!(stats.balance, 1800.0);
        assert_eq!(stats.available_for_spending, 2200.0);
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let ledger = Ledger::from_reader(r#"{}"#.as_bytes()).unwrap();
        assert_eq!(ledger, Ledger::default());
    }

    #[test]
    fn test_validate_rejects_non_positive_amounts() {
        let now = reference_now();
        let ledger = Ledger {
            transactions: vec![expense("refund?", -5.0, now)],
            ..Ledger::default()
        };
        assert!(matches!(ledger.validate(), Err(Error::InvalidData(_))));

        let ledger = Ledger {
            fixed_expenses: vec![fixed("free", 0.0)],
            ..Ledger::default()
        };
        assert!(ledger.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_income_fixed_expense() {
        let mut rent = fixed("rent", 800.0);
        rent.kind = TransactionType::Income;
        let ledger = Ledger {
            fixed_expenses: vec![rent],
            ..Ledger::default()
        };
        let err = ledger.validate().unwrap_err();
        assert!(err.to_string().contains("must have type expense"));
    }

    #[test]
    fn test_validate_rejects_negative_monthly_income() {
        let ledger = Ledger {
            monthly_income: -1.0,
            ..Ledger::default()
        };
        assert!(ledger.validate().is_err());
    }

    #[test]
    fn test_merge_skips_known_ids() {
        let now = reference_now();
        let salary = income("salary", 100.0, now);
        let mut ledger = Ledger {
            transactions: vec![salary.clone()],
            ..Ledger::default()
        };

        let added = ledger.merge_transactions(vec![salary, expense("new", 5.0, now)]);
        assert_eq!(added, 1);
        assert_eq!(ledger.transactions.len(), 2);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.json");

        let original = Ledger::from_reader(LEDGER_JSON.as_bytes()).unwrap();
        original.save(&path).unwrap();

        let loaded = Ledger::load(&path).unwrap();
        assert_eq!(loaded, original);
    }

    #[test]
    fn test_suggestions_use_engine() {
        let ledger = Ledger::from_reader(LEDGER_JSON.as_bytes()).unwrap();
        let suggestions = ledger.suggestions(&SuggestionEngine::new(), &reference_now());
        // food is 100% of expenses; variable 1200 - 800 = 400 is not above half of 800
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].title, "High spending in food");
    }
}
