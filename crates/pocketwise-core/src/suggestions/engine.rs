//! Suggestion Engine - runs the saving rules over one month of data

use std::collections::BTreeMap;

use chrono::{DateTime, TimeZone};

use crate::config::SuggestionConfig;
use crate::models::{FixedExpense, Transaction};
use crate::period::current_month;
use crate::stats::fixed_total;

use super::rules::{
    CategoryConcentrationRule, DiscretionarySpendingRule, SmallPurchasesRule,
    SubscriptionAuditRule,
};
use super::types::{CategoryShare, RuleKind, SavingSuggestion};

/// One month of spending, pre-aggregated for the rules
pub struct AnalysisContext<'a> {
    /// Current-month expense transactions, in input order
    pub expenses: Vec<&'a Transaction>,
    /// Current-month expense totals keyed by category
    pub expenses_by_category: BTreeMap<String, f64>,
    /// Sum of `expenses_by_category`
    pub total_expenses: f64,
    /// Sum of every fixed expense (not month-filtered)
    pub fixed_expenses_total: f64,
    pub config: &'a SuggestionConfig,
}

impl<'a> AnalysisContext<'a> {
    /// Build the context for the calendar month containing `now`
    pub fn current_month<Tz: TimeZone>(
        transactions: &'a [Transaction],
        fixed_expenses: &[FixedExpense],
        now: &DateTime<Tz>,
        config: &'a SuggestionConfig,
    ) -> Self {
        let expenses: Vec<&Transaction> = current_month(transactions, now)
            .into_iter()
            .filter(|t| t.is_expense())
            .collect();

        let expenses_by_category = expenses.iter().fold(BTreeMap::new(), |mut acc, t| {
            let category = t
                .category
                .clone()
                .unwrap_or_else(|| config.default_category.clone());
            *acc.entry(category).or_insert(0.0) += t.amount;
            acc
        });

        let total_expenses: f64 = expenses_by_category.values().sum();

        Self {
            expenses,
            expenses_by_category,
            total_expenses,
            fixed_expenses_total: fixed_total(fixed_expenses),
            config,
        }
    }

    /// Each category's share of total expenses
    ///
    /// Empty when there are no expenses, so no share is ever NaN.
    pub fn category_shares(&self) -> Vec<CategoryShare> {
        if self.total_expenses <= 0.0 {
            return Vec::new();
        }

        self.expenses_by_category
            .iter()
            .map(|(category, amount)| CategoryShare {
                category: category.clone(),
                amount: *amount,
                percentage: (amount / self.total_expenses) * 100.0,
            })
            .collect()
    }

    /// Total spent in `category` this month (0 when absent)
    pub fn category_total(&self, category: &str) -> f64 {
        self.expenses_by_category
            .get(category)
            .copied()
            .unwrap_or(0.0)
    }
}

/// A single saving heuristic
pub trait SuggestionRule: Send + Sync {
    /// Unique identifier for this rule
    fn id(&self) -> RuleKind;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Inspect the month and produce at most one suggestion
    fn evaluate(&self, ctx: &AnalysisContext<'_>) -> Option<SavingSuggestion>;
}

/// Runs registered rules in registration order
pub struct SuggestionEngine {
    rules: Vec<Box<dyn SuggestionRule>>,
    config: SuggestionConfig,
}

impl Default for SuggestionEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SuggestionEngine {
    /// Create an engine with the built-in rules and default thresholds
    pub fn new() -> Self {
        Self::with_config(SuggestionConfig::default())
    }

    /// Create an engine with the built-in rules and custom thresholds
    pub fn with_config(config: SuggestionConfig) -> Self {
        let mut engine = Self {
            rules: vec![],
            config,
        };

        // Registration order is output order
        engine.register(Box::new(CategoryConcentrationRule));
        engine.register(Box::new(DiscretionarySpendingRule));
        engine.register(Box::new(SmallPurchasesRule));
        engine.register(Box::new(SubscriptionAuditRule));

        engine
    }

    /// Register an additional rule (evaluated after the existing ones)
    pub fn register(&mut self, rule: Box<dyn SuggestionRule>) {
        self.rules.push(rule);
    }

    /// Evaluate every rule for the month containing `now`
    ///
    /// Never returns an empty list: when no rule fires, the generic
    /// "Track more transactions" suggestion is returned alone.
    pub fn suggest<Tz: TimeZone>(
        &self,
        transactions: &[Transaction],
        fixed_expenses: &[FixedExpense],
        now: &DateTime<Tz>,
    ) -> Vec<SavingSuggestion> {
        let ctx = AnalysisContext::current_month(transactions, fixed_expenses, now, &self.config);

        let mut suggestions: Vec<SavingSuggestion> = self
            .rules
            .iter()
            .filter_map(|rule| {
                let suggestion = rule.evaluate(&ctx);
                tracing::debug!(
                    rule = rule.id().as_str(),
                    name = rule.name(),
                    fired = suggestion.is_some(),
                    "Suggestion rule evaluated"
                );
                suggestion
            })
            .collect();

        if suggestions.is_empty() {
            suggestions.push(SavingSuggestion::track_more_transactions());
        }

        suggestions
    }

    /// Get list of registered rule kinds, in evaluation order
    pub fn rule_kinds(&self) -> Vec<RuleKind> {
        self.rules.iter().map(|r| r.id()).collect()
    }
}

/// Suggestions with the default thresholds
pub fn saving_suggestions<Tz: TimeZone>(
    transactions: &[Transaction],
    fixed_expenses: &[FixedExpense],
    now: &DateTime<Tz>,
) -> Vec<SavingSuggestion> {
    SuggestionEngine::new().suggest(transactions, fixed_expenses, now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suggestions::types::Priority;
    use crate::test_utils::{expense, fixed, income, last_month, reference_now};

    #[test]
    fn test_engine_registers_rules_in_order() {
        let engine = SuggestionEngine::new();
        assert_eq!(
            engine.rule_kinds(),
            vec![
                RuleKind::CategoryConcentration,
                RuleKind::DiscretionarySpending,
                RuleKind::SmallPurchases,
                RuleKind::SubscriptionAudit,
            ]
        );
    }

    #[test]
    fn test_empty_inputs_give_fallback_only() {
        let suggestions = saving_suggestions(&[], &[], &reference_now());
        assert_eq!(suggestions, vec![SavingSuggestion::track_more_transactions()]);
    }

    #[test]
    fn test_context_groups_uncategorized_into_default_bucket() {
        let now = reference_now();
        let config = SuggestionConfig::default();
        let transactions = vec![
            expense("snack", 5.0, now),
            expense("gift", 15.0, now),
            expense("lunch", 10.0, now).with_category("food"),
            income("salary", 1000.0, now),
            expense("old", 99.0, last_month()),
        ];

        let ctx = AnalysisContext::current_month(&transactions, &[], &now, &config);

        assert_eq!(ctx.expenses.len(), 3);
        assert_eq!(ctx.category_total("other"), 20.0);
        assert_eq!(ctx.category_total("food"), 10.0);
        assert_eq!(ctx.category_total("travel"), 0.0);
        assert_eq!(ctx.total_expenses, 30.0);
    }

    #[test]
    fn test_category_shares_empty_without_expenses() {
        let now = reference_now();
        let config = SuggestionConfig::default();
        let transactions = vec![income("salary", 1000.0, now)];

        let fixed_expenses = vec![fixed("rent", 500.0)];

        let ctx = AnalysisContext::current_month(&transactions, &fixed_expenses, &now, &config);

        assert!(ctx.category_shares().is_empty());
        assert_eq!(ctx.fixed_expenses_total, 500.0);
    }

    #[test]
    fn test_output_follows_rule_order_not_priority() {
        let now = reference_now();
        // subscriptions dominate (concentration, high) and exceed 100 (audit, low);
        // 16 small purchases (medium); fixed 100 with variable far above 50 (medium)
        let mut transactions: Vec<Transaction> = (0..16)
            .map(|i| expense(&format!("coffee {}", i), 5.0, now).with_category("food"))
            .collect();
        transactions.push(expense("streaming bundle", 400.0, now).with_category("subscriptions"));

        let suggestions = saving_suggestions(&transactions, &[fixed("phone", 100.0)], &now);

        let priorities: Vec<Priority> = suggestions.iter().map(|s| s.priority).collect();
        assert_eq!(
            priorities,
            vec![Priority::High, Priority::Medium, Priority::Medium, Priority::Low]
        );
        assert_eq!(suggestions[0].title, "High spending in subscriptions");
        assert_eq!(suggestions[3].title, "Subscription audit recommended");
    }

    #[test]
    fn test_repeated_calls_give_identical_output() {
        let now = reference_now();
        let mut transactions: Vec<Transaction> = (0..18)
            .map(|i| expense(&format!("snack {}", i), 3.5, now).with_category("food"))
            .collect();
        transactions.push(expense("concert", 600.0, now).with_category("entertainment"));
        transactions.push(expense("streaming", 120.0, now).with_category("subscriptions"));
        let fixed_expenses = vec![fixed("rent", 300.0)];

        let first = saving_suggestions(&transactions, &fixed_expenses, &now);
        let second = saving_suggestions(&transactions, &fixed_expenses, &now);

        assert!(first.len() > 1);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    struct AlwaysRule;

    impl SuggestionRule for AlwaysRule {
        fn id(&self) -> RuleKind {
            RuleKind::SmallPurchases
        }

        fn name(&self) -> &'static str {
            "Always"
        }

        fn evaluate(&self, _ctx: &AnalysisContext<'_>) -> Option<SavingSuggestion> {
            Some(SavingSuggestion::new("Always", "Fires every time", Priority::Low))
        }
    }

    #[test]
    fn test_registered_rule_suppresses_fallback() {
        let mut engine = SuggestionEngine::new();
        engine.register(Box::new(AlwaysRule));

        let suggestions = engine.suggest(&[], &[], &reference_now());
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].title, "Always");
    }
}
