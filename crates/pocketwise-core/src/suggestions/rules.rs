//! Built-in saving rules
//!
//! Each rule looks at one aspect of the month and emits at most one
//! suggestion:
//! - Category concentration (one category eats too much of the budget)
//! - Discretionary spending (variable vs fixed expenses)
//! - Small purchases (many low-value expenses)
//! - Subscription audit (subscriptions total too high)

use super::engine::{AnalysisContext, SuggestionRule};
use super::types::{CategoryShare, Priority, RuleKind, SavingSuggestion};

/// Flags the category with the largest share above the concentration threshold
pub struct CategoryConcentrationRule;

impl SuggestionRule for CategoryConcentrationRule {
    fn id(&self) -> RuleKind {
        RuleKind::CategoryConcentration
    }

    fn name(&self) -> &'static str {
        "Category Concentration"
    }

    fn evaluate(&self, ctx: &AnalysisContext<'_>) -> Option<SavingSuggestion> {
        let threshold = ctx.config.concentration_pct;

        // Ties keep the first category in key order
        let top = ctx
            .category_shares()
            .into_iter()
            .filter(|c| c.percentage > threshold)
            .fold(None::<CategoryShare>, |best, c| match best {
                Some(b) if b.percentage >= c.percentage => Some(b),
                _ => Some(c),
            })?;

        Some(SavingSuggestion::new(
            format!("High spending in {}", top.category),
            format!(
                "You're spending {:.0}% of your budget on {}. Consider setting a limit of \
                 {:.0}% to balance your expenses.",
                top.percentage.round(),
                top.category,
                ctx.config.target_pct
            ),
            Priority::High,
        ))
    }
}

/// Compares this month's variable spending with the recurring fixed total
pub struct DiscretionarySpendingRule;

impl SuggestionRule for DiscretionarySpendingRule {
    fn id(&self) -> RuleKind {
        RuleKind::DiscretionarySpending
    }

    fn name(&self) -> &'static str {
        "Discretionary Spending"
    }

    fn evaluate(&self, ctx: &AnalysisContext<'_>) -> Option<SavingSuggestion> {
        let fixed = ctx.fixed_expenses_total;
        if fixed <= 0.0 {
            return None;
        }

        let variable = ctx.total_expenses - fixed;
        if variable <= fixed * ctx.config.discretionary_ratio {
            return None;
        }

        Some(SavingSuggestion::new(
            "High discretionary spending",
            format!(
                "Your variable expenses are higher than {:.0}% of your fixed expenses. Consider \
                 tracking these expenses more carefully to identify savings opportunities.",
                ctx.config.discretionary_ratio * 100.0
            ),
            Priority::Medium,
        ))
    }
}

/// Counts expenses below the small purchase amount
pub struct SmallPurchasesRule;

impl SuggestionRule for SmallPurchasesRule {
    fn id(&self) -> RuleKind {
        RuleKind::SmallPurchases
    }

    fn name(&self) -> &'static str {
        "Small Purchases"
    }

    fn evaluate(&self, ctx: &AnalysisContext<'_>) -> Option<SavingSuggestion> {
        let count = ctx
            .expenses
            .iter()
            .filter(|t| t.amount < ctx.config.small_purchase_amount)
            .count();

        if count <= ctx.config.small_purchase_count {
            return None;
        }

        Some(SavingSuggestion::new(
            "Frequent small purchases",
            format!(
                "You made {} small purchases this month. These can add up quickly. Consider \
                 consolidating shopping trips or using a budget for discretionary spending.",
                count
            ),
            Priority::Medium,
        ))
    }
}

/// Suggests reviewing subscriptions when they cost too much
pub struct SubscriptionAuditRule;

/// Category key the audit looks at
pub const SUBSCRIPTIONS_CATEGORY: &str = "subscriptions";

impl SuggestionRule for SubscriptionAuditRule {
    fn id(&self) -> RuleKind {
        RuleKind::SubscriptionAudit
    }

    fn name(&self) -> &'static str {
        "Subscription Audit"
    }

    fn evaluate(&self, ctx: &AnalysisContext<'_>) -> Option<SavingSuggestion> {
        let limit = ctx.config.subscription_limit;
        if ctx.category_total(SUBSCRIPTIONS_CATEGORY) <= limit {
            return None;
        }

        Some(SavingSuggestion::new(
            "Subscription audit recommended",
            format!(
                "You're spending over ${:.0} on subscriptions. Consider reviewing your \
                 subscriptions to identify any you no longer use or could temporarily pause.",
                limit
            ),
            Priority::Low,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SuggestionConfig;
    use crate::models::Transaction;
    use crate::suggestions::engine::{saving_suggestions, SuggestionEngine};
    use crate::test_utils::{expense, fixed, reference_now};

    fn evaluate(
        rule: &dyn SuggestionRule,
        transactions: &[Transaction],
        fixed_total: f64,
    ) -> Option<SavingSuggestion> {
        let config = SuggestionConfig::default();
        let fixed_expenses = if fixed_total > 0.0 {
            vec![fixed("fixed", fixed_total)]
        } else {
            vec![]
        };
        let ctx = AnalysisContext::current_month(
            transactions,
            &fixed_expenses,
            &reference_now(),
            &config,
        );
        rule.evaluate(&ctx)
    }

    // ========== Category Concentration ==========

    #[test]
    fn test_concentration_picks_highest_share() {
        let now = reference_now();
        let transactions = vec![
            expense("rent share", 400.0, now).with_category("housing"),
            expense("groceries", 350.0, now).with_category("food"),
            expense("bus", 250.0, now).with_category("transportation"),
        ];

        let suggestion = evaluate(&CategoryConcentrationRule, &transactions, 0.0).unwrap();

        assert_eq!(suggestion.title, "High spending in housing");
        assert_eq!(suggestion.priority, Priority::High);
        assert_eq!(
            suggestion.description,
            "You're spending 40% of your budget on housing. Consider setting a limit of 25% \
             to balance your expenses."
        );
    }

    #[test]
    fn test_concentration_requires_strictly_more_than_threshold() {
        let now = reference_now();
        // Exactly 30% is not flagged; the rest are below
        let transactions = vec![
            expense("a", 30.0, now).with_category("food"),
            expense("b", 25.0, now).with_category("travel"),
            expense("c", 25.0, now).with_category("shopping"),
            expense("d", 20.0, now).with_category("gifts"),
        ];

        assert!(evaluate(&CategoryConcentrationRule, &transactions, 0.0).is_none());
    }

    #[test]
    fn test_concentration_tie_keeps_first_category() {
        let now = reference_now();
        let transactions = vec![
            expense("x", 50.0, now).with_category("travel"),
            expense("y", 50.0, now).with_category("food"),
        ];

        let suggestion = evaluate(&CategoryConcentrationRule, &transactions, 0.0).unwrap();
        assert_eq!(suggestion.title, "High spending in food");
    }

    #[test]
    fn test_concentration_uses_default_bucket() {
        let now = reference_now();
        let transactions = vec![expense("mystery", 80.0, now)];

        let suggestion = evaluate(&CategoryConcentrationRule, &transactions, 0.0).unwrap();
        assert_eq!(suggestion.title, "High spending in other");
        assert!(suggestion.description.contains("100%"));
    }

    #[test]
    fn test_concentration_silent_without_expenses() {
        assert!(evaluate(&CategoryConcentrationRule, &[], 0.0).is_none());
    }

    // ========== Discretionary Spending ==========

    #[test]
    fn test_discretionary_fires_above_half_of_fixed() {
        let now = reference_now();
        // variable = 1600 - 1000 = 600 > 500
        let transactions = vec![expense("stuff", 1600.0, now)];

        let suggestion = evaluate(&DiscretionarySpendingRule, &transactions, 1000.0).unwrap();
        assert_eq!(suggestion.title, "High discretionary spending");
        assert_eq!(suggestion.priority, Priority::Medium);
        assert!(suggestion.description.contains("50%"));
    }

    #[test]
    fn test_discretionary_boundary_is_not_flagged() {
        let now = reference_now();
        // variable = 1500 - 1000 = 500, not > 500
        let transactions = vec![expense("stuff", 1500.0, now)];
        assert!(evaluate(&DiscretionarySpendingRule, &transactions, 1000.0).is_none());
    }

    #[test]
    fn test_discretionary_needs_fixed_expenses() {
        let now = reference_now();
        let transactions = vec![expense("stuff", 5000.0, now)];
        assert!(evaluate(&DiscretionarySpendingRule, &transactions, 0.0).is_none());
    }

    // ========== Small Purchases ==========

    #[test]
    fn test_small_purchases_counts_below_amount() {
        let now = reference_now();
        let mut transactions: Vec<Transaction> =
            (0..16).map(|i| expense(&format!("snack {}", i), 19.99, now)).collect();
        // Exactly 20 is not small
        transactions.push(expense("lunch", 20.0, now));

        let suggestion = evaluate(&SmallPurchasesRule, &transactions, 0.0).unwrap();
        assert_eq!(suggestion.title, "Frequent small purchases");
        assert!(suggestion.description.starts_with("You made 16 small purchases"));
    }

    #[test]
    fn test_small_purchases_at_threshold_is_silent() {
        let now = reference_now();
        let transactions: Vec<Transaction> =
            (0..15).map(|i| expense(&format!("snack {}", i), 3.0, now)).collect();
        assert!(evaluate(&SmallPurchasesRule, &transactions, 0.0).is_none());
    }

    // ========== Subscription Audit ==========

    #[test]
    fn test_subscription_audit_over_limit() {
        let now = reference_now();
        let transactions = vec![
            expense("video", 60.0, now).with_category("subscriptions"),
            expense("music", 45.0, now).with_category("subscriptions"),
        ];

        let suggestion = evaluate(&SubscriptionAuditRule, &transactions, 0.0).unwrap();
        assert_eq!(suggestion.priority, Priority::Low);
        assert!(suggestion.description.contains("over $100"));
    }

    #[test]
    fn test_subscription_audit_at_limit_is_silent() {
        let now = reference_now();
        let transactions = vec![expense("video", 100.0, now).with_category("subscriptions")];
        assert!(evaluate(&SubscriptionAuditRule, &transactions, 0.0).is_none());
    }

    // ========== Engine scenarios ==========

    #[test]
    fn test_twenty_small_purchases_scenario() {
        let now = reference_now();
        // Ten categories with two purchases each: 10% share per category
        let transactions: Vec<Transaction> = (0..20)
            .map(|i| {
                expense(&format!("item {}", i), 10.0, now).with_category(format!("cat{}", i / 2))
            })
            .collect();

        let suggestions = saving_suggestions(&transactions, &[], &now);

        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].title, "Frequent small purchases");
        assert_eq!(suggestions[0].priority, Priority::Medium);
        assert!(suggestions[0].description.contains("20 small purchases"));
        assert!(suggestions
            .iter()
            .all(|s| s.title != "High discretionary spending"));
    }

    #[test]
    fn test_quiet_month_returns_only_fallback() {
        let now = reference_now();
        // Four even categories (25% each), modest subscriptions, variable <= half of fixed
        let transactions = vec![
            expense("a", 100.0, now).with_category("food"),
            expense("b", 100.0, now).with_category("subscriptions"),
            expense("c", 100.0, now).with_category("travel"),
            expense("d", 100.0, now).with_category("shopping"),
        ];

        let suggestions = saving_suggestions(&transactions, &[fixed("rent", 1000.0)], &now);
        assert_eq!(suggestions, vec![SavingSuggestion::track_more_transactions()]);
    }

    #[test]
    fn test_custom_thresholds() {
        let now = reference_now();
        let config = SuggestionConfig {
            small_purchase_count: 2,
            small_purchase_amount: 50.0,
            concentration_pct: 90.0,
            ..SuggestionConfig::default()
        };
        let transactions = vec![
            expense("a", 40.0, now).with_category("food"),
            expense("b", 40.0, now).with_category("travel"),
            expense("c", 40.0, now).with_category("shopping"),
        ];

        let suggestions = SuggestionEngine::with_config(config).suggest(&transactions, &[], &now);
        assert_eq!(suggestions.len(), 1);
        assert!(suggestions[0].description.contains("3 small purchases"));
    }
}
