//! Suggestion Engine - Saving Tips From One Month of Spending
//!
//! Runs a fixed set of independent heuristic rules over the current month's
//! expenses and the recurring fixed expenses, producing short, prioritized
//! saving suggestions.
//!
//! ## Built-in Rules (evaluation order)
//!
//! - **Category Concentration** - one category above 30% of spending
//! - **Discretionary Spending** - variable spending above half the fixed total
//! - **Small Purchases** - more than 15 expenses under 20
//! - **Subscription Audit** - subscriptions above 100
//!
//! When nothing fires, a single "Track more transactions" suggestion is
//! returned, so the list is never empty.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pocketwise_core::suggestions::SuggestionEngine;
//!
//! let engine = SuggestionEngine::new();
//! let suggestions = engine.suggest(&transactions, &fixed_expenses, &now);
//! ```

pub mod engine;
pub mod rules;
pub mod types;

pub use engine::{saving_suggestions, AnalysisContext, SuggestionEngine, SuggestionRule};
pub use rules::{
    CategoryConcentrationRule, DiscretionarySpendingRule, SmallPurchasesRule,
    SubscriptionAuditRule, SUBSCRIPTIONS_CATEGORY,
};
pub use types::{CategoryShare, Priority, RuleKind, SavingSuggestion};
