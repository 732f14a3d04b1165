//! Core types for the suggestion engine

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Heuristic rules that can produce a suggestion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// One category dominates the month's spending
    CategoryConcentration,
    /// Variable spending is large compared to fixed obligations
    DiscretionarySpending,
    /// Many small purchases
    SmallPurchases,
    /// Subscriptions category is expensive
    SubscriptionAudit,
}

impl RuleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleKind::CategoryConcentration => "category_concentration",
            RuleKind::DiscretionarySpending => "discretionary_spending",
            RuleKind::SmallPurchases => "small_purchases",
            RuleKind::SubscriptionAudit => "subscription_audit",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RuleKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "category_concentration" => Ok(RuleKind::CategoryConcentration),
            "discretionary_spending" => Ok(RuleKind::DiscretionarySpending),
            "small_purchases" => Ok(RuleKind::SmallPurchases),
            "subscription_audit" => Ok(RuleKind::SubscriptionAudit),
            _ => Err(format!("Unknown rule: {}", s)),
        }
    }
}

/// Display priority of a suggestion
///
/// Informational only; the engine never sorts by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A human-readable saving tip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingSuggestion {
    pub title: String,
    pub description: String,
    pub priority: Priority,
}

impl SavingSuggestion {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        priority: Priority,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            priority,
        }
    }

    /// Emitted when no rule found anything to say
    pub fn track_more_transactions() -> Self {
        Self::new(
            "Track more transactions",
            "Add more transactions to receive personalized financial insights and saving \
             suggestions tailored to your spending patterns.",
            Priority::Low,
        )
    }
}

/// A category's slice of the month's expenses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryShare {
    pub category: String,
    pub amount: f64,
    /// Percentage points of total expenses
    pub percentage: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_kind_round_trips_through_str() {
        assert_eq!(
            RuleKind::from_str("small_purchases").unwrap(),
            RuleKind::SmallPurchases
        );
        assert_eq!(RuleKind::SubscriptionAudit.as_str(), "subscription_audit");
        assert!(RuleKind::from_str("forecast").is_err());
    }

    #[test]
    fn test_priority_serializes_lowercase() {
        let suggestion = SavingSuggestion::new("T", "D", Priority::Medium);
        let value = serde_json::to_value(&suggestion).unwrap();
        assert_eq!(value["priority"], "medium");
        assert_eq!(value.as_object().unwrap().len(), 3);
    }

    #[test]
    fn test_fallback_suggestion() {
        let fallback = SavingSuggestion::track_more_transactions();
        assert_eq!(fallback.title, "Track more transactions");
        assert_eq!(fallback.priority, Priority::Low);
        assert!(fallback.description.starts_with("Add more transactions"));
        assert!(!fallback.description.contains("  "));
    }
}
