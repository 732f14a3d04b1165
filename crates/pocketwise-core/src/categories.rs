//! Transaction categories and title-based category suggestion
//!
//! Suggestions come from an ordered list of case-insensitive patterns; the
//! first pattern that matches a transaction title wins.

use regex::Regex;

use crate::error::Result;
use crate::models::TransactionType;

/// Categories offered for expenses
pub const EXPENSE_CATEGORIES: &[&str] = &[
    "housing",
    "transportation",
    "food",
    "utilities",
    "insurance",
    "healthcare",
    "debt",
    "subscriptions",
    "entertainment",
    "education",
    "shopping",
    "personal",
    "travel",
    "gifts",
];

/// Categories offered for income
pub const INCOME_CATEGORIES: &[&str] = &["salary", "investments", "freelance", "refunds"];

/// Known categories for a transaction type
pub fn categories_for(kind: TransactionType) -> &'static [&'static str] {
    match kind {
        TransactionType::Income => INCOME_CATEGORIES,
        TransactionType::Expense => EXPENSE_CATEGORIES,
    }
}

/// Whether `category` is one of the known categories (case-insensitive)
pub fn is_known_category(category: &str) -> bool {
    let lower = category.to_lowercase();
    EXPENSE_CATEGORIES
        .iter()
        .chain(INCOME_CATEGORIES.iter())
        .any(|c| *c == lower)
}

/// Title patterns in priority order ("gas bill" resolves to transportation)
const RULES: &[(&str, &str)] = &[
    (
        "housing",
        r"rent|mortgage|apartment|house payment|hoa|property tax",
    ),
    (
        "transportation",
        r"gas|fuel|car|auto|uber|lyft|taxi|parking|transit|train|bus|subway|metro",
    ),
    (
        "food",
        r"grocery|restaurant|takeout|food|meal|breakfast|lunch|dinner|cafe|coffee|doordash|ubereats|grubhub",
    ),
    (
        "utilities",
        r"electric|water|gas bill|internet|wifi|phone|cable|utility|utilities",
    ),
    (
        "subscriptions",
        r"netflix|hulu|spotify|apple|amazon prime|disney|subscription|membership",
    ),
    ("salary", r"salary|paycheck|direct deposit|payment from"),
    ("freelance", r"freelance|consulting|client"),
    ("investments", r"dividend|interest|investment|stock|crypto"),
    ("refunds", r"refund|return|cashback|reimbursement"),
];

/// Suggests a category from a transaction title
pub struct CategorySuggester {
    rules: Vec<(Regex, &'static str)>,
}

impl CategorySuggester {
    /// Compile the built-in rules
    pub fn new() -> Result<Self> {
        let rules = RULES
            .iter()
            .map(|(category, pattern)| Ok((Regex::new(&format!("(?i){}", pattern))?, *category)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rules })
    }

    /// First category whose pattern matches `title`
    pub fn suggest(&self, title: &str) -> Option<&'static str> {
        self.rules
            .iter()
            .find(|(re, _)| re.is_match(title))
            .map(|(_, category)| *category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggest_common_titles() {
        let suggester = CategorySuggester::new().unwrap();

        assert_eq!(suggester.suggest("Monthly RENT"), Some("housing"));
        assert_eq!(suggester.suggest("Uber ride home"), Some("transportation"));
        assert_eq!(suggester.suggest("Grocery run"), Some("food"));
        assert_eq!(suggester.suggest("Internet"), Some("utilities"));
        assert_eq!(suggester.suggest("Netflix"), Some("subscriptions"));
        assert_eq!(suggester.suggest("Paycheck March"), Some("salary"));
        assert_eq!(suggester.suggest("Client invoice"), Some("freelance"));
        assert_eq!(suggester.suggest("Dividend payout"), Some("investments"));
        assert_eq!(suggester.suggest("Store refund"), Some("refunds"));
    }

    #[test]
    fn test_first_rule_wins() {
        let suggester = CategorySuggester::new().unwrap();
        // "gas bill" also matches utilities, but transportation is checked first
        assert_eq!(suggester.suggest("Gas bill"), Some("transportation"));
    }

    #[test]
    fn test_no_match() {
        let suggester = CategorySuggester::new().unwrap();
        assert_eq!(suggester.suggest("Birthday present"), None);
        assert_eq!(suggester.suggest(""), None);
    }

    #[test]
    fn test_known_categories() {
        assert!(is_known_category("Food"));
        assert!(is_known_category("salary"));
        assert!(!is_known_category("other"));
        assert!(categories_for(TransactionType::Income).contains(&"refunds"));
        assert!(categories_for(TransactionType::Expense).contains(&"subscriptions"));
    }
}
