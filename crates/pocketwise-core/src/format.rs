//! Display formatting for money and percentages
//!
//! Formatting only; amounts are never converted between currencies.

use num_format::{Locale, ToFormattedString};

/// How large amounts are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Notation {
    /// `$1,234.56`
    #[default]
    Standard,
    /// `$1.2K`, `$3.4M`
    Compact,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyOptions {
    /// ISO 4217 code
    pub currency: String,
    pub notation: Notation,
    pub fraction_digits: usize,
}

impl Default for CurrencyOptions {
    fn default() -> Self {
        Self {
            currency: "USD".to_string(),
            notation: Notation::Standard,
            fraction_digits: 2,
        }
    }
}

impl CurrencyOptions {
    pub fn with_currency(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            ..Self::default()
        }
    }

    pub fn compact(mut self) -> Self {
        self.notation = Notation::Compact;
        self
    }
}

/// Prefix for a currency code; unknown codes are written as `CODE `
pub fn currency_symbol(code: &str) -> String {
    match code.to_uppercase().as_str() {
        "USD" | "CAD" | "AUD" | "NZD" => "$".to_string(),
        "EUR" => "€".to_string(),
        "GBP" => "£".to_string(),
        "JPY" | "CNY" => "¥".to_string(),
        "INR" => "₹".to_string(),
        "KRW" => "₩".to_string(),
        other => format!("{} ", other),
    }
}

/// Format an amount for display, e.g. `-$1,234.56`
pub fn format_currency(amount: f64, options: &CurrencyOptions) -> String {
    let symbol = currency_symbol(&options.currency);
    let sign = if amount < 0.0 { "-" } else { "" };
    let magnitude = amount.abs();

    let digits = match options.notation {
        Notation::Standard => group_thousands(magnitude, options.fraction_digits),
        Notation::Compact => compact(magnitude, options.fraction_digits),
    };

    format!("{}{}{}", sign, symbol, digits)
}

/// Format percentage points, e.g. `12.5%`; trailing zeros are trimmed
pub fn format_percent(value: f64, max_fraction_digits: usize) -> String {
    let text = trim_fraction(&format!("{:.*}", max_fraction_digits, value));
    // Avoid "-0%"
    if text == "-0" {
        return "0%".to_string();
    }
    format!("{}%", text)
}

fn group_thousands(magnitude: f64, fraction_digits: usize) -> String {
    let fixed = format!("{:.*}", fraction_digits, magnitude);
    let (whole, fraction) = match fixed.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (fixed.as_str(), None),
    };

    let grouped = whole
        .parse::<u64>()
        .map(|n| n.to_formatted_string(&Locale::en))
        .unwrap_or_else(|_| whole.to_string());

    match fraction {
        Some(fraction) => format!("{}.{}", grouped, fraction),
        None => grouped,
    }
}

/// Up to `fraction_digits` decimals, trailing zeros trimmed
fn compact(magnitude: f64, fraction_digits: usize) -> String {
    const UNITS: [(f64, &str); 4] = [(1.0, ""), (1e3, "K"), (1e6, "M"), (1e9, "B")];

    let mut index = UNITS
        .iter()
        .rposition(|(scale, _)| magnitude >= *scale)
        .unwrap_or(0);

    loop {
        let (scale, suffix) = UNITS[index];
        let text = format!("{:.*}", fraction_digits, magnitude / scale);
        let rounded: f64 = text.parse().unwrap_or(magnitude / scale);

        // 999_999 rounds up to "1000K"; move to the next unit instead
        if rounded >= 1000.0 && index + 1 < UNITS.len() {
            index += 1;
            continue;
        }

        return format!("{}{}", trim_fraction(&text), suffix);
    }
}

fn trim_fraction(text: &str) -> String {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text.to_string()
    }
}
