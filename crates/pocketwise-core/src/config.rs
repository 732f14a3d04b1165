//! Configuration for suggestion thresholds, reports and formatting
//!
//! ## Configuration Resolution
//!
//! Config is loaded with a two-layer resolution:
//! 1. An explicit path, or the override in the data dir
//!    (~/.local/share/pocketwise/config.toml)
//! 2. Fall back to embedded defaults (compiled into binary)

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/pocketwise.toml");

/// Thresholds used by the suggestion rules
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionConfig {
    /// Category share (percent) above which spending counts as concentrated
    pub concentration_pct: f64,
    /// Suggested category limit (percent) cited in the description
    pub target_pct: f64,
    /// Variable expenses above `fixed * ratio` count as high discretionary spending
    pub discretionary_ratio: f64,
    /// Expenses strictly below this amount are small purchases
    pub small_purchase_amount: f64,
    /// Small purchase count above which the month is flagged
    pub small_purchase_count: usize,
    /// Subscriptions total above which an audit is suggested
    pub subscription_limit: f64,
    /// Bucket name for uncategorized expenses
    pub default_category: String,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            concentration_pct: 30.0,
            target_pct: 25.0,
            discretionary_ratio: 0.5,
            small_purchase_amount: 20.0,
            small_purchase_count: 15,
            subscription_limit: 100.0,
            default_category: "other".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    pub trend_months: u32,
    pub uncategorized_label: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            trend_months: 6,
            uncategorized_label: "uncategorized".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormatConfig {
    /// ISO 4217 code used for display
    pub currency: String,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            currency: "USD".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImportConfig {
    pub auto_categorize: bool,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            auto_categorize: true,
        }
    }
}

/// Full application configuration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub suggestions: SuggestionConfig,
    pub reports: ReportConfig,
    pub format: FormatConfig,
    pub import: ImportConfig,
}

impl Config {
    /// Load configuration (explicit path first, then user override, then defaults)
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let content = match path {
            Some(path) => fs::read_to_string(path).map_err(|e| {
                Error::Config(format!("Failed to read {}: {}", path.display(), e))
            })?,
            None => match default_config_path() {
                Some(default_path) if default_path.exists() => {
                    debug!(path = %default_path.display(), "Using config override");
                    fs::read_to_string(&default_path)
                        .map_err(|e| Error::Config(format!("Failed to read config: {}", e)))?
                }
                _ => DEFAULT_CONFIG.to_string(),
            },
        };

        parse_config(&content)
    }

    /// Embedded defaults only
    pub fn embedded() -> Result<Self> {
        parse_config(DEFAULT_CONFIG)
    }
}

/// Location of the per-user config override
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("pocketwise").join("config.toml"))
}

/// Raw config structure for TOML parsing
#[derive(Debug, Deserialize)]
struct RawConfig {
    suggestions: Option<RawSuggestions>,
    reports: Option<RawReports>,
    format: Option<RawFormat>,
    import: Option<RawImport>,
}

#[derive(Debug, Deserialize)]
struct RawSuggestions {
    concentration_pct: Option<f64>,
    target_pct: Option<f64>,
    discretionary_ratio: Option<f64>,
    small_purchase_amount: Option<f64>,
    small_purchase_count: Option<usize>,
    subscription_limit: Option<f64>,
    default_category: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawReports {
    trend_months: Option<u32>,
    uncategorized_label: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawFormat {
    currency: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawImport {
    auto_categorize: Option<bool>,
}

/// Parse config from TOML content
fn parse_config(content: &str) -> Result<Config> {
    let raw: RawConfig = toml::from_str(content)
        .map_err(|e| Error::Config(format!("Invalid config TOML: {}", e)))?;

    let mut config = Config::default();

    if let Some(s) = raw.suggestions {
        let target = &mut config.suggestions;
        if let Some(v) = s.concentration_pct {
            target.concentration_pct = v;
        }
        if let Some(v) = s.target_pct {
            target.target_pct = v;
        }
        if let Some(v) = s.discretionary_ratio {
            target.discretionary_ratio = v;
        }
        if let Some(v) = s.small_purchase_amount {
            target.small_purchase_amount = v;
        }
        if let Some(v) = s.small_purchase_count {
            target.small_purchase_count = v;
        }
        if let Some(v) = s.subscription_limit {
            target.subscription_limit = v;
        }
        if let Some(v) = s.default_category {
            target.default_category = v;
        }
    }

    if let Some(r) = raw.reports {
        if let Some(months) = r.trend_months {
            if months == 0 {
                return Err(Error::Config("reports.trend_months must be at least 1".into()));
            }
            config.reports.trend_months = months;
        }
        if let Some(label) = r.uncategorized_label {
            config.reports.uncategorized_label = label;
        }
    }

    if let Some(currency) = raw.format.and_then(|f| f.currency) {
        config.format.currency = currency.to_uppercase();
    }

    if let Some(auto) = raw.import.and_then(|i| i.auto_categorize) {
        config.import.auto_categorize = auto;
    }

    Ok(config)
}
