//! # Console Configuration
//!
//! Settings loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`STOCKROOM_*`)
//! 2. Defaults (this file)
//!
//! ## Environment Variables
//! - `STOCKROOM_STORE_NAME`: name shown in the welcome banner
//! - `STOCKROOM_CURRENCY_SYMBOL`: symbol printed before amounts
//! - `STOCKROOM_SHOW_TOTAL`: `true` to print money received under the listing
//! - `STOCKROOM_LOG`: tracing filter directive (falls back to `RUST_LOG`)
//!
//! Read-only after initialization, so the session holds it by value.

use serde::{Deserialize, Serialize};
use stockroom_core::Money;

/// Default tracing filter: quiet, so log lines do not interleave with prompts.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Console configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsoleConfig {
    /// Shown as "Welcome to the {store_name}!"
    pub store_name: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Print the running total of money received after the listing
    pub show_total: bool,

    /// Explicit tracing filter; `None` defers to `RUST_LOG`
    pub log_filter: Option<String>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        ConsoleConfig {
            store_name: "inventory".to_string(),
            currency_symbol: "$".to_string(),
            show_total: false,
            log_filter: None,
        }
    }
}

impl ConsoleConfig {
    /// Loads configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through `lookup`, falling back to defaults.
    ///
    /// Tests pass a closure over a fixed map instead of touching the real
    /// environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConsoleConfig::default();

        if let Some(store_name) = lookup("STOCKROOM_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(symbol) = lookup("STOCKROOM_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(raw) = lookup("STOCKROOM_SHOW_TOTAL") {
            config.show_total = parse_bool("STOCKROOM_SHOW_TOTAL", &raw)?;
        }

        config.log_filter = lookup("STOCKROOM_LOG").filter(|f| !f.trim().is_empty());

        Ok(config)
    }

    /// Formats an amount with the configured currency symbol.
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_cli::config::ConsoleConfig;
    /// use stockroom_core::Money;
    ///
    /// let config = ConsoleConfig::default();
    /// assert_eq!(config.format_currency(Money::from_cents(1234)), "$12.34");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }
}

fn parse_bool(key: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: raw.to_string(),
        }),
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: String, value: String },
}
