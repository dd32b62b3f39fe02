//! # Configuration State
//!
//! Display configuration for the shell. Read-only after initialization.

use serde::{Deserialize, Serialize};

use swiftpos_core::Money;

/// Shell configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Store name shown in the login header and on receipts.
    pub store_name: String,

    /// Currency symbol for display.
    pub currency_symbol: String,

    /// Number of decimal places for currency display.
    pub currency_decimals: u8,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            store_name: "SwiftPOS Glass".to_string(),
            currency_symbol: "Rp".to_string(),
            currency_decimals: 2,
        }
    }
}

impl Config {
    /// Formats a money amount for display, e.g. `Rp 24.00`.
    pub fn format_currency(&self, amount: Money) -> String {
        let divisor = 10_i64.pow(self.currency_decimals as u32);
        let cents = amount.cents();
        let whole = cents / divisor;
        let frac = (cents % divisor).abs();

        format!(
            "{}{} {}",
            if cents < 0 { "-" } else { "" },
            self.currency_symbol,
            if self.currency_decimals > 0 {
                format!(
                    "{}.{:0width$}",
                    whole.abs(),
                    frac,
                    width = self.currency_decimals as usize
                )
            } else {
                whole.abs().to_string()
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        let config = Config::default();
        assert_eq!(config.format_currency(Money::from_cents(2400)), "Rp 24.00");
        assert_eq!(config.format_currency(Money::from_cents(1)), "Rp 0.01");
        assert_eq!(config.format_currency(Money::from_cents(0)), "Rp 0.00");
        assert_eq!(config.format_currency(Money::from_cents(-550)), "-Rp 5.50");
    }
}
