//! # Receipt View
//!
//! The printable receipt for a sale: shown right after checkout and again
//! from the sales ledger.

use chrono::{DateTime, Utc};
use serde::Serialize;

use swiftpos_core::{Money, Sale, User};

use crate::state::Config;

/// Placeholder shown when a sale's cashier no longer exists.
pub const UNKNOWN_CASHIER: &str = "Unknown Cashier";

/// Resolves a cashier id against the current users collection.
///
/// Lookup happens at render time; a deleted user yields the placeholder.
pub fn resolve_cashier_name(users: &[User], cashier_id: &str) -> String {
    users
        .iter()
        .find(|u| u.id == cashier_id)
        .map(|u| u.name.clone())
        .unwrap_or_else(|| UNKNOWN_CASHIER.to_string())
}

// =============================================================================
// Receipt
// =============================================================================

/// One item line on a receipt.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptLine {
    pub name: String,
    /// Variant label, e.g. "size: 250gr".
    pub variant_label: String,
    pub quantity: i64,
    /// Wholesale-aware unit price the line was rung up at.
    pub unit_price_cents: i64,
    pub line_total_cents: i64,
    pub wholesale: bool,
}

/// A rendered receipt.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub sale_id: String,
    /// Short receipt number (first 8 characters of the sale id).
    pub receipt_number: String,
    pub store_name: String,
    pub timestamp: DateTime<Utc>,
    pub cashier_name: String,
    pub lines: Vec<ReceiptLine>,
    pub total_cents: i64,
}

impl Receipt {
    /// Builds a receipt from a recorded sale.
    ///
    /// Prices come from the sale's item snapshots, so the receipt stays
    /// stable no matter what happens to the catalog afterwards.
    pub fn from_sale(sale: &Sale, cashier_name: impl Into<String>, config: &Config) -> Self {
        Receipt {
            sale_id: sale.id.clone(),
            receipt_number: sale.receipt_number().to_string(),
            store_name: config.store_name.clone(),
            timestamp: sale.timestamp,
            cashier_name: cashier_name.into(),
            lines: sale
                .items
                .iter()
                .map(|item| ReceiptLine {
                    name: item.name.clone(),
                    variant_label: item.variant.label(),
                    quantity: item.quantity,
                    unit_price_cents: item.unit_price().cents(),
                    line_total_cents: item.line_total().cents(),
                    wholesale: item.is_wholesale(),
                })
                .collect(),
            total_cents: sale.total_cents,
        }
    }

    /// Renders the receipt as plain text for printing.
    pub fn to_plain_text(&self, config: &Config) -> String {
        let mut out = String::new();

        out.push_str(&format!("{}\n", self.store_name));
        out.push_str(&format!(
            "{}\n",
            self.timestamp.format("%d %b %Y %H:%M:%S")
        ));
        out.push_str(&format!("No. Struk #{}\n", self.receipt_number));
        out.push_str(&format!("Kasir: {}\n", self.cashier_name));
        out.push_str("--------------------------------\n");

        for line in &self.lines {
            out.push_str(&format!("{}\n", line.name));
            out.push_str(&format!(
                "  {}  x{} @ {} = {}\n",
                line.variant_label,
                line.quantity,
                config.format_currency(Money::from_cents(line.unit_price_cents)),
                config.format_currency(Money::from_cents(line.line_total_cents)),
            ));
        }

        out.push_str("--------------------------------\n");
        out.push_str(&format!(
            "Total: {}\n",
            config.format_currency(Money::from_cents(self.total_cents))
        ));
        out.push_str("\nTerima kasih atas kunjungan Anda!\n");
        out.push_str("Simpan struk ini sebagai bukti pembelian.\n");

        out
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
