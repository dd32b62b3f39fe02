//! # Sales Ledger Screen
//!
//! Read-only aggregation over recorded sales: free-text search, inclusive
//! date range and totals over the filtered set.

use chrono::NaiveDate;

use swiftpos_core::{Money, Sale};
use swiftpos_store::LocalStore;

use crate::receipt::{resolve_cashier_name, Receipt};
use crate::state::Config;

// =============================================================================
// Ledger Entry & Totals
// =============================================================================

/// A sale with its cashier name resolved at load time.
///
/// The name comes from the current users collection; sales by deleted
/// users carry the placeholder.
#[derive(Debug, Clone)]
pub struct LedgerEntry {
    pub sale: Sale,
    pub cashier_name: String,
}

/// Aggregates over the filtered set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerTotals {
    pub sales_count: usize,
    pub revenue: Money,
    pub items_sold: i64,
}

// =============================================================================
// Sales Ledger Screen
// =============================================================================

/// The sales management page state.
#[derive(Debug)]
pub struct SalesLedgerScreen {
    config: Config,
    entries: Vec<LedgerEntry>,
    search: String,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
}

impl SalesLedgerScreen {
    /// Opens the ledger, loading sales and resolving cashier names.
    ///
    /// Missing or corrupt documents read as empty.
    pub fn open(store: &LocalStore, config: Config) -> Self {
        let users = store.users().list();
        let entries = store
            .sales()
            .list()
            .into_iter()
            .map(|sale| {
                let cashier_name = resolve_cashier_name(&users, &sale.cashier_id);
                LedgerEntry { sale, cashier_name }
            })
            .collect();

        SalesLedgerScreen {
            config,
            entries,
            search: String::new(),
            start_date: None,
            end_date: None,
        }
    }

    // -------------------------------------------------------------------------
    // Filters
    // -------------------------------------------------------------------------

    /// Free-text filter over item names and cashier names.
    pub fn set_search(&mut self, search: &str) {
        self.search = search.to_string();
    }

    /// Inclusive start of the date range (by sale date).
    pub fn set_start_date(&mut self, date: Option<NaiveDate>) {
        self.start_date = date;
    }

    /// Inclusive end of the date range; covers the whole end day.
    pub fn set_end_date(&mut self, date: Option<NaiveDate>) {
        self.end_date = date;
    }

    fn matches(&self, entry: &LedgerEntry) -> bool {
        let matches_search = self.search.is_empty() || {
            let needle = self.search.to_lowercase();
            entry
                .sale
                .items
                .iter()
                .any(|item| item.name.to_lowercase().contains(&needle))
                || entry.cashier_name.to_lowercase().contains(&needle)
        };

        let sale_date = entry.sale.timestamp.date_naive();
        let matches_start = self.start_date.map_or(true, |start| sale_date >= start);
        let matches_end = self.end_date.map_or(true, |end| sale_date <= end);

        matches_search && matches_start && matches_end
    }

    /// The filtered entries, newest first.
    pub fn filtered(&self) -> Vec<&LedgerEntry> {
        let mut entries: Vec<&LedgerEntry> = self.entries.iter().filter(|e| self.matches(e)).collect();
        entries.sort_by(|a, b| b.sale.timestamp.cmp(&a.sale.timestamp));
        entries
    }

    /// Count/revenue/items-sold totals over the filtered set.
    pub fn totals(&self) -> LedgerTotals {
        let filtered = self.filtered();
        LedgerTotals {
            sales_count: filtered.len(),
            revenue: filtered.iter().map(|e| e.sale.total()).sum(),
            items_sold: filtered.iter().map(|e| e.sale.item_quantity()).sum(),
        }
    }

    /// Opens the receipt view for a recorded sale.
    pub fn receipt_for(&self, sale_id: &str) -> Option<Receipt> {
        self.entries
            .iter()
            .find(|e| e.sale.id == sale_id)
            .map(|e| Receipt::from_sale(&e.sale, e.cashier_name.clone(), &self.config))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use swiftpos_core::{CartItem, Role, User, VariantSnapshot};
    use swiftpos_store::StoreConfig;
    use tempfile::tempdir;

    fn item(name: &str, quantity: i64, price_cents: i64) -> CartItem {
        CartItem {
            id: format!("c-{name}-{quantity}"),
            product_id: "p1".to_string(),
            variant_id: "v1".to_string(),
            name: name.to_string(),
            variant: VariantSnapshot {
                id: "v1".to_string(),
                variant_type: "size".to_string(),
                value: "250gr".to_string(),
                price_cents,
                wholesale_price_cents: price_cents,
                stock: 100,
                min_wholesale_qty: 1000,
            },
            quantity,
        }
    }

    fn ledger_with_two_sales(dir: &tempfile::TempDir) -> SalesLedgerScreen {
        let store = LocalStore::open(StoreConfig::new(dir.path())).unwrap();

        store
            .users()
            .add(User {
                id: "u1".to_string(),
                username: "alice".to_string(),
                password: "p".to_string(),
                name: "Alice".to_string(),
                role: Role::Shopkeeper,
            })
            .unwrap();

        let cookie = item("Cookie", 2, 1000);
        store
            .sales()
            .append(&Sale {
                id: "s1".to_string(),
                items: vec![cookie],
                total_cents: 2000,
                timestamp: Utc.with_ymd_and_hms(2026, 8, 1, 9, 0, 0).unwrap(),
                cashier_id: "u1".to_string(),
            })
            .unwrap();

        let tea = item("Tea", 1, 500);
        store
            .sales()
            .append(&Sale {
                id: "s2".to_string(),
                items: vec![tea],
                total_cents: 500,
                timestamp: Utc.with_ymd_and_hms(2026, 8, 3, 23, 30, 0).unwrap(),
                cashier_id: "deleted-user".to_string(),
            })
            .unwrap();

        SalesLedgerScreen::open(&store, Config::default())
    }

    #[test]
    fn test_entries_sorted_newest_first() {
        let dir = tempdir().unwrap();
        let ledger = ledger_with_two_sales(&dir);

        let filtered = ledger.filtered();
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].sale.id, "s2");
        assert_eq!(filtered[1].sale.id, "s1");
    }

    #[test]
    fn test_deleted_cashier_shows_placeholder() {
        let dir = tempdir().unwrap();
        let ledger = ledger_with_two_sales(&dir);

        let filtered = ledger.filtered();
        assert_eq!(filtered[0].cashier_name, "Unknown Cashier");
        assert_eq!(filtered[1].cashier_name, "Alice");
    }

    #[test]
    fn test_search_matches_item_and_cashier_names() {
        let dir = tempdir().unwrap();
        let mut ledger = ledger_with_two_sales(&dir);

        ledger.set_search("cook");
        assert_eq!(ledger.filtered().len(), 1);
        assert_eq!(ledger.filtered()[0].sale.id, "s1");

        // Cashier name, case-insensitive
        ledger.set_search("ALICE");
        assert_eq!(ledger.filtered().len(), 1);
        assert_eq!(ledger.filtered()[0].sale.id, "s1");

        ledger.set_search("nothing");
        assert!(ledger.filtered().is_empty());
    }

    #[test]
    fn test_date_range_is_inclusive() {
        let dir = tempdir().unwrap();
        let mut ledger = ledger_with_two_sales(&dir);

        ledger.set_start_date(NaiveDate::from_ymd_opt(2026, 8, 2));
        assert_eq!(ledger.filtered().len(), 1);
        assert_eq!(ledger.filtered()[0].sale.id, "s2");

        // The end date covers its entire day: s2 happened 23:30 on Aug 3
        ledger.set_start_date(None);
        ledger.set_end_date(NaiveDate::from_ymd_opt(2026, 8, 3));
        assert_eq!(ledger.filtered().len(), 2);

        ledger.set_end_date(NaiveDate::from_ymd_opt(2026, 8, 2));
        assert_eq!(ledger.filtered().len(), 1);
        assert_eq!(ledger.filtered()[0].sale.id, "s1");
    }

    #[test]
    fn test_totals_over_filtered_set() {
        let dir = tempdir().unwrap();
        let mut ledger = ledger_with_two_sales(&dir);

        let totals = ledger.totals();
        assert_eq!(totals.sales_count, 2);
        assert_eq!(totals.revenue.cents(), 2500);
        assert_eq!(totals.items_sold, 3);

        ledger.set_search("tea");
        let totals = ledger.totals();
        assert_eq!(totals.sales_count, 1);
        assert_eq!(totals.revenue.cents(), 500);
        assert_eq!(totals.items_sold, 1);
    }

    #[test]
    fn test_receipt_for_recorded_sale() {
        let dir = tempdir().unwrap();
        let ledger = ledger_with_two_sales(&dir);

        let receipt = ledger.receipt_for("s1").unwrap();
        assert_eq!(receipt.cashier_name, "Alice");
        assert_eq!(receipt.total_cents, 2000);
        assert!(ledger.receipt_for("missing").is_none());
    }
}
