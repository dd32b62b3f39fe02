//! # Sale Repository
//!
//! Append-only operations over the `sales` collection.
//!
//! Sales are immutable once appended: there is no update and no delete.
//! The ledger is still rewritten whole on every append, like every other
//! collection.

use tracing::{debug, info};

use swiftpos_core::Sale;

use crate::error::StoreResult;
use crate::local::{LocalStore, SALES};

/// Repository for the sales ledger.
#[derive(Debug, Clone)]
pub struct SaleRepository {
    store: LocalStore,
}

impl SaleRepository {
    /// Creates a new SaleRepository.
    pub fn new(store: LocalStore) -> Self {
        SaleRepository { store }
    }

    /// Loads all recorded sales; missing or corrupt documents read as empty.
    pub fn list(&self) -> Vec<Sale> {
        let sales: Vec<Sale> = self.store.load_or_default(SALES);
        debug!(count = sales.len(), "Loaded sales");
        sales
    }

    /// Strict load for bootstrap: corrupt documents are an error.
    pub fn list_strict(&self) -> StoreResult<Vec<Sale>> {
        Ok(self.store.load(SALES)?.unwrap_or_default())
    }

    /// Appends a sale and rewrites the collection.
    pub fn append(&self, sale: &Sale) -> StoreResult<()> {
        let mut sales = self.list();
        sales.push(sale.clone());
        self.store.save(SALES, &sales)?;

        info!(
            sale_id = %sale.id,
            total = %sale.total(),
            items = sale.items.len(),
            "Sale recorded"
        );
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
