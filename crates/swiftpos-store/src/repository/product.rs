//! # Product Repository
//!
//! Whole-document operations over the `products` collection.
//!
//! ## Key Operations
//! - Screen load with empty fallback
//! - Add/update/delete, each rewriting the full collection
//! - The checkout rewrite: the catalog with decremented stock is saved whole

use tracing::debug;

use swiftpos_core::Product;

use crate::error::{StoreError, StoreResult};
use crate::local::{LocalStore, PRODUCTS};

/// Repository for product collection operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = store.products();
///
/// let catalog = repo.list();
/// repo.add(product)?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    store: LocalStore,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(store: LocalStore) -> Self {
        ProductRepository { store }
    }

    /// Loads the catalog; missing or corrupt documents read as empty.
    ///
    /// This is the cashier/product screen load path.
    pub fn list(&self) -> Vec<Product> {
        let products: Vec<Product> = self.store.load_or_default(PRODUCTS);
        debug!(count = products.len(), "Loaded products");
        products
    }

    /// Strict load for bootstrap: corrupt documents are an error.
    pub fn list_strict(&self) -> StoreResult<Vec<Product>> {
        Ok(self.store.load(PRODUCTS)?.unwrap_or_default())
    }

    /// Rewrites the entire products collection.
    ///
    /// Checkout calls this with the decremented catalog; the catalog
    /// screens call it through [`ProductRepository::add`]/`update`/`remove`.
    pub fn save_all(&self, products: &[Product]) -> StoreResult<()> {
        debug!(count = products.len(), "Rewriting products collection");
        self.store.save(PRODUCTS, &products)
    }

    /// Appends a new product and rewrites the collection.
    pub fn add(&self, product: Product) -> StoreResult<()> {
        debug!(id = %product.id, name = %product.name, "Adding product");

        let mut products = self.list();
        products.push(product);
        self.save_all(&products)
    }

    /// Replaces an existing product by id and rewrites the collection.
    pub fn update(&self, product: Product) -> StoreResult<()> {
        debug!(id = %product.id, "Updating product");

        let mut products = self.list();
        let slot = products
            .iter_mut()
            .find(|p| p.id == product.id)
            .ok_or_else(|| StoreError::not_found("Product", &product.id))?;
        *slot = product;
        self.save_all(&products)
    }

    /// Deletes a product by id and rewrites the collection.
    ///
    /// Deleting an already-absent product is a no-op; historical sales keep
    /// their item snapshots either way.
    pub fn remove(&self, id: &str) -> StoreResult<()> {
        debug!(id = %id, "Deleting product");

        let mut products = self.list();
        products.retain(|p| p.id != id);
        self.save_all(&products)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
