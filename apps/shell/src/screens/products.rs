//! # Product Management Screen
//!
//! Catalog CRUD through the add/edit form dialog.
//!
//! ## Variant Sub-Form
//! A variant's type is either picked from the types already on the product
//! being edited or entered as new free text. Types are trimmed and
//! lowercased on save, so "Size" and "size" land on the same dimension.

use uuid::Uuid;

use swiftpos_core::{
    validation::{
        validate_min_wholesale_qty, validate_product_name, validate_variant_type,
        validate_variant_value,
    },
    Money, Product, ProductVariant, ValidationError,
};
use swiftpos_store::LocalStore;

use crate::error::AppError;

// =============================================================================
// Variant Draft
// =============================================================================

/// Raw text fields of the variant sub-form.
#[derive(Debug, Clone, Default)]
pub struct VariantDraft {
    pub variant_type: String,
    pub value: String,
    pub price: String,
    pub wholesale_price: String,
    pub stock: String,
}

impl VariantDraft {
    /// Whether the add-variant button is enabled (type, value and price
    /// are filled in).
    pub fn is_complete(&self) -> bool {
        !self.variant_type.trim().is_empty()
            && !self.value.trim().is_empty()
            && !self.price.trim().is_empty()
    }
}

// =============================================================================
// Product Form
// =============================================================================

/// The add/edit product dialog state.
#[derive(Debug, Clone, Default)]
pub struct ProductForm {
    pub name: String,
    pub min_wholesale_qty: String,
    variants: Vec<ProductVariant>,
    pub draft: VariantDraft,
    /// Entering a brand-new type vs. selecting an existing one.
    pub use_new_type: bool,
    editing: Option<String>,
}

impl ProductForm {
    /// A blank form for a new product.
    pub fn new() -> Self {
        ProductForm {
            use_new_type: true,
            ..Default::default()
        }
    }

    /// A form pre-filled from an existing product.
    pub fn edit(product: &Product) -> Self {
        ProductForm {
            name: product.name.clone(),
            min_wholesale_qty: product.min_wholesale_qty.to_string(),
            variants: product.variants.clone(),
            draft: VariantDraft::default(),
            use_new_type: product.variants.is_empty(),
            editing: Some(product.id.clone()),
        }
    }

    /// Whether this form edits an existing product.
    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Variants accumulated so far.
    pub fn variants(&self) -> &[ProductVariant] {
        &self.variants
    }

    /// The distinct variant types already on this product, in insertion
    /// order; offered as the selection list of the sub-form.
    pub fn existing_types(&self) -> Vec<String> {
        let mut types: Vec<String> = Vec::new();
        for variant in &self.variants {
            if !types.contains(&variant.variant_type) {
                types.push(variant.variant_type.clone());
            }
        }
        types
    }

    /// Picks an existing type for the next variant.
    pub fn select_type(&mut self, variant_type: &str) {
        self.draft.variant_type = variant_type.to_string();
        self.use_new_type = false;
    }

    /// Adds the drafted variant to the product.
    ///
    /// Type and value are required; price must parse. The wholesale price
    /// and stock fields default to zero when left blank. The type is
    /// trimmed and lowercased on save.
    pub fn add_variant(&mut self) -> Result<(), AppError> {
        validate_variant_type(&self.draft.variant_type)?;
        validate_variant_value(&self.draft.value)?;

        let price = parse_money_field("price", &self.draft.price)?;
        let wholesale_price = parse_optional_money_field("wholesale price", &self.draft.wholesale_price)?;
        let stock = parse_optional_int_field("stock", &self.draft.stock)?;

        self.variants.push(ProductVariant {
            id: Uuid::new_v4().to_string(),
            variant_type: self.draft.variant_type.trim().to_lowercase(),
            value: self.draft.value.trim().to_string(),
            price_cents: price.cents(),
            wholesale_price_cents: wholesale_price.cents(),
            stock,
        });

        self.draft = VariantDraft::default();
        self.use_new_type = false;
        Ok(())
    }

    /// Removes a drafted variant.
    pub fn remove_variant(&mut self, variant_id: &str) {
        self.variants.retain(|v| v.id != variant_id);
        if self.variants.is_empty() {
            self.use_new_type = true;
        }
    }

    /// Validates the form and builds the product to persist.
    pub fn build(&self) -> Result<Product, AppError> {
        validate_product_name(&self.name)?;

        let min_wholesale_qty: i64 = self.min_wholesale_qty.trim().parse().map_err(|_| {
            ValidationError::InvalidFormat {
                field: "minimum wholesale quantity".to_string(),
                reason: "must be a whole number".to_string(),
            }
        })?;
        validate_min_wholesale_qty(min_wholesale_qty)?;

        if self.variants.is_empty() {
            return Err(ValidationError::Required {
                field: "variants".to_string(),
            }
            .into());
        }

        Ok(Product {
            id: self
                .editing
                .clone()
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            name: self.name.trim().to_string(),
            variants: self.variants.clone(),
            min_wholesale_qty,
        })
    }
}

fn parse_money_field(field: &str, input: &str) -> Result<Money, AppError> {
    input.trim().parse().map_err(|_| {
        ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must be a non-negative amount".to_string(),
        }
        .into()
    })
}

fn parse_optional_money_field(field: &str, input: &str) -> Result<Money, AppError> {
    if input.trim().is_empty() {
        return Ok(Money::zero());
    }
    parse_money_field(field, input)
}

fn parse_optional_int_field(field: &str, input: &str) -> Result<i64, AppError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(0);
    }
    let value: i64 = input.parse().map_err(|_| ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: "must be a whole number".to_string(),
    })?;
    if value < 0 {
        return Err(ValidationError::Negative {
            field: field.to_string(),
        }
        .into());
    }
    Ok(value)
}

// =============================================================================
// Product Management Screen
// =============================================================================

/// The product management page state.
#[derive(Debug)]
pub struct ProductManagementScreen {
    store: LocalStore,
    products: Vec<Product>,
}

impl ProductManagementScreen {
    /// Opens the screen, loading the catalog (missing/corrupt reads empty).
    pub fn open(store: LocalStore) -> Self {
        let products = store.products().list();
        ProductManagementScreen { store, products }
    }

    /// The catalog as currently listed.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    fn reload(&mut self) {
        self.products = self.store.products().list();
    }

    /// Saves the form: adds a new product or rewrites the edited one.
    pub fn save(&mut self, form: &ProductForm) -> Result<(), AppError> {
        let product = form.build()?;
        if form.is_editing() {
            self.store.products().update(product)?;
        } else {
            self.store.products().add(product)?;
        }
        self.reload();
        Ok(())
    }

    /// Deletes a product. Historical sales keep their item snapshots.
    pub fn delete(&mut self, product_id: &str) -> Result<(), AppError> {
        self.store.products().remove(product_id)?;
        self.reload();
        Ok(())
    }

    /// Groups a product's variants by type for the list view, preserving
    /// first-seen type order.
    pub fn grouped_variants<'a>(
        &self,
        product: &'a Product,
    ) -> Vec<(String, Vec<&'a ProductVariant>)> {
        let mut groups: Vec<(String, Vec<&ProductVariant>)> = Vec::new();
        for variant in &product.variants {
            match groups.iter_mut().find(|(t, _)| *t == variant.variant_type) {
                Some((_, members)) => members.push(variant),
                None => groups.push((variant.variant_type.clone(), vec![variant])),
            }
        }
        groups
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
