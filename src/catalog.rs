//! Static product catalog.
//!
//! Loads the seed data once, validates it, and keeps both the barcode map and
//! the search index in memory. Nothing here is mutated after construction.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::config;
use crate::error::{NutriscanError, Result};
use crate::models::{Product, SearchIndexEntry};

/// On-disk shape of the seed data.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SeedData {
    products: Vec<Product>,
    search_index: Option<Vec<SearchIndexEntry>>,
}

/// Read-only mapping from barcode to [`Product`] plus the search index
/// projected from it.
///
/// Products keep their insertion order, which is also the order search
/// results and quick access come back in.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    by_barcode: HashMap<String, usize>,
    index: Vec<SearchIndexEntry>,
}

impl Catalog {
    /// Load the seed data bundled with the crate.
    pub fn embedded() -> Result<Self> {
        Self::from_json_str(config::DEFAULT_CATALOG_JSON)
    }

    /// Load seed data from a JSON file on disk.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&raw)
    }

    /// Parse seed data of the form `{"products": [...], "searchIndex": [...]}`.
    ///
    /// `searchIndex` is optional; when absent it is generated from the
    /// products.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let seed: SeedData = serde_json::from_str(raw)?;
        match seed.search_index {
            Some(index) => Self::with_index(seed.products, index),
            None => Self::from_products(seed.products),
        }
    }

    /// Build a catalog whose search index is derived from `products`.
    pub fn from_products(products: Vec<Product>) -> Result<Self> {
        let index = products.iter().map(Product::index_entry).collect();
        Self::with_index(products, index)
    }

    /// Build a catalog from products and a separately authored index.
    ///
    /// Fails fast on duplicate barcodes, base scores outside the score range,
    /// or index rows that do not match a product.
    pub fn with_index(products: Vec<Product>, index: Vec<SearchIndexEntry>) -> Result<Self> {
        let mut by_barcode = HashMap::with_capacity(products.len());

        for (pos, product) in products.iter().enumerate() {
            product.validate()?;
            if by_barcode.insert(product.barcode.clone(), pos).is_some() {
                return Err(NutriscanError::Integrity(format!(
                    "duplicate barcode '{}'",
                    product.barcode
                )));
            }
        }

        for entry in &index {
            let product = by_barcode
                .get(&entry.barcode)
                .map(|&pos| &products[pos])
                .ok_or_else(|| {
                    NutriscanError::Integrity(format!(
                        "search index references unknown barcode '{}'",
                        entry.barcode
                    ))
                })?;
            if product.name != entry.name || product.brand != entry.brand {
                return Err(NutriscanError::Integrity(format!(
                    "search index entry for '{}' does not match its product",
                    entry.barcode
                )));
            }
        }

        tracing::debug!(
            products = products.len(),
            indexed = index.len(),
            "catalog loaded"
        );

        Ok(Self {
            products,
            by_barcode,
            index,
        })
    }

    /// Look up a product by barcode.
    pub fn get(&self, barcode: &str) -> Option<&Product> {
        self.by_barcode.get(barcode).map(|&pos| &self.products[pos])
    }

    /// True if `barcode` keys a product in the catalog.
    pub fn contains(&self, barcode: &str) -> bool {
        self.by_barcode.contains_key(barcode)
    }

    /// All products in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// The search index in iteration order.
    pub fn index(&self) -> &[SearchIndexEntry] {
        &self.index
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// True when the catalog holds no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
