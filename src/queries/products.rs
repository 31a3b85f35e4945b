//! Product queries over the in-memory [`Catalog`].
//!
//! Lookup goes through the barcode map; search is a case-insensitive
//! substring filter over the search index, in index order.

use crate::catalog::Catalog;
use crate::config;
use crate::models::{Product, SearchIndexEntry};

// ---------------------------------------------------------------------------
// ProductQuery
// ---------------------------------------------------------------------------

/// Query interface for products, borrowing the catalog.
pub struct ProductQuery<'a> {
    catalog: &'a Catalog,
}

impl<'a> ProductQuery<'a> {
    /// Create a new `ProductQuery` bound to the given catalog.
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Look up a product by barcode.
    ///
    /// Returns `None` for unknown barcodes; absence is not an error.
    pub fn get(&self, barcode: &str) -> Option<&'a Product> {
        self.catalog.get(barcode)
    }

    /// Search the index for entries whose name or brand contains `query`,
    /// ignoring case.
    ///
    /// An empty query returns no results rather than the whole catalog.
    pub fn search(&self, query: &str) -> Vec<SearchIndexEntry> {
        if query.is_empty() {
            return Vec::new();
        }
        let needle = query.to_lowercase();

        self.catalog
            .index()
            .iter()
            .filter(|entry| entry.matches(&needle))
            .cloned()
            .collect()
    }

    /// All products in catalog order.
    pub fn list(&self) -> Vec<&'a Product> {
        self.catalog.products().iter().collect()
    }

    /// The first few products, as shown on the home screen.
    pub fn quick_access(&self) -> Vec<&'a Product> {
        self.catalog
            .products()
            .iter()
            .take(config::QUICK_ACCESS_LIMIT)
            .collect()
    }

    /// Count products in the catalog.
    pub fn count(&self) -> usize {
        self.catalog.len()
    }
}
