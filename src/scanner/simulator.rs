//! Barcode scan simulator.
//!
//! There is no camera: a "scan" resolves to a uniformly random product from
//! the catalog. The random source is injected so callers can make scans
//! deterministic.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::catalog::Catalog;
use crate::error::{NutriscanError, Result};
use crate::models::Product;

/// Result of a scan request.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanOutcome<P> {
    /// The scan resolved to this product.
    Scanned(P),
    /// Another scan was still pending; this request was dropped.
    Ignored,
}

impl<P> ScanOutcome<P> {
    /// The scanned product, or `None` if the request was ignored.
    pub fn product(self) -> Option<P> {
        match self {
            ScanOutcome::Scanned(p) => Some(p),
            ScanOutcome::Ignored => None,
        }
    }

    /// True if the request was dropped because a scan was pending.
    pub fn is_ignored(&self) -> bool {
        matches!(self, ScanOutcome::Ignored)
    }
}

/// Simulates scanning barcodes against a borrowed catalog.
///
/// At most one scan is pending at a time: [`begin`](Self::begin) refuses to
/// start a second one until [`finish`](Self::finish) resolves the first.
pub struct ScanSimulator<'a, R: Rng = StdRng> {
    catalog: &'a Catalog,
    rng: R,
    pending: bool,
}

impl<'a> ScanSimulator<'a, StdRng> {
    /// Create a simulator seeded from `seed`, or from OS entropy when `None`.
    pub fn seeded(catalog: &'a Catalog, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(catalog, rng)
    }
}

impl<'a, R: Rng> ScanSimulator<'a, R> {
    /// Create a simulator drawing from the given random source.
    pub fn with_rng(catalog: &'a Catalog, rng: R) -> Self {
        Self {
            catalog,
            rng,
            pending: false,
        }
    }

    /// Mark a scan as started. Returns `false` if one is already pending.
    pub fn begin(&mut self) -> bool {
        if self.pending {
            tracing::warn!("scan already in progress, ignoring request");
            return false;
        }
        self.pending = true;
        true
    }

    /// True between [`begin`](Self::begin) and [`finish`](Self::finish).
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Resolve the pending scan to a random product.
    pub fn finish(&mut self) -> Result<&'a Product> {
        if !self.pending {
            return Err(NutriscanError::InvalidArgument(
                "no scan in progress".to_string(),
            ));
        }
        self.pending = false;
        pick_uniform(self.catalog, &mut self.rng)
    }

    /// Start and immediately resolve a scan.
    pub fn scan(&mut self) -> Result<ScanOutcome<&'a Product>> {
        if !self.begin() {
            return Ok(ScanOutcome::Ignored);
        }
        self.finish().map(ScanOutcome::Scanned)
    }

    /// Pick a random product without touching the pending state.
    pub fn pick(&mut self) -> Result<&'a Product> {
        pick_uniform(self.catalog, &mut self.rng)
    }
}

// ---------------------------------------------------------------------------
// Free-standing helpers
// ---------------------------------------------------------------------------

/// Uniform random pick over every product in the catalog.
pub fn pick_uniform<'a, R: Rng>(catalog: &'a Catalog, rng: &mut R) -> Result<&'a Product> {
    let products = catalog.products();
    if products.is_empty() {
        return Err(NutriscanError::NotFound(
            "catalog is empty, nothing to scan".to_string(),
        ));
    }
    let product = &products[rng.gen_range(0..products.len())];
    tracing::info!(barcode = %product.barcode, name = %product.name, "scan resolved");
    Ok(product)
}
