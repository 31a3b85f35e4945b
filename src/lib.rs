//! Nutriscan SDK for Rust.
//!
//! Provides a high-level client over a static product nutrition catalog:
//! barcode lookup, case-insensitive product search, simulated barcode
//! scanning, and a health score personalized by the user's dietary and
//! health preferences.
//!
//! # Quick start
//!
//! ```no_run
//! use nutriscan_sdk::{NutriscanSdk, UserPreferences};
//!
//! let sdk = NutriscanSdk::builder().build().unwrap();
//!
//! // Search by name or brand
//! let hits = sdk.products().search("cheerios");
//!
//! // Score a product for a diabetic user
//! let prefs = UserPreferences { diabetes: true, ..Default::default() };
//! let product = sdk.products().get(&hits[0].barcode).unwrap();
//! let score = sdk.score(product, &prefs);
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod queries;
pub mod scanner;
pub mod scoring;
pub mod session;

#[cfg(feature = "async")]
pub use async_client::AsyncNutriscanSdk;
pub use catalog::Catalog;
pub use error::{NutriscanError, Result};
pub use models::{Category, Ingredient, Nutrition, Preference, Product, SearchIndexEntry, UserPreferences};
pub use scanner::{ScanOutcome, ScanSimulator};
pub use scoring::{personalized_score, ScoreBand, ScoreBreakdown};
pub use session::{Session, View};

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use rand::Rng;

// ---------------------------------------------------------------------------
// NutriscanSdkBuilder
// ---------------------------------------------------------------------------

/// Where the builder reads seed data from.
#[derive(Debug, Clone)]
enum CatalogSource {
    Embedded,
    File(PathBuf),
    Json(String),
}

/// Builder for configuring and constructing a [`NutriscanSdk`] instance.
///
/// Use [`NutriscanSdk::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](NutriscanSdkBuilder::build) to create the SDK.
#[derive(Debug, Clone)]
pub struct NutriscanSdkBuilder {
    source: CatalogSource,
    scan_delay: Duration,
    rng_seed: Option<u64>,
}

impl Default for NutriscanSdkBuilder {
    fn default() -> Self {
        Self {
            source: CatalogSource::Embedded,
            scan_delay: config::DEFAULT_SCAN_DELAY,
            rng_seed: None,
        }
    }
}

impl NutriscanSdkBuilder {
    /// Load the catalog from a JSON seed file instead of the bundled data.
    pub fn catalog_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.source = CatalogSource::File(path.as_ref().to_path_buf());
        self
    }

    /// Load the catalog from an in-memory JSON document.
    pub fn catalog_json(mut self, json: impl Into<String>) -> Self {
        self.source = CatalogSource::Json(json.into());
        self
    }

    /// Set how long a simulated scan stays in the scanning state.
    ///
    /// Defaults to 2 seconds. Only the async client waits on it.
    pub fn scan_delay(mut self, delay: Duration) -> Self {
        self.scan_delay = delay;
        self
    }

    /// Seed the scan simulator for reproducible picks.
    ///
    /// Without a seed, scanners draw from OS entropy.
    pub fn rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    /// Build the SDK, loading and validating the catalog.
    ///
    /// Fails if the seed data cannot be read or parsed, or if it breaks a
    /// catalog invariant (duplicate barcode, dangling index entry, base score
    /// out of range).
    pub fn build(self) -> Result<NutriscanSdk> {
        let catalog = match self.source {
            CatalogSource::Embedded => Catalog::embedded()?,
            CatalogSource::File(path) => Catalog::from_json_file(path)?,
            CatalogSource::Json(raw) => Catalog::from_json_str(&raw)?,
        };
        Ok(NutriscanSdk {
            catalog,
            scan_delay: self.scan_delay,
            rng_seed: self.rng_seed,
        })
    }
}

// ---------------------------------------------------------------------------
// NutriscanSdk
// ---------------------------------------------------------------------------

/// The main entry point for the Nutriscan SDK.
///
/// Owns the immutable [`Catalog`] and exposes query interfaces as lightweight
/// borrowing wrappers. Holds no per-user state; preferences are passed into
/// each scoring call.
///
/// Created via [`NutriscanSdk::builder()`].
#[derive(Debug)]
pub struct NutriscanSdk {
    catalog: Catalog,
    scan_delay: Duration,
    rng_seed: Option<u64>,
}

impl NutriscanSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> NutriscanSdkBuilder {
        NutriscanSdkBuilder::default()
    }

    // -- Query accessors ---------------------------------------------------

    /// Access the product query interface (lookup, search, listing).
    pub fn products(&self) -> queries::products::ProductQuery<'_> {
        queries::products::ProductQuery::new(&self.catalog)
    }

    /// Access a scan simulator seeded from the builder's configuration.
    ///
    /// Each call returns a fresh simulator; with a fixed seed every one
    /// produces the same sequence of picks.
    pub fn scanner(&self) -> scanner::ScanSimulator<'_> {
        scanner::ScanSimulator::seeded(&self.catalog, self.rng_seed)
    }

    /// Access a scan simulator drawing from a caller-supplied random source.
    pub fn scanner_with_rng<R: Rng>(&self, rng: R) -> scanner::ScanSimulator<'_, R> {
        scanner::ScanSimulator::with_rng(&self.catalog, rng)
    }

    // -- Scoring -----------------------------------------------------------

    /// Personalized health score for `product`, in `[0.1, 5.0]`.
    pub fn score(&self, product: &Product, prefs: &UserPreferences) -> f64 {
        scoring::personalized_score(product, prefs)
    }

    /// Personalized score with each rule's contribution.
    pub fn score_breakdown(&self, product: &Product, prefs: &UserPreferences) -> ScoreBreakdown {
        ScoreBreakdown::compute(product, prefs)
    }

    /// Look up `barcode` and score it, or `None` if it is not in the catalog.
    pub fn score_barcode(&self, barcode: &str, prefs: &UserPreferences) -> Option<ScoreBreakdown> {
        self.catalog
            .get(barcode)
            .map(|p| ScoreBreakdown::compute(p, prefs))
    }

    // -- Metadata and utility methods --------------------------------------

    /// Start a fresh presentation session with every preference off.
    pub fn session(&self) -> Session {
        Session::new()
    }

    /// The configured simulated scan delay.
    pub fn scan_delay(&self) -> Duration {
        self.scan_delay
    }

    /// The configured scan seed, if any.
    pub fn rng_seed(&self) -> Option<u64> {
        self.rng_seed
    }

    /// Return a reference to the underlying [`Catalog`].
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for NutriscanSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "NutriscanSdk(products={}, indexed={}, scan_delay={}ms, seeded={})",
            self.catalog.len(),
            self.catalog.index().len(),
            self.scan_delay.as_millis(),
            self.rng_seed.is_some()
        )
    }
}
