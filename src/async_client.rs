//! Async wrapper around [`NutriscanSdk`] for use in async runtimes (Tokio, etc.).
//!
//! Catalog queries and scoring are cheap and synchronous, so they are reached
//! through [`sdk()`](AsyncNutriscanSdk::sdk). What this wrapper adds is the
//! simulated scan: it holds the "scanning" state for the configured delay on
//! the Tokio timer, and drops any scan requested while one is pending.
//!
//! # Example
//!
//! ```no_run
//! use nutriscan_sdk::AsyncNutriscanSdk;
//!
//! #[tokio::main]
//! async fn main() {
//!     let sdk = AsyncNutriscanSdk::builder().build().await.unwrap();
//!
//!     if let Some(product) = sdk.scan().await.unwrap().product() {
//!         println!("scanned {}", product.name);
//!     }
//! }
//! ```

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::{NutriscanError, Result};
use crate::models::Product;
use crate::scanner::{pick_uniform, ScanOutcome};
use crate::{NutriscanSdk, NutriscanSdkBuilder};

// ---------------------------------------------------------------------------
// AsyncNutriscanSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncNutriscanSdk`] instance.
#[derive(Default)]
pub struct AsyncNutriscanSdkBuilder {
    inner: NutriscanSdkBuilder,
}

impl AsyncNutriscanSdkBuilder {
    /// Load the catalog from a JSON seed file.
    pub fn catalog_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.inner = self.inner.catalog_path(path);
        self
    }

    /// Load the catalog from an in-memory JSON document.
    pub fn catalog_json(mut self, json: impl Into<String>) -> Self {
        self.inner = self.inner.catalog_json(json);
        self
    }

    /// Set how long a scan waits before resolving.
    pub fn scan_delay(mut self, delay: Duration) -> Self {
        self.inner = self.inner.scan_delay(delay);
        self
    }

    /// Seed the scan random source.
    pub fn rng_seed(mut self, seed: u64) -> Self {
        self.inner = self.inner.rng_seed(seed);
        self
    }

    /// Build the async SDK.
    ///
    /// Catalog loading may read from disk, so it runs on the blocking
    /// thread pool.
    pub async fn build(self) -> Result<AsyncNutriscanSdk> {
        let inner = self.inner;
        let sdk = tokio::task::spawn_blocking(move || inner.build())
            .await
            .map_err(|e| NutriscanError::InvalidArgument(format!("Task join error: {e}")))??;
        Ok(AsyncNutriscanSdk::new(sdk))
    }
}

// ---------------------------------------------------------------------------
// AsyncNutriscanSdk
// ---------------------------------------------------------------------------

/// Async wrapper around [`NutriscanSdk`].
///
/// Cheap to clone; clones share the catalog, the random source and the
/// pending-scan flag.
#[derive(Clone)]
pub struct AsyncNutriscanSdk {
    inner: Arc<NutriscanSdk>,
    rng: Arc<Mutex<StdRng>>,
    pending: Arc<AtomicBool>,
}

impl AsyncNutriscanSdk {
    /// Create a new builder for configuring the async SDK.
    pub fn builder() -> AsyncNutriscanSdkBuilder {
        AsyncNutriscanSdkBuilder::default()
    }

    /// Wrap an already-built SDK.
    pub fn new(sdk: NutriscanSdk) -> Self {
        let rng = match sdk.rng_seed() {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            inner: Arc::new(sdk),
            rng: Arc::new(Mutex::new(rng)),
            pending: Arc::new(AtomicBool::new(false)),
        }
    }

    /// The wrapped synchronous SDK.
    pub fn sdk(&self) -> &NutriscanSdk {
        &self.inner
    }

    /// True while a scan is waiting out its delay.
    pub fn is_scanning(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }

    /// Simulate a barcode scan.
    ///
    /// Waits the configured delay, then resolves to a uniformly random
    /// catalog product. A call made while another scan is pending returns
    /// [`ScanOutcome::Ignored`] immediately.
    pub async fn scan(&self) -> Result<ScanOutcome<Product>> {
        if self.pending.swap(true, Ordering::AcqRel) {
            tracing::warn!("scan already in progress, ignoring request");
            return Ok(ScanOutcome::Ignored);
        }
        let _pending = PendingGuard(&self.pending);

        tokio::time::sleep(self.inner.scan_delay()).await;

        let mut rng = self
            .rng
            .lock()
            .map_err(|_| NutriscanError::InvalidArgument("scan RNG lock poisoned".into()))?;
        let product = pick_uniform(self.inner.catalog(), &mut *rng)?;
        Ok(ScanOutcome::Scanned(product.clone()))
    }
}

/// Clears the pending flag when the scan finishes or its future is dropped.
struct PendingGuard<'a>(&'a AtomicBool);

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
