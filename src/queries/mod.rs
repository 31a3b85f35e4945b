//! Query modules for the Nutriscan SDK.
//!
//! Each module provides a query struct that borrows from a
//! [`Catalog`](crate::catalog::Catalog) and exposes read-only lookups over
//! the static product data.

pub mod products;

pub use products::ProductQuery;
