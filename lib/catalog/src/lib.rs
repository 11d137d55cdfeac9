//! # dramarec Catalog
//!
//! CSV catalog loading and validation for the dramarec recommender.
//!
//! The loader is the data-contract front door: it checks that the required
//! columns exist, drops rows with missing or unusable required values and
//! hands the core a clean `Vec<CatalogItem>`. Unlike the core it is allowed
//! to log (dropped rows are reported at debug level).

mod loader;

pub use loader::{load_catalog, CatalogError, REQUIRED_COLUMNS};
