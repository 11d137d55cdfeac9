//! # dramarec
//!
//! A content-based K-drama recommender.
//!
//! dramarec builds a TF-IDF cosine-similarity model over a drama catalog's
//! descriptive text and answers free-form queries - a title (with fuzzy
//! spelling tolerance), a genre token or a four-digit release year.
//!
//! ## Quick Start
//!
//! ### As a CLI
//!
//! ```bash
//! cargo install dramarec
//! dramarec "Move to Heaven"
//! dramarec --data data/sample_kdrama.csv --topk 5 "2021"
//! ```
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use dramarec::prelude::*;
//!
//! let items = load_catalog("data/sample_kdrama.csv").unwrap();
//! let model = Model::build(items).unwrap();
//!
//! let result = model.recommend("romance", 10).unwrap();
//! for rec in &result.items {
//!     println!("{} ({}) - {}", rec.name, rec.year, rec.rating);
//! }
//! ```
//!
//! ## Crate Structure
//!
//! - [`dramarec-core`](https://docs.rs/dramarec-core) - model building,
//!   classification and the three ranking procedures
//! - [`dramarec-catalog`](https://docs.rs/dramarec-catalog) - CSV loading
//!   and required-column validation

// Re-export core types
pub use dramarec_core::{
    CatalogItem, EditDistanceMatcher, Error, Model, NameMatch, NameMatcher, QueryIntent,
    Recommendation, Recommendations, Result, SimilarityMatrix, FUZZY_CUTOFF,
};

// Re-export the loader
pub use dramarec_catalog::{load_catalog, CatalogError, REQUIRED_COLUMNS};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        load_catalog, CatalogError, CatalogItem, Error, Model, QueryIntent, Recommendation,
        Recommendations, Result,
    };
}

/// Text utilities used by the model build
pub mod text {
    pub use dramarec_core::text::{normalize, ENGLISH_STOP_WORDS};
}
