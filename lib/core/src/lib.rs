//! # dramarec Core
//!
//! Core engine for the dramarec content-based recommender.
//!
//! The crate builds an immutable [`Model`] from one catalog snapshot - a
//! TF-IDF similarity matrix over each item's descriptive text, a name index
//! and a fuzzy title matcher - then answers free-form queries by first
//! classifying them as a year, a genre token or a title.
//!
//! ## Example
//!
//! ```rust
//! use dramarec_core::{CatalogItem, Model, QueryIntent};
//!
//! let model = Model::build(vec![
//!     CatalogItem::new(
//!         "Move to Heaven",
//!         "Trauma cleaners uncover the stories of the departed",
//!         "Lee Je-hoon, Tang Jun-sang",
//!         "Drama, Life",
//!         2021,
//!         8.9,
//!     ),
//!     CatalogItem::new(
//!         "Signal",
//!         "Detectives across time solve cold cases with a radio",
//!         "Lee Je-hoon, Kim Hye-soo",
//!         "Thriller, Mystery",
//!         2016,
//!         9.0,
//!     ),
//! ])
//! .unwrap();
//!
//! let result = model.recommend("move to heaven", 10).unwrap();
//! assert_eq!(result.mode, QueryIntent::Title);
//! assert_eq!(result.matched_title.as_deref(), Some("Move to Heaven"));
//! ```

pub mod classify;
pub mod error;
pub mod fuzzy;
pub mod item;
pub mod model;
pub mod recommend;
pub mod similarity;
pub mod text;
pub mod tfidf;

pub use classify::QueryIntent;
pub use error::{Error, Result};
pub use fuzzy::{EditDistanceMatcher, NameMatch, NameMatcher, FUZZY_CUTOFF};
pub use item::CatalogItem;
pub use model::Model;
pub use recommend::{Recommendation, Recommendations};
pub use similarity::SimilarityMatrix;
pub use text::normalize;
pub use tfidf::{SparseVector, TfidfVectorizer};
