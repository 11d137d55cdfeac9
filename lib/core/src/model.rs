//! The in-memory recommendation model.

use crate::classify::{self, QueryIntent};
use crate::error::{Error, Result};
use crate::fuzzy::{EditDistanceMatcher, NameMatcher, FUZZY_CUTOFF};
use crate::item::CatalogItem;
use crate::similarity::SimilarityMatrix;
use crate::text;
use crate::tfidf::TfidfVectorizer;
use ahash::{AHashMap, AHashSet};

/// One catalog snapshot with everything derived from it: the similarity
/// matrix, the name index, the genre token set and the fuzzy matcher.
///
/// A `Model` is read-only after `build`, so sharing it across threads needs
/// no locking. Reloading the catalog means building a new `Model` and
/// swapping references, never mutating a live one.
pub struct Model {
    pub(crate) items: Vec<CatalogItem>,
    pub(crate) similarity: SimilarityMatrix,
    /// Item name -> first row with that name. Later duplicates are not
    /// independently addressable.
    pub(crate) name_index: AHashMap<String, usize>,
    pub(crate) genre_tokens: AHashSet<String>,
    pub(crate) matcher: Box<dyn NameMatcher>,
}

impl Model {
    /// Build a model from one catalog snapshot.
    ///
    /// Normalizes each item's feature text, fits a TF-IDF vectorizer over
    /// the collection and computes the dense pairwise cosine matrix.
    ///
    /// # Errors
    ///
    /// `Error::EmptyCatalog` if `items` is empty.
    pub fn build(items: Vec<CatalogItem>) -> Result<Self> {
        let matcher = Box::new(EditDistanceMatcher::new(
            items.iter().map(|item| item.name.clone()),
            FUZZY_CUTOFF,
        ));
        Self::build_with_matcher(items, matcher)
    }

    /// Build with a caller-supplied fuzzy matcher, for swapping in a
    /// different closest-name algorithm.
    pub fn build_with_matcher(
        items: Vec<CatalogItem>,
        matcher: Box<dyn NameMatcher>,
    ) -> Result<Self> {
        if items.is_empty() {
            return Err(Error::EmptyCatalog);
        }

        let features: Vec<String> = items
            .iter()
            .map(|item| text::normalize(&item.feature_text()))
            .collect();
        let (_, vectors) = TfidfVectorizer::fit_transform(&features);
        let similarity = SimilarityMatrix::from_vectors(&vectors);

        let mut name_index = AHashMap::with_capacity(items.len());
        for (row, item) in items.iter().enumerate() {
            name_index.entry(item.name.clone()).or_insert(row);
        }

        let genre_tokens = classify::distinct_genre_tokens(&items);

        Ok(Self {
            items,
            similarity,
            name_index,
            genre_tokens,
            matcher,
        })
    }

    #[inline]
    #[must_use]
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn similarity(&self) -> &SimilarityMatrix {
        &self.similarity
    }

    /// Decide whether `query` is a year, a genre token or a title.
    ///
    /// # Errors
    ///
    /// `Error::EmptyQuery` for empty or whitespace-only input.
    pub fn classify(&self, query: &str) -> Result<QueryIntent> {
        classify::classify(query, &self.genre_tokens)
    }
}
