//! TF-IDF vectorization of normalized feature text.
//!
//! Weighting follows the common library defaults: raw term counts, smoothed
//! idf `ln((1 + n) / (1 + df)) + 1`, then per-document L2 normalization.
//! With unit-length vectors, cosine similarity reduces to a dot product.

use crate::text::is_stop_word;
use ahash::{AHashMap, AHashSet};

/// A sparse document vector. Entries are `(term index, weight)` with term
/// indices strictly ascending.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    entries: Vec<(u32, f32)>,
}

impl SparseVector {
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Dot product of two sparse vectors via a sorted merge walk.
    #[must_use]
    pub fn dot(&self, other: &SparseVector) -> f32 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.entries.len() && j < other.entries.len() {
            let (ti, vi) = self.entries[i];
            let (tj, vj) = other.entries[j];
            match ti.cmp(&tj) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += vi * vj;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }

    fn l2_normalize(&mut self) {
        let norm: f32 = self
            .entries
            .iter()
            .map(|(_, v)| v * v)
            .sum::<f32>()
            .sqrt();
        if norm > f32::EPSILON {
            let inv = 1.0 / norm;
            for (_, v) in &mut self.entries {
                *v *= inv;
            }
        }
    }
}

/// TF-IDF vectorizer fitted over one document collection.
///
/// The vocabulary is ordered alphabetically so term indices are
/// deterministic for a given catalog.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    vocabulary: AHashMap<String, u32>,
    idf: Vec<f32>,
}

impl TfidfVectorizer {
    /// Tokenize for vectorization: lowercase alphanumeric runs of length
    /// at least two, with stop words removed (again - normalization already
    /// removed them, which keeps the two stages independent).
    #[must_use]
    pub fn tokenize(text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(|c: char| !c.is_alphanumeric())
            .filter(|s| s.len() > 1)
            .filter(|s| !is_stop_word(s))
            .map(str::to_string)
            .collect()
    }

    /// Fit over `documents` and return the vectorizer together with one
    /// L2-normalized sparse vector per document.
    ///
    /// A document whose tokens all fall away yields a zero vector.
    #[must_use]
    pub fn fit_transform<S: AsRef<str>>(documents: &[S]) -> (Self, Vec<SparseVector>) {
        let token_lists: Vec<Vec<String>> = documents
            .iter()
            .map(|d| Self::tokenize(d.as_ref()))
            .collect();

        // Document frequency per term.
        let mut doc_freq: AHashMap<&str, u32> = AHashMap::new();
        for tokens in &token_lists {
            let mut seen: AHashSet<&str> = AHashSet::new();
            for tok in tokens {
                if seen.insert(tok.as_str()) {
                    *doc_freq.entry(tok.as_str()).or_insert(0) += 1;
                }
            }
        }

        let mut terms: Vec<&str> = doc_freq.keys().copied().collect();
        terms.sort_unstable();

        let n_docs = documents.len() as f32;
        let mut vocabulary = AHashMap::with_capacity(terms.len());
        let mut idf = Vec::with_capacity(terms.len());
        for (idx, term) in terms.iter().enumerate() {
            let df = doc_freq[term] as f32;
            vocabulary.insert((*term).to_string(), idx as u32);
            idf.push(((1.0 + n_docs) / (1.0 + df)).ln() + 1.0);
        }

        let vectorizer = Self { vocabulary, idf };
        let vectors = token_lists
            .iter()
            .map(|tokens| vectorizer.vectorize_tokens(tokens))
            .collect();
        (vectorizer, vectors)
    }

    fn vectorize_tokens(&self, tokens: &[String]) -> SparseVector {
        let mut counts: AHashMap<u32, f32> = AHashMap::new();
        for tok in tokens {
            if let Some(&idx) = self.vocabulary.get(tok.as_str()) {
                *counts.entry(idx).or_insert(0.0) += 1.0;
            }
        }

        let mut entries: Vec<(u32, f32)> = counts
            .into_iter()
            .map(|(idx, tf)| (idx, tf * self.idf[idx as usize]))
            .collect();
        entries.sort_unstable_by_key(|(idx, _)| *idx);

        let mut vector = SparseVector { entries };
        vector.l2_normalize();
        vector
    }

    /// Vectorize a document with the fitted vocabulary. Terms unseen at fit
    /// time are ignored.
    #[must_use]
    pub fn transform(&self, document: &str) -> SparseVector {
        self.vectorize_tokens(&Self::tokenize(document))
    }

    #[inline]
    #[must_use]
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }
}
