//! Dense pairwise cosine similarity matrix.

use crate::tfidf::SparseVector;

/// Square, symmetric, non-negative matrix of pairwise cosine similarities.
///
/// The diagonal is exactly 1 for items with a non-zero feature vector. An
/// all-zero vector has similarity 0 to everything, including itself, which
/// avoids dividing by a zero norm.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    n: usize,
    data: Vec<f32>,
}

impl SimilarityMatrix {
    /// Compute the full pairwise matrix. Vectors must be L2-normalized, so
    /// cosine similarity is their dot product. O(N^2) in the number of items.
    #[must_use]
    pub fn from_vectors(vectors: &[SparseVector]) -> Self {
        let n = vectors.len();
        let mut data = vec![0.0; n * n];

        for i in 0..n {
            if !vectors[i].is_zero() {
                data[i * n + i] = 1.0;
            }
            for j in (i + 1)..n {
                let sim = vectors[i].dot(&vectors[j]);
                data[i * n + j] = sim;
                data[j * n + i] = sim;
            }
        }

        Self { n, data }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.n
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Similarity of item `i` against every item, in catalog row order.
    #[inline]
    #[must_use]
    pub fn row(&self, i: usize) -> &[f32] {
        &self.data[i * self.n..(i + 1) * self.n]
    }

    #[inline]
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> f32 {
        self.data[i * self.n + j]
    }
}
