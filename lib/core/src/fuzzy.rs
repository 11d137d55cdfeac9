//! Fuzzy title lookup.
//!
//! The matcher sits behind a narrow trait so a different algorithm (for
//! example a trigram index) can replace the edit-distance scan without
//! touching the recommenders.

use strsim::normalized_levenshtein;

/// Minimum similarity ratio for a fuzzy candidate to count as a match.
pub const FUZZY_CUTOFF: f64 = 0.6;

/// Best fuzzy candidate for a query.
#[derive(Debug, Clone, PartialEq)]
pub struct NameMatch {
    /// The name as it appears in the catalog.
    pub name: String,
    /// Catalog row of the candidate.
    pub row: usize,
    /// Similarity ratio in `[0, 1]`.
    pub score: f64,
}

/// Closest-name lookup over the catalog's display names.
pub trait NameMatcher: Send + Sync {
    /// Return the single best candidate at or above the cutoff, or `None`.
    fn nearest(&self, query: &str) -> Option<NameMatch>;
}

/// Linear scan scored by normalized Levenshtein ratio, case-insensitive.
#[derive(Debug, Clone)]
pub struct EditDistanceMatcher {
    /// `(lowercased name, display name)` per catalog row.
    names: Vec<(String, String)>,
    cutoff: f64,
}

impl EditDistanceMatcher {
    #[must_use]
    pub fn new<I, S>(names: I, cutoff: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names = names
            .into_iter()
            .map(|n| {
                let display = n.into();
                (display.to_lowercase(), display)
            })
            .collect();
        Self { names, cutoff }
    }
}

impl NameMatcher for EditDistanceMatcher {
    fn nearest(&self, query: &str) -> Option<NameMatch> {
        let q = query.trim().to_lowercase();
        let mut best: Option<(f64, usize)> = None;
        for (row, (lower, _)) in self.names.iter().enumerate() {
            let score = normalized_levenshtein(&q, lower);
            // Strict improvement keeps the first occurrence on ties.
            if score >= self.cutoff && best.map_or(true, |(b, _)| score > b) {
                best = Some((score, row));
            }
        }
        best.map(|(score, row)| NameMatch {
            name: self.names[row].1.clone(),
            row,
            score,
        })
    }
}
