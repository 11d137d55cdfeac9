//! Ranking procedures and the smart dispatch entry point.

use crate::classify::QueryIntent;
use crate::error::{Error, Result};
use crate::model::Model;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// One ranked result with the display fields of the underlying item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub name: String,
    pub genre: String,
    pub year: i32,
    pub rating: f32,
}

impl From<&crate::item::CatalogItem> for Recommendation {
    fn from(item: &crate::item::CatalogItem) -> Self {
        Self {
            name: item.name.clone(),
            genre: item.genre.clone(),
            year: item.year,
            rating: item.rating,
        }
    }
}

/// Result of the smart dispatch: which path the query took and its ranked
/// list. `matched_title` is populated for title queries only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendations {
    pub mode: QueryIntent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_title: Option<String>,
    pub items: Vec<Recommendation>,
}

impl Model {
    /// Recommend items similar to a title, with fuzzy spelling tolerance.
    ///
    /// Returns the resolved catalog title together with up to `top_k`
    /// items ranked by cosine similarity, the matched item itself excluded.
    ///
    /// # Errors
    ///
    /// `Error::EmptyTitle` for an empty name, `Error::TitleNotFound` when no
    /// catalog name clears the fuzzy cutoff.
    pub fn recommend_by_title(
        &self,
        name: &str,
        top_k: usize,
    ) -> Result<(String, Vec<Recommendation>)> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::EmptyTitle);
        }

        let matched = self
            .matcher
            .nearest(name)
            .ok_or_else(|| Error::TitleNotFound(name.to_string()))?;
        // Resolve through the name index: duplicates collapse onto the
        // first occurrence. A custom matcher may return a name that is not
        // in the catalog; treat that as no match.
        let idx = self
            .name_index
            .get(&matched.name)
            .copied()
            .ok_or_else(|| Error::TitleNotFound(name.to_string()))?;

        let row = self.similarity.row(idx);
        let mut order: Vec<usize> = (0..row.len()).collect();
        // Stable sort: ties keep original catalog row order.
        order.sort_by(|&a, &b| row[b].partial_cmp(&row[a]).unwrap_or(Ordering::Equal));

        let items = order
            .into_iter()
            .filter(|&i| i != idx)
            .take(top_k)
            .map(|i| Recommendation::from(&self.items[i]))
            .collect();
        Ok((matched.name, items))
    }

    /// Recommend the highest-rated items whose genre field contains the
    /// token, case-insensitively. Substring containment on purpose: broader
    /// than the classifier's exact-token test.
    ///
    /// # Errors
    ///
    /// `Error::EmptyGenre` for an empty token, `Error::GenreNotFound` when
    /// nothing matches.
    pub fn recommend_by_genre(&self, genre: &str, top_k: usize) -> Result<Vec<Recommendation>> {
        let token = genre.trim().to_lowercase();
        if token.is_empty() {
            return Err(Error::EmptyGenre);
        }

        let mut matched: Vec<&crate::item::CatalogItem> = self
            .items
            .iter()
            .filter(|item| item.genre.to_lowercase().contains(&token))
            .collect();
        if matched.is_empty() {
            return Err(Error::GenreNotFound(genre.trim().to_string()));
        }

        sort_by_rating(&mut matched);
        matched.truncate(top_k);
        Ok(matched.into_iter().map(Recommendation::from).collect())
    }

    /// Recommend the highest-rated items released in a given year.
    ///
    /// # Errors
    ///
    /// `Error::InvalidYear` if `year` does not parse as an integer,
    /// `Error::YearNotFound` when no item matches.
    pub fn recommend_by_year(&self, year: &str, top_k: usize) -> Result<Vec<Recommendation>> {
        let year_int: i32 = year
            .trim()
            .parse()
            .map_err(|_| Error::InvalidYear(year.trim().to_string()))?;

        let mut matched: Vec<&crate::item::CatalogItem> = self
            .items
            .iter()
            .filter(|item| item.year == year_int)
            .collect();
        if matched.is_empty() {
            return Err(Error::YearNotFound(year_int));
        }

        sort_by_rating(&mut matched);
        matched.truncate(top_k);
        Ok(matched.into_iter().map(Recommendation::from).collect())
    }

    /// Classify `query` and delegate to the matching recommender.
    ///
    /// # Errors
    ///
    /// `Error::EmptyQuery` for empty input, plus whatever the delegate
    /// raises.
    pub fn recommend(&self, query: &str, top_k: usize) -> Result<Recommendations> {
        let q = query.trim();
        let mode = self.classify(q)?;

        let (matched_title, items) = match mode {
            QueryIntent::Year => (None, self.recommend_by_year(q, top_k)?),
            QueryIntent::Genre => (None, self.recommend_by_genre(q, top_k)?),
            QueryIntent::Title => {
                let (matched, items) = self.recommend_by_title(q, top_k)?;
                (Some(matched), items)
            }
        };

        Ok(Recommendations {
            mode,
            matched_title,
            items,
        })
    }
}

/// Stable descending sort by rating; ties keep original catalog order.
fn sort_by_rating(items: &mut [&crate::item::CatalogItem]) {
    items.sort_by(|a, b| b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal));
}
