//! Query intent classification.

use crate::error::{Error, Result};
use crate::item::CatalogItem;
use ahash::AHashSet;
use serde::{Deserialize, Serialize};

/// What kind of lookup a raw query asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryIntent {
    Year,
    Genre,
    Title,
}

impl std::fmt::Display for QueryIntent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryIntent::Year => write!(f, "year"),
            QueryIntent::Genre => write!(f, "genre"),
            QueryIntent::Title => write!(f, "title"),
        }
    }
}

/// Distinct genre tokens across the catalog: each genre field split on
/// commas, trimmed and lowercased.
#[must_use]
pub fn distinct_genre_tokens(items: &[CatalogItem]) -> AHashSet<String> {
    items
        .iter()
        .flat_map(|item| item.genre.split(','))
        .map(|tok| tok.trim().to_lowercase())
        .filter(|tok| !tok.is_empty())
        .collect()
}

/// Decide the intent of `query`. First match wins: a four-digit query is a
/// year, an exact (lowercased) genre token is a genre, anything else is a
/// title. Empty input fails before classification.
pub(crate) fn classify(query: &str, genre_tokens: &AHashSet<String>) -> Result<QueryIntent> {
    let q = query.trim();
    if q.is_empty() {
        return Err(Error::EmptyQuery);
    }

    if q.len() == 4 && q.chars().all(|c| c.is_ascii_digit()) {
        return Ok(QueryIntent::Year);
    }

    if genre_tokens.contains(&q.to_lowercase()) {
        return Ok(QueryIntent::Genre);
    }

    Ok(QueryIntent::Title)
}
