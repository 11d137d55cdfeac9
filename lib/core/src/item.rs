use serde::{Deserialize, Serialize};

/// One catalog entry. Immutable once loaded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogItem {
    pub name: String,
    pub synopsis: String,
    pub cast: String,
    /// Comma-separated genre tags, e.g. "Drama, Life".
    pub genre: String,
    pub year: i32,
    pub rating: f32,
}

impl CatalogItem {
    #[inline]
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        synopsis: impl Into<String>,
        cast: impl Into<String>,
        genre: impl Into<String>,
        year: i32,
        rating: f32,
    ) -> Self {
        Self {
            name: name.into(),
            synopsis: synopsis.into(),
            cast: cast.into(),
            genre: genre.into(),
            year,
            rating,
        }
    }

    /// Combined text used for similarity: synopsis, genre and cast joined
    /// with single spaces, before normalization.
    #[must_use]
    pub fn feature_text(&self) -> String {
        format!("{} {} {}", self.synopsis, self.genre, self.cast)
    }
}
