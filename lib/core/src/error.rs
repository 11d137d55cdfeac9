use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Query must be non-empty")]
    EmptyQuery,

    #[error("Title must be non-empty")]
    EmptyTitle,

    #[error("Genre must be non-empty")]
    EmptyGenre,

    #[error("Year must be an integer, got '{0}'")]
    InvalidYear(String),

    #[error("No title close enough to '{0}', please check spelling")]
    TitleNotFound(String),

    #[error("No items found for genre '{0}'")]
    GenreNotFound(String),

    #[error("No items found for year {0}")]
    YearNotFound(i32),

    #[error("Cannot build a model from an empty catalog")]
    EmptyCatalog,
}

impl Error {
    /// True for errors meaning "the query was valid but matched nothing".
    #[inline]
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::TitleNotFound(_) | Error::GenreNotFound(_) | Error::YearNotFound(_)
        )
    }

    /// True for errors meaning "the query itself was unusable".
    #[inline]
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Error::EmptyQuery | Error::EmptyTitle | Error::EmptyGenre | Error::InvalidYear(_)
        )
    }
}
