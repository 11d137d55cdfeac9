use dramarec_core::CatalogItem;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Columns that must be present in the dataset header.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "Name",
    "Synopsis",
    "Cast",
    "Year of release",
    "Genre",
    "Rating",
];

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Dataset not found at: {0}")]
    DatasetNotFound(PathBuf),

    #[error("Dataset is missing required columns: {missing:?}. Found columns: {found:?}")]
    MissingColumns {
        missing: Vec<String>,
        found: Vec<String>,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Load and validate a catalog CSV.
///
/// Rows with any required field empty, or with a year or rating that does
/// not parse, are dropped rather than failing the load. `Year of release`
/// accepts a float spelling such as `2021.0` and is coerced to an integer.
///
/// # Errors
///
/// `DatasetNotFound` if the file does not exist, `MissingColumns` if the
/// header lacks a required column, `Csv` for unreadable input.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Vec<CatalogItem>, CatalogError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(CatalogError::DatasetNotFound(path.to_path_buf()));
    }

    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();

    let mut columns = Vec::with_capacity(REQUIRED_COLUMNS.len());
    let mut missing = Vec::new();
    for name in REQUIRED_COLUMNS {
        match headers.iter().position(|h| h == name) {
            Some(idx) => columns.push(idx),
            None => missing.push(name.to_string()),
        }
    }
    if !missing.is_empty() {
        return Err(CatalogError::MissingColumns {
            missing,
            found: headers.iter().map(str::to_string).collect(),
        });
    }
    let [name_col, synopsis_col, cast_col, year_col, genre_col, rating_col]: [usize; 6] =
        columns.try_into().expect("six required columns");

    let mut items = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let record = record?;
        let field = |col: usize| record.get(col).unwrap_or("").trim();

        let name = field(name_col);
        let synopsis = field(synopsis_col);
        let cast = field(cast_col);
        let year_raw = field(year_col);
        let genre = field(genre_col);
        let rating_raw = field(rating_col);

        if [name, synopsis, cast, year_raw, genre, rating_raw]
            .iter()
            .any(|v| v.is_empty())
        {
            debug!(row = line + 2, "dropping row with missing required value");
            continue;
        }

        let Some(year) = parse_year(year_raw) else {
            debug!(row = line + 2, year = year_raw, "dropping row with unusable year");
            continue;
        };
        let Ok(rating) = rating_raw.parse::<f32>() else {
            debug!(row = line + 2, rating = rating_raw, "dropping row with unusable rating");
            continue;
        };

        items.push(CatalogItem::new(name, synopsis, cast, genre, year, rating));
    }

    Ok(items)
}

/// Coerce the year column to an integer, accepting a float spelling.
fn parse_year(raw: &str) -> Option<i32> {
    if let Ok(year) = raw.parse::<i32>() {
        return Some(year);
    }
    let as_float: f64 = raw.parse().ok()?;
    if as_float.fract() == 0.0 && (i32::MIN as f64..=i32::MAX as f64).contains(&as_float) {
        Some(as_float as i32)
    } else {
        None
    }
}
