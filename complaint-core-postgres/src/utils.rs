use complaint_core_db::utils::to_heapless;
use heapless::String as HeaplessString;
use sqlx::{postgres::PgRow, Row};
use std::error::Error;

/// Conversion from a database row into a model.
pub trait TryFromRow<R>: Sized {
    fn try_from_row(row: &R) -> Result<Self, Box<dyn Error + Send + Sync>>;
}

/// Reads a `VARCHAR(max_chars)` column into a bounded string of `N` bytes.
pub fn get_bounded_string<const N: usize>(
    row: &PgRow,
    col_name: &str,
    max_chars: usize,
) -> Result<HeaplessString<N>, Box<dyn Error + Send + Sync>> {
    let value: String = row.try_get(col_name)?;
    Ok(to_heapless(&value, col_name, max_chars)?)
}

/// Nullable variant of [`get_bounded_string`].
pub fn get_optional_bounded_string<const N: usize>(
    row: &PgRow,
    col_name: &str,
    max_chars: usize,
) -> Result<Option<HeaplessString<N>>, Box<dyn Error + Send + Sync>> {
    let value: Option<String> = row.try_get(col_name)?;
    Ok(value
        .map(|v| to_heapless(&v, col_name, max_chars))
        .transpose()?)
}
