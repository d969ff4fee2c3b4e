//! Row conversion helpers shared by the query modules.

use jiff::Timestamp;
use rusqlite::types::Type;

use crate::error::{LendError, Result};

/// Encodes an instant as microseconds since the Unix epoch.
pub(crate) fn to_micros(instant: Timestamp) -> i64 {
    instant.as_microsecond()
}

/// Truncates an instant to the precision the store keeps.
pub(crate) fn stored(instant: Timestamp) -> Result<Timestamp> {
    Timestamp::from_microsecond(to_micros(instant)).map_err(|e| {
        LendError::invalid_input("timestamp").with_reason(format!("{instant}: {e}"))
    })
}

/// Decodes a microsecond column back into an instant.
pub(crate) fn micros_column(idx: usize, micros: i64) -> rusqlite::Result<Timestamp> {
    Timestamp::from_microsecond(micros)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Integer, Box::new(e)))
}

/// Parses a text column with `FromStr`, reporting failures as conversion
/// errors on that column.
pub(crate) fn parsed_column<T>(idx: usize, raw: String) -> rusqlite::Result<T>
where
    T: std::str::FromStr<Err = String>,
{
    raw.parse::<T>().map_err(|msg| {
        rusqlite::Error::FromSqlConversionFailure(
            idx,
            Type::Text,
            Box::new(std::io::Error::new(std::io::ErrorKind::InvalidData, msg)),
        )
    })
}
