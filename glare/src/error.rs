//! Errors

use thiserror::Error;

/// Errors arising from parsing glare workflow rows.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum Error {
    /// A row did not have the expected number of whitespace-separated columns.
    #[error("expected {expected} columns, got {got}")]
    ColumnCount {
        /// Number of columns the row format defines.
        expected: usize,
        /// Number of columns found in the input.
        got: usize,
    },

    /// A column could not be parsed as a number.
    #[error("column {column} is not a number: '{value}'")]
    InvalidNumber {
        /// 1-based column index.
        column: usize,
        /// The offending text.
        value: String,
    },
}

/// Parses one whitespace-separated column.
///
/// * `value` - The column text.
/// * `index` - 1-based column index, for error reporting.
pub(crate) fn column<T: std::str::FromStr>(value: &str, index: usize) -> Result<T, Error> {
    value.parse().map_err(|_| Error::InvalidNumber {
        column: index,
        value: value.to_string(),
    })
}

/// Splits a row into exactly `expected` whitespace-separated columns.
///
/// * `row`      - The input row.
/// * `expected` - Number of columns the format defines.
pub(crate) fn columns(row: &str, expected: usize) -> Result<Vec<&str>, Error> {
    let cols: Vec<&str> = row.split_whitespace().collect();
    if cols.len() != expected {
        return Err(Error::ColumnCount {
            expected,
            got: cols.len(),
        });
    }
    Ok(cols)
}
