use std::io;
use thiserror::Error;

use crate::column_type::ColumnType;

/// Error type for CSV table construction.
#[derive(Error, Debug)]
pub enum TableError {
    /// IO error while reading the source text.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The input is too short to hold a header and any data.
    #[error("CSV data is too short ({len} character(s), at least 3 required)")]
    InputTooShort { len: usize },

    /// The input contains no comma at all.
    #[error("CSV data contains no commas")]
    NoDelimiterFound,

    /// The input contains no line terminator, so there is no header line.
    #[error("CSV data contains no line terminators (and therefore no header)")]
    NoRowSeparatorFound,

    /// Data cells were supplied to a table with no columns.
    #[error("CSV header defines no columns")]
    NoColumns,

    /// A cell routed to a numeric column could not be parsed.
    #[error("Cannot convert {value:?} in column {column:?} to {expected}")]
    NumericConversionFailed {
        value: String,
        column: String,
        expected: ColumnType,
    },

    /// A cell routed to a DATETIME column could not be parsed.
    #[error("Cannot convert {value:?} in column {column:?} to DateTime")]
    DateTimeConversionFailed { value: String, column: String },

    /// A date was formatted with an unknown format name.
    #[error("Unsupported date format: {0:?}")]
    UnsupportedFormatRequested(String),
}

/// Result type alias for table operations.
pub type Result<T> = std::result::Result<T, TableError>;
