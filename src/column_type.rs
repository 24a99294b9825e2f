use std::fmt;

/// Storage type of a table column.
///
/// Every cell of a column is converted into this one type when the table is
/// populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColumnType {
    /// No storage. Cells appended to such a column are discarded.
    #[default]
    None,
    /// Text, stored as-is.
    String,
    /// Floating point number.
    Float,
    /// Signed integer.
    Int,
    /// Calendar date with time of day.
    ///
    /// Never produced by inference; only reachable by declaring a column with
    /// this type directly.
    DateTime,
    /// Partial date (year, year + month, or full date).
    Date,
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnType::None => write!(f, "None"),
            ColumnType::String => write!(f, "String"),
            ColumnType::Float => write!(f, "Float"),
            ColumnType::Int => write!(f, "Int"),
            ColumnType::DateTime => write!(f, "DateTime"),
            ColumnType::Date => write!(f, "Date"),
        }
    }
}

impl ColumnType {
    /// Returns true if this type is numeric.
    #[inline]
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnType::Int | ColumnType::Float)
    }

    /// Returns true if this type is temporal.
    #[inline]
    pub fn is_temporal(&self) -> bool {
        matches!(self, ColumnType::Date | ColumnType::DateTime)
    }
}
