use std::fmt;

use crate::column_type::ColumnType;

/// Summary of a table: its name, columns and number of rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    /// Table name.
    pub name: String,
    /// One field per column, in column order.
    pub fields: Vec<Field>,
    /// Number of data rows (the longest column).
    pub num_rows: usize,
}

impl Schema {
    /// Create a new Schema instance.
    pub const fn new(name: String, fields: Vec<Field>, num_rows: usize) -> Self {
        Self {
            name,
            fields,
            num_rows,
        }
    }

    #[inline]
    pub fn column_count(&self) -> usize {
        self.fields.len()
    }

    /// Column names, in order.
    pub fn names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    /// Column types, in order.
    pub fn types(&self) -> Vec<ColumnType> {
        self.fields.iter().map(|f| f.column_type).collect()
    }
}

/// Name and type of one column.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Field {
    pub name: String,
    pub column_type: ColumnType,
}

impl Field {
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.column_type)
    }
}
