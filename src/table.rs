//! Typed columnar table.

use chrono::NaiveDateTime;
use foldhash::{HashMap, HashMapExt};
use log::warn;

use crate::column_type::ColumnType;
use crate::date::partial::PartialDate;
use crate::error::{Result, TableError};
use crate::schema::{Field, Schema};
use crate::value::{Value, parse_datetime};

/// Homogeneous storage of one column, chosen once from its [`ColumnType`].
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    /// Storage of a [`ColumnType::None`] column; holds nothing.
    Empty,
    Text(Vec<String>),
    Int(Vec<i64>),
    Float(Vec<f64>),
    DateTime(Vec<NaiveDateTime>),
    Date(Vec<PartialDate>),
}

impl ColumnData {
    /// Empty storage for `column_type`.
    pub fn for_type(column_type: ColumnType) -> Self {
        match column_type {
            ColumnType::None => ColumnData::Empty,
            ColumnType::String => ColumnData::Text(Vec::new()),
            ColumnType::Float => ColumnData::Float(Vec::new()),
            ColumnType::Int => ColumnData::Int(Vec::new()),
            ColumnType::DateTime => ColumnData::DateTime(Vec::new()),
            ColumnType::Date => ColumnData::Date(Vec::new()),
        }
    }

    pub fn column_type(&self) -> ColumnType {
        match self {
            ColumnData::Empty => ColumnType::None,
            ColumnData::Text(_) => ColumnType::String,
            ColumnData::Int(_) => ColumnType::Int,
            ColumnData::Float(_) => ColumnType::Float,
            ColumnData::DateTime(_) => ColumnType::DateTime,
            ColumnData::Date(_) => ColumnType::Date,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        match self {
            ColumnData::Empty => 0,
            ColumnData::Text(v) => v.len(),
            ColumnData::Int(v) => v.len(),
            ColumnData::Float(v) => v.len(),
            ColumnData::DateTime(v) => v.len(),
            ColumnData::Date(v) => v.len(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Value at `row`, or `None` past the end.
    pub fn get(&self, row: usize) -> Option<Value<'_>> {
        match self {
            ColumnData::Empty => None,
            ColumnData::Text(v) => v.get(row).map(|s| Value::Text(s)),
            ColumnData::Int(v) => v.get(row).copied().map(Value::Int),
            ColumnData::Float(v) => v.get(row).copied().map(Value::Float),
            ColumnData::DateTime(v) => v.get(row).copied().map(Value::DateTime),
            ColumnData::Date(v) => v.get(row).copied().map(Value::Date),
        }
    }
}

/// A named, typed column.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    data: ColumnData,
}

impl Column {
    /// Create an empty column.
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            data: ColumnData::for_type(column_type),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn column_type(&self) -> ColumnType {
        self.data.column_type()
    }

    #[inline]
    pub fn data(&self) -> &ColumnData {
        &self.data
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, row: usize) -> Option<Value<'_>> {
        self.data.get(row)
    }

    /// Convert `cell` into this column's type and append it.
    ///
    /// # Errors
    ///
    /// Fails when an INT, FLOAT or DATETIME column is given text that does
    /// not parse as such. STRING and DATE conversions never fail.
    pub fn push_cell(&mut self, cell: &str) -> Result<()> {
        match &mut self.data {
            ColumnData::Empty => {}
            ColumnData::Text(v) => v.push(cell.to_string()),
            ColumnData::Int(v) => {
                let parsed = cell
                    .trim()
                    .parse::<i64>()
                    .map_err(|_| numeric_error(cell, &self.name, ColumnType::Int))?;
                v.push(parsed);
            }
            ColumnData::Float(v) => {
                let parsed = cell
                    .trim()
                    .parse::<f64>()
                    .map_err(|_| numeric_error(cell, &self.name, ColumnType::Float))?;
                v.push(parsed);
            }
            ColumnData::DateTime(v) => {
                let parsed =
                    parse_datetime(cell).ok_or_else(|| TableError::DateTimeConversionFailed {
                        value: cell.to_string(),
                        column: self.name.clone(),
                    })?;
                v.push(parsed);
            }
            ColumnData::Date(v) => v.push(PartialDate::parse(cell)),
        }
        Ok(())
    }
}

fn numeric_error(cell: &str, column: &str, expected: ColumnType) -> TableError {
    TableError::NumericConversionFailed {
        value: cell.to_string(),
        column: column.to_string(),
        expected,
    }
}

/// Anything that can address a column of a [`Table`]: an index or a name.
pub trait ColumnKey {
    /// Resolve to a column index, or `None` when there is no such column.
    fn column_index(&self, table: &Table) -> Option<usize>;
}

impl ColumnKey for usize {
    fn column_index(&self, table: &Table) -> Option<usize> {
        (*self < table.column_count()).then_some(*self)
    }
}

impl ColumnKey for &str {
    fn column_index(&self, table: &Table) -> Option<usize> {
        table.column_index(self)
    }
}

impl ColumnKey for &String {
    fn column_index(&self, table: &Table) -> Option<usize> {
        table.column_index(self)
    }
}

/// A fixed-schema table of typed columns.
///
/// Columns are populated round-robin from a flat, row-major cell list, so a
/// table can end up with columns of uneven length; the row count is the
/// longest column.
#[derive(Debug, Clone, Default)]
pub struct Table {
    name: String,
    columns: Vec<Column>,
    /// First column index for each name.
    name_index: HashMap<String, usize>,
}

impl Table {
    /// Create a new table with no columns.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
            name_index: HashMap::new(),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Append an empty column.
    pub fn add_column(&mut self, column_type: ColumnType, name: impl Into<String>) {
        let column = Column::new(name, column_type);
        let index = self.columns.len();
        self.name_index
            .entry(column.name.clone())
            .or_insert(index);
        self.columns.push(column);
    }

    /// Append one column per `(type, name)` pair, in order.
    pub fn add_columns<S: AsRef<str>>(&mut self, types: &[ColumnType], names: &[S]) {
        if types.len() != names.len() {
            warn!(
                "Column type count ({}) does not match name count ({}); extra entries ignored",
                types.len(),
                names.len()
            );
        }
        for (column_type, name) in types.iter().zip(names) {
            self.add_column(*column_type, name.as_ref());
        }
    }

    /// Populate the table from a flat, row-major cell list. Cell `i` goes to
    /// column `i % column_count`.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::NoColumns`] if there are cells but no columns,
    /// or the first conversion error. Cells before the failing one have
    /// already been appended.
    pub fn add_data<S: AsRef<str>>(&mut self, cells: &[S]) -> Result<()> {
        if cells.is_empty() {
            return Ok(());
        }
        let column_count = self.columns.len();
        if column_count == 0 {
            return Err(TableError::NoColumns);
        }

        for (i, cell) in cells.iter().enumerate() {
            self.columns[i % column_count].push_cell(cell.as_ref())?;
        }
        Ok(())
    }

    #[inline]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Length of the longest column.
    pub fn row_count(&self) -> usize {
        self.columns.iter().map(Column::len).max().unwrap_or(0)
    }

    /// `row_count * column_count`; a capacity figure, not a count of
    /// present values.
    pub fn count(&self) -> usize {
        self.row_count() * self.column_count()
    }

    /// Index of the first column called `name`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.name_index.get(name).copied()
    }

    pub fn column<K: ColumnKey>(&self, key: K) -> Option<&Column> {
        key.column_index(self).map(|i| &self.columns[i])
    }

    /// First column called `name`.
    pub fn column_by_name(&self, name: &str) -> Option<&Column> {
        self.column(name)
    }

    /// Value at `row` in the column addressed by `key` (an index or a name).
    ///
    /// Returns `None` when the row or column is out of range, when no column
    /// has the name, or when the column is shorter than `row`.
    pub fn get<K: ColumnKey>(&self, row: usize, key: K) -> Option<Value<'_>> {
        if row >= self.row_count() {
            return None;
        }
        self.column(key)?.get(row)
    }

    /// All values of `row`, one entry per column.
    pub fn row(&self, row: usize) -> Option<Vec<Option<Value<'_>>>> {
        if row >= self.row_count() {
            return None;
        }
        Some(self.columns.iter().map(|c| c.get(row)).collect())
    }

    /// Iterate over rows in order.
    pub fn rows(&self) -> impl Iterator<Item = Vec<Option<Value<'_>>>> + '_ {
        (0..self.row_count()).map(move |r| self.columns.iter().map(|c| c.get(r)).collect())
    }

    /// Names and types of the columns.
    pub fn schema(&self) -> Schema {
        let fields = self
            .columns
            .iter()
            .map(|c| Field::new(c.name(), c.column_type()))
            .collect();
        Schema::new(self.name.clone(), fields, self.row_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn people() -> Table {
        let mut table = Table::new("people");
        table.add_columns(
            &[ColumnType::String, ColumnType::Int, ColumnType::Float],
            &["Name", "Age", "Rating"],
        );
        table
            .add_data(&["Joe", "78", "4.2", "Franklin", "62", " 9.3"])
            .unwrap();
        table
    }

    #[test]
    fn test_add_columns_allocates_storage() {
        let table = people();
        assert_eq!(table.column_count(), 3);
        assert_eq!(table.columns()[0].column_type(), ColumnType::String);
        assert!(matches!(table.columns()[1].data(), ColumnData::Int(v) if v == &vec![78, 62]));
        assert!(matches!(table.columns()[2].data(), ColumnData::Float(_)));
    }

    #[test]
    fn test_counts() {
        let table = people();
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.count(), 6);
        assert_eq!(table.name(), "people");
    }

    #[test]
    fn test_get_by_index_and_name() {
        let table = people();
        assert_eq!(table.get(0, 0), Some(Value::Text("Joe")));
        assert_eq!(table.get(1, 1), Some(Value::Int(62)));
        assert_eq!(table.get(1, "Rating"), Some(Value::Float(9.3)));
        let name = String::from("Name");
        assert_eq!(table.get(1, &name), Some(Value::Text("Franklin")));
    }

    #[test]
    fn test_get_out_of_range() {
        let table = people();
        assert_eq!(table.get(5, 1), None);
        assert_eq!(table.get(1, 7), None);
        assert_eq!(table.get(2, 0), None);
        assert_eq!(table.get(0, "Email"), None);
    }

    #[test]
    fn test_uneven_columns() {
        let mut table = Table::new("");
        table.add_columns(&[ColumnType::Int, ColumnType::Int], &["a", "b"]);
        table.add_data(&["1", "2", "3"]).unwrap();

        assert_eq!(table.row_count(), 2);
        assert_eq!(table.get(1, 0), Some(Value::Int(3)));
        assert_eq!(table.get(1, 1), None);
        assert_eq!(table.row(1), Some(vec![Some(Value::Int(3)), None]));
    }

    #[test]
    fn test_numeric_conversion_failure() {
        let mut table = Table::new("");
        table.add_columns(&[ColumnType::Int], &["n"]);
        let err = table.add_data(&["12", "x1"]).unwrap_err();
        assert!(matches!(
            err,
            TableError::NumericConversionFailed { ref value, ref column, expected: ColumnType::Int }
                if value == "x1" && column == "n"
        ));
    }

    #[test]
    fn test_empty_cell_in_int_column_fails() {
        let mut table = Table::new("");
        table.add_columns(&[ColumnType::Int], &["n"]);
        assert!(table.add_data(&[""]).is_err());
    }

    #[test]
    fn test_datetime_and_none_columns() {
        let mut table = Table::new("");
        table.add_columns(&[ColumnType::DateTime, ColumnType::None], &["when", "skip"]);
        table.add_data(&["2024-05-06 14:30:00", "ignored"]).unwrap();

        assert_eq!(table.row_count(), 1);
        assert!(table.get(0, "when").and_then(|v| v.as_datetime()).is_some());
        assert_eq!(table.get(0, "skip"), None);

        let err = table.add_data(&["yesterday"]).unwrap_err();
        assert!(matches!(err, TableError::DateTimeConversionFailed { .. }));
    }

    #[test]
    fn test_date_column() {
        let mut table = Table::new("");
        table.add_columns(&[ColumnType::Date], &["d"]);
        table.add_data(&["03-29-1999", "03-1999", "1992", "garbage"]).unwrap();

        assert_eq!(
            table.get(0, 0),
            Some(Value::Date(PartialDate::from_ymd(1999, 3, 29)))
        );
        assert_eq!(
            table.get(1, 0).and_then(|v| v.as_date()).map(|d| d.month()),
            Some(3)
        );
        assert_eq!(
            table.get(3, 0).and_then(|v| v.as_date()).map(|d| d.year()),
            Some(0)
        );
    }

    #[test]
    fn test_no_columns() {
        let mut table = Table::new("");
        assert!(matches!(table.add_data(&["a"]), Err(TableError::NoColumns)));
        assert!(table.add_data::<&str>(&[]).is_ok());
        assert_eq!(table.row_count(), 0);
    }

    #[test]
    fn test_duplicate_names_resolve_to_first() {
        let mut table = Table::new("");
        table.add_columns(&[ColumnType::String, ColumnType::String], &["x", "x"]);
        table.add_data(&["first", "second"]).unwrap();
        assert_eq!(table.get(0, "x"), Some(Value::Text("first")));
        assert_eq!(table.column_by_name("x").map(Column::name), Some("x"));
    }

    #[test]
    fn test_rows_and_schema() {
        let table = people();
        let rows: Vec<_> = table.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1][0], Some(Value::Text("Franklin")));

        let schema = table.schema();
        assert_eq!(schema.names(), vec!["Name", "Age", "Rating"]);
        assert_eq!(
            schema.types(),
            vec![ColumnType::String, ColumnType::Int, ColumnType::Float]
        );
        assert_eq!(schema.num_rows, 2);
    }
}
