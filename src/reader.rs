//! `TableReader` builder and the text-to-table pipeline.

use std::fs;
use std::io::Read;
use std::path::Path;

use log::debug;

use crate::column_type::ColumnType;
use crate::encoding::decode_text;
use crate::error::{Result, TableError};
use crate::parse::header::{column_names, split_header};
use crate::parse::inference::infer_column_types;
use crate::parse::tokenizer::{repair_cells, split_cells};
use crate::schema::{Field, Schema};
use crate::table::Table;

/// Minimum number of characters a CSV document must have.
pub const MIN_INPUT_LEN: usize = 3;

/// Builds typed tables from CSV text.
///
/// # Example
///
/// ```
/// use csv_tabula::{ColumnType, TableReader, Value};
///
/// let mut reader = TableReader::new();
/// reader.name("people");
///
/// let table = reader
///     .parse_str("Name,Age,Rating\nJoe,78,4.2\nFranklin,62,9.3")
///     .unwrap();
///
/// assert_eq!(table.name(), "people");
/// assert_eq!(table.row_count(), 2);
/// assert_eq!(table.columns()[1].column_type(), ColumnType::Int);
/// assert_eq!(table.get(1, "Age"), Some(Value::Int(62)));
/// ```
#[derive(Debug, Clone)]
pub struct TableReader {
    /// Name given to parsed tables.
    name: String,
    /// Map replacement sequences in cells back to `"`.
    repair_replacement_chars: bool,
    /// Detect and transcode non-UTF-8 byte input.
    transcode: bool,
}

impl Default for TableReader {
    fn default() -> Self {
        Self::new()
    }
}

/// Output of the text stages, before the table is materialised.
struct Prepared {
    names: Vec<String>,
    cells: Vec<String>,
    types: Vec<ColumnType>,
}

impl TableReader {
    /// Create a new TableReader with default settings.
    pub fn new() -> Self {
        Self {
            name: String::new(),
            repair_replacement_chars: true,
            transcode: true,
        }
    }

    /// Set the name of parsed tables.
    pub fn name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    /// Enable or disable mapping of replacement sequences back to `"`.
    pub fn repair_replacement_chars(&mut self, repair: bool) -> &mut Self {
        self.repair_replacement_chars = repair;
        self
    }

    /// Enable or disable encoding detection for byte input. When disabled,
    /// bytes are decoded as UTF-8 with malformed sequences replaced.
    pub fn transcode(&mut self, transcode: bool) -> &mut Self {
        self.transcode = transcode;
        self
    }

    /// Parse the CSV file at the given path.
    pub fn parse_path<P: AsRef<Path>>(&self, path: P) -> Result<Table> {
        let data = fs::read(path.as_ref())?;
        self.parse_bytes(&data)
    }

    /// Parse CSV data from a reader.
    pub fn parse_reader<R: Read>(&self, mut reader: R) -> Result<Table> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        self.parse_bytes(&data)
    }

    /// Parse CSV data from bytes, decoding them to text first.
    pub fn parse_bytes(&self, data: &[u8]) -> Result<Table> {
        let (text, info) = decode_text(data, self.transcode);
        debug!(
            "Decoded {} byte(s) as {} (bom: {}, transcoded: {}, lossy: {})",
            data.len(),
            info.encoding,
            info.has_bom,
            info.transcoded,
            info.lossy
        );
        self.parse_str(&text)
    }

    /// Parse CSV text into a typed table.
    ///
    /// The first line holds the column names. The rest is tokenized into
    /// cells, one type is inferred per column, and every cell is converted
    /// into its column's type.
    ///
    /// # Errors
    ///
    /// Fails on input shorter than 3 characters, input without a comma or
    /// without a line terminator, a header with no columns, and cells that
    /// cannot be converted to their column's numeric type.
    pub fn parse_str(&self, text: &str) -> Result<Table> {
        let prepared = self.prepare(text)?;

        let mut table = Table::new(self.name.clone());
        table.add_columns(&prepared.types, &prepared.names);
        table.add_data(&prepared.cells)?;

        debug!(
            "Built table {:?} with {} column(s) and {} row(s)",
            table.name(),
            table.column_count(),
            table.row_count()
        );
        Ok(table)
    }

    /// Run the text stages only and report the resulting schema, without
    /// converting any cell.
    pub fn infer_schema(&self, text: &str) -> Result<Schema> {
        let prepared = self.prepare(text)?;
        let column_count = prepared.names.len();
        if column_count == 0 && !prepared.cells.is_empty() {
            return Err(TableError::NoColumns);
        }

        let num_rows = if column_count == 0 {
            0
        } else {
            prepared.cells.len().div_ceil(column_count)
        };
        let fields = prepared
            .names
            .into_iter()
            .zip(prepared.types)
            .map(|(name, column_type)| Field::new(name, column_type))
            .collect();

        Ok(Schema::new(self.name.clone(), fields, num_rows))
    }

    fn prepare(&self, text: &str) -> Result<Prepared> {
        check_input(text)?;

        let (header, block) = split_header(text);
        let names = column_names(header);
        debug!("Header defines {} column(s): {:?}", names.len(), names);

        let mut cells = split_cells(block);
        if self.repair_replacement_chars {
            repair_cells(&mut cells);
        }
        debug!("Tokenized {} cell(s)", cells.len());

        let types = infer_column_types(&cells, names.len());
        debug!("Inferred column types: {:?}", types);

        Ok(Prepared {
            names,
            cells,
            types,
        })
    }
}

/// Reject input that cannot hold a header line and data.
fn check_input(text: &str) -> Result<()> {
    let len = text.chars().take(MIN_INPUT_LEN).count();
    if len < MIN_INPUT_LEN {
        return Err(TableError::InputTooShort { len });
    }
    if !text.contains(',') {
        return Err(TableError::NoDelimiterFound);
    }
    if !text.contains(['\n', '\r']) {
        return Err(TableError::NoRowSeparatorFound);
    }
    Ok(())
}

/// Parse CSV text with default settings.
///
/// Shorthand for `TableReader::new().parse_str(text)`.
pub fn parse_csv(text: &str) -> Result<Table> {
    TableReader::new().parse_str(text)
}
