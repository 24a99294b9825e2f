//! csv-tabula: typed columnar tables from raw CSV text
//!
//! Parses a CSV document (header line + data) into a table with one
//! homogeneous column per header name, inferring each column's type from its
//! cells. Besides text and numbers, columns can hold partial dates: a year,
//! a year and month, or a full date, compared with wildcard semantics.
//!
//! # Quick Start
//!
//! ```
//! use csv_tabula::{parse_csv, ColumnType, PartialDate, Value};
//!
//! let table = parse_csv("Name,Born\nNaveen,03-29-1999\nGeorge,03-1999\nYarger,1992").unwrap();
//!
//! assert_eq!(table.column_count(), 2);
//! assert_eq!(table.row_count(), 3);
//! assert_eq!(table.columns()[1].column_type(), ColumnType::Date);
//! assert_eq!(
//!     table.get(0, "Born"),
//!     Some(Value::Date(PartialDate::from_ymd(1999, 3, 29)))
//! );
//! ```
//!
//! # Pipeline
//!
//! 1. The input must be at least 3 characters long and contain a comma and a
//!    line terminator.
//! 2. The first line is split on commas into column names; a trailing empty
//!    name is dropped.
//! 3. The rest is tokenized into a flat, row-major list of cells, honouring
//!    `"` and `'` quoting with doubled-quote escapes.
//! 4. Each cell gets a type signal (date literal, text, float, integer) and
//!    each column reduces its signals to one [`ColumnType`].
//! 5. Cells are converted round-robin into their column's storage.
//!
//! # Partial dates
//!
//! [`PartialDate`] comparison stops at the first component either side leaves
//! unspecified, so `1950 == 1950-05`. This is not a total order; see the type
//! documentation.
//!
//! ```
//! use csv_tabula::{DateRange, PartialDate};
//!
//! let range = DateRange::from_years(1950, 1960);
//! assert!(range.within(&PartialDate::from_ymd(1959, 12, 29)));
//! assert!(PartialDate::from_year(1950) <= PartialDate::from_year_month(1950, 5));
//! ```

mod column_type;
mod date;
mod encoding;
mod error;
mod parse;
mod reader;
mod schema;
mod table;
mod value;

// Re-export public API
pub use column_type::ColumnType;
pub use date::partial::{DatePrecision, MONTHS, PartialDate, SIMPLE_FORMAT, month_name};
pub use date::range::DateRange;
pub use error::{Result, TableError};
pub use reader::{MIN_INPUT_LEN, TableReader, parse_csv};
pub use schema::{Field, Schema};
pub use table::{Column, ColumnData, ColumnKey, Table};
pub use value::Value;

// Re-export the individual pipeline stages for advanced usage
pub use encoding::{EncodingInfo, decode_text, is_utf8};
pub use parse::header::{column_names, split_header};
pub use parse::inference::{CellSignal, detect_cell_signal, infer_column_types, reduce_signals};
pub use parse::tokenizer::{REPLACEMENT_SEQUENCES, repair_cells, split_cells, tokenize};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_api() {
        let table = TableReader::new().parse_str("when,n\n06-1995,1\n").unwrap();

        assert_eq!(table.columns()[0].column_type(), ColumnType::Date);
        assert_eq!(detect_cell_signal("06-1995"), CellSignal::Date(DatePrecision::Month));
        assert!(DateRange::from_years(1995, 1996).within(&PartialDate::from_year_month(1995, 6)));
        assert_eq!(table.get(0, 1), Some(Value::Int(1)));
    }

    #[test]
    fn test_parse_simple_csv() {
        let table = parse_csv("a,b,c\n1,2,3\n4,5,6\n").unwrap();

        assert_eq!(table.column_count(), 3);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.get(1, "c"), Some(Value::Int(6)));
    }

    #[test]
    fn test_pipeline_stages_compose() {
        let (header, block) = split_header("x,y\n1,2.5\n3,4");
        let names = column_names(header);
        let cells = tokenize(block);
        let types = infer_column_types(&cells, names.len());

        let mut table = Table::new("manual");
        table.add_columns(&types, &names);
        table.add_data(&cells).unwrap();

        assert_eq!(types, vec![ColumnType::Int, ColumnType::Float]);
        assert_eq!(table.get(1, "y"), Some(Value::Float(4.0)));
    }
}
