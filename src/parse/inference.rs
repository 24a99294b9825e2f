//! Column type inference over a flat, row-major cell list.

use log::trace;

use crate::column_type::ColumnType;
use crate::date::partial::DatePrecision;
use crate::date::patterns::match_date_pattern;

/// Type signal of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellSignal {
    /// The cell has a date literal shape of the given precision.
    Date(DatePrecision),
    /// The cell contains an alphabetic character.
    String,
    /// The cell contains a `.`.
    Float,
    /// Anything else.
    Int,
}

/// Detect the type signal of a single cell. First match wins:
/// date literal, alphabetic character, `.`, otherwise integer.
pub fn detect_cell_signal(value: &str) -> CellSignal {
    let trimmed = value.trim();

    if let Some(dp) = match_date_pattern(trimmed) {
        return CellSignal::Date(dp.precision);
    }

    if trimmed.chars().any(char::is_alphabetic) {
        return CellSignal::String;
    }

    if trimmed.contains('.') {
        return CellSignal::Float;
    }

    CellSignal::Int
}

/// Running tally of the signals seen in one column.
#[derive(Debug, Clone, Copy, Default)]
struct SignalCounts {
    total: usize,
    strings: usize,
    floats: usize,
    dates: usize,
    dated_with_month: usize,
}

impl SignalCounts {
    fn add(&mut self, signal: CellSignal) {
        self.total += 1;
        match signal {
            CellSignal::Date(precision) => {
                self.dates += 1;
                if precision != DatePrecision::Year {
                    self.dated_with_month += 1;
                }
            }
            CellSignal::String => self.strings += 1,
            CellSignal::Float => self.floats += 1,
            CellSignal::Int => {}
        }
    }

    /// Reduce the tally to one column type.
    ///
    /// Any string makes the column STRING. A unanimous date column is DATE,
    /// as long as at least one cell carries a month; a column whose only date
    /// evidence is bare digits stays numeric. Any float makes the column
    /// FLOAT, otherwise INT.
    fn reduce(&self) -> ColumnType {
        if self.strings > 0 {
            ColumnType::String
        } else if self.dates == self.total && self.dated_with_month > 0 {
            ColumnType::Date
        } else if self.floats > 0 {
            ColumnType::Float
        } else {
            ColumnType::Int
        }
    }
}

/// Reduce a column's cell signals to one column type.
pub fn reduce_signals<I>(signals: I) -> ColumnType
where
    I: IntoIterator<Item = CellSignal>,
{
    let mut counts = SignalCounts::default();
    for signal in signals {
        counts.add(signal);
    }
    counts.reduce()
}

/// Infer one type per column from a flat, row-major cell list.
///
/// Cell `i` belongs to column `i % column_count`. Cells of an incomplete
/// last row still count towards their columns.
pub fn infer_column_types<S: AsRef<str>>(cells: &[S], column_count: usize) -> Vec<ColumnType> {
    if column_count == 0 {
        return Vec::new();
    }

    let mut counts = vec![SignalCounts::default(); column_count];
    for (i, cell) in cells.iter().enumerate() {
        counts[i % column_count].add(detect_cell_signal(cell.as_ref()));
    }

    counts
        .iter()
        .enumerate()
        .map(|(col_idx, c)| {
            let column_type = c.reduce();
            trace!(
                "Column {col_idx}: {} cell(s), {} string, {} float, {} date ({} with month) -> {column_type}",
                c.total, c.strings, c.floats, c.dates, c.dated_with_month
            );
            column_type
        })
        .collect()
}
