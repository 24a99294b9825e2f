//! Compiled regex patterns for date literals.
//!
//! Patterns are anchored: a cell is a date literal only when the whole
//! (trimmed) text has one of these shapes.

use regex::Regex;

use super::partial::DatePrecision;

/// `MM-DD-YYYY`.
pub static DASHED_FULL_DATE: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(r"^(\d{1,2})-(\d{1,2})-(\d{4})$").expect("Invalid dashed full date pattern")
});

/// `MM/DD/YYYY`.
pub static SLASHED_FULL_DATE: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{4})$").expect("Invalid slashed full date pattern")
});

/// `MM-YYYY`.
pub static DASHED_MONTH_DATE: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(r"^(\d{1,2})-(\d{4})$").expect("Invalid dashed month date pattern")
});

/// `MM/YYYY`.
pub static SLASHED_MONTH_DATE: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(r"^(\d{1,2})/(\d{4})$").expect("Invalid slashed month date pattern")
});

/// A bare run of 1-5 digits, read as a year.
pub static BARE_YEAR: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"^(\d{1,5})$").expect("Invalid bare year pattern"));

/// A date literal shape together with the precision it yields.
pub struct DatePattern {
    pub pattern: &'static std::sync::LazyLock<Regex>,
    pub precision: DatePrecision,
}

/// Date patterns, most specific first.
static DATE_PATTERNS: std::sync::LazyLock<Vec<DatePattern>> = std::sync::LazyLock::new(|| {
    vec![
        DatePattern {
            pattern: &DASHED_FULL_DATE,
            precision: DatePrecision::Day,
        },
        DatePattern {
            pattern: &SLASHED_FULL_DATE,
            precision: DatePrecision::Day,
        },
        DatePattern {
            pattern: &DASHED_MONTH_DATE,
            precision: DatePrecision::Month,
        },
        DatePattern {
            pattern: &SLASHED_MONTH_DATE,
            precision: DatePrecision::Month,
        },
        DatePattern {
            pattern: &BARE_YEAR,
            precision: DatePrecision::Year,
        },
    ]
});

/// Get all date patterns, most specific first.
pub fn get_date_patterns() -> &'static [DatePattern] {
    &DATE_PATTERNS
}

/// Returns the first pattern matching `value`, if any.
pub fn match_date_pattern(value: &str) -> Option<&'static DatePattern> {
    get_date_patterns()
        .iter()
        .find(|dp| dp.pattern.is_match(value))
}
