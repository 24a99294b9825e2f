//! Partial dates: a year, a year and month, or a full calendar date.

use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use regex::Captures;

use super::patterns::match_date_pattern;
use crate::error::{Result, TableError};

/// Month names indexed by month number. Index 0 (unknown month) is empty.
pub const MONTHS: [&str; 13] = [
    "",
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Name of the default (and only) date format.
pub const SIMPLE_FORMAT: &str = "Simple";

/// Returns the English name of `month`, or an empty string outside 1-12.
pub fn month_name(month: u32) -> &'static str {
    MONTHS.get(month as usize).copied().unwrap_or("")
}

/// How many calendar components of a [`PartialDate`] are known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatePrecision {
    /// Only the year is known.
    Year,
    /// Year and month are known.
    Month,
    /// Year, month and day are known.
    Day,
}

/// A date with one, two or three known components.
///
/// A month or day of `0` means "unspecified". Comparison is lexicographic
/// over `(year, month, day)` but stops and reports equality as soon as either
/// side leaves the next component unspecified, so `1950 == 1950-05 == 1950-05-03`.
///
/// This makes equality and ordering non-transitive across dates of mixed
/// precision (`1950-01 == 1950` and `1950 == 1950-02`, yet `1950-01 < 1950-02`).
/// For that reason `PartialDate` implements `PartialEq`/`PartialOrd` but not
/// `Eq`/`Ord`/`Hash`; sorting a mix of precisions gives no consistent order.
#[derive(Debug, Clone, Copy)]
pub struct PartialDate {
    year: i32,
    month: u32,
    day: u32,
}

impl PartialDate {
    /// Sentinel returned when text matches no date shape.
    pub const EPOCH: PartialDate = PartialDate::from_year(0);

    /// A date where only the year is known.
    pub const fn from_year(year: i32) -> Self {
        Self {
            year,
            month: 0,
            day: 0,
        }
    }

    /// A date where the year and month are known.
    pub const fn from_year_month(year: i32, month: u32) -> Self {
        Self {
            year,
            month,
            day: 0,
        }
    }

    /// A fully specified date.
    pub const fn from_ymd(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Month number, `0` when unspecified.
    #[inline]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Day of month, `0` when unspecified.
    #[inline]
    pub const fn day(&self) -> u32 {
        self.day
    }

    /// Returns how many components are known.
    pub const fn precision(&self) -> DatePrecision {
        if self.month == 0 {
            DatePrecision::Year
        } else if self.day == 0 {
            DatePrecision::Month
        } else {
            DatePrecision::Day
        }
    }

    /// Wildcard-aware comparison.
    ///
    /// Years always compare. Months compare only when both sides specify one,
    /// and days only when both sides specify one.
    pub fn compare(&self, other: &PartialDate) -> Ordering {
        if self.year != other.year {
            return self.year.cmp(&other.year);
        }
        if self.month == 0 || other.month == 0 {
            return Ordering::Equal;
        }
        if self.month != other.month {
            return self.month.cmp(&other.month);
        }
        if self.day == 0 || other.day == 0 {
            return Ordering::Equal;
        }
        self.day.cmp(&other.day)
    }

    /// Compares against a full calendar date. Only this date's unspecified
    /// components act as wildcards.
    pub fn compare_naive(&self, other: &NaiveDate) -> Ordering {
        if self.year != other.year() {
            return self.year.cmp(&other.year());
        }
        if self.month == 0 {
            return Ordering::Equal;
        }
        if self.month != other.month() {
            return self.month.cmp(&other.month());
        }
        if self.day == 0 {
            return Ordering::Equal;
        }
        self.day.cmp(&other.day())
    }

    /// Returns true if `value` has one of the recognised date literal shapes.
    pub fn is_valid_date(value: &str) -> bool {
        match_date_pattern(value.trim()).is_some()
    }

    /// Parses `MM-DD-YYYY`, `MM/DD/YYYY`, `MM-YYYY`, `MM/YYYY` or a bare
    /// 1-5 digit year.
    ///
    /// Text matching none of these yields [`PartialDate::EPOCH`].
    pub fn parse(value: &str) -> PartialDate {
        let value = value.trim();
        let Some(dp) = match_date_pattern(value) else {
            return Self::EPOCH;
        };
        let Some(caps) = dp.pattern.captures(value) else {
            return Self::EPOCH;
        };

        let parsed = match dp.precision {
            DatePrecision::Day => capture_num::<u32>(&caps, 1).and_then(|month| {
                let day = capture_num::<u32>(&caps, 2)?;
                let year = capture_num::<i32>(&caps, 3)?;
                Some(Self::from_ymd(year, month, day))
            }),
            DatePrecision::Month => capture_num::<u32>(&caps, 1).and_then(|month| {
                let year = capture_num::<i32>(&caps, 2)?;
                Some(Self::from_year_month(year, month))
            }),
            DatePrecision::Year => capture_num::<i32>(&caps, 1).map(Self::from_year),
        };

        parsed.unwrap_or(Self::EPOCH)
    }

    /// Formats the date.
    ///
    /// An empty format or `"Simple"` gives `"<MonthName> <day>, <year>"`, as in
    /// `"June 24, 1995"`. Partial dates leave that template and drop the
    /// unknown parts instead of printing a zero day: `"June 1995"`, `"1995"`.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::UnsupportedFormatRequested`] for any other format.
    pub fn format(&self, format: &str) -> Result<String> {
        if !format.is_empty() && format != SIMPLE_FORMAT {
            return Err(TableError::UnsupportedFormatRequested(format.to_string()));
        }
        Ok(self.simple_format())
    }

    fn simple_format(&self) -> String {
        match self.precision() {
            DatePrecision::Day => {
                format!("{} {}, {}", month_name(self.month), self.day, self.year)
            }
            DatePrecision::Month => format!("{} {}", month_name(self.month), self.year),
            DatePrecision::Year => self.year.to_string(),
        }
    }

    /// Day number of this date under the proleptic Gregorian transform.
    ///
    /// Months up to February (including an unknown month) count towards the
    /// previous year. Unknown days count as 0.
    pub fn day_number(&self) -> i64 {
        let (year, month) = if self.month <= 2 {
            (i64::from(self.year) - 1, i64::from(self.month) + 13)
        } else {
            (i64::from(self.year), i64::from(self.month) + 1)
        };
        (1461 * year).div_euclid(4) + (153 * month).div_euclid(5) + i64::from(self.day)
    }

    /// Signed number of days from `b` to `a`.
    pub fn days_between(a: &PartialDate, b: &PartialDate) -> i64 {
        a.day_number() - b.day_number()
    }
}

fn capture_num<T: FromStr>(caps: &Captures<'_>, index: usize) -> Option<T> {
    caps.get(index)?.as_str().parse().ok()
}

impl Default for PartialDate {
    fn default() -> Self {
        Self::EPOCH
    }
}

impl PartialEq for PartialDate {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl PartialOrd for PartialDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl PartialEq<NaiveDate> for PartialDate {
    fn eq(&self, other: &NaiveDate) -> bool {
        self.compare_naive(other) == Ordering::Equal
    }
}

impl PartialOrd<NaiveDate> for PartialDate {
    fn partial_cmp(&self, other: &NaiveDate) -> Option<Ordering> {
        Some(self.compare_naive(other))
    }
}

impl From<NaiveDate> for PartialDate {
    fn from(date: NaiveDate) -> Self {
        Self::from_ymd(date.year(), date.month(), date.day())
    }
}

impl From<NaiveDateTime> for PartialDate {
    fn from(datetime: NaiveDateTime) -> Self {
        Self::from(datetime.date())
    }
}

impl FromStr for PartialDate {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for PartialDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.simple_format())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let year = PartialDate::from_year(1951);
        assert_eq!(year.year(), 1951);
        assert_eq!(year.month(), 0);
        assert_eq!(year.precision(), DatePrecision::Year);

        let month = PartialDate::from_year_month(1965, 2);
        assert_eq!(month.year(), 1965);
        assert_eq!(month.month(), 2);
        assert_eq!(month.precision(), DatePrecision::Month);

        let full = PartialDate::from_ymd(1979, 4, 20);
        assert_eq!((full.year(), full.month(), full.day()), (1979, 4, 20));
        assert_eq!(full.precision(), DatePrecision::Day);
    }

    #[test]
    fn test_wildcard_comparison() {
        let year = PartialDate::from_year(1950);
        let month = PartialDate::from_year_month(1950, 5);

        assert!(year <= month);
        assert!(month <= year);
        assert!(year >= month);
        assert_eq!(year, month);
        assert_eq!(month, PartialDate::from_ymd(1950, 5, 17));
        assert_ne!(month, PartialDate::from_ymd(1950, 6, 17));
    }

    #[test]
    fn test_non_transitive_equality() {
        let jan = PartialDate::from_year_month(1950, 1);
        let feb = PartialDate::from_year_month(1950, 2);
        let year = PartialDate::from_year(1950);

        assert_eq!(jan, year);
        assert_eq!(year, feb);
        assert!(jan < feb);
    }

    #[test]
    fn test_compare_naive() {
        let naive = NaiveDate::from_ymd_opt(1982, 8, 13).unwrap();
        assert!(PartialDate::from_year(1982) == naive);
        assert!(PartialDate::from_year_month(1982, 7) < naive);
        assert!(PartialDate::from_ymd(1982, 8, 14) > naive);
        assert_eq!(PartialDate::from(naive), PartialDate::from_ymd(1982, 8, 13));
    }

    #[test]
    fn test_parse_shapes() {
        let date = PartialDate::parse("03-29-1999");
        assert_eq!((date.year(), date.month(), date.day()), (1999, 3, 29));

        let date = PartialDate::parse("3/1999");
        assert_eq!((date.year(), date.month(), date.day()), (1999, 3, 0));

        let date = PartialDate::parse(" 1992 ");
        assert_eq!((date.year(), date.month(), date.day()), (1992, 0, 0));
    }

    #[test]
    fn test_parse_unmatched_is_epoch() {
        let date = PartialDate::parse("not a date");
        assert_eq!((date.year(), date.month(), date.day()), (0, 0, 0));
        let date: PartialDate = "1999-03-29".parse().unwrap();
        assert_eq!(date.year(), 0);
    }

    #[test]
    fn test_format() {
        let date = PartialDate::from_ymd(1995, 6, 24);
        assert_eq!(date.to_string(), "June 24, 1995");
        assert_eq!(date.format("").unwrap(), "June 24, 1995");
        assert_eq!(date.format("Simple").unwrap(), "June 24, 1995");
        assert_eq!(PartialDate::from_year_month(1995, 6).to_string(), "June 1995");
        assert_eq!(PartialDate::from_year(1995).to_string(), "1995");
    }

    #[test]
    fn test_format_unsupported() {
        let err = PartialDate::from_ymd(1995, 6, 24).format("ISO").unwrap_err();
        assert!(matches!(err, TableError::UnsupportedFormatRequested(f) if f == "ISO"));
    }

    #[test]
    fn test_days_between() {
        let a = PartialDate::from_ymd(2000, 3, 1);
        let b = PartialDate::from_ymd(2000, 2, 28);
        // 2000 is a leap year
        assert_eq!(PartialDate::days_between(&a, &b), 2);
        assert_eq!(PartialDate::days_between(&b, &a), -2);

        let a = PartialDate::from_ymd(1996, 1, 1);
        let b = PartialDate::from_ymd(1995, 1, 1);
        assert_eq!(PartialDate::days_between(&a, &b), 365);
    }

    #[test]
    fn test_month_name() {
        assert_eq!(month_name(1), "January");
        assert_eq!(month_name(12), "December");
        assert_eq!(month_name(0), "");
        assert_eq!(month_name(13), "");
    }
}
