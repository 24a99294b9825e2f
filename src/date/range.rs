use super::partial::PartialDate;

/// Inclusive range between two partial dates.
///
/// Containment uses the wildcard comparison of [`PartialDate`], so
/// `DateRange::from_years(1950, 1960)` contains every date in 1960.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateRange {
    start: PartialDate,
    end: PartialDate,
}

impl DateRange {
    pub const fn new(start: PartialDate, end: PartialDate) -> Self {
        Self { start, end }
    }

    /// Range between two year-only dates.
    pub const fn from_years(start_year: i32, end_year: i32) -> Self {
        Self::new(
            PartialDate::from_year(start_year),
            PartialDate::from_year(end_year),
        )
    }

    #[inline]
    pub const fn start(&self) -> PartialDate {
        self.start
    }

    #[inline]
    pub const fn end(&self) -> PartialDate {
        self.end
    }

    /// Returns true if `date >= start && date <= end`.
    pub fn within(&self, date: &PartialDate) -> bool {
        *date >= self.start && *date <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_within_years() {
        let range = DateRange::new(PartialDate::from_year(1950), PartialDate::from_year(1960));

        assert!(range.within(&PartialDate::from_year(1955)));
        assert!(range.within(&PartialDate::from_year_month(1950, 5)));
        assert!(range.within(&PartialDate::from_ymd(1950, 1, 5)));
        assert!(range.within(&PartialDate::from_year_month(1959, 10)));
        assert!(range.within(&PartialDate::from_ymd(1959, 12, 29)));
        assert!(range.within(&PartialDate::from_ymd(1960, 12, 31)));
    }

    #[test]
    fn test_outside_years() {
        let range = DateRange::from_years(1950, 1960);

        assert!(!range.within(&PartialDate::from_year(1949)));
        assert!(!range.within(&PartialDate::from_ymd(1961, 1, 1)));
        assert_eq!(range.start().year(), 1950);
        assert_eq!(range.end().year(), 1960);
    }

    #[test]
    fn test_within_full_bounds() {
        let range = DateRange::new(
            PartialDate::from_ymd(2001, 3, 10),
            PartialDate::from_ymd(2001, 3, 20),
        );

        assert!(range.within(&PartialDate::from_ymd(2001, 3, 10)));
        assert!(!range.within(&PartialDate::from_ymd(2001, 3, 21)));
        // A year-only date collapses to equality with both bounds.
        assert!(range.within(&PartialDate::from_year(2001)));
    }
}
