//! Partial date and date range behaviour through the public API

use csv_tabula::{DatePrecision, DateRange, PartialDate, TableError};

#[test]
fn test_ordering_across_components() {
    let start = PartialDate::from_ymd(1982, 8, 13);
    let day = PartialDate::from_ymd(1982, 8, 16);
    let month = PartialDate::from_ymd(1982, 9, 9);
    let year = PartialDate::from_ymd(1984, 4, 25);

    assert!(start < day);
    assert!(day > start);
    assert!(start < month);
    assert!(month > start);
    assert!(start < year);
    assert!(year > start);
}

#[test]
fn test_wildcard_ordering_collapses() {
    let year = PartialDate::from_year(1950);
    let month = PartialDate::from_year_month(1950, 5);

    assert!(year <= month);
    assert!(month <= year);
    assert!(!(year < month));
    assert!(!(month > year));
}

#[test]
fn test_range_within() {
    let range = DateRange::new(PartialDate::from_year(1950), PartialDate::from_year(1960));

    assert!(range.within(&PartialDate::from_year(1955)));
    assert!(range.within(&PartialDate::from_ymd(1959, 12, 29)));
    assert!(!range.within(&PartialDate::from_year(1961)));
    assert!(!range.within(&PartialDate::from_ymd(1949, 12, 31)));
}

#[test]
fn test_validity_and_parse_agree() {
    for text in ["1-2-2003", "12/2003", "2003", "99999"] {
        assert!(PartialDate::is_valid_date(text), "{text}");
    }
    for text in ["2003-01-02", "1.5", "abc", "123456", "1/2/03"] {
        assert!(!PartialDate::is_valid_date(text), "{text}");
        assert_eq!(PartialDate::parse(text).year(), 0);
    }

    assert_eq!(PartialDate::parse("12/2003").precision(), DatePrecision::Month);
    assert_eq!(PartialDate::parse("99999").year(), 99999);
}

#[test]
fn test_unsupported_format() {
    let date = PartialDate::from_ymd(2001, 8, 14);

    assert_eq!(date.format("Simple").unwrap(), "August 14, 2001");
    assert!(matches!(
        date.format("yyyy-MM-dd"),
        Err(TableError::UnsupportedFormatRequested(_))
    ));
}

#[test]
fn test_days_between_is_antisymmetric() {
    let a = PartialDate::from_ymd(1999, 3, 29);
    let b = PartialDate::from_ymd(2001, 8, 14);

    assert_eq!(
        PartialDate::days_between(&a, &b),
        -PartialDate::days_between(&b, &a)
    );
    assert_eq!(PartialDate::days_between(&a, &a), 0);
}
