extern crate gtimes;

use gtimes::{LocalDate, LocalTime, LocalDateTime, Month, TimePiece};
use gtimes::yearf::{year_fraction, year_fractions, from_year_fraction, from_year_fractions};


fn datetime(year: i64, month: Month, day: i8, hour: i8, minute: i8, second: i8) -> LocalDateTime {
    LocalDateTime::new(
        LocalDate::ymd(year, month, day).unwrap(),
        LocalTime::hms(hour, minute, second).unwrap())
}

/// An instant rarely has an exact `f64` representation as a fraction of
/// a year, so round trips are compared at this many microseconds of
/// slack rather than bit-exactly.
const SLACK_US: i64 = 50;

fn total_microseconds(when: &LocalDateTime) -> i64 {
    when.unix_seconds() * 1_000_000 + i64::from(when.microsecond())
}


#[test]
fn new_years() {
    assert_eq!(year_fraction(&datetime(2020, Month::January, 1, 0, 0, 0)), 2020.0);
    assert_eq!(year_fraction(&datetime(1980, Month::January, 1, 0, 0, 0)), 1980.0);
}

#[test]
fn midpoints() {
    // Half of 2020's 366 days is day 184; half of 2021's 365 days is
    // noon on day 183. Both are the 2nd of July.
    assert_eq!(year_fraction(&datetime(2020, Month::July, 2,  0, 0, 0)), 2020.5);
    assert_eq!(year_fraction(&datetime(2021, Month::July, 2, 12, 0, 0)), 2021.5);
}

#[test]
fn back_from_a_fraction() {
    assert_eq!(from_year_fraction(2020.0).unwrap(), datetime(2020, Month::January, 1, 0, 0, 0));
    assert_eq!(from_year_fraction(2020.5).unwrap(), datetime(2020, Month::July,    2, 0, 0, 0));
    assert_eq!(from_year_fraction(2021.5).unwrap(), datetime(2021, Month::July,    2, 12, 0, 0));
}

#[test]
fn round_trips() {
    let samples = [
        datetime(1980, Month::January,   6,  0,  0,  0),
        datetime(1999, Month::December, 31, 23, 59, 59),
        datetime(2000, Month::February, 29, 12, 30,  0),
        datetime(2020, Month::January,   1,  0,  0,  0),
        datetime(2023, Month::August,   25, 14, 30, 45),
        datetime(2025, Month::April,    19,  9, 46, 50),
    ];

    for sample in samples.iter() {
        let there_and_back = from_year_fraction(year_fraction(sample)).unwrap();
        let error = (total_microseconds(&there_and_back) - total_microseconds(sample)).abs();
        assert!(error <= SLACK_US, "{:?} came back as {:?}", sample, there_and_back);
    }
}

#[test]
fn batch_conversion_preserves_order() {
    let quarters = [2020.0, 2020.25, 2020.5, 2020.75, 2021.0];

    let dates = from_year_fractions(&quarters).unwrap();
    assert_eq!(dates.len(), 5);
    assert_eq!(dates[0], datetime(2020, Month::January, 1,  0, 0, 0));
    assert_eq!(dates[1], datetime(2020, Month::April,   1, 12, 0, 0));
    assert_eq!(dates[2], datetime(2020, Month::July,    2,  0, 0, 0));
    assert_eq!(dates[4], datetime(2021, Month::January, 1,  0, 0, 0));

    assert_eq!(year_fractions(&dates), quarters.to_vec());
}

#[test]
fn batch_conversion_fails_fast() {
    assert!(from_year_fractions(&[2020.0, f64::NAN, 2021.0]).is_err());
    assert!(from_year_fractions(&[f64::INFINITY]).is_err());
}
