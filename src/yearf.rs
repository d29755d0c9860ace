//! Fractional-year timestamps.
//!
//! Time-series work writes instants as a single real number whose integer
//! part is the calendar year and whose fractional part is how far through
//! that year the instant falls: noon on the 2nd of July, 2021 is exactly
//! `2021.5`. The fraction is scaled by the day count of that specific
//! year, 365 or 366, so the same calendar position in a leap and a
//! non-leap year maps to *different* fractions, and a fixed 365.25
//! divisor would quietly misplace every instant.

use std::error::Error as ErrorTrait;
use std::fmt;

use cal::{DatePiece, TimePiece};
use cal::datetime::{LocalDate, LocalDateTime, Year, SECONDS_IN_DAY, MICROSECONDS_IN_SECOND};


const MICROSECONDS_IN_DAY: i64 = SECONDS_IN_DAY * MICROSECONDS_IN_SECOND;

/// Years beyond this bound aren’t representable once the fraction is
/// scaled to microseconds, so they are rejected up front.
const YEAR_LIMIT: f64 = 1.0e9;


/// Computes the fractional-year value of the given timestamp.
///
/// Midnight on the 1st of January maps to exactly `year.0`; every other
/// instant adds its elapsed fraction of that particular year, leap-year
/// aware, with the time of day included down to the microsecond.
///
/// ### Examples
///
/// ```
/// use gtimes::yearf::year_fraction;
/// use gtimes::parse_flexible;
///
/// let new_year = parse_flexible("2020-01-01").unwrap();
/// assert_eq!(year_fraction(&new_year), 2020.0);
///
/// // 2021 is not a leap year, so its midpoint is noon on the 2nd of July.
/// let midpoint = parse_flexible("2021-07-02 12:00:00").unwrap();
/// assert_eq!(year_fraction(&midpoint), 2021.5);
/// ```
pub fn year_fraction(when: &LocalDateTime) -> f64 {
    let days_in_year = Year(when.year()).days_in_year() as f64;

    let day = (when.yearday() - 1) as f64;
    let second_of_day = when.time().to_seconds() as f64
                      + f64::from(when.microsecond()) / MICROSECONDS_IN_SECOND as f64;

    when.year() as f64 + (day + second_of_day / SECONDS_IN_DAY as f64) / days_in_year
}

/// Computes the calendar timestamp of the given fractional-year value.
///
/// The integer part selects the year, and the fraction is scaled by that
/// year’s own day count and rounded to the nearest microsecond. A round
/// trip through `year_fraction` reproduces the original instant to within
/// the precision an `f64` has at year magnitude, a few tens of
/// microseconds, rather than bit-exactly, since most sub-second instants
/// have no exact representation as a fraction of a year.
pub fn from_year_fraction(yearf: f64) -> Result<LocalDateTime, Error> {
    if !yearf.is_finite() || yearf.abs() >= YEAR_LIMIT {
        return Err(Error::Unrepresentable(yearf));
    }

    let year = yearf.floor() as i64;
    let year_length = Year(year).days_in_year() * MICROSECONDS_IN_DAY;

    // A fraction within rounding distance of 1.0 lands on the next New
    // Year; the day split below carries it over naturally.
    let microseconds = ((yearf - year as f64) * year_length as f64).round() as i64;
    let days = microseconds / MICROSECONDS_IN_DAY;
    let microsecond_of_day = microseconds % MICROSECONDS_IN_DAY;

    let jan_1 = LocalDate::yd(year, 1).map_err(|_| Error::Unrepresentable(yearf))?;
    let seconds = (jan_1.days_since_unix_epoch() + days) * SECONDS_IN_DAY
                + microsecond_of_day / MICROSECONDS_IN_SECOND;

    Ok(LocalDateTime::at_us(seconds, (microsecond_of_day % MICROSECONDS_IN_SECOND) as i32))
}


/// Computes the fractional-year values of a slice of timestamps, in
/// order. This direction cannot fail.
pub fn year_fractions(dates: &[LocalDateTime]) -> Vec<f64> {
    dates.iter().map(year_fraction).collect()
}

/// Computes the calendar timestamps of a slice of fractional-year values,
/// in order.
///
/// The conversion fails fast: the first unrepresentable value aborts the
/// batch and returns its error, and no partial result is handed out.
pub fn from_year_fractions(yearfs: &[f64]) -> Result<Vec<LocalDateTime>, Error> {
    yearfs.iter().map(|&yearf| from_year_fraction(yearf)).collect()
}


/// An error arising from a number that doesn’t denote a calendar instant.
#[derive(PartialEq, Debug, Copy, Clone)]
pub enum Error {

    /// The value is NaN, infinite, or too large in magnitude to name a
    /// representable year.
    Unrepresentable(f64),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::Unrepresentable(yearf) => write!(f, "{} does not denote a calendar instant", yearf),
        }
    }
}

impl ErrorTrait for Error {
}
