//! GPS week and seconds-of-week conversion.
//!
//! GPS hardware counts time as a week number and the seconds elapsed
//! since that week began, where week zero began at midnight between
//! Saturday the 5th and Sunday the 6th of January, 1980. This module
//! converts between that pair and a `LocalDateTime` by exact Gregorian
//! day-counting, with no floating-point day accumulation that could
//! drift across centuries and no leap-second table. GPS time is treated
//! as a pure calendar transform, so published GPST values that include
//! the UTC leap-second offset will differ from these by that offset.

use std::error::Error as ErrorTrait;
use std::fmt;

use cal::{DatePiece, TimePiece};
use cal::datetime::{LocalDateTime, SECONDS_IN_DAY, MICROSECONDS_IN_SECOND};


/// Number of seconds in a GPS week.
pub const SECONDS_IN_WEEK: i64 = 7 * SECONDS_IN_DAY;

/// Number of days between the Unix epoch (1st January, 1970) and the GPS
/// epoch (6th January, 1980): ten years, two of which were leap years,
/// plus the five days into January.
const EPOCH_DAYS: i64 = 10 * 365 + 2 + 5;

/// The GPS epoch: midnight at the start of Sunday, 6th January, 1980,
/// the instant GPS week zero began.
pub fn epoch() -> LocalDateTime {
    LocalDateTime::at(EPOCH_DAYS * SECONDS_IN_DAY)
}


/// A **GPS time** is a week number and the seconds elapsed since the
/// start of that week.
///
/// Values of this type always hold a non-negative week and a
/// seconds-of-week in the range `0 .. 604800`: the constructors enforce
/// both, so converting back to a calendar timestamp can never fail. No
/// implicit week rollover happens anywhere: an out-of-range
/// seconds-of-week is the caller’s error, not a value in the next week.
#[derive(PartialEq, Clone, Copy)]
pub struct GpsTime {
    week: i64,
    sow: f64,
}

impl GpsTime {

    /// Creates a new GPS time from a week number and seconds-of-week,
    /// checking both ranges.
    ///
    /// ### Examples
    ///
    /// ```
    /// use gtimes::GpsTime;
    ///
    /// assert!(GpsTime::new(2086, 259200.0).is_ok());
    /// assert!(GpsTime::new(2086, 604800.0).is_err());
    /// assert!(GpsTime::new(-1, 0.0).is_err());
    /// ```
    pub fn new(week: i64, sow: f64) -> Result<Self, Error> {
        if week < 0 {
            return Err(Error::WeekOutOfRange(week));
        }

        // Written this way round so that a NaN fails the check too.
        if !(sow >= 0.0 && sow < SECONDS_IN_WEEK as f64) {
            return Err(Error::SowOutOfRange(sow));
        }

        Ok(Self { week, sow })
    }

    /// Computes the GPS time of the given calendar timestamp.
    ///
    /// The microsecond field survives into the fractional part of the
    /// seconds-of-week. Timestamps before the GPS epoch are outside the
    /// domain of GPS time and return an error rather than a negative
    /// week.
    ///
    /// ### Examples
    ///
    /// ```
    /// use gtimes::{GpsTime, LocalDateTime};
    ///
    /// let when = "2020-01-01T00:00:00".parse::<LocalDateTime>().unwrap();
    /// let gps = GpsTime::from_datetime(&when).unwrap();
    ///
    /// assert_eq!(gps.week(), 2086);
    /// assert_eq!(gps.sow(), 259200.0);
    /// ```
    pub fn from_datetime(when: &LocalDateTime) -> Result<Self, Error> {
        let days = when.date().days_since_unix_epoch() - EPOCH_DAYS;
        if days < 0 {
            return Err(Error::BeforeGpsEpoch);
        }

        // A GPS week begins on Sunday, so the weekday already cached on
        // the date is the day index into the week.
        let day_of_week = i64::from(when.weekday().days_from_sunday());
        let second_of_week = day_of_week * SECONDS_IN_DAY + when.time().to_seconds();
        let sow = second_of_week as f64
                + f64::from(when.microsecond()) / MICROSECONDS_IN_SECOND as f64;

        Ok(Self { week: days / 7, sow })
    }

    /// The week number: the count of whole weeks between the GPS epoch
    /// and this time.
    pub fn week(self) -> i64 {
        self.week
    }

    /// The seconds elapsed since the start of the week, including any
    /// sub-second fraction.
    pub fn sow(self) -> f64 {
        self.sow
    }

    /// Computes the calendar timestamp at this GPS time.
    ///
    /// The ranges enforced at construction mean this cannot fail, and the
    /// whole-second part of the calculation is integer arithmetic, so a
    /// round trip through `from_datetime` reproduces the original
    /// timestamp exactly at microsecond granularity.
    pub fn to_datetime(self) -> LocalDateTime {
        let whole = self.sow.floor();

        let mut seconds = EPOCH_DAYS * SECONDS_IN_DAY
                        + self.week * SECONDS_IN_WEEK
                        + whole as i64;

        // The fraction can round up to a full second.
        let mut microsecond = ((self.sow - whole) * MICROSECONDS_IN_SECOND as f64).round() as i64;
        if microsecond >= MICROSECONDS_IN_SECOND {
            seconds += 1;
            microsecond -= MICROSECONDS_IN_SECOND;
        }

        LocalDateTime::at_us(seconds, microsecond as i32)
    }
}

impl fmt::Debug for GpsTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "GpsTime({}w/{:.6}s)", self.week, self.sow)
    }
}


/// Converts a slice of calendar timestamps to GPS times, in order.
///
/// The conversion fails fast: the first timestamp before the GPS epoch
/// aborts the batch and returns its error, and no partial result is
/// handed out.
pub fn from_datetimes(dates: &[LocalDateTime]) -> Result<Vec<GpsTime>, Error> {
    dates.iter().map(GpsTime::from_datetime).collect()
}

/// Converts a slice of GPS times back to calendar timestamps, in order.
/// `GpsTime` values are range-checked at construction, so this direction
/// cannot fail.
pub fn to_datetimes(times: &[GpsTime]) -> Vec<LocalDateTime> {
    times.iter().map(|time| time.to_datetime()).collect()
}


/// An error arising from a value outside the domain of GPS time.
#[derive(PartialEq, Debug, Copy, Clone)]
pub enum Error {

    /// The timestamp is earlier than the GPS epoch, so it has no week
    /// number.
    BeforeGpsEpoch,

    /// A negative week number was supplied.
    WeekOutOfRange(i64),

    /// A seconds-of-week outside `0 .. 604800` was supplied.
    SowOutOfRange(f64),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::BeforeGpsEpoch       => write!(f, "timestamp is before the GPS epoch (1980-01-06)"),
            Error::WeekOutOfRange(week) => write!(f, "GPS week {} is negative", week),
            Error::SowOutOfRange(sow)   => write!(f, "seconds-of-week {} is outside the range 0..604800", sow),
        }
    }
}

impl ErrorTrait for Error {
}
