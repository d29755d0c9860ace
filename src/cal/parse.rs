//! Tolerant parsing of real-world timestamp strings.
//!
//! Station metadata and receiver logs spell the same instant in several
//! ways: a space or a `T` between date and time, seconds that may be
//! missing, fractional seconds of anywhere between one and nine digits,
//! and an optional trailing `Z`. This module normalises all of them into
//! a `LocalDateTime` by trying a small ordered list of patterns, where the
//! first pattern that matches the whole string wins.

use std::error::Error as ErrorTrait;
use std::fmt;
use std::str::FromStr;

use cal::datetime::{LocalDate, LocalTime, LocalDateTime, Month, Error as DateTimeError};


/// The accepted shapes, in the order they are attempted. The space in a
/// pattern matches either a literal space or a `T`; a trailing `Z` and a
/// fractional-second field are handled before matching.
const PATTERNS: &[&str] = &[
    "yyyy-mm-dd HH:MM:SS",
    "yyyy-mm-dd HH:MM",
    "yyyy-mm-dd",
];


/// Parses one of the recognised timestamp formats into a `LocalDateTime`.
///
/// Leading and trailing whitespace is ignored, as is a trailing `Z`: the
/// time is taken to already be in the intended frame, so no offset is
/// applied. A missing time component means midnight, and a missing
/// seconds field means zero seconds.
///
/// Fractional seconds are normalised rather than treated as separate
/// formats: exactly three digits are read as milliseconds, more than six
/// digits are truncated (not rounded) to six, and anything else is read
/// as a count of microseconds.
///
/// ### Examples
///
/// ```
/// use gtimes::{parse_flexible, DatePiece, TimePiece};
///
/// let when = parse_flexible("2023-08-25 14:30").unwrap();
/// assert_eq!(when.day(), 25);
/// assert_eq!(when.second(), 0);
///
/// let when = parse_flexible("2023-08-25T14:30:45.123456789Z").unwrap();
/// assert_eq!(when.microsecond(), 123_456);
/// ```
pub fn parse_flexible(input: &str) -> Result<LocalDateTime, Error> {
    let trimmed = input.trim();
    let bare = trimmed.strip_suffix('Z').unwrap_or(trimmed);

    let (head, microsecond) = match bare.find('.') {
        Some(dot) => {
            let microsecond = fraction_to_microseconds(&bare[dot + 1 ..])
                .ok_or(Error::Unrecognised)?;
            (&bare[..dot], Some(microsecond))
        },
        None => (bare, None),
    };

    for pattern in PATTERNS {

        // A fractional-second field is only meaningful after a seconds
        // field, so patterns without one are skipped when a fraction was
        // split off above.
        if microsecond.is_some() && !pattern.ends_with("SS") {
            continue;
        }

        if let Some(fields) = match_pattern(pattern, head) {
            return fields.into_datetime(microsecond.unwrap_or(0)).map_err(Error::Date);
        }
    }

    Err(Error::Unrecognised)
}

impl FromStr for LocalDateTime {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        parse_flexible(input)
    }
}


/// Normalises a fractional-second digit string (everything after the
/// decimal point) to a microsecond count, or `None` if the field isn’t a
/// run of one to nine digits.
fn fraction_to_microseconds(digits: &str) -> Option<i32> {
    if digits.is_empty() || digits.len() > 9 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    // Nanosecond-or-finer precision is discarded, not rounded.
    let digits = if digits.len() > 6 { &digits[..6] } else { digits };

    let value = digits.parse::<i32>().ok()?;
    Some(if digits.len() == 3 { value * 1000 } else { value })
}


/// The raw numeric fields of a matched pattern, before calendar
/// validation has happened.
#[derive(Default, Copy, Clone)]
struct Fields {
    year:   i64,
    month:  i8,
    day:    i8,
    hour:   i8,
    minute: i8,
    second: i8,
}

impl Fields {
    fn into_datetime(self, microsecond: i32) -> Result<LocalDateTime, DateTimeError> {
        let month = Month::from_one(self.month)?;
        let date = LocalDate::ymd(self.year, month, self.day)?;
        let time = LocalTime::hms_us(self.hour, self.minute, self.second, microsecond)?;
        Ok(LocalDateTime::new(date, time))
    }
}

/// Matches the input against one pattern, character for character. Every
/// field letter in the pattern must line up with a digit, a pattern space
/// matches a space or a `T`, and everything else must match exactly.
/// Returns the accumulated fields only when the entire input is consumed.
fn match_pattern(pattern: &str, input: &str) -> Option<Fields> {
    if pattern.len() != input.len() {
        return None;
    }

    let mut fields = Fields::default();

    for (expected, byte) in pattern.bytes().zip(input.bytes()) {
        match expected {
            b'y' | b'm' | b'd' | b'H' | b'M' | b'S' => {
                if !byte.is_ascii_digit() {
                    return None;
                }

                let digit = (byte - b'0') as i8;
                match expected {
                    b'y' => fields.year   = fields.year   * 10 + digit as i64,
                    b'm' => fields.month  = fields.month  * 10 + digit,
                    b'd' => fields.day    = fields.day    * 10 + digit,
                    b'H' => fields.hour   = fields.hour   * 10 + digit,
                    b'M' => fields.minute = fields.minute * 10 + digit,
                    _    => fields.second = fields.second * 10 + digit,
                }
            },
            b' ' => {
                if byte != b' ' && byte != b'T' {
                    return None;
                }
            },
            _ => {
                if byte != expected {
                    return None;
                }
            },
        }
    }

    Some(fields)
}


/// An error that can occur during flexible parsing. Both variants render
/// as “unable to parse”, but callers can tell a string that matched no
/// pattern apart from one whose calendar fields were out of range.
#[derive(PartialEq, Debug, Copy, Clone)]
pub enum Error {

    /// None of the known patterns matched the (normalised) input.
    Unrecognised,

    /// A pattern matched, but a calendar field was outside its valid
    /// Gregorian range.
    Date(DateTimeError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::Unrecognised    => write!(f, "unable to parse datetime string: no known pattern matched"),
            Error::Date(ref error) => write!(f, "unable to parse datetime string: {}", error),
        }
    }
}

impl ErrorTrait for Error {
    fn source(&self) -> Option<&(dyn ErrorTrait + 'static)> {
        match *self {
            Error::Unrecognised    => None,
            Error::Date(ref error) => Some(error),
        }
    }
}


#[cfg(test)]
mod test {
    pub(crate) use super::{parse_flexible, Error};
    pub(crate) use cal::datetime::{LocalDate, LocalTime, LocalDateTime, Month, Error as DateTimeError};

    fn datetime(year: i64, month: i8, day: i8, hour: i8, minute: i8, second: i8, microsecond: i32) -> LocalDateTime {
        LocalDateTime::new(
            LocalDate::ymd(year, Month::from_one(month).unwrap(), day).unwrap(),
            LocalTime::hms_us(hour, minute, second, microsecond).unwrap())
    }

    #[test]
    fn space_separated() {
        assert_eq!(parse_flexible("2023-08-25 14:30"),           Ok(datetime(2023, 8, 25, 14, 30,  0, 0)));
        assert_eq!(parse_flexible("2023-08-25 14:30:45"),        Ok(datetime(2023, 8, 25, 14, 30, 45, 0)));
        assert_eq!(parse_flexible("2023-08-25 14:30:45.123456"), Ok(datetime(2023, 8, 25, 14, 30, 45, 123_456)));
    }

    #[test]
    fn t_separated() {
        assert_eq!(parse_flexible("2023-08-25T14:30"),           Ok(datetime(2023, 8, 25, 14, 30,  0, 0)));
        assert_eq!(parse_flexible("2023-08-25T14:30:45"),        Ok(datetime(2023, 8, 25, 14, 30, 45, 0)));
        assert_eq!(parse_flexible("2023-08-25T14:30:45.123456"), Ok(datetime(2023, 8, 25, 14, 30, 45, 123_456)));
    }

    #[test]
    fn utc_suffix() {
        assert_eq!(parse_flexible("2023-08-25T14:30:45Z"), Ok(datetime(2023, 8, 25, 14, 30, 45, 0)));
        assert_eq!(parse_flexible("2023-08-25T14:30Z"),    Ok(datetime(2023, 8, 25, 14, 30,  0, 0)));
    }

    #[test]
    fn milliseconds() {
        assert_eq!(parse_flexible("2023-08-25T14:30:45.123"),  Ok(datetime(2023, 8, 25, 14, 30, 45, 123_000)));
        assert_eq!(parse_flexible("2023-08-25T14:30:45.123Z"), Ok(datetime(2023, 8, 25, 14, 30, 45, 123_000)));
    }

    #[test]
    fn truncated_nanoseconds() {
        assert_eq!(parse_flexible("2023-08-25T14:30:45.123456789"), Ok(datetime(2023, 8, 25, 14, 30, 45, 123_456)));
    }

    #[test]
    fn short_fractions_are_microseconds() {
        assert_eq!(parse_flexible("2023-08-25T14:30:45.5"),     Ok(datetime(2023, 8, 25, 14, 30, 45, 5)));
        assert_eq!(parse_flexible("2023-08-25T14:30:45.12345"), Ok(datetime(2023, 8, 25, 14, 30, 45, 12_345)));
    }

    #[test]
    fn date_only() {
        assert_eq!(parse_flexible("2023-08-25"), Ok(datetime(2023, 8, 25, 0, 0, 0, 0)));
    }

    #[test]
    fn surrounding_whitespace() {
        assert_eq!(parse_flexible("  2023-08-25T14:30:45  "), Ok(datetime(2023, 8, 25, 14, 30, 45, 0)));
    }

    #[test]
    fn garbage() {
        assert_eq!(parse_flexible("invalid-date-format"), Err(Error::Unrecognised));
        assert_eq!(parse_flexible(""),                    Err(Error::Unrecognised));
        assert_eq!(parse_flexible("2023-08-25X14:30"),    Err(Error::Unrecognised));
        assert_eq!(parse_flexible("2023-08-25 14:30.5"),  Err(Error::Unrecognised));
    }

    #[test]
    fn fields_out_of_range() {
        assert_eq!(parse_flexible("2023-13-45 25:70:80"), Err(Error::Date(DateTimeError::OutOfRange)));
        assert_eq!(parse_flexible("2023-02-29 00:00:00"), Err(Error::Date(DateTimeError::OutOfRange)));
    }

    #[test]
    fn error_messages_are_distinguishable() {
        let unmatched = parse_flexible("garbled").unwrap_err().to_string();
        let invalid   = parse_flexible("2023-13-45 25:70:80").unwrap_err().to_string();

        assert!(unmatched.contains("unable to parse"));
        assert!(invalid.contains("unable to parse"));
        assert_ne!(unmatched, invalid);
    }
}
