use std::fmt;

use cal::{DatePiece, TimePiece};
use cal::datetime::{LocalDate, LocalTime, LocalDateTime};
use util::RangeExt;


/// The **ISO** trait adapts a calendar value into something that displays
/// it in an ISO-8601-style textual form.
pub trait ISO<'a> {

    /// The display adapter for this type.
    type Output: fmt::Display;

    /// Wraps this value in its display adapter.
    fn iso(self) -> Self::Output;
}

impl<'a> ISO<'a> for &'a LocalDate {
    type Output = IsoDate<'a>;

    fn iso(self) -> IsoDate<'a> {
        IsoDate(self)
    }
}

impl<'a> ISO<'a> for &'a LocalTime {
    type Output = IsoTime<'a>;

    fn iso(self) -> IsoTime<'a> {
        IsoTime(self)
    }
}

impl<'a> ISO<'a> for &'a LocalDateTime {
    type Output = IsoDateTime<'a>;

    fn iso(self) -> IsoDateTime<'a> {
        IsoDateTime(self)
    }
}


/// Displays a date as `2023-08-25`. Years outside the range 0 to 9999
/// get an explicit sign and as many digits as they need.
#[derive(Copy, Clone)]
pub struct IsoDate<'a>(&'a LocalDate);

impl<'a> fmt::Display for IsoDate<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let year = self.0.year();
        if year.is_within(0 .. 9999) {
            write!(f, "{:04}-{:02}-{:02}", year, self.0.month() as usize, self.0.day())
        }
        else {
            write!(f, "{:+05}-{:02}-{:02}", year, self.0.month() as usize, self.0.day())
        }
    }
}


/// Displays a time as `14:30:45.123456`, always with all six microsecond
/// digits.
#[derive(Copy, Clone)]
pub struct IsoTime<'a>(&'a LocalTime);

impl<'a> fmt::Display for IsoTime<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}.{:06}", self.0.hour(), self.0.minute(), self.0.second(), self.0.microsecond())
    }
}


/// Displays a date-time as `2023-08-25T14:30:45.123456`.
#[derive(Copy, Clone)]
pub struct IsoDateTime<'a>(&'a LocalDateTime);

impl<'a> fmt::Display for IsoDateTime<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let date = self.0.date();
        let time = self.0.time();
        write!(f, "{}T{}", date.iso(), time.iso())
    }
}


impl fmt::Debug for LocalDate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LocalDate({})", self.iso())
    }
}

impl fmt::Debug for LocalTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LocalTime({})", self.iso())
    }
}

impl fmt::Debug for LocalDateTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LocalDateTime({})", self.iso())
    }
}
