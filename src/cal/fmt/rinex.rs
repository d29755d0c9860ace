//! RINEX filename templating.
//!
//! GNSS processing chains name their files by station and date, with a
//! handful of conventions layered on top of each other: the classic daily
//! observation file `reyk2370.23O`, hourly files with a session letter,
//! navigation and compressed variants. Rather than hard-coding each
//! convention, a `RinexFormat` is parsed once from a `%`-token pattern
//! and can then render any timestamp and station code.
//!
//! The tokens follow the spelling the conventions are usually written in:
//!
//! | token | replaced by                                        |
//! |-------|----------------------------------------------------|
//! | `%s`  | station code, lowercased, four characters          |
//! | `%S`  | station code, uppercased, four characters          |
//! | `%j`  | day of year, three digits                          |
//! | `%y`  | two-digit year                                     |
//! | `%Y`  | full year                                          |
//! | `%m`  | month, two digits                                  |
//! | `%d`  | day of month, two digits                           |
//! | `%H`  | hour, two digits                                   |
//! | `%M`  | minute, two digits                                 |
//! | `%a`  | hourly session letter, `a` for 00:00 through `x`   |
//! | `%%`  | a literal `%`                                      |
//!
//! Station codes shorter than four characters are padded with
//! underscores; longer ones are truncated.
//!
//! ### Examples
//!
//! ```
//! use gtimes::{LocalDate, LocalTime, LocalDateTime, Month, RinexFormat};
//!
//! let daily = RinexFormat::parse("%s%j0.%yO").unwrap();
//!
//! let when = LocalDateTime::new(
//!     LocalDate::ymd(2023, Month::August, 25).unwrap(),
//!     LocalTime::midnight());
//!
//! assert_eq!(daily.format(&when, "REYK"), "reyk2370.23O");
//! ```

use std::fmt;
use std::fmt::Write;
use std::str::CharIndices;

use pad::{PadStr, Alignment};

use cal::{DatePiece, TimePiece};


/// One directive of a parsed pattern.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Field<'a> {
    Literal(&'a str),

    Station,
    StationUpper,

    Yearday,
    YearOfCentury,
    Year,

    Month,
    Day,

    Hour,
    Minute,
    SessionLetter,
}

impl<'a> Field<'a> {
    fn format<T>(&self, when: &T, station: &str, buf: &mut String) where T: DatePiece + TimePiece {
        match *self {
            Field::Literal(s)     => buf.push_str(s),
            Field::Station        => buf.push_str(&station_code(station).to_lowercase()),
            Field::StationUpper   => buf.push_str(&station_code(station).to_uppercase()),
            Field::Yearday        => { let _ = write!(buf, "{:03}", when.yearday()); },
            Field::YearOfCentury  => { let _ = write!(buf, "{:02}", when.year_of_century()); },
            Field::Year           => { let _ = write!(buf, "{}", when.year()); },
            Field::Month          => { let _ = write!(buf, "{:02}", when.month() as usize); },
            Field::Day            => { let _ = write!(buf, "{:02}", when.day()); },
            Field::Hour           => { let _ = write!(buf, "{:02}", when.hour()); },
            Field::Minute         => { let _ = write!(buf, "{:02}", when.minute()); },
            Field::SessionLetter  => buf.push((b'a' + when.hour() as u8) as char),
        }
    }
}

/// Normalises a station identifier to the four characters RINEX names
/// have room for.
fn station_code(station: &str) -> String {
    station.pad(4, '_', Alignment::Left, true)
}


/// A parsed filename pattern, ready to render timestamps.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct RinexFormat<'a> {
    fields: Vec<Field<'a>>,
}

impl<'a> RinexFormat<'a> {

    /// Parses a `%`-token pattern. The literal parts of the result borrow
    /// from the input string, so no text is copied until formatting time.
    pub fn parse(input: &'a str) -> Result<Self, FormatError> {
        let mut parser = FormatParser::new(input);
        parser.parse_format_string()?;

        Ok(Self { fields: parser.fields })
    }

    /// Renders the filename for the given timestamp and station code.
    pub fn format<T>(&self, when: &T, station: &str) -> String where T: DatePiece + TimePiece {
        let mut buf = String::new();

        for field in &self.fields {
            field.format(when, station, &mut buf);
        }

        buf
    }
}


/// An error found while parsing a filename pattern.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum FormatError {

    /// A `%` was followed by a character that isn’t a known token.
    InvalidChar { c: char, pos: usize },

    /// The pattern ended with a bare `%`.
    TrailingPercent { pos: usize },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            FormatError::InvalidChar { c, pos }  => write!(f, "unknown filename token %{} at position {}", c, pos),
            FormatError::TrailingPercent { pos } => write!(f, "pattern ends with a bare % at position {}", pos),
        }
    }
}

impl ::std::error::Error for FormatError {
}


struct FormatParser<'a> {
    iter:   CharIndices<'a>,
    fields: Vec<Field<'a>>,
    input:  &'a str,
    anchor: Option<usize>,
}

impl<'a> FormatParser<'a> {
    fn new(input: &'a str) -> FormatParser<'a> {
        FormatParser {
            iter:   input.char_indices(),
            fields: Vec::new(),
            input,
            anchor: None,
        }
    }

    // The Literal fields are just slices of the original pattern string,
    // which shares a lifetime with the format object, requiring fewer
    // allocations. A run of ordinary characters is anchored at its first
    // one and collected into a single Literal when a `%` (or the end of
    // the pattern) is reached.

    fn collect_up_to_anchor(&mut self, position: Option<usize>) {
        if let Some(pos) = self.anchor {
            self.anchor = None;
            let text = match position {
                Some(new_pos) => &self.input[pos..new_pos],
                None          => &self.input[pos..],
            };
            self.fields.push(Field::Literal(text));
        }
    }

    fn parse_format_string(&mut self) -> Result<(), FormatError> {
        loop {
            match self.iter.next() {
                Some((new_pos, '%')) => {
                    self.collect_up_to_anchor(Some(new_pos));

                    let field = match self.iter.next() {
                        Some((_, 's'))   => Field::Station,
                        Some((_, 'S'))   => Field::StationUpper,
                        Some((_, 'j'))   => Field::Yearday,
                        Some((_, 'y'))   => Field::YearOfCentury,
                        Some((_, 'Y'))   => Field::Year,
                        Some((_, 'm'))   => Field::Month,
                        Some((_, 'd'))   => Field::Day,
                        Some((_, 'H'))   => Field::Hour,
                        Some((_, 'M'))   => Field::Minute,
                        Some((_, 'a'))   => Field::SessionLetter,
                        Some((pos, '%')) => Field::Literal(&self.input[pos ..= pos]),
                        Some((pos, c))   => return Err(FormatError::InvalidChar { c, pos }),
                        None             => return Err(FormatError::TrailingPercent { pos: new_pos }),
                    };

                    self.fields.push(field);
                },
                Some((pos, _)) => {
                    if self.anchor.is_none() {
                        self.anchor = Some(pos);
                    }
                },
                None => break,
            }
        }

        // Finally, collect any literal characters after the last token
        // that haven't been turned into a Literal field yet.
        self.collect_up_to_anchor(None);
        Ok(())
    }
}
