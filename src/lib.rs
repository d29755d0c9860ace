#![crate_name = "gtimes"]
#![crate_type = "rlib"]
#![crate_type = "dylib"]

#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]

#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unused_qualifications)]
#![warn(unused_results)]

//! Library for [GPS time](https://crates.io/crates/gtimes) conversion,
//! fractional years, and the calendar arithmetic underneath them.
//!
//! The one canonical timestamp type is `LocalDateTime`: the flexible
//! string parser produces it, and the GPS week/seconds-of-week and
//! fractional-year converters translate it back and forth. Everything is
//! pure calendar arithmetic over immutable values, with no leap-second
//! tables, no time zones, and no state.
//!
//! # Examples
//!
//! ```
//! use gtimes::{parse_flexible, GpsTime};
//! use gtimes::yearf;
//!
//! let epoch = parse_flexible("1980-01-06 00:00:00").unwrap();
//! let gps = GpsTime::from_datetime(&epoch).unwrap();
//! assert_eq!(gps.week(), 0);
//! assert_eq!(gps.sow(), 0.0);
//!
//! let new_year = parse_flexible("2020-01-01").unwrap();
//! assert_eq!(yearf::year_fraction(&new_year), 2020.0);
//! ```

extern crate libc;
extern crate pad;

#[cfg(windows)]
extern crate winapi;

mod system;
mod util;

pub mod cal;
pub mod gps;
pub mod yearf;

pub use cal::{DatePiece, TimePiece};
pub use cal::datetime::{LocalDate, LocalTime, LocalDateTime, Month, Weekday, Year, Error};
pub use cal::parse::{parse_flexible, Error as ParseError};
pub use cal::fmt::ISO;
pub use cal::fmt::rinex::RinexFormat;
pub use cal::convenience;
pub use gps::GpsTime;
