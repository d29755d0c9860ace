//! Rendering dates and times as text: ISO-style display adapters for the
//! calendar types, and the RINEX filename templating engine.

mod iso;
pub mod rinex;

pub use self::iso::{ISO, IsoDate, IsoTime, IsoDateTime};
