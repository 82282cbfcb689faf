//! Booking calendar processing.
//!
//! Turns a decoded iCalendar feed into a [`FlightCalendar`]:
//!
//! 1. keep entries whose summary contains `" - Flight "`
//! 2. read airline and flight number from the summary
//! 3. read airports and local times from the "Departing"/"Arriving"
//!    description lines, and UTC times from DTSTART/DTEND
//! 4. sort by UTC departure and serialize

mod collection;
mod convert;
mod entry;
mod error;
mod parse;

pub use collection::FlightCalendar;
pub use convert::{convert_entry, is_flight_entry};
pub use entry::{CalendarEntry, to_utc};
pub use error::CalendarError;
pub use parse::{
    ARRIVING, DEPARTING, FLIGHT_MARKER, description_lines, first_with_prefix, is_flight_summary,
    parse_description_line, parse_summary,
};
