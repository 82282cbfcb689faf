//! Conversion from calendar entries to flight records.
//!
//! This module composes the text extractors into one [`Flight`] per
//! qualifying entry. Conversion is fail-fast: the first field that cannot
//! be read aborts the entry and no partial record is produced.

use crate::domain::{Endpoint, Flight, ParseError};

use super::entry::CalendarEntry;
use super::parse::{
    ARRIVING, DEPARTING, description_lines, first_with_prefix, is_flight_summary,
    parse_description_line, parse_summary,
};

/// Whether an entry is a flight booking.
///
/// Entries without a summary never qualify; a missing summary on a hotel or
/// car-rental booking is not an error.
pub fn is_flight_entry<E: CalendarEntry + ?Sized>(entry: &E) -> bool {
    entry.summary().map(is_flight_summary).unwrap_or(false)
}

/// Build a flight from one qualifying calendar entry.
pub fn convert_entry<E: CalendarEntry + ?Sized>(entry: &E) -> Result<Flight, ParseError> {
    let (airline, flight_number) = parse_summary(entry.summary()?)?;

    let departure_utc = entry.dtstart()?;
    let arrival_utc = entry.dtend()?;

    let description = entry.description()?;
    let leg = |prefix: &'static str| {
        let line = first_with_prefix(description_lines(&description), prefix)
            .ok_or(ParseError::MissingExpectedLine { prefix })?;
        parse_description_line(line)
    };

    let (departure_airport, departure_local) = leg(DEPARTING)?;
    let (arrival_airport, arrival_local) = leg(ARRIVING)?;

    Ok(Flight::new(
        airline,
        flight_number,
        Endpoint::new(departure_airport, departure_utc, departure_local),
        Endpoint::new(arrival_airport, arrival_utc, arrival_local),
    ))
}
