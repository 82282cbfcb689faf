//! Text extraction from booking summaries and descriptions.
//!
//! Booking calendars describe a flight in two loosely structured fields:
//!
//! - SUMMARY, e.g. `"New York to Los Angeles - Flight AA 123"`
//! - DESCRIPTION, a multi-line block containing lines such as
//!   `"Departing: New York (JFK) 01/02/2020 8:00AM"`
//!
//! The patterns here pick out the pieces we need and nothing else.

use chrono::NaiveDateTime;
use lazy_static::lazy_static;
use regex::Regex;

use crate::domain::{Airline, AirlineCode, AirportCode, LocalTimeParts, Meridiem, ParseError};

/// Substring that marks a calendar entry as a flight booking.
pub const FLIGHT_MARKER: &str = " - Flight ";

/// Description line prefix for the departure leg.
pub const DEPARTING: &str = "Departing";

/// Description line prefix for the arrival leg.
pub const ARRIVING: &str = "Arriving";

lazy_static! {
    // Greedy prefix: the last "Flight " token in the summary wins.
    static ref SUMMARY: Regex = Regex::new(r"^.*Flight ([A-Z0-9]{2})? ([0-9]+)").unwrap();
    static ref AIRPORT: Regex = Regex::new(r"^.*\(([A-Z]{3})\)").unwrap();
    static ref LOCAL_TIME: Regex =
        Regex::new(r"^.*([0-9]{2})/([0-9]{2})/([0-9]{4}) ([0-9]{1,2}):([0-9]{2})([AP]M)").unwrap();
}

/// Whether a summary marks its entry as a flight.
pub fn is_flight_summary(summary: &str) -> bool {
    summary.contains(FLIGHT_MARKER)
}

/// Extract the airline designator and flight number from a summary.
///
/// A summary with no designator before the number (`"... - Flight  123"`)
/// yields [`Airline::Unknown`].
///
/// # Examples
///
/// ```
/// use kayak_trips::calendar::parse_summary;
/// use kayak_trips::domain::Airline;
///
/// let (airline, number) = parse_summary("NYC to LAX - Flight AA 123").unwrap();
/// assert_eq!(airline.as_str(), "AA");
/// assert_eq!(number, 123);
///
/// let (airline, number) = parse_summary("NYC to LAX - Flight  123").unwrap();
/// assert_eq!(airline, Airline::Unknown);
/// assert_eq!(number, 123);
/// ```
pub fn parse_summary(summary: &str) -> Result<(Airline, u32), ParseError> {
    let malformed = || ParseError::MalformedSummary {
        summary: summary.to_string(),
    };

    let caps = SUMMARY.captures(summary).ok_or_else(malformed)?;

    let airline: Airline = caps
        .get(1)
        .map(|m| m.as_str().parse::<AirlineCode>())
        .transpose()
        .map_err(|_| malformed())?
        .into();

    let number = caps[2].parse::<u32>().map_err(|_| malformed())?;

    Ok((airline, number))
}

/// Find the first line starting with `prefix`.
///
/// Absence is not an error here; callers decide what a missing line means.
pub fn first_with_prefix<'a, I>(lines: I, prefix: &str) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    lines.into_iter().find(|line| line.starts_with(prefix))
}

/// Split a description into lines, tolerating CRLF endings.
pub fn description_lines(description: &str) -> impl Iterator<Item = &str> {
    description
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}

/// Extract the airport code and local departure/arrival time from a line.
///
/// The airport is the 3-letter code in parentheses; the time is
/// `MM/DD/YYYY H:MM` followed directly by `AM` or `PM`.
pub fn parse_description_line(line: &str) -> Result<(AirportCode, NaiveDateTime), ParseError> {
    let airport: AirportCode = AIRPORT
        .captures(line)
        .and_then(|caps| caps[1].parse().ok())
        .ok_or_else(|| ParseError::malformed_line(line, "no airport code in parentheses"))?;

    let caps = LOCAL_TIME
        .captures(line)
        .ok_or_else(|| ParseError::malformed_line(line, "no MM/DD/YYYY H:MMAM date and time"))?;

    let number = |i: usize| -> Result<u32, ParseError> {
        caps[i]
            .parse::<u32>()
            .map_err(|_| ParseError::malformed_line(line, "invalid number"))
    };

    let parts = LocalTimeParts {
        month: number(1)?,
        day: number(2)?,
        year: caps[3]
            .parse::<i32>()
            .map_err(|_| ParseError::malformed_line(line, "invalid year"))?,
        hour: number(4)?,
        minute: number(5)?,
        meridiem: Meridiem::parse(&caps[6])
            .ok_or_else(|| ParseError::malformed_line(line, "invalid meridiem"))?,
    };

    let local = parts
        .to_datetime()
        .map_err(|e| ParseError::malformed_line(line, e.reason()))?;

    Ok((airport, local))
}
