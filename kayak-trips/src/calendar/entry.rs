//! Typed access to decoded calendar entries.
//!
//! The `icalendar` crate decodes the container format; this module puts a
//! narrow, typed interface over its events so the flight builder never looks
//! properties up by name.

use std::borrow::Cow;

use chrono::{DateTime, TimeZone, Utc};
use icalendar::{CalendarDateTime, Component, DatePerhapsTime, Event};

use crate::domain::ParseError;

/// Named fields of one calendar entry that flight extraction relies on.
///
/// Each getter fails with [`ParseError::MissingField`] when the property is
/// absent, so callers get a precise error instead of an empty string.
pub trait CalendarEntry {
    /// The SUMMARY property.
    fn summary(&self) -> Result<&str, ParseError>;

    /// The DESCRIPTION property as plain text, line breaks included.
    fn description(&self) -> Result<Cow<'_, str>, ParseError>;

    /// The DTSTART property as an absolute instant.
    fn dtstart(&self) -> Result<DateTime<Utc>, ParseError>;

    /// The DTEND property as an absolute instant.
    fn dtend(&self) -> Result<DateTime<Utc>, ParseError>;

    /// The UID property, used only to identify failing entries.
    fn uid(&self) -> Option<&str> {
        None
    }
}

impl CalendarEntry for Event {
    fn summary(&self) -> Result<&str, ParseError> {
        self.get_summary().ok_or(ParseError::MissingField("summary"))
    }

    fn description(&self) -> Result<Cow<'_, str>, ParseError> {
        // TEXT escapes are already decoded by the calendar parser
        self.get_description()
            .map(Cow::Borrowed)
            .ok_or(ParseError::MissingField("description"))
    }

    fn dtstart(&self) -> Result<DateTime<Utc>, ParseError> {
        let value = self.get_start().ok_or(ParseError::MissingField("dtstart"))?;
        to_utc("dtstart", value)
    }

    fn dtend(&self) -> Result<DateTime<Utc>, ParseError> {
        let value = self.get_end().ok_or(ParseError::MissingField("dtend"))?;
        to_utc("dtend", value)
    }

    fn uid(&self) -> Option<&str> {
        self.get_uid()
    }
}

/// Resolve a DTSTART/DTEND value to UTC.
///
/// `Z` values are used as-is. Floating values carry no zone and are read as
/// UTC. `TZID` values are resolved through the IANA database. Date-only
/// values have no time of day and are rejected.
pub fn to_utc(field: &'static str, value: DatePerhapsTime) -> Result<DateTime<Utc>, ParseError> {
    match value {
        DatePerhapsTime::DateTime(CalendarDateTime::Utc(dt)) => Ok(dt),
        DatePerhapsTime::DateTime(CalendarDateTime::Floating(naive)) => Ok(naive.and_utc()),
        DatePerhapsTime::DateTime(CalendarDateTime::WithTimezone { date_time, tzid }) => {
            let tz: chrono_tz::Tz = tzid.parse().map_err(|_| ParseError::InvalidTimestamp {
                field,
                reason: format!("unknown timezone {tzid:?}"),
            })?;
            tz.from_local_datetime(&date_time)
                .single()
                .map(|dt| dt.with_timezone(&Utc))
                .ok_or_else(|| ParseError::InvalidTimestamp {
                    field,
                    reason: format!("{date_time} is ambiguous or skipped in {tzid}"),
                })
        }
        DatePerhapsTime::Date(date) => Err(ParseError::InvalidTimestamp {
            field,
            reason: format!("date {date} has no time of day"),
        }),
    }
}
