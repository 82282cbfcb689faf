//! Airport wall-clock time handling.
//!
//! Booking descriptions give local times as "MM/DD/YYYY H:MM" on a 12-hour
//! clock with an "AM"/"PM" suffix. This module turns those components into
//! a `NaiveDateTime` with no timezone attached.

use chrono::{NaiveDate, NaiveDateTime};
use std::fmt;

/// Error returned when local time components do not form a valid instant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid local time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }

    /// Why the components were rejected.
    pub fn reason(&self) -> &'static str {
        self.reason
    }
}

/// Half of a 12-hour clock day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    /// Parse "AM" or "PM" (uppercase only, as bookings print them).
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "AM" => Some(Meridiem::Am),
            "PM" => Some(Meridiem::Pm),
            _ => None,
        }
    }
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Meridiem::Am => f.write_str("AM"),
            Meridiem::Pm => f.write_str("PM"),
        }
    }
}

/// Convert a 12-hour clock hour (1-12) to a 24-hour clock hour (0-23).
///
/// 12 AM is midnight (hour 0) and 12 PM is noon (hour 12).
///
/// # Examples
///
/// ```
/// use kayak_trips::domain::{Meridiem, to_24_hour};
///
/// assert_eq!(to_24_hour(2, Meridiem::Pm).unwrap(), 14);
/// assert_eq!(to_24_hour(12, Meridiem::Pm).unwrap(), 12);
/// assert_eq!(to_24_hour(12, Meridiem::Am).unwrap(), 0);
/// assert_eq!(to_24_hour(11, Meridiem::Am).unwrap(), 11);
/// assert!(to_24_hour(13, Meridiem::Pm).is_err());
/// ```
pub fn to_24_hour(hour: u32, meridiem: Meridiem) -> Result<u32, TimeError> {
    if !(1..=12).contains(&hour) {
        return Err(TimeError::new("hour must be 1-12"));
    }

    Ok(match (meridiem, hour) {
        (Meridiem::Am, 12) => 0,
        (Meridiem::Am, h) => h,
        (Meridiem::Pm, 12) => 12,
        (Meridiem::Pm, h) => h + 12,
    })
}

/// Components of a local date/time as printed in a booking description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalTimeParts {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub meridiem: Meridiem,
}

impl LocalTimeParts {
    /// Assemble the components into a wall-clock date/time.
    pub fn to_datetime(self) -> Result<NaiveDateTime, TimeError> {
        let hour = to_24_hour(self.hour, self.meridiem)?;
        if self.minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }

        let date = NaiveDate::from_ymd_opt(self.year, self.month, self.day)
            .ok_or_else(|| TimeError::new("no such calendar date"))?;

        date.and_hms_opt(hour, self.minute, 0)
            .ok_or_else(|| TimeError::new("invalid time of day"))
    }
}
