//! Flight collection built from a booking calendar.

use std::path::Path;

use icalendar::{Calendar, CalendarComponent};
use tracing::{debug, info};

use crate::domain::Flight;
use crate::dto::FlightJson;
use crate::feed::{FeedClient, FeedConfig, read_file};

use super::convert::{convert_entry, is_flight_entry};
use super::entry::CalendarEntry;
use super::error::CalendarError;

/// The flights found in one calendar.
///
/// Flights are held in source order until [`sort_by_departure`] is applied;
/// [`to_json`] always sorts first.
///
/// [`sort_by_departure`]: FlightCalendar::sort_by_departure
/// [`to_json`]: FlightCalendar::to_json
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlightCalendar {
    flights: Vec<Flight>,
}

impl FlightCalendar {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode iCalendar text and collect every flight booking in it.
    ///
    /// Non-flight entries (hotels, car rentals, ...) are skipped. The first
    /// flight entry that cannot be read fails the whole build.
    pub fn parse(ical: &str) -> Result<Self, CalendarError> {
        let calendar: Calendar = ical.parse().map_err(CalendarError::Decode)?;

        let events = calendar.components.iter().filter_map(|c| match c {
            CalendarComponent::Event(event) => Some(event),
            _ => None,
        });

        Self::from_entries(events)
    }

    /// Collect flights from already-decoded calendar entries.
    pub fn from_entries<'a, E, I>(entries: I) -> Result<Self, CalendarError>
    where
        E: CalendarEntry + 'a,
        I: IntoIterator<Item = &'a E>,
    {
        let mut calendar = Self::new();

        for (index, entry) in entries.into_iter().enumerate() {
            if !is_flight_entry(entry) {
                debug!(index, uid = entry.uid(), "skipping non-flight entry");
                continue;
            }

            let flight = convert_entry(entry).map_err(|source| CalendarError::Entry {
                index,
                uid: entry.uid().map(str::to_string),
                summary: entry.summary().unwrap_or_default().to_string(),
                source,
            })?;

            debug!(index, flight = %flight, "parsed flight");
            calendar.add_flight(flight);
        }

        info!(flights = calendar.len(), "built flight calendar");
        Ok(calendar)
    }

    /// Read and parse a calendar file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CalendarError> {
        let text = read_file(path)?;
        let mut calendar = Self::parse(&text)?;
        calendar.sort_by_departure();
        Ok(calendar)
    }

    /// Fetch and parse a calendar feed URL.
    pub async fn from_url(url: &str) -> Result<Self, CalendarError> {
        let client = FeedClient::new(FeedConfig::url(url))?;
        let text = client.fetch().await?;
        Self::parse(&text)
    }

    /// Append a flight, keeping source order.
    pub fn add_flight(&mut self, flight: Flight) {
        self.flights.push(flight);
    }

    /// Order flights by UTC departure, earliest first.
    ///
    /// The sort is stable, so flights departing at the same instant keep
    /// their source order. Sorting again changes nothing.
    pub fn sort_by_departure(&mut self) -> &[Flight] {
        self.flights.sort_by_key(Flight::departure_time_utc);
        &self.flights
    }

    /// The flights in their current order.
    pub fn flights(&self) -> &[Flight] {
        &self.flights
    }

    pub fn into_flights(self) -> Vec<Flight> {
        self.flights
    }

    pub fn len(&self) -> usize {
        self.flights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    /// Output records in departure order.
    pub fn to_records(&mut self) -> Vec<FlightJson> {
        self.sort_by_departure()
            .iter()
            .map(FlightJson::from_flight)
            .collect()
    }

    /// Sort by departure and serialize as a pretty-printed JSON array.
    pub fn to_json(&mut self) -> Result<String, CalendarError> {
        Ok(serde_json::to_string_pretty(&self.to_records())?)
    }

    /// Sort by departure and serialize as a single-line JSON array.
    pub fn to_json_compact(&mut self) -> Result<String, CalendarError> {
        Ok(serde_json::to_string(&self.to_records())?)
    }
}
