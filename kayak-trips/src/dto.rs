//! JSON output records.
//!
//! The serialized shape is fixed here rather than derived from the domain
//! type, so keys and their order stay stable if `Flight` changes.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::domain::{Airline, AirportCode, Flight};

/// Record kind tag emitted in every object.
const FLIGHT_TYPE: &str = "flight";

/// A flight as written to JSON.
///
/// Field order is the key order in the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlightJson {
    /// Always "flight"
    #[serde(rename = "type")]
    pub kind: &'static str,

    /// Airline designator, or "[unknown]"
    pub airline: Airline,

    pub flight_number: u32,

    /// RFC 3339 UTC instant, e.g. "2020-01-02T13:00:00Z"
    pub departure_time_utc: String,

    pub arrival_time_utc: String,

    /// 3-letter airport code
    pub departure_airport: AirportCode,

    /// Airport wall-clock time without offset, e.g. "2020-01-02T08:00:00"
    pub departure_time_local: String,

    pub arrival_airport: AirportCode,

    pub arrival_time_local: String,

    /// Human summary, e.g. "AA 123 JFK-LAX, 2020-01-02"
    pub description: String,
}

impl FlightJson {
    /// Create from a domain Flight.
    pub fn from_flight(flight: &Flight) -> Self {
        let departure = flight.departure();
        let arrival = flight.arrival();

        Self {
            kind: FLIGHT_TYPE,
            airline: flight.airline(),
            flight_number: flight.flight_number(),
            departure_time_utc: format_utc(&departure.time_utc),
            arrival_time_utc: format_utc(&arrival.time_utc),
            departure_airport: departure.airport,
            departure_time_local: format_local(&departure.time_local),
            arrival_airport: arrival.airport,
            arrival_time_local: format_local(&arrival.time_local),
            description: flight.summary(),
        }
    }
}

impl From<&Flight> for FlightJson {
    fn from(flight: &Flight) -> Self {
        Self::from_flight(flight)
    }
}

impl Flight {
    /// Serialize this flight alone as a pretty-printed JSON object.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&FlightJson::from_flight(self))
    }
}

fn format_utc(time: &DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn format_local(time: &NaiveDateTime) -> String {
    time.format("%Y-%m-%dT%H:%M:%S").to_string()
}
