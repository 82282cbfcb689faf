//! Flight record type.

use chrono::{DateTime, NaiveDateTime, Utc};
use std::fmt;

use super::{Airline, AirportCode};

/// One end of a flight: where and when.
///
/// The UTC instant comes straight from the calendar entry; the local time
/// is the wall-clock reading printed in the booking for that airport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub airport: AirportCode,
    pub time_utc: DateTime<Utc>,
    pub time_local: NaiveDateTime,
}

impl Endpoint {
    pub fn new(airport: AirportCode, time_utc: DateTime<Utc>, time_local: NaiveDateTime) -> Self {
        Self {
            airport,
            time_utc,
            time_local,
        }
    }
}

/// A single booked flight.
///
/// Built once from a calendar entry and never mutated afterwards; all
/// fields are private and exposed through getters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flight {
    airline: Airline,
    flight_number: u32,
    departure: Endpoint,
    arrival: Endpoint,
}

impl Flight {
    pub fn new(
        airline: Airline,
        flight_number: u32,
        departure: Endpoint,
        arrival: Endpoint,
    ) -> Self {
        Self {
            airline,
            flight_number,
            departure,
            arrival,
        }
    }

    pub fn airline(&self) -> Airline {
        self.airline
    }

    pub fn flight_number(&self) -> u32 {
        self.flight_number
    }

    pub fn departure(&self) -> &Endpoint {
        &self.departure
    }

    pub fn arrival(&self) -> &Endpoint {
        &self.arrival
    }

    pub fn departure_airport(&self) -> AirportCode {
        self.departure.airport
    }

    pub fn arrival_airport(&self) -> AirportCode {
        self.arrival.airport
    }

    pub fn departure_time_utc(&self) -> DateTime<Utc> {
        self.departure.time_utc
    }

    pub fn arrival_time_utc(&self) -> DateTime<Utc> {
        self.arrival.time_utc
    }

    pub fn departure_time_local(&self) -> NaiveDateTime {
        self.departure.time_local
    }

    pub fn arrival_time_local(&self) -> NaiveDateTime {
        self.arrival.time_local
    }

    /// Short display line, e.g. "AA 123 JFK-LAX, 2020-01-02".
    ///
    /// The date is the local departure date.
    pub fn summary(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Flight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}-{}, {}",
            self.airline,
            self.flight_number,
            self.departure.airport,
            self.arrival.airport,
            self.departure.time_local.format("%Y-%m-%d")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AirlineCode;
    use chrono::{NaiveDate, TimeZone};

    fn local(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2020, 1, 2)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn flight(airline: Airline) -> Flight {
        let departure = Endpoint::new(
            AirportCode::parse("JFK").unwrap(),
            Utc.with_ymd_and_hms(2020, 1, 2, 13, 0, 0).unwrap(),
            local(8, 0),
        );
        let arrival = Endpoint::new(
            AirportCode::parse("LAX").unwrap(),
            Utc.with_ymd_and_hms(2020, 1, 2, 19, 30, 0).unwrap(),
            local(11, 30),
        );
        Flight::new(airline, 123, departure, arrival)
    }

    #[test]
    fn summary_line() {
        let f = flight(Airline::Known(AirlineCode::parse("AA").unwrap()));
        assert_eq!(f.summary(), "AA 123 JFK-LAX, 2020-01-02");
    }

    #[test]
    fn summary_line_unknown_airline() {
        let f = flight(Airline::Unknown);
        assert_eq!(f.to_string(), "[unknown] 123 JFK-LAX, 2020-01-02");
    }

    #[test]
    fn getters_expose_endpoints() {
        let f = flight(Airline::Unknown);
        assert_eq!(f.flight_number(), 123);
        assert_eq!(f.departure_airport().as_str(), "JFK");
        assert_eq!(f.arrival_airport().as_str(), "LAX");
        assert_eq!(f.departure_time_local(), local(8, 0));
        assert_eq!(f.arrival_time_local(), local(11, 30));
        assert!(f.departure_time_utc() < f.arrival_time_utc());
    }
}
