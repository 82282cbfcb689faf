//! End-to-end tests: calendar file in, sorted flight JSON out.

use std::path::PathBuf;

use chrono::{TimeZone, Utc};
use kayak_trips::calendar::{CalendarError, FlightCalendar};
use kayak_trips::domain::{Airline, ParseError};
use serde_json::Value;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn is_airport_code(value: &Value) -> bool {
    value
        .as_str()
        .is_some_and(|s| s.len() == 3 && s.bytes().all(|b| b.is_ascii_uppercase()))
}

#[test]
fn file_to_sorted_json() {
    let mut calendar = FlightCalendar::from_file(fixture("trips.ics")).unwrap();
    let json = calendar.to_json().unwrap();

    let value: Value = serde_json::from_str(&json).unwrap();
    let records = value.as_array().unwrap();
    assert_eq!(records.len(), 2, "car rental must be filtered out");

    let keys = [
        "type",
        "airline",
        "flight_number",
        "departure_time_utc",
        "arrival_time_utc",
        "departure_airport",
        "departure_time_local",
        "arrival_airport",
        "arrival_time_local",
        "description",
    ];
    for record in records {
        let object = record.as_object().unwrap();
        assert_eq!(object.len(), keys.len());
        for key in keys {
            assert!(!object[key].is_null(), "{key} missing");
        }
        assert!(is_airport_code(&record["departure_airport"]));
        assert!(is_airport_code(&record["arrival_airport"]));
    }

    // Earliest departure first, even though it is last in the file
    assert_eq!(records[0]["airline"], "B6");
    assert_eq!(records[0]["flight_number"], 1105);
    assert_eq!(records[0]["departure_time_utc"], "2020-03-10T12:30:00Z");
    assert_eq!(records[0]["departure_time_local"], "2020-03-10T08:30:00");
    assert_eq!(records[0]["arrival_time_local"], "2020-03-10T11:52:00");
    assert_eq!(records[0]["description"], "B6 1105 BOS-MCO, 2020-03-10");

    assert_eq!(records[1]["airline"], "[unknown]");
    assert_eq!(records[1]["flight_number"], 982);
    assert_eq!(records[1]["departure_time_local"], "2020-03-15T00:05:00");
    assert_eq!(records[1]["arrival_time_local"], "2020-03-15T02:48:00");
    assert_eq!(records[1]["description"], "[unknown] 982 MCO-BOS, 2020-03-15");

    let departures: Vec<&str> = records
        .iter()
        .map(|r| r["departure_time_utc"].as_str().unwrap())
        .collect();
    let mut sorted = departures.clone();
    sorted.sort();
    assert_eq!(departures, sorted);
}

#[test]
fn file_output_is_byte_identical_across_runs() {
    let first = FlightCalendar::from_file(fixture("trips.ics"))
        .unwrap()
        .to_json()
        .unwrap();
    let second = FlightCalendar::from_file(fixture("trips.ics"))
        .unwrap()
        .to_json()
        .unwrap();
    assert_eq!(first, second);
}

#[test]
fn from_file_returns_sorted_flights() {
    let calendar = FlightCalendar::from_file(fixture("trips.ics")).unwrap();
    let flights = calendar.flights();

    assert_eq!(flights[0].flight_number(), 1105);
    assert_eq!(
        flights[0].departure_time_utc(),
        Utc.with_ymd_and_hms(2020, 3, 10, 12, 30, 0).unwrap()
    );
    assert_eq!(flights[1].airline(), Airline::Unknown);
}

#[test]
fn missing_departing_line_fails_whole_build() {
    let ical = "BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//KAYAK//Trips//EN\r\n\
BEGIN:VEVENT\r\n\
UID:good@trips\r\n\
SUMMARY:Boston to Orlando - Flight B6 1105\r\n\
DESCRIPTION:Departing: Boston (BOS) 03/10/2020 8:30AM\\nArriving: Orlando (MCO) 03/10/2020 11:52AM\r\n\
DTSTART:20200310T123000Z\r\n\
DTEND:20200310T155200Z\r\n\
END:VEVENT\r\n\
BEGIN:VEVENT\r\n\
UID:broken@trips\r\n\
SUMMARY:Orlando to Boston - Flight B6 1106\r\n\
DESCRIPTION:Confirmation: Q7ZP2M\\nArriving: Boston (BOS) 03/15/2020 2:48PM\r\n\
DTSTART:20200315T150500Z\r\n\
DTEND:20200315T184800Z\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";

    let err = FlightCalendar::parse(ical).unwrap_err();
    match &err {
        CalendarError::Entry { uid, source, .. } => {
            assert_eq!(uid.as_deref(), Some("broken@trips"));
            assert_eq!(
                *source,
                ParseError::MissingExpectedLine {
                    prefix: "Departing"
                }
            );
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().contains("broken@trips"));
}

#[test]
fn missing_file_is_reported() {
    let err = FlightCalendar::from_file(fixture("does-not-exist.ics")).unwrap_err();
    assert!(matches!(err, CalendarError::Feed(_)));
    assert!(err.to_string().contains("does-not-exist.ics"));
}

#[test]
fn json_written_to_file_parses_back() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("flights.json");

    let mut calendar = FlightCalendar::from_file(fixture("trips.ics")).unwrap();
    std::fs::write(&out, calendar.to_json().unwrap()).unwrap();

    let text = std::fs::read_to_string(&out).unwrap();
    let value: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 2);
}
