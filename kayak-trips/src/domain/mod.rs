//! Domain types for booked flights.
//!
//! This module contains the validated flight model. Code and time types
//! enforce their invariants at construction time, so code that receives
//! them can trust their validity.

mod airline;
mod airport;
mod error;
mod flight;
mod local_time;

pub use airline::{Airline, AirlineCode, InvalidAirlineCode, UNKNOWN_AIRLINE};
pub use airport::{AirportCode, InvalidAirportCode};
pub use error::ParseError;
pub use flight::{Endpoint, Flight};
pub use local_time::{LocalTimeParts, Meridiem, TimeError, to_24_hour};
