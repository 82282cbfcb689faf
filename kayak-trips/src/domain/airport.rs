//! IATA airport codes.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

/// Why a string is not an airport code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidAirportCode {
    #[error("airport code {0:?} must have 3 letters")]
    Length(String),

    #[error("airport code {code:?} contains {found:?}, expected A-Z")]
    Character { code: String, found: char },
}

/// Three-letter IATA location identifier, as printed in parentheses after
/// the city name in a booking ("New York (JFK)").
///
/// ```
/// use kayak_trips::domain::AirportCode;
///
/// let lhr: AirportCode = "LHR".parse().unwrap();
/// assert_eq!(lhr.to_string(), "LHR");
/// assert!("lhr".parse::<AirportCode>().is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AirportCode([u8; 3]);

impl AirportCode {
    pub fn parse(code: &str) -> Result<Self, InvalidAirportCode> {
        if let Some(found) = code.chars().find(|c| !c.is_ascii_uppercase()) {
            return Err(InvalidAirportCode::Character {
                code: code.to_string(),
                found,
            });
        }

        let letters = <[u8; 3]>::try_from(code.as_bytes())
            .map_err(|_| InvalidAirportCode::Length(code.to_string()))?;
        Ok(Self(letters))
    }

    pub fn as_str(&self) -> &str {
        // Only A-Z is ever stored, so the fallback is unreachable
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl FromStr for AirportCode {
    type Err = InvalidAirportCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Debug for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AirportCode").field(&self.as_str()).finish()
    }
}

impl fmt::Display for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for AirportCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
