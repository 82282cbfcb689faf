//! Airline designators.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

/// Rendering used when a booking does not name its carrier.
pub const UNKNOWN_AIRLINE: &str = "[unknown]";

/// Why a string is not an airline designator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidAirlineCode {
    #[error("airline designator {0:?} must have 2 characters")]
    Length(String),

    #[error("airline designator {code:?} contains {found:?}, expected A-Z or 0-9")]
    Character { code: String, found: char },
}

/// Two-character IATA designator: "AA", "B6", "9W".
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct AirlineCode([u8; 2]);

impl AirlineCode {
    pub fn parse(code: &str) -> Result<Self, InvalidAirlineCode> {
        let allowed = |c: &char| c.is_ascii_uppercase() || c.is_ascii_digit();
        if let Some(found) = code.chars().find(|c| !allowed(c)) {
            return Err(InvalidAirlineCode::Character {
                code: code.to_string(),
                found,
            });
        }

        let chars = <[u8; 2]>::try_from(code.as_bytes())
            .map_err(|_| InvalidAirlineCode::Length(code.to_string()))?;
        Ok(Self(chars))
    }

    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl FromStr for AirlineCode {
    type Err = InvalidAirlineCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Debug for AirlineCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AirlineCode").field(&self.as_str()).finish()
    }
}

impl fmt::Display for AirlineCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The operating carrier of a flight, as far as the booking text reveals it.
///
/// Some bookings list only a flight number ("Flight  982"); the carrier is
/// then `Unknown` and renders as `"[unknown]"` in summaries and JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Airline {
    Known(AirlineCode),
    Unknown,
}

impl Airline {
    /// The designator, or `"[unknown]"`.
    pub fn as_str(&self) -> &str {
        match self {
            Airline::Known(code) => code.as_str(),
            Airline::Unknown => UNKNOWN_AIRLINE,
        }
    }
}

impl From<Option<AirlineCode>> for Airline {
    fn from(code: Option<AirlineCode>) -> Self {
        code.map_or(Airline::Unknown, Airline::Known)
    }
}

impl fmt::Display for Airline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Airline {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_and_digit_designators() {
        for code in ["AA", "UA", "B6", "9W", "3U"] {
            assert_eq!(code.parse::<AirlineCode>().unwrap().as_str(), code);
        }
    }

    #[test]
    fn icao_designator_is_too_long() {
        assert_eq!(
            AirlineCode::parse("AAL").unwrap_err().to_string(),
            r#"airline designator "AAL" must have 2 characters"#
        );
    }

    #[test]
    fn lowercase_designator_names_character() {
        assert_eq!(
            AirlineCode::parse("b6").unwrap_err(),
            InvalidAirlineCode::Character {
                code: "b6".into(),
                found: 'b'
            }
        );
    }

    #[test]
    fn missing_designator_is_unknown() {
        let airline = Airline::from(None);
        assert_eq!(airline, Airline::Unknown);
        assert_eq!(airline.to_string(), "[unknown]");
        assert_eq!(serde_json::to_string(&airline).unwrap(), r#""[unknown]""#);
    }

    #[test]
    fn known_airline_serializes_designator() {
        let airline = Airline::from(Some(AirlineCode::parse("DL").unwrap()));
        assert_eq!(serde_json::to_string(&airline).unwrap(), r#""DL""#);
        assert_eq!(format!("{airline:?}"), r#"Known(AirlineCode("DL"))"#);
    }
}
