//! Domain error types.
//!
//! These errors describe why a single calendar entry could not be turned
//! into a flight. They are distinct from feed/IO errors.

/// Errors raised while extracting a flight from one calendar entry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Summary does not carry the "Flight <code>? <number>" pattern
    #[error("malformed summary: {summary:?}")]
    MalformedSummary { summary: String },

    /// A Departing/Arriving line lacks an airport code or a valid local time
    #[error("malformed description line ({reason}): {line:?}")]
    MalformedDescriptionLine { line: String, reason: &'static str },

    /// The description has no line starting with the expected prefix
    #[error("missing expected line starting with {prefix:?}")]
    MissingExpectedLine { prefix: &'static str },

    /// A required calendar property is absent
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// A DTSTART/DTEND value cannot be read as an absolute instant
    #[error("invalid timestamp in {field}: {reason}")]
    InvalidTimestamp { field: &'static str, reason: String },
}

impl ParseError {
    pub(crate) fn malformed_line(line: &str, reason: &'static str) -> Self {
        ParseError::MalformedDescriptionLine {
            line: line.to_string(),
            reason,
        }
    }
}
