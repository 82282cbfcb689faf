//! Calendar collection error types.

use crate::domain::ParseError;
use crate::feed::FeedError;

/// Errors from building or serializing a flight calendar.
#[derive(Debug, thiserror::Error)]
pub enum CalendarError {
    /// The text is not a readable iCalendar document
    #[error("calendar decode error: {0}")]
    Decode(String),

    /// A flight entry could not be converted
    #[error("entry {index} ({}, {summary:?}): {source}", .uid.as_deref().unwrap_or("no UID"))]
    Entry {
        /// Position of the entry among the calendar's events
        index: usize,
        uid: Option<String>,
        summary: String,
        #[source]
        source: ParseError,
    },

    /// Serializing the flights failed
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Loading the feed text failed
    #[error(transparent)]
    Feed(#[from] FeedError),
}
