//! Feed loading error types.

use std::path::PathBuf;

/// Errors that can occur while loading calendar text.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server returned an error status
    #[error("feed server returned {status}: {message}")]
    Api { status: u16, message: String },

    /// Reading a local calendar file failed
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
