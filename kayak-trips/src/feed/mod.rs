//! Calendar feed loading.
//!
//! Booking sites publish trips as an iCalendar feed behind a private URL;
//! users can also export the same feed to a file. This module turns either
//! into the raw calendar text the parser consumes.

mod client;
mod error;

pub use client::{FeedClient, FeedConfig, FeedSource, read_file};
pub use error::FeedError;
