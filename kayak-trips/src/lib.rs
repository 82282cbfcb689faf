//! Flight history extraction from booking calendar feeds.
//!
//! Travel-booking sites export trips as an iCalendar feed meant for
//! calendar apps. This crate reads that feed and produces one structured
//! record per booked flight, sorted by departure and ready for JSON.

pub mod calendar;
pub mod domain;
pub mod dto;
pub mod feed;
