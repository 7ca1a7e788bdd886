//! Calendar feed retrieval and parsing.
//!
//! This crate is the feed-facing collaborator of the busy-date
//! pipeline: it fetches raw iCalendar data over HTTP and parses it
//! into [`busydates_core::FeedEvent`] records for extraction.

pub mod error;
pub mod fetch;
pub mod ics;

pub use error::{FeedError, FeedResult};
pub use fetch::{FeedFetcher, FetchConfig};
pub use ics::parse_feed;
