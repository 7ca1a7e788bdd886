//! Core types: event times, feed events, busy-date extraction

pub mod event;
pub mod extract;
pub mod time;

pub use event::FeedEvent;
pub use extract::{event_days, extract_busy_dates, EventError, Extraction};
pub use time::EventTime;
