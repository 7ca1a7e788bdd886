//! Time types for calendar feed events.
//!
//! This module provides [`EventTime`], the start or end of an event as
//! it appears in the feed: either a bare date (all-day events) or a
//! date-time. Timezone qualifiers are discarded at the feed boundary
//! and never converted; the civil date of a value is whichever
//! calendar day its raw components name.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// The start or end of a calendar event.
///
/// Feeds carry event boundaries in two shapes:
/// - **DateTime**: a day plus a time-of-day (timezone already stripped)
/// - **Date**: a day without a time-of-day (all-day events)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum EventTime {
    /// A date-time, with any timezone qualifier already discarded.
    DateTime(NaiveDateTime),
    /// An all-day event date (no time-of-day).
    Date(NaiveDate),
}

impl EventTime {
    /// Creates an `EventTime` from a naive datetime.
    pub fn from_datetime(dt: NaiveDateTime) -> Self {
        Self::DateTime(dt)
    }

    /// Creates an `EventTime` from a date (all-day event).
    pub fn from_date(date: NaiveDate) -> Self {
        Self::Date(date)
    }

    /// Returns `true` if this is an all-day event time.
    pub fn is_all_day(&self) -> bool {
        matches!(self, Self::Date(_))
    }

    /// Returns the calendar day this value names, truncating any
    /// time-of-day.
    pub fn civil_date(&self) -> NaiveDate {
        match self {
            Self::DateTime(dt) => dt.date(),
            Self::Date(date) => *date,
        }
    }
}
