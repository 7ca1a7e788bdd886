//! Feed event type.
//!
//! This module defines [`FeedEvent`], the source-agnostic view of a
//! calendar event as the extractor consumes it. Only the start and end
//! boundaries feed into busy-date extraction; the UID and summary are
//! carried for diagnostics when an event has to be skipped.

use serde::{Deserialize, Serialize};

use crate::time::EventTime;

/// A calendar event as delivered by the feed.
///
/// Every field is optional: real-world feeds contain events with
/// missing boundaries, and those are skipped during extraction rather
/// than rejected up front.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedEvent {
    /// Unique identifier of the event within the feed.
    pub uid: Option<String>,

    /// The event title/summary.
    pub summary: Option<String>,

    /// When the event starts.
    pub start: Option<EventTime>,

    /// When the event ends.
    pub end: Option<EventTime>,
}

impl FeedEvent {
    /// Creates an empty event.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the UID.
    pub fn with_uid(mut self, uid: impl Into<String>) -> Self {
        self.uid = Some(uid.into());
        self
    }

    /// Builder method to set the summary.
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Builder method to set the start time.
    pub fn with_start(mut self, start: EventTime) -> Self {
        self.start = Some(start);
        self
    }

    /// Builder method to set the end time.
    pub fn with_end(mut self, end: EventTime) -> Self {
        self.end = Some(end);
        self
    }

    /// Returns `true` if both boundaries are present.
    pub fn has_span(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }
}
