//! The busy-date extractor.
//!
//! This module turns a sequence of [`FeedEvent`]s into the final list
//! of busy dates: unique `YYYY-MM-DD` strings, sorted ascending.
//!
//! The extraction pipeline per event:
//! 1. Normalize start and end to civil dates (time-of-day truncated)
//! 2. Force an end on or before the start to start + 1 day, so every
//!    usable event blocks at least one day
//! 3. Expand the half-open day range `[start, end)` into the set
//!
//! Events that cannot be expanded contribute nothing and never abort
//! the run; the caller gets processed/skipped counts for the summary.

use std::collections::BTreeSet;

use chrono::{Days, NaiveDate};
use thiserror::Error;
use tracing::{debug, warn};

use crate::event::FeedEvent;

/// Why a single event contributed no busy dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EventError {
    /// The event has no start boundary.
    #[error("event has no start")]
    MissingStart,

    /// The event has no end boundary.
    #[error("event has no end")]
    MissingEnd,

    /// Date arithmetic overflowed while stepping through the span.
    #[error("date arithmetic overflowed while expanding the event span")]
    DateOverflow,
}

/// The outcome of one extraction run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// Busy dates as `YYYY-MM-DD`, unique, ascending.
    pub dates: Vec<String>,
    /// Events that contributed at least one day.
    pub processed: usize,
    /// Events skipped over missing or unprocessable boundaries.
    pub skipped: usize,
}

/// Expands a single event into the civil days it covers.
///
/// Both boundaries are truncated to civil dates. An end day that is
/// not strictly after the start day (same-day timed events, zero or
/// negative spans) is forced to start + 1 day. The range is half-open:
/// the end day itself stays free.
pub fn event_days(event: &FeedEvent) -> Result<Vec<NaiveDate>, EventError> {
    let start = event.start.ok_or(EventError::MissingStart)?.civil_date();
    let end = event.end.ok_or(EventError::MissingEnd)?.civil_date();

    let end = if end <= start {
        start
            .checked_add_days(Days::new(1))
            .ok_or(EventError::DateOverflow)?
    } else {
        end
    };

    let mut days = Vec::new();
    let mut day = start;
    while day < end {
        days.push(day);
        day = day
            .checked_add_days(Days::new(1))
            .ok_or(EventError::DateOverflow)?;
    }

    Ok(days)
}

/// Extracts the busy dates covered by `events`.
///
/// Each event is expanded independently; events that cannot be
/// expanded are logged and skipped without affecting the rest of the
/// run, and a failed event's partial expansion is discarded whole.
/// Input order is irrelevant: the result is deduplicated and sorted
/// ascending.
pub fn extract_busy_dates(events: &[FeedEvent]) -> Extraction {
    let mut busy: BTreeSet<NaiveDate> = BTreeSet::new();
    let mut processed = 0;
    let mut skipped = 0;

    for event in events {
        match event_days(event) {
            Ok(days) => {
                busy.extend(days);
                processed += 1;
            }
            Err(err) => {
                warn!(uid = ?event.uid, error = %err, "Skipping event");
                skipped += 1;
            }
        }
    }

    debug!(processed, skipped, dates = busy.len(), "Extraction complete");

    Extraction {
        dates: busy
            .iter()
            .map(|day| day.format("%Y-%m-%d").to_string())
            .collect(),
        processed,
        skipped,
    }
}
