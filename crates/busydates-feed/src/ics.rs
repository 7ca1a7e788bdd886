//! iCalendar (RFC 5545) feed parsing.
//!
//! This module converts the raw feed payload into [`FeedEvent`]
//! records. Only the event boundaries matter downstream; UID and
//! summary are kept so skipped events can be named in diagnostics.
//!
//! Timezone handling is deliberately naive: a datetime keeps the civil
//! date its raw components name, whatever timezone qualifier the feed
//! attached. Busy dates are day-granular, so no conversion happens.

use busydates_core::{EventTime, FeedEvent};
use icalendar::{
    Calendar, CalendarComponent, CalendarDateTime, Component, DatePerhapsTime, Event, EventLike,
};
use tracing::{debug, trace};

use crate::error::{FeedError, FeedResult};

/// Parses a feed payload into events.
///
/// Fails when the payload is not an iCalendar document at all; a
/// document containing no VEVENT components parses to an empty list.
pub fn parse_feed(ics: &str) -> FeedResult<Vec<FeedEvent>> {
    // The icalendar parser is lenient and reduces arbitrary text (or
    // an empty body) to zero components. Require a VCALENDAR root so a
    // garbage feed fails loudly instead of overwriting the output with
    // an empty list.
    if !ics
        .lines()
        .any(|line| line.trim().eq_ignore_ascii_case("BEGIN:VCALENDAR"))
    {
        return Err(FeedError::Parse(
            "payload has no VCALENDAR root".to_string(),
        ));
    }

    let calendar: Calendar = ics.parse().map_err(FeedError::Parse)?;

    let events: Vec<FeedEvent> = calendar
        .iter()
        .filter_map(|component| match component {
            CalendarComponent::Event(event) => Some(parse_event(event)),
            _ => None,
        })
        .collect();

    debug!(count = events.len(), "Parsed events from feed");
    Ok(events)
}

/// Parses a single VEVENT component.
///
/// Missing boundaries are carried as `None` rather than rejected here;
/// the extractor decides what to do with incomplete events.
fn parse_event(event: &Event) -> FeedEvent {
    let mut feed_event = FeedEvent::new();

    if let Some(uid) = event.get_uid() {
        feed_event = feed_event.with_uid(uid);
    }
    if let Some(summary) = event.get_summary() {
        feed_event = feed_event.with_summary(summary);
    }
    if let Some(start) = event.get_start() {
        feed_event = feed_event.with_start(convert_date_time(start));
    }
    if let Some(end) = event.get_end() {
        feed_event = feed_event.with_end(convert_date_time(end));
    }

    trace!(
        uid = ?feed_event.uid,
        start = ?feed_event.start,
        end = ?feed_event.end,
        "Parsed event from feed"
    );

    feed_event
}

/// Converts an icalendar time value to an [`EventTime`].
///
/// Timezone qualifiers are stripped without conversion: the naive
/// civil components stay exactly as written in the feed.
fn convert_date_time(dt: DatePerhapsTime) -> EventTime {
    match dt {
        DatePerhapsTime::Date(date) => EventTime::from_date(date),
        DatePerhapsTime::DateTime(cdt) => {
            let naive = match cdt {
                CalendarDateTime::Utc(dt) => dt.naive_utc(),
                CalendarDateTime::Floating(naive) => naive,
                CalendarDateTime::WithTimezone { date_time, tzid: _ } => date_time,
            };
            EventTime::from_datetime(naive)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn timed_ics() -> &'static str {
        "BEGIN:VCALENDAR\r\n\
         VERSION:2.0\r\n\
         PRODID:-//Test//Test//EN\r\n\
         BEGIN:VEVENT\r\n\
         UID:timed-1@example.com\r\n\
         DTSTART:20240601T190000Z\r\n\
         DTEND:20240601T230000Z\r\n\
         SUMMARY:Evening booking\r\n\
         END:VEVENT\r\n\
         END:VCALENDAR"
    }

    fn all_day_ics() -> &'static str {
        "BEGIN:VCALENDAR\r\n\
         VERSION:2.0\r\n\
         BEGIN:VEVENT\r\n\
         UID:all-day-1@example.com\r\n\
         DTSTART;VALUE=DATE:20240601\r\n\
         DTEND;VALUE=DATE:20240604\r\n\
         SUMMARY:Away\r\n\
         END:VEVENT\r\n\
         END:VCALENDAR"
    }

    fn zoned_ics() -> &'static str {
        "BEGIN:VCALENDAR\r\n\
         VERSION:2.0\r\n\
         BEGIN:VEVENT\r\n\
         UID:zoned-1@example.com\r\n\
         DTSTART;TZID=Pacific/Auckland:20240601T230000\r\n\
         DTEND;TZID=Pacific/Auckland:20240601T233000\r\n\
         SUMMARY:Late call\r\n\
         END:VEVENT\r\n\
         END:VCALENDAR"
    }

    fn no_end_ics() -> &'static str {
        "BEGIN:VCALENDAR\r\n\
         VERSION:2.0\r\n\
         BEGIN:VEVENT\r\n\
         UID:open-ended@example.com\r\n\
         DTSTART;VALUE=DATE:20240601\r\n\
         SUMMARY:Open ended\r\n\
         END:VEVENT\r\n\
         END:VCALENDAR"
    }

    #[test]
    fn parses_timed_event() {
        let events = parse_feed(timed_ics()).unwrap();

        assert_eq!(events.len(), 1);
        let event = &events[0];
        assert_eq!(event.uid.as_deref(), Some("timed-1@example.com"));
        assert_eq!(event.summary.as_deref(), Some("Evening booking"));
        assert!(!event.start.unwrap().is_all_day());
        assert_eq!(event.start.unwrap().civil_date(), date(2024, 6, 1));
        assert_eq!(event.end.unwrap().civil_date(), date(2024, 6, 1));
    }

    #[test]
    fn parses_all_day_event() {
        let events = parse_feed(all_day_ics()).unwrap();

        assert_eq!(events.len(), 1);
        let event = &events[0];
        assert!(event.start.unwrap().is_all_day());
        assert_eq!(event.start.unwrap().civil_date(), date(2024, 6, 1));
        assert_eq!(event.end.unwrap().civil_date(), date(2024, 6, 4));
    }

    #[test]
    fn zoned_datetime_keeps_its_civil_date() {
        // 23:00 in Auckland is the previous day in UTC; the busy date
        // must stay on the day the feed wrote.
        let events = parse_feed(zoned_ics()).unwrap();

        assert_eq!(events.len(), 1);
        let event = &events[0];
        assert_eq!(event.start.unwrap().civil_date(), date(2024, 6, 1));
        assert_eq!(event.end.unwrap().civil_date(), date(2024, 6, 1));
    }

    #[test]
    fn missing_end_is_carried_as_none() {
        let events = parse_feed(no_end_ics()).unwrap();

        assert_eq!(events.len(), 1);
        let event = &events[0];
        assert!(event.start.is_some());
        assert!(event.end.is_none());
        assert!(!event.has_span());
    }

    #[test]
    fn calendar_without_events_is_empty() {
        let ics = "BEGIN:VCALENDAR\r\n\
                   VERSION:2.0\r\n\
                   END:VCALENDAR";
        let events = parse_feed(ics).unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn garbage_payload_is_a_parse_error() {
        let err = parse_feed("this is not a calendar").unwrap_err();
        assert!(matches!(err, FeedError::Parse(_)));
    }

    #[test]
    fn empty_payload_is_a_parse_error() {
        let err = parse_feed("").unwrap_err();
        assert!(matches!(err, FeedError::Parse(_)));
    }

    #[test]
    fn vcalendar_root_is_found_case_insensitively() {
        let ics = "begin:vcalendar\r\n\
                   VERSION:2.0\r\n\
                   end:vcalendar";
        assert!(parse_feed(ics).is_ok());
    }
}
