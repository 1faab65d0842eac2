//! Shared builders for integration tests.

#![allow(dead_code)]

use chrono::{Duration, NaiveDate, NaiveDateTime};
use events_grid_core::{Event, EventType};

/// Fixed "now" used across tests: 2026-03-10 12:00:00.
pub fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, 10)
        .and_then(|d| d.and_hms_opt(12, 0, 0))
        .expect("valid fixed now")
}

pub fn event(id: &str, type_: EventType, date: &str, time: &str) -> Event {
    Event {
        id: id.to_string(),
        title: format!("Event {id}"),
        description: String::new(),
        date: date.to_string(),
        time: time.to_string(),
        type_,
        location: "Online".to_string(),
        is_virtual: false,
        registration_url: None,
        image: None,
        speakers: Vec::new(),
        capacity: None,
        registered: None,
    }
}

/// Event starting at `now() + offset`.
pub fn event_at(id: &str, type_: EventType, offset: Duration) -> Event {
    let at = now() + offset;
    event(
        id,
        type_,
        &at.format("%Y-%m-%d").to_string(),
        &at.format("%H:%M:%S").to_string(),
    )
}

pub fn ids(events: &[Event]) -> Vec<&str> {
    events.iter().map(|e| e.id.as_str()).collect()
}
