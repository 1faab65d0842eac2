//! Content record → [`Event`] normalization.
//!
//! Content records arrive as loosely typed JSON: flags may be booleans or strings,
//! the event type may be wrapped in `{value: ..}`, numbers may come as strings.
//! Each raw field deserializes into a small untagged enum listing the shapes we
//! accept; anything else lands in the `Other` arm and is treated as absent.
//!
//! | field              | accepted shapes                              | default        |
//! |--------------------|----------------------------------------------|----------------|
//! | `_metadata.id`     | string, number                               | fresh UUID v4  |
//! | `event_date`       | `YYYY-MM-DD`, RFC 3339, epoch milliseconds   | kept verbatim  |
//! | `event_time`       | string                                       | `09:00`        |
//! | `event_type`       | string, `{value: string}`                    | webinar        |
//! | `location`         | string                                       | `Online`       |
//! | `is_virtual`       | bool, `"true"`, `"Yes"`                      | false          |
//! | `speakers`         | comma-separated string                       | empty          |
//! | `capacity`, `registered_count` | integer, float, numeric string   | absent         |

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::models::{Event, EventType};

pub const DEFAULT_TIME: &str = "09:00";
pub const DEFAULT_LOCATION: &str = "Online";

const ITEMS_POINTER: &str = "/data/CRM/p_events_collection/items";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawScalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Other(Value),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawEventType {
    Wrapped { value: String },
    Plain(String),
    Other(Value),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawMetadata {
    Object {
        #[serde(default)]
        id: Option<RawScalar>,
    },
    Other(Value),
}

/// One item of the content query result, before normalization.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct RawEventRecord {
    #[serde(rename = "_metadata", default)]
    pub metadata: Option<RawMetadata>,
    #[serde(default)]
    pub event_title: Option<RawScalar>,
    #[serde(default)]
    pub description: Option<RawScalar>,
    #[serde(default)]
    pub event_date: Option<RawScalar>,
    #[serde(default)]
    pub event_time: Option<RawScalar>,
    #[serde(default)]
    pub event_type: Option<RawEventType>,
    #[serde(default)]
    pub location: Option<RawScalar>,
    #[serde(default)]
    pub is_virtual: Option<RawScalar>,
    #[serde(default)]
    pub registration_url: Option<RawScalar>,
    #[serde(default)]
    pub image_url: Option<RawScalar>,
    #[serde(default)]
    pub speakers: Option<RawScalar>,
    #[serde(default)]
    pub capacity: Option<RawScalar>,
    #[serde(default)]
    pub registered_count: Option<RawScalar>,
}

/// The `items` array of a content query result, or an empty slice when any level
/// of the path is missing.
pub fn query_items(result: &Value) -> &[Value] {
    result
        .pointer(ITEMS_POINTER)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Normalize every usable record of a content query result, preserving order.
pub fn events_from_query_result(result: &Value) -> Vec<Event> {
    let items = query_items(result);
    let events: Vec<Event> = items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value::<RawEventRecord>(item.clone()) {
            Ok(raw) => Some(normalize_record(raw)),
            Err(e) => {
                warn!(index, error = %e, "skipping malformed event record");
                None
            }
        })
        .collect();
    debug!(received = items.len(), normalized = events.len(), "normalized content records");
    events
}

pub fn normalize_record(raw: RawEventRecord) -> Event {
    let id = match raw.metadata {
        Some(RawMetadata::Object { id }) => text(id),
        _ => None,
    }
    .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    Event {
        id,
        title: text(raw.event_title).unwrap_or_default(),
        description: text(raw.description).unwrap_or_default(),
        date: calendar_date(raw.event_date),
        time: non_empty_text(raw.event_time).unwrap_or_else(|| DEFAULT_TIME.to_string()),
        type_: event_type(raw.event_type),
        location: non_empty_text(raw.location).unwrap_or_else(|| DEFAULT_LOCATION.to_string()),
        is_virtual: flag(raw.is_virtual),
        registration_url: non_empty_text(raw.registration_url),
        image: non_empty_text(raw.image_url),
        speakers: speakers(raw.speakers),
        capacity: count(raw.capacity),
        registered: count(raw.registered_count),
    }
}

fn text(raw: Option<RawScalar>) -> Option<String> {
    match raw? {
        RawScalar::Text(s) => Some(s),
        RawScalar::Int(n) => Some(n.to_string()),
        RawScalar::Float(f) => Some(f.to_string()),
        RawScalar::Bool(_) | RawScalar::Other(_) => None,
    }
}

fn non_empty_text(raw: Option<RawScalar>) -> Option<String> {
    text(raw).filter(|s| !s.trim().is_empty())
}

fn flag(raw: Option<RawScalar>) -> bool {
    match raw {
        Some(RawScalar::Bool(b)) => b,
        Some(RawScalar::Text(s)) => s == "true" || s == "Yes",
        _ => false,
    }
}

fn count(raw: Option<RawScalar>) -> Option<u32> {
    match raw? {
        RawScalar::Int(n) => u32::try_from(n).ok(),
        RawScalar::Float(f) if f.is_finite() && f >= 0.0 && f <= u32::MAX as f64 => Some(f.floor() as u32),
        RawScalar::Text(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn speakers(raw: Option<RawScalar>) -> Vec<String> {
    match raw {
        Some(RawScalar::Text(s)) => s
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(String::from)
            .collect(),
        _ => Vec::new(),
    }
}

fn event_type(raw: Option<RawEventType>) -> EventType {
    let name = match raw {
        Some(RawEventType::Wrapped { value }) => value,
        Some(RawEventType::Plain(s)) => s,
        _ => return EventType::default(),
    };
    if name.trim().is_empty() {
        return EventType::default();
    }
    EventType::parse(&name).unwrap_or_else(|| {
        warn!(event_type = %name, "unknown event type, using default");
        EventType::default()
    })
}

/// Reduce the raw date to `YYYY-MM-DD`. Timestamps (RFC 3339 or epoch
/// milliseconds) keep their UTC calendar date. Unrecognized text is kept as-is
/// so the event's instant fails to parse downstream.
fn calendar_date(raw: Option<RawScalar>) -> String {
    let date = match raw {
        Some(RawScalar::Int(ms)) => date_from_millis(ms),
        Some(RawScalar::Float(ms)) if ms.is_finite() => date_from_millis(ms as i64),
        Some(RawScalar::Text(s)) => match date_from_text(&s) {
            Some(d) => Some(d),
            None => {
                warn!(event_date = %s, "unrecognized event date");
                return s;
            }
        },
        _ => None,
    };
    date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()
}

fn date_from_millis(ms: i64) -> Option<NaiveDate> {
    DateTime::<Utc>::from_timestamp_millis(ms).map(|dt| dt.date_naive())
}

fn date_from_text(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.date());
    }
    s.parse::<i64>().ok().and_then(date_from_millis)
}
