//! Content record normalization: accepted shapes and defaults per field.

use events_grid_core::adapter::{self, DEFAULT_LOCATION, DEFAULT_TIME};
use events_grid_core::{Event, EventType};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn wrap(items: Value) -> Value {
    json!({ "data": { "CRM": { "p_events_collection": { "items": items } } } })
}

fn single(item: Value) -> Event {
    let mut events = adapter::events_from_query_result(&wrap(json!([item])));
    assert_eq!(events.len(), 1);
    events.remove(0)
}

#[test]
fn maps_a_complete_record() {
    let e = single(json!({
        "_metadata": { "id": "123" },
        "event_title": "Rust Meetup",
        "description": "Talks and pizza",
        "event_date": "2026-04-02",
        "event_time": "18:30",
        "event_type": { "value": "meetup" },
        "location": "Berlin",
        "is_virtual": false,
        "registration_url": "https://example.com/register",
        "image_url": "https://example.com/cover.png",
        "speakers": "Ana,  Ben , Chloe",
        "capacity": 80,
        "registered_count": 75
    }));

    assert_eq!(
        e,
        Event {
            id: "123".to_string(),
            title: "Rust Meetup".to_string(),
            description: "Talks and pizza".to_string(),
            date: "2026-04-02".to_string(),
            time: "18:30".to_string(),
            type_: EventType::Meetup,
            location: "Berlin".to_string(),
            is_virtual: false,
            registration_url: Some("https://example.com/register".to_string()),
            image: Some("https://example.com/cover.png".to_string()),
            speakers: vec!["Ana".to_string(), "Ben".to_string(), "Chloe".to_string()],
            capacity: Some(80),
            registered: Some(75),
        }
    );
}

#[test]
fn missing_fields_take_defaults() {
    let e = single(json!({ "event_date": "2026-04-02" }));
    assert_eq!(e.time, DEFAULT_TIME);
    assert_eq!(e.location, DEFAULT_LOCATION);
    assert_eq!(e.type_, EventType::Webinar);
    assert!(!e.is_virtual);
    assert!(e.speakers.is_empty());
    assert_eq!(e.capacity, None);
    assert_eq!(e.registered, None);
    assert_eq!(e.title, "");
    assert!(uuid::Uuid::parse_str(&e.id).is_ok(), "generated id should be a uuid: {}", e.id);
}

#[test]
fn empty_strings_fall_back_like_missing_values() {
    let e = single(json!({ "event_time": "", "location": "", "event_type": "" }));
    assert_eq!(e.time, DEFAULT_TIME);
    assert_eq!(e.location, DEFAULT_LOCATION);
    assert_eq!(e.type_, EventType::Webinar);
}

#[test]
fn virtual_flag_accepts_bool_and_text() {
    let cases = [
        (json!(true), true),
        (json!("true"), true),
        (json!("Yes"), true),
        (json!(false), false),
        (json!("false"), false),
        (json!("No"), false),
        (json!("yes"), false),
        (json!(1), false),
        (Value::Null, false),
    ];
    for (raw, expected) in cases {
        let e = single(json!({ "is_virtual": raw.clone() }));
        assert_eq!(e.is_virtual, expected, "is_virtual = {raw}");
    }
}

#[test]
fn event_type_accepts_plain_and_wrapped() {
    assert_eq!(single(json!({ "event_type": "workshop" })).type_, EventType::Workshop);
    assert_eq!(single(json!({ "event_type": { "value": "conference" } })).type_, EventType::Conference);
    assert_eq!(single(json!({ "event_type": "Meetup" })).type_, EventType::Meetup);
    assert_eq!(single(json!({ "event_type": "hackathon" })).type_, EventType::Webinar);
    assert_eq!(single(json!({ "event_type": 7 })).type_, EventType::Webinar);
}

#[test]
fn event_date_accepts_timestamps() {
    assert_eq!(single(json!({ "event_date": "2026-04-02T22:30:00-05:00" })).date, "2026-04-03");
    assert_eq!(single(json!({ "event_date": "2026-04-02T08:00:00Z" })).date, "2026-04-02");
    // 2026-04-02T00:00:00Z
    assert_eq!(single(json!({ "event_date": 1775088000000_i64 })).date, "2026-04-02");
    assert_eq!(single(json!({ "event_date": "1775088000000" })).date, "2026-04-02");
}

#[test]
fn unrecognized_date_is_kept_and_fails_later() {
    let e = single(json!({ "event_date": "sometime soon" }));
    assert_eq!(e.date, "sometime soon");
    assert!(e.instant().is_err());
}

#[test]
fn counts_accept_numbers_and_numeric_text() {
    let e = single(json!({ "capacity": "40", "registered_count": 12.0 }));
    assert_eq!(e.capacity, Some(40));
    assert_eq!(e.registered, Some(12));

    let e = single(json!({ "capacity": -5, "registered_count": "lots" }));
    assert_eq!(e.capacity, None);
    assert_eq!(e.registered, None);
}

#[test]
fn numeric_id_is_stringified() {
    assert_eq!(single(json!({ "_metadata": { "id": 98765 } })).id, "98765");
}

#[test]
fn speakers_drop_blank_names() {
    let e = single(json!({ "speakers": " Ana , , Ben," }));
    assert_eq!(e.speakers, vec!["Ana".to_string(), "Ben".to_string()]);
}

#[test]
fn non_object_records_are_skipped() {
    let events = adapter::events_from_query_result(&wrap(json!([
        "not a record",
        null,
        { "event_title": "kept" },
        42
    ])));
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].title, "kept");
}

#[test]
fn missing_collection_yields_no_events() {
    assert!(adapter::events_from_query_result(&json!({})).is_empty());
    assert!(adapter::events_from_query_result(&json!({ "data": { "CRM": null } })).is_empty());
    assert!(adapter::query_items(&json!({ "data": { "CRM": { "p_events_collection": { "items": {} } } } })).is_empty());
}

#[test]
fn record_order_is_preserved() {
    let events = adapter::events_from_query_result(&wrap(json!([
        { "_metadata": { "id": "b" } },
        { "_metadata": { "id": "a" } },
        { "_metadata": { "id": "c" } }
    ])));
    let ids: Vec<&str> = events.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["b", "a", "c"]);
}
