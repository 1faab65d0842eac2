//! Bundled sample content goes through the adapter and config cleanly.

use chrono::NaiveDate;
use events_grid_core::view::{self, TypeFilter};
use events_grid_core::EventType;
use events_grid_frontend::data;
use events_grid_frontend::theme::GridColors;
use pretty_assertions::assert_eq;

#[test]
fn sample_events_all_normalize_with_valid_instants() {
    let events = data::sample_events();
    assert_eq!(events.len(), 6);
    for e in &events {
        assert!(e.id.starts_with("evt-"), "unexpected id {}", e.id);
        assert!(e.instant().is_ok(), "{} has no valid instant", e.id);
    }
}

#[test]
fn sample_events_cover_every_type() {
    let events = data::sample_events();
    assert_eq!(view::event_types(&events), EventType::ALL.to_vec());
}

#[test]
fn sample_event_shapes_are_normalized() {
    let events = data::sample_events();
    let summit = events.iter().find(|e| e.id == "evt-1003").expect("summit present");
    assert_eq!(summit.date, "2027-05-18");
    assert_eq!(summit.capacity, Some(1200));
    assert_eq!(summit.registered, Some(860));

    let deliverability = events.iter().find(|e| e.id == "evt-0901").expect("webinar present");
    assert!(deliverability.is_virtual);
    assert_eq!(deliverability.location, "Online");

    let content = events.iter().find(|e| e.id == "evt-0902").expect("workshop present");
    assert_eq!(content.date, "2026-06-11");
}

#[test]
fn sample_partition_at_a_fixed_time() {
    let now = NaiveDate::from_ymd_opt(2026, 10, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .expect("valid now");
    let p = view::partition_events(&data::sample_events(), TypeFilter::All, now);
    let upcoming: Vec<&str> = p.upcoming.iter().map(|e| e.id.as_str()).collect();
    let past: Vec<&str> = p.past.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(upcoming, vec!["evt-1004", "evt-1001", "evt-1002", "evt-1003"]);
    assert_eq!(past, vec!["evt-0901", "evt-0902"]);
}

#[test]
fn sample_config_matches_field_values() {
    let config = data::sample_config();
    assert!(config.show_past_events);
    assert!(config.enable_filtering);
    assert_eq!(config.accent_color, "#2563eb");
    assert_eq!((config.columns.mobile, config.columns.tablet, config.columns.desktop), (1, 2, 3));
}

#[test]
fn sample_query_result_has_the_collection_path() {
    let items = data::sample_query_result()
        .pointer("/data/CRM/p_events_collection/items")
        .and_then(|v| v.as_array())
        .map(|a| a.len());
    assert_eq!(items, Some(6));
}

#[test]
fn every_type_has_a_distinct_badge() {
    let mut badges: Vec<_> = EventType::ALL.iter().map(|t| GridColors::badge(*t)).collect();
    badges.sort();
    badges.dedup();
    assert_eq!(badges.len(), EventType::ALL.len());
}
