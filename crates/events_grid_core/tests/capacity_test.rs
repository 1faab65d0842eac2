//! Capacity indicator rule.

mod common;

use common::event;
use events_grid_core::capacity::CapacityInfo;
use events_grid_core::EventType;

#[test]
fn two_spots_left_is_urgent() {
    let info = CapacityInfo::new(20, 18).expect("capacity set");
    assert_eq!(info.spots_left, 2);
    assert!(info.is_urgent());
    assert!((info.fill - 0.9).abs() < 1e-9);
}

#[test]
fn fifteen_spots_left_is_not_urgent() {
    let info = CapacityInfo::new(20, 5).expect("capacity set");
    assert_eq!(info.spots_left, 15);
    assert!(!info.is_urgent());
    assert!((info.fill_percent() - 25.0).abs() < 1e-9);
}

#[test]
fn exactly_ten_spots_left_is_not_urgent() {
    assert!(!CapacityInfo::new(30, 20).expect("capacity set").is_urgent());
    assert!(CapacityInfo::new(30, 21).expect("capacity set").is_urgent());
}

#[test]
fn overbooked_event_clamps_the_bar() {
    let info = CapacityInfo::new(10, 12).expect("capacity set");
    assert_eq!(info.spots_left, -2);
    assert!(info.is_urgent());
    assert_eq!(info.fill_percent(), 100.0);
}

#[test]
fn needs_both_numbers_and_a_non_zero_capacity() {
    let mut e = event("e", EventType::Webinar, "2026-04-01", "09:00");
    assert_eq!(CapacityInfo::from_event(&e), None);

    e.capacity = Some(50);
    assert_eq!(CapacityInfo::from_event(&e), None);

    e.registered = Some(0);
    let info = CapacityInfo::from_event(&e).expect("both numbers present");
    assert_eq!(info.spots_left, 50);

    e.capacity = Some(0);
    assert_eq!(CapacityInfo::from_event(&e), None);
}
