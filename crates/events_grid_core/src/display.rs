//! Card presentation rules: labels, formatted date, call-to-action.

use chrono::NaiveDateTime;

use crate::capacity::CapacityInfo;
use crate::models::{Event, EventType};

pub const EMPTY_TITLE: &str = "No upcoming events scheduled.";
pub const EMPTY_HINT: &str = "Check back soon for new events!";
pub const COUNTDOWN_OVER: &str = "Event started";

/// Placeholder cards shown while the grid settles.
pub const SKELETON_COUNT: usize = 3;
/// Settle delay after first display.
pub const INITIAL_SETTLE_MS: u64 = 300;
/// Settle delay after a filter change.
pub const FILTER_SETTLE_MS: u64 = 150;

/// e.g. "Mon, Jan 5, 2026"
pub fn format_date(at: NaiveDateTime) -> String {
    at.format("%a, %b %-d, %Y").to_string()
}

/// e.g. "9:00 AM"
pub fn format_time(at: NaiveDateTime) -> String {
    at.format("%-I:%M %p").to_string()
}

pub fn upcoming_subtitle(count: usize) -> String {
    let noun = if count == 1 { "event" } else { "events" };
    format!("{count} upcoming {noun}")
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CardAction {
    Register(String),
    Ended,
    ComingSoon,
}

impl CardAction {
    pub fn for_event(event: &Event, is_past: bool) -> Self {
        match (&event.registration_url, is_past) {
            (_, true) => CardAction::Ended,
            (Some(url), false) => CardAction::Register(url.clone()),
            (None, false) => CardAction::ComingSoon,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CardAction::Register(_) => "Register Now",
            CardAction::Ended => "Event Ended",
            CardAction::ComingSoon => "Coming Soon",
        }
    }
}

/// Everything a card renders, derived once per event.
#[derive(Clone, Debug, PartialEq)]
pub struct CardView {
    pub id: String,
    pub title: String,
    pub description: String,
    pub type_: EventType,
    pub schedule: Option<String>,
    pub location: String,
    pub speakers: Option<String>,
    pub is_virtual: bool,
    pub image: Option<String>,
    pub is_past: bool,
    /// Only set for events that have not started.
    pub countdown_target: Option<NaiveDateTime>,
    /// Only set for events that have not started.
    pub capacity: Option<CapacityInfo>,
    pub action: CardAction,
}

impl CardView {
    pub fn new(event: &Event, is_past: bool) -> Self {
        let instant = event.instant().ok();
        Self {
            id: event.id.clone(),
            title: event.title.clone(),
            description: event.description.clone(),
            type_: event.type_,
            schedule: instant.map(|at| format!("{} at {}", format_date(at), format_time(at))),
            location: event.location.clone(),
            speakers: (!event.speakers.is_empty()).then(|| event.speakers.join(", ")),
            is_virtual: event.is_virtual,
            image: event.image.clone(),
            is_past,
            countdown_target: instant.filter(|_| !is_past),
            capacity: CapacityInfo::from_event(event).filter(|_| !is_past),
            action: CardAction::for_event(event, is_past),
        }
    }
}
