//! Upcoming/past partition, type inventory and filter options.

use std::rc::Rc;

use chrono::NaiveDateTime;
use tracing::{debug, warn};

use crate::models::{Event, EventCatalog, EventType};

/// Past cards shown below the upcoming grid.
pub const PAST_EVENTS_LIMIT: usize = 6;

/// Active type selector of the filter bar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TypeFilter {
    #[default]
    All,
    Only(EventType),
}

impl TypeFilter {
    pub fn matches(&self, event: &Event) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Only(t) => event.type_ == *t,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventPartition {
    /// Soonest first.
    pub upcoming: Vec<Event>,
    /// Most recent first.
    pub past: Vec<Event>,
}

impl EventPartition {
    /// The slice of past events the grid actually renders.
    pub fn visible_past(&self) -> &[Event] {
        &self.past[..self.past.len().min(PAST_EVENTS_LIMIT)]
    }
}

/// Split `events` around `now`, keeping only those matching `filter`.
///
/// An event starting exactly at `now` counts as upcoming. Both sorts are stable,
/// so events sharing an instant keep their input order. Events whose date or time
/// does not parse belong to neither side.
pub fn partition_events(events: &[Event], filter: TypeFilter, now: NaiveDateTime) -> EventPartition {
    let mut upcoming = Vec::new();
    let mut past = Vec::new();

    for event in events.iter().filter(|e| filter.matches(e)) {
        match event.instant() {
            Ok(at) if at >= now => upcoming.push((at, event.clone())),
            Ok(at) => past.push((at, event.clone())),
            Err(e) => warn!(event_id = %event.id, error = %e, "event left out of the grid"),
        }
    }

    upcoming.sort_by(|a, b| a.0.cmp(&b.0));
    past.sort_by(|a, b| b.0.cmp(&a.0));

    EventPartition {
        upcoming: upcoming.into_iter().map(|(_, e)| e).collect(),
        past: past.into_iter().map(|(_, e)| e).collect(),
    }
}

/// Distinct types present in `events`, in lexicographic order of their names.
pub fn event_types(events: &[Event]) -> Vec<EventType> {
    let mut types: Vec<EventType> = events.iter().map(|e| e.type_).collect();
    types.sort_by_key(|t| t.as_str());
    types.dedup();
    types
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterOption {
    pub filter: TypeFilter,
    pub label: String,
    /// Counted over the unfiltered event list.
    pub count: usize,
}

/// "All Events" followed by one option per type present, each with its count.
pub fn filter_options(events: &[Event]) -> Vec<FilterOption> {
    let mut options = vec![FilterOption {
        filter: TypeFilter::All,
        label: "All Events".to_string(),
        count: events.len(),
    }];
    options.extend(event_types(events).into_iter().map(|t| FilterOption {
        filter: TypeFilter::Only(t),
        label: t.plural_label().to_string(),
        count: events.iter().filter(|e| e.type_ == t).count(),
    }));
    options
}

/// The filter bar only makes sense with more than one type to choose from.
pub fn show_filter_bar(enable_filtering: bool, events: &[Event]) -> bool {
    enable_filtering && event_types(events).len() > 1
}

/// Caches the last partition, keyed on (catalog version, filter).
///
/// `now` is read only on a miss, matching a memo that depends on the event list
/// and the filter but not on the clock.
#[derive(Debug, Default)]
pub struct PartitionMemo {
    key: Option<(u64, TypeFilter)>,
    value: Rc<EventPartition>,
}

impl PartitionMemo {
    pub fn get(&mut self, catalog: &EventCatalog, filter: TypeFilter, now: NaiveDateTime) -> Rc<EventPartition> {
        let key = (catalog.version(), filter);
        if self.key != Some(key) {
            debug!(version = key.0, filter = ?filter, "recomputing event partition");
            self.value = Rc::new(partition_events(catalog.events(), filter, now));
            self.key = Some(key);
        }
        Rc::clone(&self.value)
    }

    pub fn invalidate(&mut self) {
        self.key = None;
    }
}
