use serde::{Deserialize, Serialize};

/// Closed set of event kinds. Declared in lexicographic order of their wire
/// names so the derived `Ord` matches the filter bar ordering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Conference,
    Meetup,
    #[default]
    Webinar,
    Workshop,
}

impl EventType {
    pub const ALL: [EventType; 4] = [
        EventType::Conference,
        EventType::Meetup,
        EventType::Webinar,
        EventType::Workshop,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Conference => "conference",
            EventType::Meetup => "meetup",
            EventType::Webinar => "webinar",
            EventType::Workshop => "workshop",
        }
    }

    /// Case-insensitive lookup of a wire name.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "conference" => Some(EventType::Conference),
            "meetup" => Some(EventType::Meetup),
            "webinar" => Some(EventType::Webinar),
            "workshop" => Some(EventType::Workshop),
            _ => None,
        }
    }

    /// Badge text, e.g. "Workshop".
    pub fn label(&self) -> &'static str {
        match self {
            EventType::Conference => "Conference",
            EventType::Meetup => "Meetup",
            EventType::Webinar => "Webinar",
            EventType::Workshop => "Workshop",
        }
    }

    /// Filter button text, e.g. "Workshops".
    pub fn plural_label(&self) -> &'static str {
        match self {
            EventType::Conference => "Conferences",
            EventType::Meetup => "Meetups",
            EventType::Webinar => "Webinars",
            EventType::Workshop => "Workshops",
        }
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
