use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use super::EventType;
use crate::error::{EventsGridError, Result};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Normalized event record. Date and time stay in their wire form; [`Event::instant`]
/// combines them as naive local time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: String,
    #[serde(rename = "type")]
    pub type_: EventType,
    pub location: String,
    pub is_virtual: bool,
    pub registration_url: Option<String>,
    pub image: Option<String>,
    #[serde(default)]
    pub speakers: Vec<String>,
    pub capacity: Option<u32>,
    pub registered: Option<u32>,
}

impl Event {
    /// The point in time this event starts, with no timezone conversion.
    pub fn instant(&self) -> Result<NaiveDateTime> {
        let date = NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT)
            .map_err(|_| EventsGridError::InvalidDate(self.date.clone()))?;
        let time = parse_wall_time(&self.time)?;
        Ok(date.and_time(time))
    }

    pub fn is_past(&self, now: NaiveDateTime) -> bool {
        matches!(self.instant(), Ok(at) if at < now)
    }
}

/// Accepts `HH:MM` and `HH:MM:SS`; single-digit hours are tolerated.
pub(crate) fn parse_wall_time(raw: &str) -> Result<NaiveTime> {
    let s = raw.trim();
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .map_err(|_| EventsGridError::InvalidTime(raw.to_string()))
}
