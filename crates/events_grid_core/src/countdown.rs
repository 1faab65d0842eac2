//! Remaining-time breakdown for the per-card countdown.

use chrono::{Local, NaiveDateTime};

pub const TICK_INTERVAL_MS: u64 = 1000;

const MS_PER_SECOND: i64 = 1000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Breakdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeLeft {
    Remaining(Breakdown),
    Over,
}

impl TimeLeft {
    pub fn is_over(&self) -> bool {
        matches!(self, TimeLeft::Over)
    }
}

/// Wall-clock now, naive local time like event instants.
pub fn now_local() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Whole days, then hours (0–23), minutes and seconds (0–59) until `target`.
/// A difference of zero or less is [`TimeLeft::Over`].
pub fn time_left(target: NaiveDateTime, now: NaiveDateTime) -> TimeLeft {
    let diff = (target - now).num_milliseconds();
    if diff <= 0 {
        return TimeLeft::Over;
    }
    TimeLeft::Remaining(Breakdown {
        days: diff / MS_PER_DAY,
        hours: (diff % MS_PER_DAY) / MS_PER_HOUR,
        minutes: (diff % MS_PER_HOUR) / MS_PER_MINUTE,
        seconds: (diff % MS_PER_MINUTE) / MS_PER_SECOND,
    })
}

/// One box of the countdown display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    pub value: String,
    pub unit: &'static str,
}

impl Breakdown {
    /// Display boxes: days only when non-zero, the rest zero-padded.
    pub fn segments(&self) -> Vec<Segment> {
        let mut out = Vec::with_capacity(4);
        if self.days > 0 {
            out.push(Segment { value: self.days.to_string(), unit: "d" });
        }
        out.push(Segment { value: format!("{:02}", self.hours), unit: "h" });
        out.push(Segment { value: format!("{:02}", self.minutes), unit: "m" });
        out.push(Segment { value: format!("{:02}", self.seconds), unit: "s" });
        out
    }
}
