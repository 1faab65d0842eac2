use crate::models::Event;

/// Below this many open spots the indicator turns urgent.
pub const LOW_AVAILABILITY_THRESHOLD: i64 = 10;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CapacityInfo {
    pub capacity: u32,
    pub registered: u32,
    /// Negative when the event is overbooked.
    pub spots_left: i64,
    /// `registered / capacity`, unclamped.
    pub fill: f64,
}

impl CapacityInfo {
    /// Needs both numbers and a non-zero capacity.
    pub fn from_event(event: &Event) -> Option<Self> {
        Self::new(event.capacity?, event.registered?)
    }

    pub fn new(capacity: u32, registered: u32) -> Option<Self> {
        if capacity == 0 {
            return None;
        }
        Some(Self {
            capacity,
            registered,
            spots_left: i64::from(capacity) - i64::from(registered),
            fill: f64::from(registered) / f64::from(capacity),
        })
    }

    pub fn is_urgent(&self) -> bool {
        self.spots_left < LOW_AVAILABILITY_THRESHOLD
    }

    /// Bar width in percent, clamped to 0–100.
    pub fn fill_percent(&self) -> f64 {
        (self.fill * 100.0).clamp(0.0, 100.0)
    }
}
