use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Event;

static NEXT_VERSION: AtomicU64 = AtomicU64::new(1);

/// Immutable snapshot of the events supplied to one render pass.
///
/// Every snapshot gets a process-unique `version`; two catalogs compare equal only
/// when they are clones of the same snapshot. Views are memoized on that version.
#[derive(Clone, Debug)]
pub struct EventCatalog {
    events: Rc<[Event]>,
    version: u64,
}

impl EventCatalog {
    pub fn new(events: Vec<Event>) -> Self {
        Self {
            events: events.into(),
            version: NEXT_VERSION.fetch_add(1, Ordering::Relaxed),
        }
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl Default for EventCatalog {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl PartialEq for EventCatalog {
    fn eq(&self, other: &Self) -> bool {
        self.version == other.version
    }
}
