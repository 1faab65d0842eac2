//! Once-per-second "now" publisher for live countdowns.
//!
//! The ticker owns no timer itself: whoever drives it calls [`Ticker::tick`] on
//! each interval. Views subscribe and keep the returned [`Subscription`] for as
//! long as they are displayed; dropping it removes the callback.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use chrono::NaiveDateTime;

type Callback = Rc<dyn Fn(NaiveDateTime)>;

#[derive(Default)]
struct Subscribers {
    next_id: u64,
    callbacks: BTreeMap<u64, Callback>,
}

/// Single-threaded publisher. Clones share the same subscriber set.
#[derive(Clone, Default)]
pub struct Ticker {
    inner: Rc<RefCell<Subscribers>>,
}

impl Ticker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, callback: impl Fn(NaiveDateTime) + 'static) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.callbacks.insert(id, Rc::new(callback));
        Subscription {
            id,
            owner: Rc::downgrade(&self.inner),
        }
    }

    /// Publish `now` to every live subscriber, in subscription order.
    pub fn tick(&self, now: NaiveDateTime) {
        // Snapshot first: a callback may subscribe or drop a subscription.
        let callbacks: Vec<Callback> = self.inner.borrow().callbacks.values().cloned().collect();
        for callback in callbacks {
            callback(now);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().callbacks.len()
    }
}

impl std::fmt::Debug for Ticker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ticker")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// Handle of one subscription; unsubscribes on drop.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    id: u64,
    owner: Weak<RefCell<Subscribers>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(owner) = self.owner.upgrade() {
            owner.borrow_mut().callbacks.remove(&self.id);
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}
