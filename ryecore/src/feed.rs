//! Push-style value feeds for the pointer and viewport providers.
//!
//! The app publishes whatever egui reports each frame into a [`Feed`].
//! Whoever wants the values (the mounted playground) holds a
//! [`Subscription`], which only ever keeps the latest value. Dropping the
//! subscription detaches it from the feed, so unmounting the playground
//! never leaves a dangling listener behind for the next mount.
//!
//! Everything runs on the UI thread, hence `Rc` and `RefCell`.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

struct Listeners<T> {
    next_id: u64,
    slots: Vec<(u64, Rc<Cell<Option<T>>>)>,
}

/// A provider of `T` values. Cloning shares the same listener list.
pub struct Feed<T: Copy> {
    listeners: Rc<RefCell<Listeners<T>>>,
}

impl<T: Copy> Clone for Feed<T> {
    fn clone(&self) -> Self {
        Self {
            listeners: Rc::clone(&self.listeners),
        }
    }
}

impl<T: Copy> Default for Feed<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy> Feed<T> {
    pub fn new() -> Self {
        Self {
            listeners: Rc::new(RefCell::new(Listeners {
                next_id: 0,
                slots: Vec::new(),
            })),
        }
    }

    /// Deliver `value` to every live subscription.
    pub fn publish(&self, value: T) {
        for (_, slot) in self.listeners.borrow().slots.iter() {
            slot.set(Some(value));
        }
    }

    /// Start listening. The subscription sees nothing until the next publish.
    pub fn subscribe(&self) -> Subscription<T> {
        let mut listeners = self.listeners.borrow_mut();
        let id = listeners.next_id;
        listeners.next_id += 1;
        let latest = Rc::new(Cell::new(None));
        listeners.slots.push((id, Rc::clone(&latest)));
        Subscription {
            id,
            latest,
            feed: Rc::downgrade(&self.listeners),
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().slots.len()
    }
}

/// Handle to a feed. Unsubscribes on drop.
pub struct Subscription<T: Copy> {
    id: u64,
    latest: Rc<Cell<Option<T>>>,
    feed: Weak<RefCell<Listeners<T>>>,
}

impl<T: Copy> Subscription<T> {
    /// Most recent value, or `None` if nothing was published since subscribing.
    pub fn latest(&self) -> Option<T> {
        self.latest.get()
    }
}

impl<T: Copy> Drop for Subscription<T> {
    fn drop(&mut self) {
        // feed may already be gone
        if let Some(listeners) = self.feed.upgrade() {
            listeners.borrow_mut().slots.retain(|(id, _)| *id != self.id);
        }
    }
}
