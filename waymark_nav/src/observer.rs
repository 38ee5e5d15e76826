// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Change notifications for renderers.
//!
//! Every stack mutation of a [`Navigator`](crate::Navigator) publishes one
//! [`NavEvent`] to every subscriber, synchronously and in subscription order.
//! Subscribers re-run scene selection and back planning from the event; the
//! navigator never pushes scenes itself.

use crate::destination::Destination;

/// Which way a change moved.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Something was opened or a section was selected.
    Forward,
    /// Something was closed.
    Pop,
}

/// A committed change to the visible stack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavEvent {
    /// Stack revision after the change.
    pub revision: u64,
    /// Direction of the change, for picking enter vs. pop transitions.
    pub direction: Direction,
    /// Visible stack after the change.
    pub visible: Vec<Destination>,
}

/// Handle returned by [`Navigator::subscribe`](crate::Navigator::subscribe).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(&NavEvent)>;

#[derive(Default)]
pub(crate) struct Observers {
    next: u64,
    callbacks: Vec<(SubscriptionId, Callback)>,
}

impl core::fmt::Debug for Observers {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Observers")
            .field("count", &self.callbacks.len())
            .finish_non_exhaustive()
    }
}

impl Observers {
    pub(crate) fn subscribe(&mut self, callback: impl FnMut(&NavEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next);
        self.next += 1;
        self.callbacks.push((id, Box::new(callback)));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.callbacks.len();
        self.callbacks.retain(|(sid, _)| *sid != id);
        self.callbacks.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub(crate) fn publish(&mut self, event: &NavEvent) {
        log::trace!(
            "publishing revision {} to {} subscribers",
            event.revision,
            self.callbacks.len()
        );
        for (_, callback) in &mut self.callbacks {
            callback(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn event(revision: u64) -> NavEvent {
        NavEvent {
            revision,
            direction: Direction::Forward,
            visible: vec![Destination::Home],
        }
    }

    #[test]
    fn publishes_in_subscription_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut observers = Observers::default();
        for tag in ["a", "b"] {
            let log = Rc::clone(&log);
            observers.subscribe(move |e| log.borrow_mut().push((tag, e.revision)));
        }
        observers.publish(&event(3));
        assert_eq!(*log.borrow(), vec![("a", 3), ("b", 3)]);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let count = Rc::new(RefCell::new(0));
        let mut observers = Observers::default();
        let id = {
            let count = Rc::clone(&count);
            observers.subscribe(move |_| *count.borrow_mut() += 1)
        };
        observers.publish(&event(1));
        assert!(observers.unsubscribe(id));
        assert!(!observers.unsubscribe(id));
        observers.publish(&event(2));
        assert_eq!(*count.borrow(), 1);
        assert_eq!(observers.len(), 0);
    }
}
