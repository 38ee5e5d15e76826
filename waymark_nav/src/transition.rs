// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Explicit transition context handed to render callbacks.

use std::collections::BTreeSet;

use crate::observer::Direction;

/// Shared-element key of the bottom navigation bar.
pub const BOTTOM_NAVIGATION: &str = "bottom_navigation";

/// Context passed down render calls for one transition.
///
/// Elements registered under the same key in the outgoing and incoming
/// scenes are animated as one shared element instead of leaving and entering.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransitionContext {
    direction: Option<Direction>,
    shared: BTreeSet<&'static str>,
}

impl TransitionContext {
    /// Context for a transition in `direction`.
    pub fn new(direction: Direction) -> Self {
        Self {
            direction: Some(direction),
            shared: BTreeSet::new(),
        }
    }

    /// Direction of the transition, or `None` for the first frame.
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    /// Returns `true` for pop transitions.
    pub fn is_pop(&self) -> bool {
        self.direction == Some(Direction::Pop)
    }

    /// Add a shared-element key.
    pub fn with_shared(mut self, key: &'static str) -> Self {
        self.shared.insert(key);
        self
    }

    /// Returns `true` if `key` is shared across this transition.
    pub fn is_shared(&self, key: &str) -> bool {
        self.shared.contains(key)
    }

    /// Shared-element keys, sorted.
    pub fn shared(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.shared.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_keys() {
        let ctx = TransitionContext::new(Direction::Pop).with_shared(BOTTOM_NAVIGATION);
        assert!(ctx.is_pop());
        assert!(ctx.is_shared("bottom_navigation"));
        assert!(!ctx.is_shared("header"));
        assert_eq!(ctx.shared().collect::<Vec<_>>(), vec![BOTTOM_NAVIGATION]);
        assert_eq!(TransitionContext::default().direction(), None);
    }
}
