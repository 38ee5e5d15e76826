// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scene strategies and their composition.
//!
//! ## Overview
//!
//! A [`SceneStrategy`] inspects a role-tagged stack and either claims a
//! suffix of it as a [`Scene`] or declines with `None`. Strategies compose
//! with [`SceneStrategy::then`]: the first one to produce a scene wins.
//!
//! Strategies only read entry metadata; keys are carried through untouched,
//! so every strategy works for any key type.
//!
//! ## Built-in strategies, in selection order
//!
//! 1. [`OverlayStrategy`]: the last entry is an overlay.
//! 2. [`ListDetailStrategy`]: the tail run of one list-detail group.
//! 3. [`TwoPaneStrategy`]: two-pane pairing, falling back to a single pane.
//!
//! [`SceneSelector`] bundles the three in that order.

mod list_detail;
mod overlay;
mod selector;
mod two_pane;

pub use list_detail::ListDetailStrategy;
pub use overlay::OverlayStrategy;
pub use selector::SceneSelector;
pub use two_pane::TwoPaneStrategy;

use crate::scene::Scene;
use crate::types::{Entry, WidthClass};

/// Computes a scene for the tail of a stack, or declines.
pub trait SceneStrategy {
    /// Returns the scene this strategy builds for `entries` at `width`.
    ///
    /// `entries` is ordered oldest first. A returned scene consumes a
    /// contiguous suffix of `entries`.
    fn calculate<K>(&self, entries: &[Entry<K>], width: WidthClass) -> Option<Scene>;

    /// Chain `next` after this strategy; it is consulted only when this one
    /// declines.
    fn then<S: SceneStrategy>(self, next: S) -> Then<Self, S>
    where
        Self: Sized,
    {
        Then::new(self, next)
    }
}

/// Two strategies tried in order. See [`SceneStrategy::then`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Then<A, B> {
    first: A,
    second: B,
}

impl<A, B> Then<A, B> {
    /// Try `first`, then `second`.
    pub const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A: SceneStrategy, B: SceneStrategy> SceneStrategy for Then<A, B> {
    fn calculate<K>(&self, entries: &[Entry<K>], width: WidthClass) -> Option<Scene> {
        self.first
            .calculate(entries, width)
            .or_else(|| self.second.calculate(entries, width))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::SinglePaneScene;
    use crate::types::EntryMeta;
    use alloc::vec;

    struct Never;

    impl SceneStrategy for Never {
        fn calculate<K>(&self, _: &[Entry<K>], _: WidthClass) -> Option<Scene> {
            None
        }
    }

    struct First;

    impl SceneStrategy for First {
        fn calculate<K>(&self, entries: &[Entry<K>], _: WidthClass) -> Option<Scene> {
            (!entries.is_empty()).then_some(Scene::Single(SinglePaneScene {
                index: 0,
                bottom_bar: false,
            }))
        }
    }

    #[test]
    fn then_falls_through_declining_strategies() {
        let entries = vec![Entry::new(1_u8, EntryMeta::NONE)];
        let chain = Never.then(Never).then(First);
        assert!(matches!(
            chain.calculate(&entries, WidthClass::Compact),
            Some(Scene::Single(SinglePaneScene { index: 0, .. }))
        ));
        assert_eq!(Never.then(Never).calculate(&entries, WidthClass::Compact), None);
    }

    #[test]
    fn first_match_wins() {
        let entries = vec![Entry::new(1_u8, EntryMeta::NONE)];
        let chain = First.then(TwoPaneStrategy::default());
        assert_eq!(
            chain.calculate(&entries, WidthClass::Expanded),
            First.calculate(&entries, WidthClass::Expanded)
        );
    }
}
