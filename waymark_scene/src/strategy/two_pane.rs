// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::scene::{Scene, SinglePaneScene, TwoPaneScene};
use crate::strategy::SceneStrategy;
use crate::types::{Entry, WidthClass};

/// Pairs the last two two-pane entries side by side, or shows the last entry alone.
///
/// This is the catch-all strategy: it declines only an empty stack.
///
/// - At `min_width` or wider, when the last two entries are both two-pane
///   eligible, they form a two-pane scene.
/// - Otherwise, at `min_width` or wider, a last entry that is two-pane and
///   placeholder eligible is paired with a placeholder (if enabled).
/// - Otherwise the last entry is shown in a single pane.
///
/// The bottom bar is shown when any consumed entry asks for it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TwoPaneStrategy {
    min_width: WidthClass,
    placeholder: bool,
}

impl Default for TwoPaneStrategy {
    fn default() -> Self {
        Self::new(WidthClass::Medium, true)
    }
}

impl TwoPaneStrategy {
    /// Create a strategy that splits at `min_width` and optionally pairs lone
    /// entries with a placeholder.
    pub const fn new(min_width: WidthClass, placeholder: bool) -> Self {
        Self {
            min_width,
            placeholder,
        }
    }

    /// Narrowest width that shows two panes.
    pub fn min_width(&self) -> WidthClass {
        self.min_width
    }

    /// Returns `true` if lone placeholder-eligible entries get a placeholder.
    pub fn placeholder(&self) -> bool {
        self.placeholder
    }
}

impl SceneStrategy for TwoPaneStrategy {
    fn calculate<K>(&self, entries: &[Entry<K>], width: WidthClass) -> Option<Scene> {
        let last = entries.len().checked_sub(1)?;
        let meta = entries[last].meta;
        if width >= self.min_width {
            if let Some(prev) = last.checked_sub(1)
                && meta.is_two_pane()
                && entries[prev].meta.is_two_pane()
            {
                return Some(Scene::TwoPane(TwoPaneScene {
                    first: prev,
                    second: Some(last),
                    bottom_bar: meta.shows_bottom_bar() || entries[prev].meta.shows_bottom_bar(),
                }));
            }
            if self.placeholder && meta.is_two_pane() && meta.wants_placeholder() {
                return Some(Scene::TwoPane(TwoPaneScene {
                    first: last,
                    second: None,
                    bottom_bar: meta.shows_bottom_bar(),
                }));
            }
        }
        Some(Scene::Single(SinglePaneScene {
            index: last,
            bottom_bar: meta.shows_bottom_bar(),
        }))
    }
}
