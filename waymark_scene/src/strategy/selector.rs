// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use crate::scene::{Scene, SceneLayers};
use crate::strategy::{ListDetailStrategy, OverlayStrategy, SceneStrategy, Then, TwoPaneStrategy};
use crate::types::{Entry, PaneDirective, WidthClass};

type Chain = Then<Then<OverlayStrategy, ListDetailStrategy>, TwoPaneStrategy>;

/// The composite scene strategy: overlay, then list-detail, then two-pane.
///
/// ## Usage
///
/// - Build with [`SceneSelector::new`], or use the default configuration.
/// - Call [`SceneSelector::select`] on every stack or width change for the
///   topmost scene, or [`SceneSelector::select_layers`] for the base scene
///   plus every overlay stacked above it.
///
/// Selection is pure; it may be called speculatively for several widths.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct SceneSelector {
    chain: Chain,
    list_detail: ListDetailStrategy,
    two_pane: TwoPaneStrategy,
}

impl core::fmt::Debug for SceneSelector {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SceneSelector")
            .field("list_detail", &self.list_detail)
            .field("two_pane", &self.two_pane)
            .finish_non_exhaustive()
    }
}

impl Default for SceneSelector {
    fn default() -> Self {
        Self::new(ListDetailStrategy::default(), TwoPaneStrategy::default())
    }
}

impl SceneSelector {
    /// Create a selector from configured list-detail and two-pane strategies.
    pub fn new(list_detail: ListDetailStrategy, two_pane: TwoPaneStrategy) -> Self {
        Self {
            chain: Then::new(Then::new(OverlayStrategy, list_detail), two_pane),
            list_detail,
            two_pane,
        }
    }

    /// Pane budget used for list-detail scenes.
    pub fn directive(&self) -> PaneDirective {
        self.list_detail.directive()
    }

    /// Two-pane fallback configuration.
    pub fn two_pane(&self) -> TwoPaneStrategy {
        self.two_pane
    }

    /// Select the topmost scene for `entries` at `width`.
    ///
    /// Returns `None` only when no strategy matches; with the built-in
    /// fallback that happens for an empty stack.
    pub fn select<K>(&self, entries: &[Entry<K>], width: WidthClass) -> Option<Scene> {
        let scene = self.chain.calculate(entries, width);
        match &scene {
            Some(s) => log::debug!(
                "selected {} scene over {:?} at {:?}",
                kind(s),
                s.consumed(),
                width
            ),
            None => log::warn!("no scene for a stack of {} entries", entries.len()),
        }
        scene
    }

    /// Select the base scene and every overlay stacked on top of it.
    ///
    /// Overlays are peeled off the top of the stack one at a time; the base
    /// scene is selected for what remains below the lowest overlay.
    pub fn select_layers<K>(&self, entries: &[Entry<K>], width: WidthClass) -> SceneLayers {
        let mut overlays = Vec::new();
        let mut end = entries.len();
        while let Some(Scene::Overlay(o)) = OverlayStrategy.calculate(&entries[..end], width) {
            overlays.push(o);
            end = o.index;
        }
        overlays.reverse();
        let base = self.select(&entries[..end], width);
        SceneLayers { base, overlays }
    }
}

impl SceneStrategy for SceneSelector {
    fn calculate<K>(&self, entries: &[Entry<K>], width: WidthClass) -> Option<Scene> {
        self.select(entries, width)
    }
}

fn kind(scene: &Scene) -> &'static str {
    match scene {
        Scene::Overlay(_) => "overlay",
        Scene::ListDetail(_) => "list-detail",
        Scene::TwoPane(_) => "two-pane",
        Scene::Single(_) => "single-pane",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{DetailPane, SinglePaneScene};
    use crate::types::EntryMeta;
    use alloc::vec;

    const HOME: EntryMeta = EntryMeta::list_pane("home")
        .with_bottom_bar()
        .with_detail_placeholder();
    const HOME_DETAIL: EntryMeta = EntryMeta::detail_pane("home");

    #[test]
    fn overlay_takes_precedence_at_every_width() {
        let entries = vec![
            Entry::new(0, HOME),
            Entry::new(1, HOME_DETAIL),
            Entry::new(2, EntryMeta::overlay()),
        ];
        let selector = SceneSelector::default();
        for width in [WidthClass::Compact, WidthClass::Medium, WidthClass::Expanded] {
            let Some(Scene::Overlay(o)) = selector.select(&entries, width) else {
                panic!("expected overlay at {width:?}");
            };
            assert_eq!(o.overlaid_entries(), 0..2);
        }
    }

    #[test]
    fn list_detail_before_fallback() {
        let entries = vec![Entry::new(0, HOME), Entry::new(1, HOME_DETAIL)];
        let Some(Scene::ListDetail(ld)) = SceneSelector::default().select(&entries, WidthClass::Medium)
        else {
            panic!("expected list-detail");
        };
        assert_eq!(ld.detail, DetailPane::Entry(1));
    }

    #[test]
    fn unroled_tail_falls_back_to_single_pane() {
        let entries = vec![Entry::new(0, HOME), Entry::new(1, EntryMeta::NONE)];
        assert_eq!(
            SceneSelector::default().select(&entries, WidthClass::Expanded),
            Some(Scene::Single(SinglePaneScene {
                index: 1,
                bottom_bar: false,
            }))
        );
    }

    #[test]
    fn empty_stack_has_no_scene() {
        assert_eq!(
            SceneSelector::default().select::<u8>(&[], WidthClass::Compact),
            None
        );
    }

    #[test]
    fn layers_peel_stacked_overlays() {
        let entries = vec![
            Entry::new(0, HOME),
            Entry::new(1, EntryMeta::overlay()),
            Entry::new(2, EntryMeta::overlay()),
        ];
        let layers = SceneSelector::default().select_layers(&entries, WidthClass::Compact);
        assert_eq!(
            layers.overlays.iter().map(|o| o.index).collect::<Vec<_>>(),
            vec![1, 2]
        );
        let Some(Scene::ListDetail(base)) = layers.base else {
            panic!("expected list-detail base");
        };
        assert_eq!(base.consumed, 0..1);
    }

    #[test]
    fn layers_without_overlays_match_select() {
        let entries = vec![Entry::new(0, HOME), Entry::new(1, HOME_DETAIL)];
        let selector = SceneSelector::default();
        let layers = selector.select_layers(&entries, WidthClass::Expanded);
        assert!(layers.overlays.is_empty());
        assert_eq!(layers.base, selector.select(&entries, WidthClass::Expanded));
    }
}
