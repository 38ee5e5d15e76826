// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Computed scenes: which stack entries are on screen, and in which roles.
//!
//! A [`Scene`] refers to entries by index into the stack it was computed
//! from. It is recomputed on every stack change and never persisted.

use alloc::vec::Vec;
use core::ops::Range;

use crate::shape::PaneShape;
use crate::types::{Entry, GroupKey, OverlayRequest, PaneRole};

/// How an overlay is presented for the current width.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OverlayPresentation {
    /// Modal bottom sheet, used on compact windows.
    BottomSheet,
    /// Centered dialog, used on wider windows.
    Dialog,
}

/// An entry drawn above everything else.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct OverlayScene {
    /// Index of the overlay entry (the last of the stack it was computed from).
    pub index: usize,
    /// Dismissal behavior requested by the entry.
    pub request: OverlayRequest,
    /// Sheet or dialog.
    pub presentation: OverlayPresentation,
}

impl OverlayScene {
    /// Entries drawn underneath the overlay. Excludes the overlay itself.
    pub fn overlaid_entries(&self) -> Range<usize> {
        0..self.index
    }
}

/// Content of the detail slot of a [`ListDetailScene`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DetailPane {
    /// The last detail entry of the run.
    Entry(usize),
    /// No detail entry; the list's placeholder fills the expanded slot.
    Placeholder,
    /// No detail entry and the slot is collapsed.
    Hidden,
}

/// Up to three panes of one list-detail group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListDetailScene {
    /// Group all consumed entries share.
    pub group: GroupKey,
    /// Consumed entries: a contiguous suffix of the stack.
    pub consumed: Range<usize>,
    /// Last list entry of the run.
    pub list: usize,
    /// Last detail entry of the run, or what fills its slot.
    pub detail: DetailPane,
    /// Last extra entry of the run.
    pub extra: Option<usize>,
    /// Expanded panes.
    pub shape: PaneShape,
    /// Pane budget the shape was computed with.
    pub max_panes: usize,
    /// Any consumed entry asks for the bottom bar.
    pub bottom_bar: bool,
}

impl ListDetailScene {
    /// Entry index assigned to `role`, regardless of whether its pane is expanded.
    pub fn entry_for(&self, role: PaneRole) -> Option<usize> {
        match role {
            PaneRole::List => Some(self.list),
            PaneRole::Detail => match self.detail {
                DetailPane::Entry(i) => Some(i),
                DetailPane::Placeholder | DetailPane::Hidden => None,
            },
            PaneRole::Extra => self.extra,
        }
    }
}

/// Two side-by-side panes, the second possibly a placeholder.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TwoPaneScene {
    /// Index of the first pane's entry.
    pub first: usize,
    /// Index of the second pane's entry, or `None` for the placeholder.
    pub second: Option<usize>,
    /// Any consumed entry asks for the bottom bar.
    pub bottom_bar: bool,
}

/// A single full-width pane.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SinglePaneScene {
    /// Index of the shown entry.
    pub index: usize,
    /// The entry asks for the bottom bar.
    pub bottom_bar: bool,
}

/// On-screen arrangement of a stack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Scene {
    /// Dialog or sheet above the rest.
    Overlay(OverlayScene),
    /// List/detail/extra panes of one group.
    ListDetail(ListDetailScene),
    /// Two adjacent entries, or one entry and a placeholder.
    TwoPane(TwoPaneScene),
    /// The last entry alone.
    Single(SinglePaneScene),
}

/// Identity of a scene, for deciding whether a change animates within a
/// scene or transitions between scenes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SceneKey<K> {
    /// A list-detail scene is identified by its group.
    Group(GroupKey),
    /// Other scenes are identified by the keys they render.
    Entries(Vec<K>),
}

impl Scene {
    /// Stack indices this scene consumes; always a contiguous range ending at
    /// the top of the stack it was computed from.
    pub fn consumed(&self) -> Range<usize> {
        match self {
            Self::Overlay(o) => o.index..o.index + 1,
            Self::ListDetail(ld) => ld.consumed.clone(),
            Self::TwoPane(tp) => tp.first..tp.second.unwrap_or(tp.first) + 1,
            Self::Single(s) => s.index..s.index + 1,
        }
    }

    /// Entries before the consumed range.
    pub fn previous_entries(&self) -> Range<usize> {
        0..self.consumed().start
    }

    /// Indices of the entries actually rendered, in pane order.
    ///
    /// Entries that are consumed but shadowed or collapsed are not listed.
    pub fn rendered(&self) -> Vec<usize> {
        match self {
            Self::Overlay(o) => alloc::vec![o.index],
            Self::ListDetail(ld) => {
                let mut out = Vec::with_capacity(3);
                for role in [PaneRole::List, PaneRole::Detail, PaneRole::Extra] {
                    if ld.shape.shows(role)
                        && let Some(i) = ld.entry_for(role)
                    {
                        out.push(i);
                    }
                }
                out
            }
            Self::TwoPane(tp) => core::iter::once(tp.first).chain(tp.second).collect(),
            Self::Single(s) => alloc::vec![s.index],
        }
    }

    /// List-detail shape, for list-detail scenes only.
    pub fn shape(&self) -> Option<PaneShape> {
        match self {
            Self::ListDetail(ld) => Some(ld.shape),
            _ => None,
        }
    }

    /// Returns `true` if the bottom bar is shown with this scene.
    pub fn shows_bottom_bar(&self) -> bool {
        match self {
            Self::Overlay(_) => false,
            Self::ListDetail(ld) => ld.bottom_bar,
            Self::TwoPane(tp) => tp.bottom_bar,
            Self::Single(s) => s.bottom_bar,
        }
    }

    /// Returns `true` for overlay scenes.
    pub fn is_overlay(&self) -> bool {
        matches!(self, Self::Overlay(_))
    }

    /// Identity of this scene over `entries`, the stack it was computed from.
    pub fn key<K: Clone>(&self, entries: &[Entry<K>]) -> SceneKey<K> {
        match self {
            Self::ListDetail(ld) => SceneKey::Group(ld.group),
            _ => SceneKey::Entries(
                self.consumed()
                    .filter_map(|i| entries.get(i).map(|e| e.key.clone()))
                    .collect(),
            ),
        }
    }
}

/// A base scene with any overlays stacked above it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SceneLayers {
    /// Scene for the entries below the lowest overlay.
    pub base: Option<Scene>,
    /// Overlays, bottom to top.
    pub overlays: Vec<OverlayScene>,
}

impl SceneLayers {
    /// The topmost scene: the last overlay, or the base scene.
    pub fn top(&self) -> Option<Scene> {
        self.overlays
            .last()
            .map(|o| Scene::Overlay(*o))
            .or_else(|| self.base.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EntryMeta;
    use alloc::vec;

    #[test]
    fn consumed_ranges() {
        let two = Scene::TwoPane(TwoPaneScene {
            first: 3,
            second: Some(4),
            bottom_bar: false,
        });
        assert_eq!(two.consumed(), 3..5);
        assert_eq!(two.previous_entries(), 0..3);

        let placeholder = Scene::TwoPane(TwoPaneScene {
            first: 2,
            second: None,
            bottom_bar: true,
        });
        assert_eq!(placeholder.consumed(), 2..3);
        assert_eq!(placeholder.rendered(), vec![2]);
        assert!(placeholder.shows_bottom_bar());
    }

    #[test]
    fn list_detail_renders_only_expanded_panes() {
        let scene = Scene::ListDetail(ListDetailScene {
            group: GroupKey("g"),
            consumed: 1..4,
            list: 1,
            detail: DetailPane::Entry(3),
            extra: None,
            shape: PaneShape::DETAIL,
            max_panes: 1,
            bottom_bar: false,
        });
        assert_eq!(scene.rendered(), vec![3]);
        assert_eq!(scene.shape(), Some(PaneShape::DETAIL));
    }

    #[test]
    fn placeholder_detail_is_not_rendered_as_entry() {
        let scene = Scene::ListDetail(ListDetailScene {
            group: GroupKey("g"),
            consumed: 0..1,
            list: 0,
            detail: DetailPane::Placeholder,
            extra: None,
            shape: PaneShape::LIST | PaneShape::DETAIL,
            max_panes: 3,
            bottom_bar: true,
        });
        assert_eq!(scene.rendered(), vec![0]);
    }

    #[test]
    fn scene_keys() {
        let entries = vec![
            Entry::new('a', EntryMeta::NONE),
            Entry::new('b', EntryMeta::NONE),
        ];
        let single = Scene::Single(SinglePaneScene {
            index: 1,
            bottom_bar: false,
        });
        assert_eq!(single.key(&entries), SceneKey::Entries(vec!['b']));
        let overlay = OverlayScene {
            index: 1,
            request: OverlayRequest::DEFAULT,
            presentation: OverlayPresentation::Dialog,
        };
        assert_eq!(overlay.overlaid_entries(), 0..1);
        let layers = SceneLayers {
            base: Some(Scene::Single(SinglePaneScene {
                index: 0,
                bottom_bar: false,
            })),
            overlays: vec![overlay],
        };
        assert_eq!(layers.top(), Some(Scene::Overlay(overlay)));
    }
}
