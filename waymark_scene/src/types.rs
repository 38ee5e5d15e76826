// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for scene selection: width classes, pane roles, and per-entry role metadata.
//!
//! ## Overview
//!
//! Every destination that can appear on a stack is registered once with an
//! [`EntryMeta`] record. The record is static configuration: it depends on
//! which screen a destination is, never on runtime state. A stack handed to
//! the [selector](crate::strategy::SceneSelector) is a slice of [`Entry`]
//! values, each pairing a key with the metadata of its registration.

/// Available window width, ordered from narrowest to widest.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WidthClass {
    /// Phone portrait; room for a single pane.
    #[default]
    Compact,
    /// Small tablet or foldable; room for more than one pane.
    Medium,
    /// Large tablet or desktop.
    Expanded,
}

/// Logical position of an entry within a list-detail arrangement.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PaneRole {
    /// The list (primary navigation) pane.
    List,
    /// The detail pane, showing the item picked from the list.
    Detail,
    /// A supplementary pane next to the detail.
    Extra,
}

/// Identifies which list-detail grouping an entry belongs to.
///
/// Several groupings may coexist on one stack (one per tab, typically); a
/// list-detail scene only ever spans entries of a single group.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GroupKey(pub &'static str);

/// Pane assignment of an entry: its role and the group it takes that role in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PaneMeta {
    /// Role within the group.
    pub role: PaneRole,
    /// Grouping key.
    pub group: GroupKey,
}

bitflags::bitflags! {
    /// Boolean role flags of an entry.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct EntryFlags: u8 {
        /// The bottom bar is shown while this entry is part of the scene.
        const BOTTOM_BAR         = 0b0000_0001;
        /// The entry may share a two-pane scene with an adjacent two-pane entry.
        const TWO_PANE           = 0b0000_0010;
        /// Alone on a wide window, the entry is paired with a placeholder pane.
        const PLACEHOLDER        = 0b0000_0100;
        /// A list entry that fills an empty detail slot with a placeholder.
        const DETAIL_PLACEHOLDER = 0b0000_1000;
    }
}

/// How an overlay entry wants to be dismissed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct OverlayRequest {
    /// A back event dismisses the overlay.
    pub dismiss_on_back: bool,
    /// A tap outside the overlay dismisses it.
    pub dismiss_on_outside_click: bool,
}

impl Default for OverlayRequest {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl OverlayRequest {
    /// Dismissable by back and by an outside tap.
    pub const DEFAULT: Self = Self {
        dismiss_on_back: true,
        dismiss_on_outside_click: true,
    };
}

/// Static role metadata of a registered destination.
///
/// Built with the const helpers, e.g.
/// `EntryMeta::list_pane("home").with_bottom_bar().with_detail_placeholder()`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct EntryMeta {
    /// List-detail assignment, if the entry takes part in one.
    pub pane: Option<PaneMeta>,
    /// Bottom bar and two-pane flags.
    pub flags: EntryFlags,
    /// Present when the entry is drawn as a floating overlay above everything else.
    pub overlay: Option<OverlayRequest>,
}

impl EntryMeta {
    /// No role at all: the entry is shown by the single-pane fallback.
    pub const NONE: Self = Self {
        pane: None,
        flags: EntryFlags::empty(),
        overlay: None,
    };

    const fn pane(role: PaneRole, group: &'static str) -> Self {
        Self {
            pane: Some(PaneMeta {
                role,
                group: GroupKey(group),
            }),
            ..Self::NONE
        }
    }

    /// List pane of `group`.
    pub const fn list_pane(group: &'static str) -> Self {
        Self::pane(PaneRole::List, group)
    }

    /// Detail pane of `group`.
    pub const fn detail_pane(group: &'static str) -> Self {
        Self::pane(PaneRole::Detail, group)
    }

    /// Extra pane of `group`.
    pub const fn extra_pane(group: &'static str) -> Self {
        Self::pane(PaneRole::Extra, group)
    }

    /// Overlay dismissable by back and by an outside tap.
    pub const fn overlay() -> Self {
        Self::NONE.with_overlay(OverlayRequest::DEFAULT)
    }

    /// Mark as an overlay with the given dismissal behavior.
    pub const fn with_overlay(mut self, request: OverlayRequest) -> Self {
        self.overlay = Some(request);
        self
    }

    /// Show the bottom bar while this entry is on screen.
    pub const fn with_bottom_bar(mut self) -> Self {
        self.flags = self.flags.union(EntryFlags::BOTTOM_BAR);
        self
    }

    /// Allow this entry into a two-pane scene.
    pub const fn two_pane(mut self) -> Self {
        self.flags = self.flags.union(EntryFlags::TWO_PANE);
        self
    }

    /// Pair this entry with a placeholder when it is alone on a wide window.
    pub const fn with_placeholder(mut self) -> Self {
        self.flags = self.flags.union(EntryFlags::PLACEHOLDER);
        self
    }

    /// Fill an empty detail slot with a placeholder (list panes only).
    pub const fn with_detail_placeholder(mut self) -> Self {
        self.flags = self.flags.union(EntryFlags::DETAIL_PLACEHOLDER);
        self
    }

    /// Pane role, if any.
    pub fn role(&self) -> Option<PaneRole> {
        self.pane.map(|p| p.role)
    }

    /// Group key, if any.
    pub fn group(&self) -> Option<GroupKey> {
        self.pane.map(|p| p.group)
    }

    /// Returns `true` if the entry is drawn as an overlay.
    pub fn is_overlay(&self) -> bool {
        self.overlay.is_some()
    }

    /// Returns `true` if the entry asks for the bottom bar.
    pub fn shows_bottom_bar(&self) -> bool {
        self.flags.contains(EntryFlags::BOTTOM_BAR)
    }

    /// Returns `true` if the entry may share a two-pane scene.
    pub fn is_two_pane(&self) -> bool {
        self.flags.contains(EntryFlags::TWO_PANE)
    }

    /// Returns `true` if the entry wants a placeholder second pane.
    pub fn wants_placeholder(&self) -> bool {
        self.flags.contains(EntryFlags::PLACEHOLDER)
    }

    /// Returns `true` if this list entry fills an empty detail slot.
    pub fn provides_detail_placeholder(&self) -> bool {
        self.flags.contains(EntryFlags::DETAIL_PLACEHOLDER)
    }
}

/// A role-tagged stack entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry<K> {
    /// Destination identity.
    pub key: K,
    /// Metadata of the destination's registration.
    pub meta: EntryMeta,
}

impl<K> Entry<K> {
    /// Pair `key` with its metadata.
    pub const fn new(key: K, meta: EntryMeta) -> Self {
        Self { key, meta }
    }
}

/// Maximum number of list-detail panes shown side by side, per width class.
///
/// Used by [`ListDetailStrategy`](crate::strategy::ListDetailStrategy) and by
/// back planning to compute [`PaneShape`](crate::shape::PaneShape)s.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PaneDirective {
    /// Panes on a [`WidthClass::Compact`] window.
    pub compact: u8,
    /// Panes on a [`WidthClass::Medium`] window.
    pub medium: u8,
    /// Panes on a [`WidthClass::Expanded`] window.
    pub expanded: u8,
}

impl Default for PaneDirective {
    fn default() -> Self {
        Self {
            compact: 1,
            medium: 3,
            expanded: 3,
        }
    }
}

impl PaneDirective {
    /// Upper bound on simultaneously visible list-detail panes.
    pub const MAX_PANES: u8 = 3;

    /// Panes available at `width`, clamped to `1..=3`.
    pub fn max_panes(&self, width: WidthClass) -> usize {
        let n = match width {
            WidthClass::Compact => self.compact,
            WidthClass::Medium => self.medium,
            WidthClass::Expanded => self.expanded,
        };
        usize::from(n.clamp(1, Self::MAX_PANES))
    }
}
