// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scene shape: which list-detail panes are expanded for a destination history.
//!
//! ## Algorithm
//!
//! Given a history (oldest first) and a budget of `n` panes:
//!
//! 1. Walk the history from newest to oldest. Each role that is not yet
//!    expanded becomes expanded, until `n` panes are expanded.
//! 2. If budget remains, the detail pane is still collapsed, and the newest
//!    list entry provides a detail placeholder, the detail pane is expanded
//!    and shows that placeholder.
//!
//! The newest entry's role is therefore always expanded, and on a one-pane
//! window it is the only one.

use crate::types::{Entry, PaneRole};

bitflags::bitflags! {
    /// Set of expanded list-detail panes.
    ///
    /// Two scenes with equal shapes look the same apart from pane content;
    /// back planning compares shapes to find the next visible change.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct PaneShape: u8 {
        /// The list pane is expanded.
        const LIST   = 0b001;
        /// The detail pane is expanded.
        const DETAIL = 0b010;
        /// The extra pane is expanded.
        const EXTRA  = 0b100;
    }
}

impl From<PaneRole> for PaneShape {
    fn from(role: PaneRole) -> Self {
        match role {
            PaneRole::List => Self::LIST,
            PaneRole::Detail => Self::DETAIL,
            PaneRole::Extra => Self::EXTRA,
        }
    }
}

impl PaneShape {
    /// Number of expanded panes.
    pub fn expanded_count(self) -> usize {
        self.bits().count_ones() as usize
    }

    /// Returns `true` if the pane for `role` is expanded.
    pub fn shows(self, role: PaneRole) -> bool {
        self.contains(role.into())
    }

    /// Compute the shape of `history` with room for `max_panes` panes.
    ///
    /// Entries without a pane role are skipped.
    pub fn of_history<K>(history: &[Entry<K>], max_panes: usize) -> Self {
        let mut shape = Self::empty();
        for role in history.iter().rev().filter_map(|e| e.meta.role()) {
            if shape.expanded_count() >= max_panes {
                break;
            }
            shape |= Self::from(role);
        }
        if shape.expanded_count() < max_panes && !shape.contains(Self::DETAIL) {
            let placeholder = history
                .iter()
                .rev()
                .find(|e| e.meta.role() == Some(PaneRole::List))
                .is_some_and(|e| e.meta.provides_detail_placeholder());
            if placeholder {
                shape |= Self::DETAIL;
            }
        }
        shape
    }
}
