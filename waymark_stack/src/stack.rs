// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core stack implementation: per-section histories and the flattened visible stack.

use alloc::collections::BTreeMap;
use alloc::format;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Debug;

use crate::error::StackError;

/// Result of a single [`SectionStack::pop_last`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PopOutcome<K> {
    /// The last entry of the active section was removed.
    Popped(K),
    /// The active section was down to its root, so the start section became active again.
    ///
    /// The history of the section that was left is kept as-is.
    ReturnedToStart,
    /// The start section is active and holds only its root. Nothing changed.
    AtRoot,
}

impl<K> PopOutcome<K> {
    /// Returns `true` if the pop changed the visible stack.
    pub fn changed(&self) -> bool {
        !matches!(self, Self::AtRoot)
    }
}

/// Navigation back stack with one independent history per top-level section.
///
/// ## Model
///
/// - Each section (a tab, typically) owns an ordered history, oldest first.
///   A history is created lazily on the first switch to its section and always
///   starts out as `[section]`.
/// - The *start* section is fixed at construction. While it is active the
///   visible stack is its history; otherwise the visible stack is the start
///   section's history followed by the active section's history.
/// - Every mutation recomputes the visible stack eagerly and bumps
///   [`revision`](Self::revision), so observers can compare revisions instead
///   of diffing stacks.
///
/// ## Popping
///
/// [`pop_last`](Self::pop_last) removes the last entry of the active section.
/// When the active section is down to its root it hands control back to the
/// start section instead, and at the start section's root it is a no-op: the
/// root destination can never be popped.
#[derive(Clone, PartialEq, Eq)]
pub struct SectionStack<K> {
    start: K,
    active: K,
    sections: BTreeMap<K, Vec<K>>,
    visible: Vec<K>,
    revision: u64,
}

impl<K: Debug> Debug for SectionStack<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SectionStack")
            .field("start", &self.start)
            .field("active", &self.active)
            .field("sections", &self.sections.len())
            .field("visible", &self.visible)
            .field("revision", &self.revision)
            .finish_non_exhaustive()
    }
}

impl<K: Clone + Ord + Debug> SectionStack<K> {
    /// Create a stack whose start section is `start`, with history `[start]`.
    pub fn new(start: K) -> Self {
        let mut sections = BTreeMap::new();
        sections.insert(start.clone(), vec![start.clone()]);
        Self {
            visible: vec![start.clone()],
            active: start.clone(),
            start,
            sections,
            revision: 0,
        }
    }

    /// Rebuild a stack from already-validated parts.
    ///
    /// `sections` must hold a history for both `start` and `active`.
    pub(crate) fn from_parts(start: K, active: K, sections: BTreeMap<K, Vec<K>>) -> Self {
        let mut stack = Self {
            visible: Vec::new(),
            active,
            start,
            sections,
            revision: 0,
        };
        stack.rebuild_visible();
        stack
    }

    /// The start (root) section.
    pub fn start_section(&self) -> &K {
        &self.start
    }

    /// The currently active section, e.g. for highlighting the selected tab.
    pub fn active_section(&self) -> &K {
        &self.active
    }

    /// The flattened, currently displayed stack. The last element is the most
    /// recently pushed destination of the active section.
    pub fn visible(&self) -> &[K] {
        &self.visible
    }

    /// Monotonic counter bumped by every mutation that changed the stack.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns `true` when the start section is active and holds only its root.
    ///
    /// In this state [`pop_last`](Self::pop_last) is a no-op.
    pub fn is_at_root(&self) -> bool {
        self.active == self.start && self.active_history().len() <= 1
    }

    /// History of `section`, oldest first.
    ///
    /// Fails with [`StackError::UnknownSection`] if the section was never switched to.
    pub fn history(&self, section: &K) -> Result<&[K], StackError> {
        self.sections
            .get(section)
            .map(Vec::as_slice)
            .ok_or_else(|| StackError::UnknownSection {
                section: format!("{section:?}"),
            })
    }

    /// All section histories, ordered by section key.
    pub fn sections(&self) -> impl Iterator<Item = (&K, &[K])> + '_ {
        self.sections.iter().map(|(k, v)| (k, v.as_slice()))
    }

    /// Make `section` active, creating its history as `[section]` on first use.
    ///
    /// Switching to the section that is already active changes nothing.
    pub fn switch_section(&mut self, section: K) {
        if section == self.active {
            log::trace!("switch to {section:?} ignored: already active");
            return;
        }
        if !self.sections.contains_key(&section) {
            log::debug!("creating history for section {section:?}");
            self.sections.insert(section.clone(), vec![section.clone()]);
        }
        log::debug!("switching section {:?} -> {section:?}", self.active);
        self.active = section;
        self.commit();
    }

    /// Append `key` to the active section's history.
    ///
    /// There is no de-duplication; pushing the same key twice yields two entries.
    pub fn push(&mut self, key: K) {
        log::debug!("push {key:?} onto section {:?}", self.active);
        self.active_history_mut().push(key);
        self.commit();
    }

    /// Pop one entry, falling back to the start section when the active one is at its root.
    pub fn pop_last(&mut self) -> PopOutcome<K> {
        let is_start = self.active == self.start;
        let history = self.active_history_mut();
        let outcome = if history.len() > 1 {
            match history.pop() {
                Some(key) => PopOutcome::Popped(key),
                None => PopOutcome::AtRoot,
            }
        } else if !is_start {
            self.active = self.start.clone();
            PopOutcome::ReturnedToStart
        } else {
            PopOutcome::AtRoot
        };
        match &outcome {
            PopOutcome::Popped(key) => log::debug!("popped {key:?}"),
            PopOutcome::ReturnedToStart => log::debug!("returned to start section {:?}", self.start),
            PopOutcome::AtRoot => log::trace!("pop ignored: at root"),
        }
        if outcome.changed() {
            self.commit();
        }
        outcome
    }

    /// Pop up to `count` times, stopping early at the root.
    ///
    /// Returns how many pops changed the stack. Each effective pop shrinks the
    /// visible stack by exactly one entry.
    pub fn pop_many(&mut self, count: usize) -> usize {
        let mut changed = 0;
        for _ in 0..count {
            if !self.pop_last().changed() {
                break;
            }
            changed += 1;
        }
        changed
    }

    /// Pop while the last visible entry matches `pred`, stopping at the root.
    ///
    /// Returns how many pops changed the stack.
    pub fn pop_while(&mut self, mut pred: impl FnMut(&K) -> bool) -> usize {
        let mut changed = 0;
        while self.visible.last().is_some_and(&mut pred) {
            if !self.pop_last().changed() {
                break;
            }
            changed += 1;
        }
        changed
    }

    /// Replace the active section's whole history.
    ///
    /// The first element need not be the section key itself. An empty
    /// sequence is rejected with [`StackError::EmptyHistory`] and leaves the
    /// stack untouched.
    pub fn replace_section_history(&mut self, history: Vec<K>) -> Result<(), StackError> {
        if history.is_empty() {
            return Err(StackError::EmptyHistory);
        }
        log::debug!("replacing history of {:?} with {history:?}", self.active);
        let active = self.active.clone();
        self.sections.insert(active, history);
        self.commit();
        Ok(())
    }

    fn active_history(&self) -> &[K] {
        self.sections.get(&self.active).map_or(&[], Vec::as_slice)
    }

    fn active_history_mut(&mut self) -> &mut Vec<K> {
        // The active section always has a history: `new` and `switch_section`
        // create one before activating a section, and `restore` rejects records without one.
        self.sections.entry(self.active.clone()).or_default()
    }

    fn commit(&mut self) {
        self.rebuild_visible();
        self.revision = self.revision.wrapping_add(1);
    }

    fn rebuild_visible(&mut self) {
        self.visible.clear();
        if self.active != self.start
            && let Some(start) = self.sections.get(&self.start)
        {
            self.visible.extend_from_slice(start);
        }
        if let Some(active) = self.sections.get(&self.active) {
            self.visible.extend_from_slice(active);
        }
    }
}
