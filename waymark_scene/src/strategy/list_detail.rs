// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use crate::scene::{DetailPane, ListDetailScene, Scene};
use crate::shape::PaneShape;
use crate::strategy::SceneStrategy;
use crate::types::{Entry, GroupKey, PaneDirective, PaneRole, WidthClass};

/// Arranges the tail run of one list-detail group into up to three panes.
///
/// ## Selection
///
/// - The run is the longest suffix of the stack whose entries all have a
///   pane role in the same group as the last entry. Any entry of another
///   group, or without a role, ends the run.
/// - The last entry of each role wins its pane; earlier entries of that role
///   stay on the stack for back navigation but are not rendered.
/// - A run without a list entry is declined.
/// - Expanded panes follow [`PaneShape::of_history`] with the budget given by
///   the [`PaneDirective`] for the current width.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ListDetailStrategy {
    directive: PaneDirective,
}

impl ListDetailStrategy {
    /// Create a strategy with the given pane budget per width.
    pub const fn new(directive: PaneDirective) -> Self {
        Self { directive }
    }

    /// Pane budget per width.
    pub fn directive(&self) -> PaneDirective {
        self.directive
    }
}

/// Range and group of the list-detail run ending at the last entry.
fn group_run<K>(entries: &[Entry<K>]) -> Option<(Range<usize>, GroupKey)> {
    let group = entries.last()?.meta.group()?;
    let start = entries
        .iter()
        .rposition(|e| e.meta.group() != Some(group))
        .map_or(0, |i| i + 1);
    Some((start..entries.len(), group))
}

impl SceneStrategy for ListDetailStrategy {
    fn calculate<K>(&self, entries: &[Entry<K>], width: WidthClass) -> Option<Scene> {
        let (consumed, group) = group_run(entries)?;
        let start = consumed.start;
        let run = &entries[consumed.clone()];
        let last_of = |role| {
            run.iter()
                .rposition(|e| e.meta.role() == Some(role))
                .map(|i| start + i)
        };
        let Some(list) = last_of(PaneRole::List) else {
            log::trace!("list-detail: run of {:?} has no list entry", group);
            return None;
        };
        let max_panes = self.directive.max_panes(width);
        let shape = PaneShape::of_history(run, max_panes);
        let detail = match last_of(PaneRole::Detail) {
            Some(i) => DetailPane::Entry(i),
            None if shape.contains(PaneShape::DETAIL) => DetailPane::Placeholder,
            None => DetailPane::Hidden,
        };
        Some(Scene::ListDetail(ListDetailScene {
            group,
            consumed,
            list,
            detail,
            extra: last_of(PaneRole::Extra),
            shape,
            max_panes,
            bottom_bar: run.iter().any(|e| e.meta.shows_bottom_bar()),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EntryMeta;
    use alloc::vec;
    use alloc::vec::Vec;

    fn entries(metas: &[EntryMeta]) -> Vec<Entry<usize>> {
        metas
            .iter()
            .enumerate()
            .map(|(i, m)| Entry::new(i, *m))
            .collect()
    }

    fn list_detail(scene: Option<Scene>) -> ListDetailScene {
        match scene {
            Some(Scene::ListDetail(ld)) => ld,
            other => panic!("expected list-detail scene, got {other:?}"),
        }
    }

    const LIST: EntryMeta = EntryMeta::list_pane("home").with_bottom_bar();
    const DETAIL: EntryMeta = EntryMeta::detail_pane("home");
    const EXTRA: EntryMeta = EntryMeta::extra_pane("home");

    #[test]
    fn last_detail_wins() {
        let stack = entries(&[LIST, DETAIL, DETAIL]);
        let ld = list_detail(ListDetailStrategy::default().calculate(&stack, WidthClass::Expanded));
        assert_eq!(ld.list, 0);
        assert_eq!(ld.detail, DetailPane::Entry(2));
        assert_eq!(ld.consumed, 0..3);
        assert!(ld.bottom_bar);
        assert_eq!(Scene::ListDetail(ld).rendered(), vec![0, 2]);
    }

    #[test]
    fn run_stops_at_other_group() {
        let stack = entries(&[
            EntryMeta::list_pane("profile"),
            EntryMeta::detail_pane("profile"),
            LIST,
            DETAIL,
        ]);
        let ld = list_detail(ListDetailStrategy::default().calculate(&stack, WidthClass::Medium));
        assert_eq!(ld.group, GroupKey("home"));
        assert_eq!(ld.consumed, 2..4);
        assert_eq!(ld.list, 2);
    }

    #[test]
    fn run_stops_at_entry_without_role() {
        let stack = entries(&[LIST, EntryMeta::NONE, DETAIL]);
        // The run is just the detail entry, which has no list to anchor it.
        assert_eq!(
            ListDetailStrategy::default().calculate(&stack, WidthClass::Expanded),
            None
        );
    }

    #[test]
    fn trailing_entry_without_role_declines() {
        let stack = entries(&[LIST, EntryMeta::NONE]);
        assert_eq!(
            ListDetailStrategy::default().calculate(&stack, WidthClass::Expanded),
            None
        );
    }

    #[test]
    fn compact_shows_only_the_tail_pane() {
        let stack = entries(&[LIST, DETAIL, EXTRA]);
        let ld = list_detail(ListDetailStrategy::default().calculate(&stack, WidthClass::Compact));
        assert_eq!(ld.shape, PaneShape::EXTRA);
        assert_eq!(ld.max_panes, 1);
        assert_eq!(Scene::ListDetail(ld).rendered(), vec![2]);
    }

    #[test]
    fn placeholder_fills_missing_detail_on_wide_windows() {
        let stack = entries(&[LIST.with_detail_placeholder()]);
        let strategy = ListDetailStrategy::default();
        let wide = list_detail(strategy.calculate(&stack, WidthClass::Medium));
        assert_eq!(wide.detail, DetailPane::Placeholder);
        assert_eq!(wide.shape, PaneShape::LIST | PaneShape::DETAIL);
        let narrow = list_detail(strategy.calculate(&stack, WidthClass::Compact));
        assert_eq!(narrow.detail, DetailPane::Hidden);
        assert_eq!(narrow.shape, PaneShape::LIST);
    }

    #[test]
    fn directive_limits_panes() {
        let stack = entries(&[LIST, DETAIL, EXTRA]);
        let strategy = ListDetailStrategy::new(PaneDirective {
            compact: 1,
            medium: 2,
            expanded: 3,
        });
        let medium = list_detail(strategy.calculate(&stack, WidthClass::Medium));
        assert_eq!(medium.shape, PaneShape::DETAIL | PaneShape::EXTRA);
        let expanded = list_detail(strategy.calculate(&stack, WidthClass::Expanded));
        assert_eq!(expanded.shape, PaneShape::all());
        assert_eq!(expanded.extra, Some(2));
    }
}
