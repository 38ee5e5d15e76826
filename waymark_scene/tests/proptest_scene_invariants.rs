// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property-based invariant tests for scene selection and back planning.
//!
//! 1. Every non-empty stack gets exactly one scene, and it consumes a
//!    contiguous suffix of the stack.
//! 2. A trailing overlay always wins, at every width, and never overlays itself.
//! 3. Each list-detail pane shows the newest entry of its role within the run.
//! 4. A back plan never pops more than the stack holds, and always pops something.
//!    Outside list-detail scenes it pops exactly the consumed entries.

use proptest::prelude::*;
use waymark_scene::{
    BackPolicy, DetailPane, Entry, EntryMeta, PaneRole, Scene, SceneSelector, WidthClass,
    plan_back,
};

fn meta_strategy() -> impl Strategy<Value = EntryMeta> {
    prop_oneof![
        Just(EntryMeta::NONE),
        Just(EntryMeta::list_pane("a").with_bottom_bar()),
        Just(EntryMeta::list_pane("a").with_detail_placeholder()),
        Just(EntryMeta::detail_pane("a")),
        Just(EntryMeta::extra_pane("a")),
        Just(EntryMeta::list_pane("b")),
        Just(EntryMeta::detail_pane("b")),
        Just(EntryMeta::NONE.two_pane()),
        Just(EntryMeta::NONE.two_pane().with_placeholder()),
        Just(EntryMeta::overlay()),
    ]
}

fn stack_strategy() -> impl Strategy<Value = Vec<Entry<u8>>> {
    prop::collection::vec((0u8..6, meta_strategy()), 1..16)
        .prop_map(|v| v.into_iter().map(|(k, m)| Entry::new(k, m)).collect())
}

fn width_strategy() -> impl Strategy<Value = WidthClass> {
    prop_oneof![
        Just(WidthClass::Compact),
        Just(WidthClass::Medium),
        Just(WidthClass::Expanded),
    ]
}

fn policy_strategy() -> impl Strategy<Value = BackPolicy> {
    prop_oneof![
        Just(BackPolicy::PopLatest),
        Just(BackPolicy::PopUntilSceneValueChange),
        Just(BackPolicy::PopUntilCurrentDestinationChange),
        Just(BackPolicy::PopUntilContentChange),
    ]
}

proptest! {
    #[test]
    fn scene_consumes_a_contiguous_suffix(stack in stack_strategy(), width in width_strategy()) {
        let scene = SceneSelector::default().select(&stack, width);
        prop_assert!(scene.is_some());
        let scene = scene.unwrap();
        let consumed = scene.consumed();
        prop_assert!(!consumed.is_empty());
        prop_assert_eq!(consumed.end, stack.len());
        prop_assert_eq!(scene.previous_entries().end, consumed.start);
        for i in scene.rendered() {
            prop_assert!(consumed.contains(&i));
        }
    }
}

proptest! {
    #[test]
    fn trailing_overlay_wins(mut stack in stack_strategy(), width in width_strategy()) {
        stack.push(Entry::new(99, EntryMeta::overlay()));
        let last = stack.len() - 1;
        match SceneSelector::default().select(&stack, width) {
            Some(Scene::Overlay(o)) => {
                prop_assert_eq!(o.index, last);
                prop_assert_eq!(o.overlaid_entries(), 0..last);
            }
            other => prop_assert!(false, "expected overlay, got {:?}", other),
        }
    }
}

proptest! {
    #[test]
    fn newest_entry_of_each_role_wins(stack in stack_strategy(), width in width_strategy()) {
        if let Some(Scene::ListDetail(ld)) = SceneSelector::default().select(&stack, width) {
            let newest = |role| {
                ld.consumed
                    .clone()
                    .rev()
                    .find(|&i| stack[i].meta.role() == Some(role))
            };
            prop_assert_eq!(Some(ld.list), newest(PaneRole::List));
            match ld.detail {
                DetailPane::Entry(i) => prop_assert_eq!(Some(i), newest(PaneRole::Detail)),
                DetailPane::Placeholder | DetailPane::Hidden => {
                    prop_assert_eq!(newest(PaneRole::Detail), None);
                }
            }
            prop_assert_eq!(ld.extra, newest(PaneRole::Extra));
            for i in ld.consumed.clone() {
                prop_assert_eq!(stack[i].meta.group(), Some(ld.group));
            }
        }
    }
}

proptest! {
    #[test]
    fn back_plan_is_bounded(
        stack in stack_strategy(),
        width in width_strategy(),
        policy in policy_strategy(),
    ) {
        let scene = SceneSelector::default().select(&stack, width).unwrap();
        let plan = plan_back(&stack, &scene, policy).unwrap();
        prop_assert!(plan.pop_count >= 1);
        prop_assert!(plan.pop_count <= stack.len());
        prop_assert!(plan.pop_count <= scene.consumed().len());
        match &scene {
            Scene::ListDetail(_) => {
                if policy == BackPolicy::PopLatest {
                    prop_assert_eq!(plan.pop_count, 1);
                }
            }
            // Leaving any other scene pops exactly what it consumes.
            _ => {
                prop_assert_eq!(plan.pop_count, stack.len() - scene.previous_entries().end);
                prop_assert_eq!(plan.previous_shape, None);
            }
        }
    }
}
