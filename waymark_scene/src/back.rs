// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Back planning: how many entries one back action removes.
//!
//! ## Overview
//!
//! A list-detail scene may show several entries at once, so popping the top
//! entry does not always change what is on screen. [`plan_back`] walks the
//! scene's run backwards from the second-to-last entry until the chosen
//! [`BackPolicy`] sees a change, and reports how many entries to pop to get
//! there along with the shape of the resulting scene.
//!
//! When the walk reaches the start of the run without a change, the back
//! action leaves the scene entirely: the plan pops the whole run and has no
//! previous shape, and the enclosing container handles it.
//!
//! Other scenes never handle back internally; their plan pops every entry
//! the scene consumes, which is one except for a two-pane pair.
//!
//! Planning never mutates anything. Callers apply [`BackPlan::pop_count`]
//! to their stack.

use crate::scene::{ListDetailScene, Scene};
use crate::shape::PaneShape;
use crate::types::Entry;

/// Which change a back action must produce before it stops popping.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BackPolicy {
    /// Pop exactly one entry of a list-detail scene.
    PopLatest,
    /// Pop until the set of expanded panes changes.
    PopUntilSceneValueChange,
    /// Pop until the top entry's pane role changes.
    #[default]
    PopUntilCurrentDestinationChange,
    /// Pop until the top entry's key changes, or the set of expanded panes does.
    PopUntilContentChange,
}

/// Result of planning one back action.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BackPlan {
    /// Entries to remove from the top of the stack.
    pub pop_count: usize,
    /// Shape of the list-detail scene after popping, or `None` when the back
    /// action leaves the current scene.
    pub previous_shape: Option<PaneShape>,
    /// Stack length the plan was computed for.
    pub stack_len: usize,
}

impl BackPlan {
    /// Returns `true` if the current scene absorbs the back action.
    pub fn is_handled_in_scene(&self) -> bool {
        self.previous_shape.is_some()
    }

    /// Returns `true` if applying the plan would empty the stack; the back
    /// action must then be escalated past the navigation container.
    pub fn is_terminal(&self) -> bool {
        self.pop_count >= self.stack_len
    }
}

/// Errors from [`plan_back`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BackError {
    /// There is nothing to go back from; the stack always holds a root.
    #[error("cannot plan back on an empty stack")]
    EmptyStack,
}

/// Plan one back action over `entries` showing `scene`, under `policy`.
///
/// `scene` must have been selected for `entries`.
pub fn plan_back<K: PartialEq>(
    entries: &[Entry<K>],
    scene: &Scene,
    policy: BackPolicy,
) -> Result<BackPlan, BackError> {
    if entries.is_empty() {
        return Err(BackError::EmptyStack);
    }
    let plan = match scene {
        Scene::ListDetail(ld) => plan_list_detail(entries, ld, policy),
        Scene::Overlay(_) | Scene::TwoPane(_) | Scene::Single(_) => BackPlan {
            pop_count: entries.len() - scene.previous_entries().end.min(entries.len()),
            previous_shape: None,
            stack_len: entries.len(),
        },
    };
    log::trace!("back plan under {:?}: {:?}", policy, plan);
    Ok(plan)
}

fn plan_list_detail<K: PartialEq>(
    entries: &[Entry<K>],
    scene: &ListDetailScene,
    policy: BackPolicy,
) -> BackPlan {
    let stack_len = entries.len();
    let start = scene.consumed.start.min(stack_len - 1);
    let run = &entries[start..];
    let top = run.len() - 1;
    let tail = &run[top];
    let shape_at = |i: usize| PaneShape::of_history(&run[..=i], scene.max_panes);

    let found = (0..top).rev().find(|&i| {
        let changed = match policy {
            BackPolicy::PopLatest => true,
            BackPolicy::PopUntilSceneValueChange => shape_at(i) != scene.shape,
            BackPolicy::PopUntilCurrentDestinationChange => {
                run[i].meta.role() != tail.meta.role()
            }
            BackPolicy::PopUntilContentChange => {
                run[i].key != tail.key || shape_at(i) != scene.shape
            }
        };
        log::trace!("back walk: index {} changed={}", start + i, changed);
        changed
    });

    match found {
        Some(i) => BackPlan {
            pop_count: top - i,
            previous_shape: Some(shape_at(i)),
            stack_len,
        },
        None => BackPlan {
            pop_count: run.len(),
            previous_shape: None,
            stack_len,
        },
    }
}
