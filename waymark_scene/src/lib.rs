// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Waymark Scene: adaptive scene selection and back planning.
//!
//! ## Overview
//!
//! Given a role-tagged navigation stack (oldest entry first) and the current
//! [width class](WidthClass), this crate decides how the top of the stack is
//! arranged on screen and how a back action collapses that arrangement.
//!
//! - [`types`]: role metadata ([`EntryMeta`]), width classes and pane budgets.
//! - [`shape`]: which list-detail panes are expanded for a history.
//! - [`scene`]: the computed [`Scene`] variants.
//! - [`strategy`]: the [`SceneStrategy`] seam and the built-in strategies,
//!   composed by [`SceneSelector`] as overlay, list-detail, then two-pane.
//! - [`back`]: [`plan_back`] and the [`BackPolicy`] variants.
//! - [`gesture`]: [`BackGestureTracker`] for cancelable back gestures.
//!
//! Everything here is a pure function of its inputs except the gesture
//! tracker, which holds at most one plan.
//!
//! ## Example
//!
//! ```
//! use waymark_scene::{
//!     BackPolicy, DetailPane, Entry, EntryMeta, PaneShape, Scene, SceneSelector, WidthClass,
//!     plan_back,
//! };
//!
//! let list = EntryMeta::list_pane("mail").with_bottom_bar();
//! let detail = EntryMeta::detail_pane("mail");
//! let stack = [
//!     Entry::new("inbox", list),
//!     Entry::new("message/1", detail),
//!     Entry::new("message/2", detail),
//! ];
//!
//! let selector = SceneSelector::default();
//! let Some(Scene::ListDetail(scene)) = selector.select(&stack, WidthClass::Expanded) else {
//!     unreachable!();
//! };
//! // The newest detail shadows the older one.
//! assert_eq!(scene.detail, DetailPane::Entry(2));
//! assert_eq!(scene.shape, PaneShape::LIST | PaneShape::DETAIL);
//!
//! // Going back to the list takes two pops under this policy.
//! let plan = plan_back(
//!     &stack,
//!     &Scene::ListDetail(scene),
//!     BackPolicy::PopUntilCurrentDestinationChange,
//! )
//! .unwrap();
//! assert_eq!(plan.pop_count, 2);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod back;
pub mod gesture;
pub mod scene;
pub mod shape;
pub mod strategy;
pub mod types;

pub use back::{BackError, BackPlan, BackPolicy, plan_back};
pub use gesture::{BackGestureTracker, GestureError, SeekTarget};
pub use scene::{
    DetailPane, ListDetailScene, OverlayPresentation, OverlayScene, Scene, SceneKey, SceneLayers,
    SinglePaneScene, TwoPaneScene,
};
pub use shape::PaneShape;
pub use strategy::{
    ListDetailStrategy, OverlayStrategy, SceneSelector, SceneStrategy, Then, TwoPaneStrategy,
};
pub use types::{
    Entry, EntryFlags, EntryMeta, GroupKey, OverlayRequest, PaneDirective, PaneMeta, PaneRole,
    WidthClass,
};
