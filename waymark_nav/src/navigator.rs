// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The collaborator-facing navigator.
//!
//! ## Overview
//!
//! [`Navigator`] owns the app's [`SectionStack`] and everything derived from
//! it. Screens only ever call [`open`](Navigator::open),
//! [`close`](Navigator::close) and [`switch_section`](Navigator::switch_section);
//! renderers subscribe to [`NavEvent`]s and ask for the
//! [scene](Navigator::scene) at their current width.
//!
//! ## Back handling
//!
//! - A discrete back ([`back`](Navigator::back)) plans with the configured
//!   [`BackPolicy`](waymark_scene::BackPolicy) and pops the planned number of
//!   entries at once, publishing a single event.
//! - A back gesture plans once in
//!   [`begin_back_gesture`](Navigator::begin_back_gesture), reports progress
//!   without touching the stack, and applies the plan only in
//!   [`complete_back_gesture`](Navigator::complete_back_gesture).
//! - While a gesture is in flight, a discrete back or a second gesture is
//!   rejected. Any other mutation cancels the gesture.
//! - Overlays that opted out of back dismissal ignore back entirely.

use waymark_scene::{
    BackGestureTracker, BackPlan, Entry, GestureError, Scene, SceneLayers, SceneSelector,
    SeekTarget, WidthClass, plan_back,
};
use waymark_stack::{PopOutcome, SectionStack, Snapshot};

use crate::config::NavConfig;
use crate::destination::{Destination, DestinationCodec, StartRoute};
use crate::error::{NavError, PersistError};
use crate::observer::{Direction, NavEvent, Observers, SubscriptionId};
use crate::registry::Registry;
use crate::transition::{BOTTOM_NAVIGATION, TransitionContext};

/// Multi-section navigation with adaptive scenes.
///
/// ## Usage
///
/// - Construct with [`Navigator::new`] or [`Navigator::for_session`].
/// - Mutate with [`open`](Self::open), [`close`](Self::close),
///   [`close_while`](Self::close_while), [`switch_section`](Self::switch_section)
///   and [`back`](Self::back).
/// - Render from [`scene`](Self::scene) or [`layers`](Self::layers), passing
///   [`transition_context`](Self::transition_context) down render calls.
/// - Persist with [`save`](Self::save) and [`Navigator::restore`].
pub struct Navigator {
    stack: SectionStack<Destination>,
    registry: Registry,
    config: NavConfig,
    selector: SceneSelector,
    gesture: BackGestureTracker,
    observers: Observers,
    last_direction: Option<Direction>,
}

impl core::fmt::Debug for Navigator {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Navigator")
            .field("stack", &self.stack)
            .field("config", &self.config)
            .field("gesture", &self.gesture)
            .field("subscribers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

impl Navigator {
    /// Create a navigator whose start section is `start`.
    pub fn new(start: Destination, registry: Registry, config: NavConfig) -> Self {
        Self::from_stack(SectionStack::new(start), registry, config)
    }

    /// Create a navigator for a session whose login state is `logged_in`.
    ///
    /// See [`StartRoute::for_session`].
    pub fn for_session(logged_in: Option<bool>, registry: Registry, config: NavConfig) -> Self {
        Self::new(StartRoute::for_session(logged_in), registry, config)
    }

    fn from_stack(stack: SectionStack<Destination>, registry: Registry, config: NavConfig) -> Self {
        Self {
            stack,
            registry,
            selector: config.selector(),
            config,
            gesture: BackGestureTracker::new(),
            observers: Observers::default(),
            last_direction: None,
        }
    }

    /// Configuration in use.
    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    /// Metadata registry in use.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// The underlying back stack.
    pub fn stack(&self) -> &SectionStack<Destination> {
        &self.stack
    }

    /// Active section, for highlighting the selected tab.
    pub fn current_selection(&self) -> Destination {
        *self.stack.active_section()
    }

    /// The flattened stack, oldest first.
    pub fn visible_stack(&self) -> &[Destination] {
        self.stack.visible()
    }

    /// The visible stack tagged with registered metadata.
    pub fn entries(&self) -> Vec<Entry<Destination>> {
        self.registry.entries(self.stack.visible())
    }

    /// Push `destination` onto the active section.
    pub fn open(&mut self, destination: Destination) {
        self.mutate(Direction::Forward, |stack| stack.push(destination));
    }

    /// Pop one entry, returning to the start section from a section root.
    pub fn close(&mut self) -> PopOutcome<Destination> {
        let mut outcome = PopOutcome::AtRoot;
        self.mutate(Direction::Pop, |stack| outcome = stack.pop_last());
        outcome
    }

    /// Pop while any visible entry matches `pred`, stopping at the root.
    ///
    /// Closing every detail at once is `close_while(|d| matches!(d, HomeDetail(_)))`.
    /// Returns the number of entries popped.
    pub fn close_while(&mut self, mut pred: impl FnMut(&Destination) -> bool) -> usize {
        let mut popped = 0;
        self.mutate(Direction::Pop, |stack| {
            while stack.visible().iter().any(&mut pred) && stack.pop_last().changed() {
                popped += 1;
            }
        });
        popped
    }

    /// Select the top-level section `section`.
    pub fn switch_section(&mut self, section: Destination) {
        if !section.is_top_level() {
            log::warn!("switching to {section}, which the bottom bar does not offer");
        }
        self.mutate(Direction::Forward, |stack| stack.switch_section(section));
    }

    /// Replace the active section's history with `history`.
    pub fn replace_section_history(&mut self, history: Vec<Destination>) -> Result<(), NavError> {
        let mut result = Ok(());
        self.mutate(Direction::Forward, |stack| {
            result = stack.replace_section_history(history);
        });
        Ok(result?)
    }

    /// Topmost scene at `width`.
    pub fn scene(&self, width: WidthClass) -> Result<Scene, NavError> {
        self.selector
            .select(&self.entries(), width)
            .ok_or(NavError::NoScene)
    }

    /// Base scene and stacked overlays at `width`.
    pub fn layers(&self, width: WidthClass) -> SceneLayers {
        self.selector.select_layers(&self.entries(), width)
    }

    /// Plan one back action at `width` without applying it.
    pub fn back_plan(&self, width: WidthClass) -> Result<BackPlan, NavError> {
        let entries = self.entries();
        let scene = self
            .selector
            .select(&entries, width)
            .ok_or(NavError::NoScene)?;
        Ok(plan_back(&entries, &scene, self.config.back_policy)?)
    }

    /// Handle a discrete back action at `width`.
    ///
    /// Returns the number of entries popped. `0` means the back action was not
    /// consumed (the stack is at its root, or the top overlay ignores back)
    /// and should be escalated to the platform.
    pub fn back(&mut self, width: WidthClass) -> Result<usize, NavError> {
        if self.gesture.is_in_flight() {
            log::warn!("discrete back rejected: gesture in flight");
            return Err(NavError::GestureInFlight);
        }
        if !self.accepts_back(width)? {
            return Ok(0);
        }
        let plan = self.back_plan(width)?;
        Ok(self.apply(plan))
    }

    /// Start a back gesture at `width`, planning it once.
    ///
    /// Returns `Ok(None)` when back would not be consumed (see [`back`](Self::back)).
    pub fn begin_back_gesture(&mut self, width: WidthClass) -> Result<Option<BackPlan>, NavError> {
        if self.gesture.is_in_flight() {
            log::warn!("back gesture rejected: another is in flight");
            return Err(GestureError::AlreadyInFlight.into());
        }
        if !self.accepts_back(width)? {
            return Ok(None);
        }
        let plan = self.back_plan(width)?;
        self.gesture.begin(plan)?;
        Ok(Some(plan))
    }

    /// Report gesture progress in `0.0..=1.0`.
    pub fn update_back_gesture(&mut self, fraction: f32) -> Result<SeekTarget, NavError> {
        Ok(self.gesture.progress(fraction)?)
    }

    /// Finish the gesture, applying its plan. Returns the number of entries popped.
    pub fn complete_back_gesture(&mut self) -> Result<usize, NavError> {
        let plan = self.gesture.complete()?;
        Ok(self.apply(plan))
    }

    /// Abandon the gesture; the stack is left untouched.
    pub fn cancel_back_gesture(&mut self) -> Result<(), NavError> {
        Ok(self.gesture.cancel()?)
    }

    /// Returns `true` while a back gesture is in flight.
    pub fn is_gesture_in_flight(&self) -> bool {
        self.gesture.is_in_flight()
    }

    /// Call `callback` after every committed change.
    pub fn subscribe(&mut self, callback: impl FnMut(&NavEvent) + 'static) -> SubscriptionId {
        self.observers.subscribe(callback)
    }

    /// Stop calling a subscriber. Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Context for rendering the current scene at `width`.
    ///
    /// The bottom bar is a shared element whenever the current scene shows it.
    pub fn transition_context(&self, width: WidthClass) -> TransitionContext {
        let ctx = match self.last_direction {
            Some(direction) => TransitionContext::new(direction),
            None => TransitionContext::default(),
        };
        match self.scene(width) {
            Ok(scene) if scene.shows_bottom_bar() => ctx.with_shared(BOTTOM_NAVIGATION),
            _ => ctx,
        }
    }

    /// Encode the stack as a JSON snapshot record.
    pub fn save(&self) -> Result<String, PersistError> {
        let snapshot = self.stack.snapshot(&DestinationCodec);
        Ok(serde_json::to_string(&snapshot)?)
    }

    /// Rebuild a navigator from a record written by [`save`](Self::save).
    ///
    /// Fails as a whole on malformed JSON or on any entry that does not decode.
    pub fn restore(json: &str, registry: Registry, config: NavConfig) -> Result<Self, PersistError> {
        let snapshot: Snapshot = serde_json::from_str(json)?;
        let stack = SectionStack::restore(&snapshot, &DestinationCodec)?;
        log::debug!("restored navigation state: {:?}", stack.visible());
        Ok(Self::from_stack(stack, registry, config))
    }

    fn accepts_back(&self, width: WidthClass) -> Result<bool, NavError> {
        match self.scene(width)? {
            Scene::Overlay(o) if !o.request.dismiss_on_back => {
                log::debug!("back ignored: overlay does not dismiss on back");
                Ok(false)
            }
            _ => Ok(true),
        }
    }

    fn apply(&mut self, plan: BackPlan) -> usize {
        let mut popped = 0;
        self.mutate(Direction::Pop, |stack| popped = stack.pop_many(plan.pop_count));
        if popped < plan.pop_count {
            log::debug!(
                "back plan of {} stopped at the root after {popped}",
                plan.pop_count
            );
        }
        popped
    }

    fn mutate(&mut self, direction: Direction, f: impl FnOnce(&mut SectionStack<Destination>)) {
        if self.gesture.cancel().is_ok() {
            log::warn!("stack changed during a back gesture; cancelled it");
        }
        let before = self.stack.revision();
        f(&mut self.stack);
        if self.stack.revision() == before {
            return;
        }
        self.last_direction = Some(direction);
        let event = NavEvent {
            revision: self.stack.revision(),
            direction,
            visible: self.stack.visible().to_vec(),
        };
        self.observers.publish(&event);
    }
}
